//! Collection schedule route handlers.
//!
//! Create and update check that the wastebin and truck exist inside the
//! same transaction as the write; a missing one yields `404` naming it.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{CreatedResponse, MessageResponse, ScheduleRequest};
use persistence::repositories::ScheduleRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/schedule", get(list_schedules).post(create_schedule))
        .route(
            "/api/schedule/:id",
            get(get_schedule).put(update_schedule).delete(delete_schedule),
        )
}

fn repo(state: &AppState) -> ScheduleRepository {
    ScheduleRepository::new(state.pool.clone())
}

async fn list_schedules(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

async fn get_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let schedule = repo(&state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Collection schedule not found".to_string()))?;
    Ok(Json(schedule))
}

async fn create_schedule(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<ScheduleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let schedule = repo(&state).create(&request).await?;

    info!(
        schedule_id = schedule.schedule_id,
        wastebin_id = schedule.wastebin_id,
        truck_id = schedule.truck_id,
        collection_time = %schedule.collection_time,
        "Collection schedule created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Collection schedule created successfully",
            schedule.schedule_id,
        )),
    ))
}

async fn update_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<ScheduleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let schedule = repo(&state)
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Collection schedule not found".to_string()))?;

    info!(schedule_id = schedule.schedule_id, "Collection schedule updated");

    Ok(Json(MessageResponse::new(
        "Collection schedule updated successfully",
    )))
}

async fn delete_schedule(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = repo(&state)
        .delete(id)
        .await
        .map_err(ApiError::on_delete("Collection schedule"))?;

    if !deleted {
        return Err(ApiError::NotFound(
            "Collection schedule not found".to_string(),
        ));
    }

    info!(schedule_id = id, "Collection schedule deleted");
    Ok(Json(MessageResponse::new(
        "Collection schedule deleted successfully",
    )))
}
