//! Garbage truck route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{CountResponse, CreatedResponse, GarbageTruckRequest, MessageResponse};
use persistence::repositories::GarbageTruckRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/garbageTruck", get(list_trucks).post(create_truck))
        .route("/api/garbageTruck/total", get(count_trucks))
        .route(
            "/api/garbageTruck/:id",
            get(get_truck).put(update_truck).delete(delete_truck),
        )
}

fn repo(state: &AppState) -> GarbageTruckRepository {
    GarbageTruckRepository::new(state.pool.clone())
}

async fn list_trucks(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

async fn count_trucks(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let total = repo(&state).count().await?;
    Ok(Json(CountResponse { total }))
}

async fn get_truck(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let truck = repo(&state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Garbage truck not found".to_string()))?;
    Ok(Json(truck))
}

async fn create_truck(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GarbageTruckRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let truck = repo(&state).create(&request).await?;

    info!(
        truck_id = truck.truck_id,
        license_plate = %truck.license_plate,
        "Garbage truck created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Garbage truck created successfully",
            truck.truck_id,
        )),
    ))
}

async fn update_truck(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<GarbageTruckRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let truck = repo(&state)
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Garbage truck not found".to_string()))?;

    info!(truck_id = truck.truck_id, status = %truck.truck_status, "Garbage truck updated");

    Ok(Json(MessageResponse::new("Garbage truck updated successfully")))
}

async fn delete_truck(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = repo(&state)
        .delete(id)
        .await
        .map_err(ApiError::on_delete("Garbage truck"))?;

    if !deleted {
        return Err(ApiError::NotFound("Garbage truck not found".to_string()));
    }

    info!(truck_id = id, "Garbage truck deleted");
    Ok(Json(MessageResponse::new("Garbage truck deleted successfully")))
}
