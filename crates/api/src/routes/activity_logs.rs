//! Activity log route handlers.
//!
//! Most rows are written by the capability guard after a mutation; the
//! create endpoint remains for clients that log their own actions.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{CreateActivityLogRequest, CreatedResponse, MessageResponse};
use persistence::repositories::ActivityLogRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/activityLog", get(list_logs).post(create_log))
        .route("/api/activityLog/:id", get(get_log).delete(delete_log))
}

fn repo(state: &AppState) -> ActivityLogRepository {
    ActivityLogRepository::new(state.pool.clone())
}

async fn list_logs(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

async fn get_log(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let log = repo(&state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Activity log not found".to_string()))?;
    Ok(Json(log))
}

async fn create_log(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateActivityLogRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let log = repo(&state)
        .create(request.user_id, request.action.trim(), request.timestamp)
        .await?;

    info!(log_id = log.log_id, user_id = log.user_id, "Activity log created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Activity log created successfully",
            log.log_id,
        )),
    ))
}

async fn delete_log(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    if !repo(&state).delete(id).await? {
        return Err(ApiError::NotFound("Activity log not found".to_string()));
    }

    info!(log_id = id, "Activity log deleted");
    Ok(Json(MessageResponse::new("Activity log deleted successfully")))
}
