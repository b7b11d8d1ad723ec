//! Service request route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{CountResponse, CreatedResponse, MessageResponse, ServiceRequestPayload};
use persistence::repositories::ServiceRequestRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/requests", get(list_requests).post(create_request))
        .route("/api/requests/total", get(count_requests))
        .route("/api/requests/pending", get(count_pending))
        .route(
            "/api/requests/:id",
            get(get_request).put(update_request).delete(delete_request),
        )
}

fn repo(state: &AppState) -> ServiceRequestRepository {
    ServiceRequestRepository::new(state.pool.clone())
}

async fn list_requests(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

async fn count_requests(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let total = repo(&state).count().await?;
    Ok(Json(CountResponse { total }))
}

/// GET /api/requests/pending
async fn count_pending(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let total = repo(&state).count_pending().await?;
    Ok(Json(CountResponse { total }))
}

async fn get_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let request = repo(&state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Request not found".to_string()))?;
    Ok(Json(request))
}

async fn create_request(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<ServiceRequestPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let request = repo(&state).create(&payload).await?;

    info!(
        request_id = request.request_id,
        request_type = %request.request_type,
        user_id = request.user_id,
        wastebin_id = request.wastebin_id,
        "Service request created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Request created successfully",
            request.request_id,
        )),
    ))
}

async fn update_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<ServiceRequestPayload>,
) -> Result<impl IntoResponse, ApiError> {
    let request = repo(&state)
        .update(id, &payload)
        .await?
        .ok_or_else(|| ApiError::NotFound("Request not found".to_string()))?;

    info!(
        request_id = request.request_id,
        status = %request.request_status,
        "Service request updated"
    );

    Ok(Json(MessageResponse::new("Request updated successfully")))
}

async fn delete_request(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = repo(&state)
        .delete(id)
        .await
        .map_err(ApiError::on_delete("Request"))?;

    if !deleted {
        return Err(ApiError::NotFound("Request not found".to_string()));
    }

    info!(request_id = id, "Service request deleted");
    Ok(Json(MessageResponse::new("Request deleted successfully")))
}
