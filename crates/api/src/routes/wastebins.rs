//! Waste bin route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{CountResponse, CreatedResponse, MessageResponse, WastebinRequest};
use persistence::repositories::WastebinRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/wastebin", get(list_wastebins).post(create_wastebin))
        .route("/api/wastebin/total", get(count_wastebins))
        .route(
            "/api/wastebin/:id",
            get(get_wastebin).put(update_wastebin).delete(delete_wastebin),
        )
}

fn repo(state: &AppState) -> WastebinRepository {
    WastebinRepository::new(state.pool.clone())
}

/// GET /api/wastebin
async fn list_wastebins(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

/// GET /api/wastebin/total
async fn count_wastebins(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let total = repo(&state).count().await?;
    Ok(Json(CountResponse { total }))
}

/// GET /api/wastebin/:id
async fn get_wastebin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let bin = repo(&state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Wastebin not found".to_string()))?;
    Ok(Json(bin))
}

/// POST /api/wastebin
async fn create_wastebin(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<WastebinRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let bin = repo(&state).create(&request).await?;

    info!(
        wastebin_id = bin.wastebin_id,
        status = %bin.bin_status,
        "Wastebin created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Wastebin created successfully",
            bin.wastebin_id,
        )),
    ))
}

/// PUT /api/wastebin/:id
async fn update_wastebin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<WastebinRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let bin = repo(&state)
        .update(id, &request)
        .await?
        .ok_or_else(|| ApiError::NotFound("Wastebin not found".to_string()))?;

    info!(wastebin_id = bin.wastebin_id, status = %bin.bin_status, "Wastebin updated");

    Ok(Json(MessageResponse::new("Wastebin updated successfully")))
}

/// DELETE /api/wastebin/:id
async fn delete_wastebin(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = repo(&state)
        .delete(id)
        .await
        .map_err(ApiError::on_delete("Wastebin"))?;

    if !deleted {
        return Err(ApiError::NotFound("Wastebin not found".to_string()));
    }

    info!(wastebin_id = id, "Wastebin deleted");
    Ok(Json(MessageResponse::new("Wastebin deleted successfully")))
}
