//! Permission route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{CreatedResponse, MessageResponse, PermissionRequest};
use persistence::repositories::PermissionRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/permission", get(list_permissions).post(create_permission))
        .route(
            "/api/permission/:id",
            get(get_permission)
                .put(update_permission)
                .delete(delete_permission),
        )
}

fn repo(state: &AppState) -> PermissionRepository {
    PermissionRepository::new(state.pool.clone())
}

fn name_conflict(err: sqlx::Error) -> ApiError {
    match ApiError::from(err) {
        ApiError::Conflict(_) => ApiError::Conflict("Permission name already exists".to_string()),
        other => other,
    }
}

async fn list_permissions(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

async fn get_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let permission = repo(&state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Permission not found".to_string()))?;
    Ok(Json(permission))
}

async fn create_permission(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<PermissionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let permission = repo(&state).create(&request).await.map_err(name_conflict)?;

    info!(
        permission_id = permission.permission_id,
        name = %permission.permission_name,
        "Permission created"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new(
            "Permission created successfully",
            permission.permission_id,
        )),
    ))
}

async fn update_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<PermissionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let permission = repo(&state)
        .update(id, &request)
        .await
        .map_err(name_conflict)?
        .ok_or_else(|| ApiError::NotFound("Permission not found".to_string()))?;

    info!(permission_id = permission.permission_id, "Permission updated");

    Ok(Json(MessageResponse::new("Permission updated successfully")))
}

async fn delete_permission(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = repo(&state)
        .delete(id)
        .await
        .map_err(ApiError::on_delete("Permission"))?;

    if !deleted {
        return Err(ApiError::NotFound("Permission not found".to_string()));
    }

    info!(permission_id = id, "Permission deleted");
    Ok(Json(MessageResponse::new("Permission deleted successfully")))
}
