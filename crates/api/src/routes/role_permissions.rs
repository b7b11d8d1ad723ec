//! Role/permission grant route handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{GrantPermissionRequest, MessageResponse};
use persistence::repositories::{ReferenceError, RolePermissionRepository};
use serde::Serialize;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};

/// Segment order differs by method on the pair path:
///
/// - `GET /api/role/permission/:role_id/:permission_id`
/// - `DELETE /api/role/permission/:permission_id/:role_id`
///
/// The router requires one parameter name per position, so the segments
/// are registered as `:id/:other_id` and each handler names them.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/role/permission", get(list_grants).post(grant_permission))
        .route("/api/role/permission/:id", get(list_grants_by_permission))
        .route(
            "/api/role/permission/:id/:other_id",
            get(get_grant).delete(revoke_permission),
        )
}

fn repo(state: &AppState) -> RolePermissionRepository {
    RolePermissionRepository::new(state.pool.clone())
}

/// Body returned when a grant is created.
#[derive(Debug, Serialize)]
struct GrantCreatedResponse {
    message: String,
    role_id: i64,
    permission_id: i64,
}

async fn list_grants(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

/// GET /api/role/permission/:permission_id
///
/// Every role holding one permission. An empty result is a `404`.
async fn list_grants_by_permission(
    State(state): State<AppState>,
    Path(permission_id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let grants = repo(&state).list_by_permission(permission_id).await?;
    if grants.is_empty() {
        return Err(ApiError::NotFound("Role permission not found".to_string()));
    }
    Ok(Json(grants))
}

/// GET /api/role/permission/:role_id/:permission_id
async fn get_grant(
    State(state): State<AppState>,
    Path((role_id, permission_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    let grant = repo(&state)
        .find(role_id, permission_id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Role permission not found".to_string()))?;
    Ok(Json(grant))
}

/// POST /api/role/permission
async fn grant_permission(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GrantPermissionRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let grant = repo(&state)
        .grant(request.role_id, request.permission_id)
        .await
        .map_err(|e| match e {
            ReferenceError::Database(db) => match ApiError::from(db) {
                ApiError::Conflict(_) => {
                    ApiError::Conflict("Role permission already exists".to_string())
                }
                other => other,
            },
            missing => missing.into(),
        })?;

    info!(
        role_id = grant.role_id,
        permission_id = grant.permission_id,
        "Permission granted"
    );

    Ok((
        StatusCode::CREATED,
        Json(GrantCreatedResponse {
            message: "Role permission created successfully".to_string(),
            role_id: grant.role_id,
            permission_id: grant.permission_id,
        }),
    ))
}

/// DELETE /api/role/permission/:permission_id/:role_id
async fn revoke_permission(
    State(state): State<AppState>,
    Path((permission_id, role_id)): Path<(i64, i64)>,
) -> Result<impl IntoResponse, ApiError> {
    if !repo(&state).revoke(role_id, permission_id).await? {
        return Err(ApiError::NotFound("Role permission not found".to_string()));
    }

    info!(role_id, permission_id, "Permission revoked");
    Ok(Json(MessageResponse::new(
        "Role permission deleted successfully",
    )))
}
