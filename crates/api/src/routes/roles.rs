//! Role route handlers.
//!
//! The built-in `admin` role is recreated on every boot, so it cannot be
//! renamed or deleted through the API.

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use domain::models::{CreatedResponse, MessageResponse, Role, RoleRequest, ADMIN_ROLE_NAME};
use persistence::repositories::RoleRepository;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Path, ValidatedJson};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/role", get(list_roles).post(create_role))
        .route(
            "/api/role/:id",
            get(get_role).put(update_role).delete(delete_role),
        )
        .route("/api/role/:id/permissions", get(list_role_permissions))
}

fn repo(state: &AppState) -> RoleRepository {
    RoleRepository::new(state.pool.clone())
}

async fn find_role(state: &AppState, id: i64) -> Result<Role, ApiError> {
    repo(state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Role not found".to_string()))
}

fn name_conflict(err: sqlx::Error) -> ApiError {
    match ApiError::from(err) {
        ApiError::Conflict(_) => ApiError::Conflict("Role name already exists".to_string()),
        other => other,
    }
}

fn ensure_not_builtin(role: &Role) -> Result<(), ApiError> {
    if role.role_name == ADMIN_ROLE_NAME {
        return Err(ApiError::Conflict(
            "The admin role is built in and cannot be changed".to_string(),
        ));
    }
    Ok(())
}

async fn list_roles(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

async fn get_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(find_role(&state, id).await?))
}

/// GET /api/role/:id/permissions
async fn list_role_permissions(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let role = find_role(&state, id).await?;
    Ok(Json(repo(&state).permissions(role.role_id).await?))
}

async fn create_role(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<RoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let role = repo(&state)
        .create(request.role_name.trim())
        .await
        .map_err(name_conflict)?;

    info!(role_id = role.role_id, name = %role.role_name, "Role created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse::new("Role created successfully", role.role_id)),
    ))
}

async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<RoleRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = find_role(&state, id).await?;
    ensure_not_builtin(&existing)?;

    let role = repo(&state)
        .update(id, request.role_name.trim())
        .await
        .map_err(name_conflict)?
        .ok_or_else(|| ApiError::NotFound("Role not found".to_string()))?;

    info!(role_id = role.role_id, name = %role.role_name, "Role updated");

    Ok(Json(MessageResponse::new("Role updated successfully")))
}

async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let existing = find_role(&state, id).await?;
    ensure_not_builtin(&existing)?;

    let deleted = repo(&state)
        .delete(id)
        .await
        .map_err(ApiError::on_delete("Role"))?;

    if !deleted {
        return Err(ApiError::NotFound("Role not found".to_string()));
    }

    info!(role_id = id, "Role deleted");
    Ok(Json(MessageResponse::new("Role deleted successfully")))
}
