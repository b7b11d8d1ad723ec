//! Bearer token authentication middleware.
//!
//! Verifies the access token and resolves the caller's role and effective
//! permissions from the database on every request, so role changes take
//! effect without reissuing tokens.

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::{IntoResponse, Response},
};
use domain::services::EffectivePermissions;
use persistence::repositories::{PermissionRepository, UserRepository};

use crate::app::AppState;
use crate::error::ApiError;

/// The authenticated user behind a request.
#[derive(Debug, Clone)]
pub struct Caller {
    pub user_id: i64,
    pub role_id: i64,
    pub role_name: String,
    pub permissions: EffectivePermissions,
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Resolves the caller from the `Authorization` header.
///
/// Returns `Ok(None)` when no bearer token is present. A token that is
/// present but invalid, expired or names a deleted user is an error.
pub async fn resolve_caller(
    state: &AppState,
    headers: &HeaderMap,
) -> Result<Option<Caller>, ApiError> {
    let Some(token) = bearer_token(headers) else {
        return Ok(None);
    };

    let claims = state.jwt.verify(token).map_err(|e| {
        tracing::debug!(error = %e, "Access token rejected");
        ApiError::Unauthorized("Invalid or expired token".to_string())
    })?;
    let user_id = claims
        .user_id()
        .map_err(|_| ApiError::Unauthorized("Invalid or expired token".to_string()))?;

    let (user, role_name) = UserRepository::new(state.pool.clone())
        .find_with_role(user_id)
        .await?
        .map(|row| row.into_parts())
        .ok_or_else(|| ApiError::Unauthorized("User no longer exists".to_string()))?;

    let names = PermissionRepository::new(state.pool.clone())
        .names_for_role(user.role_id)
        .await?;

    Ok(Some(Caller {
        user_id: user.user_id,
        role_id: user.role_id,
        role_name,
        permissions: EffectivePermissions::new(names),
    }))
}

/// Middleware that requires a valid bearer token.
///
/// The resolved [`Caller`] is stored in request extensions for the
/// capability guard and handlers.
pub async fn require_user_auth(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    match resolve_caller(&state, req.headers()).await {
        Ok(Some(caller)) => {
            req.extensions_mut().insert(caller);
            next.run(req).await
        }
        Ok(None) => {
            ApiError::Unauthorized("Missing or invalid Authorization header".to_string())
                .into_response()
        }
        Err(e) => e.into_response(),
    }
}
