//! User route handlers.
//!
//! Login and registration are public. Everything else sits behind
//! `require_user_auth`; `/api/users/me` needs no further capability.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use domain::models::{
    CountResponse, CurrentUserResponse, LoginRequest, LoginResponse, MessageResponse,
    RegisterRequest, RegisterResponse, UpdateUserRequest, ADMIN_ROLE_NAME,
};
use domain::services::{Action, Capability, Resource};
use persistence::repositories::{NewUser, UserRepository};
use shared::password::hash_password;
use tracing::info;

use crate::app::AppState;
use crate::error::ApiError;
use crate::extractors::{Caller, Path, ValidatedJson};
use crate::middleware::resolve_caller;
use crate::services::{AuthError, AuthService};

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::InvalidCredentials => {
                ApiError::Unauthorized("Invalid credentials".to_string())
            }
            AuthError::EmailAlreadyExists => {
                ApiError::Conflict("Email already registered".to_string())
            }
            AuthError::RoleNotFound => ApiError::NotFound("Role not found".to_string()),
            AuthError::DatabaseError(db_err) => ApiError::from(db_err),
            AuthError::PasswordError(e) => ApiError::Internal(format!("Password error: {}", e)),
            AuthError::TokenError(e) => ApiError::Internal(format!("Token error: {}", e)),
        }
    }
}

/// Routes reachable without a token.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/api/users/login", post(login))
        .route("/api/users/register", post(register))
}

/// Routes that only need an authenticated caller.
pub fn self_router() -> Router<AppState> {
    Router::new().route("/api/users/me", get(current_user))
}

/// Routes guarded by `user:read` / `user:write`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/total", get(count_users))
        .route(
            "/api/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
}

fn repo(state: &AppState) -> UserRepository {
    UserRepository::new(state.pool.clone())
}

/// POST /api/users/login
async fn login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = AuthService::new(state.pool.clone(), state.jwt.clone())
        .login(&request.email, &request.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        user: result.user,
        token: result.token.token,
        expires_in: result.token.expires_in,
    }))
}

/// POST /api/users/register
///
/// Anyone may register into an ordinary role. Registering into the built-in
/// admin role requires a caller who already holds `user:write`.
async fn register(
    State(state): State<AppState>,
    headers: HeaderMap,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    if request.usertype.trim() == ADMIN_ROLE_NAME {
        let required = Capability::new(Resource::User, Action::Write);
        let allowed = resolve_caller(&state, &headers)
            .await?
            .is_some_and(|caller| caller.permissions.allows(required));
        if !allowed {
            return Err(ApiError::Forbidden(format!(
                "Registering an administrator requires {}",
                required
            )));
        }
    }

    let user = AuthService::new(state.pool.clone(), state.jwt.clone())
        .register(&request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User created successfully".to_string(),
            user,
        }),
    ))
}

/// GET /api/users/me
async fn current_user(
    State(state): State<AppState>,
    caller: Caller,
) -> Result<impl IntoResponse, ApiError> {
    let user = repo(&state)
        .find_by_id(caller.user_id)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("User no longer exists".to_string()))?;

    Ok(Json(CurrentUserResponse {
        user,
        role_name: caller.role_name,
        permissions: caller.permissions.names(),
    }))
}

async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    Ok(Json(repo(&state).list().await?))
}

async fn count_users(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let total = repo(&state).count().await?;
    Ok(Json(CountResponse { total }))
}

async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let user = repo(&state)
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;
    Ok(Json(user))
}

/// PUT /api/users/:id
///
/// Replaces every field, including the password, which is re-hashed.
async fn update_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    ValidatedJson(request): ValidatedJson<UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let password_hash = hash_password(&request.password)
        .map_err(|e| ApiError::Internal(format!("Password error: {}", e)))?;

    let user = repo(&state)
        .update(
            id,
            NewUser {
                username: request.username.trim(),
                email: request.email.trim(),
                phone_no: request.phone_no.as_deref(),
                address: request.address.as_deref(),
                password_hash: &password_hash,
            },
            request.role_id,
        )
        .await
        .map_err(|e| ApiError::from(AuthError::from(e)))?
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

    info!(user_id = user.user_id, role_id = user.role_id, "User updated");

    Ok(Json(MessageResponse::new("User updated successfully")))
}

async fn delete_user(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, ApiError> {
    let deleted = repo(&state)
        .delete(id)
        .await
        .map_err(ApiError::on_delete("User"))?;

    if !deleted {
        return Err(ApiError::NotFound("User not found".to_string()));
    }

    info!(user_id = id, "User deleted");
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
