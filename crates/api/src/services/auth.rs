//! Login and registration.

use std::sync::{Arc, OnceLock};

use domain::models::{RegisterRequest, User};
use persistence::repositories::{NewUser, ReferenceError, UserRepository};
use shared::jwt::{IssuedToken, JwtConfig, JwtError};
use shared::password::{hash_password, verify_password, PasswordError};
use sqlx::PgPool;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already registered")]
    EmailAlreadyExists,

    #[error("Role not found")]
    RoleNotFound,

    #[error("Token error: {0}")]
    TokenError(#[from] JwtError),

    #[error("Password error: {0}")]
    PasswordError(#[from] PasswordError),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),
}

impl From<ReferenceError> for AuthError {
    fn from(err: ReferenceError) -> Self {
        match err {
            ReferenceError::Missing(_) => AuthError::RoleNotFound,
            ReferenceError::Database(e) if is_unique_violation(&e) => {
                AuthError::EmailAlreadyExists
            }
            ReferenceError::Database(e) => AuthError::DatabaseError(e),
        }
    }
}

fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(err, sqlx::Error::Database(db) if db.code().as_deref() == Some("23505"))
}

/// Hash checked when the email is unknown, so that path costs one Argon2
/// verification like a wrong password does.
fn dummy_hash() -> Option<&'static str> {
    static DUMMY_HASH: OnceLock<Option<String>> = OnceLock::new();
    DUMMY_HASH
        .get_or_init(|| hash_password("waste-manager-unknown-account").ok())
        .as_deref()
}

/// A successful login.
#[derive(Debug, Clone)]
pub struct AuthResult {
    pub user: User,
    pub token: IssuedToken,
}

/// Authentication service.
pub struct AuthService {
    users: UserRepository,
    jwt: Arc<JwtConfig>,
}

impl AuthService {
    pub fn new(pool: PgPool, jwt: Arc<JwtConfig>) -> Self {
        Self {
            users: UserRepository::new(pool),
            jwt,
        }
    }

    /// Checks the password against the stored Argon2id hash and issues a
    /// token. Unknown email and wrong password are indistinguishable.
    pub async fn login(&self, email: &str, password: &str) -> Result<AuthResult, AuthError> {
        let Some(entity) = self.users.find_by_email(email.trim()).await? else {
            if let Some(hash) = dummy_hash() {
                let _ = verify_password(password, hash);
            }
            return Err(AuthError::InvalidCredentials);
        };

        match verify_password(password, &entity.password_hash) {
            Ok(true) => {}
            Ok(false) => return Err(AuthError::InvalidCredentials),
            Err(PasswordError::InvalidHashFormat) => {
                tracing::warn!(user_id = entity.user_id, "Stored password is not a valid hash");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e.into()),
        }

        let token = self.jwt.issue_access_token(entity.user_id)?;
        let user: User = entity.into();

        tracing::info!(user_id = user.user_id, "User logged in");

        Ok(AuthResult { user, token })
    }

    /// Creates a user attached to the role named by `usertype`.
    pub async fn register(&self, request: &RegisterRequest) -> Result<User, AuthError> {
        let password_hash = hash_password(&request.password)?;
        let username = request.username();

        let user = self
            .users
            .create_with_role_name(
                NewUser {
                    username: &username,
                    email: request.email.trim(),
                    phone_no: request.phone.as_deref(),
                    address: request.address.as_deref(),
                    password_hash: &password_hash,
                },
                request.usertype.trim(),
            )
            .await?;

        tracing::info!(
            user_id = user.user_id,
            role_id = user.role_id,
            "User registered"
        );

        Ok(user)
    }
}
