//! Extractor for the authenticated caller.

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use crate::error::ApiError;
pub use crate::middleware::user_auth::Caller;

/// Reads the [`Caller`] that `require_user_auth` stored in the request
/// extensions. Handlers on routes without that middleware get `401`.
#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Caller>()
            .cloned()
            .ok_or_else(|| ApiError::Unauthorized("Authentication required".to_string()))
    }
}
