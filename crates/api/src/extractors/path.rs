//! Path parameter extractor with the usual error body.

use axum::{
    async_trait,
    extract::FromRequestParts,
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// Wraps `axum::extract::Path` so a segment that does not parse (for
/// example `/api/wastebin/abc`) rejects with a JSON `400` instead of
/// axum's plain-text body.
#[derive(Debug, Clone)]
pub struct Path<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for Path<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) =
            axum::extract::Path::<T>::from_request_parts(parts, state).await?;
        Ok(Path(value))
    }
}
