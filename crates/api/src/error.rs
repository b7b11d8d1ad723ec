use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persistence::repositories::ReferenceError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg),
            ApiError::Forbidden(msg) => (StatusCode::FORBIDDEN, "forbidden", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, "conflict", msg),
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                )
            }
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

fn pg_error_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        match pg_error_code(&err).as_deref() {
            Some("23505") => ApiError::Conflict("Resource already exists".into()),
            Some("23503") => ApiError::NotFound("Referenced resource not found".into()),
            _ => match err {
                sqlx::Error::RowNotFound => ApiError::NotFound("Resource not found".into()),
                other => ApiError::Internal(format!("Database error: {}", other)),
            },
        }
    }
}

impl From<ReferenceError> for ApiError {
    fn from(err: ReferenceError) -> Self {
        match err {
            ReferenceError::Missing(_) => ApiError::NotFound(err.to_string()),
            ReferenceError::Database(e) => e.into(),
        }
    }
}

impl ApiError {
    /// Maps a failed delete. A foreign key violation means other rows still
    /// point at the target, which is a conflict rather than a missing reference.
    pub fn on_delete(entity: &'static str) -> impl FnOnce(sqlx::Error) -> ApiError {
        move |err| match pg_error_code(&err).as_deref() {
            Some("23503") => ApiError::Conflict(format!("{} is still referenced", entity)),
            _ => err.into(),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| match &e.message {
                    Some(m) => m.to_string(),
                    None => format!("Invalid value for {}", field),
                })
            })
            .collect();
        messages.sort();

        let message = match messages.len() {
            0 => "Invalid request".to_string(),
            1 => messages.remove(0),
            _ => messages.join("; "),
        };

        ApiError::Validation(message)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_status_codes() {
        let cases = [
            (ApiError::Unauthorized("x".into()), StatusCode::UNAUTHORIZED),
            (ApiError::Forbidden("x".into()), StatusCode::FORBIDDEN),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::Conflict("x".into()), StatusCode::CONFLICT),
            (ApiError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[tokio::test]
    async fn test_internal_error_hides_details() {
        let response = ApiError::Internal("connection refused on 10.0.0.5".into()).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "internal_error");
        assert_eq!(json["message"], "An internal error occurred");
    }

    #[tokio::test]
    async fn test_error_body_shape() {
        let response = ApiError::NotFound("Wastebin not found".into()).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(json["error"], "not_found");
        assert_eq!(json["message"], "Wastebin not found");
    }

    #[test]
    fn test_row_not_found_maps_to_404() {
        let error: ApiError = sqlx::Error::RowNotFound.into();
        assert!(matches!(error, ApiError::NotFound(_)));
    }

    #[test]
    fn test_other_sqlx_errors_are_internal() {
        let error: ApiError = sqlx::Error::PoolTimedOut.into();
        assert!(matches!(error, ApiError::Internal(_)));
    }

    #[test]
    fn test_missing_reference_maps_to_404_with_entity() {
        let error: ApiError = ReferenceError::Missing("Garbage truck").into();
        match error {
            ApiError::NotFound(msg) => assert_eq!(msg, "Garbage truck not found"),
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_on_delete_passes_through_non_fk_errors() {
        let error = ApiError::on_delete("Wastebin")(sqlx::Error::PoolClosed);
        assert!(matches!(error, ApiError::Internal(_)));
    }

    #[test]
    fn test_validation_errors_conversion() {
        let req = domain::models::WastebinRequest {
            bin_location: String::new(),
            bin_status: domain::models::WastebinStatus::Empty,
            bin_capacity: -5,
        };
        let error: ApiError = req.validate().unwrap_err().into();
        match error {
            ApiError::Validation(msg) => {
                assert!(msg.contains("Capacity must not be negative"));
                assert!(msg.contains("; "));
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
