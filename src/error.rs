//! Error types for the grade service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Grade Error Enum ==
/// Errors from the fallible parts of the grade engine.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradeError {
    /// Marks no band of the scale covers (negative, above 100, or NaN)
    #[error("Marks out of range: {0}")]
    MarksOutOfRange(f64),

    /// Grade table violates its ordering or coverage invariants
    #[error("Invalid grade scale: {0}")]
    InvalidScale(String),
}

// == API Error Enum ==
/// Unified error type for the HTTP layer.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Nothing cached under the key, or it expired
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<GradeError> for ApiError {
    fn from(err: GradeError) -> Self {
        ApiError::InvalidRequest(err.to_string())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ApiError::NotFound("k".into()).into_response().status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::InvalidRequest("bad".into()).into_response().status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_grade_error_maps_to_bad_request() {
        let err: ApiError = GradeError::MarksOutOfRange(120.0).into();
        assert!(matches!(err, ApiError::InvalidRequest(_)));
        assert!(err.to_string().contains("120"));
    }
}
