//! HTTP Routes
//!
//! Handlers delegate to the application services; this module also owns the
//! mapping from domain failures to HTTP statuses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use fleet::DomainError;

pub mod company;
pub mod driver;
pub mod swagger;

/// Structured error body returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
}

/// Domain failure carried out of a handler.
///
/// Validation-class failures map to 400, missing records to 404, and store
/// failures to 500 with a generic message (the detail goes to the log, not
/// the wire).
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, label) = match &self.0 {
            DomainError::NotFound { .. } => (StatusCode::NOT_FOUND, "Resource Not Found"),
            DomainError::Store(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error"),
            _ => (StatusCode::BAD_REQUEST, "Bad Request"),
        };

        let message = match &self.0 {
            DomainError::Store(detail) => {
                tracing::error!(error = %detail, "store failure");
                "Something went wrong. Please contact support.".to_string()
            }
            other => other.to_string(),
        };

        let body = ErrorResponse {
            timestamp: Utc::now(),
            status: status.as_u16(),
            error: label.to_string(),
            message,
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: DomainError) -> StatusCode {
        ApiError(err).into_response().status()
    }

    #[test]
    fn test_validation_failures_map_to_bad_request() {
        assert_eq!(status_of(DomainError::MissingField("m".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(DomainError::InvalidFormat("m".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(DomainError::InvalidDate("m".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(DomainError::Underage("m".into())), StatusCode::BAD_REQUEST);
        assert_eq!(status_of(DomainError::DuplicateKey("m".into())), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_maps_to_404() {
        let err = DomainError::NotFound {
            entity_type: "Company".into(),
            id: "x".into(),
        };
        assert_eq!(status_of(err), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_store_failure_maps_to_500() {
        assert_eq!(
            status_of(DomainError::Store("connection reset".into())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
