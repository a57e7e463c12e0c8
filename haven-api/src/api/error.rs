//! Route-layer error type and its JSON mapping
//!
//! Taxonomy: `validation_error` 400, `not_found` 404, `internal_error` 500.
//! Upstream failures never reach this type; they are absorbed into
//! fallbacks at the call sites.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

/// Errors surfaced to API clients
#[derive(Debug)]
pub enum ApiError {
    /// Bad client input (400)
    Validation(String),
    /// Unknown resource (404)
    NotFound(String),
    /// Unexpected handler failure (500)
    Internal(String),
}

impl From<haven_common::Error> for ApiError {
    fn from(err: haven_common::Error) -> Self {
        match err {
            haven_common::Error::NotFound(msg) => ApiError::NotFound(msg),
            haven_common::Error::InvalidInput(msg) => ApiError::Validation(msg),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, taxonomy, details) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "validation_error", msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg),
            ApiError::Internal(msg) => {
                tracing::error!(details = %msg, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg)
            }
        };

        let body = Json(json!({
            "error": taxonomy,
            "details": details,
        }));

        (status, body).into_response()
    }
}
