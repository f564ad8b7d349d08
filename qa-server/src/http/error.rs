//! API error types with IntoResponse
//!
//! Errors are converted to JSON responses with appropriate status codes.
//! Store failures are logged and reported without internal detail.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::db::StoreError;
use crate::models::ValidationError;
use crate::services::ServiceError;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Field validation failed (400)
    Validation(ValidationError),

    /// Request body is not valid JSON for the endpoint (400)
    Decode { message: String },

    /// Numeric path id that doesn't fit an i64 (400)
    InvalidId { value: String },

    /// Resource not found (404)
    NotFound { resource: &'static str, id: i64 },

    /// Parent question missing on answer creation (404)
    QuestionNotFound { id: i64 },

    /// No route matches the request path (404)
    Unrouted,

    /// Persistence failure (500, logged)
    Store(StoreError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Decode { .. } | Self::InvalidId { .. } => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound { .. } | Self::QuestionNotFound { .. } | Self::Unrouted => {
                StatusCode::NOT_FOUND
            }
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match &self {
            Self::Validation(e) => {
                tracing::info!(field = e.field(), "validation failed: {}", e);
                json!({
                    "error": "validation_error",
                    "message": e.to_string()
                })
            }
            Self::Decode { message } => {
                tracing::info!("rejected request body: {}", message);
                json!({
                    "error": "decode_error",
                    "message": format!("invalid JSON body: {}", message)
                })
            }
            Self::InvalidId { value } => json!({
                "error": "invalid_id",
                "message": format!("invalid id '{}'", value)
            }),
            Self::NotFound { resource, id } => {
                tracing::info!(resource, id, "not found");
                json!({
                    "error": "not_found",
                    "message": format!("{} '{}' not found", resource, id)
                })
            }
            Self::QuestionNotFound { id } => {
                tracing::info!(question_id = id, "answer targets missing question");
                json!({
                    "error": "question_not_found",
                    "message": format!("question '{}' not found", id)
                })
            }
            Self::Unrouted => json!({
                "error": "not_found",
                "message": "no route matches the request"
            }),
            Self::Store(e) => {
                // Log the actual error, return generic message
                tracing::error!("Store error: {}", e);
                json!({
                    "error": "internal_error",
                    "message": "an internal error occurred"
                })
            }
        };

        (status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(v) => Self::Validation(v),
            ServiceError::NotFound { resource, id } => Self::NotFound { resource, id },
            ServiceError::QuestionNotFound { id } => Self::QuestionNotFound { id },
            ServiceError::Store(s) => Self::Store(s),
        }
    }
}
