//! API error handling

use ai_vision::VisionError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Additional error details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            Self::ServiceUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "service_unavailable", msg)
            }
            Self::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                msg,
            ),
        };

        let body = ErrorResponse {
            error: message,
            code: code.to_string(),
            details: None,
        };

        (status, Json(body)).into_response()
    }
}

impl From<VisionError> for ApiError {
    fn from(err: VisionError) -> Self {
        match err {
            VisionError::ConnectionFailed(msg) => {
                Self::ServiceUnavailable(format!("Completion server unreachable: {msg}"))
            }
            VisionError::Timeout => {
                Self::ServiceUnavailable("Completion server timed out".to_string())
            }
            VisionError::ServerError(msg) | VisionError::RequestFailed(msg) => {
                Self::ServiceUnavailable(format!("Completion server failed: {msg}"))
            }
            VisionError::InvalidResponse(msg) => {
                Self::Internal(format!("Completion server returned bad data: {msg}"))
            }
            VisionError::Configuration(msg) => Self::Internal(msg),
        }
    }
}
