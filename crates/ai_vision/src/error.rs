//! Error types for image description

use thiserror::Error;

/// Errors raised while talking to a description backend
#[derive(Debug, Error)]
pub enum VisionError {
    /// Failed to reach the server
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request failed in transit
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Server answered with a non-success status
    #[error("Server error: {0}")]
    ServerError(String),

    /// Server answered with a body we could not parse
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Request timed out
    #[error("Request timed out")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl From<reqwest::Error> for VisionError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}
