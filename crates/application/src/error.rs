//! Application-level errors

use domain::DomainError;
use thiserror::Error;

/// Errors that can occur in the application layer
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain-level error
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Camera hardware or session error
    #[error("Camera error: {0}")]
    Camera(String),

    /// Inference/describe endpoint error
    #[error("Inference error: {0}")]
    Inference(String),

    /// Speech engine error
    #[error("Speech error: {0}")]
    Speech(String),

    /// Screen surface error
    #[error("Screen error: {0}")]
    Screen(String),

    /// Operation not valid in the current state
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Check if tapping again may succeed after this error
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Camera(_) | Self::Inference(_))
    }
}
