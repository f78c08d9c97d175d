//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Invalid preview frame snapshot
    #[error("Invalid frame snapshot: {0}")]
    InvalidFrame(String),

    /// Invalid captured image
    #[error("Invalid captured image: {0}")]
    InvalidImage(String),

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_frame_error_message() {
        let err = DomainError::InvalidFrame("empty buffer".to_string());
        assert_eq!(err.to_string(), "Invalid frame snapshot: empty buffer");
    }

    #[test]
    fn invalid_image_error_message() {
        let err = DomainError::InvalidImage("empty buffer".to_string());
        assert_eq!(err.to_string(), "Invalid captured image: empty buffer");
    }

    #[test]
    fn validation_error_message() {
        let err = DomainError::ValidationError("field is required".to_string());
        assert_eq!(err.to_string(), "Validation failed: field is required");
    }
}
