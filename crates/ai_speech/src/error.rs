//! Speech announcement errors

use thiserror::Error;

/// Errors that can occur during speech announcements
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Synthesizer not installed or not runnable
    #[error("Provider not available: {0}")]
    NotAvailable(String),

    /// The configured voice is not installed
    #[error("Voice not found: {0}")]
    VoiceNotFound(String),

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}
