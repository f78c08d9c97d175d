//! Port definitions for speech announcements
//!
//! Defines the trait that speech announcer adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;

/// Port for speech announcer implementations
///
/// Implementations speak short texts aloud through the device's audio
/// output. A new announcement always interrupts the previous one.
///
/// # Example
///
/// ```ignore
/// use ai_speech::{SpeechEngine, SpeechError};
///
/// async fn read_aloud(engine: &impl SpeechEngine) -> Result<(), SpeechError> {
///     engine.speak("a red apple on a table").await
/// }
/// ```
#[async_trait]
pub trait SpeechEngine: Send + Sync {
    /// Speak the given text, interrupting any announcement in progress
    ///
    /// Returns as soon as playback has started; it does not wait for the
    /// utterance to finish.
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if the synthesizer cannot be started or the
    /// text cannot be handed over.
    async fn speak(&self, text: &str) -> Result<(), SpeechError>;

    /// Stop the announcement in progress, if any
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if a running synthesizer could not be stopped.
    async fn stop(&self) -> Result<(), SpeechError>;

    /// Release synthesizer resources
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if teardown fails.
    async fn shutdown(&self) -> Result<(), SpeechError>;

    /// Check whether the configured voice is installed
    ///
    /// # Errors
    ///
    /// Returns [`SpeechError::VoiceNotFound`] when the synthesizer runs but
    /// does not list the configured voice, or another `SpeechError` when it
    /// cannot be queried at all.
    async fn probe_voice(&self) -> Result<(), SpeechError>;

    /// Check if the synthesizer is installed and runnable
    async fn is_available(&self) -> bool;

    /// Get the configured voice identifier
    fn voice(&self) -> &str;
}
