//! Announcer port - Interface for spoken result playback

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speaking result text aloud
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AnnouncerPort: Send + Sync {
    /// Speak the given text
    ///
    /// Flush semantics: any queued or playing utterance is replaced, never
    /// appended to.
    async fn announce(&self, text: String) -> Result<(), ApplicationError>;

    /// Stop the current utterance if one is playing
    async fn stop(&self) -> Result<(), ApplicationError>;

    /// Release the speech engine
    async fn shutdown(&self) -> Result<(), ApplicationError>;

    /// Check if the engine and its configured voice are usable
    async fn is_available(&self) -> bool;
}
