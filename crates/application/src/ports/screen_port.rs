//! Screen port - Interface for the single kiosk screen surface

use async_trait::async_trait;
use domain::value_objects::FrameSnapshot;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for the screen the kiosk renders to
///
/// The screen owns the view hierarchy: overlays placed here live until they
/// are removed by tag, mirroring how the preview surface stacks views.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ScreenPort: Send + Sync {
    /// Place a tagged snapshot overlay above the live preview
    ///
    /// The screen takes ownership of the snapshot and holds it until the
    /// overlay is removed.
    async fn show_overlay(
        &self,
        tag: String,
        snapshot: FrameSnapshot,
    ) -> Result<(), ApplicationError>;

    /// Remove the overlay with the given tag
    ///
    /// Returns whether an overlay was present. Absence is not an error.
    async fn remove_overlay(&self, tag: String) -> Result<bool, ApplicationError>;

    /// Replace the contents of the result text region
    async fn set_result_text(&self, text: String) -> Result<(), ApplicationError>;

    /// Show a transient user-visible notice
    async fn notify(&self, message: String) -> Result<(), ApplicationError>;

    /// Close the screen
    ///
    /// Terminal; used when camera access is denied.
    async fn close(&self) -> Result<(), ApplicationError>;
}
