//! Camera port - Interface for camera access, preview sampling, and still capture

use async_trait::async_trait;
use domain::value_objects::{FrameSnapshot, StillImage};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Outcome of a camera permission probe
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CameraAccess {
    /// The camera device may be opened
    Granted,
    /// Access to the camera device is refused
    Denied,
}

impl CameraAccess {
    /// Check if access was granted
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Port for the platform camera pipeline
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CameraPort: Send + Sync {
    /// Check whether camera access is currently granted
    async fn check_access(&self) -> Result<CameraAccess, ApplicationError>;

    /// Request camera access from the platform
    ///
    /// Issued once when access is not already granted. The returned state is
    /// final for this session; callers treat `Denied` as terminal.
    async fn request_access(&self) -> Result<CameraAccess, ApplicationError>;

    /// Bind the live preview and the still-capture output to the rear camera
    ///
    /// Any previously bound session is released first. A bind failure leaves
    /// no session active.
    async fn bind(&self) -> Result<(), ApplicationError>;

    /// Sample the current preview frame into a snapshot
    async fn sample_preview(&self) -> Result<FrameSnapshot, ApplicationError>;

    /// Capture one still photo from the bound session
    async fn capture_still(&self) -> Result<StillImage, ApplicationError>;

    /// Release the camera session and its background resources
    async fn shutdown(&self) -> Result<(), ApplicationError>;
}
