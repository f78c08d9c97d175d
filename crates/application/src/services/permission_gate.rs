//! Permission gate - Gates camera startup behind the camera capability

use std::{fmt, sync::Arc};

use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{CameraPort, ScreenPort},
};

/// Outcome of the startup access check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessOutcome {
    /// Access granted, the camera session may start
    Granted,
    /// Access denied and the screen was closed
    Denied,
}

impl AccessOutcome {
    /// Check if access was granted
    #[must_use]
    pub const fn is_granted(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Service gating camera startup behind the platform permission
pub struct PermissionGate {
    camera: Arc<dyn CameraPort>,
    screen: Arc<dyn ScreenPort>,
}

impl fmt::Debug for PermissionGate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PermissionGate").finish_non_exhaustive()
    }
}

impl PermissionGate {
    /// Create a new permission gate
    pub fn new(camera: Arc<dyn CameraPort>, screen: Arc<dyn ScreenPort>) -> Self {
        Self { camera, screen }
    }

    /// Ensure camera access before the session starts
    ///
    /// Checks the current grant first; if absent, issues a single platform
    /// request. Denial notifies the user and closes the screen. No retries;
    /// a denied outcome is terminal for this session.
    #[instrument(skip(self))]
    pub async fn ensure_access(&self) -> Result<AccessOutcome, ApplicationError> {
        if self.camera.check_access().await?.is_granted() {
            info!("Camera access already granted");
            return Ok(AccessOutcome::Granted);
        }

        info!("Requesting camera access");
        if self.camera.request_access().await?.is_granted() {
            info!("Camera access granted");
            return Ok(AccessOutcome::Granted);
        }

        warn!("Camera access denied, closing screen");
        if let Err(e) = self
            .screen
            .notify("Permissions not granted by the user".to_string())
            .await
        {
            warn!(error = %e, "Failed to show permission notice");
        }
        self.screen.close().await?;

        Ok(AccessOutcome::Denied)
    }
}
