//! Preview overlay - Freeze/resume state machine over the live preview
//!
//! Owns the preview state: `Live` (initial) or `Frozen`. Freezing samples the
//! current preview frame and stacks it above the live feed as a tagged
//! overlay; resuming removes the overlay and restores the live view. The
//! state changes only through `freeze` and `resume` and is queryable
//! synchronously.

use std::{fmt, sync::Arc};

use domain::value_objects::PreviewState;
use parking_lot::Mutex;
use tracing::{debug, instrument, warn};

use crate::ports::{CameraPort, ScreenPort};

/// View tag identifying the frozen-frame overlay
pub const FROZEN_OVERLAY_TAG: &str = "frozen_frame";

/// Service owning the freeze/resume overlay
pub struct PreviewOverlay {
    camera: Arc<dyn CameraPort>,
    screen: Arc<dyn ScreenPort>,
    state: Mutex<PreviewState>,
}

impl fmt::Debug for PreviewOverlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreviewOverlay")
            .field("state", &*self.state.lock())
            .finish_non_exhaustive()
    }
}

impl PreviewOverlay {
    /// Create a new overlay in the `Live` state
    pub fn new(camera: Arc<dyn CameraPort>, screen: Arc<dyn ScreenPort>) -> Self {
        Self {
            camera,
            screen,
            state: Mutex::new(PreviewState::Live),
        }
    }

    /// Current preview state
    pub fn state(&self) -> PreviewState {
        *self.state.lock()
    }

    /// Check if the preview is hidden behind the overlay
    pub fn is_frozen(&self) -> bool {
        self.state().is_frozen()
    }

    /// Freeze the preview behind a snapshot overlay
    ///
    /// If sampling the preview (or placing the overlay) fails, the transition
    /// is aborted and the state reverts to `Live` immediately. The freeze
    /// becomes a no-op and the caller's workflow continues.
    #[instrument(skip(self))]
    pub async fn freeze(&self) {
        *self.state.lock() = PreviewState::Frozen;

        match self.camera.sample_preview().await {
            Ok(snapshot) => {
                let placed = self
                    .screen
                    .show_overlay(FROZEN_OVERLAY_TAG.to_string(), snapshot)
                    .await;
                match placed {
                    Ok(()) => debug!("Preview frozen behind snapshot overlay"),
                    Err(e) => {
                        warn!(error = %e, "Failed to place frozen-frame overlay, staying live");
                        self.resume().await;
                    },
                }
            },
            Err(e) => {
                warn!(error = %e, "Preview sampling failed, staying live");
                self.resume().await;
            },
        }
    }

    /// Restore the live preview
    ///
    /// Idempotent: resuming from `Live` only reasserts the state. The tagged
    /// overlay is removed when present; absence is not an error. Runs on
    /// every exit path of the capture workflow, so it must never fail.
    #[instrument(skip(self))]
    pub async fn resume(&self) {
        *self.state.lock() = PreviewState::Live;

        match self
            .screen
            .remove_overlay(FROZEN_OVERLAY_TAG.to_string())
            .await
        {
            Ok(true) => debug!("Frozen-frame overlay removed"),
            Ok(false) => {},
            Err(e) => warn!(error = %e, "Failed to remove frozen-frame overlay"),
        }
    }
}
