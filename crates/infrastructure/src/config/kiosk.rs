//! Tap handling configuration.

use serde::{Deserialize, Serialize};

use super::default_true;

/// Tap handling behavior
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KioskConfig {
    /// Ignore taps while a capture is already in flight
    #[serde(default = "default_true")]
    pub ignore_tap_while_busy: bool,
}

impl Default for KioskConfig {
    fn default() -> Self {
        Self {
            ignore_tap_while_busy: true,
        }
    }
}
