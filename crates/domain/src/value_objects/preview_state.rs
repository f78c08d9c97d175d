//! Preview state value object
//!
//! Represents whether the camera preview is live or visually frozen behind a
//! snapshot overlay. Owned by the overlay component; the capture workflow
//! queries it before starting a new attempt.

use serde::{Deserialize, Serialize};
use std::fmt;

/// State of the camera preview surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PreviewState {
    /// Live feed is visible
    #[default]
    Live,
    /// A snapshot overlay hides the live feed
    Frozen,
}

impl PreviewState {
    /// Check if the live feed is visible
    #[must_use]
    pub const fn is_live(&self) -> bool {
        matches!(self, Self::Live)
    }

    /// Check if the preview is hidden behind a snapshot overlay
    #[must_use]
    pub const fn is_frozen(&self) -> bool {
        matches!(self, Self::Frozen)
    }

    /// Get a human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Frozen => "frozen",
        }
    }
}

impl fmt::Display for PreviewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
