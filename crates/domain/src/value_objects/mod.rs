//! Value Objects - Immutable, identity-less domain primitives

mod capture_id;
mod frame_snapshot;
mod preview_state;
mod still_image;

pub use capture_id::CaptureId;
pub use frame_snapshot::FrameSnapshot;
pub use preview_state::PreviewState;
pub use still_image::{ImageFormat, StillImage};
