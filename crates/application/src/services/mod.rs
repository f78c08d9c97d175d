//! Application services - Use case implementations

mod camera_session;
mod capture_workflow;
mod permission_gate;
mod preview_overlay;

pub use camera_session::CameraSession;
pub use capture_workflow::{CaptureReport, CaptureWorkflow, CaptureWorkflowConfig, TapOutcome};
pub use permission_gate::{AccessOutcome, PermissionGate};
pub use preview_overlay::{FROZEN_OVERLAY_TAG, PreviewOverlay};
