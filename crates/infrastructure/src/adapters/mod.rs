//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod announcer_adapter;
mod console_screen;
mod describe_adapter;
mod rpicam_camera;

pub use announcer_adapter::AnnouncerAdapter;
pub use console_screen::ConsoleScreenAdapter;
pub use describe_adapter::DescribeAdapter;
pub use rpicam_camera::RpicamCameraAdapter;
