//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer.
//! Contains adapters for the rpicam capture stack, the console screen,
//! the describe backends, and the speech announcer.

pub mod adapters;
pub mod config;

pub use adapters::{
    AnnouncerAdapter, ConsoleScreenAdapter, DescribeAdapter, RpicamCameraAdapter,
};
pub use config::{AppConfig, CameraConfig, KioskConfig, RelayConfig};
