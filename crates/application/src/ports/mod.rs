//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod announcer_port;
mod camera_port;
mod describe_port;
mod screen_port;

pub use announcer_port::AnnouncerPort;
#[cfg(test)]
pub use announcer_port::MockAnnouncerPort;
#[cfg(test)]
pub use camera_port::MockCameraPort;
pub use camera_port::{CameraAccess, CameraPort};
#[cfg(test)]
pub use describe_port::MockDescribePort;
pub use describe_port::{DescribePort, Description};
#[cfg(test)]
pub use screen_port::MockScreenPort;
pub use screen_port::ScreenPort;
