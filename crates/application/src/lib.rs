//! Application layer - Use cases and orchestration
//!
//! Contains the tap-to-describe workflow services and the port definitions
//! they drive. Orchestrates domain objects and infrastructure adapters.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::*;
pub use services::*;
