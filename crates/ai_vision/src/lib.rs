//! Vision engine clients for PiGlance
//!
//! Two interchangeable backends produce image descriptions:
//!
//! - [`RelayDescribeClient`] talks to the piglance-relay HTTP service
//! - [`LlavaClient`] talks straight to a llama.cpp completion server
//!
//! Both implement [`DescribeEngine`], so callers pick a backend by
//! configuration and never by type.

pub mod config;
pub mod error;
pub mod llava;
pub mod ports;
pub mod relay;

pub use config::{LlavaConfig, VisionConfig};
pub use error::VisionError;
pub use llava::LlavaClient;
pub use ports::{DescribeEngine, DescribeRequest, DescribeResponse};
pub use relay::RelayDescribeClient;
