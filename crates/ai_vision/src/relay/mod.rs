//! Describe relay engine
//!
//! Talks to the piglance-relay HTTP service, which fronts the actual
//! vision model.

mod client;

pub use client::RelayDescribeClient;
