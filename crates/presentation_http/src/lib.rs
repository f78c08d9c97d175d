//! PiGlance HTTP presentation layer
//!
//! This crate provides the describe relay: a small HTTP service sitting
//! between the kiosk and a llama.cpp completion server.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::create_router;
pub use state::AppState;
