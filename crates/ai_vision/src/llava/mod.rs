//! LLaVA completion engine
//!
//! Talks directly to a llama.cpp server's completion endpoint with an
//! image slot in the prompt.

mod client;

pub use client::LlavaClient;
