//! HTTP request handlers

pub mod describe;
pub mod health;
