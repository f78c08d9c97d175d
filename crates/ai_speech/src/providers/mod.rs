//! Speech announcer implementations
//!
//! Contains concrete implementations of the `SpeechEngine` trait.

pub mod espeak;

pub use espeak::EspeakProvider;
