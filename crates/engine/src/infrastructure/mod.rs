//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod app_config;
pub mod event_feed;
pub mod gemini;
pub mod ollama;
pub mod ports;
pub mod state_files;
