//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Text generation (Gemini, Ollama)
//! - The overlay state sink (files on disk)

mod error;
mod external;

pub use external::{FinishReason, LlmPort, LlmRequest, LlmResponse, StateSinkPort};

#[cfg(test)]
pub use external::{MockLlmPort, MockStateSinkPort};

pub use error::{LlmError, SinkError};
