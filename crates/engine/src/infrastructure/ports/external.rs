//! External service port traits (LLM, state sink).

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use survivor_domain::GameSnapshot;

use super::error::{LlmError, SinkError};

// =============================================================================
// LLM Types
// =============================================================================

/// A single-turn text generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct LlmRequest {
    /// The user prompt
    pub prompt: String,
    /// System instruction / persona
    pub system_prompt: Option<String>,
    /// Temperature for response generation (0.0 - 2.0)
    pub temperature: Option<f32>,
    /// Maximum tokens to generate
    pub max_tokens: Option<u32>,
}

impl LlmRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            temperature: None,
            max_tokens: None,
        }
    }

    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn with_temperature(mut self, temp: f32) -> Self {
        self.temperature = Some(temp);
        self
    }

    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }
}

/// Response from the LLM
#[derive(Debug, Clone, PartialEq)]
pub struct LlmResponse {
    /// The generated text content
    pub content: String,
    /// Finish reason
    pub finish_reason: FinishReason,
}

/// Reason the generation finished
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    #[serde(other)]
    Unknown,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LlmPort: Send + Sync {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError>;
}

// =============================================================================
// State Sink
// =============================================================================

/// Destination for game-state snapshots (the overlay files in production).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait StateSinkPort: Send + Sync {
    async fn write_snapshot(&self, snapshot: &GameSnapshot) -> Result<(), SinkError>;
}
