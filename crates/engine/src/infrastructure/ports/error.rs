//! Error types for port operations.

#[derive(Debug, Clone, thiserror::Error)]
pub enum LlmError {
    #[error("LLM request failed: {0}")]
    RequestFailed(String),
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("LLM request timed out after {0}s")]
    Timeout(u64),
}

/// Errors from writing the game state for the overlay.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SinkError {
    pub fn io(path: impl ToString, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_string(),
            source,
        }
    }
}
