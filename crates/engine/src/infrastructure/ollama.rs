//! Ollama LLM client (OpenAI-compatible API)
//!
//! Used for monster names by default, and for narration when
//! `NARRATION_PROVIDER=ollama`.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse};

/// Client for Ollama's OpenAI-compatible API
#[derive(Clone)]
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

/// Default Ollama base URL.
pub const DEFAULT_OLLAMA_BASE_URL: &str = "http://localhost:11434";

/// Default model for Ollama.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

impl OllamaClient {
    pub fn new(base_url: &str, model: &str) -> Self {
        Self::with_timeout(base_url, model, 30)
    }

    /// Create client with custom timeout.
    pub fn with_timeout(base_url: &str, model: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmPort for OllamaClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = OpenAIChatRequest {
            model: self.model.clone(),
            messages: build_messages(&request),
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&api_request)
            .send()
            .await
            .map_err(|e| LlmError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .map_err(|e| LlmError::RequestFailed(e.to_string()))?;
            return Err(LlmError::RequestFailed(format!("{status}: {error_text}")));
        }

        let api_response: OpenAIChatResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_response(api_response)
    }
}

fn build_messages(request: &LlmRequest) -> Vec<OpenAIMessage> {
    let mut messages = Vec::with_capacity(2);

    if let Some(system) = &request.system_prompt {
        messages.push(OpenAIMessage {
            role: "system".to_string(),
            content: Some(system.clone()),
        });
    }

    messages.push(OpenAIMessage {
        role: "user".to_string(),
        content: Some(request.prompt.clone()),
    });

    messages
}

fn convert_response(response: OpenAIChatResponse) -> Result<LlmResponse, LlmError> {
    let choice = response
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No choices in LLM response".to_string()))?;

    let finish_reason = match choice.finish_reason.as_deref() {
        Some("stop") => FinishReason::Stop,
        Some("length") => FinishReason::Length,
        Some("content_filter") => FinishReason::ContentFilter,
        None => FinishReason::Stop,
        _ => FinishReason::Unknown,
    };

    Ok(LlmResponse {
        content: choice.message.content.unwrap_or_default(),
        finish_reason,
    })
}

// =============================================================================
// OpenAI API types
// =============================================================================

#[derive(Debug, Serialize)]
struct OpenAIChatRequest {
    model: String,
    messages: Vec<OpenAIMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OpenAIMessage {
    role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OpenAIChatResponse {
    choices: Vec<OpenAIChoice>,
}

#[derive(Debug, Deserialize, Default)]
struct OpenAIChoice {
    message: OpenAIMessage,
    finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_comes_first() {
        let request = LlmRequest::new("Name a monster").with_system_prompt("You are a bard");
        let messages = build_messages(&request);

        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[1].role, "user");
        assert_eq!(messages[1].content.as_deref(), Some("Name a monster"));
    }

    #[test]
    fn converts_first_choice() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"Gorgath"},"finish_reason":"length"}]}"#;
        let parsed: OpenAIChatResponse = serde_json::from_str(body).expect("valid body");

        let response = convert_response(parsed).expect("has a choice");
        assert_eq!(response.content, "Gorgath");
        assert_eq!(response.finish_reason, FinishReason::Length);
    }

    #[test]
    fn empty_choices_is_invalid() {
        let parsed: OpenAIChatResponse =
            serde_json::from_str(r#"{"choices":[]}"#).expect("valid body");
        assert!(matches!(
            convert_response(parsed),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = OllamaClient::new("http://localhost:11434/", "llama3.2");
        assert_eq!(client.base_url, "http://localhost:11434");
        assert_eq!(client.model(), "llama3.2");
    }
}
