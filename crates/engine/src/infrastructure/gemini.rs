//! Google Gemini client (Generative Language REST API)

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::infrastructure::ports::{FinishReason, LlmError, LlmPort, LlmRequest, LlmResponse};

/// Default Generative Language API base URL.
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Default Gemini model.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Client for the `models/{model}:generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout_secs: u64) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url, self.model
        )
    }
}

#[async_trait]
impl LlmPort for GeminiClient {
    async fn generate(&self, request: LlmRequest) -> Result<LlmResponse, LlmError> {
        let api_request = build_request(&request);

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
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

        let api_response: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(e.to_string()))?;

        convert_response(api_response)
    }
}

fn build_request(request: &LlmRequest) -> GenerateContentRequest {
    GenerateContentRequest {
        system_instruction: request.system_prompt.as_ref().map(|system| Content {
            role: None,
            parts: vec![Part {
                text: Some(system.clone()),
            }],
        }),
        contents: vec![Content {
            role: Some("user".to_string()),
            parts: vec![Part {
                text: Some(request.prompt.clone()),
            }],
        }],
        generation_config: GenerationConfig {
            temperature: request.temperature,
            max_output_tokens: request.max_tokens,
        },
    }
}

fn convert_response(response: GenerateContentResponse) -> Result<LlmResponse, LlmError> {
    let candidate = response
        .candidates
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::InvalidResponse("No candidates in Gemini response".to_string()))?;

    let content: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if content.trim().is_empty() {
        return Err(LlmError::InvalidResponse(
            "Gemini candidate has no text".to_string(),
        ));
    }

    let finish_reason = match candidate.finish_reason.as_deref() {
        Some("STOP") | None => FinishReason::Stop,
        Some("MAX_TOKENS") => FinishReason::Length,
        Some("SAFETY") | Some("PROHIBITED_CONTENT") | Some("BLOCKLIST") => {
            FinishReason::ContentFilter
        }
        _ => FinishReason::Unknown,
    };

    Ok(LlmResponse {
        content,
        finish_reason,
    })
}

// =============================================================================
// Generative Language API types
// =============================================================================

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<Content>,
    contents: Vec<Content>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_output_tokens: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    finish_reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_carries_system_instruction_and_temperature() {
        let request = LlmRequest::new("A viewer sent a Rose")
            .with_system_prompt("You are a brave adventurer")
            .with_temperature(1.0);

        let json = serde_json::to_value(build_request(&request)).expect("serializable");

        assert_eq!(
            json["systemInstruction"]["parts"][0]["text"],
            "You are a brave adventurer"
        );
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["contents"][0]["parts"][0]["text"], "A viewer sent a Rose");
        assert_eq!(json["generationConfig"]["temperature"], 1.0);
        assert!(json["generationConfig"].get("maxOutputTokens").is_none());
    }

    #[test]
    fn parts_are_concatenated() {
        let body = r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Thanks "},{"text":"@jean!"}]},"finishReason":"STOP"}]}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).expect("valid body");

        let response = convert_response(parsed).expect("has text");
        assert_eq!(response.content, "Thanks @jean!");
        assert_eq!(response.finish_reason, FinishReason::Stop);
    }

    #[test]
    fn blocked_prompt_without_candidates_is_invalid() {
        let body = r#"{"promptFeedback":{"blockReason":"SAFETY"}}"#;
        let parsed: GenerateContentResponse = serde_json::from_str(body).expect("valid body");
        assert!(matches!(
            convert_response(parsed),
            Err(LlmError::InvalidResponse(_))
        ));
    }

    #[test]
    fn endpoint_includes_model() {
        let client = GeminiClient::new(DEFAULT_GEMINI_BASE_URL, "gemini-2.5-flash", "key", 30);
        assert_eq!(
            client.endpoint(),
            "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }
}
