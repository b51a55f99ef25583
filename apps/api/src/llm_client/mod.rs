//! LLM Client — the single point of entry for all Gemini API calls in Compass.
//!
//! ARCHITECTURAL RULE: No other module may call the Gemini API directly.
//! All LLM interactions MUST go through this module.
//!
//! Model: gemini-pro (hardcoded — do not make configurable to prevent drift)

use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
/// The model used for all LLM calls in Compass.
/// This is intentionally hardcoded to prevent accidental drift.
pub const MODEL: &str = "gemini-pro";

// Generation parameters. These match what the chat clients were tuned
// against; change them together with the clients, not here alone.
const TEMPERATURE: f64 = 0.7;
const TOP_K: u32 = 40;
const TOP_P: f64 = 0.95;
const MAX_OUTPUT_TOKENS: u32 = 1024;

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

/// One conversational turn in Gemini's wire format. Gemini knows only the
/// "user" and "model" roles; system text travels separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub role: String,
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Part {
    pub text: String,
}

impl Content {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }

    pub fn model(text: impl Into<String>) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part { text: text.into() }],
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: &'a [Content],
    #[serde(skip_serializing_if = "Option::is_none")]
    system_instruction: Option<SystemInstruction>,
    generation_config: GenerationConfig,
}

/// System text rides in its own field rather than as a turn; it has no role.
#[derive(Debug, Serialize)]
struct SystemInstruction {
    parts: Vec<Part>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    temperature: f64,
    top_k: u32,
    top_p: f64,
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(rename = "usageMetadata")]
    pub usage_metadata: Option<UsageMetadata>,
}

/// A candidate may arrive without content (e.g. when generation stopped for
/// safety reasons); callers must treat that as empty output.
#[derive(Debug, Deserialize)]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    pub prompt_token_count: Option<u32>,
    pub candidates_token_count: Option<u32>,
}

impl GenerateContentResponse {
    /// Extracts the first non-empty text part of the first candidate.
    pub fn text(&self) -> Option<&str> {
        self.candidates
            .first()?
            .content
            .as_ref()?
            .parts
            .iter()
            .map(|part| part.text.as_str())
            .find(|text| !text.is_empty())
    }
}

#[derive(Debug, Deserialize)]
struct GeminiError {
    error: GeminiErrorBody,
}

#[derive(Debug, Deserialize)]
struct GeminiErrorBody {
    message: String,
}

/// The single LLM client used by all services in Compass.
/// Wraps the Gemini generateContent API. Calls are single-shot: the chat
/// layer falls back to rule-based replies on any error, so there is no
/// retry loop here.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
}

impl LlmClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(120))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
        }
    }

    /// Generates a reply for the given conversation.
    ///
    /// `contents` must be the full ordered turn list ending with the latest
    /// user message; `system` (when present) is sent as the system
    /// instruction.
    pub async fn generate(
        &self,
        system: Option<&str>,
        contents: &[Content],
    ) -> Result<String, LlmError> {
        let request_body = GenerateContentRequest {
            contents,
            system_instruction: system.map(|text| SystemInstruction {
                parts: vec![Part {
                    text: text.to_string(),
                }],
            }),
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let url = format!("{GEMINI_API_BASE}/{MODEL}:generateContent");
        let response = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Try to parse error message
            let message = serde_json::from_str::<GeminiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.text().await?;
        let reply: GenerateContentResponse = serde_json::from_str(&body)?;

        if let Some(reason) = reply
            .candidates
            .first()
            .and_then(|candidate| candidate.finish_reason.as_deref())
        {
            if reason != "STOP" {
                warn!("LLM generation finished early: {reason}");
            }
        }

        if let Some(usage) = &reply.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={:?}, candidate_tokens={:?}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        let text = reply.text().ok_or(LlmError::EmptyContent)?;
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_serialization_uses_camel_case_keys() {
        let contents = vec![Content::user("hello")];
        let request = GenerateContentRequest {
            contents: &contents,
            system_instruction: Some(SystemInstruction {
                parts: vec![Part {
                    text: "context".to_string(),
                }],
            }),
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["contents"][0]["role"], "user");
        assert_eq!(json["systemInstruction"]["parts"][0]["text"], "context");
        assert_eq!(json["generationConfig"]["topK"], 40);
        assert_eq!(json["generationConfig"]["topP"], 0.95);
        assert_eq!(json["generationConfig"]["maxOutputTokens"], 1024);
    }

    #[test]
    fn test_system_instruction_is_omitted_when_absent() {
        let contents = vec![Content::user("hello")];
        let request = GenerateContentRequest {
            contents: &contents,
            system_instruction: None,
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                top_k: TOP_K,
                top_p: TOP_P,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("systemInstruction").is_none());
    }

    #[test]
    fn test_text_extraction_from_response() {
        let raw = r#"{
            "candidates": [
                {
                    "content": {
                        "parts": [{"text": "Consider data science."}],
                        "role": "model"
                    },
                    "finishReason": "STOP"
                }
            ],
            "usageMetadata": {"promptTokenCount": 12, "candidatesTokenCount": 5}
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.text(), Some("Consider data science."));
        assert_eq!(response.usage_metadata.unwrap().prompt_token_count, Some(12));
    }

    #[test]
    fn test_text_is_none_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_text_is_none_for_safety_blocked_candidate() {
        let raw = r#"{"candidates": [{"finishReason": "SAFETY"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_error_body_parsing() {
        let raw = r#"{"error": {"code": 400, "message": "API key not valid", "status": "INVALID_ARGUMENT"}}"#;
        let parsed: GeminiError = serde_json::from_str(raw).unwrap();
        assert_eq!(parsed.error.message, "API key not valid");
    }
}
