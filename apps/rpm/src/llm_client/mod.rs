/// LLM Client — the single point of entry for all Gemini API calls.
///
/// ARCHITECTURAL RULE: No other module may call the generation service directly.
/// All LLM interactions MUST go through this module.
///
/// One request per call: no retries, no streaming, no client-side timeout.
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

pub mod prompts;

pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
/// The model used for every generation call.
pub const MODEL: &str = "gemini-3-pro-preview";
const JSON_MIME_TYPE: &str = "application/json";

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("no API key configured")]
    MissingApiKey,

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("prompt blocked by the service: {0}")]
    Blocked(String),

    #[error("LLM returned empty content")]
    EmptyContent,

    #[error("no JSON object found in LLM output")]
    NoJsonObject,

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// ────────────────────────────────────────────────────────────────────────────
// Wire types (generateContent)
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<RequestContent<'a>>,
    system_instruction: RequestContent<'a>,
    generation_config: GenerationConfig<'a>,
}

#[derive(Debug, Serialize)]
struct RequestContent<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    parts: Vec<RequestPart<'a>>,
}

#[derive(Debug, Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig<'a> {
    response_mime_type: &'a str,
    response_schema: &'a Value,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LlmResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    pub usage_metadata: Option<UsageMetadata>,
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default)]
    pub parts: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<String>,
}

impl LlmResponse {
    /// Concatenated text of the first candidate, or `None` when it is blank.
    pub fn text(&self) -> Option<String> {
        let parts = &self.candidates.first()?.content.as_ref()?.parts;
        let text: String = parts.iter().filter_map(|p| p.text.as_deref()).collect();
        if text.trim().is_empty() {
            None
        } else {
            Some(text)
        }
    }

    fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback.as_ref()?.block_reason.as_deref()
    }
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

// ────────────────────────────────────────────────────────────────────────────
// Client
// ────────────────────────────────────────────────────────────────────────────

/// The single LLM client used by the generator.
/// Wraps Gemini `generateContent` with structured-output helpers.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: Option<String>,
    api_base: String,
}

impl LlmClient {
    /// A blank key is treated as absent.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Makes one call to `generateContent` with JSON output constrained to
    /// `schema`, returning the full response object.
    ///
    /// Fails with `MissingApiKey` before any network I/O when no key is set.
    pub async fn call(
        &self,
        prompt: &str,
        system: &str,
        schema: &Value,
    ) -> Result<LlmResponse, LlmError> {
        let api_key = self.api_key.as_deref().ok_or(LlmError::MissingApiKey)?;

        let request_body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: Some("user"),
                parts: vec![RequestPart { text: prompt }],
            }],
            system_instruction: RequestContent {
                role: None,
                parts: vec![RequestPart { text: system }],
            },
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: schema,
            },
        };

        let url = format!("{}/models/{}:generateContent", self.api_base, MODEL);
        let response = self
            .client
            .post(url)
            .header("x-goog-api-key", api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ApiError>(&body)
                .map(|e| e.error.message)
                .unwrap_or(body);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let llm_response: LlmResponse = response.json().await?;

        if let Some(usage) = &llm_response.usage_metadata {
            debug!(
                "LLM call succeeded: prompt_tokens={}, output_tokens={}",
                usage.prompt_token_count, usage.candidates_token_count
            );
        }

        Ok(llm_response)
    }

    /// Calls the LLM and returns the text of the first candidate.
    pub async fn call_text(
        &self,
        prompt: &str,
        system: &str,
        schema: &Value,
    ) -> Result<String, LlmError> {
        let response = self.call(prompt, system, schema).await?;
        if let Some(reason) = response.block_reason() {
            return Err(LlmError::Blocked(reason.to_string()));
        }
        response.text().ok_or_else(|| {
            let finish_reason = response
                .candidates
                .first()
                .and_then(|c| c.finish_reason.as_deref());
            debug!("LLM returned no text (finish_reason: {finish_reason:?})");
            LlmError::EmptyContent
        })
    }
}

/// Locates the JSON object inside LLM output.
///
/// Strips ```json fences, then takes the span from the first `{` to the last
/// `}` so that stray prose around the object is dropped.
pub fn extract_json(text: &str) -> Result<&str, LlmError> {
    let text = strip_json_fences(text);
    let start = text.find('{').ok_or(LlmError::NoJsonObject)?;
    let end = text.rfind('}').ok_or(LlmError::NoJsonObject)?;
    if end < start {
        return Err(LlmError::NoJsonObject);
    }
    Ok(&text[start..=end])
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_json_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_json_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_json_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_extract_json_drops_surrounding_prose() {
        let input = "Berikut hasilnya:\n{\"a\": {\"b\": 1}}\nSemoga membantu!";
        assert_eq!(extract_json(input).unwrap(), "{\"a\": {\"b\": 1}}");
    }

    #[test]
    fn test_extract_json_without_braces_fails() {
        assert!(matches!(
            extract_json("Maaf, saya tidak bisa."),
            Err(LlmError::NoJsonObject)
        ));
        assert!(matches!(extract_json("} {"), Err(LlmError::NoJsonObject)));
    }

    #[test]
    fn test_response_text_joins_parts_of_first_candidate() {
        let response: LlmResponse = serde_json::from_value(serde_json::json!({
            "candidates": [
                {"content": {"parts": [{"text": "{\"a\":"}, {"text": " 1}"}]}, "finishReason": "STOP"},
                {"content": {"parts": [{"text": "ignored"}]}}
            ],
            "usageMetadata": {"promptTokenCount": 10, "candidatesTokenCount": 4}
        }))
        .unwrap();
        assert_eq!(response.text().as_deref(), Some("{\"a\": 1}"));
    }

    #[test]
    fn test_response_without_candidates_has_no_text() {
        let response: LlmResponse = serde_json::from_value(serde_json::json!({
            "promptFeedback": {"blockReason": "SAFETY"}
        }))
        .unwrap();
        assert!(response.text().is_none());
        assert_eq!(response.block_reason(), Some("SAFETY"));
    }

    #[test]
    fn test_blank_text_counts_as_empty() {
        let response: LlmResponse = serde_json::from_value(serde_json::json!({
            "candidates": [{"content": {"parts": [{"text": "  \n"}]}}]
        }))
        .unwrap();
        assert!(response.text().is_none());
    }

    #[test]
    fn test_request_body_carries_schema_and_mime_type() {
        let schema = serde_json::json!({"type": "OBJECT"});
        let body = GenerateContentRequest {
            contents: vec![RequestContent {
                role: Some("user"),
                parts: vec![RequestPart { text: "halo" }],
            }],
            system_instruction: RequestContent {
                role: None,
                parts: vec![RequestPart { text: "sistem" }],
            },
            generation_config: GenerationConfig {
                response_mime_type: JSON_MIME_TYPE,
                response_schema: &schema,
            },
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["contents"][0]["role"], "user");
        assert!(value["systemInstruction"].get("role").is_none());
        assert_eq!(
            value["generationConfig"]["responseMimeType"],
            "application/json"
        );
        assert_eq!(value["generationConfig"]["responseSchema"]["type"], "OBJECT");
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_before_network() {
        // Port 9 (discard) would fail with an HTTP error if a request were sent.
        let client = LlmClient::new(None).with_api_base("http://127.0.0.1:9");
        let result = client
            .call("prompt", "system", &serde_json::json!({}))
            .await;
        assert!(matches!(result, Err(LlmError::MissingApiKey)));
    }

    #[test]
    fn test_blank_api_key_is_absent() {
        assert!(!LlmClient::new(Some("   ".to_string())).has_api_key());
        assert!(LlmClient::new(Some("abc".to_string())).has_api_key());
    }
}
