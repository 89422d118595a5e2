//! RPM Generation — turns one validated request into generated content.
//!
//! Flow: build_prompt → response_schema → one LLM call → parse_content.
//!
//! Exactly one external call per request. Failures are not retried; the
//! caller shows `GenerationError::user_message()` and keeps the form intact.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

use crate::generation::prompts::{GENERATION_PROMPT_TEMPLATE, GENERATION_SYSTEM};
use crate::generation::schema::response_schema;
use crate::lesson::vocab::join_labels;
use crate::lesson::{LessonPlanContent, LessonPlanRequest};
use crate::llm_client::prompts::{CONCISE_INSTRUCTION, JSON_OUTPUT_INSTRUCTION};
use crate::llm_client::{extract_json, LlmClient, LlmError};

/// How much raw model output is logged when parsing fails.
const RAW_LOG_PREFIX_CHARS: usize = 200;

// ────────────────────────────────────────────────────────────────────────────
// Errors
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("no API key configured for the generation service")]
    Configuration,

    #[error("generation service returned no usable text")]
    EmptyResponse,

    #[error("generation service returned malformed content: {0}")]
    MalformedResponse(String),

    #[error("generation service call failed: {0}")]
    Service(String),
}

impl GenerationError {
    /// The single message shown to the teacher.
    pub fn user_message(&self) -> &'static str {
        match self {
            GenerationError::Configuration => {
                "API Key tidak ditemukan. Atur GEMINI_API_KEY sebelum membuat RPM."
            }
            GenerationError::EmptyResponse => "Tidak ada respons dari AI. Mohon coba lagi.",
            GenerationError::MalformedResponse(_) => {
                "Gagal memproses respons AI. Mohon coba lagi."
            }
            GenerationError::Service(_) => {
                "Terjadi kesalahan saat membuat RPM. Pastikan API KEY valid."
            }
        }
    }
}

impl From<LlmError> for GenerationError {
    fn from(error: LlmError) -> Self {
        match error {
            LlmError::MissingApiKey => GenerationError::Configuration,
            LlmError::EmptyContent | LlmError::Blocked(_) => GenerationError::EmptyResponse,
            LlmError::NoJsonObject | LlmError::Parse(_) => {
                GenerationError::MalformedResponse(error.to_string())
            }
            LlmError::Http(_) | LlmError::Api { .. } => GenerationError::Service(error.to_string()),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The content generator trait. Implement this to swap backends without
/// touching the session controller or handlers.
///
/// Carried in `AppState` as `Arc<dyn ContentGenerator>`.
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    async fn generate(
        &self,
        request: &LessonPlanRequest,
    ) -> Result<LessonPlanContent, GenerationError>;
}

/// Gemini-backed generator. All calls go through `LlmClient`.
pub struct GeminiGenerator {
    llm: LlmClient,
}

impl GeminiGenerator {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl ContentGenerator for GeminiGenerator {
    async fn generate(
        &self,
        request: &LessonPlanRequest,
    ) -> Result<LessonPlanContent, GenerationError> {
        if !self.llm.has_api_key() {
            return Err(GenerationError::Configuration);
        }

        let prompt = build_prompt(request);
        let schema = response_schema();
        info!(
            "Generating RPM: subject={}, class={} ({}), meetings={}",
            request.subject,
            request.grade_class,
            request.level,
            request.meeting_count
        );

        let text = self
            .llm
            .call_text(&prompt, GENERATION_SYSTEM, &schema)
            .await?;

        let content = parse_content(&text)?;
        info!("RPM generated: topic={:?}", content.design.topic);
        Ok(content)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Prompt and parsing
// ────────────────────────────────────────────────────────────────────────────

/// Fills the generation template with every field of the request.
pub fn build_prompt(request: &LessonPlanRequest) -> String {
    let pedagogy_lines = request
        .pedagogies
        .iter()
        .enumerate()
        .map(|(i, p)| format!("  * Pertemuan {}: {}", i + 1, p))
        .collect::<Vec<_>>()
        .join("\n");
    let meeting_count = request.meeting_count.to_string();
    let dimensions = join_labels(&request.dimensions);
    let panca_cinta = join_labels(&request.panca_cinta);

    fill_template(
        GENERATION_PROMPT_TEMPLATE,
        &[
            ("json_instruction", JSON_OUTPUT_INSTRUCTION),
            ("concise_instruction", CONCISE_INSTRUCTION),
            ("school_name", &request.school_name),
            ("teacher_name", &request.teacher_name),
            ("teacher_nip", &request.teacher_nip),
            ("principal_name", &request.principal_name),
            ("principal_nip", &request.principal_nip),
            ("level", request.level.label()),
            ("grade_class", &request.grade_class),
            ("subject", &request.subject),
            ("cp", &request.cp),
            ("tp", &request.tp),
            ("material", &request.material),
            ("meeting_count", &meeting_count),
            ("duration", &request.duration),
            ("pedagogy_lines", &pedagogy_lines),
            ("dimensions", &dimensions),
            ("panca_cinta", &panca_cinta),
        ],
    )
}

/// Single-pass `{name}` substitution. Inserted values are never rescanned,
/// so braces typed by the teacher stay literal. Unknown names are kept as-is.
fn fill_template(template: &str, values: &[(&str, &str)]) -> String {
    let mut output = String::with_capacity(template.len() * 2);
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let name = &after[..close];
            values
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value, close))
        });
        match replacement {
            Some((value, close)) => {
                output.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                output.push('{');
                rest = after;
            }
        }
    }
    output.push_str(rest);
    output
}

/// Parses model output into content: locate the JSON object, then
/// deserialize. Any failure is `MalformedResponse`; blank text is
/// `EmptyResponse`.
pub fn parse_content(text: &str) -> Result<LessonPlanContent, GenerationError> {
    if text.trim().is_empty() {
        return Err(GenerationError::EmptyResponse);
    }
    let parsed = extract_json(text)
        .and_then(|json| serde_json::from_str::<LessonPlanContent>(json).map_err(LlmError::from));
    parsed.map_err(|e| {
        warn!(
            "Failed to parse RPM content: {e}. Raw response starts with: {:?}",
            text.chars().take(RAW_LOG_PREFIX_CHARS).collect::<String>()
        );
        GenerationError::from(e)
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
