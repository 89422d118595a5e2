//! Axum route handlers for the RPM JSON API.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::lesson::validation::{validate_request, MAX_MEETINGS, MIN_MEETINGS};
use crate::lesson::vocab::{EducationLevel, GraduateDimension, PancaCinta, Pedagogy};
use crate::lesson::{LessonPlanContent, LessonPlanRequest};
use crate::render::{render, DocumentSettings};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct LevelOptions {
    pub level: EducationLevel,
    pub classes: &'static [&'static str],
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyResponse {
    pub levels: Vec<LevelOptions>,
    pub pedagogies: &'static [Pedagogy],
    pub dimensions: &'static [GraduateDimension],
    pub panca_cinta: &'static [PancaCinta],
    pub min_meetings: u32,
    pub max_meetings: u32,
}

#[derive(Debug, Serialize)]
pub struct RenderedDocument {
    pub html: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub content: LessonPlanContent,
    pub document: RenderedDocument,
}

#[derive(Debug, Deserialize)]
pub struct RenderRequest {
    pub request: LessonPlanRequest,
    pub content: LessonPlanContent,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/rpm/vocabulary
///
/// Every controlled vocabulary, in display order, plus class options per level.
pub async fn handle_vocabulary() -> Json<VocabularyResponse> {
    Json(VocabularyResponse {
        levels: EducationLevel::ALL
            .iter()
            .map(|&level| LevelOptions {
                level,
                classes: level.class_options(),
            })
            .collect(),
        pedagogies: Pedagogy::ALL,
        dimensions: GraduateDimension::ALL,
        panca_cinta: PancaCinta::ALL,
        min_meetings: MIN_MEETINGS,
        max_meetings: MAX_MEETINGS,
    })
}

/// POST /api/v1/rpm/generate
///
/// Validates the request, calls the generator once and returns the content
/// together with the rendered document.
pub async fn handle_generate(
    State(state): State<AppState>,
    Json(request): Json<LessonPlanRequest>,
) -> Result<Json<GenerateResponse>, AppError> {
    ensure_valid(&request)?;

    let content = state.generator.generate(&request).await?;
    info!(
        "RPM generated via API: subject={}, class={}",
        request.subject, request.grade_class
    );

    let document = render_document(&request, &content, &state.document)?;
    Ok(Json(GenerateResponse { content, document }))
}

/// POST /api/v1/rpm/render
///
/// Renders previously generated content without calling the generator.
pub async fn handle_render(
    State(state): State<AppState>,
    Json(body): Json<RenderRequest>,
) -> Result<Json<RenderedDocument>, AppError> {
    ensure_valid(&body.request)?;
    let document = render_document(&body.request, &body.content, &state.document)?;
    Ok(Json(document))
}

fn ensure_valid(request: &LessonPlanRequest) -> Result<(), AppError> {
    let validation = validate_request(request);
    if validation.passed {
        Ok(())
    } else {
        Err(AppError::InvalidRequest(validation))
    }
}

fn render_document(
    request: &LessonPlanRequest,
    content: &LessonPlanContent,
    settings: &DocumentSettings,
) -> Result<RenderedDocument, AppError> {
    let view = render(request, content, settings);
    Ok(RenderedDocument {
        html: view.to_html()?,
        text: view.to_plain_text(),
    })
}
