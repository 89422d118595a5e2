//! Browser pages: the form, the finished document, reset and theme toggle.
//!
//! Pages render from a `Session` snapshot; all state changes go through the
//! session controller.

use askama::Template;
use axum::{
    extract::State,
    http::{header, HeaderMap, HeaderValue},
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};
use tracing::info;

use crate::errors::AppError;
use crate::lesson::form::PEDAGOGY_KEY_PREFIX;
use crate::lesson::validation::MAX_MEETINGS;
use crate::lesson::vocab::{EducationLevel, GraduateDimension, PancaCinta, Pedagogy};
use crate::lesson::FormState;
use crate::render::render;
use crate::routes::cookies;
use crate::session::{GeneratedPlan, Session, SubmitError};
use crate::state::AppState;
use crate::theme::Theme;

/// Seconds between reloads while another tab is generating.
const BUSY_REFRESH_SECS: u32 = 3;

// ────────────────────────────────────────────────────────────────────────────
// View models
// ────────────────────────────────────────────────────────────────────────────

struct Choice {
    value: &'static str,
    selected: bool,
}

struct ClassGroup {
    level: &'static str,
    options: Vec<Choice>,
}

struct MeetingRow {
    name: String,
    number: usize,
    options: Vec<Choice>,
}

#[derive(Template)]
#[template(path = "form.html")]
struct FormPage<'a> {
    theme: &'static str,
    form: &'a FormState,
    error: String,
    busy: bool,
    refresh_secs: u32,
    levels: Vec<Choice>,
    class_groups: Vec<ClassGroup>,
    meetings: Vec<MeetingRow>,
    pedagogy_key_prefix: &'static str,
    pedagogy_labels: Vec<&'static str>,
    max_meetings: u32,
    dimensions: Vec<Choice>,
    panca_cinta: Vec<Choice>,
}

#[derive(Template)]
#[template(path = "result.html")]
struct ResultPage<'a> {
    theme: &'static str,
    subject: &'a str,
    grade_class: &'a str,
    document: String,
    editor_url: &'a str,
}

fn choices<T: Copy + PartialEq>(
    all: &[T],
    label: fn(T) -> &'static str,
    is_selected: impl Fn(T) -> bool,
) -> Vec<Choice> {
    all.iter()
        .map(|&value| Choice {
            value: label(value),
            selected: is_selected(value),
        })
        .collect()
}

fn form_page(
    theme: Option<Theme>,
    session: &Session,
    error: Option<String>,
) -> Result<String, AppError> {
    let form = &session.form;
    let page = FormPage {
        theme: Theme::attribute(theme),
        form,
        error: error.or_else(|| session.error.clone()).unwrap_or_default(),
        busy: session.is_generating(),
        refresh_secs: BUSY_REFRESH_SECS,
        levels: choices(EducationLevel::ALL, EducationLevel::label, |l| l == form.level),
        class_groups: EducationLevel::ALL
            .iter()
            .map(|&level| ClassGroup {
                level: level.label(),
                options: level
                    .class_options()
                    .iter()
                    .map(|&class| Choice {
                        value: class,
                        selected: level == form.level && class == form.grade_class.trim(),
                    })
                    .collect(),
            })
            .collect(),
        meetings: form
            .pedagogies()
            .iter()
            .enumerate()
            .map(|(i, &chosen)| MeetingRow {
                name: format!("{PEDAGOGY_KEY_PREFIX}{i}"),
                number: i + 1,
                options: choices(Pedagogy::ALL, Pedagogy::label, |p| p == chosen),
            })
            .collect(),
        pedagogy_key_prefix: PEDAGOGY_KEY_PREFIX,
        pedagogy_labels: Pedagogy::ALL.iter().map(|p| p.label()).collect(),
        max_meetings: MAX_MEETINGS,
        dimensions: choices(GraduateDimension::ALL, GraduateDimension::label, |d| {
            form.dimensions().contains(&d)
        }),
        panca_cinta: choices(PancaCinta::ALL, PancaCinta::label, |p| {
            form.panca_cinta().contains(&p)
        }),
    };
    Ok(page.render()?)
}

fn result_page(
    state: &AppState,
    theme: Option<Theme>,
    plan: &GeneratedPlan,
) -> Result<String, AppError> {
    let view = render(&plan.request, &plan.content, &state.document);
    let page = ResultPage {
        theme: Theme::attribute(theme),
        subject: &plan.request.subject,
        grade_class: &plan.request.grade_class,
        document: view.to_html()?,
        editor_url: &state.config.editor_url,
    };
    Ok(page.render()?)
}

fn with_cookie(mut response: Response, cookie: Option<HeaderValue>) -> Response {
    if let Some(cookie) = cookie {
        response.headers_mut().append(header::SET_COOKIE, cookie);
    }
    response
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
///
/// The finished document once the session is Ready, otherwise the form.
pub async fn handle_index(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let (id, new_cookie) = cookies::session_id(&headers);
    let theme = cookies::theme(&headers);
    let session = state.sessions.snapshot(id);

    let page = match session.plan() {
        Some(plan) => result_page(&state, theme, plan)?,
        None => form_page(theme, &session, None)?,
    };
    Ok(with_cookie(Html(page).into_response(), new_cookie))
}

/// POST /rpm
///
/// Submits the form. Success redirects to `/`, which then shows the
/// document; any failure re-renders the form with the input intact.
pub async fn handle_submit(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let (id, new_cookie) = cookies::session_id(&headers);
    let theme = cookies::theme(&headers);
    let form = FormState::from_pairs(&pairs);

    let response = match state.sessions.submit(id, form, state.generator.clone()).await {
        Ok(plan) => {
            info!(
                "RPM ready for session {id}: subject={}, class={}",
                plan.request.subject, plan.request.grade_class
            );
            Redirect::to("/").into_response()
        }
        Err(SubmitError::Discarded) => Redirect::to("/").into_response(),
        Err(e) => {
            let message = e.user_message();
            let status = AppError::from(e).status();
            let session = state.sessions.snapshot(id);
            (status, Html(form_page(theme, &session, Some(message))?)).into_response()
        }
    };
    Ok(with_cookie(response, new_cookie))
}

/// POST /reset
///
/// "Buat Baru": discards the document and starts an empty form.
pub async fn handle_reset(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let (id, new_cookie) = cookies::session_id(&headers);
    state.sessions.reset(id);
    with_cookie(Redirect::to("/").into_response(), new_cookie)
}

/// POST /theme
pub async fn handle_toggle_theme(headers: HeaderMap) -> Response {
    let theme = Theme::toggled(cookies::theme(&headers));
    with_cookie(Redirect::to("/").into_response(), cookies::theme_cookie(theme))
}
