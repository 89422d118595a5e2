use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::ContentGenerator;
use crate::render::DocumentSettings;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable generator. Default: GeminiGenerator; tests inject a fake.
    pub generator: Arc<dyn ContentGenerator>,
    pub sessions: SessionStore,
    /// Signing place and year printed on every document.
    pub document: DocumentSettings,
    pub config: Config,
}
