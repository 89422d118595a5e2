use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Datelike;

use crate::export::DEFAULT_EDITOR_URL;
use crate::render::DocumentSettings;

/// Application configuration loaded from environment variables.
/// Nothing is required at startup: a missing API key only fails at generate time.
#[derive(Debug, Clone)]
pub struct Config {
    pub gemini_api_key: Option<String>,
    /// Overrides the Gemini endpoint (local stubs, proxies).
    pub gemini_api_base: Option<String>,
    pub port: u16,
    pub rust_log: String,
    pub editor_url: String,
    pub signing_place: String,
    pub document_year: i32,
    pub session_ttl: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            gemini_api_key: optional_env("GEMINI_API_KEY").or_else(|| optional_env("API_KEY")),
            gemini_api_base: optional_env("GEMINI_API_BASE"),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            editor_url: optional_env("EDITOR_URL")
                .unwrap_or_else(|| DEFAULT_EDITOR_URL.to_string()),
            signing_place: optional_env("SIGNING_PLACE")
                .unwrap_or_else(|| "Banyuwangi".to_string()),
            document_year: match optional_env("DOCUMENT_YEAR") {
                Some(year) => year
                    .parse::<i32>()
                    .context("DOCUMENT_YEAR must be a year, e.g. 2026")?,
                None => chrono::Local::now().year(),
            },
            session_ttl: Duration::from_secs(
                std::env::var("SESSION_TTL_MINUTES")
                    .unwrap_or_else(|_| "120".to_string())
                    .parse::<u64>()
                    .context("SESSION_TTL_MINUTES must be a whole number of minutes")?
                    * 60,
            ),
        })
    }

    pub fn document_settings(&self) -> DocumentSettings {
        DocumentSettings::new(self.signing_place.clone(), self.document_year)
    }
}

/// Reads a variable, treating unset and blank the same.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
