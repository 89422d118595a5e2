//! Minimal cookie handling for the two cookies the pages use.

use axum::http::{header, HeaderMap, HeaderValue};
use uuid::Uuid;

use crate::theme::{Theme, THEME_COOKIE};

pub const SESSION_COOKIE: &str = "rpm_session";
const THEME_MAX_AGE_SECS: u64 = 60 * 60 * 24 * 365;

/// Value of cookie `name` from the request's `Cookie` headers.
pub fn read(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.trim().to_string())
}

/// The browser's session id, or a fresh one with the cookie that stores it.
pub fn session_id(headers: &HeaderMap) -> (Uuid, Option<HeaderValue>) {
    match read(headers, SESSION_COOKIE).and_then(|v| Uuid::parse_str(&v).ok()) {
        Some(id) => (id, None),
        None => {
            let id = Uuid::new_v4();
            (id, session_cookie(id))
        }
    }
}

fn session_cookie(id: Uuid) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{SESSION_COOKIE}={id}; Path=/; HttpOnly; SameSite=Lax"
    ))
    .ok()
}

pub fn theme(headers: &HeaderMap) -> Option<Theme> {
    read(headers, THEME_COOKIE).and_then(|v| v.parse().ok())
}

pub fn theme_cookie(theme: Theme) -> Option<HeaderValue> {
    HeaderValue::from_str(&format!(
        "{THEME_COOKIE}={theme}; Path=/; Max-Age={THEME_MAX_AGE_SECS}; SameSite=Lax"
    ))
    .ok()
}
