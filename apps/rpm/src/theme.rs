//! Light/dark preference, persisted as the `rpm_theme` cookie.
//!
//! Unset means "follow the system" (`prefers-color-scheme`).

use std::fmt;
use std::str::FromStr;

pub const THEME_COOKIE: &str = "rpm_theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The next theme after a toggle. From "system" the toggle picks dark.
    pub fn toggled(current: Option<Theme>) -> Theme {
        match current {
            Some(Theme::Dark) => Theme::Light,
            Some(Theme::Light) | None => Theme::Dark,
        }
    }

    /// Value of the page's `data-theme` attribute.
    pub fn attribute(current: Option<Theme>) -> &'static str {
        current.map(Theme::as_str).unwrap_or("system")
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(()),
        }
    }
}
