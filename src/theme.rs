//! The two-state theme model.
//!
//! `Light` and `Dark` are the only states. Every transition is driven by a
//! preference value (`true` means dark was requested); there is no terminal
//! state.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Canonical marker token for the dark theme.
pub const DARK_TOKEN: &str = "dark";
/// Canonical marker token for the light theme.
pub const LIGHT_TOKEN: &str = "light";

/// Active visual theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// Map a "dark requested" preference to a theme.
    #[must_use]
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark { Self::Dark } else { Self::Light }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The theme whose marker must be removed when this one is applied.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Canonical token (`"dark"` / `"light"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => LIGHT_TOKEN,
            Self::Dark => DARK_TOKEN,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let trimmed = raw.trim();
        if trimmed.eq_ignore_ascii_case(DARK_TOKEN) {
            Ok(Self::Dark)
        } else if trimmed.eq_ignore_ascii_case(LIGHT_TOKEN) {
            Ok(Self::Light)
        } else {
            Err(ConfigError::UnknownTheme(raw.to_string()))
        }
    }
}
