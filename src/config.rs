//! Synchronizer configuration.
//!
//! Defaults reproduce the stock behavior: watch
//! `(prefers-color-scheme: dark)` and toggle the `dark` / `light` classes.
//! An embedding page may hand in a partial JSON object; absent fields keep
//! their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::theme::{DARK_TOKEN, LIGHT_TOKEN, Theme};

pub const DEFAULT_MEDIA_QUERY: &str = "(prefers-color-scheme: dark)";
pub const DEFAULT_STARTUP_LINE: &str = "test";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SyncConfig {
    /// Media query whose match state means "dark requested".
    pub media_query: String,
    pub dark_token: String,
    pub light_token: String,
    /// Logged once at startup. `None` disables it.
    pub startup_line: Option<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            media_query: DEFAULT_MEDIA_QUERY.to_string(),
            dark_token: DARK_TOKEN.to_string(),
            light_token: LIGHT_TOKEN.to_string(),
            startup_line: Some(DEFAULT_STARTUP_LINE.to_string()),
        }
    }
}

impl SyncConfig {
    /// Parse and validate a JSON config object.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or unknown fields, and
    /// any error from [`SyncConfig::validate`].
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check the tokens and query are usable as DOM class names / media text.
    ///
    /// # Errors
    ///
    /// Returns the first violated rule.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_token("dark", &self.dark_token)?;
        check_token("light", &self.light_token)?;
        if self.dark_token == self.light_token {
            return Err(ConfigError::DuplicateTokens(self.dark_token.clone()));
        }
        if self.media_query.trim().is_empty() {
            return Err(ConfigError::EmptyMediaQuery);
        }
        Ok(())
    }

    /// Marker token configured for `theme`.
    #[must_use]
    pub fn token(&self, theme: Theme) -> &str {
        match theme {
            Theme::Dark => &self.dark_token,
            Theme::Light => &self.light_token,
        }
    }
}

fn check_token(field: &'static str, token: &str) -> Result<(), ConfigError> {
    if token.is_empty() {
        return Err(ConfigError::EmptyToken { field });
    }
    if token.chars().any(|c| c.is_ascii_whitespace()) {
        return Err(ConfigError::WhitespaceInToken { field, token: token.to_string() });
    }
    Ok(())
}
