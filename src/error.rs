//! Configuration errors.
//!
//! Host faults (a missing root element, a class list that refuses a token)
//! are not represented here. They travel through the seams' own error types
//! untouched.

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config parse failed: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{field} token must not be empty")]
    EmptyToken { field: &'static str },

    #[error("{field} token {token:?} contains whitespace")]
    WhitespaceInToken { field: &'static str, token: String },

    #[error("dark and light tokens must differ, both are {0:?}")]
    DuplicateTokens(String),

    #[error("media query must not be empty")]
    EmptyMediaQuery,

    #[error("unknown theme: {0:?}")]
    UnknownTheme(String),
}
