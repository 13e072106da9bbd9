//! Error model for the edges of the translator (input parsing, output encoding).

use thiserror::Error;

/// Result type used across the workspace.
pub type TranslateResult<T> = Result<T, TranslateError>;

/// Edge-level error.
///
/// Translation itself is total; these only surface while reading raw input or
/// writing formatted output.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TranslateError {
    /// Input could not be interpreted (e.g. a bare JSON scalar).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// JSON encoding/decoding failed.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl TranslateError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for TranslateError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialization(value.to_string())
    }
}
