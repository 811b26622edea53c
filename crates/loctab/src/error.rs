//! Error types for culture parsing, table loading, and manifests.

use thiserror::Error;

/// Errors that occur when turning text into a [`Culture`](crate::Culture).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CultureError {
    /// The input is not a valid BCP 47 language identifier.
    #[error("invalid locale identifier '{input}': {reason}")]
    Invalid { input: String, reason: String },
}

/// Errors reported by a [`TableSource`](crate::TableSource) that could not
/// produce its table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableLoadError {
    /// The underlying asset failed to load.
    #[error("failed to load table '{source_name}': {reason}")]
    Failed { source_name: String, reason: String },
}

/// Errors that occur while reading a table manifest.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest is not valid JSON or does not match the expected shape.
    #[error("invalid manifest: {message}")]
    Json {
        line: usize,
        column: usize,
        message: String,
    },

    /// The manifest names a preferred language that is not a valid identifier.
    #[error("invalid manifest language: {0}")]
    Culture(#[from] CultureError),
}

impl From<serde_json::Error> for ManifestError {
    fn from(e: serde_json::Error) -> Self {
        ManifestError::Json {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}
