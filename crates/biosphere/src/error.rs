//! Error types for the Biosphere library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Biosphere operations.
#[derive(Debug, Error)]
pub enum BiosphereError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Empty file or no data to analyze.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Two input columns normalize to the same name.
    #[error("Columns '{first}' and '{second}' both normalize to '{name}'")]
    NameCollision {
        name: String,
        first: String,
        second: String,
    },

    /// Columns passed to a table have different lengths.
    #[error("Column '{column}' has {found} values, expected {expected}")]
    RaggedColumns {
        column: String,
        found: usize,
        expected: usize,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Language model request failed.
    #[error("LLM error: {0}")]
    Llm(String),
}

/// Result type alias for Biosphere operations.
pub type Result<T> = std::result::Result<T, BiosphereError>;
