//! Error types for the harvester.

use thiserror::Error;

/// Main error type for the harvester library.
#[derive(Debug, Error)]
pub enum HarvestError {
    /// Invalid snapshot date format.
    #[error("Invalid date: '{0}'. Expected YYYY-MM-DD (e.g., 2025-10-05)")]
    InvalidDate(String),

    /// HTTP request failed.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// All download attempts failed.
    #[error("Download failed after {attempts} attempts: {message}")]
    RetriesExhausted { attempts: u32, message: String },

    /// The response body exceeds the configured size cap.
    #[error("Response of {size} bytes exceeds the {limit} byte limit")]
    ResponseTooLarge { size: u64, limit: u64 },

    /// No structural unit was recognized in the source text.
    #[error("No recognizable structural units (Título, Art., §, ...) found in source")]
    NoStructure,

    /// Document construction failed.
    #[error(transparent)]
    Corpus(#[from] leisbr_corpus::CorpusError),

    /// Query failed.
    #[error(transparent)]
    Search(#[from] leisbr_search::SearchError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for harvester operations.
pub type Result<T> = std::result::Result<T, HarvestError>;
