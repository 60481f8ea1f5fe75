//! Error types for the indexer/retriever.

use thiserror::Error;

/// Main error type for query operations.
///
/// A failed lookup is always typed: [`SearchError::PathNotFound`] means the
/// citation path did not resolve, while an empty result vector from a valid
/// query means the query matched nothing.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A citation path did not resolve to any indexed unit.
    #[error("No unit found for citation path: {path}")]
    PathNotFound { path: String },

    /// A search query contained no searchable terms after normalization.
    #[error("Invalid query '{query}': no searchable terms")]
    EmptyQuery { query: String },
}

/// Result type alias for query operations.
pub type Result<T> = std::result::Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SearchError::PathNotFound {
            path: "Título II".to_string(),
        };
        assert_eq!(err.to_string(), "No unit found for citation path: Título II");

        let err = SearchError::EmptyQuery {
            query: "—".to_string(),
        };
        assert!(err.to_string().contains("no searchable terms"));
    }
}
