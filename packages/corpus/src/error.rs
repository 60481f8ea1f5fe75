//! Error types for the document model.

use thiserror::Error;

use crate::unit::UnitKind;

/// Main error type for document model operations.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// The input record sequence was empty.
    #[error("Empty input: a document requires at least one unit record")]
    EmptyDocument,

    /// A record's depth is inconsistent with a valid nesting.
    #[error(
        "Invalid depth {depth} at record {position}: \
         expected between 1 and {max} (previous depth {previous})"
    )]
    InvalidDepth {
        position: usize,
        depth: usize,
        previous: usize,
        max: usize,
    },

    /// A unit kind is not a legal child of its parent's kind.
    #[error("{child} '{label}' cannot appear inside {parent}")]
    IllegalChild {
        parent: UnitKind,
        child: UnitKind,
        label: String,
    },

    /// Two siblings under one parent share a label, so their citation paths
    /// would collide.
    #[error("Duplicate sibling label '{label}' under {parent}")]
    DuplicateSibling { label: String, parent: String },

    /// A citation path did not resolve to any unit.
    #[error("No unit found for citation path: {path}")]
    PathNotFound { path: String },
}

/// Result type alias for document model operations.
pub type Result<T> = std::result::Result<T, CorpusError>;
