//! LeisBR Search - Structural indexer and retriever for legal document trees.
//!
//! Builds lookup indexes over a [`leisbr_corpus::Document`] in one tree walk
//! and answers structural and textual queries without re-walking the tree:
//!
//! - exact citation-path lookup,
//! - per-kind listing in document order (e.g. "all Artigos"),
//! - full-text search with accent-insensitive tokens and term-frequency
//!   ranking.
//!
//! Both the document and the index are immutable once built; a new version
//! of a law is a new document and a full index rebuild.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use leisbr_corpus::{Document, RawUnit, UnitKind};
//! use leisbr_search::Searcher;
//!
//! let records = vec![
//!     RawUnit::new(UnitKind::Titulo, "Título I", "", 1),
//!     RawUnit::new(UnitKind::Artigo, "Art. 1º", "Todo poder emana do povo", 2),
//! ];
//! let doc = Document::build("Constituição Federal", records)?;
//! let searcher = Searcher::new(Arc::new(doc));
//!
//! let hits = searcher.search_text("povo")?;
//! assert_eq!(hits[0].unit.label, "Art. 1º");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod error;
pub mod index;
pub mod normalize;
pub mod searcher;

// Re-export commonly used items
pub use error::{Result, SearchError};
pub use index::{DocumentIndex, Posting};
pub use normalize::{normalize_token, tokenize};
pub use searcher::{SearchHit, Searcher};
