//! LeisBR Corpus - Document model for Brazilian legal texts.
//!
//! This crate represents one legal text (the Constitution, a código, an
//! ordinary lei) as a validated, ordered, typed tree of structural units:
//! Livro, Título, Capítulo, Seção, Subseção, Artigo, Parágrafo, Inciso and
//! Alínea. The tree is built once from an ordered record sequence, validated
//! against the nesting grammar, and immutable thereafter; readers share it
//! freely without locking.
//!
//! # Example
//!
//! ```
//! use leisbr_corpus::{Document, RawUnit, UnitKind};
//!
//! let records = vec![
//!     RawUnit::new(UnitKind::Titulo, "Título I", "Dos Princípios Fundamentais", 1),
//!     RawUnit::new(UnitKind::Artigo, "Art. 1º", "Todo o poder emana do povo.", 2),
//! ];
//! let doc = Document::build("Constituição Federal", records)?;
//!
//! let artigo = doc.find_by_path(&["Título I", "Art. 1º"])?;
//! assert_eq!(doc.citation_of(artigo), "Título I, Art. 1º");
//! # Ok::<(), leisbr_corpus::CorpusError>(())
//! ```
//!
//! # Architecture
//!
//! - [`unit`]: unit kinds, the nesting grammar, raw input records
//! - [`document`]: the arena-backed tree and its read-only traversal
//! - [`error`]: error types and Result alias

pub mod document;
pub mod error;
pub mod unit;

// Re-export commonly used items
pub use document::{Document, Unit, UnitId};
pub use error::{CorpusError, Result};
pub use unit::{RawUnit, UnitKind};
