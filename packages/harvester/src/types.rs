//! Core data types for the harvester.

use leisbr_corpus::{Document, RawUnit};
use leisbr_search::tokenize;

use crate::error::Result;

/// One harvested legal text, before document construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HarvestedLaw {
    /// Official title (e.g., "Constituição da República Federativa do Brasil").
    pub title: String,

    /// Where the text was harvested from (URL or local path).
    pub source: String,

    /// Preamble and page front matter preceding the first structural unit.
    pub preamble: Option<String>,

    /// Structural records in citation order, ready for `Document::build`.
    pub records: Vec<RawUnit>,
}

impl HarvestedLaw {
    /// Build the validated document tree for this law.
    ///
    /// # Errors
    ///
    /// Propagates structural errors from [`Document::build`].
    pub fn to_document(&self) -> Result<Document> {
        Ok(Document::build(self.title.clone(), self.records.iter().cloned())?)
    }

    /// Generate a filesystem-friendly slug from the title.
    ///
    /// Accents are folded and words joined with underscores, so
    /// "Constituição da República" becomes "constituicao_da_republica".
    #[must_use]
    pub fn to_slug(&self) -> String {
        tokenize(&self.title).join("_")
    }
}
