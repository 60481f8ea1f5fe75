//! Query surface over a document and its index.

use std::cmp::Reverse;
use std::collections::HashMap;
use std::sync::Arc;

use leisbr_corpus::{Document, Unit, UnitId, UnitKind};

use crate::error::{Result, SearchError};
use crate::index::DocumentIndex;
use crate::normalize::tokenize;

/// One full-text search result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    /// The matching unit.
    pub unit: &'a Unit,

    /// Id of the matching unit within the searched document.
    pub id: UnitId,

    /// Total term-frequency of the query terms within the unit's own text.
    pub score: u32,
}

/// Read-only retriever over one immutable document version.
///
/// Holds the document behind an `Arc` together with its index, so many
/// readers can share one `Searcher` (or clone the `Arc` further) without
/// locking. Replacing a document version means building a new `Searcher`
/// and dropping the old one once outstanding readers finish.
#[derive(Debug)]
pub struct Searcher {
    document: Arc<Document>,
    index: DocumentIndex,
}

impl Searcher {
    /// Index a document and wrap it in a query surface.
    #[must_use]
    pub fn new(document: Arc<Document>) -> Self {
        let index = DocumentIndex::build(&document);
        Self { document, index }
    }

    /// The indexed document.
    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Resolve a citation path to its unit.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::PathNotFound`] when any segment fails to match.
    pub fn query_by_path<S: AsRef<str>>(&self, labels: &[S]) -> Result<&Unit> {
        let id = self
            .index
            .unit_by_path(labels)
            .ok_or_else(|| SearchError::PathNotFound {
                path: labels
                    .iter()
                    .map(AsRef::as_ref)
                    .collect::<Vec<_>>()
                    .join(", "),
            })?;
        Ok(self.document.unit(id))
    }

    /// All units of one kind, in document order.
    ///
    /// An empty vector is a valid answer: the query was well-formed but the
    /// document has no units of that kind.
    #[must_use]
    pub fn query_by_kind(&self, kind: UnitKind) -> Vec<&Unit> {
        self.index
            .units_of_kind(kind)
            .iter()
            .map(|id| self.document.unit(*id))
            .collect()
    }

    /// Full-text search over unit texts.
    ///
    /// Query terms go through the same normalizer as the index. Results are
    /// scored by total term frequency within each unit's own text and sorted
    /// by descending score, ties broken by ascending document order.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::EmptyQuery`] when no searchable term survives
    /// normalization.
    pub fn search_text(&self, terms: &str) -> Result<Vec<SearchHit<'_>>> {
        let tokens = tokenize(terms);
        if tokens.is_empty() {
            return Err(SearchError::EmptyQuery {
                query: terms.to_string(),
            });
        }

        let mut scores: HashMap<UnitId, u32> = HashMap::new();
        for token in &tokens {
            for posting in self.index.postings_for(token) {
                *scores.entry(posting.unit).or_insert(0) += posting.count;
            }
        }

        let mut hits: Vec<(UnitId, u32)> = scores.into_iter().collect();
        hits.sort_by_key(|(id, score)| (Reverse(*score), *id));

        tracing::debug!(query = %terms, hits = hits.len(), "Text search completed");
        Ok(hits
            .into_iter()
            .map(|(id, score)| SearchHit {
                unit: self.document.unit(id),
                id,
                score,
            })
            .collect())
    }

    /// Full citation of a unit previously returned by a query.
    #[must_use]
    pub fn citation_of(&self, id: UnitId) -> String {
        self.document.citation_of(id)
    }
}
