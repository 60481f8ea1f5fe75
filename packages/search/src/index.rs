//! Index structures built from one document walk.
//!
//! A [`DocumentIndex`] is built exactly once per document version
//! (`Unindexed -> Indexed`, one-way); a new version of the law means a new
//! document and a full rebuild, never an incremental update.

use std::collections::HashMap;

use leisbr_corpus::{Document, UnitId, UnitKind};

use crate::normalize::tokenize;

/// One inverted-index entry: a unit and how often a token occurs in its text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    /// Unit whose text contains the token.
    pub unit: UnitId,

    /// Term frequency within that unit's own text.
    pub count: u32,
}

/// Lookup structures over one immutable [`Document`].
///
/// Three maps, all populated in a single preorder walk:
/// citation path → unit, unit kind → units in document order, and
/// normalized token → postings.
#[derive(Debug, Default)]
pub struct DocumentIndex {
    by_path: HashMap<Vec<String>, UnitId>,
    by_kind: HashMap<UnitKind, Vec<UnitId>>,
    postings: HashMap<String, Vec<Posting>>,
}

impl DocumentIndex {
    /// Walk the document once and populate all three maps.
    ///
    /// Infallible: the document was already validated by its own `build`, and
    /// citation paths are unique by construction.
    #[must_use]
    pub fn build(document: &Document) -> Self {
        let mut index = Self::default();

        for (id, unit) in document.iter() {
            let path: Vec<String> = document
                .path_of(id)
                .iter()
                .map(|unit| unit.label.clone())
                .collect();
            index.by_path.insert(path, id);

            index.by_kind.entry(unit.kind).or_default().push(id);

            let mut counts: HashMap<String, u32> = HashMap::new();
            for token in tokenize(&unit.text) {
                *counts.entry(token).or_insert(0) += 1;
            }
            for (token, count) in counts {
                // Units are visited in ascending id order, so each posting
                // list stays sorted by document order.
                index
                    .postings
                    .entry(token)
                    .or_default()
                    .push(Posting { unit: id, count });
            }
        }

        tracing::debug!(
            units = document.len(),
            tokens = index.postings.len(),
            "Document index built"
        );
        index
    }

    /// Exact structural lookup by citation path.
    #[must_use]
    pub fn unit_by_path<S: AsRef<str>>(&self, labels: &[S]) -> Option<UnitId> {
        let key: Vec<String> = labels.iter().map(|s| s.as_ref().to_string()).collect();
        self.by_path.get(&key).copied()
    }

    /// All units of one kind, in document order. Empty when none exist.
    #[must_use]
    pub fn units_of_kind(&self, kind: UnitKind) -> &[UnitId] {
        self.by_kind.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Postings for one already-normalized token, sorted by document order.
    #[must_use]
    pub fn postings_for(&self, token: &str) -> &[Posting] {
        self.postings.get(token).map_or(&[], Vec::as_slice)
    }

    /// Number of distinct tokens in the inverted index.
    #[must_use]
    pub fn token_count(&self) -> usize {
        self.postings.len()
    }
}
