//! Validated, immutable tree of legal-text units.
//!
//! Units live in an arena (`Vec<Unit>`) and reference each other by index,
//! so ownership stays strictly top-down and the parent link is a plain
//! lookup key rather than a reverse pointer. Units are appended in record
//! order during [`Document::build`], which makes ascending [`UnitId`] equal
//! to preorder document order.

use serde::{Deserialize, Serialize};

use crate::error::{CorpusError, Result};
use crate::unit::{RawUnit, UnitKind};

/// Opaque handle to a unit within one [`Document`].
///
/// Ids are only meaningful for the document that issued them. Ordering
/// follows document order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UnitId(usize);

impl UnitId {
    /// Arena index of this unit.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// One node of the legal-text tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Unit {
    /// Kind of this unit.
    pub kind: UnitKind,

    /// Citation label (e.g., "Art. 5º").
    pub label: String,

    /// 1-based position among same-kind siblings under one parent.
    pub ordinal: u32,

    /// Raw text attached directly to this unit; empty for bare containers.
    pub text: String,

    /// Owning parent, `None` for units directly under the document root.
    pub parent: Option<UnitId>,

    /// Direct children in citation order.
    pub children: Vec<UnitId>,
}

/// One legal text as a validated, ordered, typed tree.
///
/// The document itself is the single root; top-level units are its children.
/// A `Document` is immutable once built and can be shared across readers
/// (typically behind an `Arc`) without locking.
#[derive(Debug, Clone)]
pub struct Document {
    title: String,
    units: Vec<Unit>,
    top_level: Vec<UnitId>,
}

impl Document {
    /// Assemble and validate a document from an ordered record sequence.
    ///
    /// Each record's depth must be either one deeper than the previous
    /// record (entering a child level) or at most the previous depth
    /// (closing levels). The nesting grammar of [`UnitKind::allowed_children`]
    /// is enforced at every step, and sibling labels must be unique so that
    /// every full citation path identifies exactly one unit.
    ///
    /// # Errors
    ///
    /// Returns a structural [`CorpusError`] on empty input, a malformed depth
    /// sequence, an illegal child kind, or a duplicate sibling label. Nothing
    /// is published on failure.
    pub fn build(
        title: impl Into<String>,
        records: impl IntoIterator<Item = RawUnit>,
    ) -> Result<Self> {
        let mut doc = Self {
            title: title.into(),
            units: Vec::new(),
            top_level: Vec::new(),
        };

        // Stack of open units; stack.len() is the current depth.
        let mut open: Vec<UnitId> = Vec::new();

        for (position, record) in records.into_iter().enumerate() {
            let previous = open.len();
            if record.depth == 0 || record.depth > previous + 1 {
                return Err(CorpusError::InvalidDepth {
                    position,
                    depth: record.depth,
                    previous,
                    max: previous + 1,
                });
            }
            open.truncate(record.depth - 1);

            let parent = open.last().copied();
            if let Some(parent_id) = parent {
                let parent_kind = doc.unit(parent_id).kind;
                if !parent_kind.can_contain(record.kind) {
                    return Err(CorpusError::IllegalChild {
                        parent: parent_kind,
                        child: record.kind,
                        label: record.label,
                    });
                }
            }

            let id = doc.attach(parent, record)?;
            open.push(id);
        }

        if doc.units.is_empty() {
            return Err(CorpusError::EmptyDocument);
        }

        tracing::debug!(
            title = %doc.title,
            units = doc.units.len(),
            "Document built"
        );
        Ok(doc)
    }

    /// Append a validated unit under `parent`, assigning its ordinal.
    fn attach(&mut self, parent: Option<UnitId>, record: RawUnit) -> Result<UnitId> {
        let siblings: &[UnitId] = match parent {
            Some(parent_id) => &self.unit(parent_id).children,
            None => &self.top_level,
        };

        if siblings
            .iter()
            .any(|id| self.unit(*id).label == record.label)
        {
            return Err(CorpusError::DuplicateSibling {
                label: record.label,
                parent: parent.map_or_else(
                    || "the document root".to_string(),
                    |id| self.citation_of(id),
                ),
            });
        }

        let ordinal = siblings
            .iter()
            .filter(|id| self.unit(**id).kind == record.kind)
            .count() as u32
            + 1;

        let id = UnitId(self.units.len());
        self.units.push(Unit {
            kind: record.kind,
            label: record.label,
            ordinal,
            text: record.text,
            parent,
            children: Vec::new(),
        });

        match parent {
            Some(parent_id) => self.units[parent_id.0].children.push(id),
            None => self.top_level.push(id),
        }
        Ok(id)
    }

    /// Document title (the root label, e.g. "Constituição Federal").
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Total number of units.
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the document has no units. Never true for a built document.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Units directly under the document root, in citation order.
    #[must_use]
    pub fn top_level(&self) -> &[UnitId] {
        &self.top_level
    }

    /// Look up a unit by id.
    ///
    /// Ids issued by this document are always valid, so this indexes
    /// directly; a foreign id is a logic error.
    #[must_use]
    pub fn unit(&self, id: UnitId) -> &Unit {
        &self.units[id.0]
    }

    /// Look up a unit by id, returning `None` for a foreign id.
    #[must_use]
    pub fn get(&self, id: UnitId) -> Option<&Unit> {
        self.units.get(id.0)
    }

    /// Direct children of a unit in citation order.
    #[must_use]
    pub fn children_of(&self, id: UnitId) -> &[UnitId] {
        &self.unit(id).children
    }

    /// Root-to-unit path, including the unit itself.
    #[must_use]
    pub fn path_of(&self, id: UnitId) -> Vec<&Unit> {
        let mut path = Vec::new();
        let mut current = Some(id);
        while let Some(unit_id) = current {
            let unit = self.unit(unit_id);
            path.push(unit);
            current = unit.parent;
        }
        path.reverse();
        path
    }

    /// Full citation of a unit: path labels joined with `", "`.
    ///
    /// E.g. `"Título I, Capítulo II, Art. 5º, Inciso II"`.
    #[must_use]
    pub fn citation_of(&self, id: UnitId) -> String {
        self.path_of(id)
            .iter()
            .map(|unit| unit.label.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Resolve a citation path (one label per segment) to a unit.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::PathNotFound`] when the path is empty or any
    /// segment does not match a child label at its level.
    pub fn find_by_path<S: AsRef<str>>(&self, labels: &[S]) -> Result<UnitId> {
        let not_found = || CorpusError::PathNotFound {
            path: labels
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(", "),
        };

        let mut candidates: &[UnitId] = &self.top_level;
        let mut resolved = None;
        for label in labels {
            let label = label.as_ref();
            let id = candidates
                .iter()
                .copied()
                .find(|id| self.unit(*id).label == label)
                .ok_or_else(|| not_found())?;
            candidates = &self.unit(id).children;
            resolved = Some(id);
        }
        resolved.ok_or_else(|| not_found())
    }

    /// Iterate over all units in document order (preorder).
    pub fn iter(&self) -> impl Iterator<Item = (UnitId, &Unit)> {
        self.units
            .iter()
            .enumerate()
            .map(|(index, unit)| (UnitId(index), unit))
    }
}
