//! Core data types for the document model.
//!
//! These types represent the structural units of Brazilian legal texts
//! (Constitution, codes, ordinary laws) and the raw records consumed by
//! [`Document::build`](crate::Document::build).

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kinds of structural units in Brazilian legislation.
///
/// The set is closed and ordered from outermost container to innermost
/// subdivision. The preamble is document metadata, not a unit kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitKind {
    /// Book (Livro).
    #[serde(rename = "LIVRO")]
    Livro,

    /// Title (Título).
    #[serde(rename = "TITULO")]
    Titulo,

    /// Chapter (Capítulo).
    #[serde(rename = "CAPITULO")]
    Capitulo,

    /// Section (Seção).
    #[serde(rename = "SECAO")]
    Secao,

    /// Subsection (Subseção).
    #[serde(rename = "SUBSECAO")]
    Subsecao,

    /// Article (Artigo).
    #[serde(rename = "ARTIGO")]
    Artigo,

    /// Paragraph (Parágrafo).
    #[serde(rename = "PARAGRAFO")]
    Paragrafo,

    /// Clause (Inciso).
    #[serde(rename = "INCISO")]
    Inciso,

    /// Item (Alínea).
    #[serde(rename = "ALINEA")]
    Alinea,
}

impl UnitKind {
    /// Get the string value used in serialized output.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Livro => "LIVRO",
            Self::Titulo => "TITULO",
            Self::Capitulo => "CAPITULO",
            Self::Secao => "SECAO",
            Self::Subsecao => "SUBSECAO",
            Self::Artigo => "ARTIGO",
            Self::Paragrafo => "PARAGRAFO",
            Self::Inciso => "INCISO",
            Self::Alinea => "ALINEA",
        }
    }

    /// Get the accented Portuguese name, as used in citations and messages.
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Livro => "Livro",
            Self::Titulo => "Título",
            Self::Capitulo => "Capítulo",
            Self::Secao => "Seção",
            Self::Subsecao => "Subseção",
            Self::Artigo => "Artigo",
            Self::Paragrafo => "Parágrafo",
            Self::Inciso => "Inciso",
            Self::Alinea => "Alínea",
        }
    }

    /// Kinds that may appear as direct children of this kind.
    ///
    /// Listed in citation order. An `Alinea` is a leaf and admits none.
    #[must_use]
    pub fn allowed_children(&self) -> &'static [UnitKind] {
        match self {
            Self::Livro => &[Self::Titulo],
            Self::Titulo => &[Self::Artigo, Self::Capitulo],
            Self::Capitulo => &[Self::Artigo, Self::Secao],
            Self::Secao => &[Self::Artigo, Self::Subsecao],
            Self::Subsecao => &[Self::Artigo],
            Self::Artigo => &[Self::Inciso, Self::Paragrafo],
            Self::Paragrafo => &[Self::Inciso],
            Self::Inciso => &[Self::Alinea],
            Self::Alinea => &[],
        }
    }

    /// Check whether `child` is a legal direct child of this kind.
    #[must_use]
    pub fn can_contain(&self, child: UnitKind) -> bool {
        self.allowed_children().contains(&child)
    }

    /// Position of this kind in the outermost-to-innermost ordering.
    ///
    /// Used when deriving nesting depth from a flat paragraph stream: a unit
    /// closes every open unit whose level is greater than or equal to its own.
    #[must_use]
    pub fn hierarchy_level(&self) -> u8 {
        match self {
            Self::Livro => 0,
            Self::Titulo => 1,
            Self::Capitulo => 2,
            Self::Secao => 3,
            Self::Subsecao => 4,
            Self::Artigo => 5,
            Self::Paragrafo => 6,
            Self::Inciso => 7,
            Self::Alinea => 8,
        }
    }
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One input record for [`Document::build`](crate::Document::build).
///
/// Records arrive in citation order; `depth` is 1 for units directly under
/// the document root and grows by at most one per record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawUnit {
    /// Kind of the unit.
    pub kind: UnitKind,

    /// Citation label (e.g., "Art. 5º", "Inciso II", "Alínea a)").
    pub label: String,

    /// Raw text attached directly to this unit. Containers such as Livro or
    /// Título typically carry only a heading; may be empty.
    pub text: String,

    /// 1-based nesting depth.
    pub depth: usize,
}

impl RawUnit {
    /// Create a new raw record.
    #[must_use]
    pub fn new(
        kind: UnitKind,
        label: impl Into<String>,
        text: impl Into<String>,
        depth: usize,
    ) -> Self {
        Self {
            kind,
            label: label.into(),
            text: text.into(),
            depth,
        }
    }
}
