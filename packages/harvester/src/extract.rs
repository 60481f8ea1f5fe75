//! Classification of cleaned paragraphs into structural records.
//!
//! Each paragraph of a Planalto page either opens a structural unit
//! (recognizable by its marker: "TÍTULO I", "Art. 5º", "§ 2º", "I -",
//! "a)") or continues the most recent one. Nesting depth is derived from a
//! stack of open unit kinds ordered by [`UnitKind::hierarchy_level`].

use regex::Regex;
use std::sync::LazyLock;

use leisbr_corpus::{RawUnit, UnitKind};

use crate::roman::parse_roman;

/// "LIVRO I" headings.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static LIVRO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^LIVRO\s+([IVXLCDM]+)").expect("valid regex"));

/// "TÍTULO I" headings (accented or not).
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TITULO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^T[ÍI]TULO\s+([IVXLCDM]+)").expect("valid regex"));

/// "CAPÍTULO I" headings.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static CAPITULO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^CAP[ÍI]TULO\s+([IVXLCDM]+)").expect("valid regex"));

/// "SEÇÃO I" headings.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SECAO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SE[ÇC][ÃA]O\s+([IVXLCDM]+)").expect("valid regex"));

/// "SUBSEÇÃO I" headings.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SUBSECAO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^SUBSE[ÇC][ÃA]O\s+([IVXLCDM]+)").expect("valid regex"));

/// "Art. 5º" / "Art. 103-A" markers.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ARTIGO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Art\.\s*([0-9]+(?:-[A-Z])?º?)").expect("valid regex"));

/// "Parágrafo único" markers.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARAGRAFO_UNICO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^Par[áa]grafo\s+[úu]nico").expect("valid regex"));

/// "§ 1º" markers.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARAGRAFO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^§\s*([0-9]+º?)").expect("valid regex"));

/// "I -" inciso markers.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static INCISO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([IVXLCDM]+)\s*[-–—]").expect("valid regex"));

/// "a)" alínea markers.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ALINEA_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z])\s*\)").expect("valid regex"));

/// Result of classifying a paragraph stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Front matter preceding the first structural unit (the preamble).
    pub preamble: Option<String>,

    /// Structural records in citation order.
    pub records: Vec<RawUnit>,
}

/// Normalize a roman numeral captured from a heading or inciso marker.
///
/// Known source defects are corrected (the Planalto Constitution page once
/// numbered an inciso "VIX" instead of "IX"); anything else that fails
/// strict parsing is kept verbatim with a warning.
fn fix_roman_numeral(raw: &str) -> String {
    if parse_roman(raw).is_some() {
        return raw.to_string();
    }
    match raw {
        "VIX" => "IX".to_string(),
        _ => {
            tracing::warn!(numeral = %raw, "Non-canonical roman numeral in source");
            raw.to_string()
        }
    }
}

/// Strip the separator left between a marker and its text ("." or "-").
fn trim_marker_remainder(remainder: &str) -> String {
    remainder
        .trim_start()
        .trim_start_matches(['.', '-', '–', '—'])
        .trim()
        .to_string()
}

/// Classify one paragraph as the opening of a structural unit.
///
/// Returns the unit kind, its citation label, and the remaining text on the
/// same paragraph. `None` means the paragraph continues the previous unit.
#[must_use]
pub fn classify_paragraph(text: &str) -> Option<(UnitKind, String, String)> {
    if let Some(caps) = LIVRO_RE.captures(text) {
        let numeral = fix_roman_numeral(&caps[1]);
        let rest = trim_marker_remainder(&text[caps.get(0).map_or(0, |m| m.end())..]);
        return Some((UnitKind::Livro, format!("Livro {numeral}"), rest));
    }
    if let Some(caps) = TITULO_RE.captures(text) {
        let numeral = fix_roman_numeral(&caps[1]);
        let rest = trim_marker_remainder(&text[caps.get(0).map_or(0, |m| m.end())..]);
        return Some((UnitKind::Titulo, format!("Título {numeral}"), rest));
    }
    if let Some(caps) = CAPITULO_RE.captures(text) {
        let numeral = fix_roman_numeral(&caps[1]);
        let rest = trim_marker_remainder(&text[caps.get(0).map_or(0, |m| m.end())..]);
        return Some((UnitKind::Capitulo, format!("Capítulo {numeral}"), rest));
    }
    if let Some(caps) = SUBSECAO_RE.captures(text) {
        let numeral = fix_roman_numeral(&caps[1]);
        let rest = trim_marker_remainder(&text[caps.get(0).map_or(0, |m| m.end())..]);
        return Some((UnitKind::Subsecao, format!("Subseção {numeral}"), rest));
    }
    if let Some(caps) = SECAO_RE.captures(text) {
        let numeral = fix_roman_numeral(&caps[1]);
        let rest = trim_marker_remainder(&text[caps.get(0).map_or(0, |m| m.end())..]);
        return Some((UnitKind::Secao, format!("Seção {numeral}"), rest));
    }
    if let Some(caps) = ARTIGO_RE.captures(text) {
        let rest = trim_marker_remainder(&text[caps.get(0).map_or(0, |m| m.end())..]);
        return Some((UnitKind::Artigo, format!("Art. {}", &caps[1]), rest));
    }
    if let Some(m) = PARAGRAFO_UNICO_RE.find(text) {
        let rest = trim_marker_remainder(&text[m.end()..]);
        return Some((UnitKind::Paragrafo, "Parágrafo único".to_string(), rest));
    }
    if let Some(caps) = PARAGRAFO_RE.captures(text) {
        let rest = trim_marker_remainder(&text[caps.get(0).map_or(0, |m| m.end())..]);
        return Some((UnitKind::Paragrafo, format!("§ {}", &caps[1]), rest));
    }
    if let Some(caps) = INCISO_RE.captures(text) {
        let numeral = fix_roman_numeral(&caps[1]);
        let rest = trim_marker_remainder(&text[caps.get(0).map_or(0, |m| m.end())..]);
        return Some((UnitKind::Inciso, format!("Inciso {numeral}"), rest));
    }
    if let Some(caps) = ALINEA_RE.captures(text) {
        let rest = trim_marker_remainder(&text[caps.get(0).map_or(0, |m| m.end())..]);
        return Some((UnitKind::Alinea, format!("Alínea {})", &caps[1]), rest));
    }
    None
}

/// Classify a paragraph stream into structural records.
///
/// Paragraphs before the first recognized unit accumulate into the preamble.
/// Unrecognized paragraphs after that point continue the text of the most
/// recently opened unit, which is how the consolidated pages carry heading
/// subtitles and multi-paragraph article bodies.
#[must_use]
pub fn classify_paragraphs<I, S>(paragraphs: I) -> Extraction
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut records: Vec<RawUnit> = Vec::new();
    let mut preamble_parts: Vec<String> = Vec::new();
    // Kinds of currently open units; its length is the current depth.
    let mut open: Vec<UnitKind> = Vec::new();

    for paragraph in paragraphs {
        let paragraph = paragraph.as_ref();
        match classify_paragraph(paragraph) {
            Some((kind, label, text)) => {
                while open
                    .last()
                    .is_some_and(|last| last.hierarchy_level() >= kind.hierarchy_level())
                {
                    open.pop();
                }
                let depth = open.len() + 1;
                records.push(RawUnit::new(kind, label, text, depth));
                open.push(kind);
            }
            None => {
                if let Some(last) = records.last_mut() {
                    if last.text.is_empty() {
                        last.text = paragraph.to_string();
                    } else {
                        last.text.push(' ');
                        last.text.push_str(paragraph);
                    }
                } else {
                    preamble_parts.push(paragraph.to_string());
                }
            }
        }
    }

    tracing::debug!(
        records = records.len(),
        preamble_paragraphs = preamble_parts.len(),
        "Paragraph classification completed"
    );

    Extraction {
        preamble: if preamble_parts.is_empty() {
            None
        } else {
            Some(preamble_parts.join("\n\n"))
        },
        records,
    }
}
