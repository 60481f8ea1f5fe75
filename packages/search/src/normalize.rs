//! Token normalization for full-text indexing and queries.
//!
//! Index time and query time must agree on one deterministic, total
//! normalization, so both go through [`tokenize`].

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Normalize one raw token.
///
/// Lowercases, folds accents (NFKD decomposition with combining marks
/// dropped, so "Constituição" and "constituicao" normalize identically, and
/// ordinal markers like "5º" become "5o") and strips anything that is not
/// alphanumeric. Total: every input maps to exactly one output, possibly
/// empty.
#[must_use]
pub fn normalize_token(raw: &str) -> String {
    raw.nfkd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Split text into normalized tokens.
///
/// Word boundaries are runs of non-alphanumeric characters (combining marks
/// are kept inside words so pre-decomposed input does not split). Empty
/// normalized forms are dropped.
#[must_use]
pub fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !c.is_alphanumeric() && !is_combining_mark(c))
        .map(normalize_token)
        .filter(|token| !token.is_empty())
        .collect()
}
