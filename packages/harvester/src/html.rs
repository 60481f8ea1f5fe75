//! HTML paragraph extraction and text cleanup.
//!
//! The Planalto pages are presentation-heavy legacy HTML; the structural
//! signal lives entirely in `<p>` blocks. Revoked provisions are rendered
//! inside `<strike>` tags and must be dropped before extraction so that a
//! snapshot reflects the consolidated text.

use regex::Regex;
use std::sync::LazyLock;

/// `<strike>` blocks: revoked text on consolidated pages.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static STRIKE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<strike[^>]*>.*?</strike>").expect("valid regex"));

/// `<script>` blocks.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static SCRIPT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<script[^>]*>.*?</script>").expect("valid regex"));

/// `<style>` blocks.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<style[^>]*>.*?</style>").expect("valid regex"));

/// HTML comments.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static COMMENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("valid regex"));

/// One `<p>` block with its inner markup.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p[^>]*>(.*?)</p>").expect("valid regex"));

/// Any remaining tag.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid regex"));

/// Character and named entity references.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&(#x?[0-9a-fA-F]+|[a-zA-Z]+);").expect("valid regex"));

/// Runs of whitespace, including non-breaking spaces.
#[allow(clippy::expect_used)] // Static regex that is guaranteed to be valid
static WHITESPACE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Collapse whitespace runs to single spaces and trim.
#[must_use]
pub fn clean_whitespace(text: &str) -> String {
    let unified = text.replace('\u{a0}', " ");
    WHITESPACE_RE.replace_all(&unified, " ").trim().to_string()
}

/// Decode the entity references that occur on Planalto pages.
///
/// Numeric references (decimal and hex) are decoded generally; named
/// references cover the set seen in legislation markup. Unknown names are
/// left as-is.
#[must_use]
pub fn decode_entities(text: &str) -> String {
    ENTITY_RE
        .replace_all(text, |caps: &regex::Captures<'_>| {
            let body = &caps[1];
            if let Some(hex) = body.strip_prefix("#x").or_else(|| body.strip_prefix("#X")) {
                return u32::from_str_radix(hex, 16)
                    .ok()
                    .and_then(char::from_u32)
                    .map_or_else(|| caps[0].to_string(), String::from);
            }
            if let Some(dec) = body.strip_prefix('#') {
                return dec
                    .parse::<u32>()
                    .ok()
                    .and_then(char::from_u32)
                    .map_or_else(|| caps[0].to_string(), String::from);
            }
            match body {
                "amp" => "&".to_string(),
                "lt" => "<".to_string(),
                "gt" => ">".to_string(),
                "quot" => "\"".to_string(),
                "apos" => "'".to_string(),
                "nbsp" => " ".to_string(),
                "sect" => "§".to_string(),
                "ordm" => "º".to_string(),
                "ordf" => "ª".to_string(),
                // Accented letters as written in legacy ISO-8859-1 markup.
                "Aacute" => "Á".to_string(),
                "aacute" => "á".to_string(),
                "Eacute" => "É".to_string(),
                "eacute" => "é".to_string(),
                "Iacute" => "Í".to_string(),
                "iacute" => "í".to_string(),
                "Oacute" => "Ó".to_string(),
                "oacute" => "ó".to_string(),
                "Uacute" => "Ú".to_string(),
                "uacute" => "ú".to_string(),
                "Atilde" => "Ã".to_string(),
                "atilde" => "ã".to_string(),
                "Otilde" => "Õ".to_string(),
                "otilde" => "õ".to_string(),
                "Acirc" => "Â".to_string(),
                "acirc" => "â".to_string(),
                "Ecirc" => "Ê".to_string(),
                "ecirc" => "ê".to_string(),
                "Ocirc" => "Ô".to_string(),
                "ocirc" => "ô".to_string(),
                "Agrave" => "À".to_string(),
                "agrave" => "à".to_string(),
                "Ccedil" => "Ç".to_string(),
                "ccedil" => "ç".to_string(),
                _ => caps[0].to_string(),
            }
        })
        .into_owned()
}

/// Extract the visible text of every `<p>` block, in page order.
///
/// Strike-through (revoked), script and style content is removed first;
/// inner tags are stripped, entities decoded and whitespace collapsed.
/// Empty paragraphs are dropped.
#[must_use]
pub fn extract_paragraphs(html: &str) -> Vec<String> {
    let html = COMMENT_RE.replace_all(html, "");
    let html = SCRIPT_RE.replace_all(&html, "");
    let html = STYLE_RE.replace_all(&html, "");
    let html = STRIKE_RE.replace_all(&html, "");

    PARAGRAPH_RE
        .captures_iter(&html)
        .map(|caps| {
            let inner = TAG_RE.replace_all(&caps[1], " ");
            clean_whitespace(&decode_entities(&inner))
        })
        .filter(|text| !text.is_empty())
        .collect()
}
