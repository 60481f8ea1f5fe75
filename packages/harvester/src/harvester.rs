//! Main harvester service: source to structured law.

use std::fs;

use crate::error::{HarvestError, Result};
use crate::extract::classify_paragraphs;
use crate::html::extract_paragraphs;
use crate::http::{create_client, download_text};
use crate::types::HarvestedLaw;

/// Harvest a law from a URL or a local HTML file.
///
/// Downloads (or reads) the page, extracts its paragraphs, classifies them
/// into structural records and returns the harvested law. The document tree
/// is not built here; callers decide when to validate.
///
/// # Errors
///
/// Fails on download or IO errors, or when the source contains no
/// recognizable structural unit.
pub fn harvest_source(source: &str, title: &str) -> Result<HarvestedLaw> {
    let html = if source.starts_with("http://") || source.starts_with("https://") {
        tracing::info!(url = %source, "Downloading legislation page");
        let client = create_client()?;
        download_text(&client, source)?
    } else {
        tracing::info!(path = %source, "Reading legislation file");
        fs::read_to_string(source)?
    };

    let paragraphs = extract_paragraphs(&html);
    tracing::debug!(paragraphs = paragraphs.len(), "Extracted paragraphs");

    let extraction = classify_paragraphs(&paragraphs);
    if extraction.records.is_empty() {
        return Err(HarvestError::NoStructure);
    }

    Ok(HarvestedLaw {
        title: title.to_string(),
        source: source.to_string(),
        preamble: extraction.preamble,
        records: extraction.records,
    })
}
