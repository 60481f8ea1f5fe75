//! JSON snapshot writer and reader.
//!
//! One snapshot per law version, stored as `{output}/{slug}/{date}.json`.
//! The on-disk shape nests units exactly like the document tree, so a
//! snapshot can be re-read into an identical `Document`.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use leisbr_corpus::{Document, RawUnit, UnitId, UnitKind};

use crate::error::Result;
use crate::types::HarvestedLaw;

/// Unit representation for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonUnit {
    /// Unit kind, serialized SCREAMING_SNAKE (e.g. "ARTIGO").
    pub kind: UnitKind,

    /// Citation label.
    pub label: String,

    /// 1-based position among same-kind siblings.
    pub ordinal: u32,

    /// Unit text; omitted when empty.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Child units in citation order; omitted when empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<JsonUnit>,
}

/// Full snapshot representation for JSON serialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonDocument {
    /// Slug identifying the law.
    #[serde(rename = "$id")]
    pub id: String,

    /// Official title.
    pub title: String,

    /// Snapshot version date (YYYY-MM-DD).
    pub version: String,

    /// Where the text was harvested from.
    pub source: String,

    /// Preamble text, when the source has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,

    /// Top-level units.
    pub units: Vec<JsonUnit>,
}

/// A snapshot re-read from disk.
#[derive(Debug)]
pub struct LoadedSnapshot {
    /// The rebuilt, validated document tree.
    pub document: Document,

    /// Snapshot version date.
    pub version: String,

    /// Original harvest source.
    pub source: String,

    /// Preamble text, if stored.
    pub preamble: Option<String>,
}

fn unit_to_json(document: &Document, id: UnitId) -> JsonUnit {
    let unit = document.unit(id);
    JsonUnit {
        kind: unit.kind,
        label: unit.label.clone(),
        ordinal: unit.ordinal,
        text: unit.text.clone(),
        children: document
            .children_of(id)
            .iter()
            .map(|child| unit_to_json(document, *child))
            .collect(),
    }
}

/// Flatten a nested unit tree back into build records, preorder.
fn flatten_units(units: &[JsonUnit], depth: usize, out: &mut Vec<RawUnit>) {
    for unit in units {
        out.push(RawUnit::new(unit.kind, unit.label.clone(), unit.text.clone(), depth));
        flatten_units(&unit.children, depth + 1, out);
    }
}

/// Generate a snapshot structure from a harvested law.
///
/// # Errors
///
/// Fails when the law's records do not form a valid document.
pub fn generate_snapshot(law: &HarvestedLaw, version: &str) -> Result<JsonDocument> {
    let document = law.to_document()?;
    let units = document
        .top_level()
        .iter()
        .map(|id| unit_to_json(&document, *id))
        .collect();

    Ok(JsonDocument {
        id: law.to_slug(),
        title: law.title.clone(),
        version: version.to_string(),
        source: law.source.clone(),
        preamble: law.preamble.clone(),
        units,
    })
}

/// Generate the JSON text of a snapshot.
///
/// # Errors
///
/// Fails on invalid structure or serialization failure.
pub fn generate_json(law: &HarvestedLaw, version: &str) -> Result<String> {
    let snapshot = generate_snapshot(law, version)?;
    let mut content = serde_json::to_string_pretty(&snapshot)?;
    content.push('\n');
    Ok(content)
}

/// Save a harvested law as a versioned JSON snapshot.
///
/// Uses atomic write pattern: writes to temp file, syncs to disk, then
/// renames. This ensures partial writes don't corrupt existing files on
/// crash.
///
/// # Returns
/// Path to the saved file.
///
/// # Errors
///
/// Fails on invalid structure or IO failure.
pub fn save_json(law: &HarvestedLaw, version: &str, output_base: Option<&Path>) -> Result<PathBuf> {
    let output_base = output_base.unwrap_or(Path::new(crate::config::DEFAULT_OUTPUT_DIR));

    let output_dir = output_base.join(law.to_slug());
    fs::create_dir_all(&output_dir)?;

    let output_file = output_dir.join(format!("{version}.json"));
    let temp_file = output_dir.join(format!(".{version}.json.tmp"));

    let content = generate_json(law, version)?;

    // Write to temp file first, then sync and rename for atomicity
    {
        let mut file = File::create(&temp_file)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
    }

    // On Windows, rename fails if the destination already exists
    #[cfg(target_os = "windows")]
    if output_file.exists() {
        fs::remove_file(&output_file)?;
    }

    fs::rename(&temp_file, &output_file)?;

    Ok(output_file)
}

/// Load a snapshot from disk and rebuild its document.
///
/// The rebuilt tree goes through the same validation as the original
/// `build`, so a tampered or corrupted snapshot fails loudly.
///
/// # Errors
///
/// Fails on IO failure, malformed JSON, or invalid structure.
pub fn load_snapshot(path: &Path) -> Result<LoadedSnapshot> {
    let content = fs::read_to_string(path)?;
    let snapshot: JsonDocument = serde_json::from_str(&content)?;

    let mut records = Vec::new();
    flatten_units(&snapshot.units, 1, &mut records);
    let document = Document::build(snapshot.title, records)?;

    Ok(LoadedSnapshot {
        document,
        version: snapshot.version,
        source: snapshot.source,
        preamble: snapshot.preamble,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    use leisbr_corpus::RawUnit;

    fn sample_law() -> HarvestedLaw {
        HarvestedLaw {
            title: "Constituição da República Federativa do Brasil".to_string(),
            source: "https://example.com/constituicao.htm".to_string(),
            preamble: Some("Nós, representantes do povo brasileiro.".to_string()),
            records: vec![
                RawUnit::new(UnitKind::Titulo, "Título I", "Dos Princípios Fundamentais", 1),
                RawUnit::new(UnitKind::Artigo, "Art. 1º", "A República Federativa do Brasil:", 2),
                RawUnit::new(UnitKind::Inciso, "Inciso I", "a soberania;", 3),
                RawUnit::new(
                    UnitKind::Paragrafo,
                    "Parágrafo único",
                    "Todo o poder emana do povo.",
                    3,
                ),
            ],
        }
    }

    #[test]
    fn test_generate_json_shape() {
        let json = generate_json(&sample_law(), "2025-01-01").unwrap();

        assert!(json.contains("\"$id\": \"constituicao_da_republica_federativa_do_brasil\""));
        assert!(json.contains("\"version\": \"2025-01-01\""));
        assert!(json.contains("\"kind\": \"TITULO\""));
        assert!(json.contains("\"kind\": \"PARAGRAFO\""));
        assert!(json.ends_with('\n'));
    }

    #[test]
    fn test_generate_json_omits_empty_fields() {
        let law = HarvestedLaw {
            preamble: None,
            records: vec![RawUnit::new(UnitKind::Artigo, "Art. 1º", "", 1)],
            ..sample_law()
        };
        let json = generate_json(&law, "2025-01-01").unwrap();
        assert!(!json.contains("\"preamble\""));
        assert!(!json.contains("\"text\""));
        assert!(!json.contains("\"children\""));
    }

    #[test]
    fn test_generate_json_rejects_invalid_structure() {
        let law = HarvestedLaw {
            records: vec![
                RawUnit::new(UnitKind::Titulo, "Título I", "", 1),
                RawUnit::new(UnitKind::Alinea, "Alínea a)", "texto", 2),
            ],
            ..sample_law()
        };
        assert!(generate_json(&law, "2025-01-01").is_err());
    }

    #[test]
    fn test_save_json_layout() {
        let law = sample_law();
        let temp_dir = tempdir().unwrap();
        let path = save_json(&law, "2025-01-01", Some(temp_dir.path())).unwrap();

        assert!(path.exists());
        let path_str = path.to_string_lossy();
        assert!(path_str.contains("constituicao_da_republica_federativa_do_brasil"));
        assert!(path_str.ends_with("2025-01-01.json"));
        // No temp file left behind.
        assert!(!path.with_file_name(".2025-01-01.json.tmp").exists());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let law = sample_law();
        let temp_dir = tempdir().unwrap();
        let path = save_json(&law, "2025-01-01", Some(temp_dir.path())).unwrap();

        let loaded = load_snapshot(&path).unwrap();
        assert_eq!(loaded.version, "2025-01-01");
        assert_eq!(loaded.preamble, law.preamble);
        assert_eq!(loaded.document.title(), law.title);
        assert_eq!(loaded.document.len(), law.records.len());

        let paragrafo = loaded
            .document
            .find_by_path(&["Título I", "Art. 1º", "Parágrafo único"])
            .unwrap();
        assert_eq!(
            loaded.document.unit(paragrafo).text,
            "Todo o poder emana do povo."
        );
    }
}
