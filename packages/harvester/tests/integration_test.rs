//! End-to-end integration tests for the harvester pipeline.
//!
//! Tests the complete pipeline from HTML parsing to JSON snapshots using a
//! fixture fragment of the 1988 Constitution page.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pretty_assertions::assert_eq;

use leisbr_corpus::UnitKind;
use leisbr_harvester::json::{load_snapshot, save_json};
use leisbr_harvester::{harvest_source, HarvestedLaw};
use leisbr_search::Searcher;

/// Path to a fixture file.
fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Run the harvester pipeline on the constitution fixture.
fn run_pipeline() -> HarvestedLaw {
    let path = fixture_path("constituicao.html");
    harvest_source(
        &path.to_string_lossy(),
        "Constituição da República Federativa do Brasil",
    )
    .unwrap_or_else(|e| panic!("Failed to harvest fixture: {e}"))
}

#[test]
fn fixture_classifies_into_expected_structure() {
    let law = run_pipeline();

    assert!(law
        .preamble
        .as_deref()
        .unwrap()
        .contains("representantes do povo brasileiro"));

    let summary: Vec<(UnitKind, &str, usize)> = law
        .records
        .iter()
        .map(|r| (r.kind, r.label.as_str(), r.depth))
        .collect();
    assert_eq!(
        summary,
        vec![
            (UnitKind::Titulo, "Título I", 1),
            (UnitKind::Artigo, "Art. 1º", 2),
            (UnitKind::Inciso, "Inciso I", 3),
            (UnitKind::Inciso, "Inciso II", 3),
            (UnitKind::Inciso, "Inciso III", 3),
            (UnitKind::Paragrafo, "Parágrafo único", 3),
            (UnitKind::Artigo, "Art. 2º", 2),
            (UnitKind::Titulo, "Título II", 1),
            (UnitKind::Capitulo, "Capítulo I", 2),
            (UnitKind::Artigo, "Art. 5º", 3),
            (UnitKind::Inciso, "Inciso I", 4),
            (UnitKind::Inciso, "Inciso II", 4),
            (UnitKind::Inciso, "Inciso LXXVII", 4),
            (UnitKind::Alinea, "Alínea a)", 5),
            (UnitKind::Alinea, "Alínea b)", 5),
            (UnitKind::Paragrafo, "§ 1º", 4),
            (UnitKind::Paragrafo, "§ 2º", 4),
        ]
    );

    // Heading subtitles attach to their containers.
    assert_eq!(law.records[0].text, "Dos Princípios Fundamentais");
    // Revoked (<strike>) text never reaches a record.
    let alinea_b = &law.records[14];
    assert_eq!(alinea_b.text, "aos atos necessários ao exercício da cidadania.");
}

#[test]
fn harvested_document_answers_structural_and_text_queries() {
    let law = run_pipeline();
    let document = law.to_document().unwrap();
    let searcher = Searcher::new(Arc::new(document));

    // Structural lookup by full citation path.
    let paragrafo = searcher
        .query_by_path(&["Título I", "Art. 1º", "Parágrafo único"])
        .unwrap();
    assert!(paragrafo.text.starts_with("Todo o poder emana do povo"));

    // "Inciso II" exists under two different articles; full paths distinguish.
    let civic = searcher
        .query_by_path(&["Título I", "Art. 1º", "Inciso II"])
        .unwrap();
    let legality = searcher
        .query_by_path(&["Título II", "Capítulo I", "Art. 5º", "Inciso II"])
        .unwrap();
    assert_eq!(civic.text, "a cidadania;");
    assert!(legality.text.starts_with("ninguém será obrigado"));

    // All articles in document order.
    let artigos: Vec<&str> = searcher
        .query_by_kind(UnitKind::Artigo)
        .iter()
        .map(|unit| unit.label.as_str())
        .collect();
    assert_eq!(artigos, vec!["Art. 1º", "Art. 2º", "Art. 5º"]);

    // Accent-insensitive full-text search.
    let hits = searcher.search_text("constituicao").unwrap();
    assert!(!hits.is_empty());
    assert!(hits
        .iter()
        .all(|hit| leisbr_search::tokenize(&hit.unit.text).contains(&"constituicao".to_string())));
}

#[test]
fn snapshot_round_trip_preserves_every_citation() {
    let law = run_pipeline();
    let document = law.to_document().unwrap();

    let temp_dir = tempfile::tempdir().unwrap();
    let path = save_json(&law, "2025-10-05", Some(temp_dir.path())).unwrap();
    assert!(path
        .to_string_lossy()
        .contains("constituicao_da_republica_federativa_do_brasil"));

    let loaded = load_snapshot(&path).unwrap();
    assert_eq!(loaded.version, "2025-10-05");
    assert_eq!(loaded.document.len(), document.len());

    for (id, _) in document.iter() {
        let labels: Vec<String> = document
            .path_of(id)
            .iter()
            .map(|unit| unit.label.clone())
            .collect();
        let reloaded = loaded.document.find_by_path(&labels).unwrap();
        assert_eq!(
            loaded.document.unit(reloaded).text,
            document.unit(id).text,
            "text differs at {}",
            labels.join(", ")
        );
    }
}

#[tokio::test]
async fn download_pipeline_works_against_mock_server() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let html = fs::read_to_string(fixture_path("constituicao.html")).unwrap();

    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/ccivil_03/constituicao/constituicao.htm"))
        .respond_with(ResponseTemplate::new(200).set_body_string(html))
        .mount(&mock_server)
        .await;

    let url = format!("{}/ccivil_03/constituicao/constituicao.htm", mock_server.uri());

    // The harvester uses a blocking client; keep it off the async runtime.
    let law = tokio::task::spawn_blocking(move || {
        harvest_source(&url, "Constituição da República Federativa do Brasil")
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(law.records.len(), 17);
    assert!(law.to_document().is_ok());
}

#[tokio::test]
async fn download_retries_server_errors() {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    let mock_server = MockServer::start().await;
    // Always 500: the client retries, then gives up.
    Mock::given(method("GET"))
        .and(path("/lei.htm"))
        .respond_with(ResponseTemplate::new(500))
        .expect(3)
        .mount(&mock_server)
        .await;

    let url = format!("{}/lei.htm", mock_server.uri());
    let result = tokio::task::spawn_blocking(move || harvest_source(&url, "Lei")).await.unwrap();

    assert!(matches!(
        result,
        Err(leisbr_harvester::HarvestError::RetriesExhausted { attempts: 3, .. })
    ));
}
