//! Integration tests for document construction and citation paths.

use std::collections::HashSet;

use pretty_assertions::assert_eq;

use leisbr_corpus::{CorpusError, Document, RawUnit, UnitKind};

/// A small but structurally rich document: every unit kind appears at least
/// once and Artigos occur at several depths.
fn full_hierarchy() -> Vec<RawUnit> {
    vec![
        RawUnit::new(UnitKind::Livro, "Livro I", "Parte Geral", 1),
        RawUnit::new(UnitKind::Titulo, "Título I", "Das Pessoas", 2),
        RawUnit::new(UnitKind::Capitulo, "Capítulo I", "Das Pessoas Naturais", 3),
        RawUnit::new(UnitKind::Secao, "Seção I", "Da Personalidade", 4),
        RawUnit::new(UnitKind::Subsecao, "Subseção I", "Disposições Gerais", 5),
        RawUnit::new(
            UnitKind::Artigo,
            "Art. 1º",
            "Toda pessoa é capaz de direitos e deveres na ordem civil.",
            6,
        ),
        RawUnit::new(UnitKind::Inciso, "Inciso I", "os direitos da personalidade", 7),
        RawUnit::new(UnitKind::Alinea, "Alínea a)", "o nome", 8),
        RawUnit::new(UnitKind::Alinea, "Alínea b)", "a imagem", 8),
        RawUnit::new(
            UnitKind::Paragrafo,
            "§ 1º",
            "A capacidade plena adquire-se com a maioridade.",
            7,
        ),
        RawUnit::new(UnitKind::Inciso, "Inciso I", "aos dezoito anos completos", 8),
        RawUnit::new(UnitKind::Artigo, "Art. 2º", "A personalidade civil começa do nascimento.", 6),
    ]
}

#[test]
fn build_accepts_every_grammar_edge() {
    let doc = Document::build("Código Civil", full_hierarchy()).unwrap();
    assert_eq!(doc.len(), 12);
}

#[test]
fn every_unit_has_a_unique_citation_path() {
    let doc = Document::build("Código Civil", full_hierarchy()).unwrap();

    let mut seen = HashSet::new();
    for (id, _) in doc.iter() {
        let citation = doc.citation_of(id);
        assert!(
            seen.insert(citation.clone()),
            "citation path occurs twice: {citation}"
        );
        // Round-trip: the path labels resolve back to the same unit.
        let labels: Vec<String> = doc
            .path_of(id)
            .iter()
            .map(|unit| unit.label.clone())
            .collect();
        assert_eq!(doc.find_by_path(&labels).unwrap(), id);
    }
    assert_eq!(seen.len(), doc.len());
}

#[test]
fn minimal_title_and_article_round_trips() {
    // Título I containing Art. 1º, with the article carrying text.
    let records = vec![
        RawUnit::new(UnitKind::Titulo, "Título I", "", 1),
        RawUnit::new(UnitKind::Artigo, "Art. 1º", "Todo poder emana do povo", 2),
    ];
    let doc = Document::build("Constituição Federal", records).unwrap();

    let artigo = doc.find_by_path(&["Título I", "Art. 1º"]).unwrap();
    let labels: Vec<&str> = doc
        .path_of(artigo)
        .iter()
        .map(|unit| unit.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Título I", "Art. 1º"]);
}

#[test]
fn item_directly_under_title_is_rejected() {
    let records = vec![
        RawUnit::new(UnitKind::Titulo, "Título I", "", 1),
        RawUnit::new(UnitKind::Alinea, "Alínea a)", "texto órfão", 2),
    ];
    let err = Document::build("Lei", records).unwrap_err();
    assert!(matches!(err, CorpusError::IllegalChild { .. }));
}

#[test]
fn same_label_under_different_parents_is_allowed() {
    // Two articles labeled "Art. 1º" under different Títulos: paths differ.
    let records = vec![
        RawUnit::new(UnitKind::Titulo, "Título I", "", 1),
        RawUnit::new(UnitKind::Artigo, "Art. 1º", "do primeiro título", 2),
        RawUnit::new(UnitKind::Titulo, "Título II", "", 1),
        RawUnit::new(UnitKind::Artigo, "Art. 1º", "do segundo título", 2),
    ];
    let doc = Document::build("Lei", records).unwrap();

    let first = doc.find_by_path(&["Título I", "Art. 1º"]).unwrap();
    let second = doc.find_by_path(&["Título II", "Art. 1º"]).unwrap();
    assert_ne!(first, second);
    assert_eq!(doc.unit(first).text, "do primeiro título");
    assert_eq!(doc.unit(second).text, "do segundo título");
}

#[test]
fn ordinary_law_opens_with_articles_at_top_level() {
    // Laws without Títulos are valid: Artigos directly under the root.
    let records = vec![
        RawUnit::new(UnitKind::Artigo, "Art. 1º", "Esta lei entra em vigor.", 1),
        RawUnit::new(UnitKind::Artigo, "Art. 2º", "Revogam-se as disposições.", 1),
    ];
    let doc = Document::build("Lei nº 1", records).unwrap();
    assert_eq!(doc.top_level().len(), 2);
    assert_eq!(doc.citation_of(doc.top_level()[1]), "Art. 2º");
}
