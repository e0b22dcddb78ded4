//! Tests for loading glossaries from files.

use std::io::Write;
use tempfile::NamedTempFile;

use eligible::{EntryPolicy, GlossaryConfig, GlossaryStore, SurveyError};

/// Helper to create a temporary file with given content.
fn create_test_file(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(content.as_bytes())
        .expect("Failed to write to temp file");
    file
}

#[test]
fn test_load_file() {
    let file = create_test_file(
        r#"{
            "definitions": [
                {"term": "HIV", "definition": "Human Immunodeficiency Virus"},
                {"term": "COPD", "definition": "long-term lung disease that makes breathing hard"},
                {"term": "NSAID", "definition": "anti-inflammatory pain reliever like ibuprofen"}
            ]
        }"#,
    );

    let glossary = GlossaryStore::new()
        .load_file(file.path())
        .expect("Load failed");

    assert_eq!(glossary.len(), 3);
    assert_eq!(
        glossary.get("copd").map(|e| e.definition.as_str()),
        Some("long-term lung disease that makes breathing hard")
    );
}

#[test]
fn test_load_file_extra_fields_ignored() {
    let file = create_test_file(
        r#"{"version": 2, "definitions": [{"term": "BMI", "definition": "body mass index", "source": "NIH"}]}"#,
    );

    let glossary = GlossaryStore::new()
        .load_file(file.path())
        .expect("Load failed");
    assert_eq!(glossary.len(), 1);
}

#[test]
fn test_load_file_invalid_json() {
    let file = create_test_file("definitions: [HIV]");
    let err = GlossaryStore::new().load_file(file.path()).unwrap_err();
    assert!(matches!(err, SurveyError::Format(_)));
}

#[test]
fn test_load_file_strict_vs_skip() {
    let file = create_test_file(
        r#"{"definitions": [{"term": "HIV", "definition": "a virus"}, {"term": "HIV", "definition": "again"}]}"#,
    );

    let strict = GlossaryStore::new().load_file(file.path());
    assert!(matches!(strict, Err(SurveyError::Entry { index: 1, .. })));

    let skip = GlossaryStore::with_config(
        GlossaryConfig::new().with_policy(EntryPolicy::SkipInvalid),
    )
    .load_file(file.path())
    .expect("Load failed");
    assert_eq!(skip.len(), 1);
    assert_eq!(skip.skipped(), 1);
}

#[test]
fn test_missing_file_reports_path() {
    let err = GlossaryStore::new()
        .load_file("does/not/exist.json")
        .unwrap_err();

    assert_eq!(err.stage(), "io");
    assert!(err.to_string().contains("does/not/exist.json"));
}
