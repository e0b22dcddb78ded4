//! Glossary loading from uploaded JSON documents.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Result, SurveyError};

use super::entry::{Glossary, GlossaryEntry};

/// Key holding the entry list in a glossary document.
const DEFINITIONS_KEY: &str = "definitions";

/// How malformed glossary entries are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryPolicy {
    /// Fail the whole load on the first malformed entry.
    #[default]
    Strict,
    /// Log malformed entries and continue without them.
    SkipInvalid,
}

/// Glossary loading configuration.
#[derive(Debug, Clone, Default)]
pub struct GlossaryConfig {
    /// Handling of malformed entries.
    pub policy: EntryPolicy,
}

impl GlossaryConfig {
    /// Create the default (strict) configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry policy.
    pub fn with_policy(mut self, policy: EntryPolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Loads and validates glossary documents.
///
/// Expected shape:
///
/// ```json
/// { "definitions": [ { "term": "HIV", "definition": "Human Immunodeficiency Virus" } ] }
/// ```
#[derive(Debug, Clone, Default)]
pub struct GlossaryStore {
    config: GlossaryConfig,
}

impl GlossaryStore {
    /// Create a store with strict validation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with custom configuration.
    pub fn with_config(config: GlossaryConfig) -> Self {
        Self { config }
    }

    /// The active entry policy.
    pub fn policy(&self) -> EntryPolicy {
        self.config.policy
    }

    /// Validate a parsed glossary document.
    pub fn load(&self, raw: &Value) -> Result<Glossary> {
        let Some(document) = raw.as_object() else {
            return Err(SurveyError::Format(format!(
                "expected a JSON object, found {}",
                value_kind(raw)
            )));
        };

        let definitions = document.get(DEFINITIONS_KEY).ok_or_else(|| {
            SurveyError::Format(format!("missing '{}' field", DEFINITIONS_KEY))
        })?;

        let Some(items) = definitions.as_array() else {
            return Err(SurveyError::Format(format!(
                "'{}' must be a list, found {}",
                DEFINITIONS_KEY,
                value_kind(definitions)
            )));
        };

        let mut glossary = Glossary::new();
        for (index, item) in items.iter().enumerate() {
            let outcome = parse_entry(item).and_then(|entry| glossary.try_insert(entry));
            if let Err(reason) = outcome {
                match self.config.policy {
                    EntryPolicy::Strict => return Err(SurveyError::Entry { index, reason }),
                    EntryPolicy::SkipInvalid => {
                        warn!(index, %reason, "Skipping invalid glossary entry");
                        glossary.record_skip();
                    }
                }
            }
        }

        debug!(
            entries = glossary.len(),
            skipped = glossary.skipped(),
            "Glossary loaded"
        );
        Ok(glossary)
    }

    /// Parse and validate glossary JSON text.
    pub fn load_str(&self, json: &str) -> Result<Glossary> {
        let raw: Value = serde_json::from_str(json)
            .map_err(|e| SurveyError::Format(format!("invalid JSON: {}", e)))?;
        self.load(&raw)
    }

    /// Read, parse and validate a glossary file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<Glossary> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| SurveyError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.load_str(&json)
    }
}

fn parse_entry(item: &Value) -> std::result::Result<GlossaryEntry, String> {
    let Some(fields) = item.as_object() else {
        return Err(format!("expected an object, found {}", value_kind(item)));
    };

    let field = |name: &str| -> std::result::Result<String, String> {
        match fields.get(name) {
            Some(Value::String(s)) => Ok(s.clone()),
            Some(other) => Err(format!(
                "field '{}' must be a string, found {}",
                name,
                value_kind(other)
            )),
            None => Err(format!("missing field '{}'", name)),
        }
    };

    Ok(GlossaryEntry::new(field("term")?, field("definition")?))
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_load_valid_document() {
        let raw = json!({
            "definitions": [
                {"term": "HIV", "definition": "Human Immunodeficiency Virus"},
                {"term": "BMI", "definition": "body mass index"}
            ]
        });

        let glossary = GlossaryStore::new().load(&raw).unwrap();
        assert_eq!(glossary.len(), 2);
        assert_eq!(glossary.skipped(), 0);
    }

    #[test]
    fn test_definitions_not_a_list() {
        let raw = json!({"definitions": {"term": "HIV"}});
        let err = GlossaryStore::new().load(&raw).unwrap_err();
        assert!(matches!(err, SurveyError::Format(ref m) if m.contains("must be a list")));
    }

    #[test]
    fn test_missing_definitions_key() {
        let err = GlossaryStore::new().load(&json!({"terms": []})).unwrap_err();
        assert!(matches!(err, SurveyError::Format(_)));
    }

    #[test]
    fn test_top_level_not_an_object() {
        let err = GlossaryStore::new().load(&json!([1, 2])).unwrap_err();
        assert!(matches!(err, SurveyError::Format(ref m) if m.contains("a list")));
    }

    #[test]
    fn test_empty_list_is_valid() {
        let glossary = GlossaryStore::new().load(&json!({"definitions": []})).unwrap();
        assert!(glossary.is_empty());
    }

    #[test]
    fn test_strict_rejects_missing_definition() {
        let raw = json!({"definitions": [
            {"term": "HIV", "definition": "virus"},
            {"term": "BMI"}
        ]});

        let err = GlossaryStore::new().load(&raw).unwrap_err();
        match err {
            SurveyError::Entry { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("definition"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_strict_rejects_non_string_field() {
        let raw = json!({"definitions": [{"term": 42, "definition": "answer"}]});
        let err = GlossaryStore::new().load(&raw).unwrap_err();
        assert!(matches!(err, SurveyError::Entry { ref reason, .. } if reason.contains("a number")));
    }

    #[test]
    fn test_skip_invalid_continues() {
        let raw = json!({"definitions": [
            "HIV",
            {"term": "HIV", "definition": "virus"},
            {"term": "", "definition": "blank"},
            {"term": "hiv", "definition": "duplicate"},
            {"term": "BMI", "definition": "body mass index"}
        ]});

        let store =
            GlossaryStore::with_config(GlossaryConfig::new().with_policy(EntryPolicy::SkipInvalid));
        let glossary = store.load(&raw).unwrap();

        assert_eq!(glossary.len(), 2);
        assert_eq!(glossary.skipped(), 3);
        assert_eq!(glossary.get("HIV").unwrap().definition, "virus");
    }

    #[test]
    fn test_skip_invalid_still_checks_structure() {
        let store =
            GlossaryStore::with_config(GlossaryConfig::new().with_policy(EntryPolicy::SkipInvalid));
        let err = store.load(&json!({"definitions": "nope"})).unwrap_err();
        assert!(matches!(err, SurveyError::Format(_)));
    }

    #[test]
    fn test_load_str_reports_bad_json() {
        let err = GlossaryStore::new().load_str("{ not json").unwrap_err();
        assert!(matches!(err, SurveyError::Format(ref m) if m.starts_with("invalid JSON")));
        assert_eq!(err.stage(), "glossary");
    }

    #[test]
    fn test_load_file_missing() {
        let err = GlossaryStore::new()
            .load_file("/nonexistent/glossary.json")
            .unwrap_err();
        assert!(matches!(err, SurveyError::Io { .. }));
    }
}
