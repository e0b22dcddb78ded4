//! Glossary entry and collection types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, SurveyError};

/// A single term and its plain-language definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlossaryEntry {
    /// The jargon term to replace. Never empty.
    pub term: String,
    /// Text substituted for the term.
    pub definition: String,
}

impl GlossaryEntry {
    /// Create a new entry.
    pub fn new(term: impl Into<String>, definition: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            definition: definition.into(),
        }
    }

    /// Key used for case-insensitive uniqueness.
    pub(crate) fn key(&self) -> String {
        self.term.to_lowercase()
    }
}

/// Ordered, immutable set of glossary entries with case-insensitive unique terms.
#[derive(Debug, Clone, Default)]
pub struct Glossary {
    entries: IndexMap<String, GlossaryEntry>,
    skipped: usize,
}

impl Glossary {
    /// Create an empty glossary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a glossary from entries, rejecting empty or duplicate terms.
    pub fn from_entries(entries: impl IntoIterator<Item = GlossaryEntry>) -> Result<Self> {
        let mut glossary = Self::new();
        for (index, entry) in entries.into_iter().enumerate() {
            if let Err(reason) = glossary.try_insert(entry) {
                return Err(SurveyError::Entry { index, reason });
            }
        }
        Ok(glossary)
    }

    /// Insert an entry, returning the reason it was refused.
    pub(crate) fn try_insert(&mut self, entry: GlossaryEntry) -> std::result::Result<(), String> {
        let entry = GlossaryEntry::new(entry.term.trim(), entry.definition.trim());
        if entry.term.is_empty() {
            return Err("term is empty".to_string());
        }

        let key = entry.key();
        if let Some(existing) = self.entries.get(&key) {
            return Err(format!(
                "term '{}' duplicates earlier term '{}'",
                entry.term, existing.term
            ));
        }

        self.entries.insert(key, entry);
        Ok(())
    }

    pub(crate) fn record_skip(&mut self) {
        self.skipped += 1;
    }

    /// Look up a definition by term, ignoring case.
    pub fn get(&self, term: &str) -> Option<&GlossaryEntry> {
        self.entries.get(&term.trim().to_lowercase())
    }

    /// Whether the glossary defines `term`, ignoring case.
    pub fn contains(&self, term: &str) -> bool {
        self.get(term).is_some()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &GlossaryEntry> {
        self.entries.values()
    }

    /// Entries in insertion order, cloned.
    pub fn entries(&self) -> Vec<GlossaryEntry> {
        self.iter().cloned().collect()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the glossary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of malformed entries dropped while loading.
    pub fn skipped(&self) -> usize {
        self.skipped
    }
}

impl<'a> IntoIterator for &'a Glossary {
    type Item = &'a GlossaryEntry;
    type IntoIter = indexmap::map::Values<'a, String, GlossaryEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserves_order() {
        let glossary = Glossary::from_entries(vec![
            GlossaryEntry::new("MI", "heart attack"),
            GlossaryEntry::new("HIV", "Human Immunodeficiency Virus"),
            GlossaryEntry::new("CKD", "long-term kidney disease"),
        ])
        .unwrap();

        let terms: Vec<&str> = glossary.iter().map(|e| e.term.as_str()).collect();
        assert_eq!(terms, vec!["MI", "HIV", "CKD"]);
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let glossary =
            Glossary::from_entries(vec![GlossaryEntry::new("HIV", "a virus")]).unwrap();
        assert_eq!(glossary.get("hiv").unwrap().definition, "a virus");
        assert!(glossary.contains(" Hiv "));
        assert!(!glossary.contains("HIVE"));
    }

    #[test]
    fn test_rejects_duplicate_terms_ignoring_case() {
        let err = Glossary::from_entries(vec![
            GlossaryEntry::new("HIV", "a virus"),
            GlossaryEntry::new("hiv", "another"),
        ])
        .unwrap_err();

        match err {
            SurveyError::Entry { index, reason } => {
                assert_eq!(index, 1);
                assert!(reason.contains("duplicates"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_rejects_blank_term() {
        let err = Glossary::from_entries(vec![GlossaryEntry::new("   ", "nothing")]).unwrap_err();
        assert!(matches!(err, SurveyError::Entry { index: 0, .. }));
    }

    #[test]
    fn test_trims_entries() {
        let glossary =
            Glossary::from_entries(vec![GlossaryEntry::new(" BMI ", " body mass index ")]).unwrap();
        let entry = glossary.get("bmi").unwrap();
        assert_eq!(entry.term, "BMI");
        assert_eq!(entry.definition, "body mass index");
    }
}
