//! Glossary term substitution.

use std::borrow::Cow;

use tracing::trace;

use crate::glossary::Glossary;
use crate::text::replace_whole_word;

/// Replaces glossary terms with their plain-language definitions.
///
/// Entries are applied in glossary order, each over the output of the
/// previous one. A definition that contains a later glossary term is
/// therefore substituted again; this cascade is intentional.
#[derive(Debug, Clone, Copy, Default)]
pub struct TermSubstitutor;

impl TermSubstitutor {
    /// Create a new substitutor.
    pub fn new() -> Self {
        Self
    }

    /// Replace every whole-word, case-insensitive glossary term in `text`.
    pub fn substitute(&self, text: &str, glossary: &Glossary) -> String {
        let mut current = text.to_string();

        for entry in glossary {
            let replaced = match replace_whole_word(&current, &entry.term, &entry.definition) {
                Cow::Owned(replaced) => replaced,
                Cow::Borrowed(_) => continue,
            };
            trace!(term = %entry.term, "Substituted glossary term");
            current = replaced;
        }

        current
    }
}
