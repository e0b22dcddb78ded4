//! Splitting eligibility text into numbered units.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Numeral list marker: digits, a period, optional whitespace.
///
/// Any such sequence splits, including ones inside decimals ("1.5 mg").
static LIST_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+\.\s*").unwrap());

/// One clause of trial eligibility criteria.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EligibilityUnit {
    /// 1-based position among non-empty units.
    pub position: usize,
    /// 0-based index of the raw segment this unit came from.
    pub segment_index: usize,
    /// Trimmed clause text. Never empty.
    pub text: String,
}

/// Raw segments between list markers, untrimmed and including empties.
pub fn split_numbered(content: &str) -> Vec<&str> {
    LIST_MARKER.split(content).collect()
}

/// Split content into non-empty, trimmed eligibility units in source order.
///
/// Content without list markers yields a single unit (or none if blank).
pub fn segment(content: &str) -> Vec<EligibilityUnit> {
    split_numbered(content)
        .into_iter()
        .enumerate()
        .filter_map(|(segment_index, raw)| {
            let text = raw.trim();
            (!text.is_empty()).then(|| (segment_index, text.to_string()))
        })
        .enumerate()
        .map(|(i, (segment_index, text))| EligibilityUnit {
            position: i + 1,
            segment_index,
            text,
        })
        .collect()
}
