//! Survey questions and the generated survey.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One numbered yes/no screening question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    /// 1-based, contiguous position in the survey.
    pub index: usize,
    /// Question text after substitution, rewriting and correction.
    pub text: String,
}

impl SurveyQuestion {
    /// Create a question.
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        Self {
            index,
            text: text.into(),
        }
    }
}

impl fmt::Display for SurveyQuestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {}: {} (Yes/No)", self.index, self.text)
    }
}

/// Counts describing how a survey was produced.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurveySummary {
    /// Raw segments produced by splitting the content.
    pub segments_found: usize,
    /// Segments discarded because they were blank.
    pub segments_dropped: usize,
    /// Glossary entries available for substitution.
    pub glossary_terms: usize,
    /// Glossary entries skipped as malformed.
    pub glossary_skipped: usize,
}

/// A generated screening survey.
///
/// Held in memory only; callers decide what to do with it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    /// Questions in source order.
    pub questions: Vec<SurveyQuestion>,
    /// SHA-256 of the source content (`sha256:<hex>`).
    pub source_hash: String,
    /// Name of the grammar corrector used.
    pub corrector: String,
    /// Production counts.
    pub summary: SurveySummary,
    /// When the survey was generated.
    pub generated_at: DateTime<Utc>,
}

impl Survey {
    /// Number of questions.
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    /// Whether the survey has no questions.
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Questions rendered as `Question {index}: {text} (Yes/No)`.
    pub fn render(&self) -> Vec<String> {
        self.questions.iter().map(ToString::to_string).collect()
    }
}

impl fmt::Display for Survey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for question in &self.questions {
            writeln!(f, "{}", question)?;
        }
        Ok(())
    }
}
