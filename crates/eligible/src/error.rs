//! Error types for the eligible library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for survey generation.
#[derive(Debug, Error)]
pub enum SurveyError {
    /// Glossary input failed structural validation.
    #[error("Glossary format error: {0}")]
    Format(String),

    /// A single glossary entry is malformed.
    #[error("Invalid glossary entry at position {index}: {reason}")]
    Entry { index: usize, reason: String },

    /// The grammar correction service is unavailable or failed.
    #[error("Grammar correction failed ({corrector}{}): {message}", unit_suffix(.unit))]
    CorrectionService {
        corrector: String,
        unit: Option<usize>,
        message: String,
    },

    /// Content produced no eligibility units.
    #[error("No questions could be generated: {0}")]
    EmptyInput(String),

    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

fn unit_suffix(unit: &Option<usize>) -> String {
    unit.map(|u| format!(", unit {}", u)).unwrap_or_default()
}

impl SurveyError {
    /// Build a correction error not yet tied to a unit.
    pub fn correction(corrector: impl Into<String>, message: impl Into<String>) -> Self {
        SurveyError::CorrectionService {
            corrector: corrector.into(),
            unit: None,
            message: message.into(),
        }
    }

    /// Attach the 1-based unit position to a correction error.
    ///
    /// Other variants are returned unchanged.
    pub fn at_unit(self, position: usize) -> Self {
        match self {
            SurveyError::CorrectionService {
                corrector, message, ..
            } => SurveyError::CorrectionService {
                corrector,
                unit: Some(position),
                message,
            },
            other => other,
        }
    }

    /// Short label of the pipeline stage that produced this error.
    pub fn stage(&self) -> &'static str {
        match self {
            SurveyError::Format(_) | SurveyError::Entry { .. } => "glossary",
            SurveyError::CorrectionService { .. } => "correction",
            SurveyError::EmptyInput(_) => "segmentation",
            SurveyError::Io { .. } => "io",
            SurveyError::Regex(_) | SurveyError::Config(_) => "config",
        }
    }
}

/// Result type alias for survey operations.
pub type Result<T> = std::result::Result<T, SurveyError>;
