//! The survey generation pipeline.

use std::sync::Arc;

use chrono::Utc;
use sha2::{Digest, Sha256};
use tracing::{debug, info};

use crate::correction::GrammarCorrector;
use crate::error::{Result, SurveyError};
use crate::glossary::{Glossary, GlossaryConfig, GlossaryStore};
use crate::transform::{QuestionRewriter, TermSubstitutor};

use super::question::{Survey, SurveyQuestion, SurveySummary};
use super::segment::{EligibilityUnit, segment, split_numbered};

/// Configuration for survey generation.
#[derive(Debug, Clone, Default)]
pub struct SurveyConfig {
    /// Glossary loading configuration used by [`SurveyBuilder::generate`].
    pub glossary: GlossaryConfig,
}

impl SurveyConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the glossary configuration.
    pub fn with_glossary(mut self, glossary: GlossaryConfig) -> Self {
        self.glossary = glossary;
        self
    }
}

/// Turns eligibility text into a numbered yes/no survey.
///
/// Each unit passes through substitution, rewriting and correction in that
/// order. The builder holds no per-document state; the glossary is supplied
/// with every call.
///
/// # Example
///
/// ```
/// use eligible::{Glossary, GlossaryEntry, IdentityCorrector, SurveyBuilder};
///
/// let glossary = Glossary::from_entries(vec![
///     GlossaryEntry::new("HIV", "Human Immunodeficiency Virus"),
/// ])
/// .unwrap();
///
/// let builder = SurveyBuilder::new(IdentityCorrector::new());
/// let survey = builder
///     .build("1. Individuals with diagnosis of HIV 2. Age 18 or older", &glossary)
///     .unwrap();
///
/// assert_eq!(survey.len(), 2);
/// assert_eq!(survey.render()[1], "Question 2: Age 18 or older (Yes/No)");
/// ```
pub struct SurveyBuilder {
    config: SurveyConfig,
    substitutor: TermSubstitutor,
    rewriter: QuestionRewriter,
    corrector: Arc<dyn GrammarCorrector>,
}

impl SurveyBuilder {
    /// Create a builder using the given grammar corrector.
    pub fn new(corrector: impl GrammarCorrector + 'static) -> Self {
        Self::with_config(corrector, SurveyConfig::default())
    }

    /// Create a builder with custom configuration.
    pub fn with_config(corrector: impl GrammarCorrector + 'static, config: SurveyConfig) -> Self {
        Self {
            config,
            substitutor: TermSubstitutor::new(),
            rewriter: QuestionRewriter::new(),
            corrector: Arc::new(corrector),
        }
    }

    /// Replace the question rewriter.
    pub fn with_rewriter(mut self, rewriter: QuestionRewriter) -> Self {
        self.rewriter = rewriter;
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &SurveyConfig {
        &self.config
    }

    /// Name of the grammar corrector in use.
    pub fn corrector_name(&self) -> &str {
        self.corrector.name()
    }

    /// A glossary store configured like this builder.
    pub fn glossary_store(&self) -> GlossaryStore {
        GlossaryStore::with_config(self.config.glossary.clone())
    }

    /// Load a fresh glossary from JSON text, then build the survey.
    pub fn generate(&self, content: &str, glossary_json: &str) -> Result<Survey> {
        let glossary = self.glossary_store().load_str(glossary_json)?;
        self.build(content, &glossary)
    }

    /// Build a survey from eligibility text.
    ///
    /// # Errors
    /// - `EmptyInput` when the content has no non-empty units.
    /// - `CorrectionService` when correction fails for any unit; no partial
    ///   survey is returned.
    pub fn build(&self, content: &str, glossary: &Glossary) -> Result<Survey> {
        let segments_found = split_numbered(content).len();
        let units = segment(content);

        if units.is_empty() {
            return Err(SurveyError::EmptyInput(format!(
                "no eligibility criteria found in {} segment(s)",
                segments_found
            )));
        }

        let questions = units
            .iter()
            .map(|unit| {
                let text = self.process_unit(unit, glossary)?;
                Ok(SurveyQuestion::new(unit.position, text))
            })
            .collect::<Result<Vec<_>>>()?;

        let summary = SurveySummary {
            segments_found,
            segments_dropped: segments_found - units.len(),
            glossary_terms: glossary.len(),
            glossary_skipped: glossary.skipped(),
        };

        info!(
            questions = questions.len(),
            dropped = summary.segments_dropped,
            corrector = self.corrector.name(),
            "Survey built"
        );

        Ok(Survey {
            questions,
            source_hash: content_hash(content),
            corrector: self.corrector.name().to_string(),
            summary,
            generated_at: Utc::now(),
        })
    }

    /// Run one unit through substitution, rewriting and correction.
    fn process_unit(&self, unit: &EligibilityUnit, glossary: &Glossary) -> Result<String> {
        let substituted = self.substitutor.substitute(&unit.text, glossary);
        debug!(unit = unit.position, text = %substituted, "Terms substituted");

        let rewritten = self.rewriter.rewrite(&substituted);
        debug!(unit = unit.position, text = %rewritten, "Question rewritten");

        let corrected = self
            .corrector
            .correct(&rewritten)
            .map_err(|e| e.at_unit(unit.position))?;
        debug!(unit = unit.position, text = %corrected, "Grammar corrected");

        Ok(corrected)
    }
}

fn content_hash(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    format!("sha256:{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::correction::{IdentityCorrector, MockCorrector};
    use crate::glossary::{EntryPolicy, GlossaryEntry};

    fn hiv_glossary() -> Glossary {
        Glossary::from_entries(vec![GlossaryEntry::new(
            "HIV",
            "Human Immunodeficiency Virus",
        )])
        .unwrap()
    }

    #[test]
    fn test_build_end_to_end() {
        let builder = SurveyBuilder::new(IdentityCorrector::new());
        let survey = builder
            .build(
                "1. Individuals with diagnosis of HIV 2. Age 18 or older",
                &hiv_glossary(),
            )
            .unwrap();

        let rendered = survey.render();
        assert_eq!(
            rendered,
            vec![
                "Question 1: Do you with Have you been diagnosed with of Human Immunodeficiency Virus (Yes/No)",
                "Question 2: Age 18 or older (Yes/No)",
            ]
        );
        assert_eq!(survey.corrector, "identity");
    }

    #[test]
    fn test_indices_contiguous_after_drops() {
        let builder = SurveyBuilder::new(IdentityCorrector::new());
        let survey = builder
            .build("1. 2. Smoker 3.  4. Pregnant", &Glossary::new())
            .unwrap();

        let indices: Vec<usize> = survey.questions.iter().map(|q| q.index).collect();
        assert_eq!(indices, vec![1, 2]);
        assert_eq!(survey.summary.segments_found, 5);
        assert_eq!(survey.summary.segments_dropped, 3);
    }

    #[test]
    fn test_empty_content_is_an_error() {
        let builder = SurveyBuilder::new(IdentityCorrector::new());
        let err = builder.build("  1.  2. ", &Glossary::new()).unwrap_err();
        assert!(matches!(err, SurveyError::EmptyInput(_)));
        assert_eq!(err.stage(), "segmentation");
    }

    #[test]
    fn test_correction_failure_aborts_build() {
        let mock = Arc::new(MockCorrector::new().failing_on_call(2));
        let builder = SurveyBuilder::new(mock.clone());

        let err = builder
            .build("1. Smoker 2. Pregnant 3. Diabetic", &Glossary::new())
            .unwrap_err();

        match err {
            SurveyError::CorrectionService { corrector, unit, .. } => {
                assert_eq!(corrector, "mock");
                assert_eq!(unit, Some(2));
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(mock.call_count(), 2);
    }

    #[test]
    fn test_corrector_receives_rewritten_text() {
        let mock = Arc::new(MockCorrector::new().with_fix("Do you with", "Do you have"));
        let builder = SurveyBuilder::new(mock.clone());

        let survey = builder
            .build("1. Individuals with HIV", &hiv_glossary())
            .unwrap();

        assert_eq!(
            mock.seen(),
            vec!["Do you with Human Immunodeficiency Virus".to_string()]
        );
        assert_eq!(
            survey.questions[0].text,
            "Do you have Human Immunodeficiency Virus"
        );
    }

    #[test]
    fn test_generate_loads_glossary_per_call() {
        let builder = SurveyBuilder::new(IdentityCorrector::new());

        let first = builder
            .generate(
                "1. HIV positive",
                r#"{"definitions": [{"term": "HIV", "definition": "a virus"}]}"#,
            )
            .unwrap();
        let second = builder
            .generate("1. HIV positive", r#"{"definitions": []}"#)
            .unwrap();

        assert_eq!(first.questions[0].text, "a virus positive");
        assert_eq!(second.questions[0].text, "HIV positive");
    }

    #[test]
    fn test_generate_respects_policy() {
        let glossary = r#"{"definitions": [{"term": "HIV"}, {"term": "BMI", "definition": "body mass index"}]}"#;

        let strict = SurveyBuilder::new(IdentityCorrector::new());
        assert!(matches!(
            strict.generate("1. BMI over 30", glossary),
            Err(SurveyError::Entry { index: 0, .. })
        ));

        let lenient = SurveyBuilder::with_config(
            IdentityCorrector::new(),
            SurveyConfig::new()
                .with_glossary(GlossaryConfig::new().with_policy(EntryPolicy::SkipInvalid)),
        );
        let survey = lenient.generate("1. BMI over 30", glossary).unwrap();
        assert_eq!(survey.questions[0].text, "body mass index over 30");
        assert_eq!(survey.summary.glossary_skipped, 1);
    }

    #[test]
    fn test_source_hash_is_stable() {
        let builder = SurveyBuilder::new(IdentityCorrector::new());
        let a = builder.build("1. Smoker", &Glossary::new()).unwrap();
        let b = builder.build("1. Smoker", &Glossary::new()).unwrap();
        assert_eq!(a.source_hash, b.source_hash);
        assert!(a.source_hash.starts_with("sha256:"));
    }
}
