//! Eligible: plain-language screening surveys from clinical-trial eligibility criteria.
//!
//! Eligibility sections of trial listings are numbered lists of third-person
//! statements full of medical jargon. Eligible turns each statement into a
//! direct yes/no question a prospective participant can answer.
//!
//! # Pipeline
//!
//! For every numbered unit of the source text:
//!
//! 1. **Substitute** glossary terms with their plain-language definitions
//! 2. **Rewrite** third-person statements into second-person questions
//! 3. **Correct** grammar through an injected [`GrammarCorrector`]
//!
//! Units are then numbered `1..N` and rendered as
//! `Question {index}: {text} (Yes/No)`.
//!
//! # Example
//!
//! ```
//! use eligible::{GlossaryStore, IdentityCorrector, SurveyBuilder};
//!
//! let glossary = GlossaryStore::new()
//!     .load_str(r#"{"definitions": [{"term": "HIV", "definition": "Human Immunodeficiency Virus"}]}"#)
//!     .unwrap();
//!
//! let builder = SurveyBuilder::new(IdentityCorrector::new());
//! let survey = builder
//!     .build("1. Individuals with diagnosis of HIV 2. Age 18 or older", &glossary)
//!     .unwrap();
//!
//! for line in survey.render() {
//!     println!("{}", line);
//! }
//! ```

pub mod correction;
pub mod error;
pub mod glossary;
pub mod survey;
pub mod text;
pub mod transform;

pub use correction::{
    CorrectorConfig, GrammarCorrector, IdentityCorrector, LanguageToolCorrector, MockCorrector,
    OllamaCorrector,
};
pub use error::{Result, SurveyError};
pub use glossary::{EntryPolicy, Glossary, GlossaryConfig, GlossaryEntry, GlossaryStore};
pub use survey::{
    EligibilityUnit, Survey, SurveyBuilder, SurveyConfig, SurveyQuestion, SurveySummary, segment,
};
pub use transform::{QuestionRewriter, RewriteRule, RulePattern, TermSubstitutor};
