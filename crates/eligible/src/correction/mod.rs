//! Grammar correction adapters.
//!
//! Grammar correction is an external service. The pipeline only depends on
//! the [`GrammarCorrector`] trait; the implementations here wrap concrete
//! services or act as test doubles.
//!
//! # Available Correctors
//!
//! - **IdentityCorrector** - returns text unchanged (offline use, tests)
//! - **MockCorrector** - scripted fixes and failures for tests
//! - **LanguageToolCorrector** - LanguageTool HTTP server (`LANGUAGETOOL_URL`)
//! - **OllamaCorrector** - local LLM via Ollama (`OLLAMA_HOST`)
//!
//! # Example
//!
//! ```no_run
//! use eligible::{LanguageToolCorrector, SurveyBuilder};
//!
//! let builder = SurveyBuilder::new(LanguageToolCorrector::from_env().unwrap());
//! ```

mod corrector;
mod languagetool;
mod mock;
mod ollama;
mod prompts;

pub use corrector::{CorrectorConfig, GrammarCorrector};
pub use languagetool::{LanguageToolCorrector, TextMatch, apply_matches};
pub use mock::{IdentityCorrector, MockCorrector};
pub use ollama::OllamaCorrector;
