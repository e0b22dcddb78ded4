//! Grammar corrector trait and configuration.

use std::sync::Arc;

use crate::error::Result;

/// Configuration for network-backed correctors.
#[derive(Debug, Clone)]
pub struct CorrectorConfig {
    /// Service endpoint. `None` uses the adapter's default.
    pub api_url: Option<String>,

    /// Language code passed to the service (e.g., "en-US").
    pub language: String,

    /// Model name for LLM-backed correctors.
    pub model: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Sampling temperature for LLM-backed correctors (0.0-1.0).
    pub temperature: f64,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        Self {
            api_url: None,
            language: "en-US".to_string(),
            model: "llama3.2".to_string(),
            timeout_secs: 30,
            temperature: 0.0,
        }
    }
}

impl CorrectorConfig {
    /// Set the service endpoint.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = Some(url.into());
        self
    }

    /// Set the language code.
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    /// Set the model name.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the sampling temperature, clamped to 0.0-1.0.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature.clamp(0.0, 1.0);
        self
    }
}

/// Trait for grammar correction services.
///
/// Implementations must be thread-safe (Send + Sync) so one corrector can be
/// shared by builders serving independent requests. A call must not mutate
/// state that affects other calls' output.
pub trait GrammarCorrector: Send + Sync {
    /// Return a grammatically corrected version of `text`.
    ///
    /// # Errors
    /// `SurveyError::CorrectionService` when the service is unreachable or
    /// returns an unusable answer. Implementations never fall back to
    /// returning the input unchanged on failure.
    fn correct(&self, text: &str) -> Result<String>;

    /// Name of this corrector (for logging and error context).
    fn name(&self) -> &str;
}

impl<T: GrammarCorrector + ?Sized> GrammarCorrector for Arc<T> {
    fn correct(&self, text: &str) -> Result<String> {
        (**self).correct(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<T: GrammarCorrector + ?Sized> GrammarCorrector for Box<T> {
    fn correct(&self, text: &str) -> Result<String> {
        (**self).correct(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
