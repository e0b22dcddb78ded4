//! LanguageTool grammar correction.
//!
//! Talks to a LanguageTool HTTP server (public or self-hosted). Run one
//! locally with: `docker run -p 8010:8010 erikvl87/languagetool`

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use tracing::debug;

use crate::error::{Result, SurveyError};

use super::corrector::{CorrectorConfig, GrammarCorrector};

/// Default LanguageTool endpoint.
const DEFAULT_API_URL: &str = "http://localhost:8010";

/// LanguageTool-backed corrector.
pub struct LanguageToolCorrector {
    client: Client,
    check_url: String,
    config: CorrectorConfig,
}

impl LanguageToolCorrector {
    /// Create a corrector for the default local server.
    pub fn new() -> Result<Self> {
        Self::with_config(CorrectorConfig::default())
    }

    /// Create with custom configuration.
    pub fn with_config(config: CorrectorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SurveyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let base = config.api_url.as_deref().unwrap_or(DEFAULT_API_URL);
        let check_url = format!("{}/v2/check", base.trim_end_matches('/'));

        Ok(Self {
            client,
            check_url,
            config,
        })
    }

    /// Create from `LANGUAGETOOL_URL` and `LANGUAGETOOL_LANGUAGE`.
    pub fn from_env() -> Result<Self> {
        let mut config = CorrectorConfig::default();
        if let Ok(url) = std::env::var("LANGUAGETOOL_URL") {
            config.api_url = Some(url);
        }
        if let Ok(language) = std::env::var("LANGUAGETOOL_LANGUAGE") {
            config.language = language;
        }
        Self::with_config(config)
    }

    /// Endpoint used for checks.
    pub fn check_url(&self) -> &str {
        &self.check_url
    }

    fn check(&self, text: &str) -> Result<Vec<TextMatch>> {
        let response = self
            .client
            .post(&self.check_url)
            .form(&[("text", text), ("language", self.config.language.as_str())])
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    SurveyError::correction(
                        self.name(),
                        format!("Failed to connect to LanguageTool at {}", self.check_url),
                    )
                } else {
                    SurveyError::correction(self.name(), format!("request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();
            return Err(SurveyError::correction(
                self.name(),
                format!("LanguageTool error ({}): {}", status, error_text),
            ));
        }

        let parsed: CheckResponse = response.json().map_err(|e| {
            SurveyError::correction(self.name(), format!("Failed to parse response: {}", e))
        })?;

        Ok(parsed.matches.into_iter().filter_map(TextMatch::from_api).collect())
    }
}

impl GrammarCorrector for LanguageToolCorrector {
    fn correct(&self, text: &str) -> Result<String> {
        let matches = self.check(text)?;
        debug!(matches = matches.len(), "LanguageTool check complete");
        Ok(apply_matches(text, &matches))
    }

    fn name(&self) -> &str {
        "languagetool"
    }
}

/// A suggested fix, with offsets in UTF-16 code units as LanguageTool reports them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextMatch {
    pub offset: usize,
    pub length: usize,
    pub replacement: String,
}

impl TextMatch {
    /// Create a match.
    pub fn new(offset: usize, length: usize, replacement: impl Into<String>) -> Self {
        Self {
            offset,
            length,
            replacement: replacement.into(),
        }
    }

    /// Keep only matches that carry at least one suggested replacement.
    fn from_api(m: ApiMatch) -> Option<Self> {
        let replacement = m.replacements.into_iter().next()?.value;
        Some(Self::new(m.offset, m.length, replacement))
    }
}

/// Apply the first suggestion of each match.
///
/// Matches are taken in offset order; a match overlapping an already applied
/// one is skipped, as is any match whose offsets fall outside the text or
/// inside a character.
pub fn apply_matches(text: &str, matches: &[TextMatch]) -> String {
    let mut sorted: Vec<&TextMatch> = matches.iter().collect();
    sorted.sort_by_key(|m| m.offset);

    let mut out = String::with_capacity(text.len());
    let mut cursor_utf16 = 0;
    let mut cursor_byte = 0;

    for m in sorted {
        if m.offset < cursor_utf16 {
            continue;
        }
        let (Some(start), Some(end)) = (
            byte_offset(text, m.offset),
            byte_offset(text, m.offset + m.length),
        ) else {
            continue;
        };

        out.push_str(&text[cursor_byte..start]);
        out.push_str(&m.replacement);
        cursor_byte = end;
        cursor_utf16 = m.offset + m.length;
    }

    out.push_str(&text[cursor_byte..]);
    out
}

/// Convert a UTF-16 offset into a byte offset, if it lands on a char boundary.
fn byte_offset(text: &str, utf16_offset: usize) -> Option<usize> {
    let mut units = 0;
    for (byte, c) in text.char_indices() {
        if units == utf16_offset {
            return Some(byte);
        }
        units += c.len_utf16();
        if units > utf16_offset {
            return None;
        }
    }
    (units == utf16_offset).then_some(text.len())
}

/// LanguageTool `/v2/check` response.
#[derive(Debug, Deserialize)]
struct CheckResponse {
    #[serde(default)]
    matches: Vec<ApiMatch>,
}

#[derive(Debug, Deserialize)]
struct ApiMatch {
    offset: usize,
    length: usize,
    #[serde(default)]
    replacements: Vec<ApiReplacement>,
}

#[derive(Debug, Deserialize)]
struct ApiReplacement {
    value: String,
}
