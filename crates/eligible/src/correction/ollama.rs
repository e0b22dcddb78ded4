//! Ollama local LLM corrector.
//!
//! Ollama runs models locally without API keys.
//! Install from: https://ollama.ai

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Deserialize;
use serde_json::json;

use crate::error::{Result, SurveyError};

use super::corrector::{CorrectorConfig, GrammarCorrector};
use super::prompts;

/// Default Ollama API endpoint.
const DEFAULT_API_URL: &str = "http://localhost:11434/api/chat";

/// Grammar corrector backed by a local Ollama model.
pub struct OllamaCorrector {
    client: Client,
    api_url: String,
    config: CorrectorConfig,
}

impl OllamaCorrector {
    /// Create a corrector using the default model (`llama3.2`).
    ///
    /// Pull the model first: `ollama pull llama3.2`
    pub fn new() -> Result<Self> {
        Self::with_config(CorrectorConfig::default())
    }

    /// Create with a specific model.
    pub fn with_model(model: impl Into<String>) -> Result<Self> {
        Self::with_config(CorrectorConfig::default().with_model(model))
    }

    /// Create with custom configuration.
    ///
    /// The endpoint comes from `config.api_url`, then `OLLAMA_HOST`, then the
    /// local default.
    pub fn with_config(config: CorrectorConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| SurveyError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let api_url = match config.api_url {
            Some(ref url) => url.clone(),
            None => std::env::var("OLLAMA_HOST")
                .map(|host| format!("{}/api/chat", host.trim_end_matches('/')))
                .unwrap_or_else(|_| DEFAULT_API_URL.to_string()),
        };

        Ok(Self {
            client,
            api_url,
            config,
        })
    }

    /// Build headers for API requests.
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }

    /// Send a message to Ollama.
    fn send_message(&self, user_prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "stream": false,
            "options": {
                "temperature": self.config.temperature
            },
            "messages": [
                {
                    "role": "system",
                    "content": prompts::system_prompt()
                },
                {
                    "role": "user",
                    "content": user_prompt
                }
            ]
        });

        let response = self
            .client
            .post(&self.api_url)
            .headers(self.build_headers())
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    SurveyError::correction(
                        self.name(),
                        "Failed to connect to Ollama. Is it running? Start with: ollama serve",
                    )
                } else {
                    SurveyError::correction(self.name(), format!("Ollama request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();

            if error_text.contains("not found") {
                return Err(SurveyError::correction(
                    self.name(),
                    format!(
                        "Model '{}' not found. Pull it with: ollama pull {}",
                        self.config.model, self.config.model
                    ),
                ));
            }

            return Err(SurveyError::correction(
                self.name(),
                format!("Ollama error ({}): {}", status, error_text),
            ));
        }

        let api_response: OllamaResponse = response.json().map_err(|e| {
            SurveyError::correction(self.name(), format!("Failed to parse Ollama response: {}", e))
        })?;

        Ok(api_response.message.content)
    }
}

impl GrammarCorrector for OllamaCorrector {
    fn correct(&self, text: &str) -> Result<String> {
        let response = self.send_message(&prompts::correction_prompt(text))?;
        let corrected = prompts::clean_response(&response);

        if corrected.is_empty() {
            return Err(SurveyError::correction(self.name(), "model returned an empty answer"));
        }

        Ok(corrected)
    }

    fn name(&self) -> &str {
        "ollama"
    }
}

/// Ollama API response structure.
#[derive(Debug, Deserialize)]
struct OllamaResponse {
    message: OllamaMessage,
}

#[derive(Debug, Deserialize)]
struct OllamaMessage {
    content: String,
}
