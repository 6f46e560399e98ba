//! Ollama local LLM provider implementation.
//!
//! Ollama runs models locally without API keys.
//! Install from: https://ollama.ai

use std::time::Duration;

use reqwest::blocking::Client;
use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::error::{BiosphereError, Result};

use super::provider::{LlmConfig, LlmProvider};

/// Ollama local LLM provider using the `/api/generate` endpoint.
pub struct OllamaProvider {
    client: Client,
    api_url: String,
    config: LlmConfig,
}

impl OllamaProvider {
    /// Create a provider with default settings (`llama2:7b`).
    ///
    /// Make sure the model is pulled: `ollama pull llama2:7b`
    pub fn new() -> Result<Self> {
        Self::with_config(LlmConfig::default())
    }

    /// Create with a specific model.
    pub fn with_model(model: impl Into<String>) -> Result<Self> {
        Self::with_config(LlmConfig::default().with_model(model))
    }

    /// Create with custom configuration.
    pub fn with_config(config: LlmConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| BiosphereError::Config(format!("Failed to create HTTP client: {}", e)))?;

        let host = std::env::var("OLLAMA_HOST").unwrap_or_else(|_| config.base_url.clone());
        let api_url = format!("{}/api/generate", host.trim_end_matches('/'));

        Ok(Self {
            client,
            api_url,
            config,
        })
    }

    /// The full endpoint requests are sent to.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
}

impl LlmProvider for OllamaProvider {
    fn generate(&self, prompt: &str) -> Result<String> {
        let body = json!({
            "model": self.config.model,
            "prompt": prompt,
            "stream": false,
            "options": {
                "temperature": self.config.temperature,
                "num_predict": self.config.max_tokens
            }
        });

        debug!(url = %self.api_url, model = %self.config.model, "sending prompt");

        let response = self
            .client
            .post(&self.api_url)
            .json(&body)
            .send()
            .map_err(|e| {
                if e.is_connect() {
                    BiosphereError::Llm(
                        "Failed to connect to Ollama. Is it running? Start with: ollama serve"
                            .to_string(),
                    )
                } else if e.is_timeout() {
                    BiosphereError::Llm(format!(
                        "Ollama did not answer within {} seconds",
                        self.config.timeout_secs
                    ))
                } else {
                    BiosphereError::Llm(format!("Ollama request failed: {}", e))
                }
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().unwrap_or_default();

            if error_text.contains("not found") {
                return Err(BiosphereError::Llm(format!(
                    "Model '{}' not found. Pull it with: ollama pull {}",
                    self.config.model, self.config.model
                )));
            }

            return Err(BiosphereError::Llm(format!(
                "Ollama error ({}): {}",
                status, error_text
            )));
        }

        let api_response: OllamaResponse = response
            .json()
            .map_err(|e| BiosphereError::Llm(format!("Failed to parse Ollama response: {}", e)))?;

        extract_reply(api_response)
    }

    fn name(&self) -> &str {
        "ollama"
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }
}

fn extract_reply(response: OllamaResponse) -> Result<String> {
    match response.response {
        Some(text) if !text.trim().is_empty() => Ok(text),
        _ => Err(BiosphereError::Llm("No response from model".to_string())),
    }
}

#[derive(Debug, Deserialize)]
struct OllamaResponse {
    response: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_reply() {
        let ok: OllamaResponse = serde_json::from_str(r#"{"response": "All stable.", "done": true}"#).unwrap();
        assert_eq!(extract_reply(ok).unwrap(), "All stable.");

        let empty: OllamaResponse = serde_json::from_str(r#"{"response": "  "}"#).unwrap();
        assert!(matches!(extract_reply(empty), Err(BiosphereError::Llm(_))));

        let missing: OllamaResponse = serde_json::from_str(r#"{"done": true}"#).unwrap();
        assert!(extract_reply(missing).is_err());
    }
}
