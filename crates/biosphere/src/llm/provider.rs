//! LLM provider trait and configuration.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default Ollama server address.
pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";

/// Configuration for LLM providers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model to use (e.g., "llama2:7b").
    pub model: String,

    /// Maximum tokens in response.
    pub max_tokens: usize,

    /// Temperature for generation (0.0-1.0).
    pub temperature: f64,

    /// Request timeout in seconds. Local models can be slow.
    pub timeout_secs: u64,

    /// Server address. `OLLAMA_HOST` takes precedence when set.
    pub base_url: String,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "llama2:7b".to_string(),
            max_tokens: 1024,
            temperature: 0.3,
            timeout_secs: 300,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl LlmConfig {
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

/// Trait for LLM providers.
///
/// Implementations must be thread-safe (Send + Sync) so one provider can be
/// shared across datasets.
pub trait LlmProvider: Send + Sync {
    /// Send a prompt and return the model's full reply.
    fn generate(&self, prompt: &str) -> Result<String>;

    /// Get the provider name.
    fn name(&self) -> &str;

    /// Get the current configuration.
    fn config(&self) -> &LlmConfig;
}
