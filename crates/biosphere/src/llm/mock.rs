//! Mock LLM provider for testing.

use crate::error::Result;

use super::provider::{LlmConfig, LlmProvider};

/// Mock LLM provider that returns predictable responses for testing.
pub struct MockProvider {
    config: LlmConfig,
    reply: Option<String>,
}

impl MockProvider {
    /// Create a new mock provider that echoes the first prompt line.
    pub fn new() -> Self {
        Self {
            config: LlmConfig::default().with_model("mock"),
            reply: None,
        }
    }

    /// Always answer with a fixed reply.
    pub fn with_reply(reply: impl Into<String>) -> Self {
        Self {
            reply: Some(reply.into()),
            ..Self::new()
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for MockProvider {
    fn generate(&self, prompt: &str) -> Result<String> {
        if let Some(reply) = &self.reply {
            return Ok(reply.clone());
        }

        let first_line = prompt.lines().next().unwrap_or_default();
        Ok(format!(
            "Mock analysis ({} lines received): {}",
            prompt.lines().count(),
            first_line
        ))
    }

    fn name(&self) -> &str {
        "mock"
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }
}
