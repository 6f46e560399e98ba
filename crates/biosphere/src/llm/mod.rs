//! Language-model integration for narrative analysis of cleaned datasets.
//!
//! The integration is optional: cleaning and statistics work fully without it.
//! Prompts are built from summary text, sent through an [`LlmProvider`], and
//! the reply is classified into a [`Severity`].
//!
//! # Example
//!
//! ```no_run
//! use biosphere::{Biosphere, OllamaProvider, PromptKind};
//!
//! let biosphere = Biosphere::new().with_llm(OllamaProvider::new().unwrap());
//! let dataset = biosphere.load_file("ocean_ph.csv").unwrap();
//! let answer = biosphere.ask(&dataset, PromptKind::Analytical).unwrap();
//! println!("[{}] {}", answer.severity, answer.reply);
//! ```

mod mock;
mod ollama;
mod prompts;
mod provider;

pub use mock::MockProvider;
pub use ollama::OllamaProvider;
pub use prompts::{
    DEFAULT_SNAPSHOT_ROWS, PromptKind, Severity, build_prompt, data_snapshot, dataset_context,
    zone_context,
};
pub use provider::{DEFAULT_BASE_URL, LlmConfig, LlmProvider};
