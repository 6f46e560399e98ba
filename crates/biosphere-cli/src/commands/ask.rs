//! Ask command - send a dataset summary to a language model.

use std::path::PathBuf;

use biosphere::{BiosphereConfig, MockProvider, OllamaProvider, PromptKind, Severity};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    kind: PromptKind,
    model: Option<String>,
    mock: bool,
    mut config: BiosphereConfig,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(model) = model {
        config.llm.model = model;
    }
    let llm_config = config.llm.clone();

    let (biosphere, dataset) = super::load_dataset(&file, config)?;
    let biosphere = if mock {
        biosphere.with_llm(MockProvider::new())
    } else {
        biosphere.with_llm(OllamaProvider::with_config(llm_config.clone())?)
    };

    println!(
        "{} {} ({} prompt, model {})",
        "Asking about".cyan().bold(),
        dataset.name.white(),
        kind,
        if mock { "mock" } else { llm_config.model.as_str() }
    );

    let answer = biosphere.ask(&dataset, kind)?;

    if verbose {
        println!();
        println!("{}", "Prompt:".yellow().bold());
        println!("{}", answer.prompt);
    }

    let severity = match answer.severity {
        Severity::Severe => answer.severity.label().red().bold(),
        Severity::Moderate => answer.severity.label().yellow().bold(),
        Severity::Normal => answer.severity.label().green(),
    };

    println!();
    println!("{} {}", "Severity:".white().bold(), severity);
    println!();
    println!("{}", answer.reply);

    Ok(())
}
