//! Biosphere CLI - clean and summarize Biosphere 2 zone data.

mod cli;
mod commands;

use std::path::Path;

use biosphere::BiosphereConfig;
use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

/// Log to stderr so stdout carries only command output.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<BiosphereConfig, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(BiosphereConfig::load(path)?),
        None => Ok(BiosphereConfig::default()),
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Clean {
            file,
            output,
            format,
        } => commands::clean::run(file, output, format, config, cli.verbose),

        Commands::Summary {
            file,
            extended,
            json,
        } => commands::summary::run(file, extended, json, config),

        Commands::Zones { dir, extended } => commands::zones::run(dir, extended, config),

        Commands::Outliers { file, z_threshold } => {
            commands::outliers::run(file, z_threshold, config)
        }

        Commands::Hypotheses { file, threshold } => {
            commands::hypotheses::run(file, threshold, config)
        }

        Commands::Ask {
            file,
            kind,
            model,
            mock,
        } => commands::ask::run(file, kind, model, mock, config, cli.verbose),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
