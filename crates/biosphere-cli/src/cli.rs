//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use biosphere::PromptKind;

/// Biosphere: clean and summarize Biosphere 2 zone sensor data
#[derive(Parser)]
#[command(name = "biosphere")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Clean a data file and export the result
    Clean {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path (default: <file>_cleaned.<format>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output format
        #[arg(short, long, default_value = "csv")]
        format: OutputFormat,
    },

    /// Print descriptive statistics for a cleaned file
    Summary {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Show the ten-statistic layout
        #[arg(long)]
        extended: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Load every CSV in a folder and summarize each zone
    Zones {
        /// Folder of zone exports
        #[arg(value_name = "DIR")]
        dir: PathBuf,

        /// Show the ten-statistic layout
        #[arg(long)]
        extended: bool,
    },

    /// Report z-score outliers per numeric column
    Outliers {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// |z| above which a value is reported
        #[arg(long)]
        z_threshold: Option<f64>,
    },

    /// Generate hypotheses from strongly correlated columns
    Hypotheses {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// |r| at or above which a pair is reported
        #[arg(long)]
        threshold: Option<f64>,
    },

    /// Ask a language model about a cleaned file
    Ask {
        /// Path to the data file (CSV/TSV)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Prompt kind: descriptive, analytical, predictive, hypothesis
        #[arg(short, long, default_value = "descriptive")]
        kind: PromptKind,

        /// Ollama model (e.g., "llama2:7b", "mistral")
        #[arg(long)]
        model: Option<String>,

        /// Use the mock provider instead of Ollama
        #[arg(long)]
        mock: bool,
    },
}

#[derive(Clone, Copy, Debug, Default)]
pub enum OutputFormat {
    #[default]
    Csv,
    Tsv,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Tsv => "tsv",
            OutputFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "tsv" => Ok(OutputFormat::Tsv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}. Use csv, tsv, or json.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}
