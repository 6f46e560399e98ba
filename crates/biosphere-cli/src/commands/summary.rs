//! Summary command - descriptive statistics for a cleaned file.

use std::path::PathBuf;

use biosphere::{BiosphereConfig, SummaryStyle};
use colored::Colorize;

pub fn run(
    file: PathBuf,
    extended: bool,
    json_output: bool,
    config: BiosphereConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let (biosphere, dataset) = super::load_dataset(&file, config)?;
    let summary = biosphere.summarize(&dataset);

    if json_output {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    let style = if extended {
        SummaryStyle::Extended
    } else {
        SummaryStyle::Minimal
    };

    if summary.records.is_empty() {
        println!(
            "{} No numeric columns in {}",
            "Note:".yellow(),
            dataset.name.white()
        );
        return Ok(());
    }

    println!("{}", summary.render(style));
    Ok(())
}
