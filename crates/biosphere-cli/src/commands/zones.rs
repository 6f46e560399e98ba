//! Zones command - load a folder of zone exports and summarize each.

use std::path::PathBuf;

use biosphere::{Biosphere, BiosphereConfig, SummaryStyle};
use colored::Colorize;

pub fn run(
    dir: PathBuf,
    extended: bool,
    config: BiosphereConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        return Err(format!("Folder not found: {}", dir.display()).into());
    }

    let biosphere = Biosphere::with_config(config);
    let catalog = biosphere.load_folder(&dir)?;

    println!(
        "{} {} datasets from {}",
        "Loaded".cyan().bold(),
        catalog.len().to_string().white().bold(),
        dir.display().to_string().white()
    );

    for skipped in &catalog.skipped {
        println!(
            "{} {} ({})",
            "Skipped".yellow().bold(),
            skipped.path.display(),
            skipped.reason
        );
    }

    let style = if extended {
        SummaryStyle::Extended
    } else {
        SummaryStyle::Minimal
    };

    for dataset in catalog.datasets.values() {
        let zone = dataset
            .zone
            .map(|z| z.label().to_string())
            .unwrap_or_else(|| "Unknown zone".to_string());

        println!();
        println!(
            "{} {} ({} rows)",
            format!("[{}]", zone).green().bold(),
            dataset.name.white(),
            dataset.table.row_count()
        );
        println!("{}", biosphere.summarize(dataset).render(style));
    }

    Ok(())
}
