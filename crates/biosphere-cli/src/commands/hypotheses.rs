//! Hypotheses command - correlated column pairs in a cleaned file.

use std::path::PathBuf;

use biosphere::BiosphereConfig;
use biosphere::stats::HypothesisGenerator;

pub fn run(
    file: PathBuf,
    threshold: Option<f64>,
    config: BiosphereConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let threshold = threshold.unwrap_or(config.analysis.correlation_threshold);
    let (_, dataset) = super::load_dataset(&file, config)?;

    println!(
        "{}",
        HypothesisGenerator::with_threshold(threshold).render(&dataset.table)
    );
    Ok(())
}
