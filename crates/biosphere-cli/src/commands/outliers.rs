//! Outliers command - z-score scan of a cleaned file.

use std::path::PathBuf;

use biosphere::BiosphereConfig;
use biosphere::stats::AnomalyScanner;
use colored::Colorize;

pub fn run(
    file: PathBuf,
    z_threshold: Option<f64>,
    mut config: BiosphereConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(z) = z_threshold {
        config.analysis.z_threshold = z;
    }
    let threshold = config.analysis.z_threshold;

    let (biosphere, dataset) = super::load_dataset(&file, config)?;
    let results = biosphere.scan_anomalies(&dataset);
    let flagged: usize = results.iter().map(|r| r.anomalies.len()).sum();

    println!("{}", AnomalyScanner::render(&dataset.name, &results));
    println!();

    let total = format!("{} values with |z| > {}", flagged, threshold);
    if flagged > 0 {
        println!("{}", total.yellow().bold());
    } else {
        println!("{}", total.green());
    }

    Ok(())
}
