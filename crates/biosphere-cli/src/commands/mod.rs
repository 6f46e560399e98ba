//! CLI command implementations.

pub mod ask;
pub mod clean;
pub mod hypotheses;
pub mod outliers;
pub mod summary;
pub mod zones;

use std::path::Path;

use biosphere::{Biosphere, BiosphereConfig, ZoneDataset};

/// Load and clean one file, failing early with a readable message when it is absent.
pub(crate) fn load_dataset(
    file: &Path,
    config: BiosphereConfig,
) -> Result<(Biosphere, ZoneDataset), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let biosphere = Biosphere::with_config(config);
    let dataset = biosphere.load_file(file)?;
    Ok((biosphere, dataset))
}
