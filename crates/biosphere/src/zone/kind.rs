//! Biosphere 2 biome zones.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A biome a dataset was recorded in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Zone {
    Ocean,
    Desert,
    Rainforest,
    /// Landscape Evolution Observatory.
    Leo,
}

impl Zone {
    pub const ALL: [Zone; 4] = [Zone::Ocean, Zone::Desert, Zone::Rainforest, Zone::Leo];

    /// Guess the zone from a file name by case-insensitive substring.
    ///
    /// Checked in order: `ocean`, `desert`, `rainforest` or `rf`, `leo`.
    pub fn guess_from_filename(file_name: &str) -> Option<Zone> {
        let name = file_name.to_lowercase();
        if name.contains("ocean") {
            Some(Zone::Ocean)
        } else if name.contains("desert") {
            Some(Zone::Desert)
        } else if name.contains("rainforest") || name.contains("rf") {
            Some(Zone::Rainforest)
        } else if name.contains("leo") {
            Some(Zone::Leo)
        } else {
            None
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Zone::Ocean => "Ocean",
            Zone::Desert => "Desert",
            Zone::Rainforest => "Rainforest",
            Zone::Leo => "LEO",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
