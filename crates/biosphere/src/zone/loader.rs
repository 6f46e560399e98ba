//! Folder loading: one cleaned dataset per CSV file.

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::clean::{CleaningConfig, CleaningPipeline, CleaningReport};
use crate::error::{BiosphereError, Result};
use crate::input::{Parser, ParserConfig, SourceMetadata};
use crate::table::Table;

use super::kind::Zone;

/// A cleaned dataset loaded from one file.
#[derive(Debug, Clone)]
pub struct ZoneDataset {
    /// File name, used as the dataset key.
    pub name: String,
    /// Zone guessed from the file name.
    pub zone: Option<Zone>,
    pub source: SourceMetadata,
    pub table: Table,
    pub report: CleaningReport,
}

/// A file that could not be loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Datasets loaded from a folder, keyed by file name in name order.
#[derive(Debug, Clone, Default)]
pub struct ZoneCatalog {
    pub datasets: IndexMap<String, ZoneDataset>,
    pub skipped: Vec<SkippedFile>,
}

impl ZoneCatalog {
    pub fn len(&self) -> usize {
        self.datasets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datasets.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&ZoneDataset> {
        self.datasets.get(name)
    }

    pub fn get_index(&self, index: usize) -> Option<&ZoneDataset> {
        self.datasets.get_index(index).map(|(_, d)| d)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.datasets.keys().map(String::as_str)
    }

    /// Datasets guessed to belong to a zone.
    pub fn in_zone(&self, zone: Zone) -> impl Iterator<Item = &ZoneDataset> {
        self.datasets.values().filter(move |d| d.zone == Some(zone))
    }

    /// The dataset after `index`, wrapping to the first.
    pub fn next(&self, index: usize) -> Option<(usize, &ZoneDataset)> {
        if self.is_empty() {
            return None;
        }
        let len = self.len();
        let next = (index % len + 1) % len;
        self.get_index(next).map(|d| (next, d))
    }

    /// The dataset before `index`, wrapping to the last.
    pub fn previous(&self, index: usize) -> Option<(usize, &ZoneDataset)> {
        if self.is_empty() {
            return None;
        }
        let len = self.len();
        let prev = (index % len + len - 1) % len;
        self.get_index(prev).map(|d| (prev, d))
    }
}

/// List `*.csv` files directly inside a folder, sorted by file name.
pub fn list_csv_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir).map_err(|e| BiosphereError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.is_file()
                && path
                    .extension()
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"))
        })
        .collect();
    files.sort();
    Ok(files)
}

/// Parses and cleans source files.
pub struct ZoneLoader {
    parser: Parser,
    pipeline: CleaningPipeline,
}

impl ZoneLoader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self::with_config(ParserConfig::default(), &CleaningConfig::default())
    }

    pub fn with_config(parser: ParserConfig, cleaning: &CleaningConfig) -> Self {
        Self {
            parser: Parser::with_config(parser),
            pipeline: CleaningPipeline::with_config(cleaning),
        }
    }

    pub fn pipeline(&self) -> &CleaningPipeline {
        &self.pipeline
    }

    /// Parse and clean a single file.
    pub fn load_file(&self, path: impl AsRef<Path>) -> Result<ZoneDataset> {
        let (table, source) = self.parser.parse_file(path)?;
        let cleaned = self.pipeline.run(table)?;
        let name = source.file.clone();

        info!(
            file = %name,
            rows = cleaned.table.row_count(),
            removed = cleaned.report.rows_removed(),
            "loaded dataset"
        );

        Ok(ZoneDataset {
            zone: Zone::guess_from_filename(&name),
            name,
            source,
            table: cleaned.table,
            report: cleaned.report,
        })
    }

    /// Load every CSV file in a folder.
    ///
    /// Files that fail to load are skipped and listed in
    /// [`ZoneCatalog::skipped`]; only an unreadable folder is an error.
    pub fn load_folder(&self, dir: impl AsRef<Path>) -> Result<ZoneCatalog> {
        let mut catalog = ZoneCatalog::default();

        for path in list_csv_files(dir.as_ref())? {
            match self.load_file(&path) {
                Ok(dataset) => {
                    catalog.datasets.insert(dataset.name.clone(), dataset);
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping file");
                    catalog.skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        Ok(catalog)
    }
}

impl Default for ZoneLoader {
    fn default() -> Self {
        Self::new()
    }
}
