//! Multi-file zone datasets.
//!
//! A folder of CSV exports is loaded into a [`ZoneCatalog`], one cleaned
//! dataset per file, with each file's biome guessed from its name.

mod cache;
mod kind;
mod loader;

pub use cache::{DatasetCache, FolderSignature};
pub use kind::Zone;
pub use loader::{SkippedFile, ZoneCatalog, ZoneDataset, ZoneLoader, list_csv_files};
