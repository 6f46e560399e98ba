//! Folder-level dataset cache keyed on folder contents.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use crate::error::{BiosphereError, Result};

use super::loader::{ZoneCatalog, ZoneLoader, list_csv_files};

/// Name, size and modification time of every CSV file in a folder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderSignature(Vec<(String, u64, Option<SystemTime>)>);

impl FolderSignature {
    /// Read the signature of a folder's current contents.
    pub fn of(dir: &Path) -> Result<Self> {
        let mut entries = Vec::new();
        for path in list_csv_files(dir)? {
            let meta = fs::metadata(&path).map_err(|e| BiosphereError::Io {
                path: path.clone(),
                source: e,
            })?;
            let name = path
                .file_name()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default();
            entries.push((name, meta.len(), meta.modified().ok()));
        }
        Ok(Self(entries))
    }

    pub fn file_count(&self) -> usize {
        self.0.len()
    }
}

struct CacheEntry {
    signature: FolderSignature,
    catalog: Arc<ZoneCatalog>,
}

/// Caches loaded folders until their contents change.
#[derive(Default)]
pub struct DatasetCache {
    entries: HashMap<PathBuf, CacheEntry>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached catalog for `dir`, reloading it when any CSV file
    /// was added, removed, resized or touched since the last load.
    pub fn get_or_load(&mut self, dir: impl AsRef<Path>, loader: &ZoneLoader) -> Result<Arc<ZoneCatalog>> {
        let dir = dir.as_ref();
        let key = dir.canonicalize().map_err(|e| BiosphereError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        let signature = FolderSignature::of(&key)?;

        if let Some(entry) = self.entries.get(&key).filter(|e| e.signature == signature) {
            debug!(folder = %key.display(), "dataset cache hit");
            return Ok(Arc::clone(&entry.catalog));
        }

        debug!(folder = %key.display(), files = signature.file_count(), "loading folder");
        let catalog = Arc::new(loader.load_folder(&key)?);
        self.entries.insert(
            key,
            CacheEntry {
                signature,
                catalog: Arc::clone(&catalog),
            },
        );
        Ok(catalog)
    }

    /// Drop the cached catalog for `dir`, if any.
    pub fn invalidate(&mut self, dir: impl AsRef<Path>) {
        let dir = dir.as_ref();
        let key = dir.canonicalize().unwrap_or_else(|_| dir.to_path_buf());
        self.entries.remove(&key);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
