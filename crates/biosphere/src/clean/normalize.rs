//! Column name canonicalization.

use std::collections::HashMap;

use crate::error::{BiosphereError, Result};
use crate::table::Table;

use super::report::{CleaningReport, CleaningStep};

/// Canonicalize a single column name: trim, lowercase, spaces to underscores.
pub fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Renames every column to its canonical form.
#[derive(Debug, Clone, Copy, Default)]
pub struct ColumnNormalizer;

impl ColumnNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// Rename all columns. Row data is untouched.
    ///
    /// Fails with [`BiosphereError::NameCollision`] if two columns end up with
    /// the same name.
    pub fn apply(&self, mut table: Table, report: &mut CleaningReport) -> Result<Table> {
        let mut seen: HashMap<String, String> = HashMap::with_capacity(table.column_count());
        let mut renamed = 0;

        for column in &mut table.columns {
            let normalized = normalize_name(&column.name);

            if let Some(first) = seen.get(&normalized) {
                return Err(BiosphereError::NameCollision {
                    name: normalized,
                    first: first.clone(),
                    second: column.name.clone(),
                });
            }
            seen.insert(normalized.clone(), column.name.clone());

            if normalized != column.name {
                renamed += 1;
                column.name = normalized;
            }
        }

        report.record(
            CleaningStep::NormalizeNames,
            None,
            renamed,
            format!("Renamed {} column(s) to canonical form", renamed),
        );

        Ok(table)
    }
}
