//! The full cleaning pipeline: normalize, sanitize, clip.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::table::Table;

use super::clip::{DEFAULT_IQR_MULTIPLIER, OutlierClipper};
use super::normalize::ColumnNormalizer;
use super::report::CleaningReport;
use super::sanitize::{DEFAULT_FAHRENHEIT_THRESHOLD, DEFAULT_SENTINEL, ValueSanitizer};

/// Cleaning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleaningConfig {
    /// Numeric code meaning "missing".
    pub sentinel: f64,
    /// Maximum above which a `temp` column is treated as Fahrenheit.
    pub fahrenheit_threshold: f64,
    /// Whether to clip numeric outliers.
    pub clip_outliers: bool,
    /// Multiplier for the IQR fences.
    pub iqr_multiplier: f64,
}

impl Default for CleaningConfig {
    fn default() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
            fahrenheit_threshold: DEFAULT_FAHRENHEIT_THRESHOLD,
            clip_outliers: true,
            iqr_multiplier: DEFAULT_IQR_MULTIPLIER,
        }
    }
}

/// A cleaned table and the record of how it got that way.
#[derive(Debug, Clone)]
pub struct CleanedTable {
    pub table: Table,
    pub report: CleaningReport,
}

/// Chains [`ColumnNormalizer`], [`ValueSanitizer`] and [`OutlierClipper`].
pub struct CleaningPipeline {
    normalizer: ColumnNormalizer,
    sanitizer: ValueSanitizer,
    clipper: Option<OutlierClipper>,
}

impl CleaningPipeline {
    /// Create a pipeline with default configuration.
    pub fn new() -> Self {
        Self::with_config(&CleaningConfig::default())
    }

    /// Create a pipeline from configuration.
    pub fn with_config(config: &CleaningConfig) -> Self {
        let sanitizer = ValueSanitizer::new()
            .with_sentinel(config.sentinel)
            .with_fahrenheit_threshold(config.fahrenheit_threshold);
        let clipper = config
            .clip_outliers
            .then(|| OutlierClipper::with_multiplier(config.iqr_multiplier));

        Self {
            normalizer: ColumnNormalizer::new(),
            sanitizer,
            clipper,
        }
    }

    /// Run every stage over a table.
    ///
    /// Only a column-name collision fails; value-level problems are absorbed.
    pub fn run(&self, table: Table) -> Result<CleanedTable> {
        let mut report = CleaningReport::new();
        report.rows_before = table.row_count();

        let table = self.normalizer.apply(table, &mut report)?;
        let table = self.sanitizer.apply(table, &mut report);
        let table = match &self.clipper {
            Some(clipper) => clipper.apply(table, &mut report),
            None => table,
        };

        report.rows_after = table.row_count();
        debug!(
            rows_before = report.rows_before,
            rows_after = report.rows_after,
            changes = report.changes.len(),
            "cleaning finished"
        );

        Ok(CleanedTable { table, report })
    }
}

impl Default for CleaningPipeline {
    fn default() -> Self {
        Self::new()
    }
}
