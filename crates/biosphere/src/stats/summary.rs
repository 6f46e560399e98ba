//! Per-column descriptive summaries and their text rendering.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use crate::table::{Column, Table};

use super::descriptive::{Moments, quantile_sorted, sorted};

/// Descriptive statistics for one numeric column.
///
/// Every statistic is `None` when it is undefined for the column's values
/// (no values at all, or too few for a spread measure).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub name: String,
    /// Number of non-missing values.
    pub count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample standard deviation (n − 1).
    pub std: Option<f64>,
    pub iqr: Option<f64>,
    pub skew: Option<f64>,
    /// Excess kurtosis (normal ≈ 0).
    pub kurtosis: Option<f64>,
    pub p10: Option<f64>,
    pub p25: Option<f64>,
    pub p75: Option<f64>,
    pub p90: Option<f64>,
}

impl SummaryRecord {
    /// Compute the record for a column's non-missing numbers.
    pub fn from_values(name: impl Into<String>, values: &[f64]) -> Self {
        let sorted = sorted(values);
        let moments = Moments::from_values(&sorted);
        let q = |p: f64| quantile_sorted(&sorted, p);
        let p25 = q(0.25);
        let p75 = q(0.75);

        Self {
            name: name.into(),
            count: sorted.len(),
            min: sorted.first().copied(),
            max: sorted.last().copied(),
            mean: moments.mean(),
            median: q(0.5),
            std: moments.sample_std(),
            iqr: p25.zip(p75).map(|(lo, hi)| hi - lo),
            skew: moments.skewness(),
            kurtosis: moments.excess_kurtosis(),
            p10: q(0.10),
            p25,
            p75,
            p90: q(0.90),
        }
    }

    /// Compute the record for a column.
    pub fn from_column(column: &Column) -> Self {
        Self::from_values(column.name.clone(), &column.numbers())
    }

    /// Whether the column had no values to summarize.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// `"<name>: min=…, max=…, mean=…, std=…"`
    pub fn minimal_line(&self) -> String {
        format!(
            "{}: min={}, max={}, mean={}, std={}",
            self.name,
            fmt_stat(self.min),
            fmt_stat(self.max),
            fmt_stat(self.mean),
            fmt_stat(self.std)
        )
    }

    /// The ten-field line: mean, median, std, IQR, skew, kurtosis, p10, p25, p75, p90.
    pub fn extended_line(&self) -> String {
        format!(
            "{}: mean={}, median={}, std={}, IQR={}, skew={}, kurtosis={}, p10={}, p25={}, p75={}, p90={}",
            self.name,
            fmt_stat(self.mean),
            fmt_stat(self.median),
            fmt_stat(self.std),
            fmt_stat(self.iqr),
            fmt_stat(self.skew),
            fmt_stat(self.kurtosis),
            fmt_stat(self.p10),
            fmt_stat(self.p25),
            fmt_stat(self.p75),
            fmt_stat(self.p90)
        )
    }
}

/// Two-decimal fixed formatting, or `undefined`.
pub fn fmt_stat(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => "undefined".to_string(),
    }
}

/// Which text layout to render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryStyle {
    /// min, max, mean, std.
    #[default]
    Minimal,
    /// Ten distribution statistics per column.
    Extended,
}

/// Summary records for every numeric column of one dataset, in column order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Name of the summarized dataset (usually the file name).
    pub dataset: String,
    pub records: Vec<SummaryRecord>,
}

impl SummaryReport {
    /// Look up a record by column name.
    pub fn record(&self, name: &str) -> Option<&SummaryRecord> {
        self.records.iter().find(|r| r.name == name)
    }

    /// Render as text: a title line followed by one line per column.
    pub fn render(&self, style: SummaryStyle) -> String {
        let mut out = match style {
            SummaryStyle::Minimal => format!("Descriptive Analysis for {}:", self.dataset),
            SummaryStyle::Extended => format!("Extended Summary for {}:", self.dataset),
        };
        for record in &self.records {
            let line = match style {
                SummaryStyle::Minimal => record.minimal_line(),
                SummaryStyle::Extended => record.extended_line(),
            };
            let _ = write!(out, "\n{}", line);
        }
        out
    }
}

/// Produces [`SummaryReport`]s from cleaned tables.
///
/// Stateless: every call recomputes from scratch.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryReporter;

impl SummaryReporter {
    pub fn new() -> Self {
        Self
    }

    /// Summarize every numeric column. All-missing columns are included with
    /// `count == 0` and every statistic undefined.
    pub fn summarize(&self, dataset: impl Into<String>, table: &Table) -> SummaryReport {
        let records = table
            .columns
            .iter()
            .filter(|c| c.kind().is_numeric())
            .map(SummaryRecord::from_column)
            .collect();

        SummaryReport {
            dataset: dataset.into(),
            records,
        }
    }
}
