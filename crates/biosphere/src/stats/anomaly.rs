//! Z-score anomaly scan over numeric columns.

use serde::{Deserialize, Serialize};

use crate::table::{Table, Value};

use super::descriptive::Moments;

/// Default |z| above which a value is reported.
pub const DEFAULT_Z_THRESHOLD: f64 = 3.0;

/// A single flagged value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    /// Zero-based row index in the scanned table.
    pub row: usize,
    pub value: f64,
    pub z_score: f64,
}

/// Flagged values for one column.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnAnomalies {
    pub column: String,
    pub anomalies: Vec<Anomaly>,
}

impl ColumnAnomalies {
    /// `"<name>: detected <n> outliers. Outliers: [v1, v2]"`
    pub fn line(&self) -> String {
        let values: Vec<String> = self.anomalies.iter().map(|a| format!("{:?}", a.value)).collect();
        format!(
            "{}: detected {} outliers. Outliers: [{}]",
            self.column,
            self.anomalies.len(),
            values.join(", ")
        )
    }
}

/// Flags values far from their column mean in units of sample standard deviation.
#[derive(Debug, Clone)]
pub struct AnomalyScanner {
    z_threshold: f64,
}

impl AnomalyScanner {
    pub fn new() -> Self {
        Self {
            z_threshold: DEFAULT_Z_THRESHOLD,
        }
    }

    pub fn with_threshold(z_threshold: f64) -> Self {
        Self { z_threshold }
    }

    /// Scan every numeric column. Columns whose spread is undefined or zero
    /// are reported with no anomalies.
    pub fn scan(&self, table: &Table) -> Vec<ColumnAnomalies> {
        table
            .columns
            .iter()
            .filter(|c| c.kind().is_numeric())
            .map(|column| {
                let moments = Moments::from_values(&column.numbers());
                let anomalies = match (moments.mean(), moments.sample_std()) {
                    (Some(mean), Some(std)) if std > 0.0 => column
                        .values
                        .iter()
                        .enumerate()
                        .filter_map(|(row, value)| match value {
                            Value::Number(v) => Some((row, *v, (*v - mean) / std)),
                            _ => None,
                        })
                        .filter(|(_, _, z)| z.abs() > self.z_threshold)
                        .map(|(row, value, z_score)| Anomaly {
                            row,
                            value,
                            z_score,
                        })
                        .collect(),
                    _ => Vec::new(),
                };

                ColumnAnomalies {
                    column: column.name.clone(),
                    anomalies,
                }
            })
            .collect()
    }

    /// Render a scan as text with a title line.
    pub fn render(dataset: &str, results: &[ColumnAnomalies]) -> String {
        let mut lines = vec![format!("Analytical Analysis for {}:", dataset)];
        lines.extend(results.iter().map(ColumnAnomalies::line));
        lines.join("\n")
    }
}

impl Default for AnomalyScanner {
    fn default() -> Self {
        Self::new()
    }
}
