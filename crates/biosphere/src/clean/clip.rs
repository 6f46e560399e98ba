//! IQR-based outlier clipping.

use serde::{Deserialize, Serialize};

use crate::stats::{quantile_sorted, sorted};
use crate::table::{Column, Table, Value};

use super::report::{CleaningReport, CleaningStep};

/// Default IQR multiplier for the Tukey fences.
pub const DEFAULT_IQR_MULTIPLIER: f64 = 1.5;

/// Fences computed from one column's distribution.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClipBounds {
    pub q1: f64,
    pub q3: f64,
    pub lower: f64,
    pub upper: f64,
}

impl ClipBounds {
    /// Compute fences from non-missing values.
    ///
    /// Returns `None` when there is nothing to clip: no values, a zero IQR
    /// (which includes fewer than two distinct values), or a non-finite IQR.
    pub fn from_values(values: &[f64], multiplier: f64) -> Option<Self> {
        let sorted = sorted(values);
        let q1 = quantile_sorted(&sorted, 0.25)?;
        let q3 = quantile_sorted(&sorted, 0.75)?;
        let iqr = q3 - q1;
        if iqr == 0.0 || !iqr.is_finite() {
            return None;
        }
        Some(Self {
            q1,
            q3,
            lower: q1 - multiplier * iqr,
            upper: q3 + multiplier * iqr,
        })
    }

    pub fn iqr(&self) -> f64 {
        self.q3 - self.q1
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Clamp a value into the fences.
    pub fn clip(&self, value: f64) -> f64 {
        self.lower.max(self.upper.min(value))
    }
}

/// Clips every numeric column into its own Tukey fences.
#[derive(Debug, Clone)]
pub struct OutlierClipper {
    multiplier: f64,
}

impl OutlierClipper {
    pub fn new() -> Self {
        Self {
            multiplier: DEFAULT_IQR_MULTIPLIER,
        }
    }

    pub fn with_multiplier(multiplier: f64) -> Self {
        Self { multiplier }
    }

    /// Fences for a column, or `None` if it is not numeric or should be left alone.
    pub fn bounds_for(&self, column: &Column) -> Option<ClipBounds> {
        if !column.kind().is_numeric() {
            return None;
        }
        ClipBounds::from_values(&column.numbers(), self.multiplier)
    }

    /// Clip all numeric columns. Missing values are left untouched.
    pub fn apply(&self, mut table: Table, report: &mut CleaningReport) -> Table {
        for column in &mut table.columns {
            let Some(bounds) = self.bounds_for(column) else {
                tracing::trace!(column = %column.name, "skipping clip: not numeric or zero IQR");
                continue;
            };

            let mut clipped = 0;
            for value in &mut column.values {
                if let Value::Number(v) = value {
                    if !bounds.contains(*v) {
                        *v = bounds.clip(*v);
                        clipped += 1;
                    }
                }
            }

            report.record(
                CleaningStep::ClipOutliers,
                Some(&column.name),
                clipped,
                format!(
                    "Clipped {} value(s) into [{:.2}, {:.2}]",
                    clipped, bounds.lower, bounds.upper
                ),
            );
        }
        table
    }
}

impl Default for OutlierClipper {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clip(table: Table) -> (Table, CleaningReport) {
        let mut report = CleaningReport::new();
        let table = OutlierClipper::new().apply(table, &mut report);
        (table, report)
    }

    #[test]
    fn test_bounds() {
        let bounds = ClipBounds::from_values(&[1.0, 2.0, 3.0, 4.0, 100.0], 1.5).unwrap();
        assert_eq!(bounds.q1, 2.0);
        assert_eq!(bounds.q3, 4.0);
        assert_eq!(bounds.iqr(), 2.0);
        assert_eq!(bounds.lower, -1.0);
        assert_eq!(bounds.upper, 7.0);
    }

    #[test]
    fn test_clip_column() {
        let table = Table::new(vec![Column::numeric(
            "co2",
            &[Some(1.0), Some(2.0), Some(3.0), Some(4.0), Some(100.0)],
        )])
        .unwrap();

        let (table, report) = clip(table);

        assert_eq!(table.columns[0].numbers(), vec![1.0, 2.0, 3.0, 4.0, 7.0]);
        assert_eq!(report.total_for(CleaningStep::ClipOutliers), 1);
    }

    #[test]
    fn test_missing_values_untouched() {
        let table = Table::new(vec![Column::numeric(
            "co2",
            &[Some(1.0), None, Some(2.0), Some(3.0), Some(4.0), Some(-50.0)],
        )])
        .unwrap();

        let (table, _) = clip(table);
        assert_eq!(table.columns[0].values[1], Value::Missing);
        // Q1 = 1, Q3 = 3, so the lower fence is 1 - 1.5 * 2 = -2.
        assert_eq!(table.columns[0].numbers(), vec![1.0, 2.0, 3.0, 4.0, -2.0]);
    }

    #[test]
    fn test_zero_iqr_column_skipped() {
        let table = Table::new(vec![Column::numeric(
            "flag",
            &[Some(0.0), Some(0.0), Some(0.0), Some(0.0), Some(1.0)],
        )])
        .unwrap();

        let (table, report) = clip(table);
        assert_eq!(table.columns[0].numbers(), vec![0.0, 0.0, 0.0, 0.0, 1.0]);
        assert!(report.changes.is_empty());
    }

    #[test]
    fn test_text_column_skipped() {
        let table = Table::new(vec![Column::new(
            "zone",
            vec![Value::Text("ocean".into()), Value::Number(1000.0)],
        )])
        .unwrap();

        let (table, _) = clip(table);
        assert_eq!(table.columns[0].values[1], Value::Number(1000.0));
    }

    #[test]
    fn test_all_missing_column_is_noop() {
        let table = Table::new(vec![Column::numeric("rh", &[None, None])]).unwrap();
        let (table, report) = clip(table);
        assert_eq!(table.columns[0].non_missing_count(), 0);
        assert!(report.changes.is_empty());
    }
}
