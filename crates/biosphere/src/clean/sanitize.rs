//! Value-level sanitation: sentinels, empty rows, timestamps, units, duplicates.

use std::collections::HashSet;

use crate::table::{ColumnKind, Table, TemperatureUnit, Value};

use super::report::{CleaningReport, CleaningStep};
use super::timestamp::coerce_to_timestamp;

/// Missing-value code used by the upstream instruments.
pub const DEFAULT_SENTINEL: f64 = -9999.0;

/// A `temp` column whose maximum exceeds this is assumed to be Fahrenheit.
pub const DEFAULT_FAHRENHEIT_THRESHOLD: f64 = 50.0;

/// Name fragments marking a date/time column.
const TIMESTAMP_FRAGMENTS: &[&str] = &["date", "time"];

/// Name fragment marking a temperature column.
const TEMPERATURE_FRAGMENT: &str = "temp";

/// Convert a Fahrenheit reading to Celsius.
pub fn fahrenheit_to_celsius(value: f64) -> f64 {
    (value - 32.0) * 5.0 / 9.0
}

/// Cleans individual values and whole rows.
///
/// Steps run in a fixed order:
/// 1. sentinel values become missing
/// 2. all-missing rows are dropped
/// 3. date/time columns are parsed; failures become missing, and rows left
///    all-missing by that are dropped
/// 4. Fahrenheit temperature columns are converted to Celsius
/// 5. exact duplicate rows are dropped, keeping the first
///
/// None of the steps fail; bad values are absorbed as missing.
#[derive(Debug, Clone)]
pub struct ValueSanitizer {
    sentinel: f64,
    fahrenheit_threshold: f64,
}

impl ValueSanitizer {
    /// Create a sanitizer with the default sentinel and threshold.
    pub fn new() -> Self {
        Self {
            sentinel: DEFAULT_SENTINEL,
            fahrenheit_threshold: DEFAULT_FAHRENHEIT_THRESHOLD,
        }
    }

    pub fn with_sentinel(mut self, sentinel: f64) -> Self {
        self.sentinel = sentinel;
        self
    }

    pub fn with_fahrenheit_threshold(mut self, threshold: f64) -> Self {
        self.fahrenheit_threshold = threshold;
        self
    }

    /// Run every step in order.
    pub fn apply(&self, mut table: Table, report: &mut CleaningReport) -> Table {
        self.replace_sentinels(&mut table, report);
        drop_empty_rows(&mut table, report);
        parse_timestamp_columns(&mut table, report);
        drop_empty_rows(&mut table, report);
        self.convert_temperatures(&mut table, report);
        drop_duplicate_rows(&mut table, report);
        table
    }

    fn replace_sentinels(&self, table: &mut Table, report: &mut CleaningReport) {
        for column in &mut table.columns {
            let mut replaced = 0;
            for value in &mut column.values {
                if value.as_number() == Some(self.sentinel) {
                    *value = Value::Missing;
                    replaced += 1;
                }
            }
            report.record(
                CleaningStep::ReplaceSentinel,
                Some(&column.name),
                replaced,
                format!("Replaced {} sentinel value(s) {} with missing", replaced, self.sentinel),
            );
        }
    }

    fn convert_temperatures(&self, table: &mut Table, report: &mut CleaningReport) {
        for column in &mut table.columns {
            if !column.name.contains(TEMPERATURE_FRAGMENT)
                || column.unit.is_some()
                || column.kind() != ColumnKind::Numeric
            {
                continue;
            }

            let max = column.numbers().into_iter().reduce(f64::max);
            let Some(max) = max else { continue };
            if max <= self.fahrenheit_threshold {
                continue;
            }

            let mut converted = 0;
            for value in &mut column.values {
                if let Value::Number(v) = value {
                    *v = fahrenheit_to_celsius(*v);
                    converted += 1;
                }
            }
            column.unit = Some(TemperatureUnit::Celsius);

            report.record(
                CleaningStep::ConvertTemperature,
                Some(&column.name),
                converted,
                format!(
                    "Converted {} value(s) from Fahrenheit (max {:.2} > {})",
                    converted, max, self.fahrenheit_threshold
                ),
            );
        }
    }
}

impl Default for ValueSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

fn drop_empty_rows(table: &mut Table, report: &mut CleaningReport) {
    let keep: Vec<bool> = (0..table.row_count())
        .map(|row| !table.is_row_missing(row))
        .collect();
    let dropped = table.retain_rows(&keep);
    report.record(
        CleaningStep::DropEmptyRows,
        None,
        dropped,
        format!("Dropped {} row(s) with no values", dropped),
    );
}

fn parse_timestamp_columns(table: &mut Table, report: &mut CleaningReport) {
    for column in &mut table.columns {
        if !column.name_contains_any(TIMESTAMP_FRAGMENTS) {
            continue;
        }

        let mut failed = 0;
        for value in &mut column.values {
            let parsed = coerce_to_timestamp(value);
            if parsed.is_missing() && !value.is_missing() {
                failed += 1;
            }
            *value = parsed;
        }

        report.record(
            CleaningStep::ParseTimestamps,
            Some(&column.name),
            failed,
            format!("{} value(s) could not be parsed as timestamps", failed),
        );
    }
}

fn drop_duplicate_rows(table: &mut Table, report: &mut CleaningReport) {
    let mut seen = HashSet::with_capacity(table.row_count());
    let keep: Vec<bool> = (0..table.row_count())
        .map(|row| seen.insert(table.row_key(row)))
        .collect();
    let dropped = table.retain_rows(&keep);
    report.record(
        CleaningStep::DropDuplicates,
        None,
        dropped,
        format!("Dropped {} duplicate row(s)", dropped),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Column;

    fn sanitize(table: Table) -> (Table, CleaningReport) {
        let mut report = CleaningReport::new();
        let table = ValueSanitizer::new().apply(table, &mut report);
        (table, report)
    }

    #[test]
    fn test_sentinel_becomes_missing() {
        let table = Table::new(vec![
            Column::numeric("co2", &[Some(400.0), Some(-9999.0)]),
            Column::numeric("rh", &[Some(50.0), Some(60.0)]),
        ])
        .unwrap();

        let (table, report) = sanitize(table);

        assert_eq!(table.columns[0].values[1], Value::Missing);
        assert_eq!(report.total_for(CleaningStep::ReplaceSentinel), 1);
    }

    #[test]
    fn test_all_missing_rows_dropped() {
        let table = Table::new(vec![
            Column::numeric("a", &[Some(1.0), None, Some(-9999.0)]),
            Column::numeric("b", &[Some(2.0), None, None]),
        ])
        .unwrap();

        let (table, _) = sanitize(table);
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_timestamp_failures_become_missing() {
        let table = Table::new(vec![
            Column::new(
                "sample_time",
                vec![Value::Text("2023-01-01 06:00".into()), Value::Text("bad".into())],
            ),
            Column::numeric("rh", &[Some(50.0), Some(60.0)]),
        ])
        .unwrap();

        let (table, report) = sanitize(table);

        assert!(matches!(table.columns[0].values[0], Value::Timestamp(_)));
        assert_eq!(table.columns[0].values[1], Value::Missing);
        assert_eq!(table.columns[0].kind(), ColumnKind::DateTime);
        assert_eq!(report.total_for(CleaningStep::ParseTimestamps), 1);
    }

    #[test]
    fn test_fahrenheit_converted_above_threshold() {
        let table = Table::new(vec![Column::numeric("air_temp", &[Some(95.0), Some(32.0)])]).unwrap();
        let (table, _) = sanitize(table);

        assert_eq!(table.columns[0].numbers(), vec![35.0, 0.0]);
        assert_eq!(table.columns[0].unit, Some(TemperatureUnit::Celsius));
    }

    #[test]
    fn test_celsius_left_alone() {
        let table = Table::new(vec![Column::numeric("air_temp", &[Some(22.0), Some(50.0)])]).unwrap();
        let (table, report) = sanitize(table);

        assert_eq!(table.columns[0].numbers(), vec![22.0, 50.0]);
        assert_eq!(table.columns[0].unit, None);
        assert_eq!(report.total_for(CleaningStep::ConvertTemperature), 0);
    }

    #[test]
    fn test_converted_column_not_converted_twice() {
        let table = Table::new(vec![Column::numeric("water_temp", &[Some(212.0), Some(150.0)])]).unwrap();
        let (once, _) = sanitize(table);
        let (twice, _) = sanitize(once.clone());

        assert_eq!(once, twice);
        assert_eq!(twice.columns[0].numbers(), vec![100.0, fahrenheit_to_celsius(150.0)]);
    }

    #[test]
    fn test_text_temp_column_untouched() {
        let table = Table::new(vec![Column::new(
            "temp_label",
            vec![Value::Text("hot".into()), Value::Number(90.0)],
        )])
        .unwrap();
        let (table, _) = sanitize(table);
        assert_eq!(table.columns[0].values[1], Value::Number(90.0));
    }

    #[test]
    fn test_duplicates_removed_keeping_first() {
        let table = Table::new(vec![
            Column::numeric("a", &[Some(1.0), Some(1.0), Some(2.0), Some(1.0)]),
            Column::numeric("b", &[None, None, Some(3.0), Some(4.0)]),
        ])
        .unwrap();

        let (table, report) = sanitize(table);

        assert_eq!(table.row_count(), 3);
        assert_eq!(table.columns[1].values, vec![Value::Missing, Value::Number(3.0), Value::Number(4.0)]);
        assert_eq!(report.total_for(CleaningStep::DropDuplicates), 1);
    }

    #[test]
    fn test_empty_table_is_fine() {
        let table = Table::new(vec![Column::numeric("a", &[None, Some(-9999.0)])]).unwrap();
        let (table, _) = sanitize(table);
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 1);
    }
}
