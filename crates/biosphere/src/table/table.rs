//! Column-oriented table.

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{BiosphereError, Result};

use super::column::Column;
use super::types::{Value, ValueKey};

static MISSING: Value = Value::Missing;

/// An ordered collection of equal-length named columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    /// Columns in insertion order.
    pub columns: Vec<Column>,
}

impl Table {
    /// Create a table from columns.
    ///
    /// Fails if the columns do not all have the same length.
    pub fn new(columns: Vec<Column>) -> Result<Self> {
        if let Some(first) = columns.first() {
            let expected = first.len();
            if let Some(bad) = columns.iter().find(|c| c.len() != expected) {
                return Err(BiosphereError::RaggedColumns {
                    column: bad.name.clone(),
                    found: bad.len(),
                    expected,
                });
            }
        }
        Ok(Self { columns })
    }

    /// Build a table from a header row and string records.
    ///
    /// Short records are padded with missing values; long ones are truncated.
    pub fn from_records(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let mut columns: Vec<Column> = headers
            .into_iter()
            .map(|h| Column::new(h, Vec::with_capacity(records.len())))
            .collect();

        for record in &records {
            for (idx, column) in columns.iter_mut().enumerate() {
                let value = record
                    .get(idx)
                    .map(|raw| Value::parse_cell(raw))
                    .unwrap_or(Value::Missing);
                column.values.push(value);
            }
        }

        Self { columns }
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Get all column names.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.columns.get(col).and_then(|c| c.values.get(row))
    }

    /// Borrow one row across all columns.
    pub fn row(&self, row: usize) -> Vec<&Value> {
        self.columns
            .iter()
            .filter_map(|c| c.values.get(row))
            .collect()
    }

    /// Whether every value in the row is missing.
    pub fn is_row_missing(&self, row: usize) -> bool {
        self.columns
            .iter()
            .all(|c| c.values.get(row).is_none_or(Value::is_missing))
    }

    pub(crate) fn row_key(&self, row: usize) -> Vec<ValueKey> {
        self.columns
            .iter()
            .map(|c| c.values.get(row).map_or(ValueKey::Missing, Value::key))
            .collect()
    }

    /// Keep only the rows whose mask entry is `true`. Returns how many were dropped.
    pub fn retain_rows(&mut self, keep: &[bool]) -> usize {
        debug_assert_eq!(keep.len(), self.row_count());
        let dropped = keep.iter().filter(|k| !**k).count();
        if dropped == 0 {
            return 0;
        }

        for column in &mut self.columns {
            let mut mask = keep.iter();
            column.values.retain(|_| *mask.next().unwrap_or(&true));
        }
        dropped
    }

    /// Render rows back to strings for delimited export.
    pub fn to_string_records(&self) -> Vec<Vec<String>> {
        (0..self.row_count())
            .map(|row| self.row(row).into_iter().map(|v| v.to_string()).collect())
            .collect()
    }

    /// Render rows as ordered JSON objects keyed by column name.
    pub fn to_json_records(&self) -> Vec<IndexMap<&str, &Value>> {
        (0..self.row_count())
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| (c.name.as_str(), c.values.get(row).unwrap_or(&MISSING)))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_table(headers: Vec<&str>, rows: Vec<Vec<&str>>) -> Table {
        Table::from_records(
            headers.into_iter().map(String::from).collect(),
            rows.into_iter()
                .map(|r| r.into_iter().map(String::from).collect())
                .collect(),
        )
    }

    #[test]
    fn test_from_records_pads_short_rows() {
        let table = make_table(vec!["a", "b"], vec![vec!["1", "x"], vec!["2"]]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(1, 0), Some(&Value::Number(2.0)));
        assert_eq!(table.get(1, 1), Some(&Value::Missing));
        assert_eq!(table.get(0, 1), Some(&Value::Text("x".to_string())));
    }

    #[test]
    fn test_new_rejects_ragged_columns() {
        let result = Table::new(vec![
            Column::numeric("a", &[Some(1.0)]),
            Column::numeric("b", &[Some(1.0), Some(2.0)]),
        ]);
        assert!(matches!(
            result,
            Err(BiosphereError::RaggedColumns { ref column, found: 2, expected: 1 }) if column == "b"
        ));
    }

    #[test]
    fn test_row_key_tolerates_short_columns() {
        let table = Table {
            columns: vec![
                Column::numeric("a", &[Some(1.0), Some(2.0)]),
                Column::numeric("b", &[Some(1.0)]),
            ],
        };

        assert_eq!(
            table.row_key(1),
            vec![Value::Number(2.0).key(), ValueKey::Missing]
        );
    }

    #[test]
    fn test_retain_rows() {
        let mut table = make_table(vec!["a"], vec![vec!["1"], vec!["2"], vec!["3"]]);
        let dropped = table.retain_rows(&[true, false, true]);

        assert_eq!(dropped, 1);
        assert_eq!(table.columns[0].numbers(), vec![1.0, 3.0]);
    }

    #[test]
    fn test_is_row_missing() {
        let table = make_table(vec!["a", "b"], vec![vec!["", "NA"], vec!["1", ""]]);
        assert!(table.is_row_missing(0));
        assert!(!table.is_row_missing(1));
    }

    #[test]
    fn test_string_records() {
        let table = make_table(vec!["a", "b"], vec![vec!["1.5", ""]]);
        assert_eq!(table.to_string_records(), vec![vec!["1.5".to_string(), String::new()]]);
    }
}
