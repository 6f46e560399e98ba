//! A single named column of typed values.

use serde::Serialize;

use super::types::{ColumnKind, TemperatureUnit, Value};

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    /// Column name.
    pub name: String,
    /// Cell values, one per row.
    pub values: Vec<Value>,
    /// Set once a temperature column has been normalized.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<TemperatureUnit>,
}

impl Column {
    /// Create a new column with no unit.
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
            unit: None,
        }
    }

    /// Create a numeric column; `None` entries become missing.
    pub fn numeric(name: impl Into<String>, values: &[Option<f64>]) -> Self {
        let values = values
            .iter()
            .map(|v| v.map_or(Value::Missing, Value::Number))
            .collect();
        Self::new(name, values)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Derive the column kind from its current values.
    pub fn kind(&self) -> ColumnKind {
        ColumnKind::infer(&self.values)
    }

    /// Non-missing numeric values, in row order.
    pub fn numbers(&self) -> Vec<f64> {
        self.values.iter().filter_map(Value::as_number).collect()
    }

    /// Number of non-missing values.
    pub fn non_missing_count(&self) -> usize {
        self.values.iter().filter(|v| !v.is_missing()).count()
    }

    /// Whether the (normalized) name contains any of the given fragments.
    pub fn name_contains_any(&self, fragments: &[&str]) -> bool {
        fragments.iter().any(|f| self.name.contains(f))
    }
}
