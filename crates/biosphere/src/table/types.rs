//! Cell values and derived column kinds.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize, Serializer};

/// Display format used when a timestamp is written back out.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single cell in a [`Table`](super::Table).
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or null.
    Missing,
    /// Any finite or infinite float. NaN is never stored; it parses to `Missing`.
    Number(f64),
    /// Free text that did not parse as a number.
    Text(String),
    /// A parsed date/time.
    Timestamp(NaiveDateTime),
}

impl Value {
    /// Parse a raw delimited-file field into a typed value.
    pub fn parse_cell(raw: &str) -> Self {
        let trimmed = raw.trim();
        if is_null_token(trimmed) {
            return Value::Missing;
        }
        match trimmed.parse::<f64>() {
            Ok(n) if n.is_nan() => Value::Missing,
            Ok(n) => Value::Number(n),
            Err(_) => Value::Text(trimmed.to_string()),
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// The numeric payload, if this is a number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Timestamp(ts) => Some(*ts),
            _ => None,
        }
    }

    /// Hashable identity used for exact-duplicate row detection.
    pub(crate) fn key(&self) -> ValueKey {
        match self {
            Value::Missing => ValueKey::Missing,
            // -0.0 and 0.0 compare equal, so they must share a key.
            Value::Number(n) if *n == 0.0 => ValueKey::Number(0.0f64.to_bits()),
            Value::Number(n) => ValueKey::Number(n.to_bits()),
            Value::Text(s) => ValueKey::Text(s.clone()),
            Value::Timestamp(ts) => ValueKey::Timestamp(*ts),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Number(n) => write!(f, "{}", n),
            Value::Text(s) => f.write_str(s),
            Value::Timestamp(ts) => write!(f, "{}", ts.format(TIMESTAMP_FORMAT)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Missing => serializer.serialize_none(),
            Value::Number(n) if n.is_finite() => serializer.serialize_f64(*n),
            Value::Number(n) => serializer.serialize_str(&n.to_string()),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Timestamp(ts) => {
                serializer.serialize_str(&ts.format(TIMESTAMP_FORMAT).to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Missing,
    Number(u64),
    Text(String),
    Timestamp(NaiveDateTime),
}

/// Check if a raw field represents a missing/null value.
pub fn is_null_token(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("#n/a")
        || trimmed.eq_ignore_ascii_case("<na>")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("-nan")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nil")
}

/// Semantic kind of a column, re-derived from its values on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    /// Every non-missing value is a number (an all-missing column counts too).
    Numeric,
    /// Every non-missing value is a timestamp.
    DateTime,
    /// Anything else.
    Text,
}

impl ColumnKind {
    /// Derive the kind of a sequence of values.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut numbers = 0usize;
        let mut timestamps = 0usize;

        for value in values {
            match value {
                Value::Missing => {}
                Value::Number(_) => numbers += 1,
                Value::Timestamp(_) => timestamps += 1,
                Value::Text(_) => return ColumnKind::Text,
            }
        }

        match (numbers, timestamps) {
            (_, 0) => ColumnKind::Numeric,
            (0, _) => ColumnKind::DateTime,
            _ => ColumnKind::Text,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnKind::Numeric)
    }
}

/// Unit recorded on a temperature column once it has been normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemperatureUnit {
    Celsius,
}
