//! Lenient timestamp parsing for date/time columns.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::Value;

// Shapes worth handing to chrono at all; anything else is rejected early.
static TIMESTAMP_SHAPES: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{1,2}-\d{1,2}").unwrap(), // ISO date
        Regex::new(r"^\d{4}/\d{1,2}/\d{1,2}").unwrap(), // Alt ISO
        Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}").unwrap(), // US date
        Regex::new(r"^\d{1,2}-\d{1,2}-\d{4}").unwrap(), // European date
        Regex::new(r"^\d{1,2}:\d{2}(:\d{2})?$").unwrap(), // Time of day
    ]
});

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];

const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M"];

/// Parse a text field as a timestamp.
///
/// Date-only values land at midnight; time-only values land on 1970-01-01.
/// Offsets in RFC 3339 input are folded into UTC.
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if !TIMESTAMP_SHAPES.iter().any(|shape| shape.is_match(trimmed)) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return NaiveDate::from_ymd_opt(1970, 1, 1).map(|epoch| NaiveDateTime::new(epoch, time));
        }
    }

    None
}

/// Convert a cell to a timestamp cell. Anything that does not parse becomes missing.
pub fn coerce_to_timestamp(value: &Value) -> Value {
    match value {
        Value::Timestamp(_) | Value::Missing => value.clone(),
        Value::Text(s) => parse_timestamp(s).map_or(Value::Missing, Value::Timestamp),
        Value::Number(_) => Value::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").unwrap()
    }

    #[test]
    fn test_parse_common_formats() {
        assert_eq!(parse_timestamp("2023-01-01"), Some(ts("2023-01-01 00:00:00")));
        assert_eq!(parse_timestamp("2023-01-01 13:45:00"), Some(ts("2023-01-01 13:45:00")));
        assert_eq!(parse_timestamp("2023-01-01T13:45"), Some(ts("2023-01-01 13:45:00")));
        assert_eq!(parse_timestamp("01/15/2023"), Some(ts("2023-01-15 00:00:00")));
        assert_eq!(parse_timestamp("2023/01/15 06:00"), Some(ts("2023-01-15 06:00:00")));
        assert_eq!(
            parse_timestamp("2023-01-01T12:00:00+02:00"),
            Some(ts("2023-01-01 10:00:00"))
        );
        assert_eq!(parse_timestamp("06:30"), Some(ts("1970-01-01 06:30:00")));
    }

    #[test]
    fn test_rejects_garbage() {
        assert_eq!(parse_timestamp("bad"), None);
        assert_eq!(parse_timestamp("2023-13-45"), None);
        assert_eq!(parse_timestamp(""), None);
    }

    #[test]
    fn test_coerce() {
        assert_eq!(coerce_to_timestamp(&Value::Text("bad".into())), Value::Missing);
        assert_eq!(coerce_to_timestamp(&Value::Number(5.0)), Value::Missing);
        let parsed = coerce_to_timestamp(&Value::Text("2023-01-01".into()));
        assert_eq!(parsed, Value::Timestamp(ts("2023-01-01 00:00:00")));
        assert_eq!(coerce_to_timestamp(&parsed), parsed);
    }
}
