//! Alternatives and their raw field values.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::foundation::AlternativeId;

/// A raw value attached to an alternative.
///
/// Records arrive loosely typed (prices as strings, owner counts as ranges,
/// platform support as booleans, tags as lists). Values keep their shape here
/// and are coerced only when a criterion or constraint reads them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Number(f64),
    Text(String),
    List(Vec<String>),
}

impl FieldValue {
    /// Numeric reading of the value. See [`parse_numeric`].
    pub fn as_number(&self) -> f64 {
        parse_numeric(self)
    }

    /// Truthiness of the value: `true`, non-zero numbers, the text "true",
    /// and non-empty lists.
    pub fn as_flag(&self) -> bool {
        match self {
            FieldValue::Flag(b) => *b,
            FieldValue::Number(n) => *n != 0.0,
            FieldValue::Text(s) => s.trim().eq_ignore_ascii_case("true"),
            FieldValue::List(items) => !items.is_empty(),
        }
    }

    /// Returns true if the list contains `value`, or the text equals it.
    pub fn contains(&self, value: &str) -> bool {
        match self {
            FieldValue::List(items) => items.iter().any(|item| item == value),
            FieldValue::Text(s) => s == value,
            _ => false,
        }
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Flag(b)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }
}

impl From<Vec<&str>> for FieldValue {
    fn from(items: Vec<&str>) -> Self {
        FieldValue::List(items.into_iter().map(String::from).collect())
    }
}

/// Coerces a raw value to `f64`.
///
/// - numbers pass through, booleans read as 1.0 / 0.0
/// - numeric strings parse after trimming and removing thousands separators
/// - range strings such as `"2000000 - 5000000"` read as their integer midpoint
/// - anything else reads as 0.0
pub fn parse_numeric(value: &FieldValue) -> f64 {
    match value {
        FieldValue::Number(n) => *n,
        FieldValue::Flag(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        FieldValue::Text(s) => parse_numeric_str(s),
        FieldValue::List(_) => 0.0,
    }
}

/// String form of [`parse_numeric`].
pub fn parse_numeric_str(raw: &str) -> f64 {
    let cleaned = raw.trim().replace(',', "");
    if let Ok(n) = cleaned.parse::<f64>() {
        if n.is_finite() {
            return n;
        }
    }
    parse_range_midpoint(&cleaned).map(|m| m as f64).unwrap_or(0.0)
}

/// Parses `"low - high"` into the floored integer midpoint.
pub fn parse_range_midpoint(raw: &str) -> Option<i64> {
    let parts: Vec<&str> = raw.split('-').collect();
    if parts.len() != 2 {
        return None;
    }
    let low: i64 = parts[0].trim().replace(',', "").parse().ok()?;
    let high: i64 = parts[1].trim().replace(',', "").parse().ok()?;
    // the midpoint of two i64 values always fits back into i64
    let midpoint = (i128::from(low) + i128::from(high)).div_euclid(2);
    i64::try_from(midpoint).ok()
}

/// A candidate being ranked: an identifier plus named raw fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alternative {
    pub id: AlternativeId,
    #[serde(default)]
    pub fields: BTreeMap<String, FieldValue>,
}

impl Alternative {
    /// Creates an alternative with no fields.
    pub fn new(id: impl Into<AlternativeId>) -> Self {
        Self {
            id: id.into(),
            fields: BTreeMap::new(),
        }
    }

    /// Adds a field, builder style.
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Returns the raw field, if present.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns the coerced numeric value, or None when the field is missing.
    pub fn number(&self, name: &str) -> Option<f64> {
        self.field(name).map(FieldValue::as_number)
    }

    /// Returns the field's truthiness; missing fields are false.
    pub fn flag(&self, name: &str) -> bool {
        self.field(name).map(FieldValue::as_flag).unwrap_or(false)
    }

    /// Returns true if the field holds `value` (list membership or text equality).
    pub fn contains(&self, name: &str, value: &str) -> bool {
        self.field(name).map(|f| f.contains(value)).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_numeric_passes_numbers_through() {
        assert_eq!(parse_numeric(&FieldValue::Number(19.99)), 19.99);
    }

    #[test]
    fn parse_numeric_reads_numeric_strings() {
        assert_eq!(parse_numeric_str("  4.5 "), 4.5);
        assert_eq!(parse_numeric_str("1,250"), 1250.0);
    }

    #[test]
    fn parse_numeric_reads_range_midpoint() {
        assert_eq!(parse_numeric_str("2000000 - 5000000"), 3_500_000.0);
        assert_eq!(parse_numeric_str("0 - 20,000"), 10_000.0);
        assert_eq!(parse_numeric_str("1 - 2"), 1.0);
    }

    #[test]
    fn parse_numeric_failure_is_zero() {
        assert_eq!(parse_numeric_str("free"), 0.0);
        assert_eq!(parse_numeric_str("1 - 2 - 3"), 0.0);
        assert_eq!(parse_numeric(&FieldValue::List(vec!["a".into()])), 0.0);
    }

    #[test]
    fn non_finite_strings_read_as_zero() {
        assert_eq!(parse_numeric_str("NaN"), 0.0);
        assert_eq!(parse_numeric_str("inf"), 0.0);
        assert_eq!(parse_numeric_str("-Infinity"), 0.0);
    }

    #[test]
    fn range_midpoint_of_large_bounds_does_not_overflow() {
        assert_eq!(
            parse_range_midpoint("9000000000000000000 - 9000000000000000000"),
            Some(9_000_000_000_000_000_000)
        );
        assert_eq!(
            parse_range_midpoint("9223372036854775807 - 9223372036854775806"),
            Some(i64::MAX - 1)
        );
        assert_eq!(parse_numeric_str("9000000000000000000 - 9000000000000000000"), 9e18);
    }

    #[test]
    fn parse_numeric_keeps_negative_numbers() {
        assert_eq!(parse_numeric_str("-5"), -5.0);
    }

    #[test]
    fn flags_read_truthiness() {
        assert!(FieldValue::Flag(true).as_flag());
        assert!(FieldValue::Number(1.0).as_flag());
        assert!(!FieldValue::Number(0.0).as_flag());
        assert!(FieldValue::Text("TRUE".into()).as_flag());
        assert!(!FieldValue::List(vec![]).as_flag());
    }

    #[test]
    fn alternative_missing_fields_read_as_absent() {
        let alt = Alternative::new("g1").with_field("price", 10.0);
        assert_eq!(alt.number("price"), Some(10.0));
        assert_eq!(alt.number("ram_gb"), None);
        assert!(!alt.flag("linux"));
        assert!(!alt.contains("tags", "RPG"));
    }

    #[test]
    fn alternative_contains_checks_lists() {
        let alt = Alternative::new("g1").with_field("categories", vec!["Single-player", "Multi-player"]);
        assert!(alt.contains("categories", "Multi-player"));
        assert!(!alt.contains("categories", "Co-op"));
    }

    #[test]
    fn field_values_deserialize_untagged() {
        let json = r#"{"id": "1", "fields": {"price": 9.5, "windows": true, "owners": "0 - 20000", "tags": ["Indie"]}}"#;
        let alt: Alternative = serde_json::from_str(json).unwrap();
        assert_eq!(alt.field("price"), Some(&FieldValue::Number(9.5)));
        assert_eq!(alt.field("windows"), Some(&FieldValue::Flag(true)));
        assert_eq!(alt.number("owners"), Some(10_000.0));
        assert!(alt.contains("tags", "Indie"));
    }
}
