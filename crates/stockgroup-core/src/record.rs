//! Loosely-typed spreadsheet rows.
//!
//! A [`RawRecord`] keeps the cells of one row keyed by their column header, in
//! header order. Lookups go through [`RawRecord::text`], which is the single
//! place deciding whether a field counts as present.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};

/// Largest integer an `f64` represents exactly (2^53).
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Serializes a number the way a JSON consumer expects to read it back:
/// integral values without a fractional part (`1200`, not `1200.0`).
///
/// # Errors
///
/// Propagates the serializer's error.
#[allow(clippy::cast_possible_truncation, clippy::trivially_copy_pass_by_ref)]
pub fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INT {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// Renders a number as text the way spreadsheet exports print it.
///
/// Integral and ordinary values use their shortest round-trip digits
/// (`1200`, `1.5`). Magnitudes of `1e21` and above, or below `1e-6`, switch to
/// exponent form with an explicit sign (`1e+21`, `1.5e-7`). Negative zero is
/// `"0"`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if value.is_nan() {
        return "NaN".to_owned();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_owned();
    }

    let magnitude = value.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return value.to_string();
    }

    let exp = format!("{value:e}");
    match exp.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => exp,
    }
}

/// A single cell as produced by the spreadsheet decoder.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Bool(bool),
    Text(String),
    Empty,
}

impl CellValue {
    /// Coerces the cell to text. Returns `None` for [`CellValue::Empty`].
    ///
    /// Numbers go through [`format_number`], so a cell holding `1200.0` reads
    /// as `"1200"`.
    #[must_use]
    pub fn as_text(&self) -> Option<String> {
        match self {
            Self::Number(n) => Some(format_number(*n)),
            Self::Bool(b) => Some(b.to_string()),
            Self::Text(s) => Some(s.clone()),
            Self::Empty => None,
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl Serialize for CellValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Number(n) => serialize_number(n, serializer),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Text(s) => serializer.serialize_str(s),
            Self::Empty => serializer.serialize_unit(),
        }
    }
}

/// One spreadsheet row: column header to cell value, in header order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RawRecord(IndexMap<String, CellValue>);

impl RawRecord {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        self.0.insert(column.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.0.get(column)
    }

    /// Returns the field coerced to text when it is present and non-empty.
    ///
    /// A missing column, an [`CellValue::Empty`] cell and an empty string are
    /// all treated as absent.
    #[must_use]
    pub fn text(&self, column: &str) -> Option<String> {
        self.get(column)
            .and_then(CellValue::as_text)
            .filter(|s| !s.is_empty())
    }

    /// Like [`RawRecord::text`], falling back to `default` when absent.
    #[must_use]
    pub fn text_or(&self, column: &str, default: &str) -> String {
        self.text(column).unwrap_or_else(|| default.to_owned())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for RawRecord
where
    K: Into<String>,
    V: Into<CellValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_treats_missing_empty_and_blank_as_absent() {
        let mut record = RawRecord::new();
        record.insert("Blank", "");
        record.insert("Empty", CellValue::Empty);
        assert_eq!(record.text("Blank"), None);
        assert_eq!(record.text("Empty"), None);
        assert_eq!(record.text("Missing"), None);
    }

    #[test]
    fn text_keeps_whitespace_only_values() {
        let record: RawRecord = [("Color", " ")].into_iter().collect();
        assert_eq!(record.text("Color").as_deref(), Some(" "));
    }

    #[test]
    fn text_coerces_numbers_without_trailing_zeroes() {
        let record: RawRecord = [("Price", 1200.0), ("Weight", 1.5)].into_iter().collect();
        assert_eq!(record.text("Price").as_deref(), Some("1200"));
        assert_eq!(record.text("Weight").as_deref(), Some("1.5"));
    }

    #[test]
    fn text_coerces_negative_zero_and_extreme_magnitudes() {
        let record: RawRecord = [
            ("Zero", -0.0),
            ("Huge", 1e21),
            ("Tiny", 1.5e-7),
            ("Small", 1e-6),
        ]
        .into_iter()
        .collect();
        assert_eq!(record.text("Zero").as_deref(), Some("0"));
        assert_eq!(record.text("Huge").as_deref(), Some("1e+21"));
        assert_eq!(record.text("Tiny").as_deref(), Some("1.5e-7"));
        assert_eq!(record.text("Small").as_deref(), Some("0.000001"));
    }

    #[test]
    fn format_number_handles_non_finite_values() {
        assert_eq!(format_number(f64::INFINITY), "Infinity");
        assert_eq!(format_number(f64::NEG_INFINITY), "-Infinity");
        assert_eq!(format_number(f64::NAN), "NaN");
        assert_eq!(format_number(-2.5e22), "-2.5e+22");
    }

    #[test]
    fn text_or_falls_back_to_default() {
        let record = RawRecord::new();
        assert_eq!(record.text_or("Color", "Default"), "Default");
    }

    #[test]
    fn serializes_as_object_in_header_order() {
        let mut record = RawRecord::new();
        record.insert("Model", "iMac");
        record.insert("Price", 999.0);
        record.insert("In Stock", CellValue::Bool(true));
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"Model":"iMac","Price":999,"In Stock":true}"#);
    }

    #[test]
    fn fractional_numbers_keep_their_fraction() {
        let record: RawRecord = [("Price", 1299.99)].into_iter().collect();
        let json = serde_json::to_string(&record).expect("serialize");
        assert_eq!(json, r#"{"Price":1299.99}"#);
    }
}
