//! Base price extraction from loosely-named price columns.

use crate::record::RawRecord;

/// Columns checked for a price, highest priority first.
pub const PRICE_FIELDS: [&str; 4] = ["Price", "Cost", "Value", "Amount"];

/// Returns the first price-like field that parses as a number, or `0.0`.
///
/// Parsing reads the longest leading float (`"1200 USD"` is `1200`), so a
/// value such as `"$1200"` or `"n/a"` is skipped in favour of the next field.
#[must_use]
pub fn extract_price(record: &RawRecord) -> f64 {
    PRICE_FIELDS
        .iter()
        .filter_map(|field| record.text(field))
        .find_map(|text| parse_float_prefix(&text))
        .unwrap_or(0.0)
}

/// Parses the leading decimal number in `input`, ignoring leading whitespace
/// and anything after the number.
///
/// Accepts an optional sign, digits with an optional fraction (or a bare
/// fraction such as `".5"`), and an optional exponent.
fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0usize;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if digits > 0 || frac_end > frac_start {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    // Exponent only counts when at least one digit follows it.
    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while bytes.get(exp_end).is_some_and(u8::is_ascii_digit) {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    s[..end].parse::<f64>().ok().filter(|v| v.is_finite())
}
