//! Path id conversion.
//!
//! Two conversions are in use. Get-by-id converts the whole string as a
//! number literal; delete takes the leading integer and ignores the rest.
//! Update gates on the leading integer but addresses the row by the whole
//! string conversion. A converted value that cannot address a row is a store-level
//! failure, not a client input error.

use super::repository::StoreError;

/// Numeric conversion of the whole (trimmed) string.
///
/// Blank strings are 0. Accepts decimal and exponent forms, `0x`/`0o`/`0b`
/// prefixed integers, and `Infinity` with an optional sign. Returns `None`
/// for anything that is not a number.
pub fn parse_number(raw: &str) -> Option<f64> {
    let s = raw.trim();
    if s.is_empty() {
        return Some(0.0);
    }

    match s {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return None;
        }
        return Some(u128::from_str_radix(digits, radix).unwrap_or(u128::MAX) as f64);
    }

    // Rust's float grammar also takes "inf"/"nan"; restrict to plain literals.
    let plain = s
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !plain || !s.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }
    s.parse::<f64>().ok()
}

/// Leading-integer conversion: optional whitespace and sign, then digits.
///
/// A `0x`/`0X` prefix switches to hex digits. `"12abc"` is 12, `"1.9"` is
/// 1, `"0x1f"` is 31, `"abc"` and `"0x"` are `None`.
pub fn parse_leading_int(raw: &str) -> Option<i128> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let (radix, rest) = match rest.get(..2) {
        Some("0x") | Some("0X") => (16, &rest[2..]),
        _ => (10, rest),
    };
    let end = rest
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(rest.len());
    let digits = &rest[..end];
    if digits.is_empty() {
        return None;
    }
    // Saturate absurdly long inputs; they are out of key range either way.
    let magnitude = i128::from_str_radix(digits, radix).unwrap_or(i128::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Turn a converted number into a row key.
pub fn record_key_from_number(value: f64) -> Result<i32, StoreError> {
    if value.is_finite()
        && value.fract() == 0.0
        && value >= f64::from(i32::MIN)
        && value <= f64::from(i32::MAX)
    {
        Ok(value as i32)
    } else {
        Err(StoreError::InvalidId(value.to_string()))
    }
}

pub fn record_key_from_int(value: i128) -> Result<i32, StoreError> {
    i32::try_from(value).map_err(|_| StoreError::InvalidId(value.to_string()))
}
