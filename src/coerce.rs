// src/coerce.rs

//! Text-to-scalar conversions shared by every mapper.
//!
//! Tag values arrive as text. Absent text always maps to an absent value;
//! the only lenient conversion is [`pet_count`].

use crate::errors::{MappingError, Result};
use tracing::warn;

/// Parses optional text into a float. `None` stays `None`.
pub fn coerce_float(field: &'static str, value: Option<&str>) -> Result<Option<f64>> {
    value.map(|text| parse_float(field, text)).transpose()
}

/// Parses optional text into an integer. `None` stays `None`.
///
/// Decimal text such as `"650.5"` truncates toward zero.
pub fn coerce_int(field: &'static str, value: Option<&str>) -> Result<Option<i64>> {
    value.map(|text| parse_int(field, text)).transpose()
}

/// The interchange format's boolean: only the exact text `"true"` is truthy.
pub fn coerce_bool(value: Option<&str>) -> bool {
    value == Some("true")
}

/// Pet counts never fail: absent or unparsable text counts as zero.
pub fn pet_count(value: Option<&str>) -> i64 {
    let Some(text) = value else {
        return 0;
    };

    match parse_int("Count", text) {
        Ok(count) => count,
        Err(_) => {
            warn!(value = text, "unparsable pet count, defaulting to 0");
            0
        }
    }
}

// NaN and infinities are rejected: entities compare by value.
fn parse_float(field: &'static str, text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(n),
        _ => Err(MappingError::coercion(field, text, "number")),
    }
}

fn parse_int(field: &'static str, text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if let Ok(n) = trimmed.parse::<i64>() {
        return Ok(n);
    }

    // i64::MAX as f64 rounds up to 2^63, hence the exclusive upper bound.
    match trimmed.parse::<f64>() {
        Ok(n) if n >= i64::MIN as f64 && n < i64::MAX as f64 => Ok(n.trunc() as i64),
        _ => Err(MappingError::coercion(field, text, "integer")),
    }
}
