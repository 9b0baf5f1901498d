//! Text to number coercion for form input.
//!
//! Form fields arrive as raw user-entered text. The forgiving coercers never
//! fail: blank, unparseable or non-finite text is read as zero. The strict
//! coercers still read blank text as zero but reject anything else that is
//! not a usable non-negative number.
//!
//! ```
//! use footprint_core::coerce::{parse_count, parse_quantity};
//!
//! assert_eq!(parse_quantity(" 42.5 "), 42.5);
//! assert_eq!(parse_quantity(""), 0.0);
//! assert_eq!(parse_quantity("lots"), 0.0);
//! assert_eq!(parse_count("8.9"), 8);
//! ```

use crate::errors::{FootprintError, FootprintResult};
use crate::FloatValue;
use log::debug;

fn parse_finite(text: &str) -> Option<FloatValue> {
    text.parse::<FloatValue>().ok().filter(|v| v.is_finite())
}

/// Parse a quantity, substituting 0.0 for blank or non-numeric text.
///
/// Negative numbers pass through unchanged.
pub fn parse_quantity(text: &str) -> FloatValue {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match parse_finite(trimmed) {
        Some(value) => value,
        None => {
            debug!("Coercing non-numeric quantity {:?} to 0", text);
            0.0
        }
    }
}

/// Parse a whole-number count.
///
/// The text is read as a quantity first, then truncated toward zero.
/// Negative counts become 0 and counts beyond `u32::MAX` saturate.
pub fn parse_count(text: &str) -> u32 {
    let value = parse_quantity(text);
    if value < 0.0 {
        debug!("Coercing negative count {:?} to 0", text);
    }
    // `as` saturates for floats, and negatives land on 0
    value.trunc() as u32
}

/// Parse a quantity, rejecting anything that is not a finite non-negative number.
///
/// Blank text is still read as zero.
pub fn parse_quantity_strict(field: &str, text: &str) -> FootprintResult<FloatValue> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    match parse_finite(trimmed) {
        Some(value) if value >= 0.0 => Ok(value),
        _ => Err(FootprintError::invalid_input(field, trimmed)),
    }
}

/// Parse a count, rejecting fractional, negative or out of range values.
pub fn parse_count_strict(field: &str, text: &str) -> FootprintResult<u32> {
    let value = parse_quantity_strict(field, text)?;
    if value.fract() != 0.0 || value > FloatValue::from(u32::MAX) {
        return Err(FootprintError::invalid_input(field, text.trim()));
    }
    Ok(value as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_zero() {
        assert_eq!(parse_quantity(""), 0.0);
        assert_eq!(parse_quantity("   "), 0.0);
        assert_eq!(parse_count(""), 0);
    }

    #[test]
    fn non_numeric_is_zero() {
        for text in ["abc", "12abc", "1,200", "NaN", "inf", "-inf", "--3"] {
            assert_eq!(parse_quantity(text), 0.0, "{text:?}");
        }
    }

    #[test]
    fn numbers_parse() {
        assert_eq!(parse_quantity("420"), 420.0);
        assert_eq!(parse_quantity("\t2.5\n"), 2.5);
        assert_eq!(parse_quantity("1e3"), 1000.0);
        assert_eq!(parse_quantity("-4"), -4.0);
    }

    #[test]
    fn counts_truncate_and_clamp() {
        assert_eq!(parse_count("8"), 8);
        assert_eq!(parse_count("8.99"), 8);
        assert_eq!(parse_count("-3"), 0);
        assert_eq!(parse_count("1e12"), u32::MAX);
    }

    #[test]
    fn strict_accepts_blank_and_valid() {
        assert_eq!(parse_quantity_strict("petrolLiters", "").unwrap(), 0.0);
        assert_eq!(parse_quantity_strict("petrolLiters", " 55 ").unwrap(), 55.0);
        assert_eq!(parse_count_strict("treeCount", "8").unwrap(), 8);
        assert_eq!(parse_count_strict("treeCount", "8.0").unwrap(), 8);
    }

    #[test]
    fn strict_rejects_bad_text() {
        for text in ["abc", "-1", "NaN", "inf"] {
            match parse_quantity_strict("dieselLiters", text) {
                Err(FootprintError::InvalidInput { field, value }) => {
                    assert_eq!(field, "dieselLiters");
                    assert_eq!(value, text);
                }
                other => panic!("Expected InvalidInput for {text:?}, got {other:?}"),
            }
        }
        assert!(parse_count_strict("treeCount", "2.5").is_err());
        assert!(parse_count_strict("treeCount", "1e12").is_err());
    }
}
