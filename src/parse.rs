//! Parsing of numeric answers typed at a prompt.

use rust_decimal::Decimal;
use std::str::FromStr;

use crate::error::BillError;

/// Parse a price such as `12.50`, `+8` or `1e1`.
///
/// Surrounding whitespace is ignored. A decimal comma is not accepted.
/// Digits past the 28th fractional place are rounded away, so `1e-30`
/// parses as zero.
pub fn parse_price(text: &str) -> Result<Decimal, BillError> {
    let trimmed = text.trim();
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
        .or_else(|| parse_tiny_scientific(trimmed))
        .ok_or_else(|| not_a_number(text))
}

/// Scientific notation whose negative exponent exceeds the decimal scale.
fn parse_tiny_scientific(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = text.split_once(['e', 'E'])?;
    let mut value = Decimal::from_str(mantissa).ok()?;
    let mut shift = exponent.parse::<i64>().ok()?.checked_neg()?;
    if shift <= 0 {
        return None;
    }

    while shift > 0 && !value.is_zero() {
        value /= Decimal::TEN;
        shift -= 1;
    }
    Some(value)
}

/// Parse a whole piece count. Signs are allowed; range checks happen later.
pub fn parse_count(text: &str) -> Result<i64, BillError> {
    text.trim().parse::<i64>().map_err(|_| not_a_number(text))
}

fn not_a_number(text: &str) -> BillError {
    BillError::NotANumber {
        text: text.trim().to_string(),
    }
}
