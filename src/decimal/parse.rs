// ============================================================================
// Parser / Normalizer
// Textual and native-float input to the canonical digit representation
// ============================================================================

use super::{Decimal, DigitVec, Sign};
use crate::error::{DecimalError, DecimalResult};

/// Parse a decimal literal: optional `-`, digits with at most one `.`, and
/// an optional `e`/`E` exponent with its own optional sign.
///
/// The coefficient is flattened to a digit sequence, the exponent is taken
/// relative to the most significant digit, and zeros are stripped from both
/// ends. All-zero input collapses to the canonical zero.
pub(crate) fn parse_str(input: &str) -> DecimalResult<Decimal> {
    let (sign, body) = match input.strip_prefix('-') {
        Some(rest) => (Sign::Negative, rest),
        None => (Sign::Positive, input),
    };

    let (mantissa, explicit_exp) = match body.find(['e', 'E']) {
        Some(i) => (&body[..i], parse_exponent(&body[i + 1..])?),
        None => (body, 0i64),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(i) => (&mantissa[..i], &mantissa[i + 1..]),
        None => (mantissa, ""),
    };
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(DecimalError::InvalidNumber);
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit())
        || !frac_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(DecimalError::InvalidNumber);
    }

    // Exponent of the digit just left of the decimal point, before any
    // normalization.
    let point = (int_part.len() as i64)
        .checked_add(explicit_exp)
        .ok_or(DecimalError::InvalidNumber)?;

    let raw: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes())
        .map(|b| b - b'0')
        .collect();

    let leading = raw.iter().take_while(|&&d| d == 0).count();
    if leading == raw.len() {
        // Zero in any guise normalizes to the positive canonical form.
        return Ok(Decimal::zero());
    }

    let mut digits: DigitVec = DigitVec::from_slice(&raw[leading..]);
    while digits.last() == Some(&0) {
        digits.pop();
    }

    Ok(Decimal {
        sign,
        exponent: point - leading as i64 - 1,
        digits,
    })
}

fn parse_exponent(s: &str) -> DecimalResult<i64> {
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DecimalError::InvalidNumber);
    }
    let magnitude: i64 = digits.parse().map_err(|_| DecimalError::InvalidNumber)?;
    Ok(if negative { -magnitude } else { magnitude })
}

/// Render a native float as a parseable literal, keeping the sign of
/// negative zero (its shortest form would otherwise read as plain zero).
pub(crate) fn f64_literal(value: f64) -> String {
    if value == 0.0 && value.is_sign_negative() {
        "-0".to_string()
    } else {
        format!("{value}")
    }
}
