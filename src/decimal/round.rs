// ============================================================================
// Rounding Engine
// Significant-digit rounding under the four rounding modes
// ============================================================================

use super::Decimal;
use crate::context::{Context, RoundingMode, MAX_DP};
use crate::error::{DecimalError, DecimalResult};

impl Decimal {
    /// Round to `decimal_places` places after the point (negative targets a
    /// power of ten left of it), using the process-wide rounding mode.
    ///
    /// # Errors
    /// `InvalidPrecision` if `decimal_places` is outside
    /// `[-MAX_DP, MAX_DP]`.
    pub fn round(&self, decimal_places: i64) -> DecimalResult<Self> {
        self.round_with(decimal_places, Context::global().rounding)
    }

    /// Round to `decimal_places` places under an explicit mode.
    pub fn round_with(&self, decimal_places: i64, mode: RoundingMode) -> DecimalResult<Self> {
        if decimal_places < -i64::from(MAX_DP) || decimal_places > i64::from(MAX_DP) {
            return Err(DecimalError::InvalidPrecision);
        }
        let mut x = self.clone();
        round_sig(&mut x, decimal_places + self.exponent + 1, mode, false);
        Ok(x)
    }
}

/// Round `x` in place to `sig` significant digits.
///
/// `truncated` reports that more precision was discarded upstream (division
/// keeps only a guard digit of its remainder); it participates in the
/// half-even tie-break and in the always-up mode.
///
/// The sign is left untouched: a nonzero value rounded to nothing becomes a
/// signed zero, which the formatter decides how to show.
pub(crate) fn round_sig(x: &mut Decimal, sig: i64, mode: RoundingMode, truncated: bool) {
    let digits = &mut x.digits;

    if sig < 1 {
        // Everything is discarded; the result is zero or one unit at the
        // rounding position.
        let up = match mode {
            RoundingMode::Up => truncated || digits[0] != 0,
            RoundingMode::HalfUp if sig == 0 => digits[0] >= 5,
            RoundingMode::HalfEven if sig == 0 => {
                digits[0] > 5 || (digits[0] == 5 && (truncated || digits.len() > 1))
            },
            _ => false,
        };
        digits.clear();
        if up {
            x.exponent = x.exponent - sig + 1;
            digits.push(1);
        } else {
            x.exponent = 0;
            digits.push(0);
        }
    } else if (sig as usize) < digits.len() {
        let keep = sig as usize;
        // First discarded digit decides; the rest only matter for ties.
        let up = match mode {
            RoundingMode::Down => false,
            RoundingMode::HalfUp => digits[keep] >= 5,
            RoundingMode::HalfEven => {
                digits[keep] > 5
                    || (digits[keep] == 5
                        && (truncated || keep + 1 < digits.len() || digits[keep - 1] & 1 == 1))
            },
            // Discarded tails are never all-zero (no trailing zeros), so
            // away-from-zero always increments.
            RoundingMode::Up => true,
        };
        digits.truncate(keep);
        if up {
            let mut i = keep;
            loop {
                i -= 1;
                if digits[i] < 9 {
                    digits[i] += 1;
                    break;
                }
                digits[i] = 0;
                if i == 0 {
                    x.exponent += 1;
                    digits.insert(0, 1);
                    break;
                }
            }
        }
        while digits.last() == Some(&0) {
            digits.pop();
        }
    }
    // sig >= digit count: exact, nothing to do.
}
