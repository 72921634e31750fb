// ============================================================================
// String Conversion
// Plain and exponential rendering, fixed/precision forms, native-float
// conversion
// ============================================================================

use super::{round, Decimal, Sign};
use crate::context::{Context, MAX_DP};
use crate::error::{DecimalError, DecimalResult};
use std::fmt;

/// Render the digit array in plain or exponential notation. `show_sign`
/// controls whether a negative value carries its minus sign; callers
/// suppress it for zero except where the signed zero is observable.
pub(crate) fn stringify(x: &Decimal, exponential: bool, show_sign: bool) -> String {
    let digits: String = x.digits.iter().map(|d| char::from(b'0' + d)).collect();
    let n = digits.len();
    let e = x.exponent;

    let mut s = if exponential {
        let mut t = String::with_capacity(n + 6);
        t.push_str(&digits[..1]);
        if n > 1 {
            t.push('.');
            t.push_str(&digits[1..]);
        }
        if e < 0 {
            t.push_str(&format!("e{e}"));
        } else {
            t.push_str(&format!("e+{e}"));
        }
        t
    } else if e < 0 {
        let zeros = (-e - 1) as usize;
        let mut t = String::with_capacity(n + zeros + 2);
        t.push_str("0.");
        for _ in 0..zeros {
            t.push('0');
        }
        t.push_str(&digits);
        t
    } else {
        let ip = (e + 1) as usize;
        let mut t = digits;
        if ip < n {
            t.insert(ip, '.');
        } else {
            for _ in n..ip {
                t.push('0');
            }
        }
        t
    };

    if x.sign == Sign::Negative && show_sign {
        s.insert(0, '-');
    }
    s
}

impl Decimal {
    /// Render under an explicit context: exponential notation outside the
    /// `(neg_exp, pos_exp)` exponent window, plain inside it. Zero is always
    /// unsigned here.
    pub fn to_string_with(&self, ctx: &Context) -> String {
        let e = self.exponent;
        stringify(
            self,
            e <= ctx.neg_exp || e >= ctx.pos_exp,
            !self.is_zero(),
        )
    }

    // ========================================================================
    // toExponential
    // ========================================================================

    /// Exponential notation, rounded to `dp` decimal places of the mantissa
    /// when given, full precision otherwise.
    ///
    /// # Errors
    /// `InvalidPrecision` when `dp` exceeds `MAX_DP`.
    pub fn to_exponential(&self, dp: Option<u32>) -> DecimalResult<String> {
        self.to_exponential_with(dp, &Context::global())
    }

    pub fn to_exponential_with(&self, dp: Option<u32>, ctx: &Context) -> DecimalResult<String> {
        let mut x = self.clone();
        let nonzero = !self.is_zero();
        if let Some(dp) = dp {
            if dp > MAX_DP {
                return Err(DecimalError::InvalidPrecision);
            }
            round::round_sig(&mut x, i64::from(dp) + 1, ctx.rounding, false);
            pad_digits(&mut x, dp as usize + 1);
        }
        Ok(stringify(&x, true, nonzero))
    }

    // ========================================================================
    // toFixed
    // ========================================================================

    /// Plain notation with exactly `dp` decimal places when given, the plain
    /// rendering of the full value otherwise. A value that rounds to zero
    /// keeps its sign when the value itself was nonzero.
    ///
    /// # Errors
    /// `InvalidPrecision` when `dp` exceeds `MAX_DP`.
    pub fn to_fixed(&self, dp: Option<u32>) -> DecimalResult<String> {
        self.to_fixed_with(dp, &Context::global())
    }

    pub fn to_fixed_with(&self, dp: Option<u32>, ctx: &Context) -> DecimalResult<String> {
        let mut x = self.clone();
        let nonzero = !self.is_zero();
        if let Some(dp) = dp {
            if dp > MAX_DP {
                return Err(DecimalError::InvalidPrecision);
            }
            let sig = i64::from(dp) + x.exponent + 1;
            round::round_sig(&mut x, sig, ctx.rounding, false);
            // Post-round exponent: zero-fill out to exactly dp decimals.
            let width = i64::from(dp) + x.exponent + 1;
            pad_digits(&mut x, width.max(1) as usize);
        }
        Ok(stringify(&x, false, nonzero))
    }

    // ========================================================================
    // toPrecision
    // ========================================================================

    /// Rounded to `sd` significant digits when given, zero-filled out to
    /// `sd`. Uses exponential notation when the integer part would exceed
    /// the requested digits or the exponent leaves the context's plain
    /// window.
    ///
    /// # Errors
    /// `InvalidPrecision` when `sd` is zero or exceeds `MAX_DP`.
    pub fn to_precision(&self, sd: Option<u32>) -> DecimalResult<String> {
        self.to_precision_with(sd, &Context::global())
    }

    pub fn to_precision_with(&self, sd: Option<u32>, ctx: &Context) -> DecimalResult<String> {
        let mut x = self.clone();
        let nonzero = !self.is_zero();
        if let Some(sd) = sd {
            if sd == 0 || sd > MAX_DP {
                return Err(DecimalError::InvalidPrecision);
            }
            round::round_sig(&mut x, i64::from(sd), ctx.rounding, false);
            pad_digits(&mut x, sd as usize);
        }
        let e = x.exponent;
        let exponential = sd.is_some_and(|sd| i64::from(sd) <= e)
            || e <= ctx.neg_exp
            || e >= ctx.pos_exp;
        Ok(stringify(&x, exponential, nonzero))
    }

    // ========================================================================
    // Native float conversion
    // ========================================================================

    /// Nearest `f64`; values beyond its range become infinities. In strict
    /// mode a conversion that cannot be read back exactly is rejected.
    ///
    /// # Errors
    /// `ImpreciseConversion` in strict mode when the value does not survive
    /// the round trip.
    pub fn to_f64(&self) -> DecimalResult<f64> {
        self.to_f64_with(&Context::global())
    }

    pub fn to_f64_with(&self, ctx: &Context) -> DecimalResult<f64> {
        let n = stringify(self, true, true).parse::<f64>().unwrap_or(f64::NAN);
        if ctx.strict {
            let exact = n.is_finite()
                && match super::parse::parse_str(&super::parse::f64_literal(n)) {
                    Ok(back) => back == *self,
                    Err(_) => false,
                };
            if !exact {
                return Err(DecimalError::ImpreciseConversion);
            }
        }
        Ok(n)
    }

    /// Primitive string form: like `Display` but a negative zero keeps its
    /// minus sign.
    ///
    /// # Errors
    /// `ValueOfDisallowed` in strict mode.
    pub fn value_of(&self) -> DecimalResult<String> {
        self.value_of_with(&Context::global())
    }

    pub fn value_of_with(&self, ctx: &Context) -> DecimalResult<String> {
        if ctx.strict {
            return Err(DecimalError::ValueOfDisallowed);
        }
        let e = self.exponent;
        Ok(stringify(
            self,
            e <= ctx.neg_exp || e >= ctx.pos_exp,
            true,
        ))
    }
}

/// Zero-fill the digit array out to `width` for fixed-width rendering.
fn pad_digits(x: &mut Decimal, width: usize) {
    while x.digits.len() < width {
        x.digits.push(0);
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with(&Context::global()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::RoundingMode;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_display_window() {
        let c = Context::DEFAULT;
        assert_eq!(dec("0.000001").to_string_with(&c), "0.000001");
        assert_eq!(dec("0.0000001").to_string_with(&c), "1e-7");
        assert_eq!(dec("1e20").to_string_with(&c), "100000000000000000000");
        assert_eq!(dec("1e21").to_string_with(&c), "1e+21");
        assert_eq!(dec("-12.345").to_string_with(&c), "-12.345");
        assert_eq!(dec("0").to_string_with(&c), "0");
    }

    #[test]
    fn test_display_custom_window() {
        let c = Context { neg_exp: -3, pos_exp: 3, ..Context::DEFAULT };
        assert_eq!(dec("0.001").to_string_with(&c), "1e-3");
        assert_eq!(dec("0.01").to_string_with(&c), "0.01");
        assert_eq!(dec("999").to_string_with(&c), "999");
        assert_eq!(dec("1000").to_string_with(&c), "1e+3");
    }

    #[test]
    fn test_display_suppresses_zero_sign() {
        let z = dec("-0.4").round_with(0, RoundingMode::Down).unwrap();
        assert!(z.is_zero());
        assert_eq!(z.to_string_with(&Context::DEFAULT), "0");
    }

    #[test]
    fn test_to_exponential() {
        let c = Context::DEFAULT;
        assert_eq!(dec("45.6").to_exponential_with(None, &c).unwrap(), "4.56e+1");
        assert_eq!(dec("45.6").to_exponential_with(Some(1), &c).unwrap(), "4.6e+1");
        assert_eq!(dec("45.6").to_exponential_with(Some(4), &c).unwrap(), "4.5600e+1");
        assert_eq!(dec("0.000123").to_exponential_with(None, &c).unwrap(), "1.23e-4");
        assert_eq!(dec("0").to_exponential_with(Some(2), &c).unwrap(), "0.00e+0");
        assert_eq!(dec("-45.6").to_exponential_with(Some(0), &c).unwrap(), "-5e+1");
    }

    #[test]
    fn test_to_fixed() {
        let c = Context::DEFAULT;
        assert_eq!(dec("45.6").to_fixed_with(None, &c).unwrap(), "45.6");
        assert_eq!(dec("45.6").to_fixed_with(Some(0), &c).unwrap(), "46");
        assert_eq!(dec("45.6").to_fixed_with(Some(3), &c).unwrap(), "45.600");
        assert_eq!(dec("2.675").to_fixed_with(Some(2), &c).unwrap(), "2.68");
        assert_eq!(dec("1.005").to_fixed_with(Some(2), &c).unwrap(), "1.01");
        assert_eq!(dec("1").to_fixed_with(Some(3), &c).unwrap(), "1.000");
        assert_eq!(dec("0").to_fixed_with(Some(2), &c).unwrap(), "0.00");
        // dp of None never switches to exponential notation
        assert_eq!(
            dec("1e21").to_fixed_with(None, &c).unwrap(),
            "1000000000000000000000"
        );
    }

    #[test]
    fn test_to_fixed_signed_zero() {
        let c = Context::DEFAULT;
        assert_eq!(dec("-0.001").to_fixed_with(Some(0), &c).unwrap(), "-0");
        assert_eq!(dec("-0.001").to_fixed_with(Some(1), &c).unwrap(), "-0.0");
        assert_eq!(dec("0").to_fixed_with(Some(0), &c).unwrap(), "0");
    }

    #[test]
    fn test_to_precision() {
        let c = Context::DEFAULT;
        assert_eq!(dec("45.6").to_precision_with(Some(2), &c).unwrap(), "46");
        assert_eq!(dec("45.6").to_precision_with(Some(1), &c).unwrap(), "5e+1");
        assert_eq!(dec("45.6").to_precision_with(Some(5), &c).unwrap(), "45.600");
        assert_eq!(dec("0.000023").to_precision_with(Some(1), &c).unwrap(), "0.00002");
        // Fewer significant digits than integer digits forces exponential.
        assert_eq!(dec("12345").to_precision_with(Some(2), &c).unwrap(), "1.2e+4");
        assert_eq!(dec("12345").to_precision_with(Some(5), &c).unwrap(), "12345");
        assert_eq!(dec("1").to_precision_with(Some(5), &c).unwrap(), "1.0000");
        assert_eq!(dec("45.6").to_precision_with(None, &c).unwrap(), "45.6");
    }

    #[test]
    fn test_precision_bounds() {
        let c = Context::DEFAULT;
        assert_eq!(
            dec("1").to_precision_with(Some(0), &c),
            Err(DecimalError::InvalidPrecision)
        );
        assert_eq!(
            dec("1").to_precision_with(Some(MAX_DP + 1), &c),
            Err(DecimalError::InvalidPrecision)
        );
        assert_eq!(
            dec("1").to_fixed_with(Some(MAX_DP + 1), &c),
            Err(DecimalError::InvalidPrecision)
        );
        assert_eq!(
            dec("1").to_exponential_with(Some(MAX_DP + 1), &c),
            Err(DecimalError::InvalidPrecision)
        );
    }

    #[test]
    fn test_to_f64() {
        let c = Context::DEFAULT;
        assert_eq!(dec("0.5").to_f64_with(&c).unwrap(), 0.5);
        assert_eq!(dec("-4").to_f64_with(&c).unwrap(), -4.0);
        assert_eq!(dec("1e400").to_f64_with(&c).unwrap(), f64::INFINITY);
        assert_eq!(dec("-1e400").to_f64_with(&c).unwrap(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_to_f64_strict() {
        let strict = Context { strict: true, ..Context::DEFAULT };
        assert_eq!(dec("0.5").to_f64_with(&strict).unwrap(), 0.5);
        assert_eq!(dec("0.1").to_f64_with(&strict).unwrap(), 0.1);
        assert_eq!(
            dec("0.123456789012345678").to_f64_with(&strict),
            Err(DecimalError::ImpreciseConversion)
        );
        assert_eq!(
            dec("1e400").to_f64_with(&strict),
            Err(DecimalError::ImpreciseConversion)
        );
    }

    #[test]
    fn test_value_of() {
        let c = Context::DEFAULT;
        assert_eq!(dec("-12.5").value_of_with(&c).unwrap(), "-12.5");
        let neg_zero = dec("-0.4").round_with(0, RoundingMode::Down).unwrap();
        assert_eq!(neg_zero.value_of_with(&c).unwrap(), "-0");
        let strict = Context { strict: true, ..Context::DEFAULT };
        assert_eq!(
            dec("1").value_of_with(&strict),
            Err(DecimalError::ValueOfDisallowed)
        );
    }
}
