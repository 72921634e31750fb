// ============================================================================
// Arithmetic Core
// Schoolbook digit algorithms: add, subtract, multiply, divide, modulo,
// power, square root
// ============================================================================

use super::{fmt, parse, round, Decimal, Sign};
use crate::context::{Context, RoundingMode, MAX_DP, MAX_POWER};
use crate::error::{DecimalError, DecimalResult};
use std::cmp::Ordering;
use std::ops::{Add, Mul, Neg, Sub};

// ============================================================================
// Comparison
// ============================================================================

impl Ord for Decimal {
    /// Sign first, then exponent, then digits front-to-back, then length;
    /// the ordering inverts when both operands are negative. Zeros compare
    /// equal whatever their sign bookkeeping says.
    fn cmp(&self, other: &Self) -> Ordering {
        let x_zero = self.is_zero();
        let y_zero = other.is_zero();
        if x_zero || y_zero {
            return if x_zero && y_zero {
                Ordering::Equal
            } else if x_zero {
                if other.sign == Sign::Negative { Ordering::Greater } else { Ordering::Less }
            } else if self.sign == Sign::Negative {
                Ordering::Less
            } else {
                Ordering::Greater
            };
        }
        if self.sign != other.sign {
            return if self.sign == Sign::Negative { Ordering::Less } else { Ordering::Greater };
        }
        let ord = cmp_magnitude(self, other);
        if self.sign == Sign::Negative { ord.reverse() } else { ord }
    }
}

fn cmp_magnitude(a: &Decimal, b: &Decimal) -> Ordering {
    match a.exponent.cmp(&b.exponent) {
        Ordering::Equal => {},
        ord => return ord,
    }
    for (da, db) in a.digits.iter().zip(&b.digits) {
        match da.cmp(db) {
            Ordering::Equal => {},
            ord => return ord,
        }
    }
    a.digits.len().cmp(&b.digits.len())
}

// ============================================================================
// Addition / Subtraction
// ============================================================================

impl Decimal {
    /// Exact sum.
    pub fn add(&self, other: &Self) -> Self {
        if self.sign != other.sign {
            return self.sub(&flipped(other));
        }
        if other.is_zero() {
            return if self.is_zero() { Self::zero() } else { self.clone() };
        }
        if self.is_zero() {
            return other.clone();
        }

        let (xc, yc, mut exponent) = align(self, other);
        let (mut xc, yc) = if xc.len() < yc.len() { (yc, xc) } else { (xc, yc) };

        // Front-aligned schoolbook addition; extra low-order digits of the
        // longer operand pass through untouched.
        let mut carry = 0u8;
        for i in (0..yc.len()).rev() {
            let sum = xc[i] + yc[i] + carry;
            xc[i] = sum % 10;
            carry = sum / 10;
        }
        if carry > 0 {
            xc.insert(0, carry);
            exponent += 1;
        }
        while xc.last() == Some(&0) {
            xc.pop();
        }

        Self { sign: self.sign, exponent, digits: xc.into() }
    }

    /// Exact difference.
    pub fn sub(&self, other: &Self) -> Self {
        if self.sign != other.sign {
            return self.add(&flipped(other));
        }
        if other.is_zero() {
            return if self.is_zero() { Self::zero() } else { self.clone() };
        }
        if self.is_zero() {
            return flipped(other);
        }

        let mut sign = self.sign;
        let (mut xc, mut yc, mut exponent) = align(self, other);

        // Decide which magnitude is larger; exponents already settled it
        // unless they were equal.
        let x_smaller = if self.exponent != other.exponent {
            self.exponent < other.exponent
        } else {
            let mut smaller = xc.len() < yc.len();
            for i in 0..xc.len().min(yc.len()) {
                if xc[i] != yc[i] {
                    smaller = xc[i] < yc[i];
                    break;
                }
            }
            smaller
        };
        if x_smaller {
            std::mem::swap(&mut xc, &mut yc);
            sign = sign.flip();
        }

        // xc now holds the larger magnitude; pad it so every digit of yc has
        // a counterpart, then subtract with borrow.
        while xc.len() < yc.len() {
            xc.push(0);
        }
        for j in (0..yc.len()).rev() {
            if xc[j] < yc[j] {
                let mut i = j;
                loop {
                    i -= 1;
                    if xc[i] == 0 {
                        xc[i] = 9;
                    } else {
                        xc[i] -= 1;
                        break;
                    }
                }
                xc[j] += 10;
            }
            xc[j] -= yc[j];
        }

        while xc.last() == Some(&0) {
            xc.pop();
        }
        while xc.first() == Some(&0) {
            xc.remove(0);
            exponent -= 1;
        }
        if xc.is_empty() {
            return Self::zero();
        }
        Self { sign, exponent, digits: xc.into() }
    }

    // ========================================================================
    // Multiplication
    // ========================================================================

    /// Exact product.
    pub fn mul(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }
        let sign = if self.sign == other.sign { Sign::Positive } else { Sign::Negative };
        let (xc, yc) = if self.digits.len() >= other.digits.len() {
            (&self.digits, &other.digits)
        } else {
            (&other.digits, &self.digits)
        };
        let a = xc.len();
        let b = yc.len();
        let mut exponent = self.exponent + other.exponent;

        let mut prod = vec![0u8; a + b];
        for i in (0..b).rev() {
            let mut carry = 0u8;
            for j in ((i + 1)..=(a + i)).rev() {
                let t = prod[j] + yc[i] * xc[j - i - 1] + carry;
                prod[j] = t % 10;
                carry = t / 10;
            }
            prod[i] = carry;
        }

        if prod[0] != 0 {
            exponent += 1;
        } else {
            prod.remove(0);
        }
        while prod.last() == Some(&0) {
            prod.pop();
        }
        Self { sign, exponent, digits: prod.into() }
    }

    // ========================================================================
    // Division
    // ========================================================================

    /// Quotient rounded to the process-wide `decimal_places` under the
    /// process-wide rounding mode.
    ///
    /// # Errors
    /// `DivisionByZero` on a zero divisor, `InvalidPrecision` when the
    /// configured decimal places exceed `MAX_DP`.
    pub fn div(&self, other: &Self) -> DecimalResult<Self> {
        self.div_with(other, &Context::global())
    }

    /// Quotient under an explicit context.
    pub fn div_with(&self, other: &Self, ctx: &Context) -> DecimalResult<Self> {
        if ctx.decimal_places > MAX_DP {
            return Err(DecimalError::InvalidPrecision);
        }
        self.div_unchecked(other, ctx.decimal_places, ctx.rounding)
    }

    /// Long division producing `decimal_places` plus one guard digit, then
    /// rounded. The remainder state feeds the rounding tie-break.
    fn div_unchecked(
        &self,
        other: &Self,
        decimal_places: u32,
        mode: RoundingMode,
    ) -> DecimalResult<Self> {
        if other.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        let sign = if self.sign == other.sign { Sign::Positive } else { Sign::Negative };
        if self.is_zero() {
            // The quotient keeps the combined sign even when it is zero.
            return Ok(Self { sign, exponent: 0, digits: smallvec::smallvec![0] });
        }

        let ad = &self.digits;
        let bd = &other.digits;
        let al = ad.len();
        let bl = bd.len();

        let mut exponent = self.exponent - other.exponent;
        let mut target = i64::from(decimal_places) + exponent + 1;
        let mut budget: u64 = if target < 0 { 0 } else { target as u64 };

        // Divisor prefixed with a zero, for subtracting from a remainder
        // that has grown one digit longer.
        let mut shifted = Vec::with_capacity(bl + 1);
        shifted.push(0u8);
        shifted.extend_from_slice(bd);

        let mut rem: Vec<u8> = Vec::with_capacity(bl + 1);
        rem.extend_from_slice(&ad[..al.min(bl)]);
        rem.resize(bl, 0);

        let mut quotient: Vec<u8> = Vec::new();
        let mut ai = bl;
        let mut rem_live = true;

        loop {
            // Trial digit: subtract the divisor until it no longer fits.
            let mut digit = 0u8;
            let fit = loop {
                let ord = cmp_digit_slices(bd, &rem);
                if ord != Ordering::Less {
                    break ord;
                }
                let bt: &[u8] = if rem.len() == bl { bd } else { &shifted };
                for j in (0..rem.len()).rev() {
                    if rem[j] < bt[j] {
                        let mut i = j;
                        loop {
                            i -= 1;
                            if rem[i] == 0 {
                                rem[i] = 9;
                            } else {
                                rem[i] -= 1;
                                break;
                            }
                        }
                        rem[j] += 10;
                    }
                    rem[j] -= bt[j];
                }
                while rem.first() == Some(&0) {
                    rem.remove(0);
                }
                digit += 1;
            };
            // An exact fit is one more subtraction that empties the
            // remainder.
            quotient.push(if fit == Ordering::Equal { digit + 1 } else { digit });

            // Extend the remainder with the next dividend digit, borrowing a
            // zero once the dividend is exhausted.
            let next = ad.get(ai).copied();
            if fit != Ordering::Equal && rem.first().is_some_and(|&d| d != 0) {
                rem.push(next.unwrap_or(0));
            } else {
                rem.clear();
                match next {
                    Some(d) => rem.push(d),
                    None => rem_live = false,
                }
            }

            let more_dividend = ai < al;
            ai += 1;
            if !((more_dividend || rem_live) && budget > 0) {
                break;
            }
            budget -= 1;
        }

        let produced = quotient.len() as i64;
        if quotient[0] == 0 && quotient.len() > 1 {
            quotient.remove(0);
            exponent -= 1;
            target -= 1;
        }

        let mut q = Self { sign, exponent, digits: quotient.into() };
        if produced > target {
            round::round_sig(&mut q, target, mode, rem_live);
        }
        Ok(q)
    }

    // ========================================================================
    // Modulo
    // ========================================================================

    /// Remainder of truncating division, with the sign of `self`.
    ///
    /// # Errors
    /// `DivisionByZero` on a zero modulus.
    pub fn rem(&self, other: &Self) -> DecimalResult<Self> {
        self.rem_with(other, &Context::global())
    }

    /// Remainder under an explicit context.
    pub fn rem_with(&self, other: &Self, ctx: &Context) -> DecimalResult<Self> {
        if other.is_zero() {
            return Err(DecimalError::DivisionByZero);
        }
        if other.abs() > self.abs() {
            return Ok(self.clone());
        }
        let trunc = Context {
            decimal_places: 0,
            rounding: RoundingMode::Down,
            ..*ctx
        };
        let q = self.div_with(other, &trunc)?;
        Ok(self.sub(&q.mul(other)))
    }

    // ========================================================================
    // Power
    // ========================================================================

    /// Raise to an integer power by repeated squaring. Non-negative powers
    /// are exact; negative powers take the reciprocal at the process-wide
    /// precision.
    ///
    /// # Errors
    /// `InvalidExponent` outside `[-MAX_POWER, MAX_POWER]`; `DivisionByZero`
    /// for a negative power of zero.
    pub fn pow(&self, n: i32) -> DecimalResult<Self> {
        self.pow_with(n, &Context::global())
    }

    /// Integer power under an explicit context.
    pub fn pow_with(&self, n: i32, ctx: &Context) -> DecimalResult<Self> {
        if !(-MAX_POWER..=MAX_POWER).contains(&n) {
            return Err(DecimalError::InvalidExponent);
        }
        let negative = n < 0;
        let mut n = n.unsigned_abs();
        let mut base = self.clone();
        let mut acc = Self::one();
        loop {
            if n & 1 == 1 {
                acc = acc.mul(&base);
            }
            n >>= 1;
            if n == 0 {
                break;
            }
            base = base.mul(&base);
        }
        if negative {
            Self::one().div_with(&acc, ctx)
        } else {
            Ok(acc)
        }
    }

    // ========================================================================
    // Square Root
    // ========================================================================

    /// Square root via Newton-Raphson from a native-float seed, rounded to
    /// the process-wide `decimal_places`.
    ///
    /// # Errors
    /// `NoSquareRoot` for negative values.
    pub fn sqrt(&self) -> DecimalResult<Self> {
        self.sqrt_with(&Context::global())
    }

    /// Square root under an explicit context.
    pub fn sqrt_with(&self, ctx: &Context) -> DecimalResult<Self> {
        if ctx.decimal_places > MAX_DP {
            return Err(DecimalError::InvalidPrecision);
        }
        if self.is_zero() {
            return Ok(self.clone());
        }
        if self.sign == Sign::Negative {
            return Err(DecimalError::NoSquareRoot);
        }

        let mut r = self.sqrt_seed()?;

        // Iterate with four guard digits beyond the requested precision
        // until two successive iterates agree on the leading digits.
        let working_dp = ctx.decimal_places + 4;
        let agreement = r.exponent + i64::from(working_dp);
        let half = Self { sign: Sign::Positive, exponent: -1, digits: smallvec::smallvec![5] };
        let mut iterations = 0u32;
        loop {
            iterations += 1;
            let t = r.clone();
            let q = self.div_unchecked(&t, working_dp, ctx.rounding)?;
            r = half.mul(&t.add(&q));
            if leading_digits(&t, agreement) == leading_digits(&r, agreement) {
                break;
            }
        }
        tracing::trace!(iterations, "sqrt converged");

        let sig = i64::from(ctx.decimal_places) + r.exponent + 1;
        round::round_sig(&mut r, sig, ctx.rounding, false);
        Ok(r)
    }

    /// Initial estimate from the native float form; when that form under- or
    /// overflows, rebuild the seed from the digit string with the exponent
    /// halved by hand (parity-adjusted so the digit count is odd).
    fn sqrt_seed(&self) -> DecimalResult<Self> {
        let seed = fmt::stringify(self, true, true)
            .parse::<f64>()
            .unwrap_or(0.0)
            .sqrt();
        if seed != 0.0 && seed.is_finite() {
            return parse::parse_str(&parse::f64_literal(seed));
        }

        let mut c: String = self.digits.iter().map(|d| char::from(b'0' + d)).collect();
        if (c.len() as i64 + self.exponent) & 1 == 0 {
            c.push('0');
        }
        let s = c.parse::<f64>().unwrap_or(f64::INFINITY).sqrt();
        let e = (self.exponent + 1) / 2
            - i64::from(self.exponent < 0 || self.exponent & 1 == 1);
        let literal = if s.is_infinite() {
            format!("5e{e}")
        } else {
            let exp_form = format!("{s:e}");
            let mantissa = &exp_form[..exp_form.find('e').unwrap_or(exp_form.len())];
            format!("{mantissa}e{e}")
        };
        parse::parse_str(&literal)
    }
}

// ============================================================================
// Internal helpers
// ============================================================================

/// Sign-flipped copy, including zero (internal dispatch only; the public
/// `negate` keeps zero canonical).
fn flipped(d: &Decimal) -> Decimal {
    Decimal {
        sign: d.sign.flip(),
        exponent: d.exponent,
        digits: d.digits.clone(),
    }
}

/// Copy both coefficients onto a common digit-position grid by prepending
/// zeros to the operand with the smaller exponent. Returns the aligned
/// buffers and the shared exponent of the leading position.
fn align(x: &Decimal, y: &Decimal) -> (Vec<u8>, Vec<u8>, i64) {
    let mut xc = x.digits.to_vec();
    let mut yc = y.digits.to_vec();
    let exponent = x.exponent.max(y.exponent);
    if x.exponent > y.exponent {
        prepend_zeros(&mut yc, (x.exponent - y.exponent) as usize);
    } else if y.exponent > x.exponent {
        prepend_zeros(&mut xc, (y.exponent - x.exponent) as usize);
    }
    (xc, yc, exponent)
}

fn prepend_zeros(v: &mut Vec<u8>, n: usize) {
    let mut padded = vec![0u8; n];
    padded.extend_from_slice(v);
    *v = padded;
}

/// Compare two digit slices as integers; neither has leading zeros, so the
/// longer one is larger.
fn cmp_digit_slices(a: &[u8], b: &[u8]) -> Ordering {
    if a.len() != b.len() {
        return a.len().cmp(&b.len());
    }
    for (da, db) in a.iter().zip(b) {
        match da.cmp(db) {
            Ordering::Equal => {},
            ord => return ord,
        }
    }
    Ordering::Equal
}

/// The first `count` digits (clamped); a negative count drops that many
/// digits from the tail instead.
fn leading_digits(d: &Decimal, count: i64) -> &[u8] {
    let len = d.digits.len() as i64;
    let end = if count < 0 { (len + count).max(0) } else { count.min(len) };
    &d.digits[..end as usize]
}

// ============================================================================
// Operator sugar
// ============================================================================
// Add/Sub/Mul are exact and infallible, so plain operators are safe; divide
// needs a context and stays method-only.

impl Neg for Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        self.negate()
    }
}

impl Neg for &Decimal {
    type Output = Decimal;

    #[inline]
    fn neg(self) -> Decimal {
        self.negate()
    }
}

// Reference-only impls: a by-value impl would sit earlier in the method
// probe order and capture `x.add(&y)` calls on owned receivers, which the
// inherent borrowing methods are meant to serve.
macro_rules! forward_binop {
    ($trait:ident, $method:ident, $inherent:ident) => {
        impl $trait<&Decimal> for &Decimal {
            type Output = Decimal;

            #[inline]
            fn $method(self, rhs: &Decimal) -> Decimal {
                Decimal::$inherent(self, rhs)
            }
        }
    };
}

forward_binop!(Add, add, add);
forward_binop!(Sub, sub, sub);
forward_binop!(Mul, mul, mul);

#[cfg(test)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn ctx(dp: u32, rounding: RoundingMode) -> Context {
        Context { decimal_places: dp, rounding, ..Context::DEFAULT }
    }

    #[test]
    fn test_compare() {
        assert!(dec("2") > dec("1.999"));
        assert!(dec("-2") < dec("-1.999"));
        assert!(dec("-1") < dec("1"));
        assert!(dec("0.001") > dec("0.0009999"));
        assert_eq!(dec("1.230"), dec("1.23"));
        assert_eq!(dec("0"), dec("-0"));
        assert!(dec("0") > dec("-0.5"));
        assert!(dec("0") < dec("0.5"));
        assert!(dec("12") < dec("1.9e1"));
        assert!(dec("21") > dec("1.9e1"));
    }

    #[test]
    fn test_add() {
        assert_eq!(dec("1.2").add(&dec("0.003")), dec("1.203"));
        assert_eq!(dec("0.5").add(&dec("0.5")), dec("1"));
        assert_eq!(dec("999").add(&dec("1")), dec("1000"));
        assert_eq!(dec("5").add(&dec("-3")), dec("2"));
        assert_eq!(dec("-5").add(&dec("3")), dec("-2"));
        assert_eq!(dec("-5").add(&dec("-3")), dec("-8"));
        assert_eq!(dec("7.25").add(&Decimal::zero()), dec("7.25"));
    }

    #[test]
    fn test_sub() {
        assert_eq!(dec("1.2").sub(&dec("0.003")), dec("1.197"));
        assert_eq!(dec("0.003").sub(&dec("1.2")), dec("-1.197"));
        assert_eq!(dec("3").sub(&dec("5")), dec("-2"));
        assert_eq!(dec("-3").sub(&dec("-5")), dec("2"));
        assert_eq!(dec("123.456").sub(&dec("1")), dec("122.456"));
        assert_eq!(dec("1e10").sub(&dec("1")), dec("9999999999"));
    }

    #[test]
    fn test_sub_equal_is_positive_zero() {
        for s in ["1.2", "-1.2", "0", "4e-7", "-123456.789"] {
            let x = dec(s);
            let z = x.sub(&x);
            assert!(z.is_zero(), "{s}");
            assert_eq!(z.sign, Sign::Positive, "{s}");
            assert_eq!(z.exponent(), 0, "{s}");
        }
    }

    #[test]
    fn test_mul() {
        assert_eq!(dec("12").mul(&dec("34")), dec("408"));
        assert_eq!(dec("0.5").mul(&dec("0.5")), dec("0.25"));
        assert_eq!(dec("-3").mul(&dec("4")), dec("-12"));
        assert_eq!(dec("-3").mul(&dec("-4")), dec("12"));
        assert_eq!(dec("9999").mul(&dec("9999")), dec("99980001"));
        assert_eq!(dec("1.5").mul(&dec("2")), dec("3"));
        let z = dec("-5").mul(&Decimal::zero());
        assert!(z.is_zero());
        assert_eq!(z.sign, Sign::Positive);
    }

    #[test]
    fn test_div_basics() {
        let c = ctx(20, RoundingMode::HalfUp);
        assert_eq!(dec("10").div_with(&dec("2"), &c).unwrap(), dec("5"));
        assert_eq!(dec("100").div_with(&dec("4"), &c).unwrap(), dec("25"));
        assert_eq!(dec("1").div_with(&dec("8"), &c).unwrap(), dec("0.125"));
        assert_eq!(dec("-6").div_with(&dec("3"), &c).unwrap(), dec("-2"));
        assert_eq!(dec("-6").div_with(&dec("-3"), &c).unwrap(), dec("2"));
    }

    #[test]
    fn test_div_rounds_to_decimal_places() {
        let c = ctx(5, RoundingMode::HalfUp);
        let q = dec("1").div_with(&dec("3"), &c).unwrap();
        assert_eq!(q, dec("0.33333"));
        let q = dec("2").div_with(&dec("3"), &c).unwrap();
        assert_eq!(q, dec("0.66667"));
        let q = dec("2").div_with(&dec("3"), &ctx(0, RoundingMode::HalfUp)).unwrap();
        assert_eq!(q, dec("1"));
    }

    #[test]
    fn test_div_remainder_feeds_tie_break() {
        // 1/16 = 0.0625 exactly; the guard digit alone cannot distinguish a
        // clean tie from a truncated tail.
        assert_eq!(
            dec("1").div_with(&dec("16"), &ctx(3, RoundingMode::HalfEven)).unwrap(),
            dec("0.062")
        );
        assert_eq!(
            dec("1").div_with(&dec("16"), &ctx(3, RoundingMode::HalfUp)).unwrap(),
            dec("0.063")
        );
        assert_eq!(
            dec("1").div_with(&dec("16"), &ctx(3, RoundingMode::Down)).unwrap(),
            dec("0.062")
        );
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(
            dec("1").div_with(&dec("0"), &Context::DEFAULT),
            Err(DecimalError::DivisionByZero)
        );
    }

    #[test]
    fn test_div_zero_dividend_keeps_sign() {
        let q = dec("0").div_with(&dec("-5"), &Context::DEFAULT).unwrap();
        assert!(q.is_zero());
        assert_eq!(q.sign, Sign::Negative);
        let q = dec("0").div_with(&dec("5"), &Context::DEFAULT).unwrap();
        assert_eq!(q.sign, Sign::Positive);
    }

    #[test]
    fn test_div_precision_bound() {
        let c = ctx(MAX_DP + 1, RoundingMode::HalfUp);
        assert_eq!(
            dec("1").div_with(&dec("3"), &c),
            Err(DecimalError::InvalidPrecision)
        );
    }

    #[test]
    fn test_rem() {
        let c = Context::DEFAULT;
        assert_eq!(dec("10").rem_with(&dec("3"), &c).unwrap(), dec("1"));
        assert_eq!(dec("-10").rem_with(&dec("3"), &c).unwrap(), dec("-1"));
        assert_eq!(dec("10").rem_with(&dec("-3"), &c).unwrap(), dec("1"));
        assert_eq!(dec("5.5").rem_with(&dec("2"), &c).unwrap(), dec("1.5"));
        // |modulus| > |value|: value passes through
        assert_eq!(dec("3").rem_with(&dec("10"), &c).unwrap(), dec("3"));
        assert_eq!(
            dec("1").rem_with(&dec("0"), &c),
            Err(DecimalError::DivisionByZero)
        );
    }

    #[test]
    fn test_pow() {
        let c = Context::DEFAULT;
        assert_eq!(dec("2").pow_with(10, &c).unwrap(), dec("1024"));
        assert_eq!(dec("-2").pow_with(3, &c).unwrap(), dec("-8"));
        assert_eq!(dec("-2").pow_with(4, &c).unwrap(), dec("16"));
        assert_eq!(dec("7").pow_with(0, &c).unwrap(), dec("1"));
        assert_eq!(dec("0").pow_with(0, &c).unwrap(), dec("1"));
        assert_eq!(dec("1.5").pow_with(2, &c).unwrap(), dec("2.25"));
        assert_eq!(dec("2").pow_with(-2, &c).unwrap(), dec("0.25"));
    }

    #[test]
    fn test_pow_bounds() {
        assert_eq!(
            dec("2").pow_with(1_000_001, &Context::DEFAULT),
            Err(DecimalError::InvalidExponent)
        );
        assert_eq!(
            dec("2").pow_with(-1_000_001, &Context::DEFAULT),
            Err(DecimalError::InvalidExponent)
        );
        assert_eq!(
            dec("0").pow_with(-1, &Context::DEFAULT),
            Err(DecimalError::DivisionByZero)
        );
    }

    #[test]
    fn test_sqrt_exact() {
        let c = Context::DEFAULT;
        assert_eq!(dec("4").sqrt_with(&c).unwrap(), dec("2"));
        assert_eq!(dec("100").sqrt_with(&c).unwrap(), dec("10"));
        assert_eq!(dec("0.0001").sqrt_with(&c).unwrap(), dec("0.01"));
        assert_eq!(dec("2.25").sqrt_with(&c).unwrap(), dec("1.5"));
        assert!(dec("0").sqrt_with(&c).unwrap().is_zero());
    }

    #[test]
    fn test_sqrt_rounded() {
        let c = ctx(10, RoundingMode::HalfUp);
        assert_eq!(dec("2").sqrt_with(&c).unwrap(), dec("1.4142135624"));
        let c = ctx(10, RoundingMode::Down);
        assert_eq!(dec("2").sqrt_with(&c).unwrap(), dec("1.4142135623"));
    }

    #[test]
    fn test_sqrt_negative() {
        assert_eq!(
            dec("-1").sqrt_with(&Context::DEFAULT),
            Err(DecimalError::NoSquareRoot)
        );
    }

    #[test]
    fn test_sqrt_outside_float_range() {
        let c = Context::DEFAULT;
        assert_eq!(dec("1e400").sqrt_with(&c).unwrap(), dec("1e200"));
        assert_eq!(dec("2.5e399").sqrt_with(&c).unwrap(), dec("5e199"));
        // 1e-200 only survives at a precision that can represent it; at the
        // default 20 decimal places it rounds to zero.
        let wide = ctx(400, RoundingMode::HalfUp);
        assert_eq!(dec("1e-400").sqrt_with(&wide).unwrap(), dec("1e-200"));
        assert!(dec("1e-400").sqrt_with(&c).unwrap().is_zero());
    }

    #[test]
    fn test_operators() {
        let a = dec("1.5");
        let b = dec("0.5");
        assert_eq!(&a + &b, dec("2"));
        assert_eq!(&a - &b, dec("1"));
        assert_eq!(&a * &b, dec("0.75"));
        assert_eq!(-&a, dec("-1.5"));
        assert_eq!(-a.clone(), dec("-1.5"));
        // Owned receivers still resolve to the borrowing inherent methods.
        assert_eq!(a.add(&a), dec("3"));
        assert_eq!(a.sub(&a), Decimal::zero());
        assert_eq!(a.mul(&a), dec("2.25"));
    }
}
