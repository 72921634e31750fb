// ============================================================================
// Decimal Value
// Sign / exponent / digit-sequence representation of an exact decimal
// ============================================================================
//
// This module provides:
// - Decimal: the immutable arbitrary-precision decimal value
// - parse: string and native-float construction
// - arith: add/sub/mul/div/rem/pow/sqrt digit algorithms
// - round: the rounding engine
// - fmt: textual rendering and float conversion
//
// Design principles:
// - No floating-point arithmetic in any exact code path
// - Fallible operations return Result (no panics)
// - Every operation builds a fresh value; inputs are never mutated

mod arith;
mod fmt;
mod parse;
mod round;

use crate::context::Context;
use crate::error::DecimalResult;
use smallvec::SmallVec;
use std::fmt as std_fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Coefficient storage; values short enough for money and measurements stay
/// on the stack.
pub(crate) type DigitVec = SmallVec<[u8; 16]>;

/// Sign of a decimal value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Sign {
    Positive,
    Negative,
}

impl Sign {
    pub(crate) fn flip(self) -> Self {
        match self {
            Sign::Positive => Sign::Negative,
            Sign::Negative => Sign::Positive,
        }
    }
}

/// Arbitrary-precision decimal number.
///
/// Stores `sign × d0.d1d2… × 10^exponent` as a sign, a signed exponent and a
/// most-significant-first digit sequence with no leading or trailing zeros.
/// Zero is the single digit `0` with exponent `0`.
///
/// Add, subtract, multiply and compare are always exact. Divide, modulo,
/// negative powers and square roots round to the decimal places configured
/// in a [`Context`] (the process-wide default, or an explicit instance via
/// the `*_with` variants).
///
/// # Example
/// ```
/// use bigdec::prelude::*;
///
/// let price: Decimal = "1.2".parse().unwrap();
/// let fee: Decimal = "0.003".parse().unwrap();
/// assert_eq!(price.add(&fee), "1.203".parse().unwrap());
/// ```
#[derive(Clone)]
pub struct Decimal {
    pub(crate) sign: Sign,
    pub(crate) exponent: i64,
    pub(crate) digits: DigitVec,
}

impl Decimal {
    // ========================================================================
    // Construction
    // ========================================================================

    /// The canonical zero.
    pub fn zero() -> Self {
        Self {
            sign: Sign::Positive,
            exponent: 0,
            digits: smallvec::smallvec![0],
        }
    }

    /// The value one.
    pub fn one() -> Self {
        Self {
            sign: Sign::Positive,
            exponent: 0,
            digits: smallvec::smallvec![1],
        }
    }

    /// Create from an integer value, exactly.
    pub fn from_integer(value: i64) -> Self {
        if value == 0 {
            return Self::zero();
        }
        let sign = if value < 0 { Sign::Negative } else { Sign::Positive };
        let mut digits = DigitVec::new();
        let mut v = value.unsigned_abs();
        while v > 0 {
            digits.push((v % 10) as u8);
            v /= 10;
        }
        digits.reverse();
        let exponent = digits.len() as i64 - 1;
        while digits.last() == Some(&0) {
            digits.pop();
        }
        Self { sign, exponent, digits }
    }

    /// Create from a native floating-point number via its shortest decimal
    /// form, using the process-wide context for the strict-mode check.
    ///
    /// # Errors
    /// `InvalidValue` in strict mode; `InvalidNumber` for NaN or infinities.
    pub fn from_f64(value: f64) -> DecimalResult<Self> {
        Self::from_f64_with(value, &Context::global())
    }

    /// Create from a native floating-point number under an explicit context.
    pub fn from_f64_with(value: f64, ctx: &Context) -> DecimalResult<Self> {
        if ctx.strict {
            return Err(crate::error::DecimalError::InvalidValue);
        }
        parse::parse_str(&parse::f64_literal(value))
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Check if the value is zero (regardless of sign bookkeeping).
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.digits[0] == 0
    }

    /// Check if the value is strictly positive.
    #[inline]
    pub fn is_positive(&self) -> bool {
        self.sign == Sign::Positive && !self.is_zero()
    }

    /// Check if the value is strictly negative.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative && !self.is_zero()
    }

    /// Power-of-ten position of the most significant digit.
    #[inline]
    pub fn exponent(&self) -> i64 {
        self.exponent
    }

    /// Get the absolute value.
    pub fn abs(&self) -> Self {
        Self {
            sign: Sign::Positive,
            exponent: self.exponent,
            digits: self.digits.clone(),
        }
    }

    /// Get the additive inverse. Zero stays canonical.
    pub fn negate(&self) -> Self {
        let sign = if self.is_zero() { self.sign } else { self.sign.flip() };
        Self {
            sign,
            exponent: self.exponent,
            digits: self.digits.clone(),
        }
    }
}

// ============================================================================
// Trait Implementations
// ============================================================================

impl Default for Decimal {
    #[inline]
    fn default() -> Self {
        Self::zero()
    }
}

impl FromStr for Decimal {
    type Err = crate::error::DecimalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse::parse_str(s)
    }
}

impl From<i64> for Decimal {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl From<i32> for Decimal {
    fn from(value: i32) -> Self {
        Self::from_integer(i64::from(value))
    }
}

impl TryFrom<f64> for Decimal {
    type Error = crate::error::DecimalError;

    fn try_from(value: f64) -> DecimalResult<Self> {
        Self::from_f64(value)
    }
}

impl PartialEq for Decimal {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Decimal {}

impl PartialOrd for Decimal {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Zero hashes identically whatever its sign, so Hash agrees with Eq.
        let sign = if self.is_zero() { Sign::Positive } else { self.sign };
        sign.hash(state);
        self.exponent.hash(state);
        self.digits.hash(state);
    }
}

impl std_fmt::Debug for Decimal {
    fn fmt(&self, f: &mut std_fmt::Formatter<'_>) -> std_fmt::Result {
        write!(
            f,
            "Decimal({}, e={}, digits={})",
            fmt::stringify(self, true, true),
            self.exponent,
            self.digits.len()
        )
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Decimal {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        // Exponential form is canonical and independent of any context.
        serializer.serialize_str(&fmt::stringify(self, true, true))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Decimal {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'_, str> as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
