// ============================================================================
// Decimal Errors
// Error types for arbitrary-precision decimal operations
// ============================================================================

use std::fmt;

/// Errors that can occur during decimal construction, arithmetic or
/// formatting.
///
/// Every variant is a deterministic precondition failure surfaced at the
/// offending call; nothing is retryable and nothing is recovered internally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecimalError {
    /// Malformed textual input to the parser
    InvalidNumber,
    /// Native floating-point construction rejected in strict mode
    InvalidValue,
    /// Attempted division (or modulo) by zero
    DivisionByZero,
    /// Square root requested of a negative value
    NoSquareRoot,
    /// Power exponent out of bounds
    InvalidExponent,
    /// Decimal places or significant digits out of bounds
    InvalidPrecision,
    /// Rounding mode code outside the four defined modes
    InvalidRoundingMode,
    /// Lossy decimal-to-float conversion rejected in strict mode
    ImpreciseConversion,
    /// Implicit numeric coercion rejected in strict mode
    ValueOfDisallowed,
}

impl fmt::Display for DecimalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecimalError::InvalidNumber => {
                write!(f, "invalid number: could not parse decimal value")
            },
            DecimalError::InvalidValue => {
                write!(f, "invalid value: float construction disallowed in strict mode")
            },
            DecimalError::DivisionByZero => write!(f, "division by zero"),
            DecimalError::NoSquareRoot => {
                write!(f, "no square root: value is negative")
            },
            DecimalError::InvalidExponent => write!(
                f,
                "invalid exponent: power must be an integer in [-1000000, 1000000]"
            ),
            DecimalError::InvalidPrecision => {
                write!(f, "invalid precision: decimal places out of range")
            },
            DecimalError::InvalidRoundingMode => write!(f, "invalid rounding mode"),
            DecimalError::ImpreciseConversion => write!(
                f,
                "imprecise conversion: value does not survive the float round-trip"
            ),
            DecimalError::ValueOfDisallowed => {
                write!(f, "valueOf disallowed in strict mode")
            },
        }
    }
}

impl std::error::Error for DecimalError {}

/// Result type alias for decimal operations
pub type DecimalResult<T> = Result<T, DecimalError>;
