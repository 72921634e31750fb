// ============================================================================
// Arbitrary-Precision Decimal Library
// Exact decimal arithmetic on sign/exponent/digit-array values with
// configurable rounding
// ============================================================================

//! # bigdec
//!
//! Arbitrary-precision decimal arithmetic without binary floating-point
//! artifacts.
//!
//! ## Features
//!
//! - **Exact** addition, subtraction and multiplication at any magnitude
//! - **Rounded** division, modulo, integer powers and square roots under
//!   four rounding modes
//! - **Configurable** precision and notation thresholds, per call or
//!   process-wide
//! - **Faithful rendering**: fixed-point, exponential and significant-digit
//!   string forms
//!
//! ## Example
//!
//! ```rust
//! use bigdec::prelude::*;
//!
//! let price: Decimal = "355.25".parse().unwrap();
//! let qty = Decimal::from(3);
//! let total = &price * &qty;
//! assert_eq!(total.to_string(), "1065.75");
//!
//! // Division needs a precision; take one explicitly.
//! let ctx = Context {
//!     decimal_places: 4,
//!     rounding: RoundingMode::HalfEven,
//!     ..Context::DEFAULT
//! };
//! let third = Decimal::one().div_with(&Decimal::from(3), &ctx).unwrap();
//! assert_eq!(third.to_string_with(&ctx), "0.3333");
//! ```

pub mod context;
pub mod decimal;
pub mod error;

// Re-exports for convenience
pub mod prelude {
    pub use crate::context::{Context, RoundingMode};
    pub use crate::decimal::Decimal;
    pub use crate::error::{DecimalError, DecimalResult};
}
