// ============================================================================
// Rounding Context
// Precision, rounding mode and formatting thresholds for decimal operations
// ============================================================================

use crate::error::{DecimalError, DecimalResult};
use parking_lot::RwLock;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Upper bound for decimal places and significant digits.
pub const MAX_DP: u32 = 1_000_000;

/// Magnitude bound for the integer exponent accepted by `pow`.
pub const MAX_POWER: i32 = 1_000_000;

// ============================================================================
// Rounding Mode
// ============================================================================

/// Policy deciding how a discarded digit tail affects the kept digits.
///
/// The numeric discriminants (0-3) are the conventional wire codes, accepted
/// through `TryFrom<u8>` for configuration coming from untyped sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RoundingMode {
    /// Truncate toward zero
    Down = 0,
    /// Round up when the first discarded digit is >= 5
    HalfUp = 1,
    /// Round half-way cases toward the even neighbour
    HalfEven = 2,
    /// Round away from zero whenever anything was discarded
    Up = 3,
}

impl TryFrom<u8> for RoundingMode {
    type Error = DecimalError;

    fn try_from(code: u8) -> DecimalResult<Self> {
        match code {
            0 => Ok(RoundingMode::Down),
            1 => Ok(RoundingMode::HalfUp),
            2 => Ok(RoundingMode::HalfEven),
            3 => Ok(RoundingMode::Up),
            _ => Err(DecimalError::InvalidRoundingMode),
        }
    }
}

// ============================================================================
// Context
// ============================================================================

/// Configuration for division/sqrt precision, rounding and formatting.
///
/// A `Context` is a plain value: embedders that need several independent
/// precision domains create one per domain and call the `*_with` operation
/// variants. The ergonomic operation forms read the process-wide default
/// instance behind an `RwLock` (see [`Context::global`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Context {
    /// Target decimal places for divide/sqrt/negative-power results,
    /// in `[0, MAX_DP]`
    pub decimal_places: u32,

    /// Rounding mode applied wherever precision is discarded
    pub rounding: RoundingMode,

    /// Exponent at or below which formatting switches to exponential notation
    pub neg_exp: i64,

    /// Exponent at or above which formatting switches to exponential notation
    pub pos_exp: i64,

    /// When true, lossy float conversions and implicit coercions are rejected
    pub strict: bool,
}

impl Context {
    /// The default configuration: 20 decimal places, round half-up,
    /// exponential notation outside `(-7, 21)`, strict mode off.
    pub const DEFAULT: Self = Self {
        decimal_places: 20,
        rounding: RoundingMode::HalfUp,
        neg_exp: -7,
        pos_exp: 21,
        strict: false,
    };

    /// Snapshot of the process-wide default context.
    pub fn global() -> Self {
        *GLOBAL_CONTEXT.read()
    }

    /// Replace the process-wide default context.
    pub fn set_global(ctx: Self) {
        *GLOBAL_CONTEXT.write() = ctx;
    }

    /// Mutate the process-wide default context in place.
    ///
    /// ```
    /// use bigdec::context::Context;
    ///
    /// Context::update_global(|ctx| ctx.decimal_places = 20);
    /// ```
    pub fn update_global(f: impl FnOnce(&mut Self)) {
        f(&mut GLOBAL_CONTEXT.write());
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::DEFAULT
    }
}

static GLOBAL_CONTEXT: RwLock<Context> = RwLock::new(Context::DEFAULT);
