// ============================================================================
// Basic Usage Example
// ============================================================================

use bigdec::prelude::*;

fn main() -> DecimalResult<()> {
    println!("=== bigdec Example ===\n");

    // Exact arithmetic: no binary floating-point artifacts
    let a: Decimal = "0.1".parse()?;
    let b: Decimal = "0.2".parse()?;
    println!("0.1 + 0.2      = {}", &a + &b);
    let c: Decimal = "0.3".parse()?;
    println!("0.3 - 0.1      = {}", &c - &a);

    // Division and square roots are rounded to a configured precision
    let ctx = Context {
        decimal_places: 12,
        rounding: RoundingMode::HalfEven,
        ..Context::DEFAULT
    };
    let one = Decimal::one();
    let three = Decimal::from(3);
    println!("1 / 3          = {}", one.div_with(&three, &ctx)?.to_string_with(&ctx));
    println!("sqrt(2)        = {}", Decimal::from(2).sqrt_with(&ctx)?.to_string_with(&ctx));

    // Integer powers are exact for non-negative exponents
    let rate: Decimal = "1.05".parse()?;
    println!("1.05^10        = {}", rate.pow_with(10, &ctx)?);

    // Formatting
    let x: Decimal = "45.6".parse()?;
    println!("toExponential  = {}", x.to_exponential(Some(3))?);
    println!("toFixed        = {}", x.to_fixed(Some(4))?);
    println!("toPrecision    = {}", x.to_precision(Some(2))?);

    // The process-wide context drives the convenience methods
    Context::update_global(|ctx| ctx.decimal_places = 6);
    println!("2 / 7 at DP=6  = {}", Decimal::from(2).div(&Decimal::from(7))?);

    Ok(())
}
