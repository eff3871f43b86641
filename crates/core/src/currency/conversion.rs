//! Reference-currency conversion arithmetic.

/// Converts `amount` units of a currency with rate `rate` into the
/// reference currency.
///
/// Rates are denominated in reference-currency units per unit, so the
/// result is `reference_rate / rate * amount`, floored toward negative
/// infinity (`floor(-2.5)` is `-3`). Computed in `f64`, matching the
/// precision of the rate table.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn to_reference(reference_rate: f64, rate: f64, amount: i64) -> i64 {
    (reference_rate / rate * amount as f64).floor() as i64
}
