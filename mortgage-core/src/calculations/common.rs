//! Common rounding helpers for monetary amounts.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded away from zero, which is how the
/// payment text has always been produced.
///
/// ```
/// use rust_decimal_macros::dec;
/// use mortgage_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(954.834)), dec!(954.83));
/// assert_eq!(round_half_up(dec!(954.835)), dec!(954.84));
/// assert_eq!(round_half_up(dec!(-954.835)), dec!(-954.84)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
