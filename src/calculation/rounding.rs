//! Currency rounding for display and reconciliation.
//!
//! Amounts are accumulated at full precision; this is the only place they
//! are rounded.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in rendered currency amounts.
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to currency precision, midpoints away from zero.
///
/// # Examples
///
/// ```
/// use overtime_billing::calculation::round_currency;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_currency(Decimal::from_str("13.571415").unwrap()), Decimal::from_str("13.57").unwrap());
/// assert_eq!(round_currency(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}
