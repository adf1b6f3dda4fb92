//! Conversion between external decimal amounts and internal minor units.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::Currency;

/// Convert an external decimal amount to internal minor units.
///
/// Rounds half-even at the currency's decimal places, so `15.25` USD becomes
/// `1525` and `0.2345` BHD becomes `234`. Returns `None` if the scaled amount
/// does not fit in an `i64`.
pub fn to_minor(amount: Decimal, currency: Currency) -> Option<i64> {
    let scale = Decimal::from(10i64.pow(currency.decimals()));
    let minor = amount
        .checked_mul(scale)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointNearestEven);
    minor.to_i64()
}

/// Convert internal minor units back to an external decimal amount.
///
/// Exact: `1525` USD becomes `15.25`, `234` BHD becomes `0.234`.
pub fn to_major(minor: i64, currency: Currency) -> Decimal {
    Decimal::new(minor, currency.decimals())
}

/// Format a minor-unit amount as a plain decimal string without trailing
/// zeros, e.g. `1525` USD -> `"15.25"`, `5000` JPY -> `"5000"`.
pub fn format_amount(minor: i64, currency: Currency) -> String {
    to_major(minor, currency).normalize().to_string()
}
