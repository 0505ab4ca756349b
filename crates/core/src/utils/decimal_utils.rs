//! Overflow-checked arithmetic over money amounts.
//!
//! `Decimal`'s operators panic when a result leaves the 96-bit mantissa, and
//! stored amounts are only bounded by what the JSON layer accepts. Totals
//! built from user data go through these helpers instead.

use rust_decimal::Decimal;

use crate::errors::{Error, Result};

pub const AMOUNT_OUT_OF_RANGE: &str = "Amount total is out of range";

fn out_of_range() -> Error {
    Error::Unexpected(AMOUNT_OUT_OF_RANGE.to_string())
}

pub fn checked_add(total: Decimal, amount: Decimal) -> Result<Decimal> {
    total.checked_add(amount).ok_or_else(out_of_range)
}

pub fn checked_sum<I>(amounts: I) -> Result<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts.into_iter().try_fold(Decimal::ZERO, checked_add)
}

/// `part / whole * factor`, failing instead of panicking on overflow.
pub fn checked_ratio(part: Decimal, whole: Decimal, factor: Decimal) -> Result<Decimal> {
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(factor))
        .ok_or_else(out_of_range)
}
