//! Fixed-point monetary helpers.
//!
//! Every stored or returned monetary amount in the crate has exactly
//! [`MONEY_SCALE`] fraction digits and is rounded half-up (ties away from zero).

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Deserializer};

use crate::error::{PayrollError, PayrollResult};

/// Number of fraction digits carried by monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// The largest amount that can be held with [`MONEY_SCALE`] fraction digits.
pub const MAX_MONEY: Decimal =
    Decimal::from_parts(u32::MAX, u32::MAX, u32::MAX, false, MONEY_SCALE);

/// Rounds a value to [`MONEY_SCALE`] decimal places, half-up.
///
/// The result always has a scale of exactly 2, so `100` becomes `100.00`.
///
/// # Errors
///
/// Returns `ArithmeticOverflow` if the magnitude is above [`MAX_MONEY`],
/// where two fraction digits no longer fit.
///
/// # Examples
///
/// ```
/// use payroll_model::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rounded = round_money(Decimal::from_str("83.3375").unwrap())?;
/// assert_eq!(rounded.to_string(), "83.34");
///
/// let padded = round_money(Decimal::from(100))?;
/// assert_eq!(padded.to_string(), "100.00");
///
/// assert!(round_money(Decimal::MAX).is_err());
/// # Ok::<(), payroll_model::error::PayrollError>(())
/// ```
pub fn round_money(value: Decimal) -> PayrollResult<Decimal> {
    let mut rounded =
        value.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // round_dp never widens the scale, and rescale gives up silently when
    // the mantissa has no room left
    rounded.rescale(MONEY_SCALE);
    if rounded.scale() != MONEY_SCALE {
        return Err(overflow("rounding to cents"));
    }
    Ok(rounded)
}

/// Clamps an optional monetary input to a non-negative amount with scale 2.
///
/// Absent and negative inputs become `0.00`; inputs above [`MAX_MONEY`]
/// become [`MAX_MONEY`].
pub fn clamp_money(value: Option<Decimal>) -> Decimal {
    let clamped = clamp_non_negative(value).min(MAX_MONEY);
    round_money(clamped).unwrap_or(MAX_MONEY)
}

/// Builds the error returned when a monetary operation leaves the decimal range.
pub(crate) fn overflow(operation: &str) -> PayrollError {
    PayrollError::ArithmeticOverflow {
        operation: operation.to_string(),
    }
}

/// Clamps an optional value to be non-negative without rounding it.
///
/// Absent and negative inputs become `0`.
pub fn clamp_non_negative(value: Option<Decimal>) -> Decimal {
    value.unwrap_or(Decimal::ZERO).max(Decimal::ZERO)
}

/// Deserializes an optional amount and clamps it with [`clamp_money`].
pub(crate) fn deserialize_clamped_money<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Decimal>::deserialize(deserializer)?;
    Ok(clamp_money(value))
}

/// Deserializes a required amount and clamps it with [`clamp_money`].
///
/// A `null` value is a deserialization error rather than `0.00`.
pub(crate) fn deserialize_required_money<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    let value = <Decimal as Deserialize>::deserialize(deserializer)?;
    Ok(clamp_money(Some(value)))
}
