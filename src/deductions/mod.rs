//! Payroll deductions.
//!
//! A [`Deduction`] computes an amount to subtract from an employee's monthly
//! earnings. Two strategies are provided: a fixed monthly amount and a fixed
//! fraction of earnings.

mod fixed_amount;
mod fixed_percent;

pub use fixed_amount::FixedAmountDeduction;
pub use fixed_percent::FixedPercentDeduction;

use std::fmt;

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

/// A single payroll deduction (e.g. "Income Tax 5%", "Benefits $50").
pub trait Deduction: fmt::Debug {
    /// Returns the deduction's display name.
    fn name(&self) -> &str;

    /// Computes the amount to deduct for `employee`, with scale 2.
    ///
    /// # Errors
    ///
    /// Strategies that depend on the employee return `MissingValue` when
    /// `employee` is `None`.
    fn amount_for(&self, employee: Option<&dyn Employee>) -> PayrollResult<Decimal>;
}

/// Checks that a deduction name is present and not blank.
///
/// The name is returned as given, without trimming.
fn validated_name(name: Option<&str>) -> PayrollResult<String> {
    match name {
        Some(name) if !name.trim().is_empty() => Ok(name.to_string()),
        _ => Err(PayrollError::InvalidArgument {
            field: "name".to_string(),
            message: "deduction name must not be blank".to_string(),
        }),
    }
}
