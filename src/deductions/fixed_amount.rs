//! Fixed monthly amount deduction.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{Deduction, validated_name};
use crate::calculation::clamp_money;
use crate::error::PayrollResult;
use crate::models::Employee;

/// A deduction of the same amount every month, regardless of earnings.
///
/// # Example
///
/// ```
/// use payroll_model::deductions::{Deduction, FixedAmountDeduction};
/// use rust_decimal::Decimal;
///
/// let benefits = FixedAmountDeduction::new(Some("Benefits"), Some(Decimal::from(50)))?;
/// assert_eq!(benefits.amount_for(None)?.to_string(), "50.00");
/// # Ok::<(), payroll_model::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedAmountDeduction {
    name: String,
    monthly_amount: Decimal,
}

impl FixedAmountDeduction {
    /// Creates a fixed-amount deduction.
    ///
    /// An absent or negative amount becomes `0.00`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` is absent or blank.
    pub fn new(name: Option<&str>, monthly_amount: Option<Decimal>) -> PayrollResult<Self> {
        Ok(Self {
            name: validated_name(name)?,
            monthly_amount: clamp_money(monthly_amount),
        })
    }

    /// Returns the fixed monthly amount (scale 2).
    pub fn monthly_amount(&self) -> Decimal {
        self.monthly_amount
    }
}

impl Deduction for FixedAmountDeduction {
    fn name(&self) -> &str {
        &self.name
    }

    fn amount_for(&self, _employee: Option<&dyn Employee>) -> PayrollResult<Decimal> {
        Ok(self.monthly_amount)
    }
}
