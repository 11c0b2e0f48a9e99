//! Fixed percentage-of-earnings deduction.

use rust_decimal::Decimal;
use serde::Serialize;

use super::{Deduction, validated_name};
use crate::calculation::{clamp_non_negative, overflow, round_money};
use crate::error::{PayrollError, PayrollResult};
use crate::models::Employee;

/// A deduction of a fixed fraction of the employee's monthly earnings.
///
/// The percent is a decimal fraction (`0.05` is 5%). It is clamped to be
/// non-negative but otherwise stored unrounded and without an upper bound;
/// only the computed amount is rounded.
///
/// # Example
///
/// ```
/// use payroll_model::deductions::{Deduction, FixedPercentDeduction};
/// use payroll_model::models::{EmployeeProfile, SalaryEmployee};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let tax = FixedPercentDeduction::new(Some("Tax 5%"), Some(Decimal::from_str("0.05").unwrap()))?;
/// let employee = SalaryEmployee::new(EmployeeProfile::default(), Some(Decimal::from(60000)))?;
/// assert_eq!(tax.amount_for(Some(&employee))?.to_string(), "250.00");
/// # Ok::<(), payroll_model::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixedPercentDeduction {
    name: String,
    percent: Decimal,
}

impl FixedPercentDeduction {
    /// Creates a fixed-percent deduction.
    ///
    /// An absent or negative percent becomes `0`.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `name` is absent or blank.
    pub fn new(name: Option<&str>, percent: Option<Decimal>) -> PayrollResult<Self> {
        Ok(Self {
            name: validated_name(name)?,
            percent: clamp_non_negative(percent),
        })
    }

    /// Returns the stored fraction.
    pub fn percent(&self) -> Decimal {
        self.percent
    }
}

impl Deduction for FixedPercentDeduction {
    fn name(&self) -> &str {
        &self.name
    }

    /// `earnings × percent`, rounded half-up to cents.
    fn amount_for(&self, employee: Option<&dyn Employee>) -> PayrollResult<Decimal> {
        let employee = employee.ok_or_else(|| PayrollError::MissingValue {
            field: "employee".to_string(),
        })?;
        let amount = employee
            .earnings()?
            .checked_mul(self.percent)
            .ok_or_else(|| overflow("percent deduction"))?;
        round_money(amount)
    }
}
