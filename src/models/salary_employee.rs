//! Salaried employee model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Employee, EmployeeProfile, PayBasis};
use crate::calculation::{clamp_money, deserialize_required_money, overflow, round_money};
use crate::error::{PayrollError, PayrollResult};

const MONTHS_PER_YEAR: i64 = 12;

/// An employee paid a fixed annual salary.
///
/// The salary is stored with scale 2 and negative input is clamped to
/// `0.00`. Unlike [`HourlyEmployee`](super::HourlyEmployee), an absent
/// salary is rejected with [`PayrollError::MissingValue`].
///
/// # Example
///
/// ```
/// use payroll_model::models::{Employee, EmployeeProfile, SalaryEmployee};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = SalaryEmployee::new(
///     EmployeeProfile::default(),
///     Some(Decimal::from_str("1000.05").unwrap()),
/// )?;
/// assert_eq!(employee.earnings()?.to_string(), "83.34");
///
/// assert!(SalaryEmployee::new(EmployeeProfile::default(), None).is_err());
/// # Ok::<(), payroll_model::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryEmployee {
    #[serde(flatten)]
    profile: EmployeeProfile,
    #[serde(deserialize_with = "deserialize_required_money")]
    annual_salary: Decimal,
}

impl SalaryEmployee {
    /// Creates a salaried employee.
    ///
    /// # Errors
    ///
    /// Returns `MissingValue` if `annual_salary` is `None`.
    pub fn new(profile: EmployeeProfile, annual_salary: Option<Decimal>) -> PayrollResult<Self> {
        Ok(Self {
            profile,
            annual_salary: Self::normalize(annual_salary)?,
        })
    }

    /// Returns the annual salary (scale 2, never negative).
    pub fn annual_salary(&self) -> Decimal {
        self.annual_salary
    }

    /// Sets the annual salary. Negative becomes `0.00`.
    ///
    /// # Errors
    ///
    /// Returns `MissingValue` if `annual_salary` is `None`; the stored
    /// salary is left unchanged.
    pub fn set_annual_salary(&mut self, annual_salary: Option<Decimal>) -> PayrollResult<()> {
        self.annual_salary = Self::normalize(annual_salary)?;
        Ok(())
    }

    fn normalize(annual_salary: Option<Decimal>) -> PayrollResult<Decimal> {
        match annual_salary {
            Some(value) => Ok(clamp_money(Some(value))),
            None => Err(PayrollError::MissingValue {
                field: "annual_salary".to_string(),
            }),
        }
    }
}

impl Default for SalaryEmployee {
    fn default() -> Self {
        Self {
            profile: EmployeeProfile::default(),
            annual_salary: clamp_money(None),
        }
    }
}

impl Employee for SalaryEmployee {
    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut EmployeeProfile {
        &mut self.profile
    }

    fn pay_basis(&self) -> PayBasis {
        PayBasis::Salary
    }

    /// `annual_salary / 12`, rounded half-up to cents.
    fn earnings(&self) -> PayrollResult<Decimal> {
        let monthly = self
            .annual_salary
            .checked_div(Decimal::from(MONTHS_PER_YEAR))
            .ok_or_else(|| overflow("salary earnings"))?;
        round_money(monthly)
    }
}

impl fmt::Display for SalaryEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.profile, f)
    }
}
