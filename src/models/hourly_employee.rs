//! Hourly employee model.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Employee, EmployeeProfile, PayBasis};
use crate::calculation::{clamp_money, deserialize_clamped_money, overflow, round_money};
use crate::error::PayrollResult;

/// An employee paid by the hour.
///
/// The hourly rate and monthly hours are stored with scale 2. Absent or
/// negative inputs are clamped to `0.00` on every write.
///
/// # Example
///
/// ```
/// use payroll_model::models::{Employee, EmployeeProfile, HourlyEmployee};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = HourlyEmployee::new(
///     EmployeeProfile::default(),
///     Some(Decimal::from_str("173.33").unwrap()),
///     Some(Decimal::from_str("19.99").unwrap()),
/// );
/// assert_eq!(employee.earnings()?.to_string(), "3464.87");
/// # Ok::<(), payroll_model::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourlyEmployee {
    #[serde(flatten)]
    profile: EmployeeProfile,
    #[serde(default = "zero_money", deserialize_with = "deserialize_clamped_money")]
    monthly_hours: Decimal,
    #[serde(default = "zero_money", deserialize_with = "deserialize_clamped_money")]
    hourly_rate: Decimal,
}

fn zero_money() -> Decimal {
    clamp_money(None)
}

impl HourlyEmployee {
    /// Creates an hourly employee, clamping both amounts.
    pub fn new(
        profile: EmployeeProfile,
        monthly_hours: Option<Decimal>,
        hourly_rate: Option<Decimal>,
    ) -> Self {
        Self {
            profile,
            monthly_hours: clamp_money(monthly_hours),
            hourly_rate: clamp_money(hourly_rate),
        }
    }

    /// Returns the hours recorded for the month (scale 2, never negative).
    pub fn monthly_hours(&self) -> Decimal {
        self.monthly_hours
    }

    /// Sets the hours for the month. Absent or negative becomes `0.00`.
    pub fn set_monthly_hours(&mut self, monthly_hours: Option<Decimal>) {
        self.monthly_hours = clamp_money(monthly_hours);
    }

    /// Returns the hourly rate (scale 2, never negative).
    pub fn hourly_rate(&self) -> Decimal {
        self.hourly_rate
    }

    /// Sets the hourly rate. Absent or negative becomes `0.00`.
    pub fn set_hourly_rate(&mut self, hourly_rate: Option<Decimal>) {
        self.hourly_rate = clamp_money(hourly_rate);
    }
}

impl Default for HourlyEmployee {
    fn default() -> Self {
        Self::new(EmployeeProfile::default(), None, None)
    }
}

impl Employee for HourlyEmployee {
    fn profile(&self) -> &EmployeeProfile {
        &self.profile
    }

    fn profile_mut(&mut self) -> &mut EmployeeProfile {
        &mut self.profile
    }

    fn pay_basis(&self) -> PayBasis {
        PayBasis::Hourly
    }

    /// `hourly_rate × monthly_hours`, rounded once after the multiply.
    fn earnings(&self) -> PayrollResult<Decimal> {
        let pay = self
            .hourly_rate
            .checked_mul(self.monthly_hours)
            .ok_or_else(|| overflow("hourly earnings"))?;
        round_money(pay)
    }
}

impl fmt::Display for HourlyEmployee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.profile, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Person;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_monthly_pay_is_rate_times_hours() {
        let mut employee = HourlyEmployee::default();
        employee.set_hourly_rate(Some(dec("20.00")));
        employee.set_monthly_hours(Some(dec("160")));

        let earnings = employee.earnings().unwrap();
        assert_eq!(earnings, dec("3200.00"));
        assert_eq!(earnings.to_string(), "3200.00");
    }

    #[test]
    fn test_zero_hours_results_in_zero_pay() {
        let mut employee = HourlyEmployee::default();
        employee.set_hourly_rate(Some(dec("15.75")));
        employee.set_monthly_hours(Some(dec("0")));

        assert_eq!(employee.earnings().unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_rounding_half_up_after_multiply() {
        let mut employee = HourlyEmployee::default();
        employee.set_hourly_rate(Some(dec("19.99")));
        employee.set_monthly_hours(Some(dec("173.33")));

        // 19.99 × 173.33 = 3464.8667
        assert_eq!(employee.earnings().unwrap(), dec("3464.87"));
    }

    #[test]
    fn test_operands_are_rounded_on_write() {
        let employee = HourlyEmployee::new(
            EmployeeProfile::default(),
            Some(dec("10.005")),
            Some(dec("2.004")),
        );

        assert_eq!(employee.monthly_hours(), dec("10.01"));
        assert_eq!(employee.hourly_rate(), dec("2.00"));
        assert_eq!(employee.earnings().unwrap(), dec("20.02"));
    }

    #[test]
    fn test_negative_values_are_clamped_to_zero() {
        let mut employee = HourlyEmployee::default();
        employee.set_hourly_rate(Some(dec("-10.00")));
        employee.set_monthly_hours(Some(dec("-5.00")));

        assert_eq!(employee.hourly_rate(), Decimal::ZERO);
        assert_eq!(employee.monthly_hours(), Decimal::ZERO);
        assert_eq!(employee.earnings().unwrap().to_string(), "0.00");
    }

    #[test]
    fn test_absent_values_are_treated_as_zero() {
        let mut employee = HourlyEmployee::default();
        employee.set_hourly_rate(None);
        employee.set_monthly_hours(Some(dec("160")));

        assert_eq!(employee.earnings().unwrap().to_string(), "0.00");
        assert_eq!(employee.hourly_rate().to_string(), "0.00");
    }

    #[test]
    fn test_constructor_clamps_like_setters() {
        let employee = HourlyEmployee::new(EmployeeProfile::default(), None, Some(dec("-1")));
        assert_eq!(employee.monthly_hours().to_string(), "0.00");
        assert_eq!(employee.hourly_rate().to_string(), "0.00");
    }

    #[test]
    fn test_default_has_scale_two() {
        let employee = HourlyEmployee::default();
        assert_eq!(employee.hourly_rate().scale(), 2);
        assert_eq!(employee.monthly_hours().scale(), 2);
        assert_eq!(employee.earnings().unwrap().scale(), 2);
    }

    #[test]
    fn test_display_uses_profile() {
        let person = Person::new(Some("Patel"), Some("Jay"), None, None, None, None);
        let employee = HourlyEmployee::new(
            EmployeeProfile::new(person, 12, Some("Cashier")),
            Some(dec("80")),
            Some(dec("16.50")),
        );

        assert_eq!(employee.to_string(), "12: Patel, Jay");
        assert_eq!(employee.employee_id(), 12);
        assert_eq!(employee.display_name(), "Patel, Jay");
        assert_eq!(employee.pay_basis(), PayBasis::Hourly);
    }

    #[test]
    fn test_deserialize_clamps_amounts() {
        let json = r#"{
            "last_name": "Patel",
            "first_name": "Jay",
            "employee_id": 5,
            "job_title": "Cashier",
            "monthly_hours": "-4",
            "hourly_rate": "18.255"
        }"#;

        let employee: HourlyEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.monthly_hours().to_string(), "0.00");
        assert_eq!(employee.hourly_rate().to_string(), "18.26");
        assert_eq!(employee.profile().job_title(), Some("Cashier"));
    }

    #[test]
    fn test_deserialize_missing_amounts_default_to_zero() {
        let json = r#"{ "employee_id": 5 }"#;

        let employee: HourlyEmployee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.monthly_hours().to_string(), "0.00");
        assert_eq!(employee.hourly_rate().to_string(), "0.00");
    }

    #[test]
    fn test_earnings_overflow_is_an_error() {
        let employee = HourlyEmployee::new(
            EmployeeProfile::default(),
            Some(dec("1000000000000000")),
            Some(dec("1000000000000000")),
        );

        assert_eq!(
            employee.earnings(),
            Err(crate::error::PayrollError::ArithmeticOverflow {
                operation: "hourly earnings".to_string(),
            })
        );
    }
}
