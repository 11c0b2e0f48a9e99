//! Employee abstraction shared by the concrete pay variants.
//!
//! This module defines the [`Employee`] trait, the [`EmployeeProfile`] record
//! every variant embeds, and the [`PayBasis`] enum identifying how a variant
//! is paid.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Person;
use crate::error::PayrollResult;

/// How an employee's earnings are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayBasis {
    /// Paid an hourly rate for the hours recorded in the month.
    Hourly,
    /// Paid one twelfth of an annual salary per month.
    Salary,
}

impl PayBasis {
    /// Returns the snake_case name used in serialized output.
    pub fn as_str(&self) -> &'static str {
        match self {
            PayBasis::Hourly => "hourly",
            PayBasis::Salary => "salary",
        }
    }
}

impl fmt::Display for PayBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The person details plus the employment fields common to every variant.
///
/// # Example
///
/// ```
/// use payroll_model::models::{EmployeeProfile, Person};
///
/// let person = Person::new(Some("Patel"), Some("Jay"), Some('M'), None, None, None);
/// let profile = EmployeeProfile::new(person, 42, Some("Developer"));
/// assert_eq!(profile.to_string(), "42: Patel, Jay M");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    #[serde(flatten)]
    person: Person,
    #[serde(default)]
    employee_id: i32,
    #[serde(default)]
    job_title: Option<String>,
}

impl EmployeeProfile {
    /// Creates a profile. The job title is stored as given.
    pub fn new(person: Person, employee_id: i32, job_title: Option<&str>) -> Self {
        Self {
            person,
            employee_id,
            job_title: job_title.map(str::to_string),
        }
    }

    /// Returns the person details.
    pub fn person(&self) -> &Person {
        &self.person
    }

    /// Returns the person details for modification.
    pub fn person_mut(&mut self) -> &mut Person {
        &mut self.person
    }

    /// Returns the employee identifier.
    pub fn employee_id(&self) -> i32 {
        self.employee_id
    }

    /// Sets the employee identifier.
    pub fn set_employee_id(&mut self, employee_id: i32) {
        self.employee_id = employee_id;
    }

    /// Returns the job title, if set.
    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    /// Sets the job title. Stored as given.
    pub fn set_job_title(&mut self, job_title: Option<&str>) {
        self.job_title = job_title.map(str::to_string);
    }
}

impl fmt::Display for EmployeeProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.employee_id, self.person)
    }
}

/// An employee whose monthly earnings can be computed.
///
/// Implementors embed an [`EmployeeProfile`] and supply [`Employee::earnings`];
/// the earnings figure always has a scale of exactly 2. Formatting an
/// employee gives `"<id>: <display name>"`, the same as its profile.
pub trait Employee: fmt::Display {
    /// Returns the shared employee details.
    fn profile(&self) -> &EmployeeProfile;

    /// Returns the shared employee details for modification.
    fn profile_mut(&mut self) -> &mut EmployeeProfile;

    /// Returns how this employee is paid.
    fn pay_basis(&self) -> PayBasis;

    /// Computes the employee's monthly earnings, rounded half-up to cents.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticOverflow` if the figure is too large to represent.
    fn earnings(&self) -> PayrollResult<Decimal>;

    /// Returns the employee identifier.
    fn employee_id(&self) -> i32 {
        self.profile().employee_id()
    }

    /// Returns the person's display name.
    fn display_name(&self) -> String {
        self.profile().person().display_name()
    }
}
