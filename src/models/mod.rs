//! Core data models for the payroll model.
//!
//! This module contains the people and employee records, and the pay
//! statement produced by the gross-to-net calculation.

mod address;
mod employee;
mod hourly_employee;
mod pay_statement;
mod person;
mod salary_employee;
mod text;

pub use address::Address;
pub use employee::{Employee, EmployeeProfile, PayBasis};
pub use hourly_employee::HourlyEmployee;
pub use pay_statement::{AuditStep, AuditTrace, AuditWarning, DeductionLine, PayStatement};
pub use person::{NO_MIDDLE_INITIAL, Person};
pub use salary_employee::SalaryEmployee;
pub use text::normalize_text;
