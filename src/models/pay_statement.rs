//! Pay statement models.
//!
//! This module contains the [`PayStatement`] type and its associated structures
//! that capture the gross-to-net result for one employee, including the
//! deduction lines and an audit trace.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::PayBasis;

/// One applied deduction on a pay statement.
///
/// # Example
///
/// ```
/// use payroll_model::models::DeductionLine;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let line = DeductionLine {
///     name: "Benefits".to_string(),
///     amount: Decimal::from_str("50.00").unwrap(),
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// The deduction's display name.
    pub name: String,
    /// The amount deducted (scale 2).
    pub amount: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag results that were produced but may need attention.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use payroll_model::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The gross-to-net result for one employee for one month.
///
/// `net_pay` is always `gross_pay - total_deductions` and may be negative
/// when the deductions exceed the earnings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayStatement {
    /// Unique identifier for this statement.
    pub statement_id: Uuid,
    /// When the statement was calculated.
    pub timestamp: DateTime<Utc>,
    /// The version of the crate that produced the statement.
    pub engine_version: String,
    /// The employee's identifier.
    pub employee_id: i32,
    /// The employee's display name at calculation time.
    pub display_name: String,
    /// How the employee is paid.
    pub pay_basis: PayBasis,
    /// Monthly earnings before deductions.
    pub gross_pay: Decimal,
    /// Deductions in the order they were applied.
    pub deductions: Vec<DeductionLine>,
    /// Sum of all deduction amounts.
    pub total_deductions: Decimal,
    /// Gross pay minus total deductions.
    pub net_pay: Decimal,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}
