//! Gross-to-net pay statement calculation.
//!
//! Applies a list of deductions to one employee's monthly earnings and
//! records each decision in an audit trace.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{debug, warn};
use uuid::Uuid;

use super::{overflow, round_money};
use crate::deductions::Deduction;
use crate::error::PayrollResult;
use crate::models::{AuditStep, AuditTrace, AuditWarning, DeductionLine, Employee, PayStatement};

/// Warning code recorded when deductions exceed gross pay.
pub const NEGATIVE_NET_PAY_WARNING: &str = "negative_net_pay";

/// Calculates a pay statement for `employee` with `deductions` applied in order.
///
/// Gross pay is the employee's monthly earnings. Each deduction contributes
/// one line; net pay is gross pay minus the sum of the lines and is not
/// clamped. A negative net pay is kept and flagged with a
/// [`NEGATIVE_NET_PAY_WARNING`] audit warning.
///
/// # Errors
///
/// Propagates the first error returned by the employee's earnings or by a
/// deduction, and returns `ArithmeticOverflow` if the deduction total or
/// net pay cannot be represented.
///
/// # Examples
///
/// ```
/// use payroll_model::calculation::calculate_pay_statement;
/// use payroll_model::deductions::{Deduction, FixedAmountDeduction, FixedPercentDeduction};
/// use payroll_model::models::{EmployeeProfile, HourlyEmployee};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let employee = HourlyEmployee::new(
///     EmployeeProfile::default(),
///     Some(Decimal::from(160)),
///     Some(Decimal::from_str("20.00").unwrap()),
/// );
/// let deductions: Vec<Box<dyn Deduction>> = vec![
///     Box::new(FixedPercentDeduction::new(Some("Tax 5%"), Some(Decimal::from_str("0.05").unwrap()))?),
///     Box::new(FixedAmountDeduction::new(Some("Benefits"), Some(Decimal::from(50)))?),
/// ];
///
/// let statement = calculate_pay_statement(&employee, &deductions)?;
/// assert_eq!(statement.gross_pay.to_string(), "3200.00");
/// assert_eq!(statement.total_deductions.to_string(), "210.00");
/// assert_eq!(statement.net_pay.to_string(), "2990.00");
/// # Ok::<(), payroll_model::error::PayrollError>(())
/// ```
pub fn calculate_pay_statement(
    employee: &dyn Employee,
    deductions: &[Box<dyn Deduction>],
) -> PayrollResult<PayStatement> {
    let start_time = Instant::now();
    let employee_id = employee.employee_id();
    let pay_basis = employee.pay_basis();

    let mut steps: Vec<AuditStep> = Vec::new();
    let mut warnings: Vec<AuditWarning> = Vec::new();

    let gross_pay = employee.earnings()?;
    steps.push(AuditStep {
        step_number: 1,
        rule_id: "gross_earnings".to_string(),
        rule_name: "Gross Earnings".to_string(),
        input: serde_json::json!({
            "employee_id": employee_id,
            "pay_basis": pay_basis.as_str()
        }),
        output: serde_json::json!({
            "gross_pay": gross_pay.to_string()
        }),
        reasoning: format!("{} earnings for the month = ${}", pay_basis, gross_pay),
    });

    let mut lines: Vec<DeductionLine> = Vec::with_capacity(deductions.len());
    for deduction in deductions {
        let amount = deduction.amount_for(Some(employee))?;
        let step_number = steps.len() as u32 + 1;
        steps.push(AuditStep {
            step_number,
            rule_id: "deduction".to_string(),
            rule_name: deduction.name().to_string(),
            input: serde_json::json!({
                "gross_pay": gross_pay.to_string()
            }),
            output: serde_json::json!({
                "amount": amount.to_string()
            }),
            reasoning: format!("Deducted ${} for {}", amount, deduction.name()),
        });
        lines.push(DeductionLine {
            name: deduction.name().to_string(),
            amount,
        });
    }

    let total_deductions = lines
        .iter()
        .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.amount))
        .ok_or_else(|| overflow("deduction total"))?;
    let total_deductions = round_money(total_deductions)?;
    let net_pay = gross_pay
        .checked_sub(total_deductions)
        .ok_or_else(|| overflow("net pay"))?;
    let net_pay = round_money(net_pay)?;

    let step_number = steps.len() as u32 + 1;
    steps.push(AuditStep {
        step_number,
        rule_id: "net_pay".to_string(),
        rule_name: "Net Pay".to_string(),
        input: serde_json::json!({
            "gross_pay": gross_pay.to_string(),
            "total_deductions": total_deductions.to_string(),
            "deduction_count": lines.len()
        }),
        output: serde_json::json!({
            "net_pay": net_pay.to_string()
        }),
        reasoning: format!("${} - ${} = ${}", gross_pay, total_deductions, net_pay),
    });

    if net_pay < Decimal::ZERO {
        warn!(
            employee_id,
            gross_pay = %gross_pay,
            total_deductions = %total_deductions,
            "Deductions exceed gross pay"
        );
        warnings.push(AuditWarning {
            code: NEGATIVE_NET_PAY_WARNING.to_string(),
            message: format!(
                "Deductions of ${} exceed gross pay of ${}",
                total_deductions, gross_pay
            ),
            severity: "high".to_string(),
        });
    }

    let duration_us = start_time.elapsed().as_micros() as u64;
    debug!(
        employee_id,
        deductions = lines.len(),
        net_pay = %net_pay,
        duration_us,
        "Pay statement calculated"
    );

    Ok(PayStatement {
        statement_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id,
        display_name: employee.display_name(),
        pay_basis,
        gross_pay,
        deductions: lines,
        total_deductions,
        net_pay,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}
