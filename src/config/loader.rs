//! Deduction plan loading.
//!
//! This module provides the [`DeductionPlan`] type, built from a YAML
//! document listing the deductions to apply to each pay statement.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::calculation::calculate_pay_statement;
use crate::deductions::Deduction;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Employee, PayStatement};

use super::types::DeductionPlanConfig;

/// Source label used in errors for plans parsed from in-memory text.
const INLINE_SOURCE: &str = "<inline>";

/// An ordered set of deductions applied to each employee.
///
/// # File Format
///
/// ```text
/// deductions:
///   - kind: fixed_percent
///     name: Income Tax 5%
///     percent: "0.05"
///   - kind: fixed_amount
///     name: Benefits
///     amount: "50.00"
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_model::config::DeductionPlan;
///
/// let plan = DeductionPlan::load("./config/deductions.yaml")?;
/// println!("Loaded {} deductions", plan.len());
/// # Ok::<(), payroll_model::error::PayrollError>(())
/// ```
#[derive(Debug, Default)]
pub struct DeductionPlan {
    deductions: Vec<Box<dyn Deduction>>,
}

impl DeductionPlan {
    /// Creates a plan from already-built deductions.
    pub fn new(deductions: Vec<Box<dyn Deduction>>) -> Self {
        Self { deductions }
    }

    /// Loads a plan from a YAML file.
    ///
    /// # Returns
    ///
    /// Returns the plan on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or an unknown `kind` (`ConfigParseError`)
    /// - A deduction has an absent or blank name (`InvalidArgument`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::parse(&content, &path_str)
    }

    /// Parses a plan from YAML text.
    ///
    /// Errors are the same as for [`DeductionPlan::load`], with the path
    /// reported as `<inline>`.
    pub fn from_yaml_str(content: &str) -> PayrollResult<Self> {
        Self::parse(content, INLINE_SOURCE)
    }

    /// Builds a plan from an already-deserialized configuration.
    pub fn from_config(config: &DeductionPlanConfig) -> PayrollResult<Self> {
        let deductions = config
            .deductions
            .iter()
            .map(|entry| {
                entry.build().inspect_err(|err| {
                    warn!(name = ?entry.name(), error = %err, "Rejected deduction entry");
                })
            })
            .collect::<PayrollResult<Vec<_>>>()?;

        Ok(Self::new(deductions))
    }

    fn parse(content: &str, source: &str) -> PayrollResult<Self> {
        let config: DeductionPlanConfig =
            serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let plan = Self::from_config(&config)?;
        debug!(source, deductions = plan.len(), "Deduction plan loaded");
        Ok(plan)
    }

    /// Returns the deductions in application order.
    pub fn deductions(&self) -> &[Box<dyn Deduction>] {
        &self.deductions
    }

    /// Returns the number of deductions in the plan.
    pub fn len(&self) -> usize {
        self.deductions.len()
    }

    /// Returns true if the plan has no deductions.
    pub fn is_empty(&self) -> bool {
        self.deductions.is_empty()
    }

    /// Calculates a pay statement for `employee` using this plan.
    pub fn apply(&self, employee: &dyn Employee) -> PayrollResult<PayStatement> {
        calculate_pay_statement(employee, &self.deductions)
    }
}
