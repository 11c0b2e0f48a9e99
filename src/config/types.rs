//! Configuration types for deduction plans.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::deductions::{Deduction, FixedAmountDeduction, FixedPercentDeduction};
use crate::error::PayrollResult;

/// Deduction plan file structure.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DeductionPlanConfig {
    /// Deductions in the order they are applied.
    #[serde(default)]
    pub deductions: Vec<DeductionConfig>,
}

/// One configured deduction, selected by its `kind` key.
///
/// Amounts are given as quoted decimal strings (e.g. `"0.05"`). A missing
/// amount or percent is treated as zero.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DeductionConfig {
    /// A fixed monthly amount.
    FixedAmount {
        /// The deduction's display name.
        name: Option<String>,
        /// The monthly amount.
        amount: Option<Decimal>,
    },
    /// A fraction of monthly earnings.
    FixedPercent {
        /// The deduction's display name.
        name: Option<String>,
        /// The fraction of earnings (0.05 = 5%).
        percent: Option<Decimal>,
    },
}

impl DeductionConfig {
    /// Returns the configured name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            DeductionConfig::FixedAmount { name, .. }
            | DeductionConfig::FixedPercent { name, .. } => name.as_deref(),
        }
    }

    /// Builds the deduction this entry describes.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the name is absent or blank.
    pub fn build(&self) -> PayrollResult<Box<dyn Deduction>> {
        let deduction: Box<dyn Deduction> = match self {
            DeductionConfig::FixedAmount { name, amount } => {
                Box::new(FixedAmountDeduction::new(name.as_deref(), *amount)?)
            }
            DeductionConfig::FixedPercent { name, percent } => {
                Box::new(FixedPercentDeduction::new(name.as_deref(), *percent)?)
            }
        };
        Ok(deduction)
    }
}
