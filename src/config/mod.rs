//! Configuration loading for the payroll model.
//!
//! This module loads deduction plans from YAML files and turns them into
//! ready-to-apply [`Deduction`](crate::deductions::Deduction) lists.
//!
//! # Example
//!
//! ```no_run
//! use payroll_model::config::DeductionPlan;
//!
//! let plan = DeductionPlan::load("./config/deductions.yaml").unwrap();
//! println!("Loaded {} deductions", plan.len());
//! ```

mod loader;
mod types;

pub use loader::DeductionPlan;
pub use types::{DeductionConfig, DeductionPlanConfig};
