//! Payroll data model
//!
//! This crate represents people, addresses and employees (hourly or salaried),
//! computes monthly earnings with fixed-point decimal arithmetic, and applies
//! pluggable deductions to produce gross-to-net pay statements.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod deductions;
pub mod error;
pub mod models;
