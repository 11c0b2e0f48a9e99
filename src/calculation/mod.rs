//! Calculation logic for the payroll model.
//!
//! This module contains the fixed-point monetary helpers used by every
//! record type and the gross-to-net pay statement calculation.

mod money;
mod pay_statement;

pub use money::{MAX_MONEY, MONEY_SCALE, clamp_money, clamp_non_negative, round_money};
pub(crate) use money::{deserialize_clamped_money, deserialize_required_money, overflow};
pub use pay_statement::{NEGATIVE_NET_PAY_WARNING, calculate_pay_statement};
