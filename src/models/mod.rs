//! Core data models for the delivery fee calculator.
//!
//! This module contains the domain models used throughout the calculator.

mod fee_breakdown;
mod order;

pub(crate) use order::ensure_positive;

pub use fee_breakdown::{FeeBreakdown, FeeStep};
pub use order::Order;
