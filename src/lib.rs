//! Delivery Fee Calculator
//!
//! This crate computes the delivery fee for an order from its cart value,
//! delivery distance, item count and order time, and exposes the calculation
//! through an HTTP API.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
