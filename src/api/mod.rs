//! HTTP API module for the delivery fee calculator.
//!
//! This module provides the REST endpoints through which the fee
//! calculation is invoked.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::DeliveryFeeRequest;
pub use response::{ApiError, ApiErrorResponse, ApiInfo, DeliveryFeeResponse};
pub use state::AppState;
