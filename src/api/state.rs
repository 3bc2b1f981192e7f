//! Application state for the delivery fee API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::FeeCalculator;

use super::response::ApiInfo;

/// Shared application state.
///
/// Holds the fee calculator and the static API metadata. Both are read-only
/// for the lifetime of the server.
#[derive(Clone)]
pub struct AppState {
    calculator: Arc<FeeCalculator>,
    info: Arc<ApiInfo>,
}

impl AppState {
    /// Creates a new application state around the given calculator.
    pub fn new(calculator: FeeCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
            info: Arc::new(ApiInfo::default()),
        }
    }

    /// Returns a reference to the fee calculator.
    pub fn calculator(&self) -> &FeeCalculator {
        &self.calculator
    }

    /// Returns the API metadata.
    pub fn info(&self) -> &ApiInfo {
        &self.info
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FeeCalculator::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone + Send + Sync + 'static>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_default_state_uses_default_rules() {
        let state = AppState::default();
        assert_eq!(state.calculator().rules().grand_total_limit, 1500);
        assert_eq!(state.info().name, "Delivery Fee Calculator API");
    }
}
