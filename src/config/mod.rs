//! Fee rule configuration for the delivery fee calculator.
//!
//! This module provides the immutable rule set that every calculation is
//! evaluated against, and loading of alternate rule sets from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use delivery_fee_calculator::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/fee_rules.yaml").unwrap();
//! println!("Peak day: {}", config.rules().peak.day);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BASE_DISTANCE_FEE, BULK_FEE, CART_VALUE_FREE, CART_VALUE_MINIMUM, CartValueRules,
    DISTANCE_MINIMUM, DISTANCE_STEP, DISTANCE_SURCHARGE_RATE, DistanceRules, FeeRules,
    GRAND_TOTAL_LIMIT, ItemRules, LARGE_ORDER_MAXIMUM, LARGE_ORDER_MINIMUM,
    LARGE_ORDER_SURCHARGE, PEAK_DAY, PEAK_HOUR_END, PEAK_HOUR_START, PeakWindow, peak_multiplier,
};
