//! Calculation logic for the delivery fee calculator.
//!
//! Each surcharge lives in its own module and depends only on its slice of
//! the rule set. `final_cost` composes them with the peak-time adjustment,
//! the free-delivery override and the fee cap.

mod cart_value;
mod distance;
mod final_cost;
mod item_count;
mod peak_time;

pub use cart_value::cart_value_surcharge;
pub use distance::calculate_distance_surcharge;
pub use final_cost::{FeeCalculator, calculate_fee_breakdown, compute_fee};
pub use item_count::calculate_item_surcharge;
pub use peak_time::{
    ORDER_TIME_PATTERN, apply_peak_multiplier, is_peak_time, parse_order_time,
    peak_hour_surcharge,
};
