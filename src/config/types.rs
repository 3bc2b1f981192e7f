//! Fee rule types.
//!
//! This module contains the strongly-typed rule structures that drive every
//! fee calculation. They can be built from the production defaults or
//! deserialized from a YAML rule file.

use chrono::Weekday;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{FeeError, FeeResult};

/// Cart values below this amount (cents) pay the shortfall as a surcharge.
pub const CART_VALUE_MINIMUM: i64 = 1000;
/// Cart values at or above this amount (cents) are delivered for free.
pub const CART_VALUE_FREE: i64 = 20000;
/// Distance (meters) covered by the base delivery fee.
pub const DISTANCE_MINIMUM: i64 = 1000;
/// Size (meters) of each additional distance step.
pub const DISTANCE_STEP: i64 = 500;
/// Base delivery fee (cents).
pub const BASE_DISTANCE_FEE: i64 = 200;
/// Fee (cents) per started distance step beyond the minimum.
pub const DISTANCE_SURCHARGE_RATE: i64 = 100;
/// Orders with at most this many items pay no item surcharge.
pub const LARGE_ORDER_MINIMUM: i64 = 4;
/// Orders with at least this many items pay the one-off bulk surcharge.
pub const LARGE_ORDER_MAXIMUM: i64 = 13;
/// Fee (cents) per item above [`LARGE_ORDER_MINIMUM`].
pub const BULK_FEE: i64 = 50;
/// One-off surcharge (cents) for orders reaching [`LARGE_ORDER_MAXIMUM`].
pub const LARGE_ORDER_SURCHARGE: i64 = 120;
/// Day of the week on which the peak window applies (UTC).
pub const PEAK_DAY: Weekday = Weekday::Fri;
/// First hour (UTC, inclusive) of the peak window.
pub const PEAK_HOUR_START: u32 = 15;
/// Last hour (UTC, exclusive) of the peak window.
pub const PEAK_HOUR_END: u32 = 19;
/// Maximum delivery fee (cents).
pub const GRAND_TOTAL_LIMIT: i64 = 1500;

/// Multiplier applied to the surcharge subtotal inside the peak window (1.2).
pub fn peak_multiplier() -> Decimal {
    Decimal::new(12, 1)
}

/// Small-order and free-delivery thresholds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartValueRules {
    /// Cart values below this amount pay the shortfall.
    pub minimum: i64,
    /// Cart values at or above this amount are delivered for free.
    pub free_delivery: i64,
}

/// Distance surcharge parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceRules {
    /// Distance covered by the base fee.
    pub minimum: i64,
    /// Size of each additional step.
    pub step: i64,
    /// Base delivery fee.
    pub base_fee: i64,
    /// Fee per started step beyond the minimum.
    pub surcharge_rate: i64,
}

/// Item-count surcharge parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRules {
    /// Item count up to which no surcharge applies.
    pub large_order_minimum: i64,
    /// Item count from which the one-off surcharge applies.
    pub large_order_maximum: i64,
    /// Fee per item above `large_order_minimum`.
    pub bulk_fee: i64,
    /// One-off surcharge for large orders.
    pub large_order_surcharge: i64,
}

/// The weekly peak window, evaluated in UTC.
///
/// # Example
///
/// ```
/// use delivery_fee_calculator::config::PeakWindow;
/// use chrono::Weekday;
///
/// let window = PeakWindow::default();
/// assert_eq!(window.day, Weekday::Fri);
/// assert!(window.contains(Weekday::Fri, 15));
/// assert!(!window.contains(Weekday::Fri, 19));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeakWindow {
    /// Day of the week on which the window applies.
    pub day: Weekday,
    /// First hour of the window (inclusive).
    pub hour_start: u32,
    /// Last hour of the window (exclusive).
    pub hour_end: u32,
    /// Multiplier applied to the subtotal inside the window.
    pub multiplier: Decimal,
}

impl PeakWindow {
    /// Returns true if the given weekday and hour fall inside the window.
    pub fn contains(&self, day: Weekday, hour: u32) -> bool {
        day == self.day && (self.hour_start..self.hour_end).contains(&hour)
    }
}

impl Default for PeakWindow {
    fn default() -> Self {
        Self {
            day: PEAK_DAY,
            hour_start: PEAK_HOUR_START,
            hour_end: PEAK_HOUR_END,
            multiplier: peak_multiplier(),
        }
    }
}

/// The complete, immutable rule set for fee calculation.
///
/// `FeeRules::default()` yields the production rules. Alternate rule sets can
/// be built in code or loaded with [`ConfigLoader`](super::ConfigLoader).
///
/// # Example
///
/// ```
/// use delivery_fee_calculator::config::FeeRules;
///
/// let rules = FeeRules::default();
/// assert_eq!(rules.grand_total_limit, 1500);
/// assert!(rules.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeRules {
    /// Cart value thresholds.
    pub cart_value: CartValueRules,
    /// Distance surcharge parameters.
    pub distance: DistanceRules,
    /// Item-count surcharge parameters.
    pub items: ItemRules,
    /// Peak window and multiplier.
    pub peak: PeakWindow,
    /// Maximum fee ever charged.
    pub grand_total_limit: i64,
}

impl Default for FeeRules {
    fn default() -> Self {
        Self {
            cart_value: CartValueRules {
                minimum: CART_VALUE_MINIMUM,
                free_delivery: CART_VALUE_FREE,
            },
            distance: DistanceRules {
                minimum: DISTANCE_MINIMUM,
                step: DISTANCE_STEP,
                base_fee: BASE_DISTANCE_FEE,
                surcharge_rate: DISTANCE_SURCHARGE_RATE,
            },
            items: ItemRules {
                large_order_minimum: LARGE_ORDER_MINIMUM,
                large_order_maximum: LARGE_ORDER_MAXIMUM,
                bulk_fee: BULK_FEE,
                large_order_surcharge: LARGE_ORDER_SURCHARGE,
            },
            peak: PeakWindow::default(),
            grand_total_limit: GRAND_TOTAL_LIMIT,
        }
    }
}

impl FeeRules {
    /// Checks that the rule set is internally consistent.
    ///
    /// Returns `InvalidConfig` describing the first inconsistency found.
    pub fn validate(&self) -> FeeResult<()> {
        let non_negative = [
            ("cart_value.minimum", self.cart_value.minimum),
            ("cart_value.free_delivery", self.cart_value.free_delivery),
            ("distance.minimum", self.distance.minimum),
            ("distance.base_fee", self.distance.base_fee),
            ("distance.surcharge_rate", self.distance.surcharge_rate),
            ("items.large_order_minimum", self.items.large_order_minimum),
            ("items.bulk_fee", self.items.bulk_fee),
            ("items.large_order_surcharge", self.items.large_order_surcharge),
            ("grand_total_limit", self.grand_total_limit),
        ];
        if let Some((name, _)) = non_negative.iter().find(|(_, value)| *value < 0) {
            return Err(invalid(format!("{} must not be negative", name)));
        }

        if self.distance.step <= 0 {
            return Err(invalid("distance.step must be greater than zero"));
        }
        if self.items.large_order_minimum >= self.items.large_order_maximum {
            return Err(invalid(
                "items.large_order_minimum must be below items.large_order_maximum",
            ));
        }
        if self.peak.hour_start >= self.peak.hour_end || self.peak.hour_end > 24 {
            return Err(invalid(format!(
                "peak window [{}, {}) is not a valid hour range",
                self.peak.hour_start, self.peak.hour_end
            )));
        }
        if self.peak.multiplier.is_sign_negative() {
            return Err(invalid("peak.multiplier must not be negative"));
        }

        Ok(())
    }
}

fn invalid(message: impl Into<String>) -> FeeError {
    FeeError::InvalidConfig {
        message: message.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rules_are_valid() {
        assert!(FeeRules::default().validate().is_ok());
    }

    #[test]
    fn test_default_peak_multiplier_is_one_point_two() {
        assert_eq!(FeeRules::default().peak.multiplier.to_string(), "1.2");
    }

    #[test]
    fn test_zero_distance_step_is_rejected() {
        let mut rules = FeeRules::default();
        rules.distance.step = 0;
        assert_eq!(
            rules.validate(),
            Err(FeeError::InvalidConfig {
                message: "distance.step must be greater than zero".to_string()
            })
        );
    }

    #[test]
    fn test_inverted_item_bands_are_rejected() {
        let mut rules = FeeRules::default();
        rules.items.large_order_minimum = 13;
        rules.items.large_order_maximum = 4;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_peak_window_out_of_day_is_rejected() {
        let mut rules = FeeRules::default();
        rules.peak.hour_end = 25;
        assert!(rules.validate().is_err());

        rules.peak.hour_start = 19;
        rules.peak.hour_end = 15;
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_negative_fee_is_rejected() {
        let mut rules = FeeRules::default();
        rules.items.bulk_fee = -50;
        let err = rules.validate().unwrap_err();
        assert!(err.to_string().contains("items.bulk_fee"));
    }

    #[test]
    fn test_negative_multiplier_is_rejected() {
        let mut rules = FeeRules::default();
        rules.peak.multiplier = Decimal::new(-12, 1);
        assert!(rules.validate().is_err());
    }

    #[test]
    fn test_peak_window_contains_is_half_open() {
        let window = PeakWindow::default();
        assert!(!window.contains(Weekday::Fri, 14));
        assert!(window.contains(Weekday::Fri, 15));
        assert!(window.contains(Weekday::Fri, 18));
        assert!(!window.contains(Weekday::Fri, 19));
        assert!(!window.contains(Weekday::Thu, 16));
    }
}
