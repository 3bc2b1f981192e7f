//! Final delivery fee composition.
//!
//! The fee is composed in a fixed order:
//! 1. subtotal = cart value + distance + item surcharges
//! 2. peak adjustment of the subtotal
//! 3. free delivery overrides everything for large carts
//! 4. otherwise the adjusted total is capped at the grand total limit

use serde_json::json;
use tracing::debug;

use crate::config::FeeRules;
use crate::error::FeeResult;
use crate::models::{FeeBreakdown, FeeStep, Order};

use super::{
    apply_peak_multiplier, calculate_distance_surcharge, calculate_item_surcharge,
    cart_value_surcharge, is_peak_time, parse_order_time,
};

/// Computes the delivery fee for an order, in cents.
///
/// The result is always within `[0, grand_total_limit]`, and exactly 0 when
/// the cart value reaches the free-delivery threshold.
///
/// # Errors
///
/// Returns `InvalidArgument` for a non-positive numeric input, or
/// `InvalidFormat` if the order time is malformed. Both are reported even for
/// carts that would qualify for free delivery.
///
/// # Examples
///
/// ```
/// use delivery_fee_calculator::calculation::compute_fee;
/// use delivery_fee_calculator::config::FeeRules;
/// use delivery_fee_calculator::models::Order;
///
/// let rules = FeeRules::default();
/// let order = Order::new(790, 2235, 4, "2024-01-15T15:00:00Z").unwrap();
/// assert_eq!(compute_fee(&order, &rules).unwrap(), 710);
///
/// let friday_rush = Order::new(790, 2235, 4, "2024-01-19T15:00:00Z").unwrap();
/// assert_eq!(compute_fee(&friday_rush, &rules).unwrap(), 852);
/// ```
pub fn compute_fee(order: &Order, rules: &FeeRules) -> FeeResult<u64> {
    calculate_fee_breakdown(order, rules).map(|breakdown| breakdown.delivery_fee)
}

/// Computes the delivery fee together with every intermediate value.
pub fn calculate_fee_breakdown(order: &Order, rules: &FeeRules) -> FeeResult<FeeBreakdown> {
    let mut steps = Vec::with_capacity(5);

    let cart_surcharge = cart_value_surcharge(order.cart_value(), &rules.cart_value)?;
    push_step(
        &mut steps,
        "cart_value_surcharge",
        "Small Order Surcharge",
        json!({ "cart_value": order.cart_value(), "minimum": rules.cart_value.minimum }),
        json!({ "surcharge": cart_surcharge }),
        if cart_surcharge > 0 {
            format!(
                "Cart value {} is below minimum {}: surcharge {}",
                order.cart_value(),
                rules.cart_value.minimum,
                cart_surcharge
            )
        } else {
            format!(
                "Cart value {} meets minimum {}: no surcharge",
                order.cart_value(),
                rules.cart_value.minimum
            )
        },
    );

    let distance_surcharge =
        calculate_distance_surcharge(order.delivery_distance(), &rules.distance)?;
    push_step(
        &mut steps,
        "distance_surcharge",
        "Distance Surcharge",
        json!({
            "delivery_distance": order.delivery_distance(),
            "minimum": rules.distance.minimum,
            "step": rules.distance.step,
        }),
        json!({ "surcharge": distance_surcharge }),
        format!(
            "Distance {}m with base fee {}: surcharge {}",
            order.delivery_distance(),
            rules.distance.base_fee,
            distance_surcharge
        ),
    );

    let item_surcharge = calculate_item_surcharge(order.number_of_items(), &rules.items)?;
    push_step(
        &mut steps,
        "item_surcharge",
        "Item Count Surcharge",
        json!({
            "number_of_items": order.number_of_items(),
            "large_order_minimum": rules.items.large_order_minimum,
            "large_order_maximum": rules.items.large_order_maximum,
        }),
        json!({ "surcharge": item_surcharge }),
        format!(
            "{} items: surcharge {}",
            order.number_of_items(),
            item_surcharge
        ),
    );

    let subtotal = cart_surcharge
        .saturating_add(distance_surcharge)
        .saturating_add(item_surcharge);

    let order_time = parse_order_time(order.time())?;
    let peak_applied = is_peak_time(order_time, &rules.peak);
    let adjusted_total = if peak_applied {
        apply_peak_multiplier(subtotal, rules.peak.multiplier)
    } else {
        subtotal
    };
    push_step(
        &mut steps,
        "peak_adjustment",
        "Peak Time Adjustment",
        json!({
            "time": order.time(),
            "subtotal": subtotal,
            "multiplier": rules.peak.multiplier.normalize().to_string(),
        }),
        json!({ "peak_applied": peak_applied, "adjusted_total": adjusted_total }),
        if peak_applied {
            format!(
                "Order at {} is inside the {} peak window: {} x {} = {}",
                order_time,
                rules.peak.day,
                subtotal,
                rules.peak.multiplier.normalize(),
                adjusted_total
            )
        } else {
            format!("Order at {} is outside the peak window", order_time)
        },
    );

    let free_delivery = order.cart_value() >= rules.cart_value.free_delivery;
    let capped = !free_delivery && adjusted_total > rules.grand_total_limit;
    let fee = if free_delivery {
        0
    } else {
        adjusted_total.min(rules.grand_total_limit)
    };
    let delivery_fee = u64::try_from(fee).unwrap_or(0);
    push_step(
        &mut steps,
        "final_cost",
        "Free Delivery and Fee Cap",
        json!({
            "cart_value": order.cart_value(),
            "free_delivery_threshold": rules.cart_value.free_delivery,
            "adjusted_total": adjusted_total,
            "grand_total_limit": rules.grand_total_limit,
        }),
        json!({ "delivery_fee": delivery_fee, "free_delivery": free_delivery, "capped": capped }),
        if free_delivery {
            format!(
                "Cart value {} reaches free delivery threshold {}",
                order.cart_value(),
                rules.cart_value.free_delivery
            )
        } else if capped {
            format!(
                "Adjusted total {} exceeds limit {}: fee capped",
                adjusted_total, rules.grand_total_limit
            )
        } else {
            format!("Fee is the adjusted total {}", adjusted_total)
        },
    );

    debug!(
        subtotal,
        adjusted_total,
        peak_applied,
        free_delivery,
        capped,
        delivery_fee,
        "Delivery fee composed"
    );

    Ok(FeeBreakdown {
        cart_value_surcharge: cart_surcharge,
        distance_surcharge,
        item_surcharge,
        subtotal,
        peak_applied,
        adjusted_total,
        free_delivery,
        capped,
        delivery_fee,
        steps,
    })
}

fn push_step(
    steps: &mut Vec<FeeStep>,
    rule_id: &str,
    rule_name: &str,
    input: serde_json::Value,
    output: serde_json::Value,
    reasoning: String,
) {
    let step_number = steps.len() as u32 + 1;
    steps.push(FeeStep {
        step_number,
        rule_id: rule_id.to_string(),
        rule_name: rule_name.to_string(),
        input,
        output,
        reasoning,
    });
}

/// Fee calculator owning an immutable rule set.
///
/// Cheap to share: wrap it in an `Arc` and call it from any number of tasks.
///
/// # Examples
///
/// ```
/// use delivery_fee_calculator::calculation::FeeCalculator;
/// use delivery_fee_calculator::models::Order;
///
/// let calculator = FeeCalculator::default();
/// let order = Order::new(20000, 2235, 4, "2024-01-15T15:00:00Z").unwrap();
/// assert_eq!(calculator.compute_fee(&order).unwrap(), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct FeeCalculator {
    rules: FeeRules,
}

impl FeeCalculator {
    /// Creates a calculator after validating the rule set.
    pub fn new(rules: FeeRules) -> FeeResult<Self> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Returns the rules this calculator applies.
    pub fn rules(&self) -> &FeeRules {
        &self.rules
    }

    /// Computes the delivery fee for an order. See [`compute_fee`].
    pub fn compute_fee(&self, order: &Order) -> FeeResult<u64> {
        compute_fee(order, &self.rules)
    }

    /// Computes the fee with its breakdown. See [`calculate_fee_breakdown`].
    pub fn breakdown(&self, order: &Order) -> FeeResult<FeeBreakdown> {
        calculate_fee_breakdown(order, &self.rules)
    }
}
