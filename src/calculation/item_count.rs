//! Item-count surcharge calculation.
//!
//! Three bands apply:
//! - up to `large_order_minimum` items: no surcharge
//! - above that: `bulk_fee` per item beyond `large_order_minimum`
//! - from `large_order_maximum` items: the same bulk term plus a one-off
//!   `large_order_surcharge`

use crate::config::ItemRules;
use crate::error::FeeResult;
use crate::models::ensure_positive;

/// Calculates the surcharge for the number of items in the order.
///
/// # Errors
///
/// Returns `InvalidArgument` if `number_of_items` is zero or negative.
///
/// # Examples
///
/// ```
/// use delivery_fee_calculator::calculation::calculate_item_surcharge;
/// use delivery_fee_calculator::config::FeeRules;
///
/// let rules = FeeRules::default();
/// assert_eq!(calculate_item_surcharge(4, &rules.items).unwrap(), 0);
/// assert_eq!(calculate_item_surcharge(5, &rules.items).unwrap(), 50);
/// // 9 * 50 + 120
/// assert_eq!(calculate_item_surcharge(13, &rules.items).unwrap(), 570);
/// ```
pub fn calculate_item_surcharge(number_of_items: i64, rules: &ItemRules) -> FeeResult<i64> {
    ensure_positive("number_of_items", number_of_items)?;

    if number_of_items <= rules.large_order_minimum {
        return Ok(0);
    }

    let bulk = (number_of_items - rules.large_order_minimum).saturating_mul(rules.bulk_fee);
    if number_of_items >= rules.large_order_maximum {
        Ok(bulk.saturating_add(rules.large_order_surcharge))
    } else {
        Ok(bulk)
    }
}
