//! Distance surcharge calculation.
//!
//! Every delivery pays the base fee. Distance beyond the minimum is charged per
//! started step, so a partial final step is charged as a full one.

use crate::config::DistanceRules;
use crate::error::{FeeError, FeeResult};
use crate::models::ensure_positive;

/// Calculates the distance surcharge, including the base delivery fee.
///
/// # Errors
///
/// Returns `InvalidArgument` if `delivery_distance` is zero or negative, and
/// `InvalidConfig` if the rules carry a non-positive step.
///
/// # Examples
///
/// ```
/// use delivery_fee_calculator::calculation::calculate_distance_surcharge;
/// use delivery_fee_calculator::config::FeeRules;
///
/// let rules = FeeRules::default();
/// assert_eq!(calculate_distance_surcharge(1000, &rules.distance).unwrap(), 200);
/// assert_eq!(calculate_distance_surcharge(1499, &rules.distance).unwrap(), 300);
/// assert_eq!(calculate_distance_surcharge(1501, &rules.distance).unwrap(), 400);
/// ```
pub fn calculate_distance_surcharge(
    delivery_distance: i64,
    rules: &DistanceRules,
) -> FeeResult<i64> {
    ensure_positive("delivery_distance", delivery_distance)?;

    if delivery_distance <= rules.minimum {
        return Ok(rules.base_fee);
    }

    if rules.step <= 0 {
        return Err(FeeError::InvalidConfig {
            message: "distance.step must be greater than zero".to_string(),
        });
    }

    let steps = distance_steps(delivery_distance - rules.minimum, rules.step);
    Ok(rules
        .base_fee
        .saturating_add(steps.saturating_mul(rules.surcharge_rate)))
}

/// Number of started steps needed to cover `excess` (ceiling division).
fn distance_steps(excess: i64, step: i64) -> i64 {
    let full_steps = excess / step;
    if excess % step != 0 {
        full_steps + 1
    } else {
        full_steps
    }
}
