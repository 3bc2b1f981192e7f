//! Small-order surcharge calculation.

use crate::config::CartValueRules;
use crate::error::FeeResult;
use crate::models::ensure_positive;

/// Calculates the surcharge for carts below the minimum cart value.
///
/// The surcharge is the shortfall between the cart value and the minimum;
/// carts at or above the minimum pay nothing.
///
/// # Errors
///
/// Returns `InvalidArgument` if `cart_value` is zero or negative.
///
/// # Examples
///
/// ```
/// use delivery_fee_calculator::calculation::cart_value_surcharge;
/// use delivery_fee_calculator::config::FeeRules;
///
/// let rules = FeeRules::default();
/// assert_eq!(cart_value_surcharge(790, &rules.cart_value).unwrap(), 210);
/// assert_eq!(cart_value_surcharge(1000, &rules.cart_value).unwrap(), 0);
/// ```
pub fn cart_value_surcharge(cart_value: i64, rules: &CartValueRules) -> FeeResult<i64> {
    ensure_positive("cart_value", cart_value)?;

    if cart_value < rules.minimum {
        Ok(rules.minimum - cart_value)
    } else {
        Ok(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::FeeRules;
    use crate::error::FeeError;
    use proptest::prelude::*;

    fn rules() -> CartValueRules {
        FeeRules::default().cart_value
    }

    #[test]
    fn test_zero_or_negative_cart_value_is_rejected() {
        for value in [0, -1000] {
            assert!(matches!(
                cart_value_surcharge(value, &rules()),
                Err(FeeError::InvalidArgument { ref field, .. }) if field == "cart_value"
            ));
        }
    }

    #[test]
    fn test_cart_below_minimum_pays_shortfall() {
        assert_eq!(cart_value_surcharge(500, &rules()).unwrap(), 500);
        assert_eq!(cart_value_surcharge(790, &rules()).unwrap(), 210);
        assert_eq!(cart_value_surcharge(999, &rules()).unwrap(), 1);
    }

    #[test]
    fn test_cart_at_or_above_minimum_pays_nothing() {
        assert_eq!(cart_value_surcharge(1000, &rules()).unwrap(), 0);
        assert_eq!(cart_value_surcharge(5000, &rules()).unwrap(), 0);
        assert_eq!(cart_value_surcharge(30000, &rules()).unwrap(), 0);
    }

    proptest! {
        #[test]
        fn prop_surcharge_is_clamped_shortfall(cart_value in 1i64..1_000_000) {
            let expected = (rules().minimum - cart_value).max(0);
            prop_assert_eq!(cart_value_surcharge(cart_value, &rules()).unwrap(), expected);
        }
    }
}
