//! Order model.
//!
//! This module defines the validated [`Order`] that the fee calculation
//! consumes.

use serde::Serialize;

use crate::error::{FeeError, FeeResult};

/// An order whose delivery fee is to be calculated.
///
/// All numeric fields are guaranteed strictly positive once constructed
/// through [`Order::new`]. The time is kept as the caller supplied it; it is
/// parsed during the peak-time step so that a malformed timestamp surfaces as
/// `InvalidFormat`.
///
/// # Examples
///
/// ```
/// use delivery_fee_calculator::models::Order;
///
/// let order = Order::new(790, 2235, 4, "2024-01-15T15:00:00Z").unwrap();
/// assert_eq!(order.cart_value(), 790);
///
/// assert!(Order::new(0, 2235, 4, "2024-01-15T15:00:00Z").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    cart_value: i64,
    delivery_distance: i64,
    number_of_items: i64,
    time: String,
}

impl Order {
    /// Creates an order, rejecting any non-positive numeric input.
    ///
    /// Inputs are checked in the order cart value, delivery distance, number
    /// of items; the first offending one is reported.
    pub fn new(
        cart_value: i64,
        delivery_distance: i64,
        number_of_items: i64,
        time: impl Into<String>,
    ) -> FeeResult<Self> {
        ensure_positive("cart_value", cart_value)?;
        ensure_positive("delivery_distance", delivery_distance)?;
        ensure_positive("number_of_items", number_of_items)?;

        Ok(Self {
            cart_value,
            delivery_distance,
            number_of_items,
            time: time.into(),
        })
    }

    /// Value of the shopping cart in cents.
    pub fn cart_value(&self) -> i64 {
        self.cart_value
    }

    /// Distance between the store and the customer in meters.
    pub fn delivery_distance(&self) -> i64 {
        self.delivery_distance
    }

    /// Number of items in the cart.
    pub fn number_of_items(&self) -> i64 {
        self.number_of_items
    }

    /// Order time as supplied, expected as `YYYY-MM-DDTHH:MM:SSZ`.
    pub fn time(&self) -> &str {
        &self.time
    }
}

/// Rejects zero and negative values for the named input.
pub(crate) fn ensure_positive(field: &str, value: i64) -> FeeResult<i64> {
    if value <= 0 {
        return Err(FeeError::not_positive(field));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_accepts_positive_inputs() {
        let order = Order::new(790, 2235, 4, "2024-01-15T15:00:00Z").unwrap();
        assert_eq!(order.cart_value(), 790);
        assert_eq!(order.delivery_distance(), 2235);
        assert_eq!(order.number_of_items(), 4);
        assert_eq!(order.time(), "2024-01-15T15:00:00Z");
    }

    #[test]
    fn test_new_rejects_zero_cart_value() {
        let err = Order::new(0, 2235, 4, "2024-01-15T15:00:00Z").unwrap_err();
        assert_eq!(err, FeeError::not_positive("cart_value"));
    }

    #[test]
    fn test_new_rejects_negative_distance() {
        let err = Order::new(790, -1000, 4, "2024-01-15T15:00:00Z").unwrap_err();
        assert_eq!(err, FeeError::not_positive("delivery_distance"));
    }

    #[test]
    fn test_new_rejects_zero_items() {
        let err = Order::new(790, 2235, 0, "2024-01-15T15:00:00Z").unwrap_err();
        assert_eq!(err, FeeError::not_positive("number_of_items"));
    }

    #[test]
    fn test_first_invalid_field_is_reported() {
        let err = Order::new(-1, -1, -1, "2024-01-15T15:00:00Z").unwrap_err();
        assert_eq!(err, FeeError::not_positive("cart_value"));
    }

    #[test]
    fn test_time_is_not_validated_at_construction() {
        assert!(Order::new(790, 2235, 4, "not a time").is_ok());
    }
}
