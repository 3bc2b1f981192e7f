//! Request types for the delivery fee API.
//!
//! This module defines the JSON request structure for the
//! `/calculate-delivery-fee` endpoint.

use serde::{Deserialize, Serialize};

use crate::error::FeeError;
use crate::models::Order;

/// Request body for the `/calculate-delivery-fee` endpoint.
///
/// Field types enforce integral numbers; positivity is checked when the
/// request is converted into an [`Order`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryFeeRequest {
    /// Value of the shopping cart in cents.
    pub cart_value: i64,
    /// Distance between the store and the customer in meters.
    pub delivery_distance: i64,
    /// Number of items in the cart.
    pub number_of_items: i64,
    /// Order time in UTC, `YYYY-MM-DDTHH:MM:SSZ`.
    pub time: String,
}

impl TryFrom<DeliveryFeeRequest> for Order {
    type Error = FeeError;

    fn try_from(req: DeliveryFeeRequest) -> Result<Self, Self::Error> {
        Order::new(
            req.cart_value,
            req.delivery_distance,
            req.number_of_items,
            req.time,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_delivery_fee_request() {
        let json = r#"{
            "cart_value": 790,
            "delivery_distance": 2235,
            "number_of_items": 4,
            "time": "2024-01-15T13:00:00Z"
        }"#;

        let request: DeliveryFeeRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.cart_value, 790);
        assert_eq!(request.delivery_distance, 2235);
        assert_eq!(request.number_of_items, 4);
        assert_eq!(request.time, "2024-01-15T13:00:00Z");
    }

    #[test]
    fn test_fractional_numbers_are_rejected() {
        let json = r#"{
            "cart_value": 790.5,
            "delivery_distance": 2235,
            "number_of_items": 4,
            "time": "2024-01-15T13:00:00Z"
        }"#;

        assert!(serde_json::from_str::<DeliveryFeeRequest>(json).is_err());
    }

    #[test]
    fn test_numeric_strings_are_rejected() {
        let json = r#"{
            "cart_value": "790",
            "delivery_distance": 2235,
            "number_of_items": 4,
            "time": "2024-01-15T13:00:00Z"
        }"#;

        assert!(serde_json::from_str::<DeliveryFeeRequest>(json).is_err());
    }

    #[test]
    fn test_order_conversion() {
        let req = DeliveryFeeRequest {
            cart_value: 790,
            delivery_distance: 2235,
            number_of_items: 4,
            time: "2024-01-15T13:00:00Z".to_string(),
        };

        let order = Order::try_from(req).unwrap();
        assert_eq!(order.cart_value(), 790);
        assert_eq!(order.time(), "2024-01-15T13:00:00Z");
    }

    #[test]
    fn test_order_conversion_rejects_negative_items() {
        let req = DeliveryFeeRequest {
            cart_value: 790,
            delivery_distance: 2235,
            number_of_items: -4,
            time: "2024-01-15T13:00:00Z".to_string(),
        };

        assert!(matches!(
            Order::try_from(req),
            Err(FeeError::InvalidArgument { .. })
        ));
    }
}
