//! Response types for the delivery fee API.
//!
//! This module defines the success and error response structures and the
//! mapping from calculation errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::FeeError;

/// Successful response body for `/calculate-delivery-fee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryFeeResponse {
    /// The calculated delivery fee in cents.
    pub delivery_fee: u64,
}

/// Static API metadata returned by `GET /`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiInfo {
    /// The API name.
    pub name: String,
    /// The API version.
    pub version: String,
    /// What the API does.
    pub description: String,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            name: "Delivery Fee Calculator API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            description: "This API calculates the delivery fee based on cart value, distance, \
                          number of items, and time."
                .to_string(),
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// A 400 response carrying the given error body.
    pub fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<FeeError> for ApiErrorResponse {
    fn from(error: FeeError) -> Self {
        let message = error.to_string();
        match error {
            FeeError::InvalidArgument { field, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_ARGUMENT",
                    message,
                    format!("'{}' must be a positive integer", field),
                ),
            ),
            FeeError::InvalidFormat { expected, .. } => ApiErrorResponse::bad_request(
                ApiError::with_details(
                    "INVALID_FORMAT",
                    message,
                    format!("'time' must be a UTC timestamp formatted as {}", expected),
                ),
            ),
            FeeError::ConfigNotFound { .. }
            | FeeError::ConfigParseError { .. }
            | FeeError::InvalidConfig { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TEST_ERROR", "Test message");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TEST_ERROR\""));
        assert!(json.contains("\"message\":\"Test message\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn test_api_error_with_details_serialization() {
        let error = ApiError::with_details("TEST_ERROR", "Test message", "Some details");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"details\":\"Some details\""));
    }

    #[test]
    fn test_delivery_fee_response_shape() {
        let json = serde_json::to_string(&DeliveryFeeResponse { delivery_fee: 710 }).unwrap();
        assert_eq!(json, r#"{"delivery_fee":710}"#);
    }

    #[test]
    fn test_api_info_defaults() {
        let info = ApiInfo::default();
        assert_eq!(info.name, "Delivery Fee Calculator API");
        assert_eq!(info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.description.contains("delivery fee"));
    }

    #[test]
    fn test_invalid_argument_maps_to_bad_request() {
        let api_error: ApiErrorResponse = FeeError::not_positive("cart_value").into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_ARGUMENT");
        assert!(api_error.error.message.contains("cart_value"));
    }

    #[test]
    fn test_invalid_format_maps_to_bad_request() {
        let api_error: ApiErrorResponse = FeeError::InvalidFormat {
            value: "2024-01-15T15:00:00".to_string(),
            expected: "YYYY-MM-DDTHH:MM:SSZ".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::BAD_REQUEST);
        assert_eq!(api_error.error.code, "INVALID_FORMAT");
    }

    #[test]
    fn test_config_errors_map_to_server_error() {
        let api_error: ApiErrorResponse = FeeError::InvalidConfig {
            message: "bad".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }
}
