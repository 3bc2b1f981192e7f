//! HTTP request handlers for the delivery fee API.
//!
//! This module contains the router and the handler functions for all API
//! endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::Order;

use super::request::DeliveryFeeRequest;
use super::response::{ApiError, ApiErrorResponse, DeliveryFeeResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
///
/// Both `/calculate-delivery-fee` and `/calculate-delivery-fee/` are served so
/// clients that append a trailing slash are not redirected.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/calculate-delivery-fee", post(calculate_delivery_fee_handler))
        .route("/calculate-delivery-fee/", post(calculate_delivery_fee_handler))
        .layer(create_cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Every origin, method and header is allowed.
fn create_cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Handler for GET / endpoint.
async fn root_handler(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.info().clone())
}

/// Handler for POST /calculate-delivery-fee endpoint.
///
/// Accepts an order and returns the calculated delivery fee.
async fn calculate_delivery_fee_handler(
    State(state): State<AppState>,
    payload: Result<Json<DeliveryFeeRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing delivery fee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => {
            let error = rejection_to_error(rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                error = %error.message,
                "Rejected request body"
            );
            return json_response(ApiErrorResponse::bad_request(error));
        }
    };

    let start_time = Instant::now();
    let result = Order::try_from(request)
        .and_then(|order| state.calculator().breakdown(&order).map(|b| (order, b)));

    match result {
        Ok((order, breakdown)) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                cart_value = order.cart_value(),
                delivery_distance = order.delivery_distance(),
                number_of_items = order.number_of_items(),
                subtotal = breakdown.subtotal,
                peak_applied = breakdown.peak_applied,
                free_delivery = breakdown.free_delivery,
                capped = breakdown.capped,
                delivery_fee = breakdown.delivery_fee,
                duration_us = duration.as_micros(),
                "Delivery fee calculated"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(DeliveryFeeResponse {
                    delivery_fee: breakdown.delivery_fee,
                }),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Delivery fee calculation rejected"
            );
            json_response(err.into())
        }
    }
}

/// Maps a JSON extraction failure to an API error body.
fn rejection_to_error(rejection: JsonRejection) -> ApiError {
    match rejection {
        // Missing fields and non-integral or mistyped values land here
        JsonRejection::JsonDataError(err) => ApiError::validation_error(err.body_text()),
        JsonRejection::JsonSyntaxError(err) => {
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    }
}

fn json_response(api_error: ApiErrorResponse) -> Response {
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}
