//! Peak-time detection and adjustment.
//!
//! Order times are accepted only in the strict UTC form
//! `YYYY-MM-DDTHH:MM:SSZ`. Anything else, explicit offsets included, is
//! rejected rather than converted.

use chrono::{DateTime, Datelike, NaiveDateTime, Timelike, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::config::PeakWindow;
use crate::error::{FeeError, FeeResult};

/// The human-readable pattern order times must follow.
pub const ORDER_TIME_PATTERN: &str = "YYYY-MM-DDTHH:MM:SSZ";

const ORDER_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

// '0' marks a digit position, everything else must match literally.
const ORDER_TIME_SHAPE: &[u8; 20] = b"0000-00-00T00:00:00Z";

/// Parses an order time as an absolute UTC instant.
///
/// # Errors
///
/// Returns `InvalidFormat` if `time` does not have the exact shape
/// `YYYY-MM-DDTHH:MM:SSZ` or names a date/time that does not exist.
///
/// # Examples
///
/// ```
/// use delivery_fee_calculator::calculation::parse_order_time;
/// use chrono::{Datelike, Timelike, Weekday};
///
/// let time = parse_order_time("2024-01-19T15:00:00Z").unwrap();
/// assert_eq!(time.weekday(), Weekday::Fri);
/// assert_eq!(time.hour(), 15);
///
/// assert!(parse_order_time("2024-01-19T15:00:00").is_err());
/// assert!(parse_order_time("2024-01-19T15:00:00+02:00").is_err());
/// ```
pub fn parse_order_time(time: &str) -> FeeResult<DateTime<Utc>> {
    if !has_order_time_shape(time) {
        return Err(invalid_format(time));
    }

    NaiveDateTime::parse_from_str(time, ORDER_TIME_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| invalid_format(time))
}

fn has_order_time_shape(time: &str) -> bool {
    let bytes = time.as_bytes();
    bytes.len() == ORDER_TIME_SHAPE.len()
        && ORDER_TIME_SHAPE
            .iter()
            .zip(bytes)
            .all(|(&expected, &actual)| match expected {
                b'0' => actual.is_ascii_digit(),
                literal => actual == literal,
            })
}

fn invalid_format(time: &str) -> FeeError {
    FeeError::InvalidFormat {
        value: time.to_string(),
        expected: ORDER_TIME_PATTERN.to_string(),
    }
}

/// Returns true if the instant falls inside the peak window.
pub fn is_peak_time(order_time: DateTime<Utc>, window: &PeakWindow) -> bool {
    window.contains(order_time.weekday(), order_time.hour())
}

/// Multiplies a subtotal, rounding to whole cents half away from zero.
///
/// Results beyond `i64::MAX` saturate.
pub fn apply_peak_multiplier(subtotal: i64, multiplier: Decimal) -> i64 {
    Decimal::from(subtotal)
        .checked_mul(multiplier)
        .map(|total| total.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero))
        .and_then(|total| total.to_i64())
        .unwrap_or(i64::MAX)
}

/// Applies the peak multiplier to `subtotal` when `time` is inside the window.
///
/// # Errors
///
/// Returns `InvalidFormat` if `time` cannot be parsed.
///
/// # Examples
///
/// ```
/// use delivery_fee_calculator::calculation::peak_hour_surcharge;
/// use delivery_fee_calculator::config::PeakWindow;
///
/// let window = PeakWindow::default();
/// // Monday: unchanged
/// assert_eq!(peak_hour_surcharge("2024-01-15T15:00:00Z", 1000, &window).unwrap(), 1000);
/// // Friday 15:00 UTC: multiplied
/// assert_eq!(peak_hour_surcharge("2024-01-19T15:00:00Z", 1000, &window).unwrap(), 1200);
/// // Friday 19:00 UTC: window has ended
/// assert_eq!(peak_hour_surcharge("2024-01-19T19:00:00Z", 1000, &window).unwrap(), 1000);
/// ```
pub fn peak_hour_surcharge(time: &str, subtotal: i64, window: &PeakWindow) -> FeeResult<i64> {
    let order_time = parse_order_time(time)?;

    if is_peak_time(order_time, window) {
        Ok(apply_peak_multiplier(subtotal, window.multiplier))
    } else {
        Ok(subtotal)
    }
}
