//! Fee breakdown models.
//!
//! This module contains the [`FeeBreakdown`] type that records how a single
//! delivery fee was composed, step by step. It lives only as long as the
//! request that produced it.

use serde::{Deserialize, Serialize};

/// A single step in a fee calculation.
///
/// Each step captures the input, output, and reasoning for one rule.
///
/// # Example
///
/// ```
/// use delivery_fee_calculator::models::FeeStep;
///
/// let step = FeeStep {
///     step_number: 1,
///     rule_id: "cart_value_surcharge".to_string(),
///     rule_name: "Small Order Surcharge".to_string(),
///     input: serde_json::json!({ "cart_value": 790 }),
///     output: serde_json::json!({ "surcharge": 210 }),
///     reasoning: "Cart value 790 is below minimum 1000".to_string(),
/// };
/// assert_eq!(step.rule_id, "cart_value_surcharge");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// How a delivery fee was composed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeBreakdown {
    /// Small-order surcharge.
    pub cart_value_surcharge: i64,
    /// Distance surcharge, including the base fee.
    pub distance_surcharge: i64,
    /// Item-count surcharge.
    pub item_surcharge: i64,
    /// Sum of the three surcharges.
    pub subtotal: i64,
    /// Whether the order fell inside the peak window.
    pub peak_applied: bool,
    /// Subtotal after the peak adjustment.
    pub adjusted_total: i64,
    /// Whether the free-delivery override applied.
    pub free_delivery: bool,
    /// Whether the fee was reduced to the grand total limit.
    pub capped: bool,
    /// The fee charged, in cents.
    pub delivery_fee: u64,
    /// The ordered calculation steps.
    pub steps: Vec<FeeStep>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_sample_breakdown() -> FeeBreakdown {
        FeeBreakdown {
            cart_value_surcharge: 210,
            distance_surcharge: 500,
            item_surcharge: 0,
            subtotal: 710,
            peak_applied: true,
            adjusted_total: 852,
            free_delivery: false,
            capped: false,
            delivery_fee: 852,
            steps: vec![FeeStep {
                step_number: 1,
                rule_id: "cart_value_surcharge".to_string(),
                rule_name: "Small Order Surcharge".to_string(),
                input: serde_json::json!({ "cart_value": 790 }),
                output: serde_json::json!({ "surcharge": 210 }),
                reasoning: "Cart value 790 is below minimum 1000".to_string(),
            }],
        }
    }

    #[test]
    fn test_breakdown_serializes_with_snake_case_fields() {
        let json = serde_json::to_value(create_sample_breakdown()).unwrap();
        assert_eq!(json["delivery_fee"], 852);
        assert_eq!(json["peak_applied"], true);
        assert_eq!(json["steps"][0]["rule_id"], "cart_value_surcharge");
        assert_eq!(json["steps"][0]["output"]["surcharge"], 210);
    }

    #[test]
    fn test_breakdown_deserializes_from_json() {
        let json = serde_json::to_string(&create_sample_breakdown()).unwrap();
        let breakdown: FeeBreakdown = serde_json::from_str(&json).unwrap();
        assert_eq!(breakdown.subtotal, 710);
        assert_eq!(breakdown.steps.len(), 1);
    }
}
