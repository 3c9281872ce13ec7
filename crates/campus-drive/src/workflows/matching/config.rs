use serde::{Deserialize, Serialize};

/// Rubric weights and bounds for the match score.
///
/// The three weights sum to 0.94; the headroom bonus (up to `headroom_cap`) is added on top,
/// so an ideal vehicle can exceed 100 before the final clamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchWeights {
    pub payment_weight: f64,
    pub upfront_weight: f64,
    pub credit_weight: f64,
    pub minimum_target_monthly: f64,
    pub overage_penalty: f64,
    pub payment_floor: f64,
    pub upfront_floor: f64,
    pub finance_upfront_ratio: f64,
    pub minimum_finance_upfront: f64,
    pub lease_upfront: f64,
    pub fallback_upfront_months: f64,
    pub minimum_fallback_upfront: f64,
    pub credit_lower_bound: f64,
    pub credit_upper_bound: f64,
    pub credit_floor: f64,
    pub headroom_multiplier: f64,
    pub headroom_cap: f64,
}

impl Default for MatchWeights {
    fn default() -> Self {
        Self {
            payment_weight: 0.58,
            upfront_weight: 0.24,
            credit_weight: 0.12,
            minimum_target_monthly: 200.0,
            overage_penalty: 120.0,
            payment_floor: 8.0,
            upfront_floor: 20.0,
            finance_upfront_ratio: 0.10,
            minimum_finance_upfront: 1500.0,
            lease_upfront: 2000.0,
            fallback_upfront_months: 2.5,
            minimum_fallback_upfront: 1500.0,
            credit_lower_bound: 580.0,
            credit_upper_bound: 800.0,
            credit_floor: 10.0,
            headroom_multiplier: 18.0,
            headroom_cap: 10.0,
        }
    }
}
