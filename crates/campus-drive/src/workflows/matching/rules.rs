use super::config::MatchWeights;
use super::domain::{FinancialPreferences, FinancingMode, Profile};
use super::{MatchFactor, ScoreComponent};
use crate::workflows::catalog::Vehicle;

/// Resolved dollar figures the sub-scores are computed from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct PaymentSignals {
    pub mode: FinancingMode,
    pub target_monthly: f64,
    pub car_monthly: f64,
    pub upfront_budget: f64,
    pub expected_upfront: f64,
    pub credit_estimate: f64,
}

pub(crate) fn resolve_signals(
    vehicle: &Vehicle,
    profile: &Profile,
    preferences: Option<&FinancialPreferences>,
    weights: &MatchWeights,
) -> PaymentSignals {
    let mode = preferences.map(FinancialPreferences::mode).unwrap_or_default();

    let car_monthly = match mode {
        FinancingMode::Finance => vehicle.monthly_finance,
        FinancingMode::Lease => vehicle.monthly_lease,
    } as f64;

    let expected_upfront = match mode {
        FinancingMode::Finance => (vehicle.msrp as f64 * weights.finance_upfront_ratio)
            .round()
            .max(weights.minimum_finance_upfront),
        FinancingMode::Lease => weights.lease_upfront,
    };

    PaymentSignals {
        mode,
        target_monthly: target_monthly(profile, preferences, weights),
        car_monthly,
        upfront_budget: upfront_budget(profile, preferences, weights),
        expected_upfront,
        credit_estimate: profile
            .credit_score_estimate
            .map(f64::from)
            .unwrap_or(weights.credit_lower_bound),
    }
}

fn target_monthly(
    profile: &Profile,
    preferences: Option<&FinancialPreferences>,
    weights: &MatchWeights,
) -> f64 {
    let resolved = match preferences.map(FinancialPreferences::monthly_payment) {
        Some(explicit) if explicit > 0 => explicit,
        _ => profile.monthly_budget,
    };
    (resolved as f64).max(weights.minimum_target_monthly)
}

fn upfront_budget(
    profile: &Profile,
    preferences: Option<&FinancialPreferences>,
    weights: &MatchWeights,
) -> f64 {
    match preferences {
        Some(preferences) => preferences.upfront_budget() as f64,
        None => (profile.monthly_budget as f64 * weights.fallback_upfront_months)
            .round()
            .max(weights.minimum_fallback_upfront),
    }
}

pub(crate) fn payment_fit(signals: &PaymentSignals, weights: &MatchWeights) -> ScoreComponent {
    let gap = signals.car_monthly - signals.target_monthly;
    let score = if gap <= 0.0 {
        100.0
    } else {
        (100.0 - (gap / signals.target_monthly) * weights.overage_penalty)
            .clamp(weights.payment_floor, 100.0)
    };

    let notes = if gap <= 0.0 {
        format!(
            "{} payment ${:.0} fits the ${:.0} target",
            signals.mode.label(),
            signals.car_monthly,
            signals.target_monthly
        )
    } else {
        format!(
            "{} payment ${:.0} is ${:.0} over the ${:.0} target",
            signals.mode.label(),
            signals.car_monthly,
            gap,
            signals.target_monthly
        )
    };

    ScoreComponent {
        factor: MatchFactor::MonthlyPayment,
        score,
        weight: weights.payment_weight,
        notes,
    }
}

pub(crate) fn upfront_fit(signals: &PaymentSignals, weights: &MatchWeights) -> ScoreComponent {
    let gap = signals.expected_upfront - signals.upfront_budget;
    let score = if gap <= 0.0 {
        100.0
    } else {
        (100.0 - (gap / signals.expected_upfront) * 100.0).clamp(weights.upfront_floor, 100.0)
    };

    let notes = if gap <= 0.0 {
        format!(
            "${:.0} upfront covers the expected ${:.0}",
            signals.upfront_budget, signals.expected_upfront
        )
    } else {
        format!(
            "${:.0} upfront is ${:.0} short of the expected ${:.0}",
            signals.upfront_budget, gap, signals.expected_upfront
        )
    };

    ScoreComponent {
        factor: MatchFactor::UpfrontCost,
        score,
        weight: weights.upfront_weight,
        notes,
    }
}

pub(crate) fn credit_fit(signals: &PaymentSignals, weights: &MatchWeights) -> ScoreComponent {
    let span = weights.credit_upper_bound - weights.credit_lower_bound;
    let normalized = ((signals.credit_estimate - weights.credit_lower_bound) / span).clamp(0.0, 1.0);
    let score = (normalized * 100.0).clamp(weights.credit_floor, 100.0);

    ScoreComponent {
        factor: MatchFactor::CreditEstimate,
        score,
        weight: weights.credit_weight,
        notes: format!(
            "credit estimate {:.0} on a {:.0}-{:.0} scale",
            signals.credit_estimate, weights.credit_lower_bound, weights.credit_upper_bound
        ),
    }
}

/// Additive, unweighted bonus for vehicles comfortably under the monthly target.
pub(crate) fn headroom_bonus(signals: &PaymentSignals, weights: &MatchWeights) -> ScoreComponent {
    let headroom = (signals.target_monthly - signals.car_monthly).max(0.0);
    let score = ((headroom / signals.target_monthly) * weights.headroom_multiplier)
        .clamp(0.0, weights.headroom_cap);

    ScoreComponent {
        factor: MatchFactor::BudgetHeadroom,
        score,
        weight: 1.0,
        notes: format!("${:.0} of monthly headroom", headroom),
    }
}

pub(crate) fn score_vehicle(
    vehicle: &Vehicle,
    profile: &Profile,
    preferences: Option<&FinancialPreferences>,
    weights: &MatchWeights,
) -> (Vec<ScoreComponent>, u8) {
    let signals = resolve_signals(vehicle, profile, preferences, weights);

    let components = vec![
        payment_fit(&signals, weights),
        upfront_fit(&signals, weights),
        credit_fit(&signals, weights),
        headroom_bonus(&signals, weights),
    ];

    let weighted: f64 = components.iter().map(ScoreComponent::contribution).sum();
    let score = weighted.round().clamp(1.0, 100.0) as u8;

    (components, score)
}
