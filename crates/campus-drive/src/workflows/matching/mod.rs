//! Vehicle match scoring and ranking against a student's budget and financing preferences.

mod config;
pub mod domain;
mod ranking;
mod rules;

#[cfg(test)]
mod tests;

pub use config::MatchWeights;
pub use domain::{FinancialPreferences, FinancingMode, PreferencesError, Profile, ProfilePatch};
pub use ranking::{rank_vehicles, suggested_vehicles, RankedVehicle, SUGGESTION_THRESHOLD};

use crate::workflows::catalog::{Vehicle, VehicleId};
use serde::{Deserialize, Serialize};

/// Stateless scorer that applies the rubric weights to a vehicle.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    weights: MatchWeights,
}

impl MatchEngine {
    pub fn new(weights: MatchWeights) -> Self {
        Self { weights }
    }

    pub fn weights(&self) -> &MatchWeights {
        &self.weights
    }

    pub fn score(
        &self,
        vehicle: &Vehicle,
        profile: &Profile,
        preferences: Option<&FinancialPreferences>,
    ) -> MatchOutcome {
        let (components, score) =
            rules::score_vehicle(vehicle, profile, preferences, &self.weights);

        MatchOutcome {
            vehicle_id: vehicle.id.clone(),
            score,
            components,
        }
    }
}

/// Match score in `1..=100` using the default rubric.
pub fn compute_match_score(
    vehicle: &Vehicle,
    profile: &Profile,
    preferences: Option<&FinancialPreferences>,
) -> u8 {
    MatchEngine::default()
        .score(vehicle, profile, preferences)
        .score
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchFactor {
    MonthlyPayment,
    UpfrontCost,
    CreditEstimate,
    BudgetHeadroom,
}

/// Discrete contribution to a match score, kept for transparent breakdowns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: MatchFactor,
    pub score: f64,
    pub weight: f64,
    pub notes: String,
}

impl ScoreComponent {
    pub fn contribution(&self) -> f64 {
        self.score * self.weight
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub vehicle_id: VehicleId,
    pub score: u8,
    pub components: Vec<ScoreComponent>,
}

impl MatchOutcome {
    pub fn component(&self, factor: MatchFactor) -> Option<&ScoreComponent> {
        self.components
            .iter()
            .find(|component| component.factor == factor)
    }
}
