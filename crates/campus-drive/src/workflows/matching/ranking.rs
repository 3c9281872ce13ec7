use serde::Serialize;

use super::domain::{FinancialPreferences, Profile};
use super::{MatchEngine, MatchOutcome};
use crate::workflows::catalog::Vehicle;

/// Minimum score for a vehicle to be suggested as a savings goal target.
pub const SUGGESTION_THRESHOLD: u8 = 80;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVehicle<'a> {
    pub vehicle: &'a Vehicle,
    pub score: u8,
    #[serde(skip)]
    pub outcome: MatchOutcome,
}

impl MatchEngine {
    /// Score every vehicle and order by descending score. Ties keep catalog order.
    pub fn rank<'a>(
        &self,
        catalog: &'a [Vehicle],
        profile: &Profile,
        preferences: Option<&FinancialPreferences>,
    ) -> Vec<RankedVehicle<'a>> {
        let mut ranked: Vec<RankedVehicle<'a>> = catalog
            .iter()
            .map(|vehicle| {
                let outcome = self.score(vehicle, profile, preferences);
                RankedVehicle {
                    vehicle,
                    score: outcome.score,
                    outcome,
                }
            })
            .collect();

        // `sort_by` is stable.
        ranked.sort_by(|a, b| b.score.cmp(&a.score));
        ranked
    }
}

/// [`MatchEngine::rank`] with the default rubric.
pub fn rank_vehicles<'a>(
    catalog: &'a [Vehicle],
    profile: &Profile,
    preferences: Option<&FinancialPreferences>,
) -> Vec<RankedVehicle<'a>> {
    MatchEngine::default().rank(catalog, profile, preferences)
}

/// Top `limit` ranked vehicles scoring at least [`SUGGESTION_THRESHOLD`].
pub fn suggested_vehicles<'r, 'a>(
    ranked: &'r [RankedVehicle<'a>],
    limit: usize,
) -> Vec<&'r RankedVehicle<'a>> {
    ranked
        .iter()
        .filter(|entry| entry.score >= SUGGESTION_THRESHOLD)
        .take(limit)
        .collect()
}
