use serde::{Deserialize, Serialize};

use crate::workflows::catalog::VehicleId;

/// Most recent swipes kept in history.
pub const SWIPE_HISTORY_LIMIT: usize = 20;
/// Most saved vehicles kept.
pub const SAVED_VEHICLE_LIMIT: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDecision {
    Like,
    Skip,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwipeRecord {
    pub vehicle_id: VehicleId,
    pub decision: SwipeDecision,
    pub match_score: u8,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

/// Newest-first swipe log capped at [`SWIPE_HISTORY_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SwipeHistory(Vec<SwipeRecord>);

impl SwipeHistory {
    pub fn records(&self) -> &[SwipeRecord] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn likes(&self) -> usize {
        self.0
            .iter()
            .filter(|record| record.decision == SwipeDecision::Like)
            .count()
    }

    fn push_front(&mut self, record: SwipeRecord) {
        self.0.insert(0, record);
        self.0.truncate(SWIPE_HISTORY_LIMIT);
    }
}

/// Deduplicated, most-recent-first vehicle ids capped at [`SAVED_VEHICLE_LIMIT`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedVehicles(Vec<VehicleId>);

impl SavedVehicles {
    pub fn ids(&self) -> &[VehicleId] {
        &self.0
    }

    pub fn contains(&self, id: &VehicleId) -> bool {
        self.0.contains(id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Move `id` to the front, dropping the oldest entry past the cap.
    pub fn save(&mut self, id: VehicleId) {
        self.0.retain(|existing| existing != &id);
        self.0.insert(0, id);
        self.0.truncate(SAVED_VEHICLE_LIMIT);
    }

    pub fn unsave(&mut self, id: &VehicleId) {
        self.0.retain(|existing| existing != id);
    }

    /// Returns whether the vehicle is saved afterwards.
    pub fn toggle(&mut self, id: VehicleId) -> bool {
        if self.contains(&id) {
            self.unsave(&id);
            false
        } else {
            self.save(id);
            true
        }
    }
}

/// Log a swipe; likes also land at the front of the saved set.
pub fn record_decision(
    history: &mut SwipeHistory,
    saved: &mut SavedVehicles,
    record: SwipeRecord,
) {
    if record.decision == SwipeDecision::Like {
        saved.save(record.vehicle_id.clone());
    }
    history.push_front(record);
}

pub fn unsave(saved: &mut SavedVehicles, vehicle_id: &VehicleId) {
    saved.unsave(vehicle_id);
}

/// Flip the vehicle's saved state; returns whether it is saved afterwards.
pub fn toggle_saved(saved: &mut SavedVehicles, vehicle_id: VehicleId) -> bool {
    saved.toggle(vehicle_id)
}
