use serde::Serialize;

use super::state::SessionState;
use crate::workflows::catalog::{LessonId, OfferCatalog, Vehicle, VehicleId};
use crate::workflows::matching::{
    FinancialPreferences, MatchOutcome, Profile, ScoreComponent, SUGGESTION_THRESHOLD,
};
use crate::workflows::progression::{
    offer_progress, Goal, LevelProgress, OfferProgress, QuizResult, SwipeRecord,
};

/// Read-only copy of the session plus the values derived from it.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub points: u32,
    pub level: u32,
    pub level_progress: LevelProgress,
    pub offers: OfferProgress,
    pub completed_lessons: Vec<LessonId>,
    pub swipe_history: Vec<SwipeRecord>,
    pub saved_vehicles: Vec<VehicleId>,
    pub goals: Vec<Goal>,
    pub profile: Profile,
    pub preferences: Option<FinancialPreferences>,
}

impl SessionSnapshot {
    pub fn capture(state: &SessionState, offers: &OfferCatalog) -> Self {
        Self {
            points: state.points,
            level: state.level(),
            level_progress: LevelProgress::from_points(state.points),
            offers: offer_progress(state.points, offers),
            completed_lessons: state.completed_lessons.iter().cloned().collect(),
            swipe_history: state.history.records().to_vec(),
            saved_vehicles: state.saved.ids().to_vec(),
            goals: state.goals.all().to_vec(),
            profile: state.profile.clone(),
            preferences: state.preferences,
        }
    }
}

/// A catalog vehicle with its live score for the current profile.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleMatchView {
    pub vehicle: Vehicle,
    pub score: u8,
    pub suggested: bool,
    pub components: Vec<ScoreComponent>,
}

impl VehicleMatchView {
    pub(crate) fn new(vehicle: &Vehicle, outcome: MatchOutcome) -> Self {
        Self {
            vehicle: vehicle.clone(),
            score: outcome.score,
            suggested: outcome.score >= SUGGESTION_THRESHOLD,
            components: outcome.components,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GarageView {
    pub vehicles: Vec<VehicleMatchView>,
    pub pinned: usize,
    pub new_matches: usize,
    pub lessons_completed: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct LessonCompletion {
    pub lesson_id: LessonId,
    pub points_awarded: u32,
    pub already_completed: bool,
    pub quiz: QuizResult,
    pub points: u32,
    pub level: u32,
}
