use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::workflows::catalog::{LessonId, VehicleId};
use crate::workflows::matching::{FinancialPreferences, ProfilePatch};
use crate::workflows::progression::{GoalDraft, GoalId, GoalPatch, SwipeRecord};

/// A single state change. Timestamps and generated ids are resolved before the action is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionAction {
    CompleteLesson {
        lesson_id: LessonId,
    },
    RecordSwipe {
        record: SwipeRecord,
    },
    ToggleSaved {
        vehicle_id: VehicleId,
    },
    Unsave {
        vehicle_id: VehicleId,
    },
    AddGoal {
        id: GoalId,
        draft: GoalDraft,
        created_at: DateTime<Utc>,
    },
    UpdateGoal {
        id: GoalId,
        patch: GoalPatch,
    },
    DeleteGoal {
        id: GoalId,
    },
    UpdateProfile {
        patch: ProfilePatch,
    },
    UpdatePreferences {
        preferences: FinancialPreferences,
    },
    Reset,
}

impl SessionAction {
    pub fn label(&self) -> &'static str {
        match self {
            SessionAction::CompleteLesson { .. } => "complete_lesson",
            SessionAction::RecordSwipe { .. } => "record_swipe",
            SessionAction::ToggleSaved { .. } => "toggle_saved",
            SessionAction::Unsave { .. } => "unsave",
            SessionAction::AddGoal { .. } => "add_goal",
            SessionAction::UpdateGoal { .. } => "update_goal",
            SessionAction::DeleteGoal { .. } => "delete_goal",
            SessionAction::UpdateProfile { .. } => "update_profile",
            SessionAction::UpdatePreferences { .. } => "update_preferences",
            SessionAction::Reset => "reset",
        }
    }
}
