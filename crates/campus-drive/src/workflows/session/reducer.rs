use super::action::SessionAction;
use super::state::SessionState;
use crate::workflows::catalog::ContentCatalog;
use crate::workflows::progression::{award_lesson_points, record_decision, toggle_saved, unsave};

/// Result of applying one action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: SessionState,
    pub points_awarded: u32,
}

impl Transition {
    fn unchanged(state: SessionState) -> Self {
        Self {
            state,
            points_awarded: 0,
        }
    }
}

/// Apply `action` to `state`. Deterministic: the same inputs always produce the same transition.
pub fn reduce(mut state: SessionState, action: SessionAction, content: &ContentCatalog) -> Transition {
    match action {
        SessionAction::CompleteLesson { lesson_id } => {
            if state.has_completed(&lesson_id) || content.lessons.get(&lesson_id).is_none() {
                return Transition::unchanged(state);
            }
            let points =
                award_lesson_points(&lesson_id, &state.completed_lessons, &content.lessons);
            state.completed_lessons.insert(lesson_id);
            state.points = state.points.saturating_add(points);
            Transition {
                state,
                points_awarded: points,
            }
        }
        SessionAction::RecordSwipe { record } => {
            record_decision(&mut state.history, &mut state.saved, record);
            Transition::unchanged(state)
        }
        SessionAction::ToggleSaved { vehicle_id } => {
            toggle_saved(&mut state.saved, vehicle_id);
            Transition::unchanged(state)
        }
        SessionAction::Unsave { vehicle_id } => {
            unsave(&mut state.saved, &vehicle_id);
            Transition::unchanged(state)
        }
        SessionAction::AddGoal {
            id,
            draft,
            created_at,
        } => {
            state.goals.create(draft, id, created_at);
            Transition::unchanged(state)
        }
        SessionAction::UpdateGoal { id, patch } => {
            state.goals.update(&id, patch);
            Transition::unchanged(state)
        }
        SessionAction::DeleteGoal { id } => {
            state.goals.delete(&id);
            Transition::unchanged(state)
        }
        SessionAction::UpdateProfile { patch } => {
            state.profile.apply(patch);
            Transition::unchanged(state)
        }
        SessionAction::UpdatePreferences { preferences } => {
            state.preferences = Some(preferences);
            Transition::unchanged(state)
        }
        SessionAction::Reset => Transition::unchanged(SessionState::default()),
    }
}
