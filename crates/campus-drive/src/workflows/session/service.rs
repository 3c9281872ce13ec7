use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use super::action::SessionAction;
use super::forms::ProfileForm;
use super::reducer::reduce;
use super::state::SessionState;
use super::views::{GarageView, LessonCompletion, SessionSnapshot, VehicleMatchView};
use crate::workflows::catalog::{ContentCatalog, LessonId, VehicleId};
use crate::workflows::matching::{
    FinancialPreferences, MatchEngine, PreferencesError, Profile, ProfilePatch,
};
use crate::workflows::progression::{
    grade_quiz, Goal, GoalForm, GoalFormError, GoalId, GoalPatch, SwipeDecision, SwipeRecord,
};

/// Source of wall-clock time and fresh goal ids.
pub trait SessionClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn goal_id(&self) -> GoalId {
        GoalId::generate()
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl SessionClock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Single-writer facade over one student's session.
///
/// Every mutation builds a [`SessionAction`], runs it through [`reduce`] while holding the
/// state lock, and swaps in the resulting state.
pub struct SessionService<C = SystemClock> {
    content: Arc<ContentCatalog>,
    engine: MatchEngine,
    clock: Arc<C>,
    state: Mutex<SessionState>,
}

impl SessionService<SystemClock> {
    pub fn new(content: Arc<ContentCatalog>) -> Self {
        Self::with_clock(content, Arc::new(SystemClock))
    }
}

impl<C> SessionService<C>
where
    C: SessionClock + 'static,
{
    pub fn with_clock(content: Arc<ContentCatalog>, clock: Arc<C>) -> Self {
        Self {
            content,
            engine: MatchEngine::default(),
            clock,
            state: Mutex::new(SessionState::default()),
        }
    }

    pub fn content(&self) -> &ContentCatalog {
        &self.content
    }

    pub fn state(&self) -> SessionState {
        self.lock().clone()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let state = self.lock();
        SessionSnapshot::capture(&state, &self.content.offers)
    }

    /// Every catalog vehicle scored for the current profile, best match first.
    pub fn matches(&self) -> Vec<VehicleMatchView> {
        let state = self.lock();
        self.engine
            .rank(
                self.content.vehicles.vehicles(),
                &state.profile,
                state.preferences.as_ref(),
            )
            .into_iter()
            .map(|ranked| VehicleMatchView::new(ranked.vehicle, ranked.outcome))
            .collect()
    }

    /// Saved vehicles in catalog order with live scores.
    pub fn garage(&self) -> GarageView {
        let state = self.lock();
        let vehicles = self
            .content
            .vehicles
            .vehicles()
            .iter()
            .filter(|vehicle| state.saved.contains(&vehicle.id))
            .map(|vehicle| {
                let outcome =
                    self.engine
                        .score(vehicle, &state.profile, state.preferences.as_ref());
                VehicleMatchView::new(vehicle, outcome)
            })
            .collect::<Vec<_>>();

        GarageView {
            pinned: vehicles.len(),
            vehicles,
            new_matches: state.history.likes(),
            lessons_completed: state.completed_lessons.len(),
        }
    }

    /// Grade the quiz and award the lesson's points on first completion.
    pub fn complete_lesson(
        &self,
        lesson_id: &LessonId,
        answers: &[usize],
    ) -> Result<LessonCompletion, SessionServiceError> {
        let lesson = self
            .content
            .lessons
            .get(lesson_id)
            .ok_or_else(|| SessionServiceError::UnknownLesson(lesson_id.clone()))?;
        let quiz = grade_quiz(lesson, answers);

        let mut state = self.lock();
        let already_completed = state.has_completed(lesson_id);
        let points_awarded = self.apply(
            &mut state,
            SessionAction::CompleteLesson {
                lesson_id: lesson_id.clone(),
            },
        );

        Ok(LessonCompletion {
            lesson_id: lesson_id.clone(),
            points_awarded,
            already_completed,
            quiz,
            points: state.points,
            level: state.level(),
        })
    }

    /// Log a swipe with the vehicle's score at this moment.
    pub fn record_swipe(
        &self,
        vehicle_id: VehicleId,
        decision: SwipeDecision,
    ) -> Result<SwipeRecord, SessionServiceError> {
        let vehicle = self
            .content
            .vehicles
            .get(&vehicle_id)
            .ok_or_else(|| SessionServiceError::UnknownVehicle(vehicle_id.clone()))?;

        let mut state = self.lock();
        let outcome = self
            .engine
            .score(vehicle, &state.profile, state.preferences.as_ref());
        let record = SwipeRecord {
            vehicle_id,
            decision,
            match_score: outcome.score,
            timestamp: self.clock.now().timestamp_millis(),
        };
        self.apply(
            &mut state,
            SessionAction::RecordSwipe {
                record: record.clone(),
            },
        );
        Ok(record)
    }

    /// Returns whether the vehicle is saved afterwards.
    pub fn toggle_saved(&self, vehicle_id: VehicleId) -> Result<bool, SessionServiceError> {
        if self.content.vehicles.get(&vehicle_id).is_none() {
            return Err(SessionServiceError::UnknownVehicle(vehicle_id));
        }

        let mut state = self.lock();
        self.apply(
            &mut state,
            SessionAction::ToggleSaved {
                vehicle_id: vehicle_id.clone(),
            },
        );
        Ok(state.saved.contains(&vehicle_id))
    }

    pub fn unsave(&self, vehicle_id: VehicleId) {
        let mut state = self.lock();
        self.apply(&mut state, SessionAction::Unsave { vehicle_id });
    }

    pub fn add_goal(&self, form: GoalForm) -> Result<Goal, SessionServiceError> {
        let draft = form.into_draft()?;
        let id = self.clock.goal_id();

        let mut state = self.lock();
        self.apply(
            &mut state,
            SessionAction::AddGoal {
                id: id.clone(),
                draft,
                created_at: self.clock.now(),
            },
        );
        state
            .goals
            .get(&id)
            .cloned()
            .ok_or(SessionServiceError::GoalNotFound(id))
    }

    /// `None` when no goal has `id`.
    pub fn update_goal(&self, id: GoalId, patch: GoalPatch) -> Option<Goal> {
        let mut state = self.lock();
        state.goals.get(&id)?;
        self.apply(
            &mut state,
            SessionAction::UpdateGoal {
                id: id.clone(),
                patch,
            },
        );
        state.goals.get(&id).cloned()
    }

    /// Returns whether a goal was removed.
    pub fn delete_goal(&self, id: GoalId) -> bool {
        let mut state = self.lock();
        let existed = state.goals.get(&id).is_some();
        self.apply(&mut state, SessionAction::DeleteGoal { id });
        existed
    }

    pub fn update_profile(&self, patch: ProfilePatch) -> Profile {
        let mut state = self.lock();
        self.apply(&mut state, SessionAction::UpdateProfile { patch });
        state.profile.clone()
    }

    pub fn update_profile_form(&self, form: ProfileForm) -> Profile {
        let mut state = self.lock();
        let patch = form.into_patch(&state.profile);
        self.apply(&mut state, SessionAction::UpdateProfile { patch });
        state.profile.clone()
    }

    pub fn update_preferences(
        &self,
        preferences: FinancialPreferences,
    ) -> Result<FinancialPreferences, SessionServiceError> {
        preferences.validate()?;

        let mut state = self.lock();
        self.apply(&mut state, SessionAction::UpdatePreferences { preferences });
        Ok(preferences)
    }

    pub fn reset(&self) -> SessionSnapshot {
        let mut state = self.lock();
        self.apply(&mut state, SessionAction::Reset);
        SessionSnapshot::capture(&state, &self.content.offers)
    }

    fn lock(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn apply(&self, state: &mut SessionState, action: SessionAction) -> u32 {
        let label = action.label();
        let current = std::mem::take(state);
        let transition = reduce(current, action, &self.content);
        *state = transition.state;

        if transition.points_awarded > 0 {
            info!(
                action = label,
                points_awarded = transition.points_awarded,
                points = state.points,
                level = state.level(),
                "session points awarded"
            );
        } else {
            debug!(action = label, points = state.points, "session action applied");
        }

        transition.points_awarded
    }
}

/// Error raised by the session service.
#[derive(Debug, thiserror::Error)]
pub enum SessionServiceError {
    #[error(transparent)]
    Preferences(#[from] PreferencesError),
    #[error(transparent)]
    GoalForm(#[from] GoalFormError),
    #[error("lesson '{0}' is not in the catalog")]
    UnknownLesson(LessonId),
    #[error("vehicle '{0}' is not in the catalog")]
    UnknownVehicle(VehicleId),
    #[error("goal '{0}' not found")]
    GoalNotFound(GoalId),
}
