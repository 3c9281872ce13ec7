//! Points, levels, swipe bookkeeping, and savings goals.
//!
//! Everything here is a plain function over owned collections; the session reducer decides when
//! to call them.

mod goals;
mod lessons;
mod level;
mod offers;
mod parsing;
mod swipes;

pub use goals::{Goal, GoalDraft, GoalForm, GoalFormError, GoalId, GoalPatch, Goals};
pub use lessons::{award_lesson_points, grade_quiz, QuizResult};
pub use level::{derive_level, LevelProgress, LEVEL_SIZE};
pub use offers::{offer_progress, OfferProgress};
pub use parsing::{parse_amount, parse_whole_or};
pub use swipes::{
    record_decision, toggle_saved, unsave, SavedVehicles, SwipeDecision, SwipeHistory,
    SwipeRecord, SAVED_VEHICLE_LIMIT, SWIPE_HISTORY_LIMIT,
};
