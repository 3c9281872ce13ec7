use super::common::*;
use crate::workflows::catalog::LessonCatalog;
use crate::workflows::matching::ProfilePatch;
use crate::workflows::progression::{GoalId, GoalPatch, SwipeDecision};
use crate::workflows::session::{reduce, SessionAction, SessionState};

fn apply_all(actions: Vec<SessionAction>) -> SessionState {
    let content = content();
    actions
        .into_iter()
        .fold(SessionState::default(), |state, action| {
            reduce(state, action, &content).state
        })
}

#[test]
fn fresh_state_starts_at_level_one_with_default_profile() {
    let state = SessionState::default();

    assert_eq!(state.points, 0);
    assert_eq!(state.level(), 1);
    assert!(state.completed_lessons.is_empty());
    assert!(state.history.is_empty());
    assert!(state.saved.is_empty());
    assert!(state.goals.is_empty());
    assert!(state.preferences.is_none());
    assert_eq!(state.profile.monthly_budget, 220);
    assert_eq!(state.profile.credit_score_estimate, Some(794));
}

#[test]
fn completing_a_lesson_twice_awards_points_once() {
    let content = content();
    let action = SessionAction::CompleteLesson {
        lesson_id: lesson("budgeting-101"),
    };

    let first = reduce(SessionState::default(), action.clone(), &content);
    assert_eq!(first.points_awarded, 120);
    assert_eq!(first.state.points, 120);
    assert!(first.state.has_completed(&lesson("budgeting-101")));

    let second = reduce(first.state.clone(), action, &content);
    assert_eq!(second.points_awarded, 0);
    assert_eq!(second.state, first.state);
}

#[test]
fn unknown_lessons_leave_state_untouched() {
    let transition = reduce(
        SessionState::default(),
        SessionAction::CompleteLesson {
            lesson_id: lesson("tax-basics"),
        },
        &content(),
    );

    assert_eq!(transition.points_awarded, 0);
    assert_eq!(transition.state, SessionState::default());
}

#[test]
fn zero_point_lessons_are_still_marked_complete() {
    let mut content = content();
    let mut lessons = content.lessons.lessons().to_vec();
    lessons[0].points = 0;
    content.lessons = LessonCatalog::new(lessons);
    let action = SessionAction::CompleteLesson {
        lesson_id: lesson("budgeting-101"),
    };

    let first = reduce(SessionState::default(), action.clone(), &content);
    assert_eq!(first.points_awarded, 0);
    assert_eq!(first.state.points, 0);
    assert!(first.state.has_completed(&lesson("budgeting-101")));
    assert_eq!(first.state.completed_lessons.len(), 1);

    let second = reduce(first.state.clone(), action, &content);
    assert_eq!(second.state, first.state);
}

#[test]
fn level_follows_accumulated_points() {
    let state = apply_all(vec![
        SessionAction::CompleteLesson {
            lesson_id: lesson("budgeting-101"),
        },
        SessionAction::CompleteLesson {
            lesson_id: lesson("credit-health"),
        },
        SessionAction::CompleteLesson {
            lesson_id: lesson("ev-hybrid-basics"),
        },
    ]);

    assert_eq!(state.points, 370);
    assert_eq!(state.level(), 2);
    assert_eq!(state.completed_lessons.len(), 3);
}

#[test]
fn swipes_feed_history_and_saved_set() {
    let state = apply_all(vec![
        SessionAction::RecordSwipe {
            record: swipe("camry-se-2025", SwipeDecision::Skip, 27),
        },
        SessionAction::RecordSwipe {
            record: swipe("corolla-hybrid-2024", SwipeDecision::Like, 50),
        },
    ]);

    assert_eq!(state.history.len(), 2);
    assert_eq!(
        state.history.records()[0].vehicle_id,
        vehicle("corolla-hybrid-2024")
    );
    assert_eq!(state.saved.ids(), &[vehicle("corolla-hybrid-2024")]);
}

#[test]
fn toggle_and_unsave_edit_the_saved_set() {
    let state = apply_all(vec![
        SessionAction::ToggleSaved {
            vehicle_id: vehicle("gr86-premium-2024"),
        },
        SessionAction::ToggleSaved {
            vehicle_id: vehicle("rav4-hybrid-2025"),
        },
        SessionAction::Unsave {
            vehicle_id: vehicle("gr86-premium-2024"),
        },
    ]);

    assert_eq!(state.saved.ids(), &[vehicle("rav4-hybrid-2025")]);
}

#[test]
fn goal_actions_create_update_and_delete() {
    let created = apply_all(vec![
        SessionAction::AddGoal {
            id: GoalId("goal-a".to_string()),
            draft: goal_draft("Down payment"),
            created_at: fixed_now(),
        },
        SessionAction::AddGoal {
            id: GoalId("goal-b".to_string()),
            draft: goal_draft("Insurance"),
            created_at: fixed_now(),
        },
        SessionAction::UpdateGoal {
            id: GoalId("goal-a".to_string()),
            patch: GoalPatch {
                target_budget: Some(3500.0),
                ..GoalPatch::default()
            },
        },
        SessionAction::DeleteGoal {
            id: GoalId("goal-b".to_string()),
        },
        SessionAction::DeleteGoal {
            id: GoalId("goal-missing".to_string()),
        },
    ]);

    assert_eq!(created.goals.len(), 1);
    let goal = &created.goals.all()[0];
    assert_eq!(goal.id, GoalId("goal-a".to_string()));
    assert_eq!(goal.target_budget, 3500.0);
    assert_eq!(goal.created_at, fixed_now());
}

#[test]
fn profile_and_preferences_updates_replace_fields() {
    let state = apply_all(vec![
        SessionAction::UpdateProfile {
            patch: ProfilePatch {
                monthly_budget: Some(300),
                ..ProfilePatch::default()
            },
        },
        SessionAction::UpdatePreferences {
            preferences: lease(350, 2000),
        },
    ]);

    assert_eq!(state.profile.monthly_budget, 300);
    assert_eq!(state.profile.name, "Mustafa Hasani");
    assert_eq!(state.preferences, Some(lease(350, 2000)));
}

#[test]
fn reset_returns_the_fresh_state() {
    let state = apply_all(vec![
        SessionAction::CompleteLesson {
            lesson_id: lesson("credit-health"),
        },
        SessionAction::RecordSwipe {
            record: swipe("prius-prime-2024", SwipeDecision::Like, 27),
        },
        SessionAction::AddGoal {
            id: GoalId("goal-a".to_string()),
            draft: goal_draft("Down payment"),
            created_at: fixed_now(),
        },
        SessionAction::UpdatePreferences {
            preferences: lease(350, 2000),
        },
        SessionAction::Reset,
    ]);

    assert_eq!(state, SessionState::default());
}

#[test]
fn identical_inputs_produce_identical_transitions() {
    let content = content();
    let start = apply_all(vec![SessionAction::CompleteLesson {
        lesson_id: lesson("budgeting-101"),
    }]);
    let action = SessionAction::AddGoal {
        id: GoalId("goal-a".to_string()),
        draft: goal_draft("Down payment"),
        created_at: fixed_now(),
    };

    let left = reduce(start.clone(), action.clone(), &content);
    let right = reduce(start, action, &content);

    assert_eq!(left, right);
}
