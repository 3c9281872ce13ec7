use std::sync::Arc;

use campus_drive::workflows::catalog::{ContentCatalog, LessonId, VehicleId};
use campus_drive::workflows::matching::FinancialPreferences;
use campus_drive::workflows::progression::{derive_level, GoalForm, SwipeDecision};
use campus_drive::workflows::session::{SessionService, SessionState};

fn service() -> SessionService {
    SessionService::new(Arc::new(ContentCatalog::standard()))
}

#[test]
fn student_journey_accumulates_points_and_unlocks_offers() {
    let service = service();

    service
        .update_preferences(FinancialPreferences::Finance {
            monthly_payment: 450,
            down_payment: 4000,
            term_months: 60,
        })
        .expect("valid preferences");

    let matches = service.matches();
    assert!(matches.windows(2).all(|pair| pair[0].score >= pair[1].score));

    let top = matches[0].vehicle.id.clone();
    let record = service
        .record_swipe(top.clone(), SwipeDecision::Like)
        .expect("vehicle exists");
    assert_eq!(record.match_score, matches[0].score);

    for id in ["budgeting-101", "credit-health"] {
        service
            .complete_lesson(&LessonId::new(id), &[])
            .expect("lesson exists");
    }

    let goal = service
        .add_goal(GoalForm {
            title: "Down payment fund".to_string(),
            target_vehicle: top.to_string(),
            target_budget: "4000".to_string(),
            monthly_contribution: "250".to_string(),
            ..GoalForm::default()
        })
        .expect("valid goal");

    let snapshot = service.snapshot();
    assert_eq!(snapshot.points, 270);
    assert_eq!(snapshot.level, derive_level(270));
    assert_eq!(snapshot.level, 2);
    assert_eq!(snapshot.offers.unlocked_count(), 1);
    assert_eq!(snapshot.saved_vehicles, vec![top]);
    assert_eq!(snapshot.goals.len(), 1);
    assert_eq!(snapshot.goals[0].id, goal.id);
    assert_eq!(goal.months_to_target(), Some(16));
}

#[test]
fn reset_always_returns_to_the_fresh_state() {
    let service = service();
    service
        .complete_lesson(&LessonId::new("ev-hybrid-basics"), &[1, 1, 0])
        .expect("lesson exists");
    for _ in 0..25 {
        service
            .record_swipe(VehicleId::new("rav4-hybrid-2025"), SwipeDecision::Like)
            .expect("vehicle exists");
    }
    assert_eq!(service.state().history.len(), 20);
    assert_eq!(service.state().saved.len(), 1);

    service.reset();

    assert_eq!(service.state(), SessionState::default());
    assert_eq!(service.snapshot().level, 1);
}

#[test]
fn goal_ids_are_unique() {
    let service = service();
    let form = GoalForm {
        title: "Insurance".to_string(),
        target_budget: "900".to_string(),
        ..GoalForm::default()
    };

    let first = service.add_goal(form.clone()).expect("valid goal");
    let second = service.add_goal(form).expect("valid goal");

    assert_ne!(first.id, second.id);
    assert_eq!(service.state().goals.all()[0].id, second.id);
}
