use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, patch, post, put},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::forms::ProfileForm;
use super::service::{SessionClock, SessionService, SessionServiceError};
use crate::workflows::catalog::{LessonId, VehicleId};
use crate::workflows::matching::{FinancialPreferences, ProfilePatch};
use crate::workflows::progression::{GoalForm, GoalId, GoalPatch, SwipeDecision};

/// Router exposing catalog reads and session mutations.
pub fn session_router<C>(service: Arc<SessionService<C>>) -> Router
where
    C: SessionClock + 'static,
{
    Router::new()
        .route("/api/v1/matches", get(matches_handler::<C>))
        .route("/api/v1/lessons", get(lessons_handler::<C>))
        .route("/api/v1/offers", get(offers_handler::<C>))
        .route("/api/v1/session", get(snapshot_handler::<C>))
        .route("/api/v1/session/reset", post(reset_handler::<C>))
        .route("/api/v1/session/profile", put(profile_handler::<C>))
        .route("/api/v1/session/profile/form", put(profile_form_handler::<C>))
        .route("/api/v1/session/preferences", put(preferences_handler::<C>))
        .route(
            "/api/v1/session/lessons/:lesson_id/complete",
            post(complete_lesson_handler::<C>),
        )
        .route("/api/v1/session/swipes", post(swipe_handler::<C>))
        .route("/api/v1/session/garage", get(garage_handler::<C>))
        .route(
            "/api/v1/session/saved/:vehicle_id/toggle",
            post(toggle_saved_handler::<C>),
        )
        .route(
            "/api/v1/session/saved/:vehicle_id",
            delete(unsave_handler::<C>),
        )
        .route("/api/v1/session/goals", post(add_goal_handler::<C>))
        .route(
            "/api/v1/session/goals/:goal_id",
            patch(update_goal_handler::<C>).delete(delete_goal_handler::<C>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub(crate) struct LessonAnswers {
    pub answers: Vec<usize>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SwipeRequest {
    pub vehicle_id: VehicleId,
    pub decision: SwipeDecision,
}

pub(crate) async fn matches_handler<C>(State(service): State<Arc<SessionService<C>>>) -> Response
where
    C: SessionClock + 'static,
{
    (StatusCode::OK, axum::Json(service.matches())).into_response()
}

pub(crate) async fn lessons_handler<C>(State(service): State<Arc<SessionService<C>>>) -> Response
where
    C: SessionClock + 'static,
{
    let lessons = service.content().lessons.lessons();
    (StatusCode::OK, axum::Json(lessons)).into_response()
}

pub(crate) async fn offers_handler<C>(State(service): State<Arc<SessionService<C>>>) -> Response
where
    C: SessionClock + 'static,
{
    let tiers = service.content().offers.tiers();
    (StatusCode::OK, axum::Json(tiers)).into_response()
}

pub(crate) async fn snapshot_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
) -> Response
where
    C: SessionClock + 'static,
{
    (StatusCode::OK, axum::Json(service.snapshot())).into_response()
}

pub(crate) async fn reset_handler<C>(State(service): State<Arc<SessionService<C>>>) -> Response
where
    C: SessionClock + 'static,
{
    (StatusCode::OK, axum::Json(service.reset())).into_response()
}

pub(crate) async fn profile_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
    axum::Json(patch): axum::Json<ProfilePatch>,
) -> Response
where
    C: SessionClock + 'static,
{
    (StatusCode::OK, axum::Json(service.update_profile(patch))).into_response()
}

pub(crate) async fn profile_form_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
    axum::Json(form): axum::Json<ProfileForm>,
) -> Response
where
    C: SessionClock + 'static,
{
    (StatusCode::OK, axum::Json(service.update_profile_form(form))).into_response()
}

pub(crate) async fn preferences_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
    axum::Json(preferences): axum::Json<FinancialPreferences>,
) -> Response
where
    C: SessionClock + 'static,
{
    match service.update_preferences(preferences) {
        Ok(stored) => (StatusCode::OK, axum::Json(stored)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn complete_lesson_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
    Path(lesson_id): Path<String>,
    body: Option<axum::Json<LessonAnswers>>,
) -> Response
where
    C: SessionClock + 'static,
{
    let answers = body.map(|axum::Json(body)| body.answers).unwrap_or_default();
    match service.complete_lesson(&LessonId(lesson_id), &answers) {
        Ok(completion) => (StatusCode::OK, axum::Json(completion)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn swipe_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
    axum::Json(request): axum::Json<SwipeRequest>,
) -> Response
where
    C: SessionClock + 'static,
{
    match service.record_swipe(request.vehicle_id, request.decision) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn garage_handler<C>(State(service): State<Arc<SessionService<C>>>) -> Response
where
    C: SessionClock + 'static,
{
    (StatusCode::OK, axum::Json(service.garage())).into_response()
}

pub(crate) async fn toggle_saved_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
    Path(vehicle_id): Path<String>,
) -> Response
where
    C: SessionClock + 'static,
{
    let vehicle_id = VehicleId(vehicle_id);
    match service.toggle_saved(vehicle_id.clone()) {
        Ok(saved) => {
            let payload = json!({
                "vehicle_id": vehicle_id,
                "saved": saved,
            });
            (StatusCode::OK, axum::Json(payload)).into_response()
        }
        Err(error) => error_response(error),
    }
}

pub(crate) async fn unsave_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
    Path(vehicle_id): Path<String>,
) -> Response
where
    C: SessionClock + 'static,
{
    service.unsave(VehicleId(vehicle_id));
    StatusCode::NO_CONTENT.into_response()
}

pub(crate) async fn add_goal_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
    axum::Json(form): axum::Json<GoalForm>,
) -> Response
where
    C: SessionClock + 'static,
{
    match service.add_goal(form) {
        Ok(goal) => (StatusCode::CREATED, axum::Json(goal)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn update_goal_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
    Path(goal_id): Path<String>,
    axum::Json(patch): axum::Json<GoalPatch>,
) -> Response
where
    C: SessionClock + 'static,
{
    let id = GoalId(goal_id);
    match service.update_goal(id.clone(), patch) {
        Some(goal) => (StatusCode::OK, axum::Json(goal)).into_response(),
        None => error_response(SessionServiceError::GoalNotFound(id)),
    }
}

pub(crate) async fn delete_goal_handler<C>(
    State(service): State<Arc<SessionService<C>>>,
    Path(goal_id): Path<String>,
) -> Response
where
    C: SessionClock + 'static,
{
    let id = GoalId(goal_id);
    if service.delete_goal(id.clone()) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        error_response(SessionServiceError::GoalNotFound(id))
    }
}

fn error_response(error: SessionServiceError) -> Response {
    let status = match error {
        SessionServiceError::Preferences(_) | SessionServiceError::GoalForm(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        SessionServiceError::UnknownLesson(_)
        | SessionServiceError::UnknownVehicle(_)
        | SessionServiceError::GoalNotFound(_) => StatusCode::NOT_FOUND,
    };
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
