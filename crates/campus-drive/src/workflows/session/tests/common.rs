use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use axum::response::Response;
use chrono::{DateTime, TimeZone, Utc};
use serde_json::Value;

use crate::workflows::catalog::{ContentCatalog, LessonId, VehicleId};
use crate::workflows::matching::FinancialPreferences;
use crate::workflows::progression::{GoalDraft, GoalId, SwipeDecision, SwipeRecord};
use crate::workflows::session::{session_router, SessionClock, SessionService};

/// Clock frozen at a fixed instant that hands out sequential goal ids.
pub(super) struct FixedClock {
    now: DateTime<Utc>,
    sequence: AtomicU64,
}

impl Default for FixedClock {
    fn default() -> Self {
        Self {
            now: fixed_now(),
            sequence: AtomicU64::new(1),
        }
    }
}

impl SessionClock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.now
    }

    fn goal_id(&self) -> GoalId {
        let id = self.sequence.fetch_add(1, Ordering::Relaxed);
        GoalId(format!("goal-{id}"))
    }
}

pub(super) fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 9, 15, 18, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn content() -> ContentCatalog {
    ContentCatalog::standard()
}

pub(super) fn build_service() -> Arc<SessionService<FixedClock>> {
    Arc::new(SessionService::with_clock(
        Arc::new(content()),
        Arc::new(FixedClock::default()),
    ))
}

pub(super) fn router_with_service(service: Arc<SessionService<FixedClock>>) -> axum::Router {
    session_router(service)
}

pub(super) fn lesson(id: &str) -> LessonId {
    LessonId::new(id)
}

pub(super) fn vehicle(id: &str) -> VehicleId {
    VehicleId::new(id)
}

pub(super) fn swipe(id: &str, decision: SwipeDecision, match_score: u8) -> SwipeRecord {
    SwipeRecord {
        vehicle_id: vehicle(id),
        decision,
        match_score,
        timestamp: fixed_now().timestamp_millis(),
    }
}

pub(super) fn goal_draft(title: &str) -> GoalDraft {
    GoalDraft {
        title: title.to_string(),
        target_vehicle: Some("Toyota Prius Prime SE 2024".to_string()),
        target_date: Some("May 2026".to_string()),
        target_budget: 3000.0,
        monthly_contribution: 125.0,
        notes: None,
    }
}

pub(super) fn lease(monthly_payment: u32, due_at_signing: u32) -> FinancialPreferences {
    FinancialPreferences::Lease {
        monthly_payment,
        due_at_signing,
        mileage_allowance: 12_000,
        term_months: 36,
    }
}

pub(super) fn json_request(
    method: &str,
    uri: &str,
    body: &Value,
) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("serialize body"),
        ))
        .expect("valid request")
}

pub(super) fn empty_request(method: &str, uri: &str) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .body(axum::body::Body::empty())
        .expect("valid request")
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
