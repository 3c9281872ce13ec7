//! One student's in-memory session: an explicit state struct, the actions that change it, a
//! pure reducer, and the service and HTTP router layered on top.

mod action;
mod forms;
mod reducer;
mod router;
mod service;
mod state;
mod views;

#[cfg(test)]
mod tests;

pub use action::SessionAction;
pub use forms::ProfileForm;
pub use reducer::{reduce, Transition};
pub use router::session_router;
pub use service::{SessionClock, SessionService, SessionServiceError, SystemClock};
pub use state::{default_profile, SessionState};
pub use views::{GarageView, LessonCompletion, SessionSnapshot, VehicleMatchView};
