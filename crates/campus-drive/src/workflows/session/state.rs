use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::workflows::catalog::LessonId;
use crate::workflows::matching::{FinancialPreferences, Profile};
use crate::workflows::progression::{derive_level, Goals, SavedVehicles, SwipeHistory};

/// Everything a student accumulates during one app session. Level is derived, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub points: u32,
    pub completed_lessons: BTreeSet<LessonId>,
    pub history: SwipeHistory,
    pub saved: SavedVehicles,
    pub goals: Goals,
    pub profile: Profile,
    pub preferences: Option<FinancialPreferences>,
}

impl SessionState {
    pub fn level(&self) -> u32 {
        derive_level(self.points)
    }

    pub fn has_completed(&self, lesson_id: &LessonId) -> bool {
        self.completed_lessons.contains(lesson_id)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            points: 0,
            completed_lessons: BTreeSet::new(),
            history: SwipeHistory::default(),
            saved: SavedVehicles::default(),
            goals: Goals::default(),
            profile: default_profile(),
            preferences: None,
        }
    }
}

pub fn default_profile() -> Profile {
    Profile {
        name: "Mustafa Hasani".to_string(),
        age: 20,
        school: "UT Dallas".to_string(),
        major: "Finance".to_string(),
        graduation_year: 2027,
        email: "mustafa.hasani@utdallas.edu".to_string(),
        phone: "555-0133".to_string(),
        monthly_budget: 220,
        credit_score_estimate: Some(794),
    }
}
