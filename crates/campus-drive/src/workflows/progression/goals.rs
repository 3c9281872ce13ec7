use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use super::parsing::parse_amount;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GoalId(pub String);

impl GoalId {
    pub fn generate() -> Self {
        Self(format!("goal-{}", uuid::Uuid::new_v4()))
    }
}

impl std::fmt::Display for GoalId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A savings milestone the student set for themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: GoalId,
    pub title: String,
    pub target_vehicle: Option<String>,
    /// Free-text target such as "Dec 2025".
    pub target_date: Option<String>,
    pub target_budget: f64,
    pub monthly_contribution: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    /// Whole months of contributions needed to reach the target.
    pub fn months_to_target(&self) -> Option<u32> {
        if self.monthly_contribution <= 0.0 {
            return None;
        }
        Some((self.target_budget / self.monthly_contribution).ceil() as u32)
    }
}

/// Goal fields supplied by the student; id and timestamp are assigned on creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalDraft {
    pub title: String,
    #[serde(default)]
    pub target_vehicle: Option<String>,
    #[serde(default)]
    pub target_date: Option<String>,
    pub target_budget: f64,
    #[serde(default)]
    pub monthly_contribution: f64,
    #[serde(default)]
    pub notes: Option<String>,
}

impl GoalDraft {
    pub fn into_goal(self, id: GoalId, created_at: DateTime<Utc>) -> Goal {
        Goal {
            id,
            title: self.title,
            target_vehicle: self.target_vehicle,
            target_date: self.target_date,
            target_budget: self.target_budget,
            monthly_contribution: self.monthly_contribution,
            notes: self.notes,
            created_at,
        }
    }
}

/// Raw text straight from the goal form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalForm {
    pub title: String,
    pub target_vehicle: String,
    pub target_date: String,
    pub target_budget: String,
    pub monthly_contribution: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GoalFormError {
    #[error("give your goal a short, clear title")]
    MissingTitle,
    #[error("estimate how much you want to save")]
    MissingTargetBudget,
}

impl GoalForm {
    /// Trim the form into a draft. Unparseable amounts become 0.
    pub fn into_draft(self) -> Result<GoalDraft, GoalFormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(GoalFormError::MissingTitle);
        }
        if self.target_budget.trim().is_empty() {
            return Err(GoalFormError::MissingTargetBudget);
        }

        Ok(GoalDraft {
            title: title.to_string(),
            target_vehicle: non_blank(&self.target_vehicle),
            target_date: non_blank(&self.target_date),
            target_budget: parse_amount(&self.target_budget),
            monthly_contribution: parse_amount(&self.monthly_contribution),
            notes: non_blank(&self.notes),
        })
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Partial update; `None` keeps the existing value.
///
/// The optional text fields take a second layer: `Some(None)` (JSON `null`) clears the field,
/// an absent key leaves it alone.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(
        deserialize_with = "clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_vehicle: Option<Option<String>>,
    #[serde(
        deserialize_with = "clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub target_date: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_budget: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_contribution: Option<f64>,
    #[serde(
        deserialize_with = "clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub notes: Option<Option<String>>,
}

// Only runs when the key is present, so a `null` value lands as `Some(None)`.
fn clearable<'de, D>(deserializer: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Some)
}

impl GoalPatch {
    fn apply(self, goal: &mut Goal) {
        if let Some(title) = self.title {
            goal.title = title;
        }
        if let Some(target_vehicle) = self.target_vehicle {
            goal.target_vehicle = target_vehicle;
        }
        if let Some(target_date) = self.target_date {
            goal.target_date = target_date;
        }
        if let Some(target_budget) = self.target_budget {
            goal.target_budget = target_budget;
        }
        if let Some(monthly_contribution) = self.monthly_contribution {
            goal.monthly_contribution = monthly_contribution;
        }
        if let Some(notes) = self.notes {
            goal.notes = notes;
        }
    }
}

/// Newest-first goal list.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Goals(Vec<Goal>);

impl Goals {
    pub fn all(&self) -> &[Goal] {
        &self.0
    }

    pub fn get(&self, id: &GoalId) -> Option<&Goal> {
        self.0.iter().find(|goal| &goal.id == id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn create(&mut self, draft: GoalDraft, id: GoalId, created_at: DateTime<Utc>) -> &Goal {
        self.0.insert(0, draft.into_goal(id, created_at));
        &self.0[0]
    }

    /// Returns false when no goal has `id`.
    pub fn update(&mut self, id: &GoalId, patch: GoalPatch) -> bool {
        match self.0.iter_mut().find(|goal| &goal.id == id) {
            Some(goal) => {
                patch.apply(goal);
                true
            }
            None => false,
        }
    }

    /// Returns false when no goal has `id`.
    pub fn delete(&mut self, id: &GoalId) -> bool {
        let before = self.0.len();
        self.0.retain(|goal| &goal.id != id);
        self.0.len() != before
    }
}
