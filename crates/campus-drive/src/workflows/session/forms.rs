use serde::{Deserialize, Serialize};

use crate::workflows::matching::{Profile, ProfilePatch};
use crate::workflows::progression::parse_whole_or;

/// Profile edits as typed into the profile screen. Numeric fields arrive as text.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub name: Option<String>,
    pub age: Option<String>,
    pub school: Option<String>,
    pub major: Option<String>,
    pub graduation_year: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub monthly_budget: Option<String>,
    pub credit_score_estimate: Option<String>,
}

impl ProfileForm {
    /// Numbers that fail to parse keep the value already on `current`.
    pub fn into_patch(self, current: &Profile) -> ProfilePatch {
        let credit_score_estimate = self.credit_score_estimate.and_then(|raw| {
            match current.credit_score_estimate {
                Some(prior) => Some(parse_whole_or(&raw, prior)),
                None => raw.trim().parse().ok(),
            }
        });

        ProfilePatch {
            name: self.name.map(|value| value.trim().to_string()),
            age: self.age.map(|raw| parse_whole_or(&raw, current.age)),
            school: self.school.map(|value| value.trim().to_string()),
            major: self.major.map(|value| value.trim().to_string()),
            graduation_year: self
                .graduation_year
                .map(|raw| parse_whole_or(&raw, current.graduation_year)),
            email: self.email.map(|value| value.trim().to_string()),
            phone: self.phone.map(|value| value.trim().to_string()),
            monthly_budget: self
                .monthly_budget
                .map(|raw| parse_whole_or(&raw, current.monthly_budget)),
            credit_score_estimate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::session::default_profile;

    #[test]
    fn malformed_numbers_keep_prior_values() {
        let current = default_profile();
        let form = ProfileForm {
            monthly_budget: Some("a lot".to_string()),
            credit_score_estimate: Some("".to_string()),
            ..ProfileForm::default()
        };

        let patch = form.into_patch(&current);

        assert_eq!(patch.monthly_budget, Some(220));
        assert_eq!(patch.credit_score_estimate, Some(794));
        assert!(patch.name.is_none());
    }

    #[test]
    fn valid_numbers_replace_prior_values() {
        let current = default_profile();
        let form = ProfileForm {
            monthly_budget: Some(" 320 ".to_string()),
            credit_score_estimate: Some("705".to_string()),
            major: Some(" Accounting ".to_string()),
            ..ProfileForm::default()
        };

        let patch = form.into_patch(&current);

        assert_eq!(patch.monthly_budget, Some(320));
        assert_eq!(patch.credit_score_estimate, Some(705));
        assert_eq!(patch.major.as_deref(), Some("Accounting"));
    }

    #[test]
    fn missing_credit_stays_missing_when_text_is_invalid() {
        let mut current = default_profile();
        current.credit_score_estimate = None;
        let form = ProfileForm {
            credit_score_estimate: Some("n/a".to_string()),
            ..ProfileForm::default()
        };

        assert_eq!(form.into_patch(&current).credit_score_estimate, None);
    }
}
