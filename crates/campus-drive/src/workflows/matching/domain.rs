use serde::{Deserialize, Serialize};

/// Student financial and contact details. Only `monthly_budget` and
/// `credit_score_estimate` feed the match engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub age: u8,
    pub school: String,
    pub major: String,
    pub graduation_year: u16,
    pub email: String,
    pub phone: String,
    pub monthly_budget: u32,
    pub credit_score_estimate: Option<u16>,
}

/// Partial update applied field by field; `None` leaves the current value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub school: Option<String>,
    pub major: Option<String>,
    pub graduation_year: Option<u16>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub monthly_budget: Option<u32>,
    pub credit_score_estimate: Option<u16>,
}

impl Profile {
    pub fn apply(&mut self, patch: ProfilePatch) {
        let ProfilePatch {
            name,
            age,
            school,
            major,
            graduation_year,
            email,
            phone,
            monthly_budget,
            credit_score_estimate,
        } = patch;

        if let Some(name) = name {
            self.name = name;
        }
        if let Some(age) = age {
            self.age = age;
        }
        if let Some(school) = school {
            self.school = school;
        }
        if let Some(major) = major {
            self.major = major;
        }
        if let Some(graduation_year) = graduation_year {
            self.graduation_year = graduation_year;
        }
        if let Some(email) = email {
            self.email = email;
        }
        if let Some(phone) = phone {
            self.phone = phone;
        }
        if let Some(monthly_budget) = monthly_budget {
            self.monthly_budget = monthly_budget;
        }
        if let Some(credit) = credit_score_estimate {
            self.credit_score_estimate = Some(credit);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancingMode {
    #[default]
    Finance,
    Lease,
}

impl FinancingMode {
    pub const fn label(self) -> &'static str {
        match self {
            FinancingMode::Finance => "finance",
            FinancingMode::Lease => "lease",
        }
    }
}

/// The financing shape a student is shopping for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "financing_type", rename_all = "snake_case")]
pub enum FinancialPreferences {
    Finance {
        monthly_payment: u32,
        down_payment: u32,
        term_months: u16,
    },
    Lease {
        monthly_payment: u32,
        due_at_signing: u32,
        mileage_allowance: u32,
        term_months: u16,
    },
}

impl FinancialPreferences {
    pub fn mode(&self) -> FinancingMode {
        match self {
            FinancialPreferences::Finance { .. } => FinancingMode::Finance,
            FinancialPreferences::Lease { .. } => FinancingMode::Lease,
        }
    }

    pub fn monthly_payment(&self) -> u32 {
        match self {
            FinancialPreferences::Finance {
                monthly_payment, ..
            }
            | FinancialPreferences::Lease {
                monthly_payment, ..
            } => *monthly_payment,
        }
    }

    /// Cash the student plans to bring: down payment or due-at-signing.
    pub fn upfront_budget(&self) -> u32 {
        match self {
            FinancialPreferences::Finance { down_payment, .. } => *down_payment,
            FinancialPreferences::Lease { due_at_signing, .. } => *due_at_signing,
        }
    }

    pub fn validate(&self) -> Result<(), PreferencesError> {
        match self {
            FinancialPreferences::Finance {
                monthly_payment,
                term_months,
                ..
            } => {
                if *monthly_payment == 0 {
                    return Err(PreferencesError::MonthlyPaymentRequired);
                }
                if *term_months == 0 {
                    return Err(PreferencesError::TermRequired);
                }
            }
            FinancialPreferences::Lease {
                monthly_payment,
                mileage_allowance,
                term_months,
                ..
            } => {
                if *monthly_payment == 0 {
                    return Err(PreferencesError::MonthlyPaymentRequired);
                }
                if *term_months == 0 {
                    return Err(PreferencesError::TermRequired);
                }
                if *mileage_allowance == 0 {
                    return Err(PreferencesError::MileageRequired);
                }
            }
        }
        Ok(())
    }
}

/// Form-level validation failures for financing preferences.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PreferencesError {
    #[error("monthly payment must be greater than zero")]
    MonthlyPaymentRequired,
    #[error("term length must be at least one month")]
    TermRequired,
    #[error("lease mileage allowance must be greater than zero")]
    MileageRequired,
}
