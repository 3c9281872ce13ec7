use crate::workflows::catalog::{Vehicle, VehicleCatalog, VehicleId};
use crate::workflows::matching::{FinancialPreferences, Profile};

pub(super) fn student(monthly_budget: u32, credit_score_estimate: Option<u16>) -> Profile {
    Profile {
        name: "Jordan Reyes".to_string(),
        age: 20,
        school: "UT Dallas".to_string(),
        major: "Finance".to_string(),
        graduation_year: 2027,
        email: "jordan.reyes@example.edu".to_string(),
        phone: "555-0100".to_string(),
        monthly_budget,
        credit_score_estimate,
    }
}

pub(super) fn catalog() -> VehicleCatalog {
    VehicleCatalog::standard()
}

pub(super) fn vehicle(id: &str) -> Vehicle {
    catalog()
        .get(&VehicleId::new(id))
        .cloned()
        .expect("vehicle in standard catalog")
}

pub(super) fn finance(monthly_payment: u32, down_payment: u32) -> FinancialPreferences {
    FinancialPreferences::Finance {
        monthly_payment,
        down_payment,
        term_months: 60,
    }
}

pub(super) fn lease(monthly_payment: u32, due_at_signing: u32) -> FinancialPreferences {
    FinancialPreferences::Lease {
        monthly_payment,
        due_at_signing,
        mileage_allowance: 10_000,
        term_months: 36,
    }
}

pub(super) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-3,
        "expected {expected}, got {actual}"
    );
}
