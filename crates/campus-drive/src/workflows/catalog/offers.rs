use serde::{Deserialize, Serialize};

/// Reward unlocked once cumulative points reach `points_required`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfferTier {
    pub id: String,
    pub title: String,
    pub description: String,
    pub points_required: u32,
    pub perk: String,
}

impl OfferTier {
    pub fn is_unlocked(&self, points: u32) -> bool {
        points >= self.points_required
    }
}

/// Offer tiers ordered by ascending threshold.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OfferCatalog {
    tiers: Vec<OfferTier>,
}

impl OfferCatalog {
    pub fn new(mut tiers: Vec<OfferTier>) -> Self {
        tiers.sort_by_key(|tier| tier.points_required);
        Self { tiers }
    }

    pub fn tiers(&self) -> &[OfferTier] {
        &self.tiers
    }

    pub fn standard() -> Self {
        Self::new(vec![
            tier(
                "rate-boost",
                "Smart Student Rate Boost",
                "Knock 0.35% APR off Toyota Financial Services student-friendly finance rates \
                 when you finish your first two lessons.",
                200,
                "0.35% APR reduction",
            ),
            tier(
                "down-payment-match",
                "Down Payment Match",
                "Toyota matches up to $500 of your down payment after you reach 500 points and \
                 submit your savings plan.",
                500,
                "Up to $500 Toyota match",
            ),
            tier(
                "lease-credit",
                "Hybrid Lease Loyalty Credit",
                "Switch into a Toyota hybrid and receive $750 in lease cash alongside \
                 complimentary ToyotaCare maintenance.",
                750,
                "$750 lease cash + ToyotaCare",
            ),
            tier(
                "grad-bonus",
                "Graduation Fast Pass",
                "Seniors with 1,000 points unlock fast-track credit approval plus an extra year \
                 of roadside assistance.",
                1000,
                "Fast approval + roadside assist",
            ),
        ])
    }
}

fn tier(id: &str, title: &str, description: &str, points_required: u32, perk: &str) -> OfferTier {
    OfferTier {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        points_required,
        perk: perk.to_string(),
    }
}
