use serde::{Deserialize, Serialize};

use crate::workflows::catalog::{OfferCatalog, OfferTier};

/// Where a point total sits on the offer ladder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OfferProgress {
    pub unlocked: Vec<OfferTier>,
    pub next: Option<OfferTier>,
    pub points_to_next: u32,
    pub previous_threshold: u32,
    /// Progress from `previous_threshold` toward `next`, in `[0, 1]`; 1 once every tier unlocks.
    pub fraction: f64,
}

impl OfferProgress {
    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }
}

pub fn offer_progress(points: u32, offers: &OfferCatalog) -> OfferProgress {
    let tiers = offers.tiers();
    let unlocked: Vec<OfferTier> = tiers
        .iter()
        .filter(|tier| tier.is_unlocked(points))
        .cloned()
        .collect();
    let next = tiers.iter().find(|tier| !tier.is_unlocked(points)).cloned();

    let Some(next_tier) = next else {
        return OfferProgress {
            unlocked,
            next: None,
            points_to_next: 0,
            previous_threshold: tiers.last().map(|tier| tier.points_required).unwrap_or(0),
            fraction: 1.0,
        };
    };

    let previous_threshold = tiers
        .iter()
        .map(|tier| tier.points_required)
        .filter(|required| *required < next_tier.points_required)
        .max()
        .unwrap_or(0);
    let span = next_tier.points_required.saturating_sub(previous_threshold).max(1);
    let earned = points.saturating_sub(previous_threshold);

    OfferProgress {
        unlocked,
        points_to_next: next_tier.points_required.saturating_sub(points),
        previous_threshold,
        fraction: (earned as f64 / span as f64).min(1.0),
        next: Some(next_tier),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier_ids(tiers: &[OfferTier]) -> Vec<&str> {
        tiers.iter().map(|tier| tier.id.as_str()).collect()
    }

    #[test]
    fn fresh_student_is_working_toward_the_first_tier() {
        let progress = offer_progress(0, &OfferCatalog::standard());

        assert_eq!(progress.unlocked_count(), 0);
        assert_eq!(progress.next.as_ref().map(|t| t.id.as_str()), Some("rate-boost"));
        assert_eq!(progress.points_to_next, 200);
        assert_eq!(progress.previous_threshold, 0);
        assert_eq!(progress.fraction, 0.0);
    }

    #[test]
    fn progress_is_measured_from_the_previous_threshold() {
        let progress = offer_progress(370, &OfferCatalog::standard());

        assert_eq!(tier_ids(&progress.unlocked), vec!["rate-boost"]);
        assert_eq!(
            progress.next.as_ref().map(|t| t.id.as_str()),
            Some("down-payment-match")
        );
        assert_eq!(progress.points_to_next, 130);
        assert_eq!(progress.previous_threshold, 200);
        assert!((progress.fraction - 170.0 / 300.0).abs() < 1e-9);
    }

    #[test]
    fn reaching_a_threshold_unlocks_that_tier() {
        let progress = offer_progress(500, &OfferCatalog::standard());

        assert_eq!(
            tier_ids(&progress.unlocked),
            vec!["rate-boost", "down-payment-match"]
        );
        assert_eq!(progress.next.as_ref().map(|t| t.id.as_str()), Some("lease-credit"));
        assert_eq!(progress.fraction, 0.0);
    }

    #[test]
    fn every_tier_unlocked_reports_full_progress() {
        let progress = offer_progress(1200, &OfferCatalog::standard());

        assert_eq!(progress.unlocked_count(), 4);
        assert!(progress.next.is_none());
        assert_eq!(progress.points_to_next, 0);
        assert_eq!(progress.previous_threshold, 1000);
        assert_eq!(progress.fraction, 1.0);
    }

    #[test]
    fn empty_catalog_is_complete() {
        let progress = offer_progress(10, &OfferCatalog::default());

        assert!(progress.unlocked.is_empty());
        assert_eq!(progress.previous_threshold, 0);
        assert_eq!(progress.fraction, 1.0);
    }
}
