//! Weighted vendor ranking for a single ticket.
//!
//! Matching is stateless and read-only over the caller-supplied vendor
//! directory; results are recomputed per request and never persisted. An
//! empty result is a valid outcome (no eligible vendor), not an error.

use serde::{Deserialize, Serialize};

use super::domain::{Availability, Vendor, VendorId, WorkOrder};

/// Named weights so the ranking is reproducible in tests.
const PREFERRED_BONUS: f32 = 30.0;
const RATING_WEIGHT: f32 = 10.0;
const HIGH_RATING_THRESHOLD: f32 = 4.5;
const RESPONSE_BONUS_CEILING: u32 = 20;
const TWENTY_FOUR_SEVEN_BONUS: f32 = 20.0;
const AVAILABLE_NOW_BONUS: f32 = 10.0;
const COST_BASELINE_RATE: f32 = 100.0;
const COST_WEIGHT: f32 = 0.2;
const EMERGENCY_BONUS: f32 = 25.0;
const EMERGENCY_PRIORITY_THRESHOLD: u8 = 80;

/// Suitability ranking of one vendor for one ticket, with the human-readable
/// justifications in bonus-evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub vendor_id: VendorId,
    pub match_score: f32,
    pub reasons: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct VendorMatcher;

impl VendorMatcher {
    /// Filter the directory to vendors covering the ticket's category and
    /// rank them descending. Ties break on rating descending, then vendor id
    /// ascending, so the ordering is fully deterministic.
    pub fn rank(&self, ticket: &WorkOrder, vendors: &[Vendor]) -> Vec<MatchResult> {
        let mut scored: Vec<ScoredVendor> = vendors
            .iter()
            .filter(|vendor| vendor.specialties.contains(&ticket.category))
            .map(|vendor| score_vendor(ticket, vendor))
            .collect();

        scored.sort_by(|a, b| {
            b.raw_score
                .total_cmp(&a.raw_score)
                .then(b.rating.total_cmp(&a.rating))
                .then_with(|| a.result.vendor_id.cmp(&b.result.vendor_id))
        });

        scored.into_iter().map(|scored| scored.result).collect()
    }
}

struct ScoredVendor {
    // Pre-clamp score: additive bonuses can push past 100 and the overflow
    // still has to order candidates.
    raw_score: f32,
    rating: f32,
    result: MatchResult,
}

fn score_vendor(ticket: &WorkOrder, vendor: &Vendor) -> ScoredVendor {
    let mut score = 0.0_f32;
    let mut reasons = Vec::new();

    if vendor.preferred {
        score += PREFERRED_BONUS;
        reasons.push("Preferred vendor".to_string());
    }

    score += vendor.rating * RATING_WEIGHT;
    if vendor.rating >= HIGH_RATING_THRESHOLD {
        reasons.push("Highly rated".to_string());
    }

    let response_bonus =
        RESPONSE_BONUS_CEILING.saturating_sub((vendor.avg_response_time_minutes / 5) * 5);
    if response_bonus > 0 {
        score += response_bonus as f32;
        reasons.push("Fast response time".to_string());
    }

    match vendor.availability {
        Availability::TwentyFourSeven => {
            score += TWENTY_FOUR_SEVEN_BONUS;
            reasons.push("Available 24/7".to_string());
        }
        Availability::Available => {
            score += AVAILABLE_NOW_BONUS;
            reasons.push("Available now".to_string());
        }
        Availability::BusinessHours => {}
    }

    // Deliberately not floored: expensive vendors should keep sinking
    // relative to each other.
    let cost_contribution = (COST_BASELINE_RATE - vendor.hourly_rate as f32) * COST_WEIGHT;
    score += cost_contribution;
    if cost_contribution > 0.0 {
        reasons.push("Cost-effective".to_string());
    }

    if ticket.priority_score > EMERGENCY_PRIORITY_THRESHOLD
        && vendor.availability == Availability::TwentyFourSeven
    {
        score += EMERGENCY_BONUS;
        reasons.push("Emergency coverage for urgent ticket".to_string());
    }

    ScoredVendor {
        raw_score: score,
        rating: vendor.rating,
        result: MatchResult {
            vendor_id: vendor.id.clone(),
            match_score: score.clamp(0.0, 100.0),
            reasons,
        },
    }
}
