use chrono::{NaiveDateTime, Timelike};

use super::tree::critical_terms;
use crate::workflows::maintenance::catalog::Category;

/// Urgency score plus the final emergency determination for a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriorityAssessment {
    pub score: u8,
    pub emergency: bool,
}

/// Derives a 0-100 urgency score from the triage base priority, the answer
/// path, and the time of day. Pure; callers supply the clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct PriorityScorer;

impl PriorityScorer {
    /// Base priority for tickets that never went through an explicit triage
    /// escalation (direct free-text submissions, empty trees).
    pub const DEFAULT_BASE_PRIORITY: u8 = 50;

    /// Added when the request lands outside vendor business hours.
    pub const AFTER_HOURS_BONUS: u8 = 10;

    const EARLIEST_BUSINESS_HOUR: u32 = 7;
    const LATEST_BUSINESS_HOUR: u32 = 22;

    /// Score an escalated ticket. A critical-term answer (e.g. plumbing
    /// "Flooding") forces the score to exactly 100 and marks the ticket as an
    /// emergency; this is a short-circuit, not an additive bonus. Otherwise
    /// the after-hours modifier applies additively and the result is clamped
    /// to [0, 100].
    pub fn assess(
        &self,
        category: Category,
        answers: &[String],
        base_priority: u8,
        emergency: bool,
        now: NaiveDateTime,
    ) -> PriorityAssessment {
        let critical = answers.iter().any(|answer| {
            critical_terms(category)
                .iter()
                .any(|term| answer.trim().eq_ignore_ascii_case(term))
        });
        if critical {
            return PriorityAssessment {
                score: 100,
                emergency: true,
            };
        }

        let mut score = u32::from(base_priority);
        let hour = now.hour();
        if hour < Self::EARLIEST_BUSINESS_HOUR || hour > Self::LATEST_BUSINESS_HOUR {
            score += u32::from(Self::AFTER_HOURS_BONUS);
        }

        PriorityAssessment {
            score: score.min(100) as u8,
            emergency,
        }
    }
}
