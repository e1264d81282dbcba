//! Chronotype rule
//!
//! Splits the trailing week's activity between mornings (before noon) and
//! evenings (18:00 onward) and reports a strict majority either way.
//! Afternoon entries belong to neither bucket.

use chrono::Timelike;

use super::engine::{InsightRule, RuleContext};
use super::types::{Insight, InsightCategory, Priority};

const MORNING_END_HOUR: u32 = 12;
const EVENING_START_HOUR: u32 = 18;

pub struct ChronotypeRule;

impl InsightRule for ChronotypeRule {
    fn category(&self) -> InsightCategory {
        InsightCategory::Chronotype
    }

    fn name(&self) -> &'static str {
        "Chronotype"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight> {
        let morning = ctx
            .window
            .iter()
            .filter(|a| a.timestamp.hour() < MORNING_END_HOUR)
            .count();
        let evening = ctx
            .window
            .iter()
            .filter(|a| a.timestamp.hour() >= EVENING_START_HOUR)
            .count();

        if morning > evening {
            Some(Insight::new(
                InsightCategory::Chronotype,
                Priority::Medium,
                "Morning person",
                "You are most active in the mornings. Consider scheduling important \
                 tasks during your peak hours.",
            ))
        } else if evening > morning {
            Some(Insight::new(
                InsightCategory::Chronotype,
                Priority::Medium,
                "Night owl",
                "You tend to be most active in the evenings. Make sure to wind down \
                 before bed.",
            ))
        } else {
            None
        }
    }
}
