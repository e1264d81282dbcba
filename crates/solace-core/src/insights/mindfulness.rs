//! Mindfulness consistency rule
//!
//! Looks at how often mindfulness practice (games, meditation, breathing)
//! showed up over the trailing week and either celebrates a daily habit or
//! nudges toward one.

use crate::models::activity_types;

use super::engine::{InsightRule, RuleContext, TRAILING_WINDOW_DAYS};
use super::types::{Insight, InsightCategory, Priority};

const PRACTICE_TYPES: [&str; 3] = [
    activity_types::GAME,
    activity_types::MEDITATION,
    activity_types::BREATHING,
];

pub struct MindfulnessRule;

impl InsightRule for MindfulnessRule {
    fn category(&self) -> InsightCategory {
        InsightCategory::Consistency
    }

    fn name(&self) -> &'static str {
        "Mindfulness consistency"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight> {
        let practiced = ctx
            .window
            .iter()
            .filter(|a| PRACTICE_TYPES.contains(&a.activity_type.as_str()))
            .count();
        if practiced == 0 {
            return None;
        }

        let daily_average = practiced as f64 / TRAILING_WINDOW_DAYS as f64;
        if daily_average >= 1.0 {
            Some(Insight::new(
                InsightCategory::Consistency,
                Priority::Medium,
                "Consistent practice",
                "You have been practicing mindfulness regularly. This can help reduce \
                 stress and improve focus.",
            ))
        } else {
            Some(Insight::new(
                InsightCategory::Consistency,
                Priority::Low,
                "Mindfulness opportunity",
                "Try weaving more mindfulness activities into your daily routine.",
            ))
        }
    }
}
