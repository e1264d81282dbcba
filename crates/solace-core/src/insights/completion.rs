//! Completion rate rule
//!
//! Measures how much of the trailing week's plan actually got done and
//! reports on the extremes; the 50-80% middle band stays quiet.

use super::engine::{InsightRule, RuleContext};
use super::types::{Insight, InsightCategory, Priority};

const HIGH_PERFORMANCE_RATE: f64 = 80.0;
const REMINDER_RATE: f64 = 50.0;

pub struct CompletionRule;

impl InsightRule for CompletionRule {
    fn category(&self) -> InsightCategory {
        InsightCategory::Completion
    }

    fn name(&self) -> &'static str {
        "Completion rate"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight> {
        let total = ctx.window.len();
        let completed = ctx.window.iter().filter(|a| a.completed).count();
        // An empty week counts as 0%, which lands in reminder territory
        let rate = if total > 0 {
            completed as f64 / total as f64 * 100.0
        } else {
            0.0
        };

        if rate >= HIGH_PERFORMANCE_RATE {
            Some(Insight::new(
                InsightCategory::Completion,
                Priority::High,
                "High performance",
                format!(
                    "You completed {}% of your activities this week. Excellent commitment!",
                    rate.round() as i64
                ),
            ))
        } else if rate < REMINDER_RATE {
            Some(Insight::new(
                InsightCategory::Completion,
                Priority::Medium,
                "Activity reminder",
                "Setting smaller, more achievable daily goals could work well for you.",
            ))
        } else {
            None
        }
    }
}
