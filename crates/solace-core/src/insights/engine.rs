//! Insight engine - evaluates the rule battery and ranks what fires

use chrono::{DateTime, Duration, Utc};

use crate::models::Activity;

use super::types::{Insight, InsightCategory};
use super::{ChronotypeRule, CompletionRule, MindfulnessRule, MoodTrendRule};

/// Length of the trailing window shared by every rule, in days.
pub const TRAILING_WINDOW_DAYS: i64 = 7;

/// Upper bound on insights returned from one evaluation pass.
pub const MAX_INSIGHTS: usize = 3;

/// Context provided to insight rules.
///
/// The trailing window is computed once here and shared; rules never
/// re-window the collection themselves.
pub struct RuleContext<'a> {
    /// Activities with `timestamp >= now - 7 days`, in source order.
    pub window: Vec<&'a Activity>,
    /// The instant the evaluation pass started.
    pub now: DateTime<Utc>,
}

impl<'a> RuleContext<'a> {
    /// Build the shared trailing-week context from the full collection.
    pub fn trailing_week(activities: &'a [Activity], now: DateTime<Utc>) -> Self {
        let cutoff = now - Duration::days(TRAILING_WINDOW_DAYS);
        let window = activities.iter().filter(|a| a.timestamp >= cutoff).collect();
        Self { window, now }
    }
}

/// An independent heuristic over the shared trailing window.
///
/// Rules are infallible and side-effect free: absence of data suppresses
/// emission, it never errors. Each rule emits at most one insight and no
/// rule sees another rule's output.
pub trait InsightRule: Send + Sync {
    /// The concern this rule reports on
    fn category(&self) -> InsightCategory;

    /// Human-readable name
    fn name(&self) -> &'static str;

    /// Evaluate the rule against the shared window
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Insight>;
}

/// The main engine: a fixed battery of rules evaluated in registration
/// order, ranked by priority, bounded to [`MAX_INSIGHTS`].
pub struct InsightEngine {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightEngine {
    /// Create an engine with the built-in rules in their fixed order.
    pub fn new() -> Self {
        let mut engine = Self { rules: vec![] };

        engine.register(Box::new(MoodTrendRule));
        engine.register(Box::new(MindfulnessRule));
        engine.register(Box::new(CompletionRule));
        engine.register(Box::new(ChronotypeRule));

        engine
    }

    /// Register an insight rule
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    /// Evaluate every rule over the trailing week and return the ranked,
    /// size-bounded result.
    ///
    /// Sorting is stable: within a priority, rule-evaluation order is
    /// preserved.
    pub fn generate(&self, activities: &[Activity], now: DateTime<Utc>) -> Vec<Insight> {
        let ctx = RuleContext::trailing_week(activities, now);
        let mut insights = Vec::new();

        for rule in &self.rules {
            match rule.evaluate(&ctx) {
                Some(insight) => {
                    tracing::debug!(
                        rule = rule.name(),
                        priority = insight.priority.as_str(),
                        "Insight rule fired"
                    );
                    insights.push(insight);
                }
                None => {
                    tracing::debug!(rule = rule.name(), "Insight rule produced nothing");
                }
            }
        }

        insights.sort_by_key(|i| i.priority.rank());
        insights.truncate(MAX_INSIGHTS);
        insights
    }

    /// Get the categories of the registered rules, in evaluation order
    pub fn categories(&self) -> Vec<InsightCategory> {
        self.rules.iter().map(|r| r.category()).collect()
    }
}

/// Evaluate the built-in rule battery over `activities`.
pub fn generate_insights(activities: &[Activity], now: DateTime<Utc>) -> Vec<Insight> {
    InsightEngine::new().generate(activities, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::Priority;
    use crate::test_utils::{activity, mood_entry, ts};

    #[test]
    fn test_engine_registers_rules_in_fixed_order() {
        let engine = InsightEngine::new();
        assert_eq!(
            engine.categories(),
            vec![
                InsightCategory::Mood,
                InsightCategory::Consistency,
                InsightCategory::Completion,
                InsightCategory::Chronotype,
            ]
        );
    }

    #[test]
    fn test_window_excludes_older_than_seven_days() {
        let now = ts("2026-08-23T12:00:00Z");
        let activities = vec![
            activity("reading", ts("2026-08-15T11:00:00Z")),
            activity("reading", ts("2026-08-20T11:00:00Z")),
        ];

        let ctx = RuleContext::trailing_week(&activities, now);
        assert_eq!(ctx.window.len(), 1);
        assert_eq!(ctx.window[0].timestamp, ts("2026-08-20T11:00:00Z"));
    }

    #[test]
    fn test_results_bounded_and_priority_sorted() {
        let now = ts("2026-08-23T12:00:00Z");
        let mut activities = vec![
            // Mood trend fires high: latest 80 > avg 60
            mood_entry(40.0, ts("2026-08-21T09:00:00Z")),
            mood_entry(80.0, ts("2026-08-22T09:00:00Z")),
            // One meditation: daily average 1/7 < 1, fires low
            activity("meditation", ts("2026-08-22T20:00:00Z")),
        ];
        // Lots of incomplete evening entries: completion fires medium
        // (reminder) and chronotype fires medium (night owl)
        for day in 18..22 {
            let mut a = activity("reading", ts(&format!("2026-08-{day}T20:00:00Z")));
            a.completed = false;
            activities.push(a);
        }

        let insights = generate_insights(&activities, now);

        // Four rules fired; the low-priority one is truncated away
        assert_eq!(insights.len(), MAX_INSIGHTS);
        assert_eq!(insights[0].priority, Priority::High);
        assert_eq!(insights[1].priority, Priority::Medium);
        assert_eq!(insights[2].priority, Priority::Medium);
        for pair in insights.windows(2) {
            assert!(pair[0].priority.rank() <= pair[1].priority.rank());
        }
    }

    #[test]
    fn test_equal_priority_keeps_rule_order() {
        let now = ts("2026-08-23T12:00:00Z");
        // Completion (reminder, medium) and chronotype (morning person,
        // medium) both fire; completion is registered first.
        let mut activities = Vec::new();
        for day in 19..22 {
            let mut a = activity("walking", ts(&format!("2026-08-{day}T08:00:00Z")));
            a.completed = false;
            activities.push(a);
        }

        let insights = generate_insights(&activities, now);
        assert_eq!(insights.len(), 2);
        assert_eq!(insights[0].category, InsightCategory::Completion);
        assert_eq!(insights[1].category, InsightCategory::Chronotype);
    }

    #[test]
    fn test_empty_collection_emits_only_the_reminder() {
        // An empty window still trips the completion reminder (rate 0);
        // every other rule stays silent.
        let now = ts("2026-08-23T12:00:00Z");
        let insights = generate_insights(&[], now);

        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].category, InsightCategory::Completion);
        assert_eq!(insights[0].priority, Priority::Medium);
    }

    #[test]
    fn test_idempotent_for_fixed_now() {
        let now = ts("2026-08-23T12:00:00Z");
        let activities = vec![
            mood_entry(40.0, ts("2026-08-21T09:00:00Z")),
            mood_entry(80.0, ts("2026-08-22T09:00:00Z")),
        ];

        assert_eq!(
            generate_insights(&activities, now),
            generate_insights(&activities, now)
        );
    }
}
