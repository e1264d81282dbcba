//! Solace Core Library
//!
//! Analytics for the Solace wellness dashboard. Three pure, stateless
//! transformations over a time-stamped activity log:
//! - Daily aggregate statistics (mood average, completion rate, totals)
//! - Rolling activity-density history for the heatmap
//! - Heuristic insight rule engine with priority ranking
//!
//! All three take an immutable activity collection plus `now` and share no
//! mutable state; callers may invoke them independently, in any order, and
//! concurrently. Persistence, transport, and scheduling live behind the
//! [`store::ActivityStore`] boundary and in the callers, never here.

pub mod error;
pub mod history;
pub mod insights;
pub mod models;
pub mod stats;
pub mod store;

#[cfg(test)]
pub(crate) mod test_utils;

pub use error::{Error, Result};
pub use history::{
    build_history, ActivityLevel, ActivitySummary, DayActivity, DEFAULT_WINDOW_DAYS,
};
pub use insights::{
    generate_insights, Insight, InsightCategory, InsightEngine, InsightRule, Priority,
    RuleContext, MAX_INSIGHTS,
};
pub use models::{start_of_day, Activity, NewActivity};
pub use stats::{
    compute_daily_stats, summarize_mood_weeks, DailyStats, WeeklyMoodSummary,
    DEFAULT_SUMMARY_WEEKS,
};
pub use store::{load_snapshot, ActivityStore, MemoryStore};
