//! Rolling activity-density history
//!
//! Buckets an activity collection into one entry per trailing calendar
//! day, each carrying a coarse density level for the dashboard heatmap
//! and the day's activity summaries.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{start_of_day, Activity};

/// Days covered by [`build_history`] unless the caller asks otherwise.
pub const DEFAULT_WINDOW_DAYS: usize = 28;

/// Coarse bucketing of a day's activity count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityLevel {
    None,
    Low,
    Medium,
    High,
}

impl ActivityLevel {
    /// Exact cut points: 0 none, 1-2 low, 3-4 medium, 5+ high.
    pub fn for_count(count: usize) -> Self {
        match count {
            0 => ActivityLevel::None,
            1..=2 => ActivityLevel::Low,
            3..=4 => ActivityLevel::Medium,
            _ => ActivityLevel::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::None => "none",
            ActivityLevel::Low => "low",
            ActivityLevel::Medium => "medium",
            ActivityLevel::High => "high",
        }
    }
}

impl std::fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What the heatmap shows for a single activity when a day is expanded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivitySummary {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub name: String,
    pub completed: bool,
    /// Clock time like "7:05 AM", derived from the timestamp.
    pub display_time: String,
}

/// One day of the trailing history window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayActivity {
    /// Start-of-day instant for this bucket.
    pub date: DateTime<Utc>,
    pub level: ActivityLevel,
    /// Day's activities in source-collection order.
    pub activities: Vec<ActivitySummary>,
}

/// Bucket activities into exactly `window_days` day entries, oldest first,
/// ending with the day containing `now`.
///
/// Each day is the half-open window `[d, d + 1 day)`. Deterministic for
/// fixed inputs and `now`.
pub fn build_history(
    activities: &[Activity],
    now: DateTime<Utc>,
    window_days: usize,
) -> Vec<DayActivity> {
    let today = start_of_day(now);

    (0..window_days)
        .rev()
        .map(|days_back| {
            let date = today - Duration::days(days_back as i64);
            let next = date + Duration::days(1);

            let summaries: Vec<ActivitySummary> = activities
                .iter()
                .filter(|a| a.timestamp >= date && a.timestamp < next)
                .map(|a| ActivitySummary {
                    activity_type: a.activity_type.clone(),
                    name: a.name.clone(),
                    completed: a.completed,
                    display_time: a.timestamp.format("%-I:%M %p").to_string(),
                })
                .collect();

            DayActivity {
                date,
                level: ActivityLevel::for_count(summaries.len()),
                activities: summaries,
            }
        })
        .collect()
}
