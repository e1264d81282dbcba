//! Daily aggregate statistics
//!
//! Reduces an activity collection to a single day's summary plus a short
//! trailing weekly mood summary. Pure functions of the inputs and `now`;
//! nothing is persisted and nothing fails.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{activity_types, start_of_day, Activity};

/// Weeks covered by [`summarize_mood_weeks`] unless the caller asks
/// otherwise.
pub const DEFAULT_SUMMARY_WEEKS: usize = 4;

/// Summary statistics for the calendar day containing `now`.
///
/// Recomputed on demand, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyStats {
    /// Mean of today's mood scores, rounded. None when no mood entry was
    /// logged today.
    pub mood_score: Option<i32>,
    /// Share of today's activities marked completed, as a percentage.
    /// 100 when nothing was logged today.
    pub completion_rate: f64,
    /// Therapy sessions across the ENTIRE collection, not just today.
    /// The dashboard shows a lifetime total in this slot, so the window
    /// asymmetry with `total_activities` is intentional.
    pub mindfulness_count: usize,
    /// Activities whose timestamp falls inside today's window.
    pub total_activities: usize,
    /// Wall-clock time the computation ran.
    pub last_updated: DateTime<Utc>,
}

/// Compute today's summary statistics.
///
/// Today is the half-open window `[start_of_day(now), +1 day)`. Mood
/// entries with a missing or non-finite score are silently excluded from
/// the average; a single bad record never suppresses the rest.
pub fn compute_daily_stats(activities: &[Activity], now: DateTime<Utc>) -> DailyStats {
    let today = start_of_day(now);
    let tomorrow = today + Duration::days(1);

    let todays: Vec<&Activity> = activities
        .iter()
        .filter(|a| a.timestamp >= today && a.timestamp < tomorrow)
        .collect();

    let scores: Vec<f64> = todays
        .iter()
        .filter(|a| a.is_scored_mood_entry())
        .filter_map(|a| a.mood_score)
        .collect();
    let mood_score = if scores.is_empty() {
        None
    } else {
        Some((scores.iter().sum::<f64>() / scores.len() as f64).round() as i32)
    };

    let completed = todays.iter().filter(|a| a.completed).count();
    let completion_rate = if todays.is_empty() {
        100.0
    } else {
        completed as f64 / todays.len() as f64 * 100.0
    };

    let mindfulness_count = activities
        .iter()
        .filter(|a| a.activity_type == activity_types::THERAPY)
        .count();

    DailyStats {
        mood_score,
        completion_rate,
        mindfulness_count,
        total_activities: todays.len(),
        last_updated: now,
    }
}

/// Mood aggregates for one trailing calendar week.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyMoodSummary {
    /// Start of the week's half-open window `[week_start, +7 days)`.
    pub week_start: DateTime<Utc>,
    pub average: Option<i32>,
    pub peak: Option<i32>,
    pub low: Option<i32>,
}

/// Bucket scored mood entries into `weeks` trailing 7-day windows, oldest
/// first, with the newest window ending at the close of today.
///
/// Weeks with no mood entries yield `None` aggregates rather than being
/// dropped, so the caller always gets exactly `weeks` entries.
pub fn summarize_mood_weeks(
    activities: &[Activity],
    now: DateTime<Utc>,
    weeks: usize,
) -> Vec<WeeklyMoodSummary> {
    let end = start_of_day(now) + Duration::days(1);

    (0..weeks)
        .map(|i| {
            let start = end - Duration::days((weeks - i) as i64 * 7);
            let stop = start + Duration::days(7);

            let scores: Vec<f64> = activities
                .iter()
                .filter(|a| a.timestamp >= start && a.timestamp < stop)
                .filter(|a| a.is_scored_mood_entry())
                .filter_map(|a| a.mood_score)
                .collect();

            if scores.is_empty() {
                return WeeklyMoodSummary {
                    week_start: start,
                    average: None,
                    peak: None,
                    low: None,
                };
            }

            let average = scores.iter().sum::<f64>() / scores.len() as f64;
            let peak = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
            let low = scores.iter().copied().fold(f64::INFINITY, f64::min);

            WeeklyMoodSummary {
                week_start: start,
                average: Some(average.round() as i32),
                peak: Some(peak.round() as i32),
                low: Some(low.round() as i32),
            }
        })
        .collect()
}
