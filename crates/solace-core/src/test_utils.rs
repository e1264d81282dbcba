//! Shared fixtures for unit tests

use chrono::{DateTime, Utc};

use crate::models::{activity_types, Activity};

/// Parse an RFC 3339 timestamp, panicking on bad test input.
pub fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .unwrap_or_else(|e| panic!("bad test timestamp {s}: {e}"))
        .with_timezone(&Utc)
}

/// A completed activity of the given type at the given instant.
pub fn activity(activity_type: &str, timestamp: DateTime<Utc>) -> Activity {
    use std::sync::atomic::{AtomicU64, Ordering};
    static COUNTER: AtomicU64 = AtomicU64::new(0);

    Activity {
        id: format!("act-test-{}", COUNTER.fetch_add(1, Ordering::SeqCst)),
        user_id: None,
        activity_type: activity_type.to_string(),
        name: format!("Test {activity_type}"),
        description: None,
        timestamp,
        duration: Some(15),
        completed: true,
        mood_score: None,
        mood_note: None,
        created_at: timestamp,
        updated_at: timestamp,
    }
}

/// A mood entry carrying the given score.
pub fn mood_entry(score: f64, timestamp: DateTime<Utc>) -> Activity {
    let mut a = activity(activity_types::MOOD, timestamp);
    a.mood_score = Some(score);
    a
}
