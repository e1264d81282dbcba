//! Domain models for Solace

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Activity types with dedicated analytics behavior.
///
/// The `type` field is an open enumeration: anything else ("exercise",
/// "walking", "reading", ...) participates only in generic counts.
pub mod activity_types {
    pub const MOOD: &str = "mood";
    pub const THERAPY: &str = "therapy";
    pub const GAME: &str = "game";
    pub const MEDITATION: &str = "meditation";
    pub const BREATHING: &str = "breathing";
}

/// A single timestamped wellness event, owned by the external activity
/// store. The engine only ever reads these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub name: String,
    pub description: Option<String>,
    /// The instant the activity occurred. All window logic keys on this.
    pub timestamp: DateTime<Utc>,
    /// Duration in minutes, when recorded.
    pub duration: Option<u32>,
    pub completed: bool,
    /// Mood value in [0, 100]. Only meaningful on mood-typed entries.
    pub mood_score: Option<f64>,
    pub mood_note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Activity {
    /// A mood entry that actually carries a usable score.
    ///
    /// The store is supposed to set `mood_score` only on mood-typed
    /// records, but we filter on both type and score rather than trusting
    /// that; a stray or non-finite score never poisons an average.
    pub fn is_scored_mood_entry(&self) -> bool {
        self.activity_type == activity_types::MOOD
            && self.mood_score.is_some_and(f64::is_finite)
    }
}

/// The append-side record shape accepted by the activity store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewActivity {
    pub user_id: Option<String>,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub name: String,
    pub description: Option<String>,
    pub duration: Option<u32>,
    pub mood_score: Option<f64>,
    pub mood_note: Option<String>,
}

/// Midnight at the start of the timestamp's UTC calendar day.
///
/// Day windows throughout the crate are half-open: `[start_of_day(ts),
/// start_of_day(ts) + 1 day)`.
pub fn start_of_day(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive().and_time(NaiveTime::MIN).and_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{mood_entry, ts};

    #[test]
    fn test_start_of_day() {
        let at = ts("2026-08-23T17:45:12Z");
        assert_eq!(start_of_day(at), ts("2026-08-23T00:00:00Z"));
        // Already at midnight stays put
        assert_eq!(start_of_day(start_of_day(at)), start_of_day(at));
    }

    #[test]
    fn test_scored_mood_entry_requires_type_and_score() {
        let at = ts("2026-08-23T09:00:00Z");

        let scored = mood_entry(72.0, at);
        assert!(scored.is_scored_mood_entry());

        let mut unscored = scored.clone();
        unscored.mood_score = None;
        assert!(!unscored.is_scored_mood_entry());

        // A score on a non-mood record is an invariant violation; exclude it
        let mut mistyped = scored.clone();
        mistyped.activity_type = "therapy".to_string();
        assert!(!mistyped.is_scored_mood_entry());

        let mut non_finite = scored;
        non_finite.mood_score = Some(f64::NAN);
        assert!(!non_finite.is_scored_mood_entry());
    }

    #[test]
    fn test_activity_json_shape_matches_dashboard() {
        let activity = mood_entry(65.0, ts("2026-08-23T09:00:00Z"));
        let value = serde_json::to_value(&activity).unwrap();

        // camelCase keys, `type` for the open enumeration
        assert!(value.get("type").is_some());
        assert!(value.get("moodScore").is_some());
        assert!(value.get("userId").is_some());
        assert!(value.get("createdAt").is_some());

        let back: Activity = serde_json::from_value(value).unwrap();
        assert_eq!(back, activity);
    }
}
