//! Activity store boundary
//!
//! The engine never performs I/O itself: it consumes an in-memory
//! collection that a collaborator has already obtained. This module
//! defines that collaborator's contract plus two small reference pieces -
//! an in-memory store for tests and drivers, and a JSON snapshot loader
//! for collections exported by the dashboard.

use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;

use crate::error::{Error, Result};
use crate::models::{Activity, NewActivity};

/// The contract the engine's callers rely on to obtain activities.
pub trait ActivityStore: Send + Sync {
    /// All activities visible to the given user, oldest intake order
    /// preserved. `None` is anonymous/default-user mode and sees
    /// everything; a named user sees their own records plus unowned ones.
    /// May be empty; no upper bound on size.
    fn activities_for_user(&self, user_id: Option<&str>) -> Result<Vec<Activity>>;

    /// Append a new activity record. The engine is re-invoked by the
    /// caller after an append, never notified incrementally.
    fn log_activity(&self, new: NewActivity) -> Result<Activity>;
}

struct MemoryState {
    activities: Vec<Activity>,
    next_id: u64,
}

/// In-memory reference store.
///
/// Backs tests and the demo driver; real deployments put a persistent
/// store behind [`ActivityStore`] instead.
pub struct MemoryStore {
    inner: Mutex<MemoryState>,
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::with_activities(Vec::new())
    }

    /// Seed the store with an existing collection.
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        let next_id = activities.len() as u64 + 1;
        Self {
            inner: Mutex::new(MemoryState {
                activities,
                next_id,
            }),
        }
    }
}

impl ActivityStore for MemoryStore {
    fn activities_for_user(&self, user_id: Option<&str>) -> Result<Vec<Activity>> {
        let state = self.inner.lock().expect("store lock poisoned");
        let activities = match user_id {
            None => state.activities.clone(),
            Some(user) => state
                .activities
                .iter()
                .filter(|a| a.user_id.is_none() || a.user_id.as_deref() == Some(user))
                .cloned()
                .collect(),
        };
        Ok(activities)
    }

    fn log_activity(&self, new: NewActivity) -> Result<Activity> {
        if new.activity_type.trim().is_empty() || new.name.trim().is_empty() {
            return Err(Error::InvalidData(
                "activity type and name are required".to_string(),
            ));
        }
        if let Some(score) = new.mood_score {
            if !score.is_finite() || !(0.0..=100.0).contains(&score) {
                return Err(Error::InvalidData(format!(
                    "mood score out of range: {score}"
                )));
            }
        }

        let mut state = self.inner.lock().expect("store lock poisoned");
        let now = Utc::now();
        let activity = Activity {
            id: format!("act-{}", state.next_id),
            user_id: new.user_id,
            activity_type: new.activity_type,
            name: new.name,
            description: new.description,
            timestamp: now,
            duration: new.duration,
            completed: true,
            mood_score: new.mood_score,
            mood_note: new.mood_note,
            created_at: now,
            updated_at: now,
        };
        state.next_id += 1;
        state.activities.push(activity.clone());

        tracing::debug!(
            id = %activity.id,
            activity_type = %activity.activity_type,
            "Activity logged"
        );
        Ok(activity)
    }
}

/// Load an activity snapshot (a JSON array of records) from disk.
///
/// This is the shape the dashboard exports; decoding failures surface as
/// errors here, before the engine is ever involved.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<Activity>> {
    let bytes = std::fs::read(path)?;
    let activities = serde_json::from_slice(&bytes)?;
    Ok(activities)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::activity_types;
    use std::io::Write;

    fn new_activity(user: Option<&str>, name: &str) -> NewActivity {
        NewActivity {
            user_id: user.map(str::to_string),
            activity_type: "meditation".to_string(),
            name: name.to_string(),
            description: None,
            duration: Some(10),
            mood_score: None,
            mood_note: None,
        }
    }

    #[test]
    fn test_log_then_list_round_trips() {
        let store = MemoryStore::new();
        let logged = store.log_activity(new_activity(None, "Evening wind-down")).unwrap();
        assert_eq!(logged.id, "act-1");
        assert!(logged.completed);

        let all = store.activities_for_user(None).unwrap();
        assert_eq!(all, vec![logged]);
    }

    #[test]
    fn test_ids_are_unique() {
        let store = MemoryStore::new();
        let a = store.log_activity(new_activity(None, "One")).unwrap();
        let b = store.log_activity(new_activity(None, "Two")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_user_filter_includes_unowned_records() {
        let store = MemoryStore::new();
        store.log_activity(new_activity(Some("ana"), "Ana's walk")).unwrap();
        store.log_activity(new_activity(Some("ben"), "Ben's run")).unwrap();
        store.log_activity(new_activity(None, "Shared session")).unwrap();

        let anas = store.activities_for_user(Some("ana")).unwrap();
        assert_eq!(anas.len(), 2);
        assert!(anas.iter().all(|a| a.user_id.as_deref() != Some("ben")));

        let everything = store.activities_for_user(None).unwrap();
        assert_eq!(everything.len(), 3);
    }

    #[test]
    fn test_rejects_blank_required_fields() {
        let store = MemoryStore::new();
        let mut blank = new_activity(None, "  ");
        assert!(matches!(
            store.log_activity(blank.clone()),
            Err(Error::InvalidData(_))
        ));

        blank.name = "Named".to_string();
        blank.activity_type = String::new();
        assert!(matches!(
            store.log_activity(blank),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_rejects_out_of_range_mood_score() {
        let store = MemoryStore::new();
        let mut entry = new_activity(None, "Check-in");
        entry.activity_type = activity_types::MOOD.to_string();
        entry.mood_score = Some(150.0);
        assert!(matches!(
            store.log_activity(entry),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_load_snapshot_round_trips() {
        let store = MemoryStore::new();
        store.log_activity(new_activity(None, "Morning pages")).unwrap();
        let activities = store.activities_for_user(None).unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&activities).unwrap().as_bytes())
            .unwrap();

        let loaded = load_snapshot(file.path()).unwrap();
        assert_eq!(loaded, activities);
    }

    #[test]
    fn test_load_snapshot_missing_file_errors() {
        assert!(matches!(
            load_snapshot("/no/such/snapshot.json"),
            Err(Error::Io(_))
        ));
    }
}
