//! Activity snapshot loading

use std::path::Path;

use anyhow::{Context, Result};
use solace_core::Activity;

/// Load the activity snapshot, optionally narrowing it to one user.
///
/// Unowned records come from the dashboard's default-user mode and
/// participate in every view.
pub fn load_activities(path: &Path, user: Option<&str>) -> Result<Vec<Activity>> {
    let mut activities = solace_core::load_snapshot(path)
        .with_context(|| format!("Failed to load activity snapshot {}", path.display()))?;

    if let Some(user) = user {
        activities.retain(|a| a.user_id.is_none() || a.user_id.as_deref() == Some(user));
    }

    tracing::debug!(count = activities.len(), "Loaded activity snapshot");
    Ok(activities)
}
