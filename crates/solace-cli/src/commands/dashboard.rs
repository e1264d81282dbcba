//! Combined dashboard view

use anyhow::Result;

use solace_core::{Activity, DEFAULT_SUMMARY_WEEKS, DEFAULT_WINDOW_DAYS};

use super::{cmd_history, cmd_insights, cmd_stats};

pub fn cmd_dashboard(activities: &[Activity]) -> Result<()> {
    cmd_stats(activities, DEFAULT_SUMMARY_WEEKS, false)?;
    println!();
    cmd_history(activities, DEFAULT_WINDOW_DAYS, false)?;
    println!();
    cmd_insights(activities, false)
}
