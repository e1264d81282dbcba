//! Activity-density history command

use anyhow::Result;
use chrono::Utc;

use solace_core::{build_history, Activity, ActivityLevel};

pub fn cmd_history(activities: &[Activity], days: usize, json: bool) -> Result<()> {
    let now = Utc::now();
    let history = build_history(activities, now, days);

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
        return Ok(());
    }

    println!("Activity history (last {days} days, oldest first):");
    let strip: String = history.iter().map(|d| level_glyph(d.level)).collect();
    println!("  {strip}");

    for day in history.iter().filter(|d| !d.activities.is_empty()) {
        println!("  {} [{}]", day.date.format("%Y-%m-%d"), day.level);
        for a in &day.activities {
            let mark = if a.completed { "x" } else { " " };
            println!(
                "    [{mark}] {} - {} ({})",
                a.display_time, a.name, a.activity_type
            );
        }
    }

    Ok(())
}

fn level_glyph(level: ActivityLevel) -> char {
    match level {
        ActivityLevel::None => '.',
        ActivityLevel::Low => '-',
        ActivityLevel::Medium => '+',
        ActivityLevel::High => '#',
    }
}
