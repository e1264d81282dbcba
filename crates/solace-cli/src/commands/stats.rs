//! Daily stats command

use anyhow::Result;
use chrono::Utc;

use solace_core::{compute_daily_stats, summarize_mood_weeks, Activity};

pub fn cmd_stats(activities: &[Activity], weeks: usize, json: bool) -> Result<()> {
    let now = Utc::now();
    let stats = compute_daily_stats(activities, now);
    let mood_weeks = summarize_mood_weeks(activities, now, weeks);

    if json {
        let payload = serde_json::json!({
            "dailyStats": stats,
            "moodWeeks": mood_weeks,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    println!("Today's summary ({})", now.format("%B %-d, %Y"));
    match stats.mood_score {
        Some(score) => println!("  Mood score:        {score}%"),
        None => println!("  Mood score:        no data"),
    }
    println!("  Completion rate:   {:.0}%", stats.completion_rate);
    println!("  Therapy sessions:  {}", stats.mindfulness_count);
    println!("  Total activities:  {}", stats.total_activities);
    println!("  Last updated:      {}", stats.last_updated.format("%-I:%M %p"));

    if weeks > 0 {
        println!();
        println!("Mood by week:");
        for week in &mood_weeks {
            let label = week.week_start.format("%Y-%m-%d");
            match (week.average, week.peak, week.low) {
                (Some(average), Some(peak), Some(low)) => {
                    println!("  week of {label}: avg {average}% (peak {peak}, low {low})")
                }
                _ => println!("  week of {label}: no mood entries"),
            }
        }
    }

    Ok(())
}
