//! Insights command

use anyhow::Result;
use chrono::Utc;

use solace_core::{generate_insights, Activity};

pub fn cmd_insights(activities: &[Activity], json: bool) -> Result<()> {
    let now = Utc::now();
    let insights = generate_insights(activities, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&insights)?);
        return Ok(());
    }

    if insights.is_empty() {
        println!("No insights yet - log more activities to get personalized recommendations.");
        return Ok(());
    }

    for insight in &insights {
        println!("[{}] {} ({})", insight.priority, insight.title, insight.category);
        println!("    {}", insight.description);
    }

    Ok(())
}
