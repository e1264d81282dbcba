//! Solace CLI - wellness activity analytics
//!
//! Usage:
//!   solace stats                  Today's summary statistics
//!   solace history --days 28      Activity-density heatmap
//!   solace insights               Ranked behavioral insights
//!   solace dashboard              All of the above in one view

mod cli;
mod commands;


use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let activities = commands::load_activities(&cli.file, cli.user.as_deref())?;

    match cli.command {
        Commands::Stats { weeks, json } => commands::cmd_stats(&activities, weeks, json),
        Commands::History { days, json } => commands::cmd_history(&activities, days, json),
        Commands::Insights { json } => commands::cmd_insights(&activities, json),
        Commands::Dashboard => commands::cmd_dashboard(&activities),
    }
}
