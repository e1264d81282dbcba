//! CLI argument definitions using clap
//!
//! This module contains all the clap structs and enums for parsing CLI
//! arguments. The actual command implementations are in the `commands`
//! module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use solace_core::{DEFAULT_SUMMARY_WEEKS, DEFAULT_WINDOW_DAYS};

/// Solace - analytics over a wellness activity log
#[derive(Parser)]
#[command(name = "solace")]
#[command(about = "Daily stats, density history, and insights for a wellness activity log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Activity snapshot file (JSON array of activity records)
    #[arg(long, default_value = "activities.json", global = true)]
    pub file: PathBuf,

    /// Only include this user's activities (unowned records are always
    /// included)
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's summary statistics
    Stats {
        /// Trailing weeks of mood summary to include
        #[arg(long, default_value_t = DEFAULT_SUMMARY_WEEKS)]
        weeks: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the rolling activity-density history
    History {
        /// Number of trailing days to cover
        #[arg(long, default_value_t = DEFAULT_WINDOW_DAYS)]
        days: usize,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show ranked behavioral insights
    Insights {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show stats, history, and insights in one view
    Dashboard,
}
