//! CLI command implementations
//!
//! Commands are organized by view:
//! - `snapshot` - Activity snapshot loading and user filtering
//! - `stats` - Today's summary statistics and the weekly mood summary
//! - `history` - Activity-density heatmap
//! - `insights` - Ranked behavioral insights
//! - `dashboard` - Combined view

pub mod dashboard;
pub mod history;
pub mod insights;
pub mod snapshot;
pub mod stats;

// Re-export command functions for main.rs
pub use dashboard::*;
pub use history::*;
pub use insights::*;
pub use snapshot::*;
pub use stats::*;
