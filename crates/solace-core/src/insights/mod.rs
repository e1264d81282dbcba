//! Insight Rule Engine - Heuristic Behavioral Insights
//!
//! A fixed battery of independent heuristic rules evaluated over a shared
//! trailing 7-day activity window. Each rule emits at most one insight;
//! the engine ranks whatever fired by priority and returns at most three.
//!
//! ## Built-in Rules
//!
//! - **Mood trend** - latest mood versus the weekly average
//! - **Mindfulness consistency** - practice frequency over the week
//! - **Completion rate** - share of planned activities completed
//! - **Chronotype** - morning versus evening activity split
//!
//! ## Usage
//!
//! ```rust,ignore
//! use solace_core::insights::generate_insights;
//!
//! let insights = generate_insights(&activities, Utc::now());
//! ```

pub mod chronotype;
pub mod completion;
pub mod engine;
pub mod mindfulness;
pub mod mood_trend;
pub mod types;

pub use chronotype::ChronotypeRule;
pub use completion::CompletionRule;
pub use engine::{
    generate_insights, InsightEngine, InsightRule, RuleContext, MAX_INSIGHTS,
    TRAILING_WINDOW_DAYS,
};
pub use mindfulness::MindfulnessRule;
pub use mood_trend::MoodTrendRule;
pub use types::{Insight, InsightCategory, Priority};
