//! Core types for the insight rule engine

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The concern an insight addresses.
///
/// Consumed by the rendering layer for iconography only; no engine logic
/// branches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightCategory {
    /// Mood trajectory against the weekly average
    Mood,
    /// Regularity of mindfulness practice
    Consistency,
    /// Weekly activity completion rate
    Completion,
    /// Morning-versus-evening activity split
    Chronotype,
}

impl InsightCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightCategory::Mood => "mood",
            InsightCategory::Consistency => "consistency",
            InsightCategory::Completion => "completion",
            InsightCategory::Chronotype => "chronotype",
        }
    }
}

impl fmt::Display for InsightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mood" => Ok(InsightCategory::Mood),
            "consistency" => Ok(InsightCategory::Consistency),
            "completion" => Ok(InsightCategory::Completion),
            "chronotype" => Ok(InsightCategory::Chronotype),
            _ => Err(format!("Unknown insight category: {}", s)),
        }
    }
}

/// Display priority of an insight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Numeric rank for sorting (lower = shown first).
    pub fn rank(&self) -> u8 {
        match self {
            Priority::High => 0,
            Priority::Medium => 1,
            Priority::Low => 2,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            _ => Err(format!("Unknown priority: {}", s)),
        }
    }
}

/// A rule-generated behavioral observation. Ephemeral and re-derived on
/// every refresh; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Insight {
    pub title: String,
    pub description: String,
    pub category: InsightCategory,
    pub priority: Priority,
}

impl Insight {
    pub fn new(
        category: InsightCategory,
        priority: Priority,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            category,
            priority,
        }
    }
}
