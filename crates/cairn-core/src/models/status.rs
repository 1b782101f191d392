//! Status enumeration for tracked tasks.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of task statuses, derived from milestone completion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    /// No milestone has been completed yet
    #[default]
    NotStarted,

    /// At least one milestone is completed, but not all
    InProgress,

    /// Every milestone is completed (and there is at least one)
    Completed,
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "notstarted" | "not_started" => Ok(TaskStatus::NotStarted),
            "inprogress" | "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            _ => Err(format!("Invalid task status: {s}")),
        }
    }
}

impl TaskStatus {
    /// Convert to the string representation used in persisted records.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::NotStarted => "notstarted",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Completed => "completed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Icons Used
    /// - `✓ Completed` - Checkmark when every milestone is done
    /// - `➤ In Progress` - Arrow while work is underway
    /// - `○ Not Started` - Circle before the first completion
    pub fn with_icon(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "✓ Completed",
            TaskStatus::InProgress => "➤ In Progress",
            TaskStatus::NotStarted => "○ Not Started",
        }
    }
}
