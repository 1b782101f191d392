//! Derived progress view over a milestone list.

use serde::{Deserialize, Serialize};

use super::{Milestone, TaskStatus};

/// Aggregate progress for a task, recomputed from its milestone list.
///
/// Never persisted as an independent source of truth: every operation that
/// changes a milestone recomputes this view from the full list, so it cannot
/// drift from the milestones it summarizes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskProgressView {
    /// Completion percentage, 0..=100
    pub percentage: u8,

    /// Number of completed milestones
    pub completed_count: u32,

    /// Total number of milestones
    pub total_count: u32,

    /// Aggregate status derived from the counts
    pub status: TaskStatus,
}

impl TaskProgressView {
    /// Computes the view from a milestone list.
    ///
    /// `manual_progress` is the externally supplied percentage used when the
    /// list is empty, so a milestone-less task still reports something
    /// defined instead of dividing by zero.
    pub fn compute(milestones: &[Milestone], manual_progress: u8) -> Self {
        let total = milestones.len() as u32;
        let completed = milestones.iter().filter(|m| m.is_completed).count() as u32;

        let percentage = if total == 0 {
            manual_progress.min(100)
        } else {
            ((completed * 100) / total) as u8
        };

        let status = if total > 0 && completed == total {
            TaskStatus::Completed
        } else if completed == 0 {
            TaskStatus::NotStarted
        } else {
            TaskStatus::InProgress
        };

        Self {
            percentage,
            completed_count: completed,
            total_count: total,
            status,
        }
    }
}
