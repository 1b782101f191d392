//! Progress aggregation over milestone completion.
//!
//! Every operation here is a pure function from a milestone slice to a
//! fresh [`ProgressSnapshot`]: the complete, internally consistent record
//! a caller can persist in a single write. There is no incremental counter
//! to drift: aggregate status and percentage are recomputed from the full
//! list on every operation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    dates::CanonicalDate,
    error::{PlanError, Result},
    models::{Milestone, TaskProgressView, TaskStatus},
};

/// The atomic-write unit for a task's progress state.
///
/// Mirrors the persisted record shape field-for-field: the milestone array,
/// the progress integer, the status, and the optional completion date
/// (omitted from serialized output when absent, never written as null).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressSnapshot {
    /// The full updated milestone list
    pub milestones: Vec<Milestone>,

    /// Completion percentage, 0..=100
    pub progress: u8,

    /// Aggregate status derived from the milestone list
    pub status: TaskStatus,

    /// When the task reached `Completed`; absent in any other status
    #[serde(default, skip_serializing_if = "CanonicalDate::is_absent")]
    pub completed_at: CanonicalDate,
}

impl ProgressSnapshot {
    /// Derives the snapshot for a milestone list as it stands.
    pub fn of(milestones: Vec<Milestone>, manual_progress: u8) -> Self {
        let view = TaskProgressView::compute(&milestones, manual_progress);
        let completed_at = if view.status == TaskStatus::Completed {
            CanonicalDate::now()
        } else {
            CanonicalDate::absent()
        };
        Self {
            milestones,
            progress: view.percentage,
            status: view.status,
            completed_at,
        }
    }

    /// The derived progress view for this snapshot's milestone list.
    pub fn view(&self) -> TaskProgressView {
        TaskProgressView::compute(&self.milestones, self.progress)
    }
}

/// Sets or clears one milestone's completion flag.
///
/// Setting the flag stamps `completed_date`; clearing it removes the date
/// entirely, so the completion invariant holds in both directions. An
/// unknown ID returns [`PlanError::MilestoneNotFound`] and mutates nothing.
pub fn toggle(milestones: &[Milestone], id: Uuid, completed: bool) -> Result<ProgressSnapshot> {
    toggle_many(milestones, &[id], completed)
}

/// Applies the single-milestone toggle rule to a set of IDs, with one
/// aggregate recomputation at the end.
///
/// Equivalent to applying [`toggle`] once per ID. IDs are validated
/// up-front: if any is unknown, the whole batch is rejected and no
/// milestone's state changes.
pub fn toggle_many(
    milestones: &[Milestone],
    ids: &[Uuid],
    completed: bool,
) -> Result<ProgressSnapshot> {
    for id in ids {
        if !milestones.iter().any(|m| m.id == *id) {
            return Err(PlanError::MilestoneNotFound { id: *id });
        }
    }

    let mut updated = milestones.to_vec();
    for milestone in &mut updated {
        if ids.contains(&milestone.id) {
            milestone.is_completed = completed;
            milestone.completed_date = if completed {
                CanonicalDate::now()
            } else {
                CanonicalDate::absent()
            };
        }
    }

    Ok(ProgressSnapshot::of(updated, 0))
}

/// Moves the whole task back to not-started in one logical step.
///
/// Clears every completion flag and completion date and zeroes the
/// percentage.
pub fn reset_all(milestones: &[Milestone]) -> ProgressSnapshot {
    let updated: Vec<Milestone> = milestones
        .iter()
        .cloned()
        .map(|mut m| {
            m.is_completed = false;
            m.completed_date = CanonicalDate::absent();
            m
        })
        .collect();

    ProgressSnapshot::of(updated, 0)
}
