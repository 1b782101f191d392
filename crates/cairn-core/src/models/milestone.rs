//! Milestone model definitions.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::dates::CanonicalDate;

/// An undated milestone extracted from raw response text.
///
/// Produced by parsing, consumed by scheduling. `title` and `description`
/// are non-empty: empty captures are replaced with a generated placeholder
/// at parse time, never left blank.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MilestoneStub {
    /// Brief title, derived from the description when not stated separately
    pub title: String,

    /// Full milestone description as written in the response
    pub description: String,

    /// Day-range token as it appeared in the text (e.g. "day 3",
    /// "days 2-4"); empty when the line carried none
    pub day_range: String,
}

/// A scheduled milestone within a plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Milestone {
    /// Unique identifier for the milestone
    pub id: Uuid,

    /// Brief title of the milestone
    pub title: String,

    /// Detailed description of the milestone
    pub description: String,

    /// Absolute date the milestone is due
    pub target_date: CanonicalDate,

    /// Whether the milestone has been completed
    #[serde(default)]
    pub is_completed: bool,

    /// When the milestone was completed. Present iff `is_completed`; the
    /// field is omitted from serialized records entirely when absent, never
    /// written as null.
    #[serde(default, skip_serializing_if = "CanonicalDate::is_absent")]
    pub completed_date: CanonicalDate,

    /// The day-range token the target date was derived from
    pub day_range: String,
}

impl Milestone {
    /// Creates a fresh, incomplete milestone from a stub and its target date.
    pub fn from_stub(stub: &MilestoneStub, target_date: CanonicalDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: stub.title.clone(),
            description: stub.description.clone(),
            target_date,
            is_completed: false,
            completed_date: CanonicalDate::absent(),
            day_range: stub.day_range.clone(),
        }
    }
}
