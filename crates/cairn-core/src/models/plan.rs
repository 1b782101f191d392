//! Plan model definition.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::Milestone;

/// A fully assembled, schedulable plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Plan {
    /// Short display title combining the horizon and the goal
    pub title: String,

    /// Full formatted narrative: summary, itemized milestones, tag line.
    /// Laid out so it can be fed back through the response parser.
    pub description: String,

    /// Normalized topic tags
    pub tags: Vec<String>,

    /// Scheduled milestones, sorted ascending by target date
    pub milestones: Vec<Milestone>,

    /// The user's intent text, verbatim
    pub original_intent: String,

    /// Planning horizon in days, within the supported clamp range
    pub timeframe_days: u32,

    /// When the plan was created (UTC); the anchor all milestone day
    /// offsets were computed from
    pub created_at: Timestamp,
}
