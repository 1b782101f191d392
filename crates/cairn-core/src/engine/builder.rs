//! Builder for creating and configuring PlanEngine instances.

use super::{PlanEngine, DEFAULT_TAG_TARGET};
use crate::dates::CanonicalDate;

/// Builder for creating and configuring [`PlanEngine`] instances.
#[derive(Debug, Clone)]
pub struct PlanEngineBuilder {
    tag_target: usize,
    base_date: Option<CanonicalDate>,
}

impl PlanEngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            tag_target: DEFAULT_TAG_TARGET,
            base_date: None,
        }
    }

    /// Sets how many tags an assembled plan carries.
    ///
    /// Parsed tag lists are truncated or padded toward this count.
    pub fn with_tag_target(mut self, tag_target: usize) -> Self {
        self.tag_target = tag_target;
        self
    }

    /// Pins the base date milestones are scheduled from.
    ///
    /// When not set, each assembled plan anchors at its creation instant.
    /// Pinning is useful for deterministic replay and tests.
    pub fn with_base_date(mut self, base_date: CanonicalDate) -> Self {
        self.base_date = Some(base_date);
        self
    }

    /// Builds the configured engine instance.
    pub fn build(self) -> PlanEngine {
        PlanEngine {
            tag_target: self.tag_target,
            base_date: self.base_date,
        }
    }
}

impl Default for PlanEngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}
