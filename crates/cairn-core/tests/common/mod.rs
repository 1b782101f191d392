use cairn_core::{dates::CanonicalDate, PlanEngine};
use jiff::Timestamp;

/// Base date every test plan is anchored at: 2022-01-01T00:00:00Z.
pub fn fixed_base() -> CanonicalDate {
    CanonicalDate::from(Timestamp::from_second(1640995200).unwrap())
}

/// Helper function to create an engine pinned to the fixed base date.
pub fn create_test_engine() -> PlanEngine {
    PlanEngine::builder().with_base_date(fixed_base()).build()
}

/// A response following the expected three-section convention.
pub const SAMPLE_RESPONSE: &str = "\
Overview: A focused week that takes you from zero to a finished sketchbook page.

Milestones:
Milestone 1 (day 1): Gather materials and set up a drawing space
Milestone 2 (days 2-4): Practice line work and basic shapes daily
Milestone 3 (days 5-6): Draw one full still life from reference
Milestone 4 (day 7): Finish a complete sketchbook page unaided

Tags: #drawing #practice";
