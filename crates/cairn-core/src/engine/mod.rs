//! High-level plan engine: assembly and generation orchestration.
//!
//! The engine ties the pure pieces together:
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌───────────────┐
//! │  timeframe   │   │    parser     │   │   scheduler   │
//! │ (day count)  │──▶│ (stubs, tags) │──▶│ (dated list)  │
//! └──────────────┘   └───────────────┘   └───────────────┘
//!        intent text        raw response        base date
//! ```
//!
//! [`PlanEngine::assemble_plan`] runs that pipeline synchronously over text
//! already in hand; [`PlanEngine::generate_plan`] first obtains the text
//! from a configured list of [`generate::PlanTextSource`]s, falling back in
//! order. Both always return a usable plan: when nothing can be parsed the
//! engine synthesizes its deterministic default plan, which is the single
//! place that fallback policy is defined.
//!
//! # Usage
//!
//! ```rust
//! use cairn_core::PlanEngine;
//!
//! let engine = PlanEngine::builder().build();
//! let plan = engine.assemble_plan(
//!     "in 3 days learn to solve a Rubik's cube",
//!     "Overview: Three days from scramble to solve.\n\n\
//!      Milestones:\n\
//!      Milestone 1 (day 1): Learn the white cross\n\
//!      Milestone 2 (day 2): Learn the middle layer\n\
//!      Milestone 3 (day 3): Solve unaided\n\n\
//!      Tags: #cubing #practice",
//! );
//!
//! assert_eq!(plan.timeframe_days, 3);
//! assert_eq!(plan.milestones.len(), 3);
//! ```

use crate::dates::CanonicalDate;

// Module declarations
pub mod assemble;
pub mod builder;
pub mod generate;

// Re-export the main types
pub use builder::PlanEngineBuilder;
pub use generate::{PlanTextSource, StaticTextSource};

/// Number of tags a plan carries by product convention.
pub const DEFAULT_TAG_TARGET: usize = 2;

/// Main engine interface for assembling and generating plans.
///
/// Stateless per invocation: every method operates only on its inputs and
/// the fixed policy captured at build time, so one engine can be shared
/// freely across callers.
pub struct PlanEngine {
    pub(crate) tag_target: usize,
    pub(crate) base_date: Option<CanonicalDate>,
}

impl PlanEngine {
    /// Creates a builder for configuring an engine.
    pub fn builder() -> PlanEngineBuilder {
        PlanEngineBuilder::new()
    }
}
