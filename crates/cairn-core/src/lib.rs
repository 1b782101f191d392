//! Core library for the Cairn milestone planning engine.
//!
//! Cairn turns a free-form planning response from a text-generation service,
//! together with the user's intent text, into a validated, date-scheduled,
//! progress-trackable milestone plan. The engine sits between an unreliable
//! text generator and a persistence layer that must never receive
//! partially-invalid records, so every operation degrades to a documented
//! fallback instead of failing on malformed input.
//!
//! # Architecture
//!
//! - **Date canonicalization** ([`dates`]): every externally-sourced
//!   date-like value is resolved, once, into a value that is either valid
//!   or explicitly absent
//! - **Timeframe extraction** ([`timeframe`]): day-counts out of intent
//!   text, clamped to the supported horizon
//! - **Response parsing** ([`parser`]): summary, milestone stubs, and tags
//!   out of semi-structured response text
//! - **Scheduling** ([`scheduler`]): day-range tokens to absolute target
//!   dates, anchored at the base date
//! - **Assembly & generation** ([`engine`]): the pipeline above behind one
//!   interface, including the deterministic default plan and ordered
//!   fallback across text sources
//! - **Progress aggregation** ([`progress`]): completion toggles, resets,
//!   and the derived status/percentage view, returned as atomic snapshots
//!
//! # Quick Start
//!
//! ```rust
//! use cairn_core::{progress, PlanEngine};
//!
//! let engine = PlanEngine::builder().build();
//!
//! // Assemble a plan from text already in hand.
//! let plan = engine.assemble_plan(
//!     "in 3 days learn the basics of sourdough",
//!     "Overview: From starter to loaf in three days.\n\n\
//!      Milestones:\n\
//!      Milestone 1 (day 1): Feed the starter and mix the levain\n\
//!      Milestone 2 (day 2): Mix, fold, and shape the dough\n\
//!      Milestone 3 (day 3): Bake and evaluate the first loaf\n\n\
//!      Tags: #baking #sourdough",
//! );
//! assert_eq!(plan.milestones.len(), 3);
//! assert_eq!(plan.tags.len(), 2);
//!
//! // Later: flip a milestone and persist the returned snapshot.
//! let first = plan.milestones[0].id;
//! let snapshot = progress::toggle(&plan.milestones, first, true)?;
//! assert_eq!(snapshot.progress, 33);
//! # Ok::<(), cairn_core::PlanError>(())
//! ```

pub mod dates;
pub mod display;
pub mod engine;
pub mod error;
pub mod models;
pub mod parser;
pub mod progress;
pub mod scheduler;
pub mod timeframe;

// Re-export commonly used types
pub use dates::{CanonicalDate, RawDateValue};
pub use engine::{PlanEngine, PlanEngineBuilder, PlanTextSource, StaticTextSource};
pub use error::{PlanError, Result};
pub use models::{Milestone, MilestoneStub, Plan, TaskProgressView, TaskStatus};
pub use parser::ParsedResponse;
pub use progress::ProgressSnapshot;
