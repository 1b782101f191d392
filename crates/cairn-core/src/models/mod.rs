//! Data models for plans and milestones.
//!
//! This module contains the core domain models of the engine. Display
//! implementations live in [`crate::display::models`] to keep data
//! structures and presentation logic separate.
//!
//! The types here are shaped to match the persisted task record one-to-one:
//! serializing a [`Milestone`] list, a progress integer, a [`TaskStatus`],
//! and an optional completion date produces exactly what the document store
//! holds per task, and deserializing tolerates every date representation the
//! store is known to emit (see [`crate::dates`]).

pub mod milestone;
pub mod plan;
pub mod status;
pub mod view;


// Re-export all public types at the models level
pub use milestone::{Milestone, MilestoneStub};
pub use plan::Plan;
pub use status::TaskStatus;
pub use view::TaskProgressView;
