//! Display formatting for domain models.
//!
//! Domain models implement [`std::fmt::Display`] directly (in [`models`]),
//! producing markdown suitable for rich terminal rendering. Wrapper types
//! here provide the date formatting those implementations share, keeping
//! presentation concerns out of the data structures themselves.

pub mod datetime;
pub mod models;

// Re-export commonly used types for convenience
pub use datetime::{CalendarDay, LocalDateTime};
