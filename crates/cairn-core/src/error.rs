//! Error types for the planning engine.

use thiserror::Error;
use uuid::Uuid;

/// Comprehensive error type for all engine operations.
///
/// Malformed *input data* (garbage response text, broken dates, out-of-range
/// timeframes) never surfaces here; those paths degrade to documented
/// fallback values. The variants below cover the failures a caller must
/// actually handle.
#[derive(Error, Debug)]
pub enum PlanError {
    /// Milestone not found for the given ID in a toggle request
    #[error("Milestone with ID {id} not found")]
    MilestoneNotFound { id: Uuid },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Every configured text source failed to produce a response
    #[error("Plan generation failed: {message}")]
    Generation { message: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
}

/// Builder for creating input validation errors.
pub struct InvalidInputBuilder {
    field: String,
}

impl InvalidInputBuilder {
    /// Create a new invalid input error builder for a field.
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }

    /// Build the error with the given reason.
    pub fn with_reason(self, reason: impl Into<String>) -> PlanError {
        PlanError::InvalidInput {
            field: self.field,
            reason: reason.into(),
        }
    }
}

impl PlanError {
    /// Creates a builder for input validation errors.
    pub fn invalid_input(field: impl Into<String>) -> InvalidInputBuilder {
        InvalidInputBuilder::new(field)
    }

    /// Creates a generation error from the accumulated source failures.
    pub fn generation(message: impl Into<String>) -> Self {
        PlanError::Generation {
            message: message.into(),
        }
    }
}

/// Result type alias for engine operations
pub type Result<T> = std::result::Result<T, PlanError>;
