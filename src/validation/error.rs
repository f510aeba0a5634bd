//! Input constraint violations.

use thiserror::Error;

/// A request field outside its declared bound.
///
/// This is the only failure the scoring core can produce. It is raised while
/// building a typed input, before any algorithm runs, so a rejected request
/// never yields a partial result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Field is smaller than its lower bound.
    #[error("{field} must be >= {min}, got {value}")]
    BelowMinimum {
        field: &'static str,
        value: String,
        min: String,
    },

    /// Field is larger than its upper bound.
    #[error("{field} must be <= {max}, got {value}")]
    AboveMaximum {
        field: &'static str,
        value: String,
        max: String,
    },

    /// Field is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite { field: &'static str },

    /// Embedding carried no components.
    #[error("embedding must contain at least one value")]
    EmptyEmbedding,
}

impl ValidationError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::BelowMinimum { field, .. }
            | ValidationError::AboveMaximum { field, .. }
            | ValidationError::NotFinite { field } => *field,
            ValidationError::EmptyEmbedding => "embedding",
        }
    }
}
