//! Cross-cutting error types for superlists.
//!
//! Storage errors (`DatabaseError`) live in `lists-db`; the web layer maps
//! everything into HTTP responses.

use thiserror::Error;

/// Errors that can be raised by any superlists crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Submitted data failed validation.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
