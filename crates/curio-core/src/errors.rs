//! Cross-cutting error types for Curio.
//!
//! Domain-specific errors (`StoreError`, `IntelError`, ...) are defined in
//! their respective crates. They converge into `anyhow` in `curio-cli`.

use thiserror::Error;

/// Errors that can be raised by any Curio crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// User input failed validation. Reported, never retried.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
