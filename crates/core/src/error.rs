//! Domain error type shared across the workspace.

use crate::types::DbId;

/// A domain-level error.
///
/// Carries no HTTP semantics of its own; the API layer maps each variant to
/// a status code and a stable error code.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A referenced entity does not exist.
    #[error("{entity} with id {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Input failed domain validation.
    #[error("{0}")]
    Validation(String),

    /// The operation conflicts with existing state.
    #[error("{0}")]
    Conflict(String),

    /// The caller is not authenticated.
    #[error("{0}")]
    Unauthorized(String),

    /// The caller is authenticated but not allowed to do this.
    #[error("{0}")]
    Forbidden(String),

    /// An unexpected internal failure.
    #[error("{0}")]
    Internal(String),
}
