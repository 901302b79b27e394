//! Cross-cutting error types for WorkHub.
//!
//! This module defines the deterministic, domain-level errors: bad field values,
//! rejected status transitions, and missing referenced entities. Storage errors
//! (`DatabaseError`) are defined in `hub-db`, which wraps `CoreError`. A unified
//! error for the binary is deferred to `hub-cli` where all crate errors converge.

use thiserror::Error;

use crate::enums::EntityKind;

/// Errors that can be raised by any WorkHub crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {kind} {id}")]
    NotFound { kind: EntityKind, id: i64 },

    /// A state machine transition was attempted that is not allowed.
    #[error("Illegal {kind} transition from {from} to {to}")]
    IllegalTransition {
        kind: EntityKind,
        from: String,
        to: String,
    },

    /// Data failed validation (missing field, out-of-range value).
    #[error("Validation error: {0}")]
    Validation(String),
}

impl CoreError {
    /// Shorthand for a `Validation` error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    #[must_use]
    pub const fn not_found(kind: EntityKind, id: i64) -> Self {
        Self::NotFound { kind, id }
    }
}
