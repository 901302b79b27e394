//! Database error types for hub-db.

use std::time::Duration;

use hub_core::errors::CoreError;
use hub_core::payment::PaymentError;
use thiserror::Error;

/// Errors from gateway and service operations.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// Validation, illegal transition, or not-found raised by the domain layer.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A storage constraint rejected the write (foreign key, unique, check).
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// A SQL query failed or returned data that could not be mapped.
    #[error("Query failed: {0}")]
    Query(String),

    /// Schema migration failed.
    #[error("Migration failed: {0}")]
    Migration(String),

    /// A gateway call exceeded its time bound.
    #[error("Timed out after {after:?} during {operation}")]
    Timeout { operation: String, after: Duration },

    /// The external payment processor refused or failed the call.
    #[error("Payment failed: {0}")]
    Payment(String),

    /// Underlying libSQL error.
    #[error("libSQL error: {0}")]
    LibSql(#[from] libsql::Error),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DatabaseError {
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::Core(CoreError::NotFound { .. }))
    }

    #[must_use]
    pub const fn is_illegal_transition(&self) -> bool {
        matches!(self, Self::Core(CoreError::IllegalTransition { .. }))
    }

    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Core(CoreError::Validation(_)))
    }

    /// Storage-side failure: constraint, connectivity, or timeout.
    #[must_use]
    pub const fn is_persistence(&self) -> bool {
        matches!(
            self,
            Self::Constraint(_) | Self::Query(_) | Self::LibSql(_) | Self::Timeout { .. }
        )
    }
}

impl From<PaymentError> for DatabaseError {
    fn from(error: PaymentError) -> Self {
        Self::Payment(error.to_string())
    }
}

impl From<serde_json::Error> for DatabaseError {
    fn from(error: serde_json::Error) -> Self {
        Self::Other(error.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::enums::EntityKind;

    #[test]
    fn predicates_match_core_variants() {
        let err = DatabaseError::from(CoreError::not_found(EntityKind::Offer, 4));
        assert!(err.is_not_found());
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "Entity not found: offer 4");

        let err = DatabaseError::from(CoreError::validation("title is required"));
        assert!(err.is_validation());
        assert!(!err.is_persistence());
    }

    #[test]
    fn timeout_names_operation() {
        let err = DatabaseError::Timeout {
            operation: "SELECT offers".into(),
            after: Duration::from_millis(250),
        };
        assert!(err.is_persistence());
        assert!(err.to_string().contains("SELECT offers"));
    }
}
