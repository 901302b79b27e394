//! Unit of work: one transaction plus the process-wide write gate.
//!
//! Every composite service operation runs inside a single `UnitOfWork`, so
//! either all of its writes (including audit entries) land or none do. Units
//! of work are serialized by the gate held for their whole lifetime; status
//! decisions taken inside one therefore see the latest committed state.

use tokio::sync::OwnedMutexGuard;

use crate::error::DatabaseError;
use crate::gateway::Gateway;
use crate::retry::CallPolicy;

pub struct UnitOfWork {
    tx: libsql::Transaction,
    policy: CallPolicy,
    _gate: OwnedMutexGuard<()>,
}

impl UnitOfWork {
    pub(crate) fn new(tx: libsql::Transaction, policy: CallPolicy, gate: OwnedMutexGuard<()>) -> Self {
        Self {
            tx,
            policy,
            _gate: gate,
        }
    }

    /// Gateway bound to this transaction.
    #[must_use]
    pub fn gateway(&self) -> Gateway<'_> {
        Gateway::new(&self.tx, &self.policy)
    }

    /// Make every write in this unit durable.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the commit fails; the writes are then lost.
    pub async fn commit(self) -> Result<(), DatabaseError> {
        self.tx.commit().await?;
        Ok(())
    }

    /// Discard every write in this unit.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the rollback statement fails.
    pub async fn rollback(self) -> Result<(), DatabaseError> {
        self.tx.rollback().await?;
        Ok(())
    }

    /// Commit on `Ok`, roll back on `Err`, and hand back `result`.
    ///
    /// A failed rollback is logged; the original error is what the caller sees.
    ///
    /// # Errors
    ///
    /// Returns the error in `result`, or the commit error.
    pub async fn finish<T>(self, result: Result<T, DatabaseError>) -> Result<T, DatabaseError> {
        match result {
            Ok(value) => {
                self.commit().await?;
                Ok(value)
            }
            Err(error) => {
                tracing::debug!(%error, "rolling back unit of work");
                if let Err(rollback_error) = self.rollback().await {
                    tracing::warn!(%rollback_error, "rollback failed");
                }
                Err(error)
            }
        }
    }
}
