//! Domain service composing status-machine decisions with gateway writes.
//!
//! `HubService` wraps `HubDb`. All operations are implemented as
//! `impl HubService` blocks in [`crate::ops`].
//!
//! Every mutation method follows this protocol:
//! 1. Begin a unit of work (transaction + write gate)
//! 2. Load current state through the gateway
//! 3. Ask the status machine whether the move is legal
//! 4. Write the new state
//! 5. Append an audit entry (inside the transaction)
//! 6. Commit, or roll back everything on the first error

use hub_config::HubConfig;
use hub_core::audit_detail::StatusChangedDetail;
use hub_core::entities::Stateful;
use hub_core::enums::AuditAction;
use hub_core::machine::{self, Lifecycle};
use hub_core::session::Session;
use serde::Serialize;

use crate::HubDb;
use crate::error::DatabaseError;
use crate::gateway::{Filter, Gateway};
use crate::records::Record;

/// Orchestrates multi-entity operations over one database.
pub struct HubService {
    db: HubDb,
}

impl HubService {
    /// Open the configured database and wrap it.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn open(config: &HubConfig) -> Result<Self, DatabaseError> {
        Ok(Self::from_db(HubDb::open(&config.database).await?))
    }

    #[must_use]
    pub const fn from_db(db: HubDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &HubDb {
        &self.db
    }

    /// Load one record of any kind.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` naming the kind and id if absent.
    pub async fn get<R: Record>(&self, id: i64) -> Result<R, DatabaseError> {
        let uow = self.db.begin().await?;
        let result = uow.gateway().get::<R>(id).await;
        uow.finish(result).await
    }

    /// List records of any kind in their natural order.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `filter` names a column the kind lacks.
    pub async fn list<R: Record>(&self, filter: &Filter) -> Result<Vec<R>, DatabaseError> {
        let uow = self.db.begin().await?;
        let result = uow.gateway().find_all::<R>(filter).await;
        uow.finish(result).await
    }

    /// Delete one record and audit it. Dependents are not touched.
    pub(crate) async fn delete<R: Record + Serialize>(
        &self,
        session: &Session,
        id: i64,
    ) -> Result<(), DatabaseError> {
        let uow = self.db.begin().await?;
        let result: Result<(), DatabaseError> = async {
            let gw = uow.gateway();
            let record: R = gw.get(id).await?;
            gw.delete::<R>(id).await?;
            gw.append_audit(
                session,
                R::KIND,
                id,
                AuditAction::Deleted,
                Some(serde_json::to_value(&record)?),
            )
            .await
        }
        .await;
        uow.finish(result).await
    }
}

/// Audit detail for a `status` change.
pub(crate) fn status_detail<S: Lifecycle>(
    field: &str,
    from: S,
    to: S,
) -> Result<serde_json::Value, DatabaseError> {
    Ok(serde_json::to_value(StatusChangedDetail {
        field: field.to_string(),
        from: from.name().to_string(),
        to: to.name().to_string(),
        reason: None,
    })?)
}

/// Load `id`, check `status → target`, write it, and audit it.
///
/// Nothing is written if the machine rejects the move.
pub(crate) async fn advance<R>(
    gw: &Gateway<'_>,
    session: &Session,
    id: i64,
    target: R::Status,
) -> Result<R, DatabaseError>
where
    R: Record + Stateful,
{
    let mut record: R = gw.get(id).await?;
    let from = record.status();
    let to = machine::transition(from, target)?;
    record.set_status(to);
    gw.update(&record).await?;
    gw.append_audit(
        session,
        R::KIND,
        id,
        AuditAction::StatusChanged,
        Some(status_detail("status", from, to)?),
    )
    .await?;
    tracing::debug!(kind = %R::KIND, id, %from, %to, "status changed");
    Ok(record)
}

/// Insert a transient record and audit its creation.
pub(crate) async fn create<R: Record + Serialize>(
    gw: &Gateway<'_>,
    session: &Session,
    record: R,
) -> Result<R, DatabaseError> {
    let stored = gw.insert(record).await?;
    gw.append_audit(
        session,
        R::KIND,
        stored.id(),
        AuditAction::Created,
        Some(serde_json::to_value(&stored)?),
    )
    .await?;
    Ok(stored)
}
