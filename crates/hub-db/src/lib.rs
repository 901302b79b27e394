//! # hub-db
//!
//! libSQL persistence for WorkHub: the repository gateway, units of work,
//! the call policy (timeout + retry), the audit trail, and the domain
//! service that composes status-machine decisions with gateway writes.
//!
//! Uses the `libsql` crate (C `SQLite` fork, v0.9.29) against a local file or
//! an in-memory database.

pub mod audit;
pub mod error;
pub mod gateway;
pub mod helpers;
mod migrations;
pub mod ops;
pub mod records;
pub mod retry;
pub mod service;
pub mod uow;

#[cfg(test)]
pub(crate) mod test_support;

use std::sync::Arc;

use error::DatabaseError;
use gateway::Gateway;
use hub_config::DatabaseConfig;
use libsql::Builder;
use retry::CallPolicy;
use tokio::sync::Mutex;
use uow::UnitOfWork;

/// Central database handle for all WorkHub state.
///
/// Wraps a libSQL database, its single connection, the call policy applied to
/// every statement, and the write gate that serializes units of work.
pub struct HubDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
    policy: CallPolicy,
    gate: Arc<Mutex<()>>,
}

impl HubDb {
    /// Open a local database at the given path with the default call policy.
    ///
    /// Runs migrations automatically on first open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        // Enable foreign keys (must be per-connection in SQLite)
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let hub_db = Self {
            db,
            conn,
            policy: CallPolicy::default(),
            gate: Arc::new(Mutex::new(())),
        };
        hub_db.run_migrations().await?;
        Ok(hub_db)
    }

    /// Open the database described by `config`, with its timeout and retry
    /// settings.
    ///
    /// # Errors
    ///
    /// Same as [`Self::open_local`].
    pub async fn open(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let db = Self::open_local(&config.path).await?;
        Ok(db.with_policy(CallPolicy::from(config)))
    }

    #[must_use]
    pub fn with_policy(mut self, policy: CallPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    #[must_use]
    pub const fn policy(&self) -> &CallPolicy {
        &self.policy
    }

    /// Gateway over the bare connection, outside any unit of work.
    ///
    /// It shares the connection that units of work run their transactions
    /// on, and does not wait for the write gate: while a unit is in flight,
    /// reads through it see that unit's uncommitted writes, and writes
    /// through it join that unit's transaction. `HubService` never uses it;
    /// every service call goes through [`Self::begin`].
    #[must_use]
    pub const fn gateway(&self) -> Gateway<'_> {
        Gateway::new(&self.conn, &self.policy)
    }

    /// Start a unit of work, waiting for any unit already in flight.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the transaction cannot be started.
    pub async fn begin(&self) -> Result<UnitOfWork, DatabaseError> {
        let gate = Arc::clone(&self.gate).lock_owned().await;
        let tx = self
            .policy
            .run("BEGIN", || self.conn.transaction())
            .await?;
        Ok(UnitOfWork::new(tx, self.policy.clone(), gate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::entities::Offer;

    /// Helper to create an in-memory database for testing.
    async fn test_db() -> HubDb {
        HubDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_schema() {
        let db = test_db().await;

        let tables = [
            "offers",
            "applications",
            "contracts",
            "milestones",
            "projects",
            "tasks",
            "leaves",
            "attendance",
            "payrolls",
            "audit_trail",
        ];
        for table in &tables {
            let mut rows = db
                .conn()
                .query(
                    "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                    [*table],
                )
                .await
                .unwrap();
            let row = rows.next().await.unwrap();
            assert!(row.is_some(), "table '{table}' should exist");
        }
    }

    #[tokio::test]
    async fn foreign_keys_enabled() {
        let db = test_db().await;
        let mut rows = db.conn().query("PRAGMA foreign_keys", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }

    #[tokio::test]
    async fn idempotent_migrations() {
        let db = test_db().await;
        // Run migrations again; should not fail
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn rolled_back_unit_leaves_nothing_behind() {
        let db = test_db().await;

        let uow = db.begin().await.unwrap();
        let offer = Offer::new(3, "Logo design", None, 250.0).unwrap();
        let stored = uow.gateway().insert(offer).await.unwrap();
        uow.rollback().await.unwrap();

        let found = db.gateway().find_by_id::<Offer>(stored.id).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn committed_unit_is_visible() {
        let db = test_db().await;

        let uow = db.begin().await.unwrap();
        let offer = Offer::new(3, "Logo design", None, 250.0).unwrap();
        let stored = uow.gateway().insert(offer).await.unwrap();
        uow.commit().await.unwrap();

        let found = db.gateway().get::<Offer>(stored.id).await.unwrap();
        assert_eq!(found, stored);
    }

    #[tokio::test]
    async fn bare_gateway_reads_inside_the_open_unit() {
        let db = test_db().await;

        let uow = db.begin().await.unwrap();
        let stored = uow
            .gateway()
            .insert(Offer::new(3, "Logo design", None, 250.0).unwrap())
            .await
            .unwrap();
        let seen = db.gateway().find_by_id::<Offer>(stored.id).await.unwrap();
        assert_eq!(seen, Some(stored.clone()));

        uow.rollback().await.unwrap();
        assert!(db.gateway().find_by_id::<Offer>(stored.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn open_applies_configured_policy() {
        let config = DatabaseConfig {
            path: ":memory:".into(),
            call_timeout_ms: 750,
            retry_max_attempts: 2,
            ..Default::default()
        };
        let db = HubDb::open(&config).await.unwrap();
        assert_eq!(db.policy().timeout, std::time::Duration::from_millis(750));
        assert_eq!(db.policy().retry.max_attempts, 2);
    }

    #[tokio::test]
    async fn file_backed_database_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hub.db");
        let path = path.to_str().unwrap();

        let id = {
            let db = HubDb::open_local(path).await.unwrap();
            let uow = db.begin().await.unwrap();
            let offer = Offer::new(3, "Logo design", None, 250.0).unwrap();
            let stored = uow.gateway().insert(offer).await.unwrap();
            uow.commit().await.unwrap();
            stored.id
        };

        let db = HubDb::open_local(path).await.unwrap();
        let offer = db.gateway().get::<Offer>(id).await.unwrap();
        assert_eq!(offer.title, "Logo design");
    }
}
