//! Bounded timeout and transient-error retry for gateway calls.
//!
//! Every statement the gateway issues runs through [`CallPolicy`]. A call that
//! exceeds the timeout fails with [`DatabaseError::Timeout`]. A call that fails
//! with a transient storage error (lock contention, busy database, dropped
//! connection) is retried with exponential backoff up to
//! [`RetryConfig::max_attempts`]. Constraint and domain errors are surfaced on
//! the first attempt.

use std::future::Future;
use std::time::Duration;

use hub_config::DatabaseConfig;
use libsql::params::IntoParams;

use crate::error::DatabaseError;

/// Rows decoded between cooperative yields in [`CallPolicy::query_map`].
const YIELD_EVERY: usize = 256;

/// Configuration for retry behavior on transient storage errors.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of attempts (including the initial one).
    pub max_attempts: u32,
    /// Initial delay before the first retry.
    pub base_delay: Duration,
    /// Maximum delay between retries (backoff is capped here).
    pub max_delay: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            base_delay: Duration::from_millis(50),
            max_delay: Duration::from_secs(1),
        }
    }
}

impl RetryConfig {
    /// Delay before retry number `retry` (1-based), doubling from `base_delay`.
    #[must_use]
    pub fn backoff(&self, retry: u32) -> Duration {
        let factor = 2u32.saturating_pow(retry.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(self.max_delay)
    }
}

/// Detect transient storage errors worth retrying.
///
/// The predicate is intentionally narrow to avoid retrying genuine
/// SQL or constraint errors.
pub fn is_transient_error(e: &libsql::Error) -> bool {
    let msg = e.to_string().to_lowercase();
    msg.contains("database is locked")
        || msg.contains("database table is locked")
        || msg.contains("busy")
        || msg.contains("connection reset")
        || msg.contains("connection closed")
        || msg.contains("broken pipe")
}

/// Map a final libSQL failure onto the error taxonomy.
fn classify(e: libsql::Error) -> DatabaseError {
    let msg = e.to_string();
    if msg.contains("constraint failed") || msg.contains("CONSTRAINT") {
        DatabaseError::Constraint(msg)
    } else {
        DatabaseError::LibSql(e)
    }
}

/// Timeout plus retry applied to every gateway call.
#[derive(Debug, Clone)]
pub struct CallPolicy {
    pub timeout: Duration,
    pub retry: RetryConfig,
}

impl Default for CallPolicy {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            retry: RetryConfig::default(),
        }
    }
}

impl From<&DatabaseConfig> for CallPolicy {
    fn from(config: &DatabaseConfig) -> Self {
        Self {
            timeout: config.call_timeout(),
            retry: RetryConfig {
                max_attempts: config.retry_max_attempts.max(1),
                base_delay: config.retry_base_delay(),
                max_delay: config.retry_max_delay(),
            },
        }
    }
}

impl CallPolicy {
    /// Run `call` under the timeout, retrying transient failures.
    ///
    /// `operation` names the call in logs and in the timeout error.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Timeout` when an attempt exceeds the bound,
    /// `DatabaseError::Constraint` for constraint violations, and
    /// `DatabaseError::LibSql` for any other failure (after retries if it
    /// was transient).
    pub async fn run<T, F, Fut>(&self, operation: &str, mut call: F) -> Result<T, DatabaseError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, libsql::Error>>,
    {
        let mut attempt = 1;
        loop {
            let outcome = tokio::time::timeout(self.timeout, call()).await;
            match outcome {
                Err(_) => {
                    tracing::warn!(operation, after = ?self.timeout, "gateway call timed out");
                    return Err(DatabaseError::Timeout {
                        operation: operation.to_string(),
                        after: self.timeout,
                    });
                }
                Ok(Ok(value)) => return Ok(value),
                Ok(Err(e)) if attempt < self.retry.max_attempts && is_transient_error(&e) => {
                    let delay = self.retry.backoff(attempt);
                    tracing::warn!(
                        operation,
                        attempt,
                        max_attempts = self.retry.max_attempts,
                        delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                        error = %e,
                        "transient storage error, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Ok(Err(e)) => return Err(classify(e)),
            }
        }
    }

    /// Execute a statement, returning the number of affected rows.
    ///
    /// Params are rebuilt by `params` on every attempt.
    ///
    /// # Errors
    ///
    /// See [`CallPolicy::run`].
    pub async fn execute<P, F>(
        &self,
        conn: &libsql::Connection,
        sql: &str,
        params: F,
    ) -> Result<u64, DatabaseError>
    where
        P: IntoParams,
        F: Fn() -> P,
    {
        tracing::debug!(sql, "execute");
        self.run(sql, || conn.execute(sql, params())).await
    }

    /// Run a query and decode every row with `map`.
    ///
    /// Rows are stepped inside the timed, retried call: SQLite reports
    /// constraint violations from `INSERT ... RETURNING` and lock contention
    /// from a `SELECT` while stepping, not when the statement is prepared.
    /// A decode failure from `map` ends the call without a retry.
    ///
    /// # Errors
    ///
    /// See [`CallPolicy::run`]; decode errors from `map` are returned as-is.
    pub async fn query_map<T, P, F, M>(
        &self,
        conn: &libsql::Connection,
        sql: &str,
        params: F,
        map: M,
    ) -> Result<Vec<T>, DatabaseError>
    where
        P: IntoParams,
        F: Fn() -> P,
        M: Fn(&libsql::Row) -> Result<T, DatabaseError>,
    {
        tracing::debug!(sql, "query");
        let params = &params;
        let map = &map;
        self.run(sql, move || async move {
            let mut rows = conn.query(sql, params()).await?;
            let mut decoded = Vec::new();
            while let Some(row) = rows.next().await? {
                match map(&row) {
                    Ok(value) => decoded.push(value),
                    Err(e) => return Ok(Err(e)),
                }
                // Local stepping never suspends; yield so the timeout can fire.
                if decoded.len() % YIELD_EVERY == 0 {
                    tokio::task::yield_now().await;
                }
            }
            Ok::<_, libsql::Error>(Ok(decoded))
        })
        .await?
    }

    /// Run a query expected to yield at least one row and decode the first.
    ///
    /// # Errors
    ///
    /// `DatabaseError::Query` if the statement produced no row, otherwise as
    /// [`CallPolicy::query_map`].
    pub async fn query_one<T, P, F, M>(
        &self,
        conn: &libsql::Connection,
        sql: &str,
        params: F,
        map: M,
    ) -> Result<T, DatabaseError>
    where
        P: IntoParams,
        F: Fn() -> P,
        M: Fn(&libsql::Row) -> Result<T, DatabaseError>,
    {
        self.query_map(conn, sql, params, map)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| DatabaseError::Query(format!("no row returned by: {sql}")))
    }
}
