//! The repository gateway: uniform CRUD over every [`Record`] kind.
//!
//! A `Gateway` is bound to one connection (normally the transaction of a
//! [`UnitOfWork`](crate::uow::UnitOfWork)) and routes every statement through
//! the [`CallPolicy`]. It never mutates a record passed to it; `insert` returns
//! a new value carrying the generated id and timestamp.

use chrono::Utc;
use hub_core::entities::Entity;
use hub_core::errors::CoreError;
use hub_core::machine::Lifecycle;

use crate::error::DatabaseError;
use crate::records::Record;
use crate::retry::CallPolicy;

/// Equality conditions, validated against a record's columns at query time.
#[derive(Debug, Clone, Default)]
pub struct Filter {
    conditions: Vec<(String, libsql::Value)>,
    limit: Option<u32>,
}

impl Filter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `column = value`.
    #[must_use]
    pub fn eq(mut self, column: impl Into<String>, value: impl Into<libsql::Value>) -> Self {
        self.conditions.push((column.into(), value.into()));
        self
    }

    /// Require `status = <status>`.
    #[must_use]
    pub fn status<S: Lifecycle>(self, status: S) -> Self {
        self.eq("status", status.name())
    }

    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Build the `WHERE` clause for `R`, rejecting columns `R` does not have.
    fn where_clause<R: Record>(&self) -> Result<String, CoreError> {
        let mut parts = Vec::with_capacity(self.conditions.len());
        for (idx, (column, _)) in self.conditions.iter().enumerate() {
            if !R::COLUMNS.contains(&column.as_str()) {
                return Err(CoreError::validation(format!(
                    "unknown {} column '{column}'",
                    R::KIND
                )));
            }
            parts.push(format!("{column} = ?{}", idx + 1));
        }
        Ok(if parts.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", parts.join(" AND "))
        })
    }

    fn params(&self) -> Vec<libsql::Value> {
        self.conditions.iter().map(|(_, v)| v.clone()).collect()
    }
}

fn decode<R: Record>(row: &libsql::Row) -> Result<R, DatabaseError> {
    let record = R::from_row(row)?;
    record.validate()?;
    Ok(record)
}

fn select_list<R: Record>() -> String {
    format!("id, created_at, {}", R::COLUMNS.join(", "))
}

/// Persistence boundary for all entity kinds.
#[derive(Clone, Copy)]
pub struct Gateway<'c> {
    conn: &'c libsql::Connection,
    policy: &'c CallPolicy,
}

impl<'c> Gateway<'c> {
    #[must_use]
    pub const fn new(conn: &'c libsql::Connection, policy: &'c CallPolicy) -> Self {
        Self { conn, policy }
    }

    pub(crate) const fn conn(&self) -> &'c libsql::Connection {
        self.conn
    }

    pub(crate) const fn policy(&self) -> &'c CallPolicy {
        self.policy
    }

    /// Insert a transient record and return it with its id and `created_at`.
    ///
    /// # Errors
    ///
    /// Returns a validation error if the record is not transient or fails its
    /// field checks, and `DatabaseError::Constraint` if storage rejects it.
    pub async fn insert<R: Record>(&self, record: R) -> Result<R, DatabaseError> {
        if !record.is_transient() {
            return Err(CoreError::validation(format!(
                "cannot insert {} {}: record is already persisted",
                R::KIND,
                record.id()
            ))
            .into());
        }
        record.validate()?;

        let now = Utc::now();
        let placeholders: Vec<String> = (1..=R::COLUMNS.len() + 1)
            .map(|i| format!("?{i}"))
            .collect();
        let sql = format!(
            "INSERT INTO {} (created_at, {}) VALUES ({}) RETURNING id",
            R::TABLE,
            R::COLUMNS.join(", "),
            placeholders.join(", ")
        );
        let values = record.values();
        let id = self
            .policy
            .query_one(
                self.conn,
                &sql,
                || {
                    let mut params = Vec::with_capacity(values.len() + 1);
                    params.push(libsql::Value::Text(now.to_rfc3339()));
                    params.extend(values.iter().cloned());
                    libsql::params_from_iter(params)
                },
                |row| Ok(row.get::<i64>(0)?),
            )
            .await?;

        tracing::debug!(kind = %R::KIND, id, "inserted");
        Ok(record.with_identity(id, now))
    }

    /// Overwrite every data column of an existing record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if no row has the record's id, a validation error for
    /// a transient or invalid record, and `DatabaseError::Constraint` if
    /// storage rejects the values.
    pub async fn update<R: Record>(&self, record: &R) -> Result<(), DatabaseError> {
        if record.is_transient() {
            return Err(CoreError::validation(format!(
                "cannot update a transient {}",
                R::KIND
            ))
            .into());
        }
        record.validate()?;

        let sets: Vec<String> = R::COLUMNS
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{c} = ?{}", i + 1))
            .collect();
        let sql = format!(
            "UPDATE {} SET {} WHERE id = ?{}",
            R::TABLE,
            sets.join(", "),
            R::COLUMNS.len() + 1
        );
        let values = record.values();
        let id = record.id();
        let affected = self
            .policy
            .execute(self.conn, &sql, || {
                let mut params = values.clone();
                params.push(id.into());
                libsql::params_from_iter(params)
            })
            .await?;
        if affected == 0 {
            return Err(CoreError::not_found(R::KIND, id).into());
        }
        tracing::debug!(kind = %R::KIND, id, "updated");
        Ok(())
    }

    /// Delete one record. Dependents are not touched.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if absent and `DatabaseError::Constraint` if
    /// dependents still reference the row.
    pub async fn delete<R: Record>(&self, id: i64) -> Result<(), DatabaseError> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", R::TABLE);
        let affected = self
            .policy
            .execute(self.conn, &sql, || libsql::params![id])
            .await?;
        if affected == 0 {
            return Err(CoreError::not_found(R::KIND, id).into());
        }
        tracing::debug!(kind = %R::KIND, id, "deleted");
        Ok(())
    }

    /// Load one record, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or the stored row does not
    /// pass validation.
    pub async fn find_by_id<R: Record>(&self, id: i64) -> Result<Option<R>, DatabaseError> {
        let sql = format!(
            "SELECT {} FROM {} WHERE id = ?1",
            select_list::<R>(),
            R::TABLE
        );
        let found = self
            .policy
            .query_map(self.conn, &sql, || libsql::params![id], decode::<R>)
            .await?;
        Ok(found.into_iter().next())
    }

    /// Load one record.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` naming the kind and id if absent.
    pub async fn get<R: Record>(&self, id: i64) -> Result<R, DatabaseError> {
        self.find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(R::KIND, id).into())
    }

    /// Load every record matching `filter`, in the kind's natural order.
    ///
    /// # Errors
    ///
    /// Returns a validation error for a column `R` does not declare.
    pub async fn find_all<R: Record>(&self, filter: &Filter) -> Result<Vec<R>, DatabaseError> {
        let where_clause = filter.where_clause::<R>()?;
        let limit = filter
            .limit
            .map(|n| format!(" LIMIT {n}"))
            .unwrap_or_default();
        let sql = format!(
            "SELECT {} FROM {} {where_clause} {}{limit}",
            select_list::<R>(),
            R::TABLE,
            R::ORDER.sql()
        );
        let params = filter.params();
        self.policy
            .query_map(
                self.conn,
                &sql,
                || libsql::params_from_iter(params.clone()),
                decode::<R>,
            )
            .await
    }

    /// Count records matching `filter` (the limit is ignored).
    ///
    /// # Errors
    ///
    /// Returns a validation error for a column `R` does not declare.
    pub async fn count<R: Record>(&self, filter: &Filter) -> Result<u64, DatabaseError> {
        let where_clause = filter.where_clause::<R>()?;
        let sql = format!("SELECT COUNT(*) FROM {} {where_clause}", R::TABLE);
        let params = filter.params();
        let count = self
            .policy
            .query_one(
                self.conn,
                &sql,
                || libsql::params_from_iter(params.clone()),
                |row| Ok(row.get::<i64>(0)?),
            )
            .await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }
}
