//! Table mappings for every entity kind.
//!
//! A [`Record`] knows its table, its data columns, its list ordering, and how
//! to convert itself to and from a row. The generic
//! [`Gateway`](crate::gateway::Gateway) builds all SQL from these.
//!
//! Every `SELECT` issued by the gateway reads `id, created_at` first, followed
//! by [`Record::COLUMNS`] in order, so `from_row` reads data columns starting
//! at index [`DATA_OFFSET`].

mod hr;
mod marketplace;
mod projects;

use chrono::{DateTime, Utc};
use hub_core::entities::Entity;

use crate::error::DatabaseError;
use crate::helpers::parse_datetime;

/// Index of the first data column in a gateway `SELECT`.
pub const DATA_OFFSET: i32 = 2;

/// Natural list order for a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListOrder {
    /// Insertion order.
    IdAscending,
    /// Newest first.
    IdDescending,
}

impl ListOrder {
    #[must_use]
    pub const fn sql(self) -> &'static str {
        match self {
            Self::IdAscending => "ORDER BY id ASC",
            Self::IdDescending => "ORDER BY id DESC",
        }
    }
}

/// An entity with a table mapping.
pub trait Record: Entity + Sized {
    const TABLE: &'static str;

    /// Data columns, excluding `id` and `created_at`.
    const COLUMNS: &'static [&'static str];

    const ORDER: ListOrder = ListOrder::IdAscending;

    /// Bind values for [`Self::COLUMNS`], in the same order.
    fn values(&self) -> Vec<libsql::Value>;

    /// Build the record from a row laid out as `id, created_at, COLUMNS..`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if a column is missing or cannot be parsed.
    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError>;

    /// Fill in the generated identity after insert.
    #[must_use]
    fn with_identity(self, id: i64, created_at: DateTime<Utc>) -> Self;
}

/// Read the shared identity columns.
///
/// # Errors
///
/// Returns `DatabaseError` if either column is missing or malformed.
pub fn identity(row: &libsql::Row) -> Result<(i64, DateTime<Utc>), DatabaseError> {
    Ok((row.get::<i64>(0)?, parse_datetime(&row.get::<String>(1)?)?))
}

/// Column index of the `n`th data column.
#[must_use]
pub const fn col(n: i32) -> i32 {
    DATA_OFFSET + n
}

#[cfg(test)]
mod tests {
    use super::*;
    use hub_core::entities::{
        Application, Attendance, Contract, Leave, Milestone, Offer, Payroll, Project, Task,
    };

    fn check<R: Record>() {
        assert!(!R::COLUMNS.is_empty(), "{} has no columns", R::TABLE);
        assert!(!R::COLUMNS.contains(&"id"));
        assert!(!R::COLUMNS.contains(&"created_at"));
        assert!(R::COLUMNS.contains(&"status"), "{} lacks status", R::TABLE);
    }

    #[test]
    fn every_record_declares_a_status_column() {
        check::<Offer>();
        check::<Application>();
        check::<Contract>();
        check::<Milestone>();
        check::<Project>();
        check::<Task>();
        check::<Leave>();
        check::<Attendance>();
        check::<Payroll>();
    }

    #[test]
    fn task_lists_newest_first() {
        assert_eq!(Task::ORDER, ListOrder::IdDescending);
        assert_eq!(Offer::ORDER, ListOrder::IdAscending);
    }
}
