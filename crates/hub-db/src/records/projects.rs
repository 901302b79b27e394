//! Project and Task mappings.

use chrono::{DateTime, Utc};
use hub_core::entities::{Project, Task};

use super::{ListOrder, Record, col, identity};
use crate::error::DatabaseError;
use crate::helpers::{date_value, get_opt_date, get_opt_string, opt_date_value, opt_text, parse_date, parse_enum};

impl Record for Project {
    const TABLE: &'static str = "projects";
    const COLUMNS: &'static [&'static str] = &[
        "name",
        "description",
        "budget",
        "start_date",
        "end_date",
        "status",
    ];

    fn values(&self) -> Vec<libsql::Value> {
        vec![
            self.name.clone().into(),
            opt_text(self.description.as_deref()),
            self.budget.into(),
            date_value(self.start_date),
            opt_date_value(self.end_date),
            self.status.as_str().into(),
        ]
    }

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (id, created_at) = identity(row)?;
        Ok(Self {
            id,
            name: row.get(col(0))?,
            description: get_opt_string(row, col(1))?,
            budget: row.get(col(2))?,
            start_date: parse_date(&row.get::<String>(col(3))?)?,
            end_date: get_opt_date(row, col(4))?,
            status: parse_enum(&row.get::<String>(col(5))?)?,
            created_at: Some(created_at),
        })
    }

    fn with_identity(self, id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: Some(created_at),
            ..self
        }
    }
}

impl Record for Task {
    const TABLE: &'static str = "tasks";
    const COLUMNS: &'static [&'static str] =
        &["project_id", "title", "description", "priority", "status"];
    const ORDER: ListOrder = ListOrder::IdDescending;

    fn values(&self) -> Vec<libsql::Value> {
        vec![
            self.project_id.into(),
            self.title.clone().into(),
            opt_text(self.description.as_deref()),
            self.priority.as_str().into(),
            self.status.as_str().into(),
        ]
    }

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (id, created_at) = identity(row)?;
        Ok(Self {
            id,
            project_id: row.get(col(0))?,
            title: row.get(col(1))?,
            description: get_opt_string(row, col(2))?,
            priority: parse_enum(&row.get::<String>(col(3))?)?,
            status: parse_enum(&row.get::<String>(col(4))?)?,
            created_at: Some(created_at),
        })
    }

    fn with_identity(self, id: i64, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            created_at: Some(created_at),
            ..self
        }
    }
}
