//! Leave, Attendance, and Payroll mappings.

use chrono::{DateTime, Utc};
use hub_core::entities::{Attendance, Leave, Payroll};

use super::{Record, col, identity};
use crate::error::DatabaseError;
use crate::helpers::{
    date_value, get_opt_string, get_opt_time, opt_text, opt_time_value, parse_date, parse_enum,
};

impl Record for Leave {
    const TABLE: &'static str = "leaves";
    const COLUMNS: &'static [&'static str] = &[
        "employee_id",
        "leave_type",
        "start_date",
        "end_date",
        "reason",
        "status",
    ];

    fn values(&self) -> Vec<libsql::Value> {
        vec![
            self.employee_id.into(),
            self.leave_type.as_str().into(),
            date_value(self.start_date),
            date_value(self.end_date),
            opt_text(self.reason.as_deref()),
            self.status.as_str().into(),
        ]
    }

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (id, created_at) = identity(row)?;
        Ok(Self {
            id,
            employee_id: row.get(col(0))?,
            leave_type: parse_enum(&row.get::<String>(col(1))?)?,
            start_date: parse_date(&row.get::<String>(col(2))?)?,
            end_date: parse_date(&row.get::<String>(col(3))?)?,
            reason: get_opt_string(row, col(4))?,
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

impl Record for Attendance {
    const TABLE: &'static str = "attendance";
    const COLUMNS: &'static [&'static str] =
        &["employee_id", "date", "check_in", "check_out", "status"];

    fn values(&self) -> Vec<libsql::Value> {
        vec![
            self.employee_id.into(),
            date_value(self.date),
            opt_time_value(self.check_in),
            opt_time_value(self.check_out),
            self.status.as_str().into(),
        ]
    }

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (id, created_at) = identity(row)?;
        Ok(Self {
            id,
            employee_id: row.get(col(0))?,
            date: parse_date(&row.get::<String>(col(1))?)?,
            check_in: get_opt_time(row, col(2))?,
            check_out: get_opt_time(row, col(3))?,
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

/// `net_salary` is written from [`Payroll::net_salary`] on every insert and
/// update and never read back.
impl Record for Payroll {
    const TABLE: &'static str = "payrolls";
    const COLUMNS: &'static [&'static str] = &[
        "employee_id",
        "period_start",
        "period_end",
        "base_salary",
        "bonus",
        "deductions",
        "status",
        "net_salary",
    ];

    fn values(&self) -> Vec<libsql::Value> {
        vec![
            self.employee_id.into(),
            date_value(self.period_start),
            date_value(self.period_end),
            self.base_salary.into(),
            self.bonus.into(),
            self.deductions.into(),
            self.status.as_str().into(),
            self.net_salary().into(),
        ]
    }

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (id, created_at) = identity(row)?;
        Ok(Self {
            id,
            employee_id: row.get(col(0))?,
            period_start: parse_date(&row.get::<String>(col(1))?)?,
            period_end: parse_date(&row.get::<String>(col(2))?)?,
            base_salary: row.get(col(3))?,
            bonus: row.get(col(4))?,
            deductions: row.get(col(5))?,
            status: parse_enum(&row.get::<String>(col(6))?)?,
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
