//! Offer, Application, Contract, and Milestone mappings.

use chrono::{DateTime, Utc};
use hub_core::entities::{Application, Contract, Milestone, Offer};

use super::{Record, col, identity};
use crate::error::DatabaseError;
use crate::helpers::{date_value, get_opt_date, get_opt_string, opt_date_value, opt_text, parse_date, parse_enum};

impl Record for Offer {
    const TABLE: &'static str = "offers";
    const COLUMNS: &'static [&'static str] =
        &["employer_id", "title", "description", "amount", "status"];

    fn values(&self) -> Vec<libsql::Value> {
        vec![
            self.employer_id.into(),
            self.title.clone().into(),
            opt_text(self.description.as_deref()),
            self.amount.into(),
            self.status.as_str().into(),
        ]
    }

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (id, created_at) = identity(row)?;
        Ok(Self {
            id,
            employer_id: row.get(col(0))?,
            title: row.get(col(1))?,
            description: get_opt_string(row, col(2))?,
            amount: row.get(col(3))?,
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

impl Record for Application {
    const TABLE: &'static str = "applications";
    const COLUMNS: &'static [&'static str] = &["offer_id", "applicant_id", "cover_letter", "status"];

    fn values(&self) -> Vec<libsql::Value> {
        vec![
            self.offer_id.into(),
            self.applicant_id.into(),
            opt_text(self.cover_letter.as_deref()),
            self.status.as_str().into(),
        ]
    }

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (id, created_at) = identity(row)?;
        Ok(Self {
            id,
            offer_id: row.get(col(0))?,
            applicant_id: row.get(col(1))?,
            cover_letter: get_opt_string(row, col(2))?,
            status: parse_enum(&row.get::<String>(col(3))?)?,
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

impl Record for Contract {
    const TABLE: &'static str = "contracts";
    const COLUMNS: &'static [&'static str] = &[
        "application_id",
        "start_date",
        "end_date",
        "amount",
        "terms",
        "status",
        "payment_status",
        "payment_reference",
    ];

    fn values(&self) -> Vec<libsql::Value> {
        vec![
            self.application_id.into(),
            date_value(self.start_date),
            date_value(self.end_date),
            self.amount.into(),
            self.terms.clone().into(),
            self.status.as_str().into(),
            self.payment_status.as_str().into(),
            opt_text(self.payment_reference.as_deref()),
        ]
    }

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (id, created_at) = identity(row)?;
        Ok(Self {
            id,
            application_id: row.get(col(0))?,
            start_date: parse_date(&row.get::<String>(col(1))?)?,
            end_date: parse_date(&row.get::<String>(col(2))?)?,
            amount: row.get(col(3))?,
            terms: row.get(col(4))?,
            status: parse_enum(&row.get::<String>(col(5))?)?,
            payment_status: parse_enum(&row.get::<String>(col(6))?)?,
            payment_reference: get_opt_string(row, col(7))?,
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

impl Record for Milestone {
    const TABLE: &'static str = "milestones";
    const COLUMNS: &'static [&'static str] = &["contract_id", "title", "amount", "due_date", "status"];

    fn values(&self) -> Vec<libsql::Value> {
        vec![
            self.contract_id.into(),
            self.title.clone().into(),
            self.amount.into(),
            opt_date_value(self.due_date),
            self.status.as_str().into(),
        ]
    }

    fn from_row(row: &libsql::Row) -> Result<Self, DatabaseError> {
        let (id, created_at) = identity(row)?;
        Ok(Self {
            id,
            contract_id: row.get(col(0))?,
            title: row.get(col(1))?,
            amount: row.get(col(2))?,
            due_date: get_opt_date(row, col(3))?,
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
