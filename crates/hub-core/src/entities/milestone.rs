use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, validate};
use crate::TRANSIENT_ID;
use crate::enums::{EntityKind, MilestoneStatus};
use crate::errors::CoreError;
use crate::machine::Lifecycle;

/// A deliverable slice of a contract.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Milestone {
    pub id: i64,
    pub contract_id: i64,
    pub title: String,
    pub amount: f64,
    pub due_date: Option<NaiveDate>,
    pub status: MilestoneStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Milestone {
    /// New pending milestone.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank title, a negative amount, or
    /// a missing contract.
    pub fn new(
        contract_id: i64,
        title: impl Into<String>,
        amount: f64,
        due_date: Option<NaiveDate>,
    ) -> Result<Self, CoreError> {
        let milestone = Self {
            id: TRANSIENT_ID,
            contract_id,
            title: title.into(),
            amount,
            due_date,
            status: MilestoneStatus::initial(),
            created_at: None,
        };
        milestone.validate()?;
        Ok(milestone)
    }
}

impl Entity for Milestone {
    const KIND: EntityKind = EntityKind::Milestone;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn validate_fields(&self) -> Result<(), CoreError> {
        validate::reference("contract_id", self.contract_id)?;
        validate::text("title", &self.title)?;
        validate::amount("amount", self.amount)
    }
}
