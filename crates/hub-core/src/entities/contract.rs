use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, validate};
use crate::TRANSIENT_ID;
use crate::enums::{ContractStatus, EntityKind, PaymentStatus};
use crate::errors::CoreError;
use crate::machine::Lifecycle;

/// Agreement generated from an accepted application.
///
/// Carries two independent lifecycles: `status` and `payment_status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Contract {
    pub id: i64,
    pub application_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub amount: f64,
    pub terms: String,
    pub status: ContractStatus,
    pub payment_status: PaymentStatus,
    pub payment_reference: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Contract {
    /// New contract in `generated` / `unpaid`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for blank terms, a negative amount, an
    /// end date before the start date, or a missing application.
    pub fn new(
        application_id: i64,
        start_date: NaiveDate,
        end_date: NaiveDate,
        amount: f64,
        terms: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let contract = Self {
            id: TRANSIENT_ID,
            application_id,
            start_date,
            end_date,
            amount,
            terms: terms.into(),
            status: ContractStatus::initial(),
            payment_status: PaymentStatus::initial(),
            payment_reference: None,
            created_at: None,
        };
        contract.validate()?;
        Ok(contract)
    }
}

impl Entity for Contract {
    const KIND: EntityKind = EntityKind::Contract;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn validate_fields(&self) -> Result<(), CoreError> {
        validate::reference("application_id", self.application_id)?;
        validate::text("terms", &self.terms)?;
        validate::amount("amount", self.amount)?;
        validate::date_order("start_date", self.start_date, "end_date", self.end_date)?;
        if self.payment_status != PaymentStatus::Unpaid && self.payment_reference.is_none() {
            return Err(CoreError::validation(format!(
                "payment_status {} requires a payment_reference",
                self.payment_status
            )));
        }
        Ok(())
    }
}
