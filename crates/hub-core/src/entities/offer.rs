use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, validate};
use crate::TRANSIENT_ID;
use crate::enums::{EntityKind, OfferStatus};
use crate::errors::CoreError;
use crate::machine::Lifecycle;

/// A gig posted by an employer on the marketplace.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Offer {
    pub id: i64,
    pub employer_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub amount: f64,
    pub status: OfferStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Offer {
    /// New draft offer.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank title, a negative amount, or
    /// a missing employer.
    pub fn new(
        employer_id: i64,
        title: impl Into<String>,
        description: Option<String>,
        amount: f64,
    ) -> Result<Self, CoreError> {
        let offer = Self {
            id: TRANSIENT_ID,
            employer_id,
            title: title.into(),
            description,
            amount,
            status: OfferStatus::initial(),
            created_at: None,
        };
        offer.validate()?;
        Ok(offer)
    }
}

impl Entity for Offer {
    const KIND: EntityKind = EntityKind::Offer;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn validate_fields(&self) -> Result<(), CoreError> {
        validate::reference("employer_id", self.employer_id)?;
        validate::text("title", &self.title)?;
        validate::amount("amount", self.amount)
    }
}
