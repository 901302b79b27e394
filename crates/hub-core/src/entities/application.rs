use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, validate};
use crate::TRANSIENT_ID;
use crate::enums::{ApplicationStatus, EntityKind};
use crate::errors::CoreError;
use crate::machine::Lifecycle;

/// A freelancer's application to an offer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Application {
    pub id: i64,
    pub offer_id: i64,
    pub applicant_id: i64,
    pub cover_letter: Option<String>,
    pub status: ApplicationStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Application {
    /// New pending application.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if either reference is not positive.
    pub fn new(
        offer_id: i64,
        applicant_id: i64,
        cover_letter: Option<String>,
    ) -> Result<Self, CoreError> {
        let application = Self {
            id: TRANSIENT_ID,
            offer_id,
            applicant_id,
            cover_letter,
            status: ApplicationStatus::initial(),
            created_at: None,
        };
        application.validate()?;
        Ok(application)
    }
}

impl Entity for Application {
    const KIND: EntityKind = EntityKind::Application;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn validate_fields(&self) -> Result<(), CoreError> {
        validate::reference("offer_id", self.offer_id)?;
        validate::reference("applicant_id", self.applicant_id)
    }
}
