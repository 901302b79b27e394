use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, validate};
use crate::TRANSIENT_ID;
use crate::enums::{EntityKind, ProjectStatus};
use crate::errors::CoreError;
use crate::machine::Lifecycle;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub budget: f64,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Project {
    /// New project in `planning`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank name, a negative budget, or
    /// an end date before the start date.
    pub fn new(
        name: impl Into<String>,
        description: Option<String>,
        budget: f64,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, CoreError> {
        let project = Self {
            id: TRANSIENT_ID,
            name: name.into(),
            description,
            budget,
            start_date,
            end_date,
            status: ProjectStatus::initial(),
            created_at: None,
        };
        project.validate()?;
        Ok(project)
    }
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn validate_fields(&self) -> Result<(), CoreError> {
        validate::text("name", &self.name)?;
        validate::amount("budget", self.budget)?;
        if let Some(end) = self.end_date {
            validate::date_order("start_date", self.start_date, "end_date", end)?;
        }
        Ok(())
    }
}
