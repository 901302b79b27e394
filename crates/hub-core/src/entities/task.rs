use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, validate};
use crate::TRANSIENT_ID;
use crate::enums::{EntityKind, TaskPriority, TaskStatus};
use crate::errors::CoreError;
use crate::machine::Lifecycle;

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub project_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Task {
    /// New task in `todo`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for a blank title or a missing project.
    pub fn new(
        project_id: i64,
        title: impl Into<String>,
        description: Option<String>,
        priority: TaskPriority,
    ) -> Result<Self, CoreError> {
        let task = Self {
            id: TRANSIENT_ID,
            project_id,
            title: title.into(),
            description,
            priority,
            status: TaskStatus::initial(),
            created_at: None,
        };
        task.validate()?;
        Ok(task)
    }
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn validate_fields(&self) -> Result<(), CoreError> {
        validate::reference("project_id", self.project_id)?;
        validate::text("title", &self.title)
    }
}
