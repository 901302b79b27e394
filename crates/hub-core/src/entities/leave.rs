use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, validate};
use crate::TRANSIENT_ID;
use crate::calc;
use crate::enums::{EntityKind, LeaveStatus, LeaveType};
use crate::errors::CoreError;
use crate::machine::Lifecycle;

/// An employee's request for time off.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Leave {
    pub id: i64,
    pub employee_id: i64,
    pub leave_type: LeaveType,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub reason: Option<String>,
    pub status: LeaveStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Leave {
    /// New pending leave request.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if the range is inverted or the
    /// employee is missing.
    pub fn new(
        employee_id: i64,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: Option<String>,
    ) -> Result<Self, CoreError> {
        let leave = Self {
            id: TRANSIENT_ID,
            employee_id,
            leave_type,
            start_date,
            end_date,
            reason,
            status: LeaveStatus::initial(),
            created_at: None,
        };
        leave.validate()?;
        Ok(leave)
    }

    /// Inclusive number of days covered.
    #[must_use]
    pub fn days(&self) -> i64 {
        calc::leave_days(Some(self.start_date), Some(self.end_date))
    }
}

impl Entity for Leave {
    const KIND: EntityKind = EntityKind::Leave;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn validate_fields(&self) -> Result<(), CoreError> {
        validate::reference("employee_id", self.employee_id)?;
        validate::date_order("start_date", self.start_date, "end_date", self.end_date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn days_is_inclusive() {
        let leave = Leave::new(
            7,
            LeaveType::Annual,
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 5).unwrap(),
            None,
        )
        .unwrap();
        assert_eq!(leave.days(), 5);
        assert_eq!(leave.status, LeaveStatus::Pending);
    }
}
