use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, validate};
use crate::TRANSIENT_ID;
use crate::calc;
use crate::enums::{AttendanceStatus, EntityKind};
use crate::errors::CoreError;

/// One employee's attendance for one day.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Attendance {
    pub id: i64,
    pub employee_id: i64,
    pub date: NaiveDate,
    pub check_in: Option<NaiveTime>,
    pub check_out: Option<NaiveTime>,
    pub status: AttendanceStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Attendance {
    /// New attendance record. Unlike the other kinds the caller picks the
    /// status, since `absent` and `late` are facts recorded on the day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` if check-out precedes check-in, the
    /// employee is missing, or the status is `excused`.
    pub fn new(
        employee_id: i64,
        date: NaiveDate,
        check_in: Option<NaiveTime>,
        check_out: Option<NaiveTime>,
        status: AttendanceStatus,
    ) -> Result<Self, CoreError> {
        if status == AttendanceStatus::Excused {
            return Err(CoreError::validation(
                "attendance cannot be recorded as excused; excuse an absent or late record",
            ));
        }
        let attendance = Self {
            id: TRANSIENT_ID,
            employee_id,
            date,
            check_in,
            check_out,
            status,
            created_at: None,
        };
        attendance.validate()?;
        Ok(attendance)
    }

    #[must_use]
    pub fn hours_worked(&self) -> f64 {
        calc::hours_worked(self.check_in, self.check_out)
    }
}

impl Entity for Attendance {
    const KIND: EntityKind = EntityKind::Attendance;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn validate_fields(&self) -> Result<(), CoreError> {
        validate::reference("employee_id", self.employee_id)?;
        if let (Some(check_in), Some(check_out)) = (self.check_in, self.check_out)
            && check_out < check_in
        {
            return Err(CoreError::validation(format!(
                "check_out ({check_out}) is before check_in ({check_in})"
            )));
        }
        Ok(())
    }
}
