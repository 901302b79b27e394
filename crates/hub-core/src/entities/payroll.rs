use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Entity, validate};
use crate::TRANSIENT_ID;
use crate::calc;
use crate::enums::{EntityKind, PayrollStatus};
use crate::errors::CoreError;
use crate::machine::Lifecycle;

/// Salary run for one employee over one period.
///
/// The net amount is never stored on the struct; it is always
/// [`Payroll::net_salary`] of the three inputs.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Payroll {
    pub id: i64,
    pub employee_id: i64,
    pub period_start: NaiveDate,
    pub period_end: NaiveDate,
    pub base_salary: f64,
    pub bonus: f64,
    pub deductions: f64,
    pub status: PayrollStatus,
    pub created_at: Option<DateTime<Utc>>,
}

impl Payroll {
    /// New pending payroll.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` for negative amounts, an inverted
    /// period, or a missing employee.
    pub fn new(
        employee_id: i64,
        period_start: NaiveDate,
        period_end: NaiveDate,
        base_salary: f64,
        bonus: f64,
        deductions: f64,
    ) -> Result<Self, CoreError> {
        let payroll = Self {
            id: TRANSIENT_ID,
            employee_id,
            period_start,
            period_end,
            base_salary,
            bonus,
            deductions,
            status: PayrollStatus::initial(),
            created_at: None,
        };
        payroll.validate()?;
        Ok(payroll)
    }

    #[must_use]
    pub fn net_salary(&self) -> f64 {
        calc::net_salary(self.base_salary, self.bonus, self.deductions)
    }
}

impl Entity for Payroll {
    const KIND: EntityKind = EntityKind::Payroll;

    fn id(&self) -> i64 {
        self.id
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }

    fn validate_fields(&self) -> Result<(), CoreError> {
        validate::reference("employee_id", self.employee_id)?;
        validate::date_order(
            "period_start",
            self.period_start,
            "period_end",
            self.period_end,
        )?;
        validate::amount("base_salary", self.base_salary)?;
        validate::amount("bonus", self.bonus)?;
        validate::amount("deductions", self.deductions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march() -> (NaiveDate, NaiveDate) {
        (
            NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
            NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
        )
    }

    #[test]
    fn net_salary_tracks_inputs() {
        let (start, end) = march();
        let mut payroll = Payroll::new(7, start, end, 3000.0, 200.0, 150.0).unwrap();
        assert!((payroll.net_salary() - 3050.0).abs() < f64::EPSILON);

        payroll.bonus = 0.0;
        assert!((payroll.net_salary() - 2850.0).abs() < f64::EPSILON);
    }

    #[test]
    fn negative_deductions_are_rejected() {
        let (start, end) = march();
        let err = Payroll::new(7, start, end, 3000.0, 0.0, -5.0).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ref msg) if msg.contains("deductions")));
    }
}
