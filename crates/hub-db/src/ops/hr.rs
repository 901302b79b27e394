//! Leave requests, attendance, and payroll.

use chrono::{NaiveDate, NaiveTime};
use hub_core::calc;
use hub_core::entities::{Attendance, Leave, Payroll};
use hub_core::enums::{
    AttendanceStatus, AuditAction, EntityKind, LeaveStatus, LeaveType, PayrollStatus,
};
use hub_core::errors::CoreError;
use hub_core::session::Session;
use serde::Serialize;

use crate::error::DatabaseError;
use crate::gateway::Filter;
use crate::service::{HubService, advance, create};

/// New salary inputs for a pending payroll. `None` keeps the current value.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PayrollAdjustment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_salary: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bonus: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deductions: Option<f64>,
}

impl HubService {
    pub async fn request_leave(
        &self,
        session: &Session,
        employee_id: i64,
        leave_type: LeaveType,
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: Option<&str>,
    ) -> Result<Leave, DatabaseError> {
        let leave = Leave::new(
            employee_id,
            leave_type,
            start_date,
            end_date,
            reason.map(String::from),
        )?;
        let uow = self.db().begin().await?;
        let result = create(&uow.gateway(), session, leave).await;
        uow.finish(result).await
    }

    pub async fn approve_leave(&self, session: &Session, id: i64) -> Result<Leave, DatabaseError> {
        self.decide_leave(session, id, LeaveStatus::Approved).await
    }

    pub async fn reject_leave(&self, session: &Session, id: i64) -> Result<Leave, DatabaseError> {
        self.decide_leave(session, id, LeaveStatus::Rejected).await
    }

    async fn decide_leave(
        &self,
        session: &Session,
        id: i64,
        target: LeaveStatus,
    ) -> Result<Leave, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = advance::<Leave>(&uow.gateway(), session, id, target).await;
        uow.finish(result).await
    }

    pub async fn list_leaves(&self, filter: &Filter) -> Result<Vec<Leave>, DatabaseError> {
        self.list(filter).await
    }

    pub async fn record_attendance(
        &self,
        session: &Session,
        employee_id: i64,
        date: NaiveDate,
        check_in: Option<NaiveTime>,
        check_out: Option<NaiveTime>,
        status: AttendanceStatus,
    ) -> Result<Attendance, DatabaseError> {
        let attendance = Attendance::new(employee_id, date, check_in, check_out, status)?;
        let uow = self.db().begin().await?;
        let result = create(&uow.gateway(), session, attendance).await;
        uow.finish(result).await
    }

    /// Excuse an absent or late record.
    pub async fn excuse_attendance(
        &self,
        session: &Session,
        id: i64,
    ) -> Result<Attendance, DatabaseError> {
        let uow = self.db().begin().await?;
        let result =
            advance::<Attendance>(&uow.gateway(), session, id, AttendanceStatus::Excused).await;
        uow.finish(result).await
    }

    pub async fn list_attendance(&self, filter: &Filter) -> Result<Vec<Attendance>, DatabaseError> {
        self.list(filter).await
    }

    pub async fn create_payroll(
        &self,
        session: &Session,
        employee_id: i64,
        period_start: NaiveDate,
        period_end: NaiveDate,
        base_salary: f64,
        bonus: f64,
        deductions: f64,
    ) -> Result<Payroll, DatabaseError> {
        let payroll = Payroll::new(
            employee_id,
            period_start,
            period_end,
            base_salary,
            bonus,
            deductions,
        )?;
        let uow = self.db().begin().await?;
        let result = create(&uow.gateway(), session, payroll).await;
        uow.finish(result).await
    }

    /// Change the salary inputs of a pending payroll. The stored net salary
    /// is rewritten from the new inputs.
    pub async fn adjust_payroll(
        &self,
        session: &Session,
        id: i64,
        adjustment: PayrollAdjustment,
    ) -> Result<Payroll, DatabaseError> {
        let uow = self.db().begin().await?;
        let result: Result<Payroll, DatabaseError> = async {
            let gw = uow.gateway();
            let mut payroll: Payroll = gw.get(id).await?;
            if payroll.status != PayrollStatus::Pending {
                return Err(CoreError::validation(format!(
                    "payroll {id} is {}; only pending payrolls can be adjusted",
                    payroll.status
                ))
                .into());
            }
            if let Some(base) = adjustment.base_salary {
                payroll.base_salary = base;
            }
            if let Some(bonus) = adjustment.bonus {
                payroll.bonus = bonus;
            }
            if let Some(deductions) = adjustment.deductions {
                payroll.deductions = deductions;
            }
            gw.update(&payroll).await?;
            gw.append_audit(
                session,
                EntityKind::Payroll,
                id,
                AuditAction::Updated,
                Some(serde_json::to_value(adjustment)?),
            )
            .await?;
            Ok(payroll)
        }
        .await;
        uow.finish(result).await
    }

    pub async fn pay_payroll(&self, session: &Session, id: i64) -> Result<Payroll, DatabaseError> {
        let uow = self.db().begin().await?;
        let result = advance::<Payroll>(&uow.gateway(), session, id, PayrollStatus::Paid).await;
        uow.finish(result).await
    }

    pub async fn list_payrolls(&self, filter: &Filter) -> Result<Vec<Payroll>, DatabaseError> {
        self.list(filter).await
    }

    /// `base + bonus - deductions`.
    #[must_use]
    pub fn calculate_net_salary(payroll: &Payroll) -> f64 {
        calc::net_salary(payroll.base_salary, payroll.bonus, payroll.deductions)
    }

    /// Hours between check-in and check-out; `0.0` if either is missing.
    #[must_use]
    pub fn calculate_hours_worked(attendance: &Attendance) -> f64 {
        calc::hours_worked(attendance.check_in, attendance.check_out)
    }

    /// Inclusive day count of the leave.
    #[must_use]
    pub fn calculate_leave_days(leave: &Leave) -> i64 {
        calc::leave_days(Some(leave.start_date), Some(leave.end_date))
    }
}
