//! CLI response types returned as JSON by `workhub` commands.
//!
//! Entities with derived fields are wrapped so the derived value is computed
//! at render time from the stored inputs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Application, Attendance, Leave, Offer, Payroll};
use crate::enums::EntityKind;

/// Response from `workhub application accept`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AcceptResponse {
    pub application: Application,
    pub offer: Offer,
}

/// A payroll together with its computed net salary.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PayrollView {
    #[serde(flatten)]
    pub payroll: Payroll,
    pub net_salary: f64,
}

impl From<Payroll> for PayrollView {
    fn from(payroll: Payroll) -> Self {
        let net_salary = payroll.net_salary();
        Self {
            payroll,
            net_salary,
        }
    }
}

/// An attendance record together with hours worked.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AttendanceView {
    #[serde(flatten)]
    pub attendance: Attendance,
    pub hours_worked: f64,
}

impl From<Attendance> for AttendanceView {
    fn from(attendance: Attendance) -> Self {
        let hours_worked = attendance.hours_worked();
        Self {
            attendance,
            hours_worked,
        }
    }
}

/// A leave request together with its inclusive day count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LeaveView {
    #[serde(flatten)]
    pub leave: Leave,
    pub days: i64,
}

impl From<Leave> for LeaveView {
    fn from(leave: Leave) -> Self {
        let days = leave.days();
        Self { leave, days }
    }
}

/// Response from delete commands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub kind: EntityKind,
    pub id: i64,
    /// Dependents removed in the same unit of work.
    pub cascaded: u64,
}

/// Response from `workhub check`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DecisionResponse {
    pub kind: EntityKind,
    pub from: String,
    pub to: String,
    pub allowed: bool,
}
