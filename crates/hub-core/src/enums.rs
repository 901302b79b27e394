//! Status enums, entity kinds, and audit actions for WorkHub.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Status enums provide `allowed_next_states()` and implement
//! [`Lifecycle`](crate::machine::Lifecycle) so the status machine can enforce
//! the closed transition tables at the application layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::machine::Lifecycle;

/// Implements `Display` and `Lifecycle` for a status enum that already has
/// `as_str()` and `allowed_next_states()`.
macro_rules! lifecycle {
    ($ty:ident, $kind:expr, $initial:expr, [$($variant:ident),+ $(,)?]) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl Lifecycle for $ty {
            const KIND: EntityKind = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant),+];

            fn initial() -> Self {
                $initial
            }

            fn name(self) -> &'static str {
                self.as_str()
            }

            fn successors(self) -> &'static [Self] {
                self.allowed_next_states()
            }
        }
    };
}

// ---------------------------------------------------------------------------
// EntityKind
// ---------------------------------------------------------------------------

/// Kind of persisted record, used in errors, the audit trail, and table mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Offer,
    Application,
    Contract,
    Milestone,
    Project,
    Task,
    Leave,
    Attendance,
    Payroll,
}

impl EntityKind {
    pub const ALL: &'static [Self] = &[
        Self::Offer,
        Self::Application,
        Self::Contract,
        Self::Milestone,
        Self::Project,
        Self::Task,
        Self::Leave,
        Self::Attendance,
        Self::Payroll,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Offer => "offer",
            Self::Application => "application",
            Self::Contract => "contract",
            Self::Milestone => "milestone",
            Self::Project => "project",
            Self::Task => "task",
            Self::Leave => "leave",
            Self::Attendance => "attendance",
            Self::Payroll => "payroll",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OfferStatus
// ---------------------------------------------------------------------------

/// Status of a marketplace offer.
///
/// ```text
/// draft → published → in_progress → completed
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum OfferStatus {
    Draft,
    Published,
    InProgress,
    Completed,
}

impl OfferStatus {
    /// Valid next states from the current state.
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Draft => &[Self::Published],
            Self::Published => &[Self::InProgress],
            Self::InProgress => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    /// Return the string representation used in SQL storage.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }
}

lifecycle!(
    OfferStatus,
    EntityKind::Offer,
    Self::Draft,
    [Draft, Published, InProgress, Completed]
);

// ---------------------------------------------------------------------------
// ApplicationStatus
// ---------------------------------------------------------------------------

/// Status of an application to an offer.
///
/// ```text
/// pending → accepted
///         → rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ApplicationStatus {
    Pending,
    Accepted,
    Rejected,
}

impl ApplicationStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Accepted, Self::Rejected],
            Self::Accepted | Self::Rejected => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

lifecycle!(
    ApplicationStatus,
    EntityKind::Application,
    Self::Pending,
    [Pending, Accepted, Rejected]
);

// ---------------------------------------------------------------------------
// ContractStatus
// ---------------------------------------------------------------------------

/// Status of a contract. Strictly linear: no skipping, no reverse.
///
/// ```text
/// generated → signed → in_progress → completed → archived
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Generated,
    Signed,
    InProgress,
    Completed,
    Archived,
}

impl ContractStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Generated => &[Self::Signed],
            Self::Signed => &[Self::InProgress],
            Self::InProgress => &[Self::Completed],
            Self::Completed => &[Self::Archived],
            Self::Archived => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Generated => "generated",
            Self::Signed => "signed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Archived => "archived",
        }
    }
}

lifecycle!(
    ContractStatus,
    EntityKind::Contract,
    Self::Generated,
    [Generated, Signed, InProgress, Completed, Archived]
);

// ---------------------------------------------------------------------------
// PaymentStatus
// ---------------------------------------------------------------------------

/// Payment sub-status of a contract, independent of [`ContractStatus`].
///
/// ```text
/// unpaid → authorized → captured → refunded
///                     → refunded
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Unpaid,
    Authorized,
    Captured,
    Refunded,
}

impl PaymentStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Unpaid => &[Self::Authorized],
            Self::Authorized => &[Self::Captured, Self::Refunded],
            Self::Captured => &[Self::Refunded],
            Self::Refunded => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Authorized => "authorized",
            Self::Captured => "captured",
            Self::Refunded => "refunded",
        }
    }
}

lifecycle!(
    PaymentStatus,
    EntityKind::Contract,
    Self::Unpaid,
    [Unpaid, Authorized, Captured, Refunded]
);

// ---------------------------------------------------------------------------
// MilestoneStatus
// ---------------------------------------------------------------------------

/// Status of a contract milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    Pending,
    Completed,
}

impl MilestoneStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Completed],
            Self::Completed => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }
}

lifecycle!(
    MilestoneStatus,
    EntityKind::Milestone,
    Self::Pending,
    [Pending, Completed]
);

// ---------------------------------------------------------------------------
// LeaveStatus
// ---------------------------------------------------------------------------

/// Status of a leave request. Terminal once decided.
///
/// ```text
/// pending → approved
///         → rejected
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    Pending,
    Approved,
    Rejected,
}

impl LeaveStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Approved, Self::Rejected],
            Self::Approved | Self::Rejected => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

lifecycle!(
    LeaveStatus,
    EntityKind::Leave,
    Self::Pending,
    [Pending, Approved, Rejected]
);

// ---------------------------------------------------------------------------
// AttendanceStatus
// ---------------------------------------------------------------------------

/// Attendance classification for a work day.
///
/// ```text
/// absent → excused
/// late   → excused
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    Late,
    Excused,
}

impl AttendanceStatus {
    #[must_use]
    #[allow(clippy::match_same_arms)]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Absent => &[Self::Excused],
            Self::Late => &[Self::Excused],
            Self::Present | Self::Excused => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::Late => "late",
            Self::Excused => "excused",
        }
    }
}

lifecycle!(
    AttendanceStatus,
    EntityKind::Attendance,
    Self::Present,
    [Present, Absent, Late, Excused]
);

// ---------------------------------------------------------------------------
// PayrollStatus
// ---------------------------------------------------------------------------

/// Status of a payroll run. Terminal once paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PayrollStatus {
    Pending,
    Paid,
}

impl PayrollStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Paid],
            Self::Paid => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
        }
    }
}

lifecycle!(
    PayrollStatus,
    EntityKind::Payroll,
    Self::Pending,
    [Pending, Paid]
);

// ---------------------------------------------------------------------------
// ProjectStatus
// ---------------------------------------------------------------------------

/// Status of a project.
///
/// ```text
/// planning → in_progress → completed
///          → cancelled   → on_hold → in_progress (resumed)
///                        → cancelled
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Planning,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Planning => &[Self::InProgress, Self::Cancelled],
            Self::InProgress => &[Self::OnHold, Self::Completed, Self::Cancelled],
            Self::OnHold => &[Self::InProgress, Self::Cancelled],
            Self::Completed | Self::Cancelled => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Planning => "planning",
            Self::InProgress => "in_progress",
            Self::OnHold => "on_hold",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

lifecycle!(
    ProjectStatus,
    EntityKind::Project,
    Self::Planning,
    [Planning, InProgress, OnHold, Completed, Cancelled]
);

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a project task.
///
/// ```text
/// todo → in_progress → done
///                    → todo (put back)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Todo => &[Self::InProgress],
            Self::InProgress => &[Self::Done, Self::Todo],
            Self::Done => &[],
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        }
    }
}

lifecycle!(
    TaskStatus,
    EntityKind::Task,
    Self::Todo,
    [Todo, InProgress, Done]
);

// ---------------------------------------------------------------------------
// TaskPriority
// ---------------------------------------------------------------------------

/// Priority of a project task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LeaveType
// ---------------------------------------------------------------------------

/// Category of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    Annual,
    Sick,
    Unpaid,
    Other,
}

impl LeaveType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Annual => "annual",
            Self::Sick => "sick",
            Self::Unpaid => "unpaid",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for LeaveType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AuditAction
// ---------------------------------------------------------------------------

/// Type of action recorded in the audit trail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AuditAction {
    Created,
    Updated,
    StatusChanged,
    Deleted,
}

impl AuditAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::StatusChanged => "status_changed",
            Self::Deleted => "deleted",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // --- Serde roundtrip tests ---

    macro_rules! test_serde_roundtrip {
        ($name:ident, $ty:ty, $variant:expr, $expected_str:expr) => {
            #[test]
            fn $name() {
                let val = $variant;
                let json = serde_json::to_string(&val).unwrap();
                assert_eq!(json, format!("\"{}\"", $expected_str));
                let recovered: $ty = serde_json::from_str(&json).unwrap();
                assert_eq!(recovered, val);
            }
        };
    }

    test_serde_roundtrip!(
        offer_in_progress,
        OfferStatus,
        OfferStatus::InProgress,
        "in_progress"
    );
    test_serde_roundtrip!(
        application_rejected,
        ApplicationStatus,
        ApplicationStatus::Rejected,
        "rejected"
    );
    test_serde_roundtrip!(
        payment_authorized,
        PaymentStatus,
        PaymentStatus::Authorized,
        "authorized"
    );
    test_serde_roundtrip!(
        project_on_hold,
        ProjectStatus,
        ProjectStatus::OnHold,
        "on_hold"
    );
    test_serde_roundtrip!(
        audit_status_changed,
        AuditAction,
        AuditAction::StatusChanged,
        "status_changed"
    );
    test_serde_roundtrip!(kind_payroll, EntityKind, EntityKind::Payroll, "payroll");

    // --- as_str matches serde for every lifecycle variant ---

    fn assert_as_str_matches_serde<S: Lifecycle + Serialize>() {
        for status in S::ALL {
            let json = serde_json::to_string(status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.name()));
        }
    }

    #[test]
    fn lifecycle_names_match_serde() {
        assert_as_str_matches_serde::<OfferStatus>();
        assert_as_str_matches_serde::<ApplicationStatus>();
        assert_as_str_matches_serde::<ContractStatus>();
        assert_as_str_matches_serde::<PaymentStatus>();
        assert_as_str_matches_serde::<MilestoneStatus>();
        assert_as_str_matches_serde::<LeaveStatus>();
        assert_as_str_matches_serde::<AttendanceStatus>();
        assert_as_str_matches_serde::<PayrollStatus>();
        assert_as_str_matches_serde::<ProjectStatus>();
        assert_as_str_matches_serde::<TaskStatus>();
    }

    #[test]
    fn entity_kind_names_match_serde() {
        for kind in EntityKind::ALL {
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    // --- Terminal states ---

    #[test]
    fn terminal_states() {
        assert!(OfferStatus::Completed.is_terminal());
        assert!(ApplicationStatus::Accepted.is_terminal());
        assert!(ApplicationStatus::Rejected.is_terminal());
        assert!(ContractStatus::Archived.is_terminal());
        assert!(PaymentStatus::Refunded.is_terminal());
        assert!(LeaveStatus::Approved.is_terminal());
        assert!(PayrollStatus::Paid.is_terminal());
        assert!(!ContractStatus::Completed.is_terminal());
        assert!(!PaymentStatus::Captured.is_terminal());
    }

    #[test]
    fn payment_sub_machine_reports_contract_kind() {
        assert_eq!(PaymentStatus::KIND, EntityKind::Contract);
        assert_eq!(ContractStatus::KIND, EntityKind::Contract);
    }
}
