use hub_core::entities::{
    Application, Attendance, AuditEntry, Contract, Leave, Milestone, Offer, Payroll, Project, Task,
};
use hub_core::responses::{
    AcceptResponse, AttendanceView, DecisionResponse, DeleteResponse, LeaveView, PayrollView,
};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPE_NAMES: &[&str] = &[
    "offer",
    "application",
    "contract",
    "milestone",
    "project",
    "task",
    "leave",
    "attendance",
    "payroll",
    "audit-entry",
    "accept-response",
    "payroll-view",
    "attendance-view",
    "leave-view",
    "delete-response",
    "decision-response",
];

fn schema_by_name(name: &str) -> Option<Schema> {
    let schema = match name.replace('_', "-").as_str() {
        "offer" => schema_for!(Offer),
        "application" => schema_for!(Application),
        "contract" => schema_for!(Contract),
        "milestone" => schema_for!(Milestone),
        "project" => schema_for!(Project),
        "task" => schema_for!(Task),
        "leave" => schema_for!(Leave),
        "attendance" => schema_for!(Attendance),
        "payroll" => schema_for!(Payroll),
        "audit-entry" => schema_for!(AuditEntry),
        "accept-response" => schema_for!(AcceptResponse),
        "payroll-view" => schema_for!(PayrollView),
        "attendance-view" => schema_for!(AttendanceView),
        "leave-view" => schema_for!(LeaveView),
        "delete-response" => schema_for!(DeleteResponse),
        "decision-response" => schema_for!(DecisionResponse),
        _ => return None,
    };
    Some(schema)
}

/// Handle `workhub schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(name) = args.type_name.as_deref() else {
        return output(&TYPE_NAMES, flags.format);
    };
    let schema = schema_by_name(name).ok_or_else(|| {
        anyhow::anyhow!(
            "unknown schema type '{name}'; expected one of: {}",
            TYPE_NAMES.join(", ")
        )
    })?;
    output(&schema, flags.format)
}
