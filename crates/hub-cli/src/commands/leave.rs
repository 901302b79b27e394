use hub_core::enums::{LeaveStatus, LeaveType};
use hub_core::responses::LeaveView;
use hub_db::gateway::Filter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LeaveCommands;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `workhub leave`.
pub async fn handle(
    action: &LeaveCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        LeaveCommands::Request {
            employee,
            leave_type,
            start,
            end,
            reason,
        } => {
            let leave = svc
                .request_leave(
                    &ctx.session()?,
                    *employee,
                    parse_enum::<LeaveType>(leave_type, "leave type")?,
                    parse_date(start, "start")?,
                    parse_date(end, "end")?,
                    reason.as_deref(),
                )
                .await?;
            output(&LeaveView::from(leave), flags.format)
        }
        LeaveCommands::Approve { id } => {
            let leave = svc.approve_leave(&ctx.session()?, *id).await?;
            output(&LeaveView::from(leave), flags.format)
        }
        LeaveCommands::Reject { id } => {
            let leave = svc.reject_leave(&ctx.session()?, *id).await?;
            output(&LeaveView::from(leave), flags.format)
        }
        LeaveCommands::List { employee, status } => {
            let mut filter = Filter::new().limit(ctx.limit(flags));
            if let Some(employee) = employee {
                filter = filter.eq("employee_id", *employee);
            }
            if let Some(status) = status {
                filter = filter.status(parse_enum::<LeaveStatus>(status, "status")?);
            }
            let leaves: Vec<LeaveView> = svc
                .list_leaves(&filter)
                .await?
                .into_iter()
                .map(LeaveView::from)
                .collect();
            output(&leaves, flags.format)
        }
    }
}
