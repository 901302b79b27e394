use hub_core::enums::AttendanceStatus;
use hub_core::responses::AttendanceView;
use hub_db::gateway::Filter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AttendanceCommands;
use crate::commands::shared::parse::{parse_date, parse_enum, parse_opt_time};
use crate::context::AppContext;
use crate::output::output;

/// Handle `workhub attendance`.
pub async fn handle(
    action: &AttendanceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        AttendanceCommands::Record {
            employee,
            date,
            check_in,
            check_out,
            status,
        } => {
            let attendance = svc
                .record_attendance(
                    &ctx.session()?,
                    *employee,
                    parse_date(date, "date")?,
                    parse_opt_time(check_in.as_deref(), "check-in")?,
                    parse_opt_time(check_out.as_deref(), "check-out")?,
                    parse_enum::<AttendanceStatus>(status, "status")?,
                )
                .await?;
            output(&AttendanceView::from(attendance), flags.format)
        }
        AttendanceCommands::Excuse { id } => {
            let attendance = svc.excuse_attendance(&ctx.session()?, *id).await?;
            output(&AttendanceView::from(attendance), flags.format)
        }
        AttendanceCommands::List { employee } => {
            let mut filter = Filter::new().limit(ctx.limit(flags));
            if let Some(employee) = employee {
                filter = filter.eq("employee_id", *employee);
            }
            let records: Vec<AttendanceView> = svc
                .list_attendance(&filter)
                .await?
                .into_iter()
                .map(AttendanceView::from)
                .collect();
            output(&records, flags.format)
        }
    }
}
