use hub_core::enums::PayrollStatus;
use hub_core::responses::PayrollView;
use hub_db::gateway::Filter;
use hub_db::ops::hr::PayrollAdjustment;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PayrollCommands;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `workhub payroll`.
pub async fn handle(
    action: &PayrollCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        PayrollCommands::Create {
            employee,
            start,
            end,
            base,
            bonus,
            deductions,
        } => {
            let payroll = svc
                .create_payroll(
                    &ctx.session()?,
                    *employee,
                    parse_date(start, "start")?,
                    parse_date(end, "end")?,
                    *base,
                    *bonus,
                    *deductions,
                )
                .await?;
            output(&PayrollView::from(payroll), flags.format)
        }
        PayrollCommands::Adjust {
            id,
            base,
            bonus,
            deductions,
        } => {
            if base.is_none() && bonus.is_none() && deductions.is_none() {
                anyhow::bail!("At least one of --base, --bonus, or --deductions must be provided");
            }
            let adjustment = PayrollAdjustment {
                base_salary: *base,
                bonus: *bonus,
                deductions: *deductions,
            };
            let payroll = svc.adjust_payroll(&ctx.session()?, *id, adjustment).await?;
            output(&PayrollView::from(payroll), flags.format)
        }
        PayrollCommands::Pay { id } => {
            let payroll = svc.pay_payroll(&ctx.session()?, *id).await?;
            output(&PayrollView::from(payroll), flags.format)
        }
        PayrollCommands::List { employee, status } => {
            let mut filter = Filter::new().limit(ctx.limit(flags));
            if let Some(employee) = employee {
                filter = filter.eq("employee_id", *employee);
            }
            if let Some(status) = status {
                filter = filter.status(parse_enum::<PayrollStatus>(status, "status")?);
            }
            let payrolls: Vec<PayrollView> = svc
                .list_payrolls(&filter)
                .await?
                .into_iter()
                .map(PayrollView::from)
                .collect();
            output(&payrolls, flags.format)
        }
    }
}
