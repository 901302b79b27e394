use hub_core::enums::{ContractStatus, PaymentStatus};
use hub_db::gateway::Filter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ContractCommands;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `workhub contract`.
pub async fn handle(
    action: &ContractCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        ContractCommands::Generate {
            application,
            start,
            end,
            amount,
            terms,
        } => {
            let contract = svc
                .generate_contract(
                    &ctx.session()?,
                    *application,
                    parse_date(start, "start")?,
                    parse_date(end, "end")?,
                    *amount,
                    terms,
                )
                .await?;
            output(&contract, flags.format)
        }
        ContractCommands::Advance { id, status } => {
            let target = parse_enum::<ContractStatus>(status, "status")?;
            output(
                &svc.advance_contract(&ctx.session()?, *id, target).await?,
                flags.format,
            )
        }
        ContractCommands::Get { id } => output(&svc.get_contract(*id).await?, flags.format),
        ContractCommands::List {
            status,
            payment_status,
        } => {
            let mut filter = Filter::new().limit(ctx.limit(flags));
            if let Some(status) = status {
                filter = filter.status(parse_enum::<ContractStatus>(status, "status")?);
            }
            if let Some(payment_status) = payment_status {
                let payment_status = parse_enum::<PaymentStatus>(payment_status, "payment status")?;
                filter = filter.eq("payment_status", payment_status.as_str());
            }
            output(&svc.list_contracts(&filter).await?, flags.format)
        }
    }
}
