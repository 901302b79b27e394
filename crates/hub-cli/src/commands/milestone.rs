use crate::cli::GlobalFlags;
use crate::cli::subcommands::MilestoneCommands;
use crate::commands::shared::parse::parse_opt_date;
use crate::context::AppContext;
use crate::output::output;

/// Handle `workhub milestone`.
pub async fn handle(
    action: &MilestoneCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        MilestoneCommands::Add {
            contract,
            title,
            amount,
            due,
        } => {
            let milestone = svc
                .add_milestone(
                    &ctx.session()?,
                    *contract,
                    title,
                    *amount,
                    parse_opt_date(due.as_deref(), "due")?,
                )
                .await?;
            output(&milestone, flags.format)
        }
        MilestoneCommands::Complete { id } => {
            output(&svc.complete_milestone(&ctx.session()?, *id).await?, flags.format)
        }
        MilestoneCommands::List { contract } => {
            let milestones = svc.list_milestones(*contract, ctx.limit(flags)).await?;
            output(&milestones, flags.format)
        }
    }
}
