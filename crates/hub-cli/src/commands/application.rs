use crate::cli::GlobalFlags;
use crate::cli::subcommands::ApplicationCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `workhub application`.
pub async fn handle(
    action: &ApplicationCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        ApplicationCommands::Apply {
            offer,
            applicant,
            cover_letter,
        } => {
            let application = svc
                .apply_to_offer(&ctx.session()?, *offer, *applicant, cover_letter.as_deref())
                .await?;
            output(&application, flags.format)
        }
        ApplicationCommands::Accept { id } => {
            let response = svc.accept_application(&ctx.session()?, *id).await?;
            output(&response, flags.format)
        }
        ApplicationCommands::Reject { id } => {
            output(&svc.reject_application(&ctx.session()?, *id).await?, flags.format)
        }
        ApplicationCommands::Get { id } => output(&svc.get_application(*id).await?, flags.format),
        ApplicationCommands::List { offer } => {
            let applications = svc.list_applications(*offer, ctx.limit(flags)).await?;
            output(&applications, flags.format)
        }
    }
}
