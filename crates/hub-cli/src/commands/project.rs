use hub_core::enums::{EntityKind, ProjectStatus};
use hub_core::responses::DeleteResponse;
use hub_db::gateway::Filter;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared::parse::{parse_date, parse_enum, parse_opt_date};
use crate::context::AppContext;
use crate::output::output;

/// Handle `workhub project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        ProjectCommands::Create {
            name,
            description,
            budget,
            start,
            end,
        } => {
            let project = svc
                .create_project(
                    &ctx.session()?,
                    name,
                    description.as_deref(),
                    *budget,
                    parse_date(start, "start")?,
                    parse_opt_date(end.as_deref(), "end")?,
                )
                .await?;
            output(&project, flags.format)
        }
        ProjectCommands::Transition { id, status } => {
            let target = parse_enum::<ProjectStatus>(status, "status")?;
            output(
                &svc.transition_project(&ctx.session()?, *id, target).await?,
                flags.format,
            )
        }
        ProjectCommands::Get { id } => output(&svc.get_project(*id).await?, flags.format),
        ProjectCommands::List { status } => {
            let mut filter = Filter::new().limit(ctx.limit(flags));
            if let Some(status) = status {
                filter = filter.status(parse_enum::<ProjectStatus>(status, "status")?);
            }
            output(&svc.list_projects(&filter).await?, flags.format)
        }
        ProjectCommands::Delete { id } => {
            let cascaded = svc.delete_project(&ctx.session()?, *id).await?;
            output(
                &DeleteResponse {
                    kind: EntityKind::Project,
                    id: *id,
                    cascaded,
                },
                flags.format,
            )
        }
    }
}
