use hub_core::enums::{EntityKind, TaskPriority, TaskStatus};
use hub_core::responses::DeleteResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `workhub task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        TaskCommands::Create {
            project,
            title,
            description,
            priority,
        } => {
            let task = svc
                .create_task(
                    &ctx.session()?,
                    *project,
                    title,
                    description.as_deref(),
                    parse_enum::<TaskPriority>(priority, "priority")?,
                )
                .await?;
            output(&task, flags.format)
        }
        TaskCommands::Transition { id, status } => {
            let target = parse_enum::<TaskStatus>(status, "status")?;
            output(
                &svc.transition_task(&ctx.session()?, *id, target).await?,
                flags.format,
            )
        }
        TaskCommands::List { project } => {
            output(&svc.list_tasks(*project, ctx.limit(flags)).await?, flags.format)
        }
        TaskCommands::Delete { id } => {
            svc.delete_task(&ctx.session()?, *id).await?;
            output(
                &DeleteResponse {
                    kind: EntityKind::Task,
                    id: *id,
                    cascaded: 0,
                },
                flags.format,
            )
        }
    }
}
