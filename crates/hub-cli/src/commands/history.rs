use hub_core::enums::EntityKind;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::HistoryArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `workhub history`.
pub async fn handle(
    args: &HistoryArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let kind = parse_enum::<EntityKind>(&args.kind, "kind")?;
    let entries = ctx.service.history(kind, args.id).await?;
    output(&entries, flags.format)
}
