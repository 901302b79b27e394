use hub_core::enums::{EntityKind, OfferStatus};
use hub_core::responses::DeleteResponse;
use hub_db::gateway::Filter;
use hub_db::ops::marketplace::OfferChanges;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::OfferCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `workhub offer`.
pub async fn handle(
    action: &OfferCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let svc = &ctx.service;
    match action {
        OfferCommands::Create {
            employer,
            title,
            description,
            amount,
        } => {
            let offer = svc
                .create_offer(
                    &ctx.session()?,
                    *employer,
                    title,
                    description.as_deref(),
                    *amount,
                )
                .await?;
            output(&offer, flags.format)
        }
        OfferCommands::Update {
            id,
            title,
            description,
            amount,
        } => {
            let changes = OfferChanges {
                title: title.clone(),
                description: description.clone().map(Some),
                amount: *amount,
            };
            if changes.title.is_none() && changes.description.is_none() && changes.amount.is_none()
            {
                anyhow::bail!("At least one of --title, --description, or --amount must be provided");
            }
            let offer = svc.edit_offer(&ctx.session()?, *id, changes).await?;
            output(&offer, flags.format)
        }
        OfferCommands::Publish { id } => {
            output(&svc.publish_offer(&ctx.session()?, *id).await?, flags.format)
        }
        OfferCommands::Start { id } => {
            output(&svc.start_offer(&ctx.session()?, *id).await?, flags.format)
        }
        OfferCommands::Complete { id } => {
            output(&svc.complete_offer(&ctx.session()?, *id).await?, flags.format)
        }
        OfferCommands::Get { id } => output(&svc.get_offer(*id).await?, flags.format),
        OfferCommands::List { status, employer } => {
            let mut filter = Filter::new().limit(ctx.limit(flags));
            if let Some(status) = status {
                filter = filter.status(parse_enum::<OfferStatus>(status, "status")?);
            }
            if let Some(employer) = employer {
                filter = filter.eq("employer_id", *employer);
            }
            output(&svc.list_offers(&filter).await?, flags.format)
        }
        OfferCommands::Delete { id } => {
            svc.delete_offer(&ctx.session()?, *id).await?;
            output(
                &DeleteResponse {
                    kind: EntityKind::Offer,
                    id: *id,
                    cascaded: 0,
                },
                flags.format,
            )
        }
    }
}
