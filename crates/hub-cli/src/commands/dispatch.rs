use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Offer { action } => commands::offer::handle(&action, ctx, flags).await,
        Commands::Application { action } => {
            commands::application::handle(&action, ctx, flags).await
        }
        Commands::Contract { action } => commands::contract::handle(&action, ctx, flags).await,
        Commands::Payment { action } => commands::payment::handle(&action, ctx, flags).await,
        Commands::Milestone { action } => commands::milestone::handle(&action, ctx, flags).await,
        Commands::Leave { action } => commands::leave::handle(&action, ctx, flags).await,
        Commands::Attendance { action } => {
            commands::attendance::handle(&action, ctx, flags).await
        }
        Commands::Payroll { action } => commands::payroll::handle(&action, ctx, flags).await,
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::History(args) => commands::history::handle(&args, ctx, flags).await,
        Commands::Schema(_) | Commands::Check(_) => {
            unreachable!("schema/check are pre-dispatched in main")
        }
    }
}
