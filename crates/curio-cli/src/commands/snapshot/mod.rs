mod list;
mod restore;
mod save;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SnapshotCommands;
use crate::context::AppContext;

/// Handle `curio snapshot`.
pub async fn handle(
    action: &SnapshotCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SnapshotCommands::Save => save::run(ctx, flags).await,
        SnapshotCommands::List { limit } => list::run(*limit, ctx, flags).await,
        SnapshotCommands::Restore { id } => restore::run(id, ctx, flags).await,
    }
}
