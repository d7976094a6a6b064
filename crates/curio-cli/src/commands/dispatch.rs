use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Sync(args) => commands::sync::handle(&args, ctx, flags),
        Commands::Ideas(args) => commands::ideas::handle(&args, ctx, flags).await,
        Commands::Select(args) => commands::select::handle(&args, ctx, flags),
        Commands::Angle(args) => commands::angle::handle(&args, ctx, flags),
        Commands::Chain => commands::chain::handle(ctx, flags),
        Commands::Hooks(args) => commands::hooks::handle(&args, ctx, flags).await,
        Commands::HookPick(args) => commands::hooks::handle_pick(&args, ctx, flags),
        Commands::Package => commands::package::handle(ctx, flags),
        Commands::Risk => commands::risk::handle(ctx, flags),
        Commands::Fix => commands::risk::handle_fix(ctx, flags),
        Commands::Win => commands::risk::handle_win(ctx, flags),
        Commands::Brief(args) => commands::brief::handle(&args, ctx, flags).await,
        Commands::Shots(args) => commands::shots::handle(&args, ctx, flags).await,
        Commands::Learn(args) => commands::learn::handle(&args, ctx, flags).await,
        Commands::Perf(args) => commands::perf::handle(&args, ctx, flags),
        Commands::Snapshot { action } => commands::snapshot::handle(&action, ctx, flags).await,
        Commands::Export(args) => commands::export::handle(&args, ctx, flags),
        Commands::Show => commands::show::handle(ctx, flags),
    }
}
