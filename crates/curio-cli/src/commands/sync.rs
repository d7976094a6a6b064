use curio_planner::sync_channel;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SyncArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SyncResponse {
    channel_id: String,
    message: String,
}

/// Handle `curio sync`.
pub fn handle(args: &SyncArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let channel_id = args
        .channel_id
        .as_deref()
        .unwrap_or(&ctx.state.channel_id)
        .trim()
        .to_string();
    let message = sync_channel(&channel_id)?;

    ctx.state.channel_id.clone_from(&channel_id);
    ctx.persist()?;
    output(
        &SyncResponse {
            channel_id,
            message,
        },
        flags.format,
    )
}
