use curio_core::enums::StorageProvider;
use curio_store::Attempt;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SaveResponse {
    id: String,
    provider: StorageProvider,
    top_idea_title: String,
    attempts: Vec<Attempt>,
}

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Saving snapshot");
    let saved = ctx.store.save(ctx.state.clone()).await;
    progress.finish_clear();
    let saved = saved?;

    output(
        &SaveResponse {
            id: saved.snapshot.id,
            provider: saved.provider,
            top_idea_title: saved.snapshot.top_idea_title,
            attempts: saved.attempts,
        },
        flags.format,
    )
}
