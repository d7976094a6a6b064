use curio_core::entities::{LearningInsight, VideoMeta};
use curio_core::workspace::WorkspaceState;
use curio_planner::{ingest_learning, learning_note};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::LearnArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LearnResponse {
    video_url: String,
    video: Option<VideoMeta>,
    insights: Vec<LearningInsight>,
}

/// Handle `curio learn`.
pub async fn handle(
    args: &LearnArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let video_url = args
        .video_url
        .as_deref()
        .unwrap_or(&ctx.state.video_url)
        .trim()
        .to_string();

    let progress = Progress::spinner("Fetching video details");
    let video = ctx.intel.fetch_video_meta(&video_url).await;
    progress.finish_clear();

    apply(&mut ctx.state, &video_url, args.note.as_deref(), video.as_ref());
    ctx.persist()?;
    output(
        &LearnResponse {
            video_url,
            video,
            insights: ctx.state.insights.clone(),
        },
        flags.format,
    )
}

/// Replace the insights with ones for `video_url`. Without a note of the
/// creator's own, the note is drafted from the video's metadata.
fn apply(
    state: &mut WorkspaceState,
    video_url: &str,
    note: Option<&str>,
    meta: Option<&VideoMeta>,
) {
    let note = match note.map(str::trim).filter(|n| !n.is_empty()) {
        Some(note) => note.to_string(),
        None => learning_note(meta),
    };
    video_url.clone_into(&mut state.video_url);
    state.insights = ingest_learning(video_url, Some(&note));
}
