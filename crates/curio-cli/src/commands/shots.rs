use std::path::Path;

use anyhow::Context;
use curio_core::entities::ShotPlanStep;
use curio_generate::Origin;
use curio_planner::generate_shot_plan;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ShotsArgs;
use crate::commands::shared::{origin_label, require_idea, warn_if_no_model};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShotsResponse {
    origin: &'static str,
    target_duration_min: u32,
    steps: Vec<ShotPlanStep>,
}

fn read_script(path: &Path) -> anyhow::Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read script {}", path.display()))
}

/// Handle `curio shots`.
///
/// `--script` replaces the saved draft. `--ai` plans from drafted beats and
/// leaves the saved draft alone; empty drafts fall back to the saved script.
pub async fn handle(
    args: &ShotsArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if let Some(path) = &args.script {
        ctx.state.script_draft = read_script(path)?;
    }

    let (script, origin) = if args.ai {
        let idea_title = require_idea(&ctx.state)?.title.clone();
        warn_if_no_model(ctx.assistant.has_model());
        let progress = Progress::spinner("Drafting script beats");
        let drafted = ctx.assistant.script_lines(&idea_title).await;
        progress.finish_clear();
        if drafted.value.is_empty() {
            (ctx.state.script_draft.clone(), Origin::Template)
        } else {
            (drafted.value.join("\n"), drafted.origin)
        }
    } else {
        (ctx.state.script_draft.clone(), Origin::Template)
    };

    let duration = ctx.state.target_duration_min;
    ctx.state.shot_plan = generate_shot_plan(&script, duration);
    ctx.persist()?;
    output(
        &ShotsResponse {
            origin: origin_label(origin),
            target_duration_min: duration,
            steps: ctx.state.shot_plan.clone(),
        },
        flags.format,
    )
}
