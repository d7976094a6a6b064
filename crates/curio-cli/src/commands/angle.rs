use curio_core::workspace::WorkspaceState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AngleArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct AngleResponse {
    pre_title_angle: String,
    pre_thumbnail_concept: String,
    pre_first15s_hook: String,
    target_duration_min: u32,
}

/// Handle `curio angle`. With no flags this just prints the current values.
pub fn handle(args: &AngleArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if apply(&mut ctx.state, args) {
        ctx.persist()?;
    }
    let state = &ctx.state;
    output(
        &AngleResponse {
            pre_title_angle: state.pre_title_angle.clone(),
            pre_thumbnail_concept: state.pre_thumbnail_concept.clone(),
            pre_first15s_hook: state.pre_first15s_hook.clone(),
            target_duration_min: state.target_duration_min,
        },
        flags.format,
    )
}

/// Copy the given fields onto the workspace; returns whether anything was set.
fn apply(state: &mut WorkspaceState, args: &AngleArgs) -> bool {
    let mut changed = false;
    for (value, field) in [
        (&args.title, &mut state.pre_title_angle),
        (&args.thumbnail, &mut state.pre_thumbnail_concept),
        (&args.hook, &mut state.pre_first15s_hook),
    ] {
        if let Some(value) = value {
            value.trim().clone_into(field);
            changed = true;
        }
    }
    if let Some(minutes) = args.duration {
        state.set_target_duration(minutes);
        changed = true;
    }
    changed
}
