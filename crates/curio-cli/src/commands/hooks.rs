use curio_core::CoreError;
use curio_core::workspace::WorkspaceState;
use curio_generate::Origin;
use curio_planner::generate_hook_options;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{AiArgs, IndexArgs};
use crate::commands::shared::{origin_label, position, require_idea, warn_if_no_model};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct HooksResponse {
    origin: &'static str,
    hook_options: Vec<String>,
    selected_hook: String,
}

/// Handle `curio hooks`.
pub async fn handle(
    args: &AiArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let idea = require_idea(&ctx.state)?.clone();

    let (hooks, origin) = if args.ai {
        warn_if_no_model(ctx.assistant.has_model());
        let progress = Progress::spinner("Drafting hooks");
        let drafted = ctx.assistant.hooks(&idea.title, &idea.core_audience).await;
        progress.finish_clear();
        (drafted.value, drafted.origin)
    } else {
        (
            generate_hook_options(&idea.title, &idea.core_audience),
            Origin::Template,
        )
    };

    replace_hooks(&mut ctx.state, hooks);
    ctx.persist()?;
    output(
        &HooksResponse {
            origin: origin_label(origin),
            hook_options: ctx.state.hook_options.clone(),
            selected_hook: ctx.state.selected_hook.clone(),
        },
        flags.format,
    )
}

/// Handle `curio hook-pick <index>`.
pub fn handle_pick(
    args: &IndexArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    pick(&mut ctx.state, args.index)?;
    ctx.persist()?;
    output(
        &serde_json::json!({ "selectedHook": ctx.state.selected_hook }),
        flags.format,
    )
}

fn replace_hooks(state: &mut WorkspaceState, hooks: Vec<String>) {
    state.selected_hook = hooks.first().cloned().unwrap_or_default();
    state.hook_options = hooks;
}

fn pick(state: &mut WorkspaceState, index: usize) -> Result<(), CoreError> {
    let at = position(&state.hook_options, index, "hook")?;
    state.selected_hook = state.hook_options[at].clone();
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn new_hooks_select_the_first() {
        let mut state = WorkspaceState::default();
        state.selected_hook = "stale".into();
        replace_hooks(&mut state, generate_hook_options("Deep Work", ""));
        assert_eq!(state.selected_hook, state.hook_options[0]);
    }

    #[test]
    fn pick_is_one_based() {
        let mut state = WorkspaceState::default();
        replace_hooks(&mut state, generate_hook_options("Deep Work", ""));
        pick(&mut state, 3).expect("third hook exists");
        assert_eq!(
            state.selected_hook,
            "I tested Deep Work in real conditions and one result surprised me."
        );
    }

    #[test]
    fn pick_without_hooks_fails() {
        let mut state = WorkspaceState::default();
        let err = pick(&mut state, 1).unwrap_err();
        assert!(err.to_string().ends_with("There are no hooks yet."));
    }
}
