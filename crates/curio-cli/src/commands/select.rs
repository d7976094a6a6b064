use curio_core::CoreError;
use curio_core::entities::IdeaCard;
use curio_core::workspace::WorkspaceState;
use curio_planner::generate_hook_options;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IndexArgs;
use crate::commands::shared::position;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SelectResponse {
    selected_idea: IdeaCard,
    hook_options: Vec<String>,
}

/// Handle `curio select <index>`.
pub fn handle(args: &IndexArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let idea = apply(&mut ctx.state, args.index)?;
    ctx.persist()?;
    output(
        &SelectResponse {
            selected_idea: idea,
            hook_options: ctx.state.hook_options.clone(),
        },
        flags.format,
    )
}

/// Select the idea at a 1-based position and redraft its hooks.
fn apply(state: &mut WorkspaceState, index: usize) -> Result<IdeaCard, CoreError> {
    let idea = state.ideas[position(&state.ideas, index, "idea")?].clone();
    state.hook_options = generate_hook_options(&idea.title, &idea.core_audience);
    state.selected_hook = state.hook_options.first().cloned().unwrap_or_default();
    state.selected_idea = Some(idea.clone());
    Ok(idea)
}
