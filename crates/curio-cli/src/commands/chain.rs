use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::require_idea;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ChainResponse {
    idea_title: String,
    question_chain: Vec<String>,
}

/// Handle `curio chain`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let idea_title = require_idea(&ctx.state)?.title.clone();
    ctx.state.question_chain = curio_planner::build_question_chain(&idea_title);
    ctx.persist()?;
    output(
        &ChainResponse {
            idea_title,
            question_chain: ctx.state.question_chain.clone(),
        },
        flags.format,
    )
}
