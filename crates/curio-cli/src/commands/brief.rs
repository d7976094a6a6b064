use curio_core::CoreError;
use curio_core::entities::CreativeBrief;
use curio_core::workspace::WorkspaceState;
use curio_generate::Origin;
use curio_planner::generate_brief;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AiArgs;
use crate::commands::shared::{origin_label, require_idea, require_lead_package, warn_if_no_model};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BriefResponse {
    origin: &'static str,
    #[serde(flatten)]
    brief: CreativeBrief,
}

/// Idea title and `"{title} | {thumbnail}"` for the lead package.
fn brief_inputs(state: &WorkspaceState) -> Result<(String, String), CoreError> {
    let idea = require_idea(state)?;
    let lead = require_lead_package(state)?;
    Ok((
        idea.title.clone(),
        format!("{} | {}", lead.title, lead.thumbnail_concept),
    ))
}

/// Handle `curio brief`.
pub async fn handle(
    args: &AiArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let (idea_title, packaging) = brief_inputs(&ctx.state)?;
    let duration = ctx.state.target_duration_min;

    let (brief, origin) = if args.ai {
        warn_if_no_model(ctx.assistant.has_model());
        let progress = Progress::spinner("Drafting the brief");
        let drafted = ctx
            .assistant
            .brief(&idea_title, &packaging, duration, &ctx.state.question_chain)
            .await;
        progress.finish_clear();
        (drafted.value, drafted.origin)
    } else {
        (
            generate_brief(&idea_title, &packaging, duration, &ctx.state.question_chain),
            Origin::Template,
        )
    };

    ctx.state.brief = Some(brief.clone());
    ctx.persist()?;
    output(
        &BriefResponse {
            origin: origin_label(origin),
            brief,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use curio_planner::{generate_idea_cards, score_packaging};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn packaging_joins_title_and_thumbnail() {
        let mut state = WorkspaceState::default();
        state.replace_ideas(generate_idea_cards("chess", &[]));
        state.packages = score_packaging(&["Short Title".to_string()], &["Concept A".to_string()]);

        let (title, packaging) = brief_inputs(&state).expect("inputs are ready");

        assert_eq!(title, "I Tried chess for 30 Days");
        assert_eq!(packaging, "Short Title | Concept A");
    }

    #[test]
    fn brief_needs_packages() {
        let mut state = WorkspaceState::default();
        state.replace_ideas(generate_idea_cards("chess", &[]));
        let err = brief_inputs(&state).unwrap_err();
        assert!(err.to_string().contains("curio package"));
    }
}
