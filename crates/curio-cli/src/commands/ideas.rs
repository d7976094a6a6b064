use curio_core::entities::{IdeaCard, TopicIntel};
use curio_core::workspace::WorkspaceState;
use curio_generate::Origin;
use curio_planner::{generate_hook_options, generate_idea_cards, idea_cards_from_titles};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::IdeasArgs;
use crate::commands::shared::{origin_label, warn_if_no_model};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct IdeasResponse {
    niche: String,
    origin: &'static str,
    topic_title: String,
    topic_summary: String,
    related_terms: Vec<String>,
    ideas: Vec<IdeaCard>,
}

/// Handle `curio ideas`.
pub async fn handle(
    args: &IdeasArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let niche = args
        .niche
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(&ctx.state.niche)
        .to_string();

    let progress = Progress::spinner(&format!("Looking up \"{niche}\""));
    let intel = ctx.intel.fetch_topic_intel(&niche).await;

    let (ideas, origin) = if args.ai {
        warn_if_no_model(ctx.assistant.has_model());
        progress.set_message("Drafting idea titles");
        let drafted = ctx.assistant.idea_titles(&niche).await;
        (idea_cards_from_titles(&niche, &drafted.value), drafted.origin)
    } else {
        (
            generate_idea_cards(&niche, &intel.related_terms),
            Origin::Template,
        )
    };
    progress.finish_clear();

    apply(&mut ctx.state, &niche, &intel, ideas);
    ctx.persist()?;

    output(
        &IdeasResponse {
            niche,
            origin: origin_label(origin),
            topic_title: intel.topic_title,
            topic_summary: intel.summary,
            related_terms: intel.related_terms,
            ideas: ctx.state.ideas.clone(),
        },
        flags.format,
    )
}

/// Replace the ideas and topic context, select the first idea and draft its
/// hooks. Packages and the brief belong to the old ideas and are dropped.
fn apply(state: &mut WorkspaceState, niche: &str, intel: &TopicIntel, ideas: Vec<IdeaCard>) {
    state.niche = niche.to_string();
    state.topic_summary.clone_from(&intel.summary);
    state.related_terms.clone_from(&intel.related_terms);
    state.replace_ideas(ideas);
    if let Some(idea) = &state.selected_idea {
        state.hook_options = generate_hook_options(&idea.title, &idea.core_audience);
        state.selected_hook = state.hook_options.first().cloned().unwrap_or_default();
    }
}
