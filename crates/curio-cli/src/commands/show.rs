use curio_core::entities::{
    CreativeBrief, EmptyViewsAssessment, IdeaCard, LearningInsight, PerformanceSummary,
    ScoredPackage, ShotPlanStep,
};
use curio_core::workspace::WorkspaceState;
use curio_planner::{current_assessment, next_video_recommendations, summarize_performance};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowResponse<'a> {
    channel_id: &'a str,
    niche: &'a str,
    selected_idea: Option<&'a str>,
    pre_title_angle: &'a str,
    pre_thumbnail_concept: &'a str,
    pre_first15s_hook: &'a str,
    target_duration_min: u32,
    selected_hook: &'a str,
    question_chain: &'a [String],
    risk: EmptyViewsAssessment,
    best_risk_score: Option<f64>,
    winning_package: Option<&'a str>,
    performance: Option<PerformanceSummary>,
    recommendations: Vec<String>,
    ideas: &'a [IdeaCard],
    hook_options: Vec<HookRow<'a>>,
    packages: &'a [ScoredPackage],
    brief: Option<&'a CreativeBrief>,
    shot_plan: &'a [ShotPlanStep],
    insights: &'a [LearningInsight],
}

#[derive(Debug, Serialize)]
struct HookRow<'a> {
    hook: &'a str,
    selected: bool,
}

fn view(state: &WorkspaceState) -> ShowResponse<'_> {
    ShowResponse {
        channel_id: &state.channel_id,
        niche: &state.niche,
        selected_idea: state.selected_idea.as_ref().map(|i| i.title.as_str()),
        pre_title_angle: &state.pre_title_angle,
        pre_thumbnail_concept: &state.pre_thumbnail_concept,
        pre_first15s_hook: &state.pre_first15s_hook,
        target_duration_min: state.target_duration_min,
        selected_hook: &state.selected_hook,
        question_chain: &state.question_chain,
        risk: current_assessment(state),
        best_risk_score: state.best_risk_score,
        winning_package: state.winning_package.as_ref().map(|p| p.title.as_str()),
        performance: summarize_performance(&state.package_performance_log),
        recommendations: next_video_recommendations(state),
        ideas: &state.ideas,
        hook_options: state
            .hook_options
            .iter()
            .map(|hook| HookRow {
                hook,
                selected: *hook == state.selected_hook,
            })
            .collect(),
        packages: &state.packages,
        brief: state.brief.as_ref(),
        shot_plan: &state.shot_plan,
        insights: &state.insights,
    }
}

/// Handle `curio show`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&view(&ctx.state), flags.format)
}
