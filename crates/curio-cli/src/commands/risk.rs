use curio_core::CoreError;
use curio_core::entities::{EmptyViewsAssessment, ScoredPackage};
use curio_core::workspace::WorkspaceState;
use curio_planner::{
    RiskDelta, apply_empty_views_fixes, current_assessment, rescore_after_fixes,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::{require_idea, require_lead_package};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RiskResponse {
    lead_package: Option<String>,
    best_risk_score: Option<f64>,
    #[serde(flatten)]
    assessment: EmptyViewsAssessment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FixResponse {
    risk_before: f64,
    risk_after: f64,
    improvement: f64,
    pre_title_angle: String,
    pre_first15s_hook: String,
    question_chain: Vec<String>,
    assessment: EmptyViewsAssessment,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct WinResponse {
    winning_package: ScoredPackage,
    best_risk_score: Option<f64>,
}

/// Handle `curio risk`. Read-only.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let state = &ctx.state;
    output(
        &RiskResponse {
            lead_package: state.lead_package().map(|p| p.title.clone()),
            best_risk_score: state.best_risk_score,
            assessment: current_assessment(state),
        },
        flags.format,
    )
}

/// Handle `curio fix`.
pub fn handle_fix(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (delta, assessment) = fix(&mut ctx.state)?;
    ctx.persist()?;
    let state = &ctx.state;
    output(
        &FixResponse {
            risk_before: delta.before,
            risk_after: delta.after,
            improvement: delta.improvement(),
            pre_title_angle: state.pre_title_angle.clone(),
            pre_first15s_hook: state.pre_first15s_hook.clone(),
            question_chain: state.question_chain.clone(),
            assessment,
        },
        flags.format,
    )
}

/// Handle `curio win`.
pub fn handle_win(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let winning_package = win(&mut ctx.state)?;
    ctx.persist()?;
    output(
        &WinResponse {
            winning_package,
            best_risk_score: ctx.state.best_risk_score,
        },
        flags.format,
    )
}

/// Rewrite angle, hook and chain against the current assessment, then
/// re-score the packages with the fixed angle.
fn fix(state: &mut WorkspaceState) -> Result<(RiskDelta, EmptyViewsAssessment), CoreError> {
    let idea_title = require_idea(state)?.title.clone();
    let before = current_assessment(state);
    let fixes = apply_empty_views_fixes(
        &idea_title,
        &state.pre_title_angle,
        &state.pre_first15s_hook,
        &state.question_chain,
        &before,
    );
    let rescored = rescore_after_fixes(&idea_title, &state.pre_thumbnail_concept, &fixes);

    state.pre_title_angle = fixes.title_angle;
    state.pre_first15s_hook = fixes.hook;
    state.question_chain = fixes.question_chain;
    state.packages = rescored.packages;
    state.record_risk(rescored.assessment.risk_score);

    let delta = RiskDelta {
        before: before.risk_score,
        after: rescored.assessment.risk_score,
    };
    Ok((delta, rescored.assessment))
}

/// Keep the lead package as the winner. The best risk becomes the current
/// assessment's score even when an earlier one was lower.
fn win(state: &mut WorkspaceState) -> Result<ScoredPackage, CoreError> {
    let lead = require_lead_package(state)?.clone();
    state.best_risk_score = Some(current_assessment(state).risk_score);
    state.winning_package = Some(lead.clone());
    Ok(lead)
}

#[cfg(test)]
mod tests {
    use curio_planner::{build_question_chain, generate_idea_cards, score_packaging};
    use pretty_assertions::assert_eq;

    use super::*;

    fn packaged() -> WorkspaceState {
        let mut state = WorkspaceState::default();
        state.replace_ideas(generate_idea_cards("chess", &[]));
        state.packages = score_packaging(&["Short Title".to_string()], &["Concept A".to_string()]);
        state
    }

    #[test]
    fn fix_rewrites_fields_and_records_risk() {
        let mut state = packaged();

        let (delta, after) = fix(&mut state).expect("idea is selected");

        assert!((after.risk_score - delta.after).abs() < f64::EPSILON);
        assert!(state.pre_first15s_hook.starts_with("In 15 seconds:"));
        let idea_title = &state.selected_idea.as_ref().expect("idea is selected").title;
        assert_eq!(state.question_chain, build_question_chain(idea_title));
        assert_eq!(
            state.lead_package().map(|p| p.title.as_str()),
            Some(state.pre_title_angle.as_str())
        );
        assert_eq!(state.best_risk_score, Some(delta.after));
    }

    #[test]
    fn fix_needs_an_idea() {
        let mut state = WorkspaceState::default();
        assert!(fix(&mut state).is_err());
    }

    #[test]
    fn win_overwrites_best_risk() {
        let mut state = packaged();
        state.best_risk_score = Some(0.5);

        let winner = win(&mut state).expect("lead package exists");

        assert_eq!(winner.title, "Short Title");
        assert_eq!(state.winning_package, Some(winner));
        assert_eq!(
            state.best_risk_score,
            Some(current_assessment(&state).risk_score)
        );
    }

    #[test]
    fn win_needs_packages() {
        let mut state = WorkspaceState::default();
        assert!(win(&mut state).is_err());
    }
}
