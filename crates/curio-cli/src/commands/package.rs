use curio_core::CoreError;
use curio_core::entities::ScoredPackage;
use curio_core::workspace::WorkspaceState;
use curio_planner::{
    current_assessment, default_package_titles, default_thumbnail_concepts, explain_package,
    score_packaging,
};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::require_idea;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageRow {
    title: String,
    thumbnail_concept: String,
    click_potential: u8,
    respect_time: u8,
    give_more: u8,
    curiosity_gap: u8,
    why: Vec<&'static str>,
    risk_flags: Vec<String>,
}

impl From<&ScoredPackage> for PackageRow {
    fn from(package: &ScoredPackage) -> Self {
        Self {
            title: package.title.clone(),
            thumbnail_concept: package.thumbnail_concept.clone(),
            click_potential: package.score.click_potential,
            respect_time: package.score.respect_time,
            give_more: package.score.give_more,
            curiosity_gap: package.score.curiosity_gap,
            why: explain_package(package),
            risk_flags: package.risk_flags.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PackageResponse {
    risk_score: f64,
    best_risk_score: Option<f64>,
    packages: Vec<PackageRow>,
}

/// Handle `curio package`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let risk_score = apply(&mut ctx.state)?;
    ctx.persist()?;
    output(
        &PackageResponse {
            risk_score,
            best_risk_score: ctx.state.best_risk_score,
            packages: ctx.state.packages.iter().map(PackageRow::from).collect(),
        },
        flags.format,
    )
}

/// Score the default candidates for the selected idea and record the
/// resulting risk. Returns the lead package's risk score.
fn apply(state: &mut WorkspaceState) -> Result<f64, CoreError> {
    let idea_title = require_idea(state)?.title.clone();
    state.packages = score_packaging(
        &default_package_titles(&idea_title, &state.pre_title_angle),
        &default_thumbnail_concepts(&state.pre_thumbnail_concept),
    );
    let risk_score = current_assessment(state).risk_score;
    state.record_risk(risk_score);
    Ok(risk_score)
}

#[cfg(test)]
mod tests {
    use curio_planner::generate_idea_cards;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn packaging_requires_an_idea() {
        let mut state = WorkspaceState::default();
        assert!(apply(&mut state).is_err());
        assert!(state.packages.is_empty());
    }

    #[test]
    fn scoring_records_the_first_risk() {
        let mut state = WorkspaceState::default();
        state.replace_ideas(generate_idea_cards("chess", &[]));

        let risk = apply(&mut state).expect("idea is selected");

        assert!(!state.packages.is_empty());
        assert_eq!(state.best_risk_score, Some(risk));
    }

    #[test]
    fn angle_leads_the_candidates() {
        let mut state = WorkspaceState::default();
        state.replace_ideas(generate_idea_cards("chess", &[]));
        state.pre_title_angle = "I Beat 100 Players in 7 Days".into();

        apply(&mut state).expect("idea is selected");

        assert_eq!(
            state.lead_package().map(|p| p.title.as_str()),
            Some("I Beat 100 Players in 7 Days")
        );
    }
}
