//! Markdown export and next-video recommendations.

use curio_core::entities::EmptyViewsAssessment;
use curio_core::enums::RiskLabel;
use curio_core::workspace::WorkspaceState;

use crate::packaging::explain_package;
use crate::performance::summarize_performance;
use crate::risk::{REASON_BALANCED, assess_empty_views_risk};

/// Average CTR below this suggests the packaging is not earning clicks.
pub const CTR_TARGET_PERCENT: f64 = 4.0;
/// Average 30s retention below this suggests the opening loses viewers.
pub const RETENTION_TARGET_PERCENT: f64 = 50.0;

/// Assess the workspace's lead package with its current hook and chain.
#[must_use]
pub fn current_assessment(state: &WorkspaceState) -> EmptyViewsAssessment {
    assess_empty_views_risk(
        state.lead_package(),
        &state.pre_first15s_hook,
        &state.question_chain,
    )
}

/// Follow-up suggestions drawn from the current assessment, the winning
/// package, logged performance and the latest learning.
#[must_use]
pub fn next_video_recommendations(state: &WorkspaceState) -> Vec<String> {
    let mut recs = Vec::new();

    let assessment = current_assessment(state);
    let balanced = assessment.reasons.iter().any(|r| r == REASON_BALANCED);
    match assessment.fixes.first() {
        Some(fix) if !balanced && assessment.risk_label != RiskLabel::Low => recs.push(format!(
            "Lower empty-views risk ({}/10) first: {fix}",
            assessment.risk_score
        )),
        _ => recs.push(format!(
            "Keep the current structure: empty-views risk is {}/10.",
            assessment.risk_score
        )),
    }

    match &state.winning_package {
        Some(winner) => recs.push(format!(
            "Reuse the winning pair \"{}\" + \"{}\" as the baseline for the next upload.",
            winner.title, winner.thumbnail_concept
        )),
        None => recs.push("Save a winning package so the next video has a baseline to beat.".into()),
    }

    match summarize_performance(&state.package_performance_log) {
        Some(summary) => {
            if summary.avg_ctr < CTR_TARGET_PERCENT {
                recs.push(format!(
                    "Average CTR is {}%: test a sharper title/thumbnail contrast.",
                    summary.avg_ctr
                ));
            } else {
                recs.push(format!(
                    "Average CTR is {}%: keep the current packaging style.",
                    summary.avg_ctr
                ));
            }
            if summary.avg_retention < RETENTION_TARGET_PERCENT {
                recs.push(format!(
                    "30s retention averages {}%: tighten the first 15 seconds.",
                    summary.avg_retention
                ));
            } else {
                recs.push(format!(
                    "30s retention averages {}%: the hook is holding attention.",
                    summary.avg_retention
                ));
            }
        }
        None => recs.push(
            "Log CTR and 30s retention after publishing to calibrate the next plan.".into(),
        ),
    }

    if let Some(insight) = state.insights.first() {
        recs.push(insight.action_for_next_video.clone());
    }
    recs
}

fn bullets(lines: &mut Vec<String>, items: &[String]) {
    if items.is_empty() {
        lines.push("_none_".into());
    }
    lines.extend(items.iter().map(|item| format!("- {item}")));
}

fn or_unset(value: &str) -> &str {
    if value.trim().is_empty() { "_unset_" } else { value }
}

/// Render the workspace as a Markdown production plan.
#[must_use]
pub fn export_markdown(state: &WorkspaceState) -> String {
    let mut lines = vec![
        format!("# Video plan: {}", state.top_idea_title()),
        String::new(),
        format!("- Channel: {}", state.channel_id),
        format!("- Niche: {}", state.niche),
        format!("- Target duration: {} min", state.target_duration_min),
    ];

    if !state.topic_summary.is_empty() || !state.related_terms.is_empty() {
        lines.extend([String::new(), "## Topic".into(), String::new()]);
        if !state.topic_summary.is_empty() {
            lines.extend([state.topic_summary.clone(), String::new()]);
        }
        if !state.related_terms.is_empty() {
            lines.push(format!("Related: {}", state.related_terms.join(", ")));
        }
    }

    lines.extend([String::new(), "## Ideas".into(), String::new()]);
    if state.ideas.is_empty() {
        lines.push("_none_".into());
    }
    let selected = state.selected_idea.as_ref().map(|i| i.id.as_str());
    for (i, idea) in state.ideas.iter().enumerate() {
        let marker = if Some(idea.id.as_str()) == selected { " (selected)" } else { "" };
        lines.push(format!(
            "{}. {}{marker} [{}, {} effort]",
            i + 1,
            idea.title,
            idea.novelty_type,
            idea.estimated_effort
        ));
    }

    lines.extend([String::new(), "## Packaging".into(), String::new()]);
    if state.packages.is_empty() {
        lines.push("_not scored_".into());
    } else {
        lines.push("| Title | Thumbnail | Score | Why it can win |".into());
        lines.push("| --- | --- | --- | --- |".into());
        for package in &state.packages {
            lines.push(format!(
                "| {} | {} | {}/10 | {} |",
                package.title,
                package.thumbnail_concept,
                package.score.total(),
                explain_package(package).join(", ")
            ));
        }
    }
    if let Some(winner) = &state.winning_package {
        lines.push(String::new());
        lines.push(format!(
            "Winning package: {} + {}",
            winner.title, winner.thumbnail_concept
        ));
    }

    let assessment = current_assessment(state);
    lines.extend([
        String::new(),
        "## Empty-views risk".into(),
        String::new(),
        format!("{} ({}/10)", assessment.risk_label, assessment.risk_score),
        String::new(),
    ]);
    for (reason, fix) in assessment.reasons.iter().zip(&assessment.fixes) {
        lines.push(format!("- {reason} Fix: {fix}"));
    }
    if let Some(best) = state.best_risk_score {
        lines.push(String::new());
        lines.push(format!("Best risk so far: {best}/10"));
    }

    lines.extend([
        String::new(),
        "## Pre-production".into(),
        String::new(),
        format!("- Title angle: {}", or_unset(&state.pre_title_angle)),
        format!("- Thumbnail concept: {}", or_unset(&state.pre_thumbnail_concept)),
        format!("- First 15s hook: {}", or_unset(&state.pre_first15s_hook)),
        format!("- Selected hook: {}", or_unset(&state.selected_hook)),
        String::new(),
        "### Question chain".into(),
        String::new(),
    ]);
    bullets(&mut lines, &state.question_chain);

    if let Some(brief) = &state.brief {
        lines.extend([
            String::new(),
            "## Creative brief".into(),
            String::new(),
            format!("Packaging: {}", brief.selected_packaging),
            String::new(),
            "### Hooks".into(),
        ]);
        bullets(&mut lines, &brief.hooks);
        lines.push("### Beats".into());
        bullets(&mut lines, &brief.beat_outline);
        lines.push("### Retention checkpoints".into());
        bullets(&mut lines, &brief.retention_checkpoints);
        lines.push("### Visual proof".into());
        bullets(&mut lines, &brief.visual_proof_prompts);
        lines.push(format!("CTA: {}", brief.cta_placement));
    }

    if !state.shot_plan.is_empty() {
        lines.extend([String::new(), "## Shot plan".into(), String::new()]);
        for step in &state.shot_plan {
            lines.push(format!(
                "- **{}**: {} | {} | B-roll: {} | Text: {} | Edit: {}",
                step.beat,
                step.objective,
                step.primary_shot,
                step.b_roll,
                step.on_screen_text,
                step.edit_note
            ));
        }
    }

    if !state.insights.is_empty() {
        lines.extend([String::new(), "## Learnings".into(), String::new()]);
        for insight in &state.insights {
            lines.push(format!(
                "- {} (confidence {:.2}) Next: {}",
                insight.lesson, insight.confidence, insight.action_for_next_video
            ));
        }
    }

    if let Some(summary) = summarize_performance(&state.package_performance_log) {
        lines.extend([
            String::new(),
            "## Performance".into(),
            String::new(),
            format!(
                "Average CTR {}% | average 30s retention {}% across {} uploads",
                summary.avg_ctr, summary.avg_retention, summary.entries
            ),
        ]);
    }

    lines.extend([String::new(), "## Next video".into(), String::new()]);
    bullets(&mut lines, &next_video_recommendations(state));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brief::{build_question_chain, generate_brief};
    use crate::ideas::generate_idea_cards;
    use crate::learning::ingest_learning;
    use crate::packaging::score_packaging;
    use crate::performance::{log_performance, performance_entry};
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn planned_state() -> WorkspaceState {
        let mut state = WorkspaceState::default();
        state.replace_ideas(generate_idea_cards("productivity", &[]));
        state.packages = score_packaging(&["I tested 3 apps and tracked results".to_string()], &[]);
        state.pre_first15s_hook = "A hook that is long enough to count.".into();
        state.question_chain = build_question_chain("I Tried productivity for 30 Days");
        state.brief = Some(generate_brief("I Tried productivity for 30 Days", "p", 8, &[]));
        state
    }

    #[test]
    fn empty_workspace_recommendations() {
        let recs = next_video_recommendations(&WorkspaceState::default());
        assert_eq!(
            recs,
            vec![
                "Lower empty-views risk (8.2/10) first: Score packaging first before production."
                    .to_string(),
                "Save a winning package so the next video has a baseline to beat.".to_string(),
                "Log CTR and 30s retention after publishing to calibrate the next plan.".to_string(),
            ]
        );
    }

    #[test]
    fn recommendations_use_performance_and_insights() {
        let mut state = planned_state();
        state.winning_package = state.packages.first().cloned();
        let package = state.packages[0].clone();
        log_performance(
            &mut state.package_performance_log,
            performance_entry(&package, "hook", 2.5, 70.0, Utc::now()),
        );
        state.insights = ingest_learning("https://youtu.be/x", None);

        let recs = next_video_recommendations(&state);
        assert_eq!(recs[0], "Keep the current structure: empty-views risk is 5/10.");
        assert!(recs[1].starts_with("Reuse the winning pair \"I tested 3 apps"));
        assert_eq!(recs[2], "Average CTR is 2.5%: test a sharper title/thumbnail contrast.");
        assert_eq!(recs[3], "30s retention averages 70%: the hook is holding attention.");
        assert_eq!(recs[4], "Lead with specific downside before introducing method.");
    }

    #[test]
    fn markdown_has_sections() {
        let md = export_markdown(&planned_state());
        assert!(md.starts_with("# Video plan: I Tried productivity for 30 Days\n"));
        assert!(md.contains("1. I Tried productivity for 30 Days (selected) [format, low effort]"));
        assert!(md.contains("| I tested 3 apps and tracked results |"));
        assert!(md.contains("## Empty-views risk"));
        assert!(md.contains("### Retention checkpoints"));
        assert!(md.contains("- At 0:20: stakes reminder"));
        assert!(md.contains("## Next video"));
        assert!(md.ends_with('\n'));
    }

    #[test]
    fn markdown_for_empty_workspace() {
        let md = export_markdown(&WorkspaceState::default());
        assert!(md.starts_with("# Video plan: Untitled"));
        assert!(md.contains("_not scored_"));
        assert!(md.contains("- Title angle: _unset_"));
        assert!(!md.contains("## Creative brief"));
    }
}
