//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use schemars::schema_for;
use curio_core::entities::*;
use curio_core::enums::*;
use curio_core::workspace::WorkspaceState;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_idea() -> IdeaCard {
    IdeaCard {
        id: "ida-a3f8b2c1".into(),
        title: "I Tried productivity for 30 Days".into(),
        core_audience: "productivity beginners who want faster results with a practical system"
            .into(),
        promise: "Get practical shortcuts and avoid common waste.".into(),
        curiosity_gap: "What happens when proven advice meets real constraints?".into(),
        novelty_type: NoveltyType::Format,
        estimated_effort: EstimatedEffort::Low,
    }
}

fn sample_package() -> ScoredPackage {
    ScoredPackage {
        title: "I Tried productivity for 30 Days".into(),
        thumbnail_concept: "Before/After split with timer".into(),
        score: PackageScore::new(6, 8, 5, 8, 6, 7, 10, 6, 5),
        rationale: "Scored against click intent.".into(),
        risk_flags: vec!["Curiosity gap may be weak".into()],
    }
}

roundtrip_and_validate!(idea_roundtrip, IdeaCard, sample_idea());

roundtrip_and_validate!(package_roundtrip, ScoredPackage, sample_package());

roundtrip_and_validate!(
    assessment_roundtrip,
    EmptyViewsAssessment,
    EmptyViewsAssessment::from_pairs(
        6.1,
        vec![(
            "Question chain lacks explicit proof checkpoint.".into(),
            "Add a proof-focused question.".into(),
        )],
    )
);

roundtrip_and_validate!(
    brief_roundtrip,
    CreativeBrief,
    CreativeBrief {
        selected_idea_title: "I Tried productivity for 30 Days".into(),
        selected_packaging: "title | thumbnail".into(),
        hooks: vec!["Open with the end result first.".into()],
        question_chain: vec!["Q1".into(), "Q2".into()],
        beat_outline: vec!["Set stakes and rules".into()],
        retention_checkpoints: vec!["At 0:20: stakes reminder".into()],
        visual_proof_prompts: vec!["Overlay timeline".into()],
        cta_placement: "Primary CTA at final payoff reveal.".into(),
    }
);

roundtrip_and_validate!(
    shot_roundtrip,
    ShotPlanStep,
    ShotPlanStep {
        id: "sht-00ff00ff".into(),
        beat: "Beat 1".into(),
        objective: "State the problem".into(),
        primary_shot: "A-roll close framing with direct eye-line".into(),
        b_roll: "Screen capture with highlighted metric".into(),
        on_screen_text: "The problem in 7 words".into(),
        edit_note: "Open with jump-cut and no intro bumper".into(),
    }
);

roundtrip_and_validate!(
    insight_roundtrip,
    LearningInsight,
    LearningInsight {
        id: "ins-12345678".into(),
        lesson: "Early framing around stakes improved click intent.".into(),
        confidence: 0.72,
        action_for_next_video: "Lead with specific downside.".into(),
    }
);

roundtrip_and_validate!(
    performance_roundtrip,
    PackagePerformanceLog,
    PackagePerformanceLog {
        id: "prf-abcdef01".into(),
        package_title: "I Tried productivity for 30 Days".into(),
        thumbnail_concept: "Face reaction + one bold metric".into(),
        selected_hook: "I tested this in real conditions.".into(),
        ctr_percent: 6.5,
        retention30s_percent: 71.0,
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    topic_intel_roundtrip,
    TopicIntel,
    TopicIntel {
        topic_title: "Productivity".into(),
        summary: "Productivity is the efficiency of production.".into(),
        related_terms: vec!["efficiency".into(), "output".into()],
    }
);

roundtrip_and_validate!(
    workspace_roundtrip,
    WorkspaceState,
    {
        let mut state = WorkspaceState::default();
        state.ideas = vec![sample_idea()];
        state.selected_idea = Some(sample_idea());
        state.packages = vec![sample_package()];
        state.question_chain = vec!["Q1: What?".into()];
        state.best_risk_score = Some(6.1);
        state
    }
);

roundtrip_and_validate!(
    snapshot_roundtrip,
    WorkspaceSnapshot,
    {
        let mut state = WorkspaceState::default();
        state.ideas = vec![sample_idea()];
        WorkspaceSnapshot::capture(state)
    }
);

#[test]
fn snapshot_uses_camel_case_keys() {
    let snapshot = WorkspaceSnapshot::capture(WorkspaceState::default());
    let value = serde_json::to_value(&snapshot).unwrap();
    assert!(value.get("createdAt").is_some());
    assert!(value.get("topIdeaTitle").is_some());
    assert_eq!(value["topIdeaTitle"], "Untitled");
    assert!(value["payload"].get("preFirst15sHook").is_some());
    assert!(value["payload"].get("targetDurationMin").is_some());
}

#[test]
fn performance_log_field_names() {
    let log = PackagePerformanceLog {
        id: "prf-00000000".into(),
        package_title: "t".into(),
        thumbnail_concept: "c".into(),
        selected_hook: "h".into(),
        ctr_percent: 1.0,
        retention30s_percent: 2.0,
        created_at: Utc::now(),
    };
    let value = serde_json::to_value(&log).unwrap();
    assert_eq!(value["ctrPercent"], 1.0);
    assert_eq!(value["retention30sPercent"], 2.0);
}
