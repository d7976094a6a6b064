//! Question chains, retention checkpoints and the creative brief.

use curio_core::entities::CreativeBrief;

/// Videos shorter than this are planned as if they ran this long.
pub const MIN_PLANNED_SECONDS: u32 = 120;

const CHECKPOINT_LABELS: [&str; 4] = [
    "stakes reminder",
    "rehook twist",
    "proof reveal",
    "final escalation",
];

const BRIEF_HOOKS: [&str; 3] = [
    "Open with the end result first, then jump to the challenge.",
    "State the viewer pain in one sentence and promise the experiment.",
    "Use a visual scoreboard that updates every segment.",
];

const BEAT_OUTLINE: [&str; 6] = [
    "Set stakes and rules",
    "Run first attempt with friction",
    "Reveal failure and adjustment",
    "Run improved method",
    "Compare before/after outcome",
    "Deliver takeaway and next challenge",
];

const VISUAL_PROOF_PROMPTS: [&str; 3] = [
    "Overlay side-by-side progress timeline",
    "Use receipts/screen captures as proof beats",
    "Include one real audience comment as narrative pivot",
];

pub const CTA_PLACEMENT: &str =
    "Primary CTA at final payoff reveal; secondary CTA in pinned comment.";

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// The canonical five-question chain for an idea.
#[must_use]
pub fn build_question_chain(idea_title: &str) -> Vec<String> {
    vec![
        format!("Q1: What is the core challenge in \"{idea_title}\"?"),
        "Q2: Why does the common approach fail?".to_string(),
        "Q3: What changed in our new approach?".to_string(),
        "Q4: What measurable proof shows it works?".to_string(),
        "Q5: How can viewers apply this immediately?".to_string(),
    ]
}

/// Four retention checkpoints: a fixed one at 0:20, then one each at a
/// quarter, half and three quarters of the planned runtime.
#[must_use]
pub fn build_retention_checkpoints(duration_min: u32) -> Vec<String> {
    let total = (u64::from(duration_min) * 60).max(u64::from(MIN_PLANNED_SECONDS));
    let seconds = [20, total / 4, total / 2, total * 3 / 4];
    seconds
        .iter()
        .zip(CHECKPOINT_LABELS)
        .map(|(sec, label)| format!("At {}:{:02}: {label}", sec / 60, sec % 60))
        .collect()
}

/// Assemble the creative brief. An empty `question_chain` is replaced by
/// [`build_question_chain`].
#[must_use]
pub fn generate_brief(
    idea_title: &str,
    packaging: &str,
    duration_min: u32,
    question_chain: &[String],
) -> CreativeBrief {
    let question_chain = if question_chain.is_empty() {
        build_question_chain(idea_title)
    } else {
        question_chain.to_vec()
    };
    CreativeBrief {
        selected_idea_title: idea_title.to_string(),
        selected_packaging: packaging.to_string(),
        hooks: owned(&BRIEF_HOOKS),
        question_chain,
        beat_outline: owned(&BEAT_OUTLINE),
        retention_checkpoints: build_retention_checkpoints(duration_min),
        visual_proof_prompts: owned(&VISUAL_PROOF_PROMPTS),
        cta_placement: CTA_PLACEMENT.to_string(),
    }
}
