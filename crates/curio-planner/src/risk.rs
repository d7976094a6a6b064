//! Empty-views risk assessor.
//!
//! Starts from a base risk and adds independent penalties in a fixed order.
//! Each penalty contributes one reason and the fix at the same index.

use curio_core::entities::{EmptyViewsAssessment, ScoredPackage};

use crate::patterns::has_proof_question;

pub const BASE_RISK: f64 = 5.0;
pub const NO_PACKAGE_RISK: f64 = 8.2;

/// Hooks shorter than this (after trimming) count as vague.
pub const MIN_HOOK_CHARS: usize = 25;
/// Chains shorter than this count as underdeveloped.
pub const MIN_CHAIN_LEN: usize = 4;

pub const REASON_NO_PACKAGE: &str = "No validated package selected yet.";
pub const FIX_NO_PACKAGE: &str = "Score packaging first before production.";

pub const REASON_CLICK_VALUE: &str =
    "High click potential but weaker value payoff can attract low-quality clicks.";
pub const FIX_CLICK_VALUE: &str =
    "Add concrete payoff language: numbers, proof, or before/after outcome.";

pub const REASON_SLOW_VALUE: &str = "Packaging suggests slower value delivery.";
pub const FIX_SLOW_VALUE: &str = "Shorten and sharpen title angle to communicate immediate value.";

pub const REASON_VAGUE_HOOK: &str = "First 15-second hook is too vague/short.";
pub const FIX_VAGUE_HOOK: &str = "Write a specific downside + promised result in first 15 seconds.";

pub const REASON_SHORT_CHAIN: &str =
    "Question chain is underdeveloped, risking early story drop-off.";
pub const FIX_SHORT_CHAIN: &str = "Use at least 4-5 question steps with delayed answers.";

pub const REASON_NO_PROOF: &str = "Question chain lacks explicit proof checkpoint.";
pub const FIX_NO_PROOF: &str =
    "Add a proof-focused question (e.g., what measurable result proves this works?).";

pub const REASON_BALANCED: &str =
    "Packaging and structure are balanced for durable audience quality.";
pub const FIX_BALANCED: &str = "Keep question chain and first-15s hook aligned with final payoff.";

/// One penalty rule: whether it fires, how much it adds, and its reason/fix pair.
struct Penalty {
    fired: bool,
    weight: f64,
    reason: &'static str,
    fix: &'static str,
}

/// Assess the empty-views risk of the lead package with the current hook
/// and question chain.
#[must_use]
pub fn assess_empty_views_risk(
    package: Option<&ScoredPackage>,
    hook: &str,
    question_chain: &[String],
) -> EmptyViewsAssessment {
    let Some(package) = package else {
        return EmptyViewsAssessment::from_pairs(
            NO_PACKAGE_RISK,
            vec![(REASON_NO_PACKAGE.to_string(), FIX_NO_PACKAGE.to_string())],
        );
    };
    let score = &package.score;

    let penalties = [
        Penalty {
            fired: score.click_potential >= 8 && score.give_more <= 6,
            weight: 2.2,
            reason: REASON_CLICK_VALUE,
            fix: FIX_CLICK_VALUE,
        },
        Penalty {
            fired: score.respect_time <= 6,
            weight: 1.4,
            reason: REASON_SLOW_VALUE,
            fix: FIX_SLOW_VALUE,
        },
        Penalty {
            fired: hook.trim().chars().count() < MIN_HOOK_CHARS,
            weight: 1.2,
            reason: REASON_VAGUE_HOOK,
            fix: FIX_VAGUE_HOOK,
        },
        Penalty {
            fired: question_chain.len() < MIN_CHAIN_LEN,
            weight: 1.1,
            reason: REASON_SHORT_CHAIN,
            fix: FIX_SHORT_CHAIN,
        },
        Penalty {
            fired: !has_proof_question(question_chain),
            weight: 0.9,
            reason: REASON_NO_PROOF,
            fix: FIX_NO_PROOF,
        },
    ];

    let mut risk = BASE_RISK;
    let mut pairs = Vec::new();
    for penalty in penalties.iter().filter(|p| p.fired) {
        risk += penalty.weight;
        pairs.push((penalty.reason.to_string(), penalty.fix.to_string()));
    }
    if pairs.is_empty() {
        pairs.push((REASON_BALANCED.to_string(), FIX_BALANCED.to_string()));
    }
    EmptyViewsAssessment::from_pairs(risk, pairs)
}
