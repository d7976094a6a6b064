//! One-click rewrite of the title angle, hook and question chain based on
//! the reasons an assessment fired.

use curio_core::entities::{EmptyViewsAssessment, ScoredPackage};
use curio_core::numeric::round_to;

use crate::brief::build_question_chain;
use crate::ideas::{default_package_titles, default_thumbnail_concepts};
use crate::packaging::{MAX_TITLE_CHARS, score_packaging};
use crate::patterns::{HOOK_REASON, PROOF_ANGLE, WEAK_PAYOFF_REASON, has_proof_question};
use crate::risk::{MIN_CHAIN_LEN, MIN_HOOK_CHARS, assess_empty_views_risk};

const PAYOFF_SUFFIX: &str = " (measured before/after results)";
const TRUNCATED_CHARS: usize = 59;
const PROOF_QUESTION: &str = "Q: What measurable proof confirms this worked?";

/// The three fields the fix applier rewrites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppliedFixes {
    pub title_angle: String,
    pub hook: String,
    pub question_chain: Vec<String>,
}

/// Risk before and after applying fixes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiskDelta {
    pub before: f64,
    pub after: f64,
}

impl RiskDelta {
    /// Positive when the fixes lowered the risk.
    #[must_use]
    pub fn improvement(&self) -> f64 {
        round_to(self.before - self.after, 1)
    }
}

fn fixed_hook(idea_title: &str) -> String {
    format!(
        "In 15 seconds: the exact problem, why most fail, and the measurable result we hit in \"{idea_title}\"."
    )
}

fn truncate_angle(angle: String) -> String {
    if angle.chars().count() <= MAX_TITLE_CHARS {
        return angle;
    }
    let head: String = angle.chars().take(TRUNCATED_CHARS).collect();
    format!("{}...", head.trim_end())
}

/// Rewrite the angle, hook and chain to address `assessment`.
///
/// Applying the result again with an assessment that no longer names the
/// payoff or hook problems leaves all three fields unchanged.
#[must_use]
pub fn apply_empty_views_fixes(
    idea_title: &str,
    title_angle: &str,
    hook: &str,
    question_chain: &[String],
    assessment: &EmptyViewsAssessment,
) -> AppliedFixes {
    let mut angle = match title_angle.trim() {
        "" => idea_title.to_string(),
        trimmed => trimmed.to_string(),
    };
    if assessment.any_reason(|r| WEAK_PAYOFF_REASON.is_match(r)) && !PROOF_ANGLE.is_match(&angle) {
        angle.push_str(PAYOFF_SUFFIX);
    }
    let angle = truncate_angle(angle);

    let hook = hook.trim();
    let hook = if assessment.any_reason(|r| HOOK_REASON.is_match(r))
        || hook.chars().count() < MIN_HOOK_CHARS
    {
        fixed_hook(idea_title)
    } else {
        hook.to_string()
    };

    let mut chain = if question_chain.len() < MIN_CHAIN_LEN {
        build_question_chain(idea_title)
    } else {
        question_chain.to_vec()
    };
    if !has_proof_question(&chain) {
        chain.push(PROOF_QUESTION.to_string());
    }

    AppliedFixes {
        title_angle: angle,
        hook,
        question_chain: chain,
    }
}

/// Packages and assessment after fixes, scored against the default
/// candidate titles with the fixed angle in the lead.
#[derive(Debug, Clone)]
pub struct Rescored {
    pub packages: Vec<ScoredPackage>,
    pub assessment: EmptyViewsAssessment,
}

/// Re-score the default candidates for `idea_title` using the fixed angle,
/// then re-assess the lead package with the fixed hook and chain.
#[must_use]
pub fn rescore_after_fixes(
    idea_title: &str,
    thumbnail_concept: &str,
    fixes: &AppliedFixes,
) -> Rescored {
    let packages = score_packaging(
        &default_package_titles(idea_title, &fixes.title_angle),
        &default_thumbnail_concepts(thumbnail_concept),
    );
    let assessment =
        assess_empty_views_risk(packages.first(), &fixes.hook, &fixes.question_chain);
    Rescored {
        packages,
        assessment,
    }
}
