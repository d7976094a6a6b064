//! Keyword patterns shared by the scorer, the assessor and the fix applier.
//!
//! All patterns are case-insensitive and match anywhere in the text.

use std::sync::LazyLock;

use regex::Regex;

fn keywords(pattern: &str) -> Regex {
    // Patterns are compile-time literals; a failure here is a programming error.
    Regex::new(&format!("(?i){pattern}")).expect("static keyword pattern")
}

/// Outcome vocabulary that raises click potential.
pub static OUTCOME: LazyLock<Regex> = LazyLock::new(|| {
    keywords("results|tested|mistake|truth|secret|prove|challenge|failed|worked")
});

/// Explicit time promises.
pub static TIME_PROMISE: LazyLock<Regex> = LazyLock::new(|| keywords(r"30 days|7 days|in \d+"));

/// Payoff vocabulary that raises the "give more" score.
pub static PAYOFF: LazyLock<Regex> =
    LazyLock::new(|| keywords("tracked|measured|before|after|results"));

/// Words that open a curiosity gap.
pub static TENSION: LazyLock<Regex> = LazyLock::new(|| keywords("why|what|nobody|truth|secret"));

/// Proof vocabulary checked when flagging a title.
pub static PROOF_TITLE: LazyLock<Regex> =
    LazyLock::new(|| keywords("tested|results|measured|prove|challenge|before|after"));

/// Proof vocabulary checked in question chains.
pub static PROOF_QUESTION: LazyLock<Regex> = LazyLock::new(|| keywords("proof|result|measure|data"));

/// Proof vocabulary checked in a title angle before appending a payoff suffix.
pub static PROOF_ANGLE: LazyLock<Regex> =
    LazyLock::new(|| keywords("result|prove|measured|before|after|tracked"));

/// Assessment reasons that call for stronger payoff language.
pub static WEAK_PAYOFF_REASON: LazyLock<Regex> =
    LazyLock::new(|| keywords("weaker value payoff|value proof"));

/// Assessment reasons that call for a new hook.
pub static HOOK_REASON: LazyLock<Regex> =
    LazyLock::new(|| keywords("hook is too vague|slower value delivery"));

pub fn has_digit(text: &str) -> bool {
    text.chars().any(|c| c.is_ascii_digit())
}

/// Whether any question in `chain` carries proof vocabulary.
pub fn has_proof_question(chain: &[String]) -> bool {
    chain.iter().any(|q| PROOF_QUESTION.is_match(q))
}
