//! Title + thumbnail packaging scorer.
//!
//! Five sub-scores are positional (`base + (index + offset) mod range`) and
//! only exist to spread candidates apart; the remaining four read the title:
//!
//! ```text
//! clickPotential = 5 + 2·digit + 1·'?' + 2·outcome word      (≤ 10)
//! respectTime    = 5 + 3·(len ≤ 62) + 2·time promise         (≤ 10)
//! giveMore       = 4 + 4·payoff word + 2·digit               (≤ 10)
//! curiosityGap   = 5 + 3·'?' + 2·tension word                (≤ 10)
//! ```

use curio_core::entities::{PackageScore, ScoredPackage};

use crate::patterns::{OUTCOME, PAYOFF, PROOF_TITLE, TENSION, TIME_PROMISE, has_digit};

/// At most this many titles are scored.
pub const MAX_PACKAGES: usize = 5;

/// Titles longer than this (in characters) are slow to read.
pub const MAX_TITLE_CHARS: usize = 62;

pub const FALLBACK_THUMBNAIL: &str = "Face reaction + bold visual delta";

pub const RATIONALE: &str =
    "Scored against click intent, time respect, and clear value payoff to reduce empty-view risk.";

pub const FLAG_TOO_LONG: &str = "Title may be too long for fast decision clicks";
pub const FLAG_WEAK_CURIOSITY: &str = "Curiosity gap may be weak";
pub const FLAG_UNCLEAR_PROOF: &str = "Value proof may be unclear";
pub const FLAG_LOW_RISK: &str = "Low obvious risk in packaging";

/// Sub-scores are small by construction; the casts below cannot truncate.
#[allow(clippy::cast_possible_truncation)]
const fn cycle(base: usize, index: usize, offset: usize, range: usize) -> u8 {
    (base + (index + offset) % range) as u8
}

const fn bonus(hit: bool, points: u8) -> u8 {
    if hit { points } else { 0 }
}

fn score_title(index: usize, title: &str) -> PackageScore {
    let digit = has_digit(title);
    let question = title.contains('?');
    let outcome = OUTCOME.is_match(title);
    let short_enough = title.chars().count() <= MAX_TITLE_CHARS;

    PackageScore::new(
        cycle(6, index, 0, 4),
        cycle(7, index, 1, 3),
        cycle(5, index, 0, 5),
        cycle(6, index, 2, 4),
        cycle(5, index, 1, 5),
        5 + bonus(digit, 2) + bonus(question, 1) + bonus(outcome, 2),
        5 + bonus(short_enough, 3) + bonus(TIME_PROMISE.is_match(title), 2),
        4 + bonus(PAYOFF.is_match(title), 4) + bonus(digit, 2),
        5 + bonus(question, 3) + bonus(TENSION.is_match(title), 2),
    )
}

fn risk_flags(title: &str) -> Vec<String> {
    let mut flags = Vec::new();
    if title.chars().count() > MAX_TITLE_CHARS {
        flags.push(FLAG_TOO_LONG);
    }
    if !title.contains('?') && !OUTCOME.is_match(title) {
        flags.push(FLAG_WEAK_CURIOSITY);
    }
    if !PROOF_TITLE.is_match(title) {
        flags.push(FLAG_UNCLEAR_PROOF);
    }
    if flags.is_empty() {
        flags.push(FLAG_LOW_RISK);
    }
    flags.into_iter().map(str::to_string).collect()
}

/// Score up to [`MAX_PACKAGES`] titles, pairing each with
/// `concepts[index mod concepts.len()]`.
#[must_use]
pub fn score_packaging(titles: &[String], concepts: &[String]) -> Vec<ScoredPackage> {
    titles
        .iter()
        .take(MAX_PACKAGES)
        .enumerate()
        .map(|(index, title)| ScoredPackage {
            title: title.clone(),
            thumbnail_concept: if concepts.is_empty() {
                FALLBACK_THUMBNAIL.to_string()
            } else {
                concepts[index % concepts.len()].clone()
            },
            score: score_title(index, title),
            rationale: RATIONALE.to_string(),
            risk_flags: risk_flags(title),
        })
        .collect()
}

/// Short phrases describing why a package could win.
#[must_use]
pub fn explain_package(package: &ScoredPackage) -> Vec<&'static str> {
    let score = &package.score;
    let mut reasons = Vec::new();
    if score.click_potential >= 8 {
        reasons.push("strong click intent");
    }
    if score.respect_time >= 8 {
        reasons.push("clear time promise");
    }
    if score.give_more >= 8 {
        reasons.push("high proof/value signal");
    }
    if score.curiosity_gap >= 8 {
        reasons.push("good curiosity tension");
    }
    if reasons.is_empty() {
        reasons.push("balanced fundamentals");
    }
    reasons
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn titles(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn short_plain_title() {
        let packages = score_packaging(&titles(&["Short Title"]), &titles(&["Concept A"]));
        assert_eq!(packages.len(), 1);
        let p = &packages[0];
        assert_eq!(p.score.click_potential, 5);
        assert_eq!(p.score.respect_time, 8);
        assert_eq!(p.score.give_more, 4);
        assert_eq!(p.score.curiosity_gap, 5);
        assert_eq!(p.thumbnail_concept, "Concept A");
        assert_eq!(p.risk_flags, titles(&[FLAG_WEAK_CURIOSITY, FLAG_UNCLEAR_PROOF]));
        assert!((p.score.total() - 6.1).abs() < f64::EPSILON);
    }

    #[test]
    fn positional_scores_follow_index() {
        let packages = score_packaging(&titles(&["a", "b", "c", "d", "e"]), &[]);
        let clarity: Vec<u8> = packages.iter().map(|p| p.score.clarity).collect();
        let curiosity: Vec<u8> = packages.iter().map(|p| p.score.curiosity).collect();
        let audience: Vec<u8> = packages.iter().map(|p| p.score.audience_fit).collect();
        let novelty: Vec<u8> = packages.iter().map(|p| p.score.novelty).collect();
        assert_eq!(clarity, vec![6, 7, 8, 9, 6]);
        assert_eq!(curiosity, vec![8, 9, 7, 8, 9]);
        assert_eq!(audience, vec![8, 9, 6, 7, 8]);
        assert_eq!(novelty, vec![6, 7, 8, 9, 5]);
    }

    #[test]
    fn at_most_five_packages() {
        let many = titles(&["1", "2", "3", "4", "5", "6", "7"]);
        assert_eq!(score_packaging(&many, &[]).len(), MAX_PACKAGES);
        assert!(score_packaging(&[], &[]).is_empty());
    }

    #[test]
    fn totals_match_sub_score_mean() {
        let input = titles(&[
            "I Tried productivity for 30 Days",
            "Why nobody talks about this secret?",
            "I tested 5 tools and tracked results",
            "A deliberately long title that keeps going well past what anyone reads",
        ]);
        for package in score_packaging(&input, &[]) {
            assert!((package.score.total() - package.score.mean()).abs() <= 0.05);
            assert!(!package.risk_flags.is_empty());
        }
    }

    #[test]
    fn concepts_cycle_and_default() {
        let packages = score_packaging(&titles(&["a", "b", "c"]), &titles(&["x", "y"]));
        let concepts: Vec<&str> = packages.iter().map(|p| p.thumbnail_concept.as_str()).collect();
        assert_eq!(concepts, vec!["x", "y", "x"]);

        let packages = score_packaging(&titles(&["a"]), &[]);
        assert_eq!(packages[0].thumbnail_concept, FALLBACK_THUMBNAIL);
    }

    #[rstest]
    #[case("I tested 5 tools?", 10)]
    #[case("Fix it in 7 Days", 7)]
    #[case("Plain", 5)]
    #[case("The truth", 7)]
    fn click_potential(#[case] title: &str, #[case] expected: u8) {
        let packages = score_packaging(&[title.to_string()], &[]);
        assert_eq!(packages[0].score.click_potential, expected);
    }

    #[rstest]
    #[case("Learn chess in 30 minutes", 10)]
    #[case("Learn chess", 8)]
    #[case("An extremely long title about chess openings that nobody will finish", 5)]
    fn respect_time(#[case] title: &str, #[case] expected: u8) {
        let packages = score_packaging(&[title.to_string()], &[]);
        assert_eq!(packages[0].score.respect_time, expected);
    }

    #[test]
    fn long_title_is_flagged_first() {
        let long = format!("I tested {}", "x".repeat(60));
        let packages = score_packaging(&[long], &[]);
        assert_eq!(packages[0].risk_flags, titles(&[FLAG_TOO_LONG]));
    }

    #[test]
    fn proof_title_has_low_risk_flag() {
        let packages = score_packaging(&titles(&["I tested it for 7 days"]), &[]);
        assert_eq!(packages[0].risk_flags, titles(&[FLAG_LOW_RISK]));
    }

    #[test]
    fn length_counts_characters() {
        // 62 multi-byte characters still fit.
        let title = "é".repeat(62);
        let packages = score_packaging(&[title], &[]);
        assert_eq!(packages[0].score.respect_time, 8);
    }

    #[test]
    fn explain_strong_package() {
        let packages = score_packaging(&titles(&["Why I tested 3 tricks and tracked results?"]), &[]);
        assert_eq!(
            explain_package(&packages[0]),
            vec![
                "strong click intent",
                "clear time promise",
                "high proof/value signal",
                "good curiosity tension",
            ]
        );
    }

    #[test]
    fn explain_plain_package() {
        let mut packages = score_packaging(&titles(&["x".repeat(70).as_str()]), &[]);
        let package = packages.remove(0);
        assert_eq!(explain_package(&package), vec!["balanced fundamentals"]);
    }
}
