//! Cleanup of raw model output into candidate lines.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Longest candidate kept, in characters.
pub const MAX_CANDIDATE_CHARS: usize = 90;

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));
static LIST_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\d\-.)\s]+").expect("static list-marker pattern"));

/// Collapse whitespace, strip a leading list marker (`1.`, `-`, `2)`) and
/// cap the result at [`MAX_CANDIDATE_CHARS`].
#[must_use]
pub fn clean_candidate(text: &str) -> String {
    let collapsed = WHITESPACE.replace_all(text, " ");
    let stripped = LIST_MARKER.replace(&collapsed, "");
    stripped.trim().chars().take(MAX_CANDIDATE_CHARS).collect()
}

/// Trimmed, non-empty values with case-insensitive duplicates removed,
/// keeping first occurrences.
#[must_use]
pub fn unique_strings<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for value in values {
        let cleaned = value.as_ref().trim();
        if cleaned.is_empty() || !seen.insert(cleaned.to_lowercase()) {
            continue;
        }
        out.push(cleaned.to_string());
    }
    out
}

/// Cleaned, de-duplicated lines of at least `min_chars` characters.
#[must_use]
pub fn candidate_lines(raw: &str, min_chars: usize) -> Vec<String> {
    unique_strings(
        raw.lines()
            .map(clean_candidate)
            .filter(|line| line.chars().count() >= min_chars),
    )
}

/// Lines of `raw`, or `fallback` when none survive cleaning.
#[must_use]
pub fn parse_lines(raw: &str, min_chars: usize, fallback: &[&str]) -> Vec<String> {
    let lines = candidate_lines(raw, min_chars);
    if lines.is_empty() {
        fallback.iter().map(|s| (*s).to_string()).collect()
    } else {
        lines
    }
}
