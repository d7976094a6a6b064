//! Model-assisted drafting with deterministic fallbacks.
//!
//! Every method returns a usable value. Without a generator, or when the
//! generator fails or returns nothing usable, the planner's templates are
//! used instead and the result is tagged [`Origin::Template`].

use std::sync::LazyLock;

use curio_core::entities::CreativeBrief;
use curio_planner::{build_retention_checkpoints, generate_brief, generate_hook_options};
use regex::Regex;
use tracing::{debug, warn};

use crate::client::{SamplingOptions, TextGenerator};
use crate::error::GenerateError;
use crate::text::{
    MAX_CANDIDATE_CHARS, candidate_lines, clean_candidate, parse_lines, unique_strings,
};

/// Where a drafted value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    Model,
    Template,
}

/// A drafted value and its origin.
#[derive(Debug, Clone, PartialEq)]
pub struct Drafted<T> {
    pub value: T,
    pub origin: Origin,
}

impl<T> Drafted<T> {
    const fn model(value: T) -> Self {
        Self {
            value,
            origin: Origin::Model,
        }
    }

    const fn template(value: T) -> Self {
        Self {
            value,
            origin: Origin::Template,
        }
    }
}

pub const MAX_TITLES: usize = 8;
pub const MAX_HOOKS: usize = 5;
const MIN_TITLE_CHARS: usize = 10;
const MIN_HOOK_CHARS: usize = 20;
const MIN_SECTION_LINE_CHARS: usize = 8;

const FALLBACK_HOOKS: [&str; 3] = [
    "Open with end result first.",
    "State stakes in one line.",
    "Promise one specific payoff.",
];
const FALLBACK_BEATS: [&str; 4] = [
    "Set challenge and constraints",
    "Attempt one and friction",
    "Adjustment and retry",
    "Final result and takeaway",
];
const FALLBACK_VISUALS: [&str; 3] = [
    "Before/after visual",
    "Metric overlays",
    "Timeline progression graphics",
];
const FALLBACK_CTA: &str = "Primary CTA after final reveal.";

fn section(pattern: &str) -> Regex {
    Regex::new(&format!("(?is){pattern}")).expect("static section pattern")
}

static HOOKS_SECTION: LazyLock<Regex> =
    LazyLock::new(|| section(r"HOOKS:(.*?)(?:BEATS:|RETENTION:|VISUALS:|CTA:|$)"));
static BEATS_SECTION: LazyLock<Regex> =
    LazyLock::new(|| section(r"BEATS:(.*?)(?:RETENTION:|VISUALS:|CTA:|$)"));
static RETENTION_SECTION: LazyLock<Regex> =
    LazyLock::new(|| section(r"RETENTION:(.*?)(?:VISUALS:|CTA:|$)"));
static VISUALS_SECTION: LazyLock<Regex> =
    LazyLock::new(|| section(r"VISUALS:(.*?)(?:CTA:|$)"));
static CTA_SECTION: LazyLock<Regex> = LazyLock::new(|| section(r"CTA:(.*)$"));

fn capture<'a>(re: &Regex, raw: &'a str) -> &'a str {
    re.captures(raw)
        .and_then(|c| c.get(1))
        .map_or("", |m| m.as_str())
}

/// Titles used when no model output survives.
#[must_use]
pub fn default_titles(niche: &str) -> Vec<String> {
    vec![
        format!("I tested {niche} strategies for 30 days"),
        format!("The biggest {niche} mistake beginners keep making"),
        format!("Can you master {niche} in one week?"),
        format!("I copied top creators in {niche} and tracked results"),
        format!("What nobody tells you about {niche} growth"),
    ]
}

fn title_prompt(niche: &str) -> String {
    [
        "Generate 8 short YouTube title ideas.",
        &format!("Topic: {niche}"),
        "Return one title per line.",
        "No numbering.",
    ]
    .join("\n")
}

fn hook_prompt(title: &str) -> String {
    [
        "Write 5 first-15-second hooks for a YouTube video.",
        &format!("Video: {title}"),
        "Each hook names a specific problem and a promised result.",
        "Return one hook per line.",
    ]
    .join("\n")
}

fn brief_prompt(idea_title: &str, packaging: &str) -> String {
    [
        "Create a concise YouTube creative brief.",
        &format!("Idea: {idea_title}"),
        &format!("Packaging: {packaging}"),
        "Output sections with new lines:",
        "HOOKS:",
        "BEATS:",
        "RETENTION:",
        "VISUALS:",
        "CTA:",
    ]
    .join("\n")
}

fn shot_prompt(idea_title: &str) -> String {
    [
        "List 5 short script beats for a YouTube video.",
        &format!("Video: {idea_title}"),
        "One beat per line, in order.",
    ]
    .join("\n")
}

/// Split raw titles output: lines or `;`-separated, 10 to 90 characters.
#[must_use]
pub fn title_candidates(raw: &str) -> Vec<String> {
    raw.split(['\n', ';'])
        .map(clean_candidate)
        .filter(|t| (MIN_TITLE_CHARS..=MAX_CANDIDATE_CHARS).contains(&t.chars().count()))
        .collect()
}

/// Parse a sectioned brief. Each missing or empty section falls back to
/// fixed copy; `question_chain` and retention checkpoints for
/// `duration_min` fill the parts the model is not asked for.
#[must_use]
pub fn parse_brief(
    raw: &str,
    idea_title: &str,
    packaging: &str,
    duration_min: u32,
    question_chain: &[String],
) -> CreativeBrief {
    let mut hooks = parse_lines(capture(&HOOKS_SECTION, raw), MIN_SECTION_LINE_CHARS, &FALLBACK_HOOKS);
    hooks.truncate(4);
    let mut beats = parse_lines(capture(&BEATS_SECTION, raw), MIN_SECTION_LINE_CHARS, &FALLBACK_BEATS);
    beats.truncate(6);
    let mut retention = candidate_lines(capture(&RETENTION_SECTION, raw), MIN_SECTION_LINE_CHARS);
    if retention.is_empty() {
        retention = build_retention_checkpoints(duration_min);
    }
    retention.truncate(4);
    let mut visuals =
        parse_lines(capture(&VISUALS_SECTION, raw), MIN_SECTION_LINE_CHARS, &FALLBACK_VISUALS);
    visuals.truncate(4);
    let cta = match clean_candidate(capture(&CTA_SECTION, raw)) {
        c if c.is_empty() => FALLBACK_CTA.to_string(),
        c => c,
    };

    CreativeBrief {
        selected_idea_title: idea_title.to_string(),
        selected_packaging: packaging.to_string(),
        hooks,
        question_chain: question_chain.to_vec(),
        beat_outline: beats,
        retention_checkpoints: retention,
        visual_proof_prompts: visuals,
        cta_placement: cta,
    }
}

/// Drafts titles, hooks, briefs and script beats, with or without a model.
pub struct Assistant<G> {
    generator: Option<G>,
    sampling: SamplingOptions,
}

impl<G: TextGenerator> Assistant<G> {
    #[must_use]
    pub const fn new(generator: Option<G>, sampling: SamplingOptions) -> Self {
        Self {
            generator,
            sampling,
        }
    }

    #[must_use]
    pub const fn has_model(&self) -> bool {
        self.generator.is_some()
    }

    /// Run `prompt`, logging and swallowing failures.
    async fn complete(&self, task: &str, prompt: &str, options: SamplingOptions) -> Option<String> {
        let generator = self.generator.as_ref()?;
        match generator.generate(prompt, options).await {
            Ok(text) => Some(text),
            Err(GenerateError::Empty) => {
                debug!(task, "model returned nothing, using templates");
                None
            }
            Err(e) => {
                warn!(task, %e, "generation failed, using templates");
                None
            }
        }
    }

    /// Up to [`MAX_TITLES`] idea titles for `niche`, topped up with
    /// [`default_titles`].
    pub async fn idea_titles(&self, niche: &str) -> Drafted<Vec<String>> {
        let defaults = default_titles(niche);
        let Some(raw) = self.complete("titles", &title_prompt(niche), self.sampling).await else {
            return Drafted::template(defaults);
        };
        let candidates = title_candidates(&raw);
        if candidates.is_empty() {
            return Drafted::template(defaults);
        }
        let mut titles = unique_strings(candidates.into_iter().chain(defaults));
        titles.truncate(MAX_TITLES);
        Drafted::model(titles)
    }

    /// Up to [`MAX_HOOKS`] hooks for `title`, topped up with the templated
    /// hooks for `audience`.
    pub async fn hooks(&self, title: &str, audience: &str) -> Drafted<Vec<String>> {
        let templated = generate_hook_options(title, audience);
        let Some(raw) = self.complete("hooks", &hook_prompt(title), self.sampling).await else {
            return Drafted::template(templated);
        };
        let generated = candidate_lines(&raw, MIN_HOOK_CHARS);
        if generated.is_empty() {
            return Drafted::template(templated);
        }
        let mut hooks = unique_strings(generated.into_iter().chain(templated));
        hooks.truncate(MAX_HOOKS);
        Drafted::model(hooks)
    }

    /// Creative brief for the selected idea and packaging.
    pub async fn brief(
        &self,
        idea_title: &str,
        packaging: &str,
        duration_min: u32,
        question_chain: &[String],
    ) -> Drafted<CreativeBrief> {
        let prompt = brief_prompt(idea_title, packaging);
        match self.complete("brief", &prompt, SamplingOptions::BRIEF).await {
            Some(raw) => Drafted::model(parse_brief(
                &raw,
                idea_title,
                packaging,
                duration_min,
                question_chain,
            )),
            None => Drafted::template(generate_brief(
                idea_title,
                packaging,
                duration_min,
                question_chain,
            )),
        }
    }

    /// Script beats for the shot planner. Empty when no model output
    /// survives, which makes the planner use its own outline.
    pub async fn script_lines(&self, idea_title: &str) -> Drafted<Vec<String>> {
        let Some(raw) = self.complete("shots", &shot_prompt(idea_title), self.sampling).await else {
            return Drafted::template(Vec::new());
        };
        let lines = candidate_lines(&raw, MIN_SECTION_LINE_CHARS);
        if lines.is_empty() {
            Drafted::template(lines)
        } else {
            Drafted::model(lines)
        }
    }
}
