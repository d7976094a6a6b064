//! Idea cards and the candidate titles/thumbnails derived from them.

use curio_core::entities::IdeaCard;
use curio_core::enums::{EstimatedEffort, NoveltyType};
use curio_core::ids::{PREFIX_IDEA, generate_id};

/// Number of cards produced by [`generate_idea_cards`].
pub const IDEA_COUNT: usize = 5;

const NICHE_SLOT: &str = "{niche}";

const TEMPLATES: [&str; IDEA_COUNT] = [
    "I Tried {niche} for 30 Days",
    "The Biggest Mistake in {niche} Nobody Talks About",
    "I Spent $500 Testing Viral {niche} Hacks",
    "Can You Master {niche} in 7 Days?",
    "I Copied the Top 1% in {niche} and Measured Results",
];

const FALLBACK_TERM: &str = "a practical system";
const TEMPLATE_PROMISE: &str = "Get practical shortcuts and avoid common waste.";
const TEMPLATE_GAP: &str = "What happens when proven advice meets real constraints?";

const TITLED_PROMISE: &str = "Practical, testable actions with measurable outcomes.";
const TITLED_GAP: &str = "What changes if proven advice is applied with strict constraints?";

pub const DEFAULT_THUMBNAIL_LEAD: &str = "Before/After split with timer";
const THUMBNAIL_ALTERNATIVES: [&str; 2] = [
    "Face reaction + one bold metric",
    "Mistake crossed out + simple fix arrow",
];

/// Related term for the card at `index`, cycling through `terms`.
fn term_at(terms: &[String], index: usize) -> Option<&str> {
    if terms.is_empty() {
        None
    } else {
        Some(terms[index % terms.len()].as_str())
    }
}

/// Generate the five templated idea cards for `niche`.
///
/// With related terms, each title names the niche as `"{niche} ({term})"`
/// using the term at `index mod len`.
#[must_use]
pub fn generate_idea_cards(niche: &str, related_terms: &[String]) -> Vec<IdeaCard> {
    TEMPLATES
        .iter()
        .enumerate()
        .map(|(index, template)| {
            let term = term_at(related_terms, index);
            let variant = term.map_or_else(|| niche.to_string(), |t| format!("{niche} ({t})"));
            IdeaCard {
                id: generate_id(PREFIX_IDEA),
                title: template.replacen(NICHE_SLOT, &variant, 1),
                core_audience: format!(
                    "{niche} beginners who want faster results with {}",
                    term.unwrap_or(FALLBACK_TERM)
                ),
                promise: TEMPLATE_PROMISE.to_string(),
                curiosity_gap: TEMPLATE_GAP.to_string(),
                novelty_type: NoveltyType::for_index(index),
                estimated_effort: EstimatedEffort::for_index(index),
            }
        })
        .collect()
}

/// Wrap externally generated titles in idea cards.
#[must_use]
pub fn idea_cards_from_titles(niche: &str, titles: &[String]) -> Vec<IdeaCard> {
    titles
        .iter()
        .enumerate()
        .map(|(index, title)| IdeaCard {
            id: generate_id(PREFIX_IDEA),
            title: title.clone(),
            core_audience: format!("{niche} creators who want repeatable growth"),
            promise: TITLED_PROMISE.to_string(),
            curiosity_gap: TITLED_GAP.to_string(),
            novelty_type: NoveltyType::for_index(index),
            estimated_effort: EstimatedEffort::for_index(index),
        })
        .collect()
}

/// The five candidate titles scored for an idea.
///
/// The first candidate is the user's title angle when one is set.
#[must_use]
pub fn default_package_titles(idea_title: &str, title_angle: &str) -> Vec<String> {
    let lead = title_angle.trim();
    let lead = if lead.is_empty() { idea_title } else { lead };
    vec![
        lead.to_string(),
        format!("{idea_title} (I tracked every result)"),
        format!("I tested if \"{idea_title}\" actually works"),
        format!("Most creators fail at this: {idea_title}"),
        format!("{idea_title} - what nobody tells beginners"),
    ]
}

/// The three thumbnail concepts paired with candidate titles.
#[must_use]
pub fn default_thumbnail_concepts(concept: &str) -> Vec<String> {
    let lead = concept.trim();
    let lead = if lead.is_empty() { DEFAULT_THUMBNAIL_LEAD } else { lead };
    std::iter::once(lead)
        .chain(THUMBNAIL_ALTERNATIVES)
        .map(str::to_string)
        .collect()
}
