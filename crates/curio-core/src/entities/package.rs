use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};

use crate::numeric::round_to;

/// Multi-factor packaging score.
///
/// `total` is the mean of the nine sub-scores rounded to one decimal. It has
/// no setter and is recomputed on deserialization, so it can never drift
/// from the sub-scores it summarizes.
#[derive(Debug, Clone, Serialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackageScore {
    pub clarity: u8,
    pub curiosity: u8,
    pub specificity: u8,
    pub audience_fit: u8,
    pub novelty: u8,
    pub click_potential: u8,
    pub respect_time: u8,
    pub give_more: u8,
    pub curiosity_gap: u8,
    total: f64,
}

impl PackageScore {
    pub const SUB_SCORE_COUNT: usize = 9;

    /// Build a score from its sub-scores. Each sub-score is capped at 10.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        clarity: u8,
        curiosity: u8,
        specificity: u8,
        audience_fit: u8,
        novelty: u8,
        click_potential: u8,
        respect_time: u8,
        give_more: u8,
        curiosity_gap: u8,
    ) -> Self {
        let mut score = Self {
            clarity: clarity.min(10),
            curiosity: curiosity.min(10),
            specificity: specificity.min(10),
            audience_fit: audience_fit.min(10),
            novelty: novelty.min(10),
            click_potential: click_potential.min(10),
            respect_time: respect_time.min(10),
            give_more: give_more.min(10),
            curiosity_gap: curiosity_gap.min(10),
            total: 0.0,
        };
        score.total = round_to(score.mean(), 1);
        score
    }

    /// Sub-scores in declaration order.
    #[must_use]
    pub const fn sub_scores(&self) -> [u8; Self::SUB_SCORE_COUNT] {
        [
            self.clarity,
            self.curiosity,
            self.specificity,
            self.audience_fit,
            self.novelty,
            self.click_potential,
            self.respect_time,
            self.give_more,
            self.curiosity_gap,
        ]
    }

    /// Unrounded mean of the sub-scores.
    #[must_use]
    pub fn mean(&self) -> f64 {
        let sum: u32 = self.sub_scores().iter().map(|s| u32::from(*s)).sum();
        f64::from(sum) / 9.0
    }

    #[must_use]
    pub const fn total(&self) -> f64 {
        self.total
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct PackageScoreFields {
    clarity: u8,
    curiosity: u8,
    specificity: u8,
    audience_fit: u8,
    novelty: u8,
    click_potential: u8,
    respect_time: u8,
    give_more: u8,
    curiosity_gap: u8,
}

impl<'de> Deserialize<'de> for PackageScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let f = PackageScoreFields::deserialize(deserializer)?;
        Ok(Self::new(
            f.clarity,
            f.curiosity,
            f.specificity,
            f.audience_fit,
            f.novelty,
            f.click_potential,
            f.respect_time,
            f.give_more,
            f.curiosity_gap,
        ))
    }
}

/// A title + thumbnail concept pair with its score and risk flags.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScoredPackage {
    pub title: String,
    pub thumbnail_concept: String,
    pub score: PackageScore,
    pub rationale: String,
    /// Ordered, never empty.
    pub risk_flags: Vec<String>,
}

impl ScoredPackage {
    /// Key identifying a title/thumbnail pairing.
    #[must_use]
    pub fn pair_key(&self) -> String {
        format!("{}__{}", self.title, self.thumbnail_concept)
    }
}
