use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::RiskLabel;
use crate::numeric::round_to;

/// Heuristic likelihood that a video underperforms ("empty views").
///
/// `reasons` and `fixes` are index aligned: `fixes[i]` addresses `reasons[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct EmptyViewsAssessment {
    pub risk_score: f64,
    pub risk_label: RiskLabel,
    pub reasons: Vec<String>,
    pub fixes: Vec<String>,
}

impl EmptyViewsAssessment {
    /// Build an assessment from a raw risk value and its reason/fix pairs.
    ///
    /// The score is clamped to `[0, 10]` and rounded to one decimal before
    /// the label is derived from it.
    #[must_use]
    pub fn from_pairs(raw_risk: f64, pairs: Vec<(String, String)>) -> Self {
        let risk_score = round_to(raw_risk.clamp(0.0, 10.0), 1);
        let (reasons, fixes) = pairs.into_iter().unzip();
        Self {
            risk_score,
            risk_label: RiskLabel::from_score(risk_score),
            reasons,
            fixes,
        }
    }

    /// Whether any reason matches `predicate`.
    pub fn any_reason(&self, predicate: impl Fn(&str) -> bool) -> bool {
        self.reasons.iter().any(|r| predicate(r))
    }
}
