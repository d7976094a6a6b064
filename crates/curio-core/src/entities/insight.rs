use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A lesson learned from a published video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LearningInsight {
    pub id: String,
    pub lesson: String,
    /// Confidence in `[0, 1]`.
    pub confidence: f64,
    pub action_for_next_video: String,
}
