use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{EstimatedEffort, NoveltyType};

/// A candidate video idea. Later stages refer to it by `title` only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct IdeaCard {
    pub id: String,
    pub title: String,
    pub core_audience: String,
    pub promise: String,
    pub curiosity_gap: String,
    pub novelty_type: NoveltyType,
    pub estimated_effort: EstimatedEffort,
}
