use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Topic context gathered from the encyclopedia and related-word lookups.
///
/// Every field may be empty: lookups degrade instead of failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TopicIntel {
    pub topic_title: String,
    pub summary: String,
    pub related_terms: Vec<String>,
}

/// Public metadata of a published video.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VideoMeta {
    pub title: String,
    pub author_name: String,
    pub thumbnail_url: String,
}
