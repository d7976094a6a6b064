use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Creative brief for the selected idea. Rebuilt from scratch on every
/// generation; there is no partial update.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CreativeBrief {
    pub selected_idea_title: String,
    pub selected_packaging: String,
    pub hooks: Vec<String>,
    #[serde(default)]
    pub question_chain: Vec<String>,
    pub beat_outline: Vec<String>,
    pub retention_checkpoints: Vec<String>,
    pub visual_proof_prompts: Vec<String>,
    pub cta_placement: String,
}
