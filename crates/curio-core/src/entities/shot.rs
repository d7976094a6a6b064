use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One step of a script-to-shot plan.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShotPlanStep {
    pub id: String,
    pub beat: String,
    pub objective: String,
    pub primary_shot: String,
    pub b_roll: String,
    pub on_screen_text: String,
    pub edit_note: String,
}
