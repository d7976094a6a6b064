use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::ids::{PREFIX_SNAPSHOT, generate_id};
use crate::workspace::WorkspaceState;

/// Immutable saved copy of a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSnapshot {
    pub id: String,
    pub created_at: DateTime<Utc>,
    pub channel_id: String,
    pub niche: String,
    pub top_idea_title: String,
    pub payload: WorkspaceState,
}

impl WorkspaceSnapshot {
    /// Capture `payload` as a new snapshot stamped with the current time.
    #[must_use]
    pub fn capture(payload: WorkspaceState) -> Self {
        Self::capture_at(payload, Utc::now())
    }

    /// Capture `payload` with an explicit creation time.
    #[must_use]
    pub fn capture_at(payload: WorkspaceState, created_at: DateTime<Utc>) -> Self {
        Self {
            id: generate_id(PREFIX_SNAPSHOT),
            created_at,
            channel_id: payload.channel_id.clone(),
            niche: payload.niche.clone(),
            top_idea_title: payload.top_idea_title().to_string(),
            payload,
        }
    }
}
