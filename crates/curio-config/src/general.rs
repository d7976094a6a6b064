//! General application configuration.

use serde::{Deserialize, Serialize};

fn default_channel_id() -> String {
    String::from("UC-demo-channel")
}

fn default_niche() -> String {
    String::from("productivity")
}

/// Default result limit.
const fn default_limit() -> u32 {
    10
}

const fn default_target_duration_min() -> u32 {
    8
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Channel used when a fresh workspace is created.
    #[serde(default = "default_channel_id")]
    pub channel_id: String,

    /// Niche used when a fresh workspace is created.
    #[serde(default = "default_niche")]
    pub niche: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Target video duration for fresh workspaces, in minutes.
    #[serde(default = "default_target_duration_min")]
    pub target_duration_min: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            channel_id: default_channel_id(),
            niche: default_niche(),
            default_limit: default_limit(),
            target_duration_min: default_target_duration_min(),
        }
    }
}
