//! Optional text-generation endpoint.

use serde::{Deserialize, Serialize};

const fn default_max_new_tokens() -> u32 {
    140
}

const fn default_temperature() -> f64 {
    0.85
}

const fn default_top_k() -> u32 {
    50
}

const fn default_timeout_secs() -> u64 {
    60
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GenerationConfig {
    /// Text-generation endpoint URL. Empty disables generation; every caller
    /// then uses its deterministic templates.
    #[serde(default)]
    pub endpoint: String,

    /// Optional bearer token for the endpoint.
    #[serde(default)]
    pub api_key: String,

    #[serde(default = "default_max_new_tokens")]
    pub max_new_tokens: u32,

    #[serde(default = "default_temperature")]
    pub temperature: f64,

    #[serde(default = "default_top_k")]
    pub top_k: u32,

    /// Per-request timeout. Generation is slow, so this is longer than intel.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            api_key: String::new(),
            max_new_tokens: default_max_new_tokens(),
            temperature: default_temperature(),
            top_k: default_top_k(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GenerationConfig {
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.endpoint.trim().is_empty()
    }
}
