//! Topic and video intel endpoints.

use serde::{Deserialize, Serialize};

fn default_wikipedia_api_url() -> String {
    String::from("https://en.wikipedia.org/w/api.php")
}

fn default_wikipedia_rest_url() -> String {
    String::from("https://en.wikipedia.org/api/rest_v1")
}

fn default_datamuse_url() -> String {
    String::from("https://api.datamuse.com")
}

fn default_oembed_url() -> String {
    String::from("https://www.youtube.com/oembed")
}

const fn default_related_limit() -> usize {
    8
}

const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct IntelConfig {
    /// MediaWiki action API (opensearch).
    #[serde(default = "default_wikipedia_api_url")]
    pub wikipedia_api_url: String,

    /// Wikipedia REST API root (page summaries).
    #[serde(default = "default_wikipedia_rest_url")]
    pub wikipedia_rest_url: String,

    /// Datamuse API root.
    #[serde(default = "default_datamuse_url")]
    pub datamuse_url: String,

    /// oEmbed endpoint for video metadata.
    #[serde(default = "default_oembed_url")]
    pub oembed_url: String,

    /// Maximum number of related terms kept.
    #[serde(default = "default_related_limit")]
    pub related_limit: usize,

    /// Per-request timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for IntelConfig {
    fn default() -> Self {
        Self {
            wikipedia_api_url: default_wikipedia_api_url(),
            wikipedia_rest_url: default_wikipedia_rest_url(),
            datamuse_url: default_datamuse_url(),
            oembed_url: default_oembed_url(),
            related_limit: default_related_limit(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
