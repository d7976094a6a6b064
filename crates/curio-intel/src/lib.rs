//! # curio-intel
//!
//! Read-only lookups that give the planner some outside context:
//! - Wikipedia (opensearch + REST page summary) for a topic summary
//! - Datamuse for related terms
//! - YouTube oEmbed for published-video metadata
//!
//! Public lookups never fail. Transport, status and parse errors are logged
//! with `tracing::warn!` and degrade to empty values, so a missing network
//! only makes the plan less specific.

pub mod datamuse;
pub mod oembed;
pub mod wikipedia;

mod error;
mod http;

pub use error::IntelError;

use std::time::Duration;

use curio_config::IntelConfig;
use curio_core::entities::TopicIntel;
use tracing::warn;

/// HTTP client for the topic and video intel services.
pub struct IntelClient {
    http: reqwest::Client,
    config: IntelConfig,
}

impl Default for IntelClient {
    fn default() -> Self {
        Self::new(IntelConfig::default())
    }
}

impl IntelClient {
    /// Create a client for the endpoints in `config`.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: IntelConfig) -> Self {
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("curio/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            config,
        }
    }

    #[must_use]
    pub const fn config(&self) -> &IntelConfig {
        &self.config
    }

    /// Summary and related terms for `topic`.
    ///
    /// The Wikipedia and Datamuse lookups run concurrently. A blank topic
    /// returns empty intel without any request.
    pub async fn fetch_topic_intel(&self, topic: &str) -> TopicIntel {
        let topic = topic.trim();
        if topic.is_empty() {
            return TopicIntel::default();
        }

        let (wiki, related) = tokio::join!(self.wikipedia_summary(topic), self.related_words(topic));

        let related_terms = related.unwrap_or_else(|e| {
            warn!(service = "datamuse", %e, "related-word lookup failed");
            Vec::new()
        });
        let topic_title = if wiki.title.is_empty() {
            topic.to_string()
        } else {
            wiki.title
        };

        TopicIntel {
            topic_title,
            summary: wiki.summary,
            related_terms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_topic_skips_lookups() {
        let config = IntelConfig {
            wikipedia_api_url: "http://127.0.0.1:9/w/api.php".into(),
            datamuse_url: "http://127.0.0.1:9".into(),
            ..IntelConfig::default()
        };
        let client = IntelClient::new(config);
        assert_eq!(client.fetch_topic_intel("   ").await, TopicIntel::default());
    }

    #[tokio::test]
    #[ignore] // requires network
    async fn live_topic_intel() {
        let client = IntelClient::default();
        let intel = client.fetch_topic_intel("productivity").await;
        println!("{intel:#?}");
        assert!(!intel.topic_title.is_empty());
    }
}
