//! Wikipedia topic summary: opensearch for the best title, then the REST
//! page summary for its extract.

use serde::Deserialize;
use tracing::warn;

use crate::{IntelClient, error::IntelError, http::get_json};

/// `[query, titles, descriptions, links]`
#[derive(Debug, Deserialize)]
struct OpenSearchResponse(
    #[allow(dead_code)] String,
    Vec<String>,
    #[serde(default)] Vec<String>,
    #[serde(default)] Vec<String>,
);

#[derive(Debug, Deserialize)]
struct PageSummary {
    #[serde(default)]
    extract: Option<String>,
}

/// Best matching title and its description, if opensearch found one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchHit {
    pub title: String,
    pub description: String,
}

/// Resolved title and summary. Either may be empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WikiSummary {
    pub title: String,
    pub summary: String,
}

impl OpenSearchResponse {
    fn first_hit(self) -> Option<SearchHit> {
        let Self(_, titles, descriptions, _) = self;
        let title = titles.into_iter().next()?;
        Some(SearchHit {
            title,
            description: descriptions.into_iter().next().unwrap_or_default(),
        })
    }
}

impl IntelClient {
    /// Top opensearch hit for `topic`.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError`] if the request fails, the service returns a
    /// non-success status, or the body is not an opensearch array.
    pub async fn search_wikipedia(&self, topic: &str) -> Result<Option<SearchHit>, IntelError> {
        let url = format!(
            "{}?action=opensearch&search={}&limit=1&namespace=0&format=json",
            self.config.wikipedia_api_url,
            urlencoding::encode(topic)
        );
        let data: OpenSearchResponse = get_json(&self.http, &url).await?;
        Ok(data.first_hit())
    }

    /// Plain-text extract of the page titled `title`.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError`] if the request fails, the page does not exist,
    /// or the body cannot be parsed.
    pub async fn page_summary(&self, title: &str) -> Result<Option<String>, IntelError> {
        let url = format!(
            "{}/page/summary/{}",
            self.config.wikipedia_rest_url.trim_end_matches('/'),
            urlencoding::encode(title)
        );
        let data: PageSummary = get_json(&self.http, &url).await?;
        Ok(data.extract.filter(|e| !e.is_empty()))
    }

    /// Resolve `topic` to a title and summary.
    ///
    /// A failed search yields `(topic, "")`. A failed or empty page summary
    /// falls back to the opensearch description.
    pub async fn wikipedia_summary(&self, topic: &str) -> WikiSummary {
        let hit = match self.search_wikipedia(topic).await {
            Ok(hit) => hit,
            Err(e) => {
                warn!(service = "wikipedia", %e, "opensearch failed");
                return WikiSummary {
                    title: topic.to_string(),
                    summary: String::new(),
                };
            }
        };
        let SearchHit { title, description } = hit.unwrap_or_else(|| SearchHit {
            title: topic.to_string(),
            description: String::new(),
        });

        let summary = match self.page_summary(&title).await {
            Ok(Some(extract)) => extract,
            Ok(None) => description,
            Err(e) => {
                warn!(service = "wikipedia", %e, title, "page summary failed");
                description
            }
        };
        WikiSummary { title, summary }
    }
}
