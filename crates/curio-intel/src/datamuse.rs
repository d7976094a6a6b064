//! Datamuse related-word lookup.

use serde::Deserialize;

use crate::{IntelClient, error::IntelError, http::get_json};

#[derive(Debug, Deserialize)]
struct DatamuseWord {
    #[serde(default)]
    word: String,
}

fn collect_words(words: Vec<DatamuseWord>, limit: usize) -> Vec<String> {
    words
        .into_iter()
        .map(|w| w.word)
        .filter(|w| !w.trim().is_empty())
        .take(limit)
        .collect()
}

impl IntelClient {
    /// Words with a meaning like `topic`, best match first.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError`] if the request fails, the service returns a
    /// non-success status, or the body is not a word list.
    pub async fn related_words(&self, topic: &str) -> Result<Vec<String>, IntelError> {
        let limit = self.config.related_limit;
        let url = format!(
            "{}/words?ml={}&max={limit}",
            self.config.datamuse_url.trim_end_matches('/'),
            urlencoding::encode(topic)
        );
        let words: Vec<DatamuseWord> = get_json(&self.http, &url).await?;
        Ok(collect_words(words, limit))
    }
}
