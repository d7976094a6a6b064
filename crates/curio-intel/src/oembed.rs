//! oEmbed metadata for a published video.

use curio_core::entities::VideoMeta;
use serde::Deserialize;
use tracing::warn;

use crate::{IntelClient, error::IntelError, http::get_json};

#[derive(Debug, Deserialize)]
struct OEmbedResponse {
    title: String,
    #[serde(default)]
    author_name: String,
    #[serde(default)]
    thumbnail_url: String,
}

impl From<OEmbedResponse> for VideoMeta {
    fn from(r: OEmbedResponse) -> Self {
        Self {
            title: r.title,
            author_name: r.author_name,
            thumbnail_url: r.thumbnail_url,
        }
    }
}

impl IntelClient {
    /// oEmbed lookup for `video_url`.
    ///
    /// # Errors
    ///
    /// Returns [`IntelError`] if the request fails, the video is unknown or
    /// private, or the body cannot be parsed.
    pub async fn video_meta(&self, video_url: &str) -> Result<VideoMeta, IntelError> {
        let url = format!(
            "{}?url={}&format=json",
            self.config.oembed_url,
            urlencoding::encode(video_url)
        );
        let data: OEmbedResponse = get_json(&self.http, &url).await?;
        Ok(data.into())
    }

    /// Metadata for `video_url`, or `None` if it cannot be fetched.
    pub async fn fetch_video_meta(&self, video_url: &str) -> Option<VideoMeta> {
        let video_url = video_url.trim();
        if video_url.is_empty() {
            return None;
        }
        self.video_meta(video_url)
            .await
            .inspect_err(|e| warn!(service = "oembed", %e, video_url, "video lookup failed"))
            .ok()
    }
}
