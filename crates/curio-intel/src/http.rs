//! Shared request helpers for the intel lookups.
//!
//! Status handling lives here (429 → [`IntelError::RateLimited`], other
//! non-success → [`IntelError::Api`]) together with JSON decoding, so the
//! per-service modules only build URLs and map payloads.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::IntelError;

const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Reject rate-limited and non-success responses.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, IntelError> {
    let status = resp.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(IntelError::RateLimited {
            retry_after_secs: retry_after(&resp),
        });
    }
    if !status.is_success() {
        return Err(IntelError::Api {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

/// Decode a successful response body, reporting shape mismatches as
/// [`IntelError::Parse`].
pub async fn decode_json<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, IntelError> {
    let body = check_response(resp).await?.text().await?;
    serde_json::from_str(&body).map_err(|e| IntelError::Parse(e.to_string()))
}

/// GET `url` and decode its JSON body.
pub async fn get_json<T: DeserializeOwned>(
    http: &reqwest::Client,
    url: &str,
) -> Result<T, IntelError> {
    debug!(url, "intel request");
    decode_json(http.get(url).send().await?).await
}

fn retry_after(resp: &reqwest::Response) -> u64 {
    resp.headers()
        .get(reqwest::header::RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}
