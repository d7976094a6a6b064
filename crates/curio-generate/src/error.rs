//! Text generation error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// No generation endpoint is configured.
    #[error("text generation is not configured")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body did not contain generated text.
    #[error("parse error: {0}")]
    Parse(String),

    /// The model answered with nothing usable.
    #[error("model returned no usable text")]
    Empty,
}
