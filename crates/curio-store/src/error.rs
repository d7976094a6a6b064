//! Snapshot store error types.

use curio_core::CoreError;
use thiserror::Error;

use crate::fallback::Attempt;

#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error talking to the collection service.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The collection service returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// A response body did not have any of the accepted shapes.
    #[error("parse error: {0}")]
    Parse(String),

    /// Reading or writing the local key/value directory failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// The backend has no endpoint configured.
    #[error("{backend} backend is not configured")]
    NotConfigured { backend: &'static str },

    /// Every backend in the chain failed. Carries the attempt log.
    #[error("all snapshot backends failed: {}", describe(.attempts))]
    AllBackendsFailed { attempts: Vec<Attempt> },

    #[error(transparent)]
    Core(#[from] CoreError),
}

fn describe(attempts: &[Attempt]) -> String {
    attempts
        .iter()
        .map(|a| format!("{}: {}", a.provider, a.error.as_deref().unwrap_or("ok")))
        .collect::<Vec<_>>()
        .join("; ")
}
