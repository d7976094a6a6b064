//! Text generation backends.

use std::time::Duration;

use curio_config::GenerationConfig;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GenerateError;

/// Sampling parameters sent with each prompt.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplingOptions {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_k: u32,
}

impl SamplingOptions {
    /// Longer, slightly cooler sampling used for creative briefs.
    pub const BRIEF: Self = Self {
        max_new_tokens: 220,
        temperature: 0.8,
        top_k: 40,
    };

    #[must_use]
    pub const fn from_config(config: &GenerationConfig) -> Self {
        Self {
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
            top_k: config.top_k,
        }
    }
}

/// Anything that turns a prompt into text.
pub trait TextGenerator {
    /// Generate a completion for `prompt`.
    fn generate(
        &self,
        prompt: &str,
        options: SamplingOptions,
    ) -> impl Future<Output = Result<String, GenerateError>> + Send;
}

#[derive(Serialize)]
struct Parameters {
    #[serde(flatten)]
    sampling: SamplingOptions,
    do_sample: bool,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: Parameters,
}

#[derive(Deserialize)]
struct Generated {
    generated_text: String,
}

/// Accepted response shapes: `[{"generated_text": ..}]` or
/// `{"generated_text": ..}`.
#[derive(Deserialize)]
#[serde(untagged)]
enum GenerateResponse {
    Batch(Vec<Generated>),
    Single(Generated),
}

impl GenerateResponse {
    fn into_text(self) -> Option<String> {
        match self {
            Self::Batch(items) => items.into_iter().next().map(|g| g.generated_text),
            Self::Single(g) => Some(g.generated_text),
        }
    }
}

/// Extract the generated text from a response body.
///
/// # Errors
///
/// [`GenerateError::Parse`] for an unknown shape, [`GenerateError::Empty`]
/// for an empty batch or blank text.
pub fn parse_generated(body: &str) -> Result<String, GenerateError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| GenerateError::Parse(e.to_string()))?;
    response
        .into_text()
        .filter(|text| !text.trim().is_empty())
        .ok_or(GenerateError::Empty)
}

/// Text-generation-inference style HTTP endpoint.
pub struct HttpGenerator {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl HttpGenerator {
    /// Build a generator for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NotConfigured`] when no endpoint is set.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    pub fn from_config(config: &GenerationConfig) -> Result<Self, GenerateError> {
        if !config.is_configured() {
            return Err(GenerateError::NotConfigured);
        }
        let api_key = Some(config.api_key.trim().to_string()).filter(|k| !k.is_empty());
        Ok(Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("curio/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .expect("reqwest client should build"),
            endpoint: config.endpoint.trim().to_string(),
            api_key,
        })
    }
}

impl TextGenerator for HttpGenerator {
    async fn generate(&self, prompt: &str, options: SamplingOptions) -> Result<String, GenerateError> {
        let body = GenerateRequest {
            inputs: prompt,
            parameters: Parameters {
                sampling: options,
                do_sample: true,
            },
        };
        debug!(endpoint = %self.endpoint, max_new_tokens = options.max_new_tokens, "generate");

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }
        let response = request.send().await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(GenerateError::Api {
                status: status.as_u16(),
                message: text,
            });
        }
        parse_generated(&text)
    }
}
