//! # curio-generate
//!
//! Optional model-assisted drafting. A text-generation endpoint, when
//! configured, drafts idea titles, hooks, briefs and script beats. Without
//! one, or whenever it fails, the deterministic planner templates are used.

pub mod assist;
pub mod client;
pub mod text;

mod error;

pub use assist::{Assistant, Drafted, Origin};
pub use client::{HttpGenerator, SamplingOptions, TextGenerator};
pub use error::GenerateError;

use curio_config::GenerationConfig;
use tracing::debug;

/// Assistant backed by the configured HTTP endpoint, or template-only when
/// none is configured.
#[must_use]
pub fn assistant_from_config(config: &GenerationConfig) -> Assistant<HttpGenerator> {
    let generator = match HttpGenerator::from_config(config) {
        Ok(generator) => Some(generator),
        Err(e) => {
            debug!(%e, "text generation disabled");
            None
        }
    };
    Assistant::new(generator, SamplingOptions::from_config(config))
}
