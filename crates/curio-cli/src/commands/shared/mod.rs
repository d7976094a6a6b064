//! Guards and helpers shared by the command handlers.

use curio_core::CoreError;
use curio_core::entities::{IdeaCard, ScoredPackage};
use curio_core::workspace::WorkspaceState;
use curio_generate::Origin;

/// Convert a 1-based position into an index into `items`.
pub fn position<T>(items: &[T], position: usize, what: &str) -> Result<usize, CoreError> {
    if items.is_empty() {
        return Err(CoreError::Validation(format!("There are no {what}s yet.")));
    }
    if position == 0 || position > items.len() {
        return Err(CoreError::Validation(format!(
            "No {what} at position {position}; choose 1-{}.",
            items.len()
        )));
    }
    Ok(position - 1)
}

pub fn require_idea(state: &WorkspaceState) -> Result<&IdeaCard, CoreError> {
    state.selected_idea.as_ref().ok_or_else(|| {
        CoreError::Validation("Select an idea first (curio ideas, then curio select N).".into())
    })
}

pub fn require_lead_package(state: &WorkspaceState) -> Result<&ScoredPackage, CoreError> {
    state
        .lead_package()
        .ok_or_else(|| CoreError::Validation("Score packaging first (curio package).".into()))
}

#[must_use]
pub const fn origin_label(origin: Origin) -> &'static str {
    match origin {
        Origin::Model => "model",
        Origin::Template => "template",
    }
}

/// Log once when `--ai` was asked for but no endpoint is configured.
pub fn warn_if_no_model(has_model: bool) {
    if !has_model {
        tracing::warn!(
            "no text-generation endpoint configured (generation.endpoint); using templates"
        );
    }
}
