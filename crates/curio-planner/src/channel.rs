//! Channel sync placeholder.

use curio_core::CoreError;

pub const MIN_CHANNEL_ID_CHARS: usize = 3;

/// Validate a channel ID and return the placeholder sync message.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the trimmed ID is shorter than
/// [`MIN_CHANNEL_ID_CHARS`].
pub fn sync_channel(channel_id: &str) -> Result<String, CoreError> {
    if channel_id.trim().chars().count() < MIN_CHANNEL_ID_CHARS {
        return Err(CoreError::Validation("Channel ID looks too short.".into()));
    }
    Ok(format!(
        "Connected channel placeholder: {channel_id}. Analytics sync requires backend OAuth."
    ))
}
