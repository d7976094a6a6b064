//! First-15-second hook options.

pub const DEFAULT_HOOK_AUDIENCE: &str = "creators who want faster growth";

/// Five templated hooks for an idea. A blank title reads as "this video"
/// and a blank audience falls back to [`DEFAULT_HOOK_AUDIENCE`].
#[must_use]
pub fn generate_hook_options(title: &str, audience: &str) -> Vec<String> {
    let title = match title.trim() {
        "" => "this video",
        t => t,
    };
    let audience = match audience.trim() {
        "" => DEFAULT_HOOK_AUDIENCE,
        a => a,
    };
    vec![
        format!("I used to waste weeks on {title} until this one change fixed it."),
        format!("If you are {audience}, this {title} framework can save your next upload."),
        format!("I tested {title} in real conditions and one result surprised me."),
        format!("Most people try {title} the wrong way. Here is what actually worked."),
        format!("Before you publish your next video, steal this {title} checklist first."),
    ]
}
