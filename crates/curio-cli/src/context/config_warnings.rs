use curio_config::CurioConfig;

/// Emit warnings for likely mistyped env var keys that silently fell back to defaults.
pub fn warn_unconfigured(config: &CurioConfig) {
    for warning in collect_unconfigured_warnings(config, std::env::vars()) {
        tracing::warn!("{warning}");
    }
}

fn collect_unconfigured_warnings<I>(config: &CurioConfig, env: I) -> Vec<String>
where
    I: IntoIterator<Item = (String, String)>,
{
    let env_keys = env.into_iter().map(|(key, _)| key).collect::<Vec<_>>();

    let mut warnings = Vec::new();

    if !config.storage.is_configured() && has_env_prefix(&env_keys, "CURIO_STORAGE_") {
        warnings.push(
            "Remote storage appears unconfigured while CURIO_STORAGE_* env vars exist. Use double underscores (example: CURIO_STORAGE__REMOTE_URL)."
                .to_string(),
        );
    }

    if !config.generation.is_configured() && has_env_prefix(&env_keys, "CURIO_GENERATION_") {
        warnings.push(
            "Text generation appears unconfigured while CURIO_GENERATION_* env vars exist. Use double underscores (example: CURIO_GENERATION__ENDPOINT)."
                .to_string(),
        );
    }

    warnings
}

/// Single-underscore keys only; `CURIO_STORAGE__X` is the correct form.
fn has_env_prefix(keys: &[String], prefix: &str) -> bool {
    keys.iter()
        .any(|key| key.starts_with(prefix) && !key[prefix.len()..].starts_with('_'))
}
