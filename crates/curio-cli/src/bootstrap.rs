use std::path::Path;

use anyhow::Context;
use curio_config::CurioConfig;

/// Load `.env` (project first, then the usual lookup) and the layered config.
pub fn load_config(project_root: &Path) -> anyhow::Result<CurioConfig> {
    load_project_dotenv(project_root)?;
    CurioConfig::load_in(project_root).context("failed to load curio configuration")
}

fn load_project_dotenv(project_root: &Path) -> anyhow::Result<()> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
        return Ok(());
    }

    dotenvy::dotenv().ok();
    Ok(())
}
