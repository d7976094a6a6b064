use std::path::{Path, PathBuf};

use anyhow::Context;
use curio_config::{CurioConfig, PROJECT_DIR};
use curio_core::workspace::WorkspaceState;
use curio_generate::{Assistant, HttpGenerator, assistant_from_config};
use curio_intel::IntelClient;
use curio_store::SnapshotStore;

/// Current workspace state, relative to the project directory.
pub const STATE_FILE: &str = "workspace.json";

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: CurioConfig,
    pub project_root: PathBuf,
    pub state: WorkspaceState,
    pub intel: IntelClient,
    pub assistant: Assistant<HttpGenerator>,
    pub store: SnapshotStore,
}

impl AppContext {
    /// Load the workspace for `project_root`, or start a fresh one from the
    /// `general` config section.
    pub fn init(project_root: PathBuf, config: CurioConfig) -> anyhow::Result<Self> {
        let state = match read_state(&state_path(&project_root))? {
            Some(state) => state,
            None => fresh_state(&config),
        };

        Ok(Self {
            intel: IntelClient::new(config.intel.clone()),
            assistant: assistant_from_config(&config.generation),
            store: curio_store::open(&config.storage, &project_root),
            config,
            project_root,
            state,
        })
    }

    #[must_use]
    pub fn state_path(&self) -> PathBuf {
        state_path(&self.project_root)
    }

    /// Write the current state back to `.curio/workspace.json`.
    pub fn persist(&self) -> anyhow::Result<()> {
        write_state(&self.state_path(), &self.state)
    }
}

fn state_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_DIR).join(STATE_FILE)
}

fn fresh_state(config: &CurioConfig) -> WorkspaceState {
    let mut state = WorkspaceState::new(&config.general.channel_id, &config.general.niche);
    state.set_target_duration(config.general.target_duration_min);
    state
}

fn read_state(path: &Path) -> anyhow::Result<Option<WorkspaceState>> {
    if !path.exists() {
        return Ok(None);
    }
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let state: WorkspaceState = serde_json::from_str(&raw)
        .with_context(|| format!("workspace file {} is not valid", path.display()))?;
    Ok(Some(state.normalize()))
}

fn write_state(path: &Path, state: &WorkspaceState) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
    }
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, serde_json::to_string_pretty(state)?)
        .with_context(|| format!("failed to write {}", tmp.display()))?;
    std::fs::rename(&tmp, path)
        .with_context(|| format!("failed to replace {}", path.display()))?;
    tracing::debug!(path = %path.display(), "workspace saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn fresh_workspace_uses_general_config() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut config = CurioConfig::default();
        config.general.niche = "chess".into();
        config.general.target_duration_min = 90;

        let ctx = AppContext::init(temp.path().to_path_buf(), config).expect("init should work");
        assert_eq!(ctx.state.niche, "chess");
        assert_eq!(ctx.state.target_duration_min, 60);
        assert!(!ctx.state_path().exists());
    }

    #[test]
    fn persisted_state_is_reloaded() {
        let temp = TempDir::new().expect("tempdir should create");
        let mut ctx = AppContext::init(temp.path().to_path_buf(), CurioConfig::default())
            .expect("init should work");
        ctx.state.pre_first15s_hook = "Most people quit on day three.".into();
        ctx.persist().expect("persist should work");

        let reloaded = AppContext::init(temp.path().to_path_buf(), CurioConfig::default())
            .expect("init should work");
        assert_eq!(reloaded.state, ctx.state);
    }

    #[test]
    fn stored_duration_is_clamped_on_load() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir_all(temp.path().join(".curio")).expect("dir should create");
        std::fs::write(
            temp.path().join(".curio/workspace.json"),
            r#"{"channelId": "UC-x", "niche": "chess", "targetDurationMin": 30000000}"#,
        )
        .expect("write");

        let ctx = AppContext::init(temp.path().to_path_buf(), CurioConfig::default())
            .expect("init should work");
        assert_eq!(ctx.state.target_duration_min, 60);
    }

    #[test]
    fn corrupt_state_is_an_error() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir_all(temp.path().join(".curio")).expect("dir should create");
        std::fs::write(temp.path().join(".curio/workspace.json"), "{oops").expect("write");

        let result = AppContext::init(temp.path().to_path_buf(), CurioConfig::default());
        assert!(result.is_err());
    }
}
