//! # curio-config
//!
//! Layered configuration loading for Curio using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CURIO_*` prefix, `__` as separator)
//! 2. Project-level `.curio/config.toml`
//! 3. User-level `~/.config/curio/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CURIO_STORAGE__REMOTE_URL` -> `storage.remote_url`,
//! `CURIO_GENERATION__ENDPOINT` -> `generation.endpoint`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use curio_config::CurioConfig;
//!
//! let config = CurioConfig::load_with_dotenv().expect("config");
//!
//! if config.storage.is_configured() {
//!     println!("Remote store: {}", config.storage.remote_url);
//! }
//! ```

mod error;
mod general;
mod generation;
mod intel;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use generation::GenerationConfig;
pub use intel::IntelConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the per-project directory holding config, workspace state and
/// the local snapshot store.
pub const PROJECT_DIR: &str = ".curio";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct CurioConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub intel: IntelConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl CurioConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_in(Path::new("."))
    }

    /// Load configuration with the project config taken from `project_root`.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_in(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment_in(project_root).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain rooted at the current directory.
    #[must_use]
    pub fn figment() -> Figment {
        Self::figment_in(Path::new("."))
    }

    /// Build the figment provider chain with the project config looked up
    /// under `project_root`.
    #[must_use]
    pub fn figment_in(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = project_root.join(PROJECT_DIR).join("config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("CURIO_").split("__"))
    }

    /// Reject values no component can work with.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.retention == 0 {
            return Err(ConfigError::InvalidValue {
                field: "storage.retention".into(),
                reason: "must keep at least one snapshot".into(),
            });
        }
        let temperature = self.generation.temperature;
        if !(temperature > 0.0 && temperature <= 2.0) {
            return Err(ConfigError::InvalidValue {
                field: "generation.temperature".into(),
                reason: format!("{temperature} is outside (0, 2]"),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("curio").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_local_only() {
        let config = CurioConfig::default();
        assert!(!config.storage.is_configured());
        assert!(!config.generation.is_configured());
        assert_eq!(config.general.niche, "productivity");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_retention_is_rejected() {
        let mut config = CurioConfig::default();
        config.storage.retention = 0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("storage.retention"));
    }

    #[test]
    fn temperature_out_of_range_is_rejected() {
        let mut config = CurioConfig::default();
        config.generation.temperature = 0.0;
        assert!(config.validate().is_err());
        config.generation.temperature = 2.5;
        assert!(config.validate().is_err());
        config.generation.temperature = 2.0;
        assert!(config.validate().is_ok());
    }
}
