//! # curio-store
//!
//! Durable home for workspace snapshots.
//!
//! Two [`SnapshotBackend`]s sit behind a [`FallbackChain`]:
//! - [`RemoteBackend`]: a JSON-collection HTTP service, tried first
//! - [`LocalBackend`]: a JSON file in the project's `.curio/store` directory
//!
//! The remote backend is optional. When it is unconfigured or failing, the
//! chain records the failed attempt, logs a warning, and serves the request
//! locally. Callers learn which backend answered from the `provider` tag.

pub mod backend;
pub mod error;
pub mod fallback;
pub mod local;
pub mod remote;

pub use backend::SnapshotBackend;
pub use error::StoreError;
pub use fallback::{Attempt, FallbackChain, ListResult, RestoreResult, SaveResult};
pub use local::{LocalBackend, LocalStore};
pub use remote::{CollectionIdCache, RemoteBackend};

use std::path::Path;

use curio_config::StorageConfig;

/// The production chain: remote first, local second.
pub type SnapshotStore = FallbackChain<RemoteBackend, LocalBackend>;

/// Open the snapshot store for a project. A relative `data_dir` is resolved
/// against `project_root`.
#[must_use]
pub fn open(config: &StorageConfig, project_root: &Path) -> SnapshotStore {
    let local = LocalStore::new(project_root.join(&config.data_dir));
    FallbackChain::new(
        RemoteBackend::new(config, local.clone()),
        LocalBackend::new(local, config.retention),
    )
}
