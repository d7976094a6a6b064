//! Snapshot storage configuration.

use serde::{Deserialize, Serialize};

fn default_data_dir() -> String {
    String::from(".curio/store")
}

/// Default number of snapshots kept by the local backend.
const fn default_retention() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Base URL of the JSON collection service. Empty disables the remote backend.
    #[serde(default)]
    pub remote_url: String,

    /// Optional bearer token sent to the collection service.
    #[serde(default)]
    pub api_key: String,

    /// Fixed collection ID. When set, no collection is ever created.
    #[serde(default)]
    pub collection_id: String,

    /// Directory of the local key/value store.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Maximum number of snapshots kept locally (newest first).
    #[serde(default = "default_retention")]
    pub retention: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            remote_url: String::new(),
            api_key: String::new(),
            collection_id: String::new(),
            data_dir: default_data_dir(),
            retention: default_retention(),
        }
    }
}

impl StorageConfig {
    /// Whether the remote backend should be attempted.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.remote_url.trim().is_empty()
    }

    /// Configured collection override, if any.
    #[must_use]
    pub fn collection_override(&self) -> Option<&str> {
        let id = self.collection_id.trim();
        if id.is_empty() { None } else { Some(id) }
    }
}
