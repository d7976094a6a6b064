//! JSON-collection HTTP backend.
//!
//! The service stores opaque `{id, data}` entries inside collections:
//!
//! ```text
//! POST {base}/collections/                  -> collection id
//! POST {base}/collections/{id}/entries      <- {id, data}
//! GET  {base}/collections/{id}/             -> [{id, data}] | {"entries": [...]}
//! ```
//!
//! The collection is created lazily on first use and its id is cached in the
//! local store so later runs reuse it.

use std::time::Duration;

use curio_config::StorageConfig;
use curio_core::entities::WorkspaceSnapshot;
use curio_core::enums::StorageProvider;
use serde::Deserialize;
use serde_json::{Value, json};
use tokio::sync::OnceCell;
use tracing::{debug, warn};

use crate::backend::SnapshotBackend;
use crate::error::StoreError;
use crate::local::LocalStore;

/// Local store key caching the created collection id.
pub const COLLECTION_ID_KEY: &str = "curio.remote.collection_id";

const COLLECTION_NAME: &str = "curio-workspace-snapshots";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const ID_FIELDS: [&str; 3] = ["collection_id", "collectionId", "id"];

/// Resolves the collection id at most once per instance.
///
/// Order: configured override, then the id cached in the local store, then a
/// freshly created collection (which is cached for next time).
#[derive(Debug)]
pub struct CollectionIdCache {
    override_id: Option<String>,
    local: LocalStore,
    resolved: OnceCell<String>,
}

impl CollectionIdCache {
    #[must_use]
    pub fn new(override_id: Option<&str>, local: LocalStore) -> Self {
        Self {
            override_id: override_id.map(str::to_string),
            local,
            resolved: OnceCell::new(),
        }
    }

    /// The collection id, running `create` only when nothing is configured
    /// or cached.
    ///
    /// # Errors
    ///
    /// Returns the error from reading the cache or from `create`. A failed
    /// resolution is not memoized.
    pub async fn resolve<F>(&self, create: F) -> Result<&str, StoreError>
    where
        F: Future<Output = Result<String, StoreError>> + Send,
    {
        self.resolved
            .get_or_try_init(|| async {
                if let Some(id) = &self.override_id {
                    return Ok(id.clone());
                }
                if let Some(cached) = self.local.get(COLLECTION_ID_KEY).await?
                    && let Ok(id) = serde_json::from_str::<String>(&cached)
                    && !id.trim().is_empty()
                {
                    return Ok(id);
                }
                let id = create.await?;
                if let Err(error) = self
                    .local
                    .set(COLLECTION_ID_KEY, &serde_json::to_string(&id)?)
                    .await
                {
                    warn!(%error, "could not cache collection id");
                }
                Ok::<_, StoreError>(id)
            })
            .await
            .map(String::as_str)
    }
}

#[derive(Debug, Deserialize)]
struct RemoteEntry {
    #[serde(default)]
    id: Value,
    data: Value,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EntryListing {
    Bare(Vec<RemoteEntry>),
    Wrapped { entries: Vec<RemoteEntry> },
}

impl EntryListing {
    fn into_entries(self) -> Vec<RemoteEntry> {
        match self {
            Self::Bare(entries) | Self::Wrapped { entries } => entries,
        }
    }
}

/// Extract a collection id from a create-collection response.
///
/// Accepts `collection_id`, `collectionId` or `id`, at the top level or
/// under `data`.
///
/// # Errors
///
/// Returns [`StoreError::Parse`] for any other shape.
pub fn parse_collection_id(body: &Value) -> Result<String, StoreError> {
    let read = |v: &Value| {
        ID_FIELDS.iter().find_map(|field| match v.get(field)? {
            Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
    };
    read(body)
        .or_else(|| body.get("data").and_then(read))
        .ok_or_else(|| StoreError::Parse(format!("no collection id in response: {body}")))
}

/// Decode an entry listing into snapshots, newest first, at most `limit`.
///
/// Entries whose `data` is not a snapshot are skipped.
///
/// # Errors
///
/// Returns [`StoreError::Parse`] when the body is neither a bare array nor
/// an `entries` wrapper.
pub fn parse_entries(body: &str, limit: usize) -> Result<Vec<WorkspaceSnapshot>, StoreError> {
    let listing: EntryListing =
        serde_json::from_str(body).map_err(|e| StoreError::Parse(e.to_string()))?;
    let mut snapshots: Vec<WorkspaceSnapshot> = listing
        .into_entries()
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry.data) {
            Ok(snapshot) => Some(snapshot),
            Err(error) => {
                debug!(id = %entry.id, %error, "skipping entry that is not a snapshot");
                None
            }
        })
        .collect();
    snapshots.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    snapshots.truncate(limit);
    Ok(snapshots)
}

/// Snapshot backend talking to the JSON-collection service.
#[derive(Debug)]
pub struct RemoteBackend {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    collection: CollectionIdCache,
}

impl RemoteBackend {
    /// Build the backend from `config`. `local` caches the collection id.
    ///
    /// A blank `remote_url` yields a backend whose every call fails with
    /// [`StoreError::NotConfigured`].
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &StorageConfig, local: LocalStore) -> Self {
        let api_key = config.api_key.trim();
        Self {
            http: reqwest::Client::builder()
                .user_agent(concat!("curio/", env!("CARGO_PKG_VERSION")))
                .timeout(REQUEST_TIMEOUT)
                .build()
                .expect("reqwest client should build"),
            base_url: config.remote_url.trim().trim_end_matches('/').to_string(),
            api_key: (!api_key.is_empty()).then(|| api_key.to_string()),
            collection: CollectionIdCache::new(config.collection_override(), local),
        }
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    fn authorized(&self, req: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.api_key {
            Some(key) => req.bearer_auth(key),
            None => req,
        }
    }

    fn ensure_configured(&self) -> Result<(), StoreError> {
        if self.is_configured() {
            Ok(())
        } else {
            Err(StoreError::NotConfigured { backend: "remote" })
        }
    }

    async fn create_collection(&self) -> Result<String, StoreError> {
        let url = format!("{}/collections/", self.base_url);
        debug!(url, "creating snapshot collection");
        let resp = self
            .authorized(self.http.post(&url))
            .json(&json!({ "name": COLLECTION_NAME }))
            .send()
            .await?;
        let body = check_response(resp).await?.text().await?;
        let value: Value =
            serde_json::from_str(&body).map_err(|e| StoreError::Parse(e.to_string()))?;
        parse_collection_id(&value)
    }

    async fn collection_id(&self) -> Result<&str, StoreError> {
        self.collection.resolve(self.create_collection()).await
    }
}

impl SnapshotBackend for RemoteBackend {
    fn provider(&self) -> StorageProvider {
        StorageProvider::Remote
    }

    async fn save(&self, snapshot: &WorkspaceSnapshot) -> Result<(), StoreError> {
        self.ensure_configured()?;
        let collection = self.collection_id().await?;
        let url = format!("{}/collections/{collection}/entries", self.base_url);
        debug!(url, id = %snapshot.id, "saving snapshot");
        let resp = self
            .authorized(self.http.post(&url))
            .json(&json!({ "id": snapshot.id, "data": snapshot }))
            .send()
            .await?;
        check_response(resp).await?;
        Ok(())
    }

    async fn list(&self, limit: usize) -> Result<Vec<WorkspaceSnapshot>, StoreError> {
        self.ensure_configured()?;
        let collection = self.collection_id().await?;
        let url = format!("{}/collections/{collection}/", self.base_url);
        debug!(url, limit, "listing snapshots");
        let resp = self.authorized(self.http.get(&url)).send().await?;
        let body = check_response(resp).await?.text().await?;
        parse_entries(&body, limit)
    }
}

async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    Err(StoreError::Api {
        status: status.as_u16(),
        message: resp.text().await.unwrap_or_default(),
    })
}
