//! Primary-then-secondary composition of two snapshot backends.
//!
//! Every call records one [`Attempt`] per backend it touched, so callers
//! (and tests) can see which path ran. Only a failure of both backends is
//! surfaced as an error.

use curio_core::CoreError;
use curio_core::entities::WorkspaceSnapshot;
use curio_core::enums::StorageProvider;
use curio_core::workspace::WorkspaceState;
use serde::Serialize;
use tracing::{debug, warn};

use crate::backend::SnapshotBackend;
use crate::error::StoreError;

/// One backend call made while serving a request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Attempt {
    pub provider: StorageProvider,
    /// `None` when the call succeeded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Attempt {
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SaveResult {
    pub provider: StorageProvider,
    pub snapshot: WorkspaceSnapshot,
    pub attempts: Vec<Attempt>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ListResult {
    pub provider: StorageProvider,
    pub snapshots: Vec<WorkspaceSnapshot>,
    pub attempts: Vec<Attempt>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RestoreResult {
    pub provider: StorageProvider,
    pub snapshot: WorkspaceSnapshot,
    pub attempts: Vec<Attempt>,
}

/// Record the outcome of `call` against `provider`.
async fn attempt<T>(
    provider: StorageProvider,
    call: impl Future<Output = Result<T, StoreError>>,
    attempts: &mut Vec<Attempt>,
) -> Option<T> {
    match call.await {
        Ok(value) => {
            debug!(%provider, "snapshot backend succeeded");
            attempts.push(Attempt { provider, error: None });
            Some(value)
        }
        Err(error) => {
            warn!(%provider, %error, "snapshot backend failed");
            attempts.push(Attempt {
                provider,
                error: Some(error.to_string()),
            });
            None
        }
    }
}

fn snapshot_not_found(id: &str) -> StoreError {
    CoreError::NotFound {
        entity_type: "snapshot".to_string(),
        id: id.to_string(),
    }
    .into()
}

/// Runs `primary`, and `secondary` only if the primary fails.
pub struct FallbackChain<P, S> {
    primary: P,
    secondary: S,
}

impl<P: SnapshotBackend, S: SnapshotBackend> FallbackChain<P, S> {
    #[must_use]
    pub const fn new(primary: P, secondary: S) -> Self {
        Self { primary, secondary }
    }

    #[must_use]
    pub const fn primary(&self) -> &P {
        &self.primary
    }

    #[must_use]
    pub const fn secondary(&self) -> &S {
        &self.secondary
    }

    /// Capture `payload` as a new snapshot and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AllBackendsFailed`] if neither backend accepts it.
    pub async fn save(&self, payload: WorkspaceState) -> Result<SaveResult, StoreError> {
        let snapshot = WorkspaceSnapshot::capture(payload);
        let mut attempts = Vec::new();

        let primary = self.primary.provider();
        if attempt(primary, self.primary.save(&snapshot), &mut attempts)
            .await
            .is_some()
        {
            return Ok(SaveResult {
                provider: primary,
                snapshot,
                attempts,
            });
        }

        let secondary = self.secondary.provider();
        if attempt(secondary, self.secondary.save(&snapshot), &mut attempts)
            .await
            .is_some()
        {
            return Ok(SaveResult {
                provider: secondary,
                snapshot,
                attempts,
            });
        }

        Err(StoreError::AllBackendsFailed { attempts })
    }

    /// Up to `limit` snapshots, newest first, from the first backend that
    /// answers.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AllBackendsFailed`] if neither backend answers.
    pub async fn list(&self, limit: usize) -> Result<ListResult, StoreError> {
        let mut attempts = Vec::new();

        let primary = self.primary.provider();
        if let Some(snapshots) = attempt(primary, self.primary.list(limit), &mut attempts).await {
            return Ok(ListResult {
                provider: primary,
                snapshots,
                attempts,
            });
        }

        let secondary = self.secondary.provider();
        if let Some(snapshots) =
            attempt(secondary, self.secondary.list(limit), &mut attempts).await
        {
            return Ok(ListResult {
                provider: secondary,
                snapshots,
                attempts,
            });
        }

        Err(StoreError::AllBackendsFailed { attempts })
    }

    /// Find snapshot `id`, looking in the primary listing first and then in
    /// the secondary one. A snapshot saved during a primary outage only
    /// exists in the secondary.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::NotFound`] when no backend listing contains `id`,
    /// or [`StoreError::AllBackendsFailed`] when no backend could be listed.
    pub async fn restore(&self, id: &str) -> Result<RestoreResult, StoreError> {
        let mut attempts = Vec::new();
        let find = |snapshots: Vec<WorkspaceSnapshot>| snapshots.into_iter().find(|s| s.id == id);

        let primary = self.primary.provider();
        let primary_listing = attempt(primary, self.primary.list(usize::MAX), &mut attempts).await;
        let primary_answered = primary_listing.is_some();
        if let Some(snapshot) = primary_listing.and_then(find) {
            return Ok(RestoreResult {
                provider: primary,
                snapshot,
                attempts,
            });
        }

        let secondary = self.secondary.provider();
        match attempt(secondary, self.secondary.list(usize::MAX), &mut attempts).await {
            Some(snapshots) => match find(snapshots) {
                Some(snapshot) => Ok(RestoreResult {
                    provider: secondary,
                    snapshot,
                    attempts,
                }),
                None => Err(snapshot_not_found(id)),
            },
            None if primary_answered => Err(snapshot_not_found(id)),
            None => Err(StoreError::AllBackendsFailed { attempts }),
        }
    }
}
