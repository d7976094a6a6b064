//! The seam between the fallback chain and the concrete stores.

use curio_core::entities::WorkspaceSnapshot;
use curio_core::enums::StorageProvider;

use crate::error::StoreError;

/// A place snapshots can be written to and listed from.
pub trait SnapshotBackend: Send + Sync {
    /// Tag reported to callers when this backend serves a request.
    fn provider(&self) -> StorageProvider;

    /// Persist `snapshot`.
    fn save(
        &self,
        snapshot: &WorkspaceSnapshot,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;

    /// Up to `limit` snapshots, newest first.
    fn list(
        &self,
        limit: usize,
    ) -> impl Future<Output = Result<Vec<WorkspaceSnapshot>, StoreError>> + Send;
}
