use chrono::{DateTime, Utc};
use curio_core::entities::WorkspaceSnapshot;
use curio_core::enums::StorageProvider;
use curio_store::Attempt;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// A snapshot without its payload.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SnapshotRow {
    id: String,
    created_at: DateTime<Utc>,
    channel_id: String,
    niche: String,
    top_idea_title: String,
}

impl From<WorkspaceSnapshot> for SnapshotRow {
    fn from(snapshot: WorkspaceSnapshot) -> Self {
        Self {
            id: snapshot.id,
            created_at: snapshot.created_at,
            channel_id: snapshot.channel_id,
            niche: snapshot.niche,
            top_idea_title: snapshot.top_idea_title,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    provider: StorageProvider,
    snapshots: Vec<SnapshotRow>,
    attempts: Vec<Attempt>,
}

pub async fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = flags.limit_or(limit, ctx.config.general.default_limit);
    let listed = ctx.store.list(limit).await?;

    output(
        &ListResponse {
            provider: listed.provider,
            snapshots: listed.snapshots.into_iter().map(SnapshotRow::from).collect(),
            attempts: listed.attempts,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use curio_core::workspace::WorkspaceState;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn rows_drop_the_payload() {
        let snapshot = WorkspaceSnapshot::capture(WorkspaceState::new("UC-1", "chess"));
        let id = snapshot.id.clone();

        let row = serde_json::to_value(SnapshotRow::from(snapshot)).expect("row serializes");

        assert_eq!(row["id"], id.as_str());
        assert_eq!(row["niche"], "chess");
        assert_eq!(row["topIdeaTitle"], "Untitled");
        assert!(row.get("payload").is_none());
    }
}
