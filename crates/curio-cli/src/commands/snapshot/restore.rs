use curio_core::enums::StorageProvider;
use curio_store::Attempt;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RestoreResponse {
    id: String,
    provider: StorageProvider,
    niche: String,
    top_idea_title: String,
    attempts: Vec<Attempt>,
}

/// Replace the current workspace with the snapshot's payload.
pub async fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let restored = ctx.store.restore(id.trim()).await?;
    let snapshot = restored.snapshot;

    ctx.state = snapshot.payload.normalize();
    ctx.persist()?;
    tracing::info!(id = %snapshot.id, provider = %restored.provider, "workspace restored");

    output(
        &RestoreResponse {
            id: snapshot.id,
            provider: restored.provider,
            niche: snapshot.niche,
            top_idea_title: snapshot.top_idea_title,
            attempts: restored.attempts,
        },
        flags.format,
    )
}

#[cfg(test)]
mod tests {
    use curio_core::entities::WorkspaceSnapshot;
    use curio_planner::build_retention_checkpoints;
    use pretty_assertions::assert_eq;

    #[test]
    fn out_of_range_payload_is_clamped_before_use() {
        let json = r#"{
            "id": "snp-0a1b2c3d",
            "createdAt": "2026-01-05T10:00:00Z",
            "channelId": "UC-x",
            "niche": "chess",
            "topIdeaTitle": "Untitled",
            "payload": {"channelId": "UC-x", "niche": "chess", "targetDurationMin": 30000000}
        }"#;
        let snapshot: WorkspaceSnapshot = serde_json::from_str(json).expect("snapshot parses");

        let state = snapshot.payload.normalize();

        assert_eq!(state.target_duration_min, 60);
        assert_eq!(
            build_retention_checkpoints(state.target_duration_min)[3],
            "At 45:00: final escalation"
        );
    }
}
