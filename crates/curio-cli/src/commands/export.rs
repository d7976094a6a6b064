use anyhow::Context;
use curio_planner::export_markdown;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExportArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExportResponse {
    path: String,
    bytes: usize,
}

/// Handle `curio export`. Prints the Markdown itself unless `--output` is
/// given, in which case the file is written and its path reported.
pub fn handle(args: &ExportArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let markdown = export_markdown(&ctx.state);
    let Some(path) = &args.output else {
        print!("{markdown}");
        return Ok(());
    };

    std::fs::write(path, &markdown)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "plan exported");
    output(
        &ExportResponse {
            path: path.display().to_string(),
            bytes: markdown.len(),
        },
        flags.format,
    )
}
