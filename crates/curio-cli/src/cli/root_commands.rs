use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::SnapshotCommands;

/// Top-level command tree. Commands follow the planning order: ideas,
/// angle, hooks, packaging, risk, brief, shots, then post-publish learning.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Validate a channel ID and record it on the workspace.
    Sync(SyncArgs),
    /// Generate idea cards for a niche.
    Ideas(IdeasArgs),
    /// Select an idea by its 1-based position.
    Select(IndexArgs),
    /// Set the pre-production title angle, thumbnail, hook or duration.
    Angle(AngleArgs),
    /// Build the question chain for the selected idea.
    Chain,
    /// Generate hook options for the selected idea.
    Hooks(AiArgs),
    /// Pick a hook by its 1-based position.
    HookPick(IndexArgs),
    /// Score the default packaging candidates.
    Package,
    /// Assess empty-views risk for the lead package.
    Risk,
    /// Apply the risk fixes and re-score.
    Fix,
    /// Save the lead package as the winning package.
    Win,
    /// Generate the creative brief.
    Brief(AiArgs),
    /// Generate the shot plan.
    Shots(ShotsArgs),
    /// Ingest learnings from a published video.
    Learn(LearnArgs),
    /// Log CTR and retention for a package.
    Perf(PerfArgs),
    /// Workspace snapshots.
    Snapshot {
        #[command(subcommand)]
        action: SnapshotCommands,
    },
    /// Export the plan as Markdown.
    Export(ExportArgs),
    /// Show the current workspace.
    Show,
}

#[derive(Clone, Debug, Args)]
pub struct SyncArgs {
    /// Channel ID (defaults to the workspace's channel).
    #[arg(long)]
    pub channel_id: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct IdeasArgs {
    /// Niche to plan for (defaults to the workspace's niche).
    #[arg(long)]
    pub niche: Option<String>,
    /// Draft titles with the configured text-generation endpoint.
    #[arg(long)]
    pub ai: bool,
}

#[derive(Clone, Debug, Args)]
pub struct IndexArgs {
    /// 1-based position in the list shown by `curio show`.
    pub index: usize,
}

#[derive(Clone, Debug, Args)]
pub struct AngleArgs {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub thumbnail: Option<String>,
    /// First 15-second hook.
    #[arg(long)]
    pub hook: Option<String>,
    /// Target duration in minutes (clamped to 3..=60).
    #[arg(long)]
    pub duration: Option<u32>,
}

#[derive(Clone, Debug, Args)]
pub struct AiArgs {
    /// Draft with the configured text-generation endpoint.
    #[arg(long)]
    pub ai: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ShotsArgs {
    /// Script file, one beat per line. Replaces the saved script draft.
    #[arg(long)]
    pub script: Option<PathBuf>,
    /// Draft script beats with the configured text-generation endpoint.
    #[arg(long)]
    pub ai: bool,
}

#[derive(Clone, Debug, Args)]
pub struct LearnArgs {
    /// Published video URL (defaults to the workspace's video URL).
    #[arg(long)]
    pub video_url: Option<String>,
    /// Your own note about how the video did.
    #[arg(long)]
    pub note: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PerfArgs {
    /// Click-through rate, percent.
    #[arg(long)]
    pub ctr: f64,
    /// Audience retention at 30 seconds, percent.
    #[arg(long)]
    pub retention: f64,
    /// 1-based package position (defaults to the lead package).
    #[arg(long)]
    pub package: Option<usize>,
}

#[derive(Clone, Debug, Args)]
pub struct ExportArgs {
    /// Write the Markdown to a file instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
}
