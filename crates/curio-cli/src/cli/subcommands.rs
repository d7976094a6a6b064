use clap::Subcommand;

/// Snapshot commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SnapshotCommands {
    /// Save the current workspace as a snapshot.
    Save,
    /// List saved snapshots, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Replace the current workspace with a saved snapshot.
    Restore { id: String },
}
