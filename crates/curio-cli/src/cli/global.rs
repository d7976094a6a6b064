use clap::ValueEnum;

/// How command results are printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    Json,
    /// Aligned text table.
    Table,
    /// Single-line JSON.
    Raw,
}

/// Flags accepted before or after any subcommand.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub format: OutputFormat,
    pub limit: Option<u32>,
    pub quiet: bool,
    pub verbose: bool,
    pub project: Option<String>,
}

impl GlobalFlags {
    /// Limit precedence: the command's own flag, then `--limit`, then `fallback`.
    #[must_use]
    pub fn limit_or(&self, local: Option<u32>, fallback: u32) -> usize {
        let limit = local.or(self.limit).unwrap_or(fallback);
        usize::try_from(limit).unwrap_or(usize::MAX)
    }
}
