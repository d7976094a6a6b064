use chrono::{DateTime, Utc};
use curio_core::CoreError;
use curio_core::entities::{PackagePerformanceLog, PerformanceSummary};
use curio_core::workspace::WorkspaceState;
use curio_planner::{log_performance, performance_entry, summarize_performance};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::PerfArgs;
use crate::commands::shared::position;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PerfResponse {
    logged: PackagePerformanceLog,
    summary: Option<PerformanceSummary>,
}

/// Handle `curio perf`.
pub fn handle(args: &PerfArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let logged = apply(
        &mut ctx.state,
        args.package.unwrap_or(1),
        args.ctr,
        args.retention,
        Utc::now(),
    )?;
    ctx.persist()?;
    output(
        &PerfResponse {
            logged,
            summary: summarize_performance(&ctx.state.package_performance_log),
        },
        flags.format,
    )
}

fn apply(
    state: &mut WorkspaceState,
    package: usize,
    ctr: f64,
    retention: f64,
    now: DateTime<Utc>,
) -> Result<PackagePerformanceLog, CoreError> {
    if state.selected_hook.trim().is_empty() {
        return Err(CoreError::Validation(
            "Pick a hook first (curio hooks, then curio hook-pick N).".into(),
        ));
    }
    let package = &state.packages[position(&state.packages, package, "package")?];
    let entry = performance_entry(package, &state.selected_hook, ctr, retention, now);
    log_performance(&mut state.package_performance_log, entry.clone());
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use curio_planner::score_packaging;
    use pretty_assertions::assert_eq;

    use super::*;

    fn ready() -> WorkspaceState {
        let mut state = WorkspaceState::default();
        state.packages = score_packaging(
            &["First".to_string(), "Second".to_string()],
            &["Concept A".to_string()],
        );
        state.selected_hook = "Most people quit on day three.".into();
        state
    }

    #[test]
    fn logs_the_chosen_package_newest_first() {
        let mut state = ready();
        apply(&mut state, 1, 4.0, 50.0, Utc::now()).expect("first log");
        let entry = apply(&mut state, 2, 6.0, 60.0, Utc::now()).expect("second log");

        assert_eq!(entry.package_title, "Second");
        assert_eq!(state.package_performance_log[0], entry);
        let summary = summarize_performance(&state.package_performance_log).expect("two entries");
        assert_eq!(summary.entries, 2);
        assert!((summary.avg_ctr - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn percentages_are_clamped() {
        let mut state = ready();
        let entry = apply(&mut state, 1, 140.0, -3.0, Utc::now()).expect("log");
        assert!((entry.ctr_percent - 100.0).abs() < f64::EPSILON);
        assert!(entry.retention30s_percent.abs() < f64::EPSILON);
    }

    #[rstest::rstest]
    #[case::no_hook(true, 1)]
    #[case::bad_position(false, 3)]
    fn invalid_input_is_rejected(#[case] clear_hook: bool, #[case] package: usize) {
        let mut state = ready();
        if clear_hook {
            state.selected_hook.clear();
        }
        assert!(apply(&mut state, package, 5.0, 50.0, Utc::now()).is_err());
        assert!(state.package_performance_log.is_empty());
    }
}
