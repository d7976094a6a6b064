//! Logged package performance and its averages.

use chrono::{DateTime, Utc};
use curio_core::entities::{PackagePerformanceLog, PerformanceSummary, ScoredPackage};
use curio_core::ids::{PREFIX_PERFORMANCE, generate_id};
use curio_core::numeric::round_to;

/// Newest entries kept in a workspace's performance log.
pub const PERFORMANCE_LOG_CAP: usize = 20;

fn clamp_percent(value: f64) -> f64 {
    if value.is_nan() { 0.0 } else { value.clamp(0.0, 100.0) }
}

/// A log entry for `package` shown with `hook`. Percentages are clamped to
/// `[0, 100]`.
#[must_use]
pub fn performance_entry(
    package: &ScoredPackage,
    hook: &str,
    ctr_percent: f64,
    retention30s_percent: f64,
    created_at: DateTime<Utc>,
) -> PackagePerformanceLog {
    PackagePerformanceLog {
        id: generate_id(PREFIX_PERFORMANCE),
        package_title: package.title.clone(),
        thumbnail_concept: package.thumbnail_concept.clone(),
        selected_hook: hook.to_string(),
        ctr_percent: clamp_percent(ctr_percent),
        retention30s_percent: clamp_percent(retention30s_percent),
        created_at,
    }
}

/// Prepend `entry`, dropping the oldest entries past [`PERFORMANCE_LOG_CAP`].
pub fn log_performance(log: &mut Vec<PackagePerformanceLog>, entry: PackagePerformanceLog) {
    log.insert(0, entry);
    log.truncate(PERFORMANCE_LOG_CAP);
}

/// Average CTR and retention across `log`, or `None` when it is empty.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize_performance(log: &[PackagePerformanceLog]) -> Option<PerformanceSummary> {
    if log.is_empty() {
        return None;
    }
    let count = log.len() as f64;
    let total_ctr: f64 = log.iter().map(|e| e.ctr_percent).sum();
    let total_retention: f64 = log.iter().map(|e| e.retention30s_percent).sum();
    Some(PerformanceSummary {
        avg_ctr: round_to(total_ctr / count, 2),
        avg_retention: round_to(total_retention / count, 2),
        entries: log.len(),
    })
}
