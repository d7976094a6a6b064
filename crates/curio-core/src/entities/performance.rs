use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// User-entered outcome of a published title/thumbnail/hook combination.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PackagePerformanceLog {
    pub id: String,
    pub package_title: String,
    pub thumbnail_concept: String,
    pub selected_hook: String,
    /// Click-through rate, clamped to `[0, 100]`.
    pub ctr_percent: f64,
    /// Share of viewers still watching at 30 seconds, clamped to `[0, 100]`.
    pub retention30s_percent: f64,
    pub created_at: DateTime<Utc>,
}

/// Averages across a performance log, rounded to two decimals.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSummary {
    pub avg_ctr: f64,
    pub avg_retention: f64,
    pub entries: usize,
}
