//! Closed enums shared by the planning stages.
//!
//! Idea metadata enums serialize in lowercase (`"format"`, `"low"`) and the
//! risk label keeps its capitalized display form (`"High"`) so persisted
//! snapshots stay readable by older workspaces.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// NoveltyType
// ---------------------------------------------------------------------------

/// Which kind of novelty an idea leans on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum NoveltyType {
    Format,
    Angle,
    Collab,
    Challenge,
}

impl NoveltyType {
    /// Rotation order used when generating idea cards.
    pub const CYCLE: [Self; 4] = [Self::Format, Self::Angle, Self::Collab, Self::Challenge];

    /// Pick the variant for the idea at `index` (`index mod 4`).
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Format => "format",
            Self::Angle => "angle",
            Self::Collab => "collab",
            Self::Challenge => "challenge",
        }
    }
}

impl fmt::Display for NoveltyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EstimatedEffort
// ---------------------------------------------------------------------------

/// Rough production effort of an idea.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EstimatedEffort {
    Low,
    Medium,
    High,
}

impl EstimatedEffort {
    pub const CYCLE: [Self; 3] = [Self::Low, Self::Medium, Self::High];

    /// Pick the variant for the idea at `index` (`index mod 3`).
    #[must_use]
    pub const fn for_index(index: usize) -> Self {
        Self::CYCLE[index % Self::CYCLE.len()]
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl fmt::Display for EstimatedEffort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLabel
// ---------------------------------------------------------------------------

/// Bucketed empty-views risk.
///
/// ```text
/// score >= 7.5  → High
/// score >= 5.0  → Medium
/// otherwise     → Low
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RiskLabel {
    Low,
    Medium,
    High,
}

impl RiskLabel {
    pub const HIGH_THRESHOLD: f64 = 7.5;
    pub const MEDIUM_THRESHOLD: f64 = 5.0;

    /// Derive the label from a risk score. The label is never stored
    /// independently of the score it was computed from.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score >= Self::HIGH_THRESHOLD {
            Self::High
        } else if score >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StorageProvider
// ---------------------------------------------------------------------------

/// Which snapshot backend ultimately accepted a read or write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StorageProvider {
    Remote,
    Local,
}

impl StorageProvider {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Remote => "remote",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for StorageProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
