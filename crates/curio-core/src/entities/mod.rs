//! Value types for every planning stage.
//!
//! All structs serialize with camelCase field names, the shape persisted in
//! workspace snapshots, and derive `JsonSchema` for payload validation.

mod assessment;
mod brief;
mod idea;
mod insight;
mod intel;
mod package;
mod performance;
mod shot;
mod snapshot;

pub use assessment::EmptyViewsAssessment;
pub use brief::CreativeBrief;
pub use idea::IdeaCard;
pub use insight::LearningInsight;
pub use intel::{TopicIntel, VideoMeta};
pub use package::{PackageScore, ScoredPackage};
pub use performance::{PackagePerformanceLog, PerformanceSummary};
pub use shot::ShotPlanStep;
pub use snapshot::WorkspaceSnapshot;
