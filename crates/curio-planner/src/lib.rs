//! # curio-planner
//!
//! Deterministic planning heuristics for a single video workspace.
//!
//! Every function here is pure apart from fresh entity IDs: the same inputs
//! always produce the same titles, scores, risks and plans. Network lookups
//! and text generation live in `curio-intel` and `curio-generate`; their
//! results feed in as plain arguments.
//!
//! Stages, in the order a creator walks through them:
//! - [`ideas`]: templated idea cards and candidate titles/thumbnails
//! - [`hooks`]: first-15-second hook options
//! - [`packaging`]: title + thumbnail scoring
//! - [`risk`]: empty-views risk assessment
//! - [`fixes`]: one-click rewrite of angle, hook and question chain
//! - [`brief`] and [`shots`]: creative brief and shot plan
//! - [`learning`], [`performance`], [`export`]: after publishing

pub mod brief;
pub mod channel;
pub mod export;
pub mod fixes;
pub mod hooks;
pub mod ideas;
pub mod learning;
pub mod packaging;
pub mod performance;
pub mod risk;
pub mod shots;

mod patterns;

pub use brief::{build_question_chain, build_retention_checkpoints, generate_brief};
pub use channel::sync_channel;
pub use export::{current_assessment, export_markdown, next_video_recommendations};
pub use fixes::{AppliedFixes, Rescored, RiskDelta, apply_empty_views_fixes, rescore_after_fixes};
pub use hooks::generate_hook_options;
pub use ideas::{
    default_package_titles, default_thumbnail_concepts, generate_idea_cards,
    idea_cards_from_titles,
};
pub use learning::{ingest_learning, learning_note};
pub use packaging::{explain_package, score_packaging};
pub use performance::{log_performance, performance_entry, summarize_performance};
pub use risk::assess_empty_views_risk;
pub use shots::{generate_shot_plan, script_lines};
