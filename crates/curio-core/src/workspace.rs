//! The single workspace's transient state.
//!
//! This is the payload persisted by snapshots. Every field except the channel
//! and niche defaults when absent so payloads written by older versions still
//! load.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{
    CreativeBrief, IdeaCard, LearningInsight, PackagePerformanceLog, ScoredPackage, ShotPlanStep,
};

pub const DEFAULT_CHANNEL_ID: &str = "UC-demo-channel";
pub const DEFAULT_NICHE: &str = "productivity";
pub const DEFAULT_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";
pub const DEFAULT_DURATION_MIN: u32 = 8;
pub const MIN_DURATION_MIN: u32 = 3;
pub const MAX_DURATION_MIN: u32 = 60;
pub const UNTITLED: &str = "Untitled";

const fn default_duration() -> u32 {
    DEFAULT_DURATION_MIN
}

fn default_video_url() -> String {
    DEFAULT_VIDEO_URL.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceState {
    pub channel_id: String,
    pub niche: String,
    #[serde(default)]
    pub pre_title_angle: String,
    #[serde(default)]
    pub pre_thumbnail_concept: String,
    #[serde(default)]
    pub pre_first15s_hook: String,
    #[serde(default = "default_duration")]
    pub target_duration_min: u32,
    #[serde(default)]
    pub question_chain: Vec<String>,
    #[serde(default)]
    pub best_risk_score: Option<f64>,
    #[serde(default)]
    pub winning_package: Option<ScoredPackage>,
    #[serde(default)]
    pub ideas: Vec<IdeaCard>,
    #[serde(default)]
    pub selected_idea: Option<IdeaCard>,
    #[serde(default)]
    pub packages: Vec<ScoredPackage>,
    #[serde(default)]
    pub brief: Option<CreativeBrief>,
    #[serde(default)]
    pub insights: Vec<LearningInsight>,
    #[serde(default = "default_video_url")]
    pub video_url: String,
    #[serde(default)]
    pub hook_options: Vec<String>,
    #[serde(default)]
    pub selected_hook: String,
    #[serde(default)]
    pub script_draft: String,
    #[serde(default)]
    pub shot_plan: Vec<ShotPlanStep>,
    #[serde(default)]
    pub package_performance_log: Vec<PackagePerformanceLog>,
    #[serde(default)]
    pub topic_summary: String,
    #[serde(default)]
    pub related_terms: Vec<String>,
}

impl Default for WorkspaceState {
    fn default() -> Self {
        Self::new(DEFAULT_CHANNEL_ID, DEFAULT_NICHE)
    }
}

impl WorkspaceState {
    /// Empty workspace for a channel and niche.
    #[must_use]
    pub fn new(channel_id: &str, niche: &str) -> Self {
        Self {
            channel_id: channel_id.to_string(),
            niche: niche.to_string(),
            pre_title_angle: String::new(),
            pre_thumbnail_concept: String::new(),
            pre_first15s_hook: String::new(),
            target_duration_min: DEFAULT_DURATION_MIN,
            question_chain: Vec::new(),
            best_risk_score: None,
            winning_package: None,
            ideas: Vec::new(),
            selected_idea: None,
            packages: Vec::new(),
            brief: None,
            insights: Vec::new(),
            video_url: default_video_url(),
            hook_options: Vec::new(),
            selected_hook: String::new(),
            script_draft: String::new(),
            shot_plan: Vec::new(),
            package_performance_log: Vec::new(),
            topic_summary: String::new(),
            related_terms: Vec::new(),
        }
    }

    /// Title shown in snapshot listings: selected idea, else first idea.
    #[must_use]
    pub fn top_idea_title(&self) -> &str {
        self.selected_idea
            .as_ref()
            .or_else(|| self.ideas.first())
            .map_or(UNTITLED, |idea| idea.title.as_str())
    }

    /// Set the target duration, clamped to the supported range.
    pub fn set_target_duration(&mut self, minutes: u32) {
        self.target_duration_min = minutes.clamp(MIN_DURATION_MIN, MAX_DURATION_MIN);
    }

    /// Bring a loaded payload back inside the ranges the setters enforce.
    /// Payloads are deserialized verbatim from disk or the remote store.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        self.set_target_duration(self.target_duration_min);
        self
    }

    /// Replace the idea list, selecting the first idea and clearing every
    /// stage derived from the previous ideas.
    pub fn replace_ideas(&mut self, ideas: Vec<IdeaCard>) {
        self.selected_idea = ideas.first().cloned();
        self.ideas = ideas;
        self.packages.clear();
        self.brief = None;
        self.hook_options.clear();
        self.selected_hook.clear();
    }

    /// The package the risk assessor looks at: the first scored package.
    #[must_use]
    pub fn lead_package(&self) -> Option<&ScoredPackage> {
        self.packages.first()
    }

    /// Record `score` if it beats the best risk seen so far.
    pub fn record_risk(&mut self, score: f64) {
        if self.best_risk_score.is_none_or(|best| score < best) {
            self.best_risk_score = Some(score);
        }
    }
}
