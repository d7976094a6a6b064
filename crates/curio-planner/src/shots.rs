//! Shot planner: turns script lines into annotated shot-plan steps.

use curio_core::entities::ShotPlanStep;
use curio_core::ids::{PREFIX_SHOT, generate_id};
use tracing::debug;

pub const MIN_STEPS: u32 = 4;
pub const MAX_STEPS: u32 = 7;

const FALLBACK_SCRIPT: [&str; 4] = [
    "State the problem and stakes in one sentence.",
    "Show the common mistake.",
    "Reveal your tested method.",
    "Present results and what to copy.",
];

/// Non-empty trimmed lines of a script.
#[must_use]
pub fn script_lines(script: &str) -> Vec<String> {
    script
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Step budget for a video: half the minutes, rounded, within
/// [`MIN_STEPS`]..=[`MAX_STEPS`].
#[must_use]
pub const fn max_steps(duration_min: u32) -> usize {
    // round(min / 2) with halves rounding up
    let half = duration_min.div_ceil(2);
    let clamped = if half < MIN_STEPS {
        MIN_STEPS
    } else if half > MAX_STEPS {
        MAX_STEPS
    } else {
        half
    };
    clamped as usize
}

/// Build the shot plan for `script`, falling back to a four-line outline
/// when the script has no content.
#[must_use]
pub fn generate_shot_plan(script: &str, duration_min: u32) -> Vec<ShotPlanStep> {
    let mut lines = script_lines(script);
    if lines.is_empty() {
        debug!("empty script, using fallback outline");
        lines = FALLBACK_SCRIPT.iter().map(|s| (*s).to_string()).collect();
    }

    lines
        .into_iter()
        .take(max_steps(duration_min))
        .enumerate()
        .map(|(index, objective)| {
            let first = index == 0;
            ShotPlanStep {
                id: generate_id(PREFIX_SHOT),
                beat: format!("Beat {}", index + 1),
                objective,
                primary_shot: if first {
                    "A-roll close framing with direct eye-line"
                } else {
                    "A-roll medium framing with movement"
                }
                .to_string(),
                b_roll: if index % 2 == 0 {
                    "Screen capture with highlighted metric"
                } else {
                    "Before/after visual cutaway"
                }
                .to_string(),
                on_screen_text: if first {
                    "The problem in 7 words".to_string()
                } else {
                    format!("Proof point {}", index + 1)
                },
                edit_note: if first {
                    "Open with jump-cut and no intro bumper"
                } else {
                    "Trim pauses and add pattern interrupt at midpoint"
                }
                .to_string(),
            }
        })
        .collect()
}
