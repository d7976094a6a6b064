//! Post-publish learnings.

use curio_core::entities::{LearningInsight, VideoMeta};
use curio_core::ids::{PREFIX_INSIGHT, generate_id};

const DEFAULT_OBSERVATION: &str = "Hook was stronger than expected, middle section lagged.";

/// Creator note for an ingested video, naming it when metadata is known.
#[must_use]
pub fn learning_note(meta: Option<&VideoMeta>) -> String {
    match meta {
        Some(meta) => format!(
            "Video: \"{}\" by {}. {DEFAULT_OBSERVATION}",
            meta.title, meta.author_name
        ),
        None => DEFAULT_OBSERVATION.to_string(),
    }
}

/// Two insights from a published video: a fixed framing lesson and the
/// creator's own note.
#[must_use]
pub fn ingest_learning(video_url: &str, note: Option<&str>) -> Vec<LearningInsight> {
    let note = note.map(str::trim).filter(|n| !n.is_empty());
    vec![
        LearningInsight {
            id: generate_id(PREFIX_INSIGHT),
            lesson: format!("Early framing around stakes improved click intent for {video_url}."),
            confidence: 0.72,
            action_for_next_video: "Lead with specific downside before introducing method."
                .to_string(),
        },
        LearningInsight {
            id: generate_id(PREFIX_INSIGHT),
            lesson: note.map_or_else(
                || "No creator note provided.".to_string(),
                |n| format!("Creator note captured: {n}"),
            ),
            confidence: 0.55,
            action_for_next_video: "Reuse best-performing language pattern from this upload."
                .to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn insights_with_note() {
        let insights = ingest_learning("https://youtu.be/x", Some("  great intro "));
        assert_eq!(insights.len(), 2);
        assert_eq!(
            insights[0].lesson,
            "Early framing around stakes improved click intent for https://youtu.be/x."
        );
        assert_eq!(insights[1].lesson, "Creator note captured: great intro");
        assert!((insights[0].confidence - 0.72).abs() < f64::EPSILON);
        assert!((insights[1].confidence - 0.55).abs() < f64::EPSILON);
    }

    #[test]
    fn blank_note() {
        let insights = ingest_learning("u", Some("   "));
        assert_eq!(insights[1].lesson, "No creator note provided.");
        let insights = ingest_learning("u", None);
        assert_eq!(insights[1].lesson, "No creator note provided.");
    }

    #[test]
    fn note_names_video() {
        let meta = VideoMeta {
            title: "My Upload".into(),
            author_name: "Ada".into(),
            thumbnail_url: String::new(),
        };
        assert_eq!(
            learning_note(Some(&meta)),
            "Video: \"My Upload\" by Ada. Hook was stronger than expected, middle section lagged."
        );
        assert_eq!(learning_note(None), DEFAULT_OBSERVATION);
    }
}
