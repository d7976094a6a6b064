//! Drafting through fake generators and a fake HTTP endpoint.

use std::io::Read;
use std::sync::mpsc;
use std::thread;

use curio_config::GenerationConfig;
use curio_generate::assist::default_titles;
use curio_generate::{
    Assistant, GenerateError, HttpGenerator, Origin, SamplingOptions, TextGenerator,
    assistant_from_config,
};
use curio_planner::{generate_brief, generate_hook_options};
use pretty_assertions::assert_eq;

/// Always answers with the same text.
struct Scripted(&'static str);

impl TextGenerator for Scripted {
    async fn generate(&self, _prompt: &str, _options: SamplingOptions) -> Result<String, GenerateError> {
        Ok(self.0.to_string())
    }
}

/// Always fails.
struct Broken;

impl TextGenerator for Broken {
    async fn generate(&self, _prompt: &str, _options: SamplingOptions) -> Result<String, GenerateError> {
        Err(GenerateError::Api {
            status: 503,
            message: "loading".into(),
        })
    }
}

fn sampling() -> SamplingOptions {
    SamplingOptions::from_config(&GenerationConfig::default())
}

#[tokio::test]
async fn no_model_uses_templates() {
    let assistant = assistant_from_config(&GenerationConfig::default());
    assert!(!assistant.has_model());

    let titles = assistant.idea_titles("chess").await;
    assert_eq!(titles.origin, Origin::Template);
    assert_eq!(titles.value, default_titles("chess"));

    let hooks = assistant.hooks("Chess", "").await;
    assert_eq!(hooks.value, generate_hook_options("Chess", ""));

    let brief = assistant.brief("Chess", "p", 8, &[]).await;
    assert_eq!(brief.origin, Origin::Template);
    assert_eq!(brief.value, generate_brief("Chess", "p", 8, &[]));

    let lines = assistant.script_lines("Chess").await;
    assert!(lines.value.is_empty());
}

#[tokio::test]
async fn failing_model_falls_back() {
    let assistant = Assistant::new(Some(Broken), sampling());
    let titles = assistant.idea_titles("chess").await;
    assert_eq!(titles.origin, Origin::Template);
    assert_eq!(titles.value.len(), 5);

    let brief = assistant.brief("Chess", "p", 8, &[]).await;
    assert_eq!(brief.origin, Origin::Template);
}

#[tokio::test]
async fn model_titles_are_merged_with_defaults() {
    let assistant = Assistant::new(
        Some(Scripted("1. Chess openings that win fast\n2. chess openings that win fast\nshort\nWhy I quit blitz chess for a month")),
        sampling(),
    );
    let titles = assistant.idea_titles("chess").await;
    assert_eq!(titles.origin, Origin::Model);
    assert_eq!(titles.value.len(), 7);
    assert_eq!(titles.value[0], "Chess openings that win fast");
    assert_eq!(titles.value[1], "Why I quit blitz chess for a month");
    assert_eq!(titles.value[2], "I tested chess strategies for 30 days");
}

#[tokio::test]
async fn model_hooks_are_capped() {
    let assistant = Assistant::new(
        Some(Scripted("I lost 200 games before I found this opening trap.\ntoo short")),
        sampling(),
    );
    let hooks = assistant.hooks("Chess", "club players").await;
    assert_eq!(hooks.origin, Origin::Model);
    assert_eq!(hooks.value.len(), 5);
    assert_eq!(hooks.value[0], "I lost 200 games before I found this opening trap.");
}

#[tokio::test]
async fn model_script_lines() {
    let assistant = Assistant::new(Some(Scripted("- Show the blunder\n- Explain the fix\n")), sampling());
    let lines = assistant.script_lines("Chess").await;
    assert_eq!(lines.origin, Origin::Model);
    assert_eq!(lines.value, vec!["Show the blunder", "Explain the fix"]);
}

#[tokio::test]
async fn http_generator_posts_tgi_request() {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let endpoint = format!("http://{}/generate", server.server_addr().to_ip().unwrap());
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        if let Ok(mut request) = server.recv() {
            let mut body = String::new();
            request.as_reader().read_to_string(&mut body).unwrap();
            let auth = request
                .headers()
                .iter()
                .find(|h| h.field.equiv("Authorization"))
                .map(|h| h.value.to_string());
            tx.send((body, auth)).unwrap();
            let _ = request.respond(tiny_http::Response::from_string(
                r#"[{"generated_text": "HOOKS:\nOpen on the final position\nCTA: pinned comment"}]"#,
            ));
        }
    });

    let config = GenerationConfig {
        endpoint,
        api_key: "secret".into(),
        ..GenerationConfig::default()
    };
    let generator = HttpGenerator::from_config(&config).unwrap_or_else(|e| panic!("{e}"));
    let text = generator.generate("prompt", SamplingOptions::BRIEF).await.unwrap();
    assert!(text.starts_with("HOOKS:"));

    let (body, auth) = rx.recv().unwrap();
    let body: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(body["inputs"], "prompt");
    assert_eq!(body["parameters"]["max_new_tokens"], 220);
    assert_eq!(body["parameters"]["do_sample"], true);
    assert_eq!(auth.as_deref(), Some("Bearer secret"));
}
