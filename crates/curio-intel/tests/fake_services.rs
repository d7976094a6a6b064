//! Intel lookups against an in-process fake of the public services.

use std::thread;

use curio_config::IntelConfig;
use curio_core::entities::TopicIntel;
use curio_intel::IntelClient;
use pretty_assertions::assert_eq;

/// Canned response for requests whose URL starts with `prefix`.
struct Route {
    prefix: &'static str,
    status: u16,
    body: &'static str,
}

/// Serve `routes` on a random local port until the test process exits.
/// Unknown paths get a 404.
fn serve(routes: Vec<Route>) -> String {
    let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
    let base = format!("http://{}", server.server_addr().to_ip().unwrap());
    thread::spawn(move || {
        for request in server.incoming_requests() {
            let url = request.url().to_string();
            let (status, body) = routes
                .iter()
                .find(|r| url.starts_with(r.prefix))
                .map_or((404, "{}"), |r| (r.status, r.body));
            let response = tiny_http::Response::from_string(body)
                .with_status_code(status)
                .with_header(
                    tiny_http::Header::from_bytes("Content-Type", "application/json").unwrap(),
                );
            let _ = request.respond(response);
        }
    });
    base
}

fn client_for(base: &str) -> IntelClient {
    IntelClient::new(IntelConfig {
        wikipedia_api_url: format!("{base}/w/api.php"),
        wikipedia_rest_url: format!("{base}/api/rest_v1"),
        datamuse_url: base.to_string(),
        oembed_url: format!("{base}/oembed"),
        related_limit: 3,
        timeout_secs: 5,
    })
}

#[tokio::test]
async fn topic_intel_combines_both_services() {
    let base = serve(vec![
        Route {
            prefix: "/w/api.php?action=opensearch&search=time%20management",
            status: 200,
            body: r#"["time management", ["Time management"], [""], ["https://x"]]"#,
        },
        Route {
            prefix: "/api/rest_v1/page/summary/Time%20management",
            status: 200,
            body: r#"{"extract": "Time management is planning."}"#,
        },
        Route {
            prefix: "/words?ml=time%20management&max=3",
            status: 200,
            body: r#"[{"word": "scheduling"}, {"word": "planning"}, {"word": "focus"}, {"word": "extra"}]"#,
        },
    ]);

    let intel = client_for(&base).fetch_topic_intel("  time management ").await;
    assert_eq!(
        intel,
        TopicIntel {
            topic_title: "Time management".into(),
            summary: "Time management is planning.".into(),
            related_terms: vec!["scheduling".into(), "planning".into(), "focus".into()],
        }
    );
}

#[tokio::test]
async fn summary_falls_back_to_search_description() {
    let base = serve(vec![
        Route {
            prefix: "/w/api.php",
            status: 200,
            body: r#"["chess", ["Chess"], ["Board game"], ["https://x"]]"#,
        },
        Route {
            prefix: "/api/rest_v1/page/summary/",
            status: 500,
            body: "boom",
        },
        Route {
            prefix: "/words",
            status: 429,
            body: "",
        },
    ]);

    let intel = client_for(&base).fetch_topic_intel("chess").await;
    assert_eq!(intel.topic_title, "Chess");
    assert_eq!(intel.summary, "Board game");
    assert!(intel.related_terms.is_empty());
}

#[tokio::test]
async fn everything_down_degrades_to_topic() {
    let base = serve(Vec::new());
    let intel = client_for(&base).fetch_topic_intel("knitting").await;
    assert_eq!(
        intel,
        TopicIntel {
            topic_title: "knitting".into(),
            summary: String::new(),
            related_terms: Vec::new(),
        }
    );
}

#[tokio::test]
async fn video_meta_roundtrip_and_failure() {
    let base = serve(vec![Route {
        prefix: "/oembed?url=https%3A%2F%2Fyoutu.be%2Fok&format=json",
        status: 200,
        body: r#"{"title": "My Upload", "author_name": "Ada", "thumbnail_url": "https://img"}"#,
    }]);
    let client = client_for(&base);

    let meta = client.fetch_video_meta("https://youtu.be/ok").await.unwrap();
    assert_eq!(meta.title, "My Upload");
    assert_eq!(meta.author_name, "Ada");

    assert!(client.fetch_video_meta("https://youtu.be/private").await.is_none());
}
