//! Fetch orchestration through the public API: many feeds, one barrier.

use std::time::Duration;

use pretty_assertions::assert_eq;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use feedloom::config::Config;
use feedloom::feed::{build_client, fetch_all, Feed, FetchError, FetchOptions, ParseError};

const RSS: &str = r#"<rss version="2.0"><channel><title>Planet RSS</title>
    <item><title>a</title></item><item><title>b</title></item></channel></rss>"#;

const ATOM: &str = r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>Planet Atom</title>
    <entry><title>only</title></entry></feed>"#;

const RDF: &str = r#"<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#"
    xmlns="http://purl.org/rss/1.0/"><channel><title>Planet RDF</title></channel>
    <item><title>x</title></item></rdf:RDF>"#;

fn options() -> FetchOptions {
    let config = Config {
        allow_private_networks: true,
        retry_base_delay_ms: 1,
        max_retries: 1,
        ..Config::default()
    };
    config.fetch_options()
}

async fn serve(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(status)
                .set_body_string(body)
                .insert_header("Content-Type", "application/xml"),
        )
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_mixed_dialects_fetched_in_input_order() {
    let server = MockServer::start().await;
    serve(&server, "/rss", 200, RSS).await;
    serve(&server, "/atom", 200, ATOM).await;
    serve(&server, "/rdf", 200, RDF).await;
    serve(&server, "/page", 200, "<html><body>hi</body></html>").await;
    serve(&server, "/gone", 410, "").await;

    let urls: Vec<String> = ["/rss", "/page", "/atom", "/gone", "/rdf"]
        .iter()
        .map(|route| format!("{}{route}", server.uri()))
        .collect();

    let options = options();
    let client = build_client(&options).unwrap();
    let results = fetch_all(&client, urls.clone(), &options).await;

    let returned: Vec<&str> = results.iter().map(|r| r.url.as_str()).collect();
    assert_eq!(returned, urls.iter().map(String::as_str).collect::<Vec<_>>());

    match &results[0].result {
        Ok(Feed::Rss(feed)) => {
            assert_eq!(feed.title.as_deref(), Some("Planet RSS"));
            assert_eq!(feed.items().len(), 2);
        }
        other => panic!("expected RSS feed, got {other:?}"),
    }
    assert!(matches!(
        results[1].result,
        Err(FetchError::Parse(ParseError::NotRecognized))
    ));
    match &results[2].result {
        Ok(feed @ Feed::Atom(_)) => assert_eq!(feed.title(), Some("Planet Atom")),
        other => panic!("expected Atom feed, got {other:?}"),
    }
    assert!(matches!(results[3].result, Err(FetchError::HttpStatus(410))));
    match &results[4].result {
        Ok(feed) => {
            assert_eq!(feed.title(), Some("Planet RDF"));
            assert_eq!(feed.item_count(), 1);
        }
        other => panic!("expected RDF feed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_single_slot_concurrency_still_completes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(RSS)
                .set_delay(Duration::from_millis(20)),
        )
        .expect(4)
        .mount(&server)
        .await;

    let options = FetchOptions {
        max_concurrent: 1,
        ..options()
    };
    let client = build_client(&options).unwrap();
    let urls = (0..4).map(|n| format!("{}/feed/{n}", server.uri()));

    let results = fetch_all(&client, urls, &options).await;
    assert_eq!(results.len(), 4);
    assert!(results.iter().all(|r| r.result.is_ok()));
}

#[tokio::test]
async fn test_configured_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header("user-agent", "planet-aggregator/2.0"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ATOM))
        .expect(1)
        .mount(&server)
        .await;

    let options = FetchOptions {
        user_agent: "planet-aggregator/2.0".to_string(),
        ..options()
    };
    let client = build_client(&options).unwrap();
    let results = fetch_all(&client, [format!("{}/feed", server.uri())], &options).await;
    assert!(results[0].result.is_ok());
}

#[tokio::test]
async fn test_timeout_reported_per_feed() {
    let server = MockServer::start().await;
    serve(&server, "/fast", 200, RSS).await;
    Mock::given(method("GET"))
        .and(path("/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(RSS)
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let options = FetchOptions {
        timeout: Duration::from_millis(200),
        max_retries: 0,
        ..options()
    };
    let client = build_client(&options).unwrap();
    let results = fetch_all(
        &client,
        [
            format!("{}/slow", server.uri()),
            format!("{}/fast", server.uri()),
        ],
        &options,
    )
    .await;

    assert!(matches!(results[0].result, Err(FetchError::Timeout)));
    assert!(results[1].result.is_ok());
}

#[tokio::test]
async fn test_public_only_policy_refuses_local_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(RSS))
        .expect(0)
        .mount(&server)
        .await;

    let options = Config::default().fetch_options();
    let client = build_client(&options).unwrap();
    let results = fetch_all(&client, [format!("{}/feed", server.uri())], &options).await;

    assert!(matches!(results[0].result, Err(FetchError::InvalidUrl(_))));
}
