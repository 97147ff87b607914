use std::time::Duration;

use futures::stream::{self, StreamExt};
use thiserror::Error;

use super::model::Feed;
use super::parser::{parse, ParseError};
use crate::util::{validate_feed_url, NetworkPolicy, UrlValidationError};

const DEFAULT_MAX_FEED_SIZE: usize = 10 * 1024 * 1024; // 10MB

/// Errors that can occur while fetching a feed.
///
/// These cover the whole lifecycle of one fetch: URL policy, network
/// issues, HTTP errors, body limits and finally parsing.
#[derive(Debug, Error)]
pub enum FetchError {
    /// URL could not be parsed or points somewhere we refuse to go
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] UrlValidationError),
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with non-2xx status code
    #[error("HTTP error: status {0}")]
    HttpStatus(u16),
    /// Request exceeded the configured timeout
    #[error("Request timed out")]
    Timeout,
    /// Body is not a feed, or not well-formed XML
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
    /// Server returned 429 Too Many Requests after max retries
    #[error("Rate limited after {0} retries")]
    RateLimited(u32),
    /// Response body exceeded the size limit
    #[error("Response too large")]
    ResponseTooLarge,
    /// Response was incomplete (received fewer bytes than Content-Length)
    #[error("Incomplete response: expected {expected} bytes, received {received}")]
    IncompleteResponse { expected: u64, received: usize },
}

/// Limits and retry policy for fetching.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// Maximum number of feeds fetched simultaneously.
    pub max_concurrent: usize,
    /// Per-request timeout, applied to the request and to the body read.
    pub timeout: Duration,
    /// Maximum accepted body size in bytes.
    pub max_size: usize,
    /// Retries after the first attempt for 429, 5xx and truncated bodies.
    pub max_retries: u32,
    /// Backoff before the first retry; doubled for each further retry.
    pub retry_base_delay: Duration,
    pub user_agent: String,
    /// Allow loopback and private-range hosts.
    pub allow_private_networks: bool,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            max_concurrent: 10,
            timeout: Duration::from_secs(30),
            max_size: DEFAULT_MAX_FEED_SIZE,
            max_retries: 3,
            retry_base_delay: Duration::from_secs(1),
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_owned(),
            allow_private_networks: false,
        }
    }
}

impl FetchOptions {
    fn network_policy(&self) -> NetworkPolicy {
        if self.allow_private_networks {
            NetworkPolicy::AllowPrivate
        } else {
            NetworkPolicy::PublicOnly
        }
    }

    fn backoff(&self, retry: u32) -> Duration {
        self.retry_base_delay
            .saturating_mul(2u32.saturating_pow(retry))
    }
}

/// Result of a single feed fetch.
#[derive(Debug)]
pub struct FetchResult {
    /// The URL as the caller supplied it.
    pub url: String,
    pub result: Result<Feed, FetchError>,
}

/// Builds an HTTP client configured from `options`.
pub fn build_client(options: &FetchOptions) -> Result<reqwest::Client, FetchError> {
    let client = reqwest::Client::builder()
        .user_agent(options.user_agent.as_str())
        .build()?;
    Ok(client)
}

/// Fetches and parses many feeds concurrently.
///
/// Each document is downloaded and parsed independently; one failure does
/// not affect the others. The call returns only after every fetch has
/// finished.
///
/// # Arguments
///
/// * `client` - HTTP client used for every request
/// * `urls` - Feed URLs to fetch
/// * `options` - Concurrency, size, timeout and retry limits
///
/// # Returns
///
/// One [`FetchResult`] per URL, in input order.
pub async fn fetch_all<I>(
    client: &reqwest::Client,
    urls: I,
    options: &FetchOptions,
) -> Vec<FetchResult>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let results: Vec<FetchResult> = stream::iter(urls.into_iter().map(Into::<String>::into))
        .map(|url: String| async move {
            let result = fetch_one(client, &url, options).await;
            if let Err(e) = &result {
                tracing::warn!(url = %url, error = %e, "Feed fetch failed");
            }
            FetchResult { url, result }
        })
        .buffered(options.max_concurrent.max(1))
        .collect()
        .await;

    let failed = results.iter().filter(|r| r.result.is_err()).count();
    tracing::debug!(total = results.len(), failed = failed, "Fetched feeds");

    results
}

/// Fetches one feed and parses it.
///
/// # Errors
///
/// - [`FetchError::InvalidUrl`] - Unparseable URL, non-HTTP scheme or a
///   private host while private networks are disallowed
/// - [`FetchError::Network`] - Connection or TLS errors
/// - [`FetchError::Timeout`] - Request or body read exceeded the timeout
/// - [`FetchError::HttpStatus`] - Non-2xx response (5xx after retries)
/// - [`FetchError::RateLimited`] - 429 response after max retries
/// - [`FetchError::ResponseTooLarge`] - Body exceeded the size limit
/// - [`FetchError::IncompleteResponse`] - Body shorter than Content-Length after retries
/// - [`FetchError::Parse`] - Body is not a well-formed feed
pub async fn fetch_one(
    client: &reqwest::Client,
    url: &str,
    options: &FetchOptions,
) -> Result<Feed, FetchError> {
    let url = validate_feed_url(url, options.network_policy())?;
    let bytes = fetch_bytes(client, url.as_str(), options).await?;
    let feed = parse(&bytes)?;
    tracing::debug!(url = %url, items = feed.item_count(), "Parsed feed");
    Ok(feed)
}

async fn fetch_bytes(
    client: &reqwest::Client,
    url: &str,
    options: &FetchOptions,
) -> Result<Vec<u8>, FetchError> {
    let mut retry_count = 0;

    loop {
        let response = tokio::time::timeout(options.timeout, client.get(url).send())
            .await
            .map_err(|_| FetchError::Timeout)?
            .map_err(FetchError::Network)?;

        let status = response.status();

        // Rate limiting: exponential backoff, then give up
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            if retry_count >= options.max_retries {
                return Err(FetchError::RateLimited(options.max_retries));
            }

            let delay = options.backoff(retry_count);
            tracing::warn!(
                url = %url,
                retry = retry_count,
                delay_ms = delay.as_millis() as u64,
                "Rate limited, backing off"
            );

            tokio::time::sleep(delay).await;
            retry_count += 1;
            continue;
        }

        // Server errors (5xx) are retried with the same backoff
        if status.is_server_error() {
            if retry_count >= options.max_retries {
                return Err(FetchError::HttpStatus(status.as_u16()));
            }

            let delay = options.backoff(retry_count);
            tracing::warn!(
                url = %url,
                status = %status,
                retry = retry_count,
                delay_ms = delay.as_millis() as u64,
                "Server error, retrying after delay"
            );

            tokio::time::sleep(delay).await;
            retry_count += 1;
            continue;
        }

        // 4xx and anything else unexpected fail immediately
        if !status.is_success() {
            return Err(FetchError::HttpStatus(status.as_u16()));
        }

        let body = tokio::time::timeout(
            options.timeout,
            read_limited_bytes(response, options.max_size),
        )
        .await
        .map_err(|_| FetchError::Timeout)?;

        match body {
            Ok(bytes) => return Ok(bytes),
            Err(FetchError::IncompleteResponse { expected, received }) => {
                if retry_count >= options.max_retries {
                    return Err(FetchError::IncompleteResponse { expected, received });
                }

                let delay = options.backoff(retry_count);
                tracing::debug!(
                    url = %url,
                    expected = expected,
                    received = received,
                    attempt = retry_count + 1,
                    delay_ms = delay.as_millis() as u64,
                    "Retrying incomplete download"
                );

                tokio::time::sleep(delay).await;
                retry_count += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, FetchError> {
    let expected_length = response.content_length();

    // Fast path: trust a Content-Length that is already over the limit
    if let Some(len) = expected_length {
        if len > limit as u64 {
            return Err(FetchError::ResponseTooLarge);
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(FetchError::Network)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(FetchError::ResponseTooLarge);
        }
        bytes.extend_from_slice(&chunk);
    }

    // Connection dropped mid-body: fewer bytes than announced
    if let Some(expected) = expected_length {
        if (bytes.len() as u64) < expected {
            return Err(FetchError::IncompleteResponse {
                expected,
                received: bytes.len(),
            });
        }
    }

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{any, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const VALID_RSS: &str = r#"<?xml version="1.0"?>
<rss version="2.0"><channel>
    <title>Test</title>
    <item><guid>1</guid><title>Test</title></item>
</channel></rss>"#;

    fn test_options() -> FetchOptions {
        FetchOptions {
            retry_base_delay: Duration::from_millis(1),
            allow_private_networks: true,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_fetch_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(VALID_RSS)
                    .insert_header("Content-Type", "application/xml"),
            )
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/feed", mock_server.uri());

        let feed = fetch_one(&client, &url, &test_options()).await.unwrap();
        assert_eq!(feed.title(), Some("Test"));
        assert_eq!(feed.item_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_404_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/feed", mock_server.uri());

        match fetch_one(&client, &url, &test_options()).await {
            Err(FetchError::HttpStatus(404)) => {}
            other => panic!("Expected HttpStatus(404), got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_500_error_retries_then_fails() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .expect(4) // Initial request + 3 retries
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/feed", mock_server.uri());

        match fetch_one(&client, &url, &test_options()).await {
            Err(FetchError::HttpStatus(500)) => {}
            other => panic!("Expected HttpStatus(500), got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_503_retry_then_success() {
        let mock_server = MockServer::start().await;

        // First two requests return 503, third succeeds
        Mock::given(any())
            .respond_with(ResponseTemplate::new(503))
            .up_to_n_times(2)
            .mount(&mock_server)
            .await;

        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string(VALID_RSS))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/feed", mock_server.uri());

        let feed = fetch_one(&client, &url, &test_options()).await.unwrap();
        assert_eq!(feed.item_count(), 1);
    }

    #[tokio::test]
    async fn test_fetch_rate_limited() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(429))
            .expect(3) // Initial request + 2 retries
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/feed", mock_server.uri());
        let options = FetchOptions {
            max_retries: 2,
            ..test_options()
        };

        match fetch_one(&client, &url, &options).await {
            Err(FetchError::RateLimited(2)) => {}
            other => panic!("Expected RateLimited(2), got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_malformed_feed_parse_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<not valid xml"))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/feed", mock_server.uri());

        match fetch_one(&client, &url, &test_options()).await {
            Err(FetchError::Parse(ParseError::Malformed { .. })) => {}
            other => panic!("Expected Malformed parse error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_html_page_is_not_a_feed() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("<!DOCTYPE html><html><head><title>Blog</title></head></html>"),
            )
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/", mock_server.uri());

        match fetch_one(&client, &url, &test_options()).await {
            Err(FetchError::Parse(ParseError::NotRecognized)) => {}
            other => panic!("Expected NotRecognized, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_response_too_large() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VALID_RSS))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/feed", mock_server.uri());
        let options = FetchOptions {
            max_size: 16,
            ..test_options()
        };

        match fetch_one(&client, &url, &options).await {
            Err(FetchError::ResponseTooLarge) => {}
            other => panic!("Expected ResponseTooLarge, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_private_network_refused_by_default() {
        let mock_server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200).set_body_string(VALID_RSS))
            .expect(0)
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let url = format!("{}/feed", mock_server.uri());
        let options = FetchOptions {
            allow_private_networks: false,
            ..test_options()
        };

        match fetch_one(&client, &url, &options).await {
            Err(FetchError::InvalidUrl(_)) => {}
            other => panic!("Expected InvalidUrl, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_all_keeps_input_order() {
        let mock_server = MockServer::start().await;
        Mock::given(path("/good"))
            .respond_with(ResponseTemplate::new(200).set_body_string(VALID_RSS))
            .mount(&mock_server)
            .await;
        Mock::given(path("/missing"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let client = reqwest::Client::new();
        let urls = vec![
            format!("{}/missing", mock_server.uri()),
            format!("{}/good", mock_server.uri()),
            "ftp://example.com/feed".to_string(),
        ];

        let results = fetch_all(&client, urls.clone(), &test_options()).await;
        assert_eq!(results.len(), 3);
        for (result, url) in results.iter().zip(&urls) {
            assert_eq!(&result.url, url);
        }
        assert!(matches!(results[0].result, Err(FetchError::HttpStatus(404))));
        assert!(results[1].result.is_ok());
        assert!(matches!(results[2].result, Err(FetchError::InvalidUrl(_))));
    }

    #[test]
    fn test_backoff_doubles() {
        let options = FetchOptions {
            retry_base_delay: Duration::from_millis(100),
            ..Default::default()
        };
        assert_eq!(options.backoff(0), Duration::from_millis(100));
        assert_eq!(options.backoff(1), Duration::from_millis(200));
        assert_eq!(options.backoff(3), Duration::from_millis(800));
    }
}
