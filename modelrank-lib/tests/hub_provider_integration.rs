//! Integration tests for the hub provider against a wiremock server

use core::time::Duration;
use modelrank_lib::facts::{FetchError, HubProvider, MetadataProvider};
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FIXTURE: &str = include_str!("fixtures/model_info.json");

fn provider(server: &MockServer, token: Option<&str>, timeout: Duration) -> HubProvider {
    let endpoint = Url::parse(&server.uri()).expect("mock server URI should parse");
    HubProvider::new(token, endpoint, timeout).expect("provider should build")
}

async fn respond_with(status: u16) -> (MockServer, ResponseTemplate) {
    (MockServer::start().await, ResponseTemplate::new(status))
}

async fn fetch_with_status(template: ResponseTemplate, server: &MockServer) -> Result<(), FetchError> {
    Mock::given(method("GET"))
        .and(path("/api/models/org/model"))
        .respond_with(template)
        .mount(server)
        .await;

    provider(server, None, Duration::from_secs(5)).fetch("org/model").await.map(|_| ())
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri does not support sockets")]
async fn test_fetch_decodes_model_info() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/models/openai-community/gpt2"))
        .and(query_param("blobs", "true"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FIXTURE, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let metadata = provider(&server, None, Duration::from_secs(5))
        .fetch("openai-community/gpt2")
        .await
        .expect("fetch should succeed");

    assert_eq!(metadata.author.as_deref(), Some("openai-community"));
    assert_eq!(metadata.downloads, Some(11_045_677));
    assert_eq!(metadata.likes, Some(2412));
    assert_eq!(metadata.last_modified.as_deref(), Some("2024-02-19T10:57:45.000Z"));
    assert_eq!(metadata.declared_license(), Some("mit"));
    assert!(metadata.datasets.is_empty());
    assert!(!metadata.has_eval_results);
    assert_eq!(metadata.files.len(), 13);
    assert_eq!(metadata.used_storage, Some(11_799_341_789));
    assert!(metadata.has_file(|name| name == "tokenizer_config.json"));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri does not support sockets")]
async fn test_fetch_sends_bearer_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/models/org/model"))
        .and(header("authorization", "Bearer hf_secret"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let result = provider(&server, Some("hf_secret"), Duration::from_secs(5)).fetch("org/model").await;
    assert!(result.is_ok(), "expected success, got {result:?}");
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri does not support sockets")]
async fn test_not_found() {
    let (server, template) = respond_with(404).await;
    assert_eq!(fetch_with_status(template, &server).await, Err(FetchError::NotFound));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri does not support sockets")]
async fn test_unauthorized() {
    let (server, template) = respond_with(401).await;
    assert_eq!(fetch_with_status(template, &server).await, Err(FetchError::Unauthorized));

    let (server, template) = respond_with(403).await;
    assert_eq!(fetch_with_status(template, &server).await, Err(FetchError::Unauthorized));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri does not support sockets")]
async fn test_rate_limited() {
    let (server, template) = respond_with(429).await;
    assert_eq!(
        fetch_with_status(template.insert_header("retry-after", "17"), &server).await,
        Err(FetchError::RateLimited {
            retry_after: Some(Duration::from_secs(17))
        })
    );
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri does not support sockets")]
async fn test_server_error_is_network() {
    let (server, template) = respond_with(503).await;
    assert!(matches!(fetch_with_status(template, &server).await, Err(FetchError::Network(_))));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri does not support sockets")]
async fn test_malformed_body_is_network() {
    let server = MockServer::start().await;
    let template = ResponseTemplate::new(200).set_body_raw("not json", "application/json");
    assert!(matches!(fetch_with_status(template, &server).await, Err(FetchError::Network(_))));
}

#[tokio::test]
#[cfg_attr(miri, ignore = "Miri does not support sockets")]
async fn test_slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/models/org/model"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("{}", "application/json").set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let result = provider(&server, None, Duration::from_millis(100)).fetch("org/model").await;
    assert_eq!(result, Err(FetchError::Timeout));
}
