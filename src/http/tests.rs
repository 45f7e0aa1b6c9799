//! Tests for the HTTP module

use super::*;
use crate::config::SearchConfig;
use crate::error::Error;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_http_client_config_default() {
    let config = HttpClientConfig::default();
    assert_eq!(config.timeout, Duration::from_secs(30));
    assert_eq!(
        config.default_headers.get("accept"),
        Some(&"application/json".to_string())
    );
    assert!(config.user_agent.starts_with("salary-scout/"));
}

#[test]
fn test_http_client_config_builder() {
    let config = HttpClientConfig::builder()
        .timeout(Duration::from_secs(60))
        .user_agent("test-agent/1.0")
        .build();

    assert_eq!(config.timeout, Duration::from_secs(60));
    assert_eq!(config.user_agent, "test-agent/1.0");
    assert_eq!(config.default_headers.len(), 1);
}

#[test]
fn test_request_config_keeps_query_order() {
    let config = RequestConfig::new()
        .query("text", "rust")
        .query("per_page", "100")
        .query("page", "0");

    let keys: Vec<_> = config.query.iter().map(|(k, _)| k.as_str()).collect();
    assert_eq!(keys, vec!["text", "per_page", "page"]);
}

#[tokio::test]
async fn test_http_client_sends_default_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .and(header("accept", "application/json"))
        .and(header("user-agent", "test-agent/1.0"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&mock_server)
        .await;

    let config = HttpClientConfig::builder()
        .user_agent("test-agent/1.0")
        .build();

    let client = HttpClient::with_config(config).unwrap();
    let response = client
        .get_with_config(&format!("{}/vacancies", mock_server.uri()), RequestConfig::new())
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn test_http_client_status_error_carries_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .respond_with(ResponseTemplate::new(403).set_body_string("forbidden"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let err = client
        .get_with_config(&format!("{}/vacancies", mock_server.uri()), RequestConfig::new())
        .await
        .unwrap_err();

    assert!(err.is_network());
    match err {
        Error::HttpStatus { status, body } => {
            assert_eq!(status, 403);
            assert_eq!(body, "forbidden");
        }
        other => panic!("Expected HttpStatus, got {other:?}"),
    }
}

#[tokio::test]
async fn test_http_client_server_error_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = HttpClient::with_config(HttpClientConfig::default()).unwrap();
    let result = client
        .get_with_config(&format!("{}/vacancies", mock_server.uri()), RequestConfig::new())
        .await;

    assert!(matches!(result, Err(Error::HttpStatus { status: 503, .. })));
}

#[tokio::test]
async fn test_http_client_transport_failure() {
    // Nothing listens on port 9 on the loopback interface
    let client = HttpClient::with_config(
        HttpClientConfig::builder()
            .timeout(Duration::from_secs(2))
            .build(),
    )
    .unwrap();

    let err = client
        .get_with_config("http://127.0.0.1:9/vacancies", RequestConfig::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Http(_)));
    assert!(err.is_network());
}

#[tokio::test]
async fn test_listings_fetcher_query_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .and(query_param("text", "C#"))
        .and(query_param("per_page", "100"))
        .and(query_param("page", "3"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items":[]}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let config = SearchConfig::new().with_endpoint(format!("{}/vacancies", mock_server.uri()));
    let fetcher = ListingsFetcher::from_config(&config).unwrap();

    let body = fetcher.fetch_page(3).await.unwrap();
    assert_eq!(body, r#"{"items":[]}"#);
}

#[tokio::test]
async fn test_listings_fetcher_encodes_query_text() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .and(query_param("text", "senior rust & go"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let fetcher = ListingsFetcher::new(
        HttpClient::with_config(HttpClientConfig::default()).unwrap(),
        format!("{}/vacancies", mock_server.uri()),
        "senior rust & go",
        20,
    );

    let request = fetcher.request_for(0);
    assert!(request.query.contains(&("per_page".to_string(), "20".to_string())));

    assert_eq!(fetcher.fetch_page(0).await.unwrap(), "{}");
}

#[tokio::test]
async fn test_listings_fetcher_propagates_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/vacancies"))
        .respond_with(ResponseTemplate::new(400).set_body_string("bad page"))
        .mount(&mock_server)
        .await;

    let config = SearchConfig::new().with_endpoint(format!("{}/vacancies", mock_server.uri()));
    let fetcher = ListingsFetcher::from_config(&config).unwrap();

    let err = fetcher.fetch_page(0).await.unwrap_err();
    assert!(err.is_network());
}
