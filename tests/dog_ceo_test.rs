//! Integration tests for [`DogCeoClient`] against a wiremock stub of the
//! dog.ceo API, alone and behind [`CachingBreedFetcher`].

#![cfg(feature = "dog-ceo")]

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use dogapi::providers::DogCeoClient;
use dogapi::{BreedFetcher, CachingBreedFetcher, DogApiConfig};

async fn mount_list(server: &MockServer, breed: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(format!("/breed/{breed}/list")))
        .respond_with(response)
        .mount(server)
        .await;
}

// =============================================================================
// Response mapping
// =============================================================================

#[tokio::test]
async fn success_envelope_yields_list() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        "hound",
        ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": ["a", "b"]
        })),
    )
    .await;

    let client = DogCeoClient::with_base_url(server.uri()).unwrap();
    assert_eq!(client.sub_breeds("hound").await.unwrap(), vec!["a", "b"]);
}

#[tokio::test]
async fn success_without_message_yields_empty_list() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        "shiba",
        ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })),
    )
    .await;

    let client = DogCeoClient::with_base_url(server.uri()).unwrap();
    assert!(client.sub_breeds("shiba").await.unwrap().is_empty());
}

#[tokio::test]
async fn error_envelope_is_not_found() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        "zzz",
        ResponseTemplate::new(200).set_body_json(json!({ "status": "error" })),
    )
    .await;

    let client = DogCeoClient::with_base_url(server.uri()).unwrap();
    let err = client.sub_breeds("zzz").await.unwrap_err();
    assert_eq!(err.message(), "breed not found: zzz");
}

#[tokio::test]
async fn http_404_is_not_found() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        "zzz",
        ResponseTemplate::new(404).set_body_json(json!({
            "status": "error",
            "message": "Breed not found (master breed does not exist)",
            "code": 404
        })),
    )
    .await;

    let client = DogCeoClient::with_base_url(server.uri()).unwrap();
    assert!(client.sub_breeds("zzz").await.is_err());
}

#[tokio::test]
async fn http_500_is_not_found() {
    let server = MockServer::start().await;
    mount_list(&server, "hound", ResponseTemplate::new(500)).await;

    let client = DogCeoClient::with_base_url(server.uri()).unwrap();
    assert!(client.sub_breeds("hound").await.is_err());
}

#[tokio::test]
async fn malformed_json_is_not_found() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        "hound",
        ResponseTemplate::new(200).set_body_string("{\"status\": \"success\", \"message\": ["),
    )
    .await;

    let client = DogCeoClient::with_base_url(server.uri()).unwrap();
    let err = client.sub_breeds("hound").await.unwrap_err();
    assert!(err.message().contains("hound"));
}

#[tokio::test]
async fn empty_body_is_not_found() {
    let server = MockServer::start().await;
    mount_list(&server, "hound", ResponseTemplate::new(200)).await;

    let client = DogCeoClient::with_base_url(server.uri()).unwrap();
    let err = client.sub_breeds("hound").await.unwrap_err();
    assert_eq!(err.message(), "empty API response");
}

#[tokio::test]
async fn blank_breed_issues_no_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let client = DogCeoClient::with_base_url(server.uri()).unwrap();
    for blank in ["", "   ", "\t\n"] {
        let err = client.sub_breeds(blank).await.unwrap_err();
        assert_eq!(err.message(), "breed is blank");
    }
}

// =============================================================================
// Request shape
// =============================================================================

#[tokio::test]
async fn request_path_uses_normalized_breed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breed/hound/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": ["afghan"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = DogCeoClient::with_base_url(server.uri()).unwrap();
    assert_eq!(client.sub_breeds("  HOUND ").await.unwrap(), vec!["afghan"]);
}

#[tokio::test]
async fn configured_user_agent_is_sent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breed/hound/list"))
        .and(header("user-agent", "kennel-bot/1.0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = DogApiConfig::new()
        .base_url(server.uri())
        .user_agent("kennel-bot/1.0");
    let client = DogCeoClient::new(config).unwrap();
    assert!(client.sub_breeds("hound").await.unwrap().is_empty());
}

// =============================================================================
// Transport failures
// =============================================================================

#[tokio::test]
async fn timeout_is_not_found() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        "hound",
        ResponseTemplate::new(200)
            .set_body_json(json!({ "status": "success", "message": ["a"] }))
            .set_delay(Duration::from_secs(3)),
    )
    .await;

    let config = DogApiConfig::new()
        .base_url(server.uri())
        .timeout(Duration::from_secs(1));
    let client = DogCeoClient::new(config).unwrap();
    let err = client.sub_breeds("hound").await.unwrap_err();
    assert!(err.message().contains("failed to fetch"));
}

#[tokio::test]
async fn sub_second_timeout_allows_fast_responses() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        "hound",
        ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": ["afghan"]
        })),
    )
    .await;

    let config = DogApiConfig::new()
        .base_url(server.uri())
        .timeout(Duration::from_millis(500));
    let client = DogCeoClient::new(config).unwrap();
    assert_eq!(client.sub_breeds("hound").await.unwrap(), vec!["afghan"]);
}

#[tokio::test]
async fn array_body_is_not_found() {
    let server = MockServer::start().await;
    mount_list(
        &server,
        "hound",
        ResponseTemplate::new(200).set_body_json(json!(["success", ["a", "b"]])),
    )
    .await;

    let client = DogCeoClient::with_base_url(server.uri()).unwrap();
    assert!(client.sub_breeds("hound").await.is_err());
}

#[tokio::test]
async fn connection_refused_is_not_found() {
    // Nothing listens on port 1.
    let client = DogCeoClient::with_base_url("http://127.0.0.1:1").unwrap();
    let err = client.sub_breeds("hound").await.unwrap_err();
    assert!(err.message().contains("failed to fetch"));
}

// =============================================================================
// Caching on top of the HTTP client
// =============================================================================

#[tokio::test]
async fn caching_fetcher_hits_upstream_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breed/hound/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "success",
            "message": ["afghan", "basset"]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = CachingBreedFetcher::builder()
        .dog_ceo(DogApiConfig::new().base_url(server.uri()))
        .build()
        .unwrap();

    for input in ["hound", "Hound", "  HOUND "] {
        assert_eq!(
            fetcher.sub_breeds(input).await.unwrap(),
            vec!["afghan", "basset"]
        );
    }
    assert_eq!(fetcher.calls_made(), 1);
}

#[tokio::test]
async fn caching_fetcher_retries_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/breed/zzz/list"))
        .respond_with(ResponseTemplate::new(404))
        .expect(2)
        .mount(&server)
        .await;

    let fetcher = CachingBreedFetcher::builder()
        .dog_ceo(DogApiConfig::new().base_url(server.uri()))
        .build()
        .unwrap();

    assert!(fetcher.sub_breeds("zzz").await.is_err());
    assert!(fetcher.sub_breeds("zzz").await.is_err());
    assert_eq!(fetcher.calls_made(), 2);
}

#[tokio::test]
async fn caching_fetcher_counts_blank_input_attempts() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let fetcher = CachingBreedFetcher::builder()
        .dog_ceo(DogApiConfig::new().base_url(server.uri()))
        .build()
        .unwrap();

    assert!(fetcher.sub_breeds("  ").await.is_err());
    assert_eq!(fetcher.calls_made(), 1);
    assert!(!fetcher.is_cached(""));
}

#[test]
fn builder_rejects_invalid_base_url() {
    let result = CachingBreedFetcher::builder()
        .dog_ceo(DogApiConfig::new().base_url("::not a url::"))
        .build();
    assert!(matches!(result, Err(dogapi::DogApiError::Configuration(_))));
}

#[test]
fn builder_rejects_zero_timeout() {
    let result = CachingBreedFetcher::builder()
        .dog_ceo(DogApiConfig::new().timeout(Duration::ZERO))
        .build();
    assert!(matches!(result, Err(dogapi::DogApiError::Configuration(_))));
}
