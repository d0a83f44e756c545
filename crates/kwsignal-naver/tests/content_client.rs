//! Integration tests for `ContentSearchClient` using wiremock HTTP mocks.

use kwsignal_naver::{ContentSearchClient, NaverError, OpenApiCredentials};
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> ContentSearchClient {
    ContentSearchClient::with_base_url(
        OpenApiCredentials::new("client-id", "client-secret"),
        5,
        "kwsignal-test/0.1",
        base_url,
    )
    .expect("client construction should not fail")
}

#[tokio::test]
async fn search_blog_sends_keys_and_parses_items() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search/blog.json"))
        .and(query_param("query", "주름크림"))
        .and(query_param("display", "100"))
        .and(header("X-Naver-Client-Id", "client-id"))
        .and(header("X-Naver-Client-Secret", "client-secret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 48213,
            "items": [
                { "title": "a", "link": "https://blog.example/1", "postdate": "20261010" },
                { "title": "b", "link": "https://blog.example/2" }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resp = client.search_blog("주름크림", 100).await.expect("should parse");

    assert_eq!(resp.total, 48213);
    assert_eq!(resp.items.len(), 2);
    assert_eq!(resp.items[0].postdate, "20261010");
    assert_eq!(resp.items[1].postdate, "00000000");
}

#[tokio::test]
async fn search_cafe_reads_total_only() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search/cafearticle.json"))
        .and(query_param("query", "주름크림"))
        .and(query_param("display", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total": 915,
            "items": [{ "title": "x", "cafename": "y" }]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resp = client.search_cafe("주름크림", 1).await.expect("should parse");
    assert_eq!(resp.total, 915);
}

#[tokio::test]
async fn unauthorized_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search/blog.json"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errorMessage": "Authentication failed",
            "errorCode": "024"
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.search_blog("kw", 100).await.unwrap_err();
    assert!(
        matches!(err, NaverError::UnexpectedStatus { status: 401, .. }),
        "got: {err:?}"
    );
}
