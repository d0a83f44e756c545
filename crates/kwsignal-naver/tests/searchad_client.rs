//! Integration tests for `SearchAdClient` using wiremock HTTP mocks.

use base64::Engine;
use kwsignal_naver::{NaverError, RawVolume, SearchAdClient, SearchAdCredentials};
use serde_json::json;
use wiremock::matchers::{header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn test_client(base_url: &str) -> SearchAdClient {
    SearchAdClient::with_base_url(
        SearchAdCredentials::new("access-key", "secret-key", "1234567"),
        5,
        "kwsignal-test/0.1",
        base_url,
    )
    .expect("client construction should not fail")
}

#[tokio::test]
async fn keyword_ideas_sends_signed_request_and_parses_list() {
    let server = MockServer::start().await;

    let body = json!({
        "keywordList": [
            { "relKeyword": "주름개선화장품", "monthlyPcQcCnt": 1200, "monthlyMobileQcCnt": 8800 },
            { "relKeyword": "주름크림", "monthlyPcQcCnt": "< 10", "monthlyMobileQcCnt": "50" }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/keywordstool"))
        .and(query_param("hintKeywords", "주름개선화장품"))
        .and(query_param("showDetail", "1"))
        .and(header("X-API-KEY", "access-key"))
        .and(header("X-Customer", "1234567"))
        .and(header_exists("X-Timestamp"))
        .and(header_exists("X-Signature"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resp = client
        .keyword_ideas("주름개선화장품")
        .await
        .expect("should parse keyword ideas");

    let list = resp.keyword_list.expect("keywordList present");
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].rel_keyword, "주름개선화장품");
    assert_eq!(list[1].monthly_pc_qc_cnt, RawVolume::Text("< 10".to_owned()));
    assert_eq!(list[1].monthly_mobile_qc_cnt, RawVolume::Text("50".to_owned()));
}

#[tokio::test]
async fn signature_header_verifies_against_timestamp() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/keywordstool"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "keywordList": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    client.keyword_ideas("kw").await.expect("request should succeed");

    let requests: Vec<Request> = server.received_requests().await.expect("recording enabled");
    assert_eq!(requests.len(), 1);
    let headers = &requests[0].headers;
    let timestamp = headers
        .get("X-Timestamp")
        .and_then(|v| v.to_str().ok())
        .expect("timestamp header");
    let signature = headers
        .get("X-Signature")
        .and_then(|v| v.to_str().ok())
        .expect("signature header");

    assert_eq!(
        signature,
        kwsignal_naver::sign(timestamp, "GET", "/keywordstool", "secret-key")
    );
    let raw = base64::engine::general_purpose::STANDARD
        .decode(signature)
        .expect("signature is base64");
    assert_eq!(raw.len(), 32);
}

#[tokio::test]
async fn missing_keyword_list_is_not_an_error_at_client_level() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/keywordstool"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "title": "quota", "code": 429 })),
        )
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let resp = client.keyword_ideas("kw").await.expect("body still parses");
    assert!(resp.keyword_list.is_none());
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/keywordstool"))
        .respond_with(ResponseTemplate::new(403))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.keyword_ideas("kw").await.unwrap_err();
    assert!(
        matches!(err, NaverError::UnexpectedStatus { status: 403, .. }),
        "expected UnexpectedStatus(403), got: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_is_a_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/keywordstool"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.keyword_ideas("kw").await.unwrap_err();
    assert!(matches!(err, NaverError::Deserialize { .. }), "got: {err:?}");
}
