//! Integration tests for `TwitterClient` using wiremock HTTP mocks.

use stylepulse_core::TwitterCredentials;
use stylepulse_twitter::{SearchParams, TwitterClient, TwitterError};
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> TwitterClient {
    TwitterClient::with_bearer_token("test-bearer", base_url, 30)
        .expect("client construction should not fail")
}

fn credentials(bearer_token: Option<&str>) -> TwitterCredentials {
    TwitterCredentials {
        consumer_key: "ck".to_string(),
        consumer_secret: "cs".to_string(),
        bearer_token: bearer_token.map(ToOwned::to_owned),
    }
}

fn status(id: &str, text: &str, user: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id.parse::<u64>().unwrap_or(0),
        "id_str": id,
        "text": text,
        "created_at": "Sat Oct 17 09:30:00 +0000 2026",
        "lang": "en",
        "user": { "id": 1, "screen_name": user, "name": "Display Name" },
        "entities": { "hashtags": [] }
    })
}

#[tokio::test]
async fn search_returns_parsed_tweets() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "statuses": [
            status("101", "Love this new #streetwear collection! http://x.co @brand", "hypebeastfan"),
            status("102", "Vintage dress haul", "thriftqueen"),
        ],
        "search_metadata": { "count": 100 }
    });

    Mock::given(method("GET"))
        .and(path("/1.1/search/tweets.json"))
        .and(query_param("lang", "en"))
        .and(query_param("count", "100"))
        .and(header("authorization", "Bearer test-bearer"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let tweets = client
        .search(&SearchParams::fashion())
        .await
        .expect("search should succeed");

    assert_eq!(tweets.len(), 2);
    assert_eq!(tweets[0].id, "101");
    assert_eq!(tweets[0].author, "hypebeastfan");
    assert_eq!(tweets[1].text, "Vintage dress haul");
}

#[tokio::test]
async fn search_sends_joined_vocabulary_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.1/search/tweets.json"))
        .and(query_param("q", stylepulse_core::search_query().as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "statuses": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let tweets = client.search(&SearchParams::fashion()).await.unwrap();
    assert!(tweets.is_empty());
}

#[tokio::test]
async fn rate_limit_maps_to_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(429)
                .insert_header("x-rate-limit-reset", "1760000000")
                .set_body_json(serde_json::json!({
                    "errors": [{ "code": 88, "message": "Rate limit exceeded" }]
                })),
        )
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search(&SearchParams::fashion())
        .await
        .unwrap_err();
    assert!(
        matches!(err, TwitterError::RateLimited { reset_at: Some(1_760_000_000) }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn unauthorized_maps_to_auth_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "errors": [{ "code": 89, "message": "Invalid or expired token." }]
        })))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search(&SearchParams::fashion())
        .await
        .unwrap_err();
    match err {
        TwitterError::Auth(message) => assert!(message.contains("Invalid or expired token")),
        other => panic!("expected Auth, got {other:?}"),
    }
}

#[tokio::test]
async fn server_error_maps_to_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503).set_body_string("over capacity"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search(&SearchParams::fashion())
        .await
        .unwrap_err();
    assert!(
        matches!(err, TwitterError::Api { status: 503, .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn malformed_body_maps_to_deserialize_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search(&SearchParams::fashion())
        .await
        .unwrap_err();
    assert!(matches!(err, TwitterError::Deserialize { .. }));
}

#[tokio::test]
async fn one_bad_timestamp_fails_the_batch() {
    let server = MockServer::start().await;

    let mut bad = status("202", "chic", "someone");
    bad["created_at"] = serde_json::json!("2026-10-17T09:30:00Z");
    let body = serde_json::json!({ "statuses": [status("201", "dress", "a"), bad] });

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let err = test_client(&server.uri())
        .search(&SearchParams::fashion())
        .await
        .unwrap_err();
    assert!(matches!(err, TwitterError::InvalidTimestamp { ref id, .. } if id == "202"));
}

fn empty_search() -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({ "statuses": [] }))
}

fn issued_token(token: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "token_type": "bearer",
        "access_token": token
    }))
}

#[tokio::test]
async fn construction_does_not_contact_token_endpoint() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(503))
        .expect(0)
        .mount(&server)
        .await;

    TwitterClient::new(&credentials(None), &server.uri(), 5)
        .expect("construction must not depend on the token endpoint");
}

#[tokio::test]
async fn token_endpoint_outage_fails_the_search_only() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = TwitterClient::new(&credentials(None), &server.uri(), 5).unwrap();
    let err = client.search(&SearchParams::fashion()).await.unwrap_err();
    assert!(
        matches!(err, TwitterError::Api { status: 503, .. }),
        "unexpected error: {err:?}"
    );
}

#[tokio::test]
async fn first_search_exchanges_consumer_credentials_once() {
    let server = MockServer::start().await;

    // base64("ck:cs") == "Y2s6Y3M="
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .and(header("authorization", "Basic Y2s6Y3M="))
        .and(body_string("grant_type=client_credentials"))
        .respond_with(issued_token("issued-token"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.1/search/tweets.json"))
        .and(header("authorization", "Bearer issued-token"))
        .respond_with(empty_search())
        .expect(2)
        .mount(&server)
        .await;

    let client = TwitterClient::new(&credentials(None), &server.uri(), 30).unwrap();
    client.search(&SearchParams::fashion()).await.unwrap();
    client.search(&SearchParams::fashion()).await.unwrap();
}

#[tokio::test]
async fn configured_bearer_skips_exchange() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.1/search/tweets.json"))
        .and(header("authorization", "Bearer preset"))
        .respond_with(empty_search())
        .expect(1)
        .mount(&server)
        .await;

    let client = TwitterClient::new(&credentials(Some("preset")), &server.uri(), 30).unwrap();
    client.search(&SearchParams::fashion()).await.unwrap();
}

#[tokio::test]
async fn rejected_consumer_credentials_fail_the_search() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "errors": [{ "code": 99, "message": "Unable to verify your credentials" }]
        })))
        .mount(&server)
        .await;

    let client = TwitterClient::new(&credentials(None), &server.uri(), 30).unwrap();
    let err = client.search(&SearchParams::fashion()).await.unwrap_err();
    assert!(matches!(err, TwitterError::Auth(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn revoked_token_is_renewed_on_next_search() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.1/search/tweets.json"))
        .and(header("authorization", "Bearer stale"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "errors": [{ "code": 89, "message": "Invalid or expired token." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(issued_token("fresh"))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.1/search/tweets.json"))
        .and(header("authorization", "Bearer fresh"))
        .respond_with(empty_search())
        .expect(1)
        .mount(&server)
        .await;

    let client = TwitterClient::new(&credentials(Some("stale")), &server.uri(), 30).unwrap();

    let err = client.search(&SearchParams::fashion()).await.unwrap_err();
    assert!(matches!(err, TwitterError::Auth(_)), "unexpected error: {err:?}");

    let tweets = client
        .search(&SearchParams::fashion())
        .await
        .expect("second search should use a renewed token");
    assert!(tweets.is_empty());
}

#[tokio::test]
async fn forbidden_search_keeps_cached_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(issued_token("unused"))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.1/search/tweets.json"))
        .respond_with(ResponseTemplate::new(403))
        .expect(2)
        .mount(&server)
        .await;

    let client = TwitterClient::new(&credentials(Some("preset")), &server.uri(), 30).unwrap();
    for _ in 0..2 {
        let err = client.search(&SearchParams::fashion()).await.unwrap_err();
        assert!(matches!(err, TwitterError::Auth(_)));
    }
}

#[tokio::test]
async fn fixed_bearer_client_never_exchanges() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(issued_token("unused"))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/1.1/search/tweets.json"))
        .respond_with(ResponseTemplate::new(401))
        .expect(2)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    for _ in 0..2 {
        let err = client.search(&SearchParams::fashion()).await.unwrap_err();
        assert!(matches!(err, TwitterError::Auth(_)));
    }
}
