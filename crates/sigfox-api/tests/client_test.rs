// Integration tests for `SigfoxClient` using wiremock.
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use secrecy::SecretString;
use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use sigfox_api::{Credential, Error, QueryParams, SigfoxClient, TransportConfig};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, SigfoxClient) {
    let server = MockServer::start().await;
    let client = SigfoxClient::new(
        Credential::new("login", SecretString::from("secret")),
        &server.uri(),
        &TransportConfig::default(),
    )
    .unwrap();
    (server, client)
}

fn page(ids: &[&str], next: bool) -> serde_json::Value {
    let data: Vec<_> = ids.iter().map(|id| json!({ "id": id })).collect();
    if next {
        json!({ "data": data, "paging": { "next": "https://api.example/next" } })
    } else {
        json!({ "data": data, "paging": {} })
    }
}

// ── Auth & success handling ─────────────────────────────────────────

#[tokio::test]
async fn test_basic_auth_header_on_every_request() {
    let (server, client) = setup().await;

    // base64("login:secret")
    Mock::given(method("GET"))
        .and(path("/devices/"))
        .and(header("authorization", "Basic bG9naW46c2VjcmV0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;

    let items = client.get_list("/devices/", &QueryParams::new()).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_json_headers_and_user_agent_on_every_request() {
    let server = MockServer::start().await;
    let transport = TransportConfig {
        user_agent: "sigfox-test/1".into(),
        ..TransportConfig::default()
    };
    let client = SigfoxClient::new(
        Credential::new("login", SecretString::from("secret")),
        &server.uri(),
        &transport,
    )
    .unwrap();

    Mock::given(method("PUT"))
        .and(path("/devices/1A2B"))
        .and(header("accept", "application/json"))
        .and(header("content-type", "application/json"))
        .and(header("user-agent", "sigfox-test/1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    client
        .put("/devices/1A2B", Some(&json!({ "name": "x" })), &QueryParams::new())
        .await
        .unwrap();
}

#[tokio::test]
async fn test_empty_success_body_is_empty_object() {
    let (server, client) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/devices/1A2B"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let value = client.delete("/devices/1A2B", &QueryParams::new()).await.unwrap();
    assert_eq!(value, json!({}));
}

#[tokio::test]
async fn test_missing_data_field_yields_empty_list() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/groups/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "paging": {} })))
        .mount(&server)
        .await;

    let items = client.get_list("/groups/", &QueryParams::new()).await.unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_non_json_success_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>proxy</html>"))
        .mount(&server)
        .await;

    let result = client.get("/devices/", &QueryParams::new()).await;
    match result {
        Err(Error::Deserialization { body, .. }) => assert_eq!(body, "<html>proxy</html>"),
        other => panic!("expected Deserialization error, got {other:?}"),
    }
}

// ── Error classification ────────────────────────────────────────────

#[tokio::test]
async fn test_401_maps_to_authentication() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Invalid credentials" })),
        )
        .mount(&server)
        .await;

    let err = client.get("/devices/", &QueryParams::new()).await.unwrap_err();
    assert!(
        matches!(err, Error::Authentication { ref message } if message == "Invalid credentials")
    );
    assert!(err.is_auth());
    assert_eq!(err.status(), Some(401));
}

#[tokio::test]
async fn test_403_maps_to_authorization() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/users/"))
        .respond_with(ResponseTemplate::new(403).set_body_string("Forbidden"))
        .mount(&server)
        .await;

    let err = client
        .post("/users/", Some(&json!({})), &QueryParams::new())
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Authorization { ref message } if message == "Forbidden"));
}

#[tokio::test]
async fn test_404_maps_to_not_found() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/ZZZZ"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Device not found" })),
        )
        .mount(&server)
        .await;

    let err = client.get("/devices/ZZZZ", &QueryParams::new()).await.unwrap_err();
    assert!(err.is_not_found());
    assert_eq!(err.to_string(), "Resource not found: Device not found");
}

#[tokio::test]
async fn test_500_maps_to_api_error_with_body() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client.get("/devices/", &QueryParams::new()).await.unwrap_err();
    match err {
        Error::Api {
            status,
            message,
            body,
        } => {
            assert_eq!(status, 500);
            assert_eq!(message, "Internal Server Error");
            assert_eq!(body, "Internal Server Error");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_timeout_maps_to_network() {
    let server = MockServer::start().await;
    let client = SigfoxClient::new(
        Credential::new("login", SecretString::from("secret")),
        &server.uri(),
        &TransportConfig::with_timeout(Duration::from_millis(100)),
    )
    .unwrap();

    Mock::given(method("GET"))
        .and(path("/devices/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [] }))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let err = client.get("/devices/", &QueryParams::new()).await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
    assert!(err.is_timeout());
    assert!(err.to_string().starts_with("Request timeout"));
}

#[tokio::test]
async fn test_unreachable_host_maps_to_network() {
    // Nothing listens on port 9 of the loopback interface.
    let client = SigfoxClient::new(
        Credential::new("login", SecretString::from("secret")),
        "http://127.0.0.1:9",
        &TransportConfig::default(),
    )
    .unwrap();

    let err = client.get("/devices/", &QueryParams::new()).await.unwrap_err();
    assert!(matches!(err, Error::Network { .. }));
    assert_eq!(err.status(), None);
}

// ── Pagination ──────────────────────────────────────────────────────

async fn mount_three_pages(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/devices/"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["A", "B"], true)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/devices/"))
        .and(query_param("offset", "2"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["C", "D"], true)))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/devices/"))
        .and(query_param("offset", "4"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["E"], false)))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_paginated_follows_next_until_absent() {
    let (server, client) = setup().await;
    mount_three_pages(&server).await;

    let params = QueryParams::new().num("limit", Some(2));
    let items = client.get_paginated("/devices/", &params, None).await.unwrap();

    let ids: Vec<_> = items.iter().map(|v| v["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["A", "B", "C", "D", "E"]);
}

#[tokio::test]
async fn test_paginated_truncates_to_max() {
    let (server, client) = setup().await;
    mount_three_pages(&server).await;

    let params = QueryParams::new().num("limit", Some(2));
    let items = client
        .get_paginated("/devices/", &params, Some(3))
        .await
        .unwrap();

    let ids: Vec<_> = items.iter().map(|v| v["id"].as_str().unwrap()).collect();
    assert_eq!(ids, ["A", "B", "C"]);
}

#[tokio::test]
async fn test_paginated_stops_on_empty_page() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/users/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "data": [], "paging": { "next": "more" } })),
        )
        .expect(1)
        .mount(&server)
        .await;

    let items = client
        .get_paginated("/users/", &QueryParams::new(), None)
        .await
        .unwrap();
    assert!(items.is_empty());
}

#[tokio::test]
async fn test_paginated_keeps_caller_filters_and_default_page_size() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/"))
        .and(query_param("deviceTypeId", "dt-1"))
        .and(query_param("offset", "0"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["A"], false)))
        .expect(1)
        .mount(&server)
        .await;

    let params = QueryParams::new().text("deviceTypeId", Some("dt-1"));
    let items = client.get_paginated("/devices/", &params, None).await.unwrap();
    assert_eq!(items.len(), 1);
}

#[tokio::test]
async fn test_paginated_error_mid_way_is_returned() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/devices/"))
        .and(query_param("offset", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["A", "B"], true)))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/devices/"))
        .and(query_param("offset", "2"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let params = QueryParams::new().num("limit", Some(2));
    let err = client
        .get_paginated("/devices/", &params, None)
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(503));
}

#[tokio::test]
async fn test_paginated_gives_up_after_page_bound() {
    let (server, client) = setup().await;

    // A server that always claims there is another page.
    Mock::given(method("GET"))
        .and(path("/devices/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(page(&["A"], true)))
        .mount(&server)
        .await;

    let params = QueryParams::new().num("limit", Some(1));
    let err = client
        .get_paginated("/devices/", &params, None)
        .await
        .unwrap_err();
    assert!(matches!(err, Error::PaginationLimit { pages } if pages == sigfox_api::MAX_PAGES));
}
