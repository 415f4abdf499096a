use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use lens_graphql::{
    GraphqlClientBuilder, GraphqlClientError, GraphqlQuery, GraphqlRequest, GraphqlResponse,
};

const PROFILE_QUERY: &str = "query Profile($handle: Handle) { profile(request: { handle: $handle }) { id handle } }";

#[derive(Debug, Serialize)]
struct HandleVars {
    handle: String,
}

#[derive(Debug, Deserialize)]
struct ProfileData {
    profile: Option<Profile>,
}

#[derive(Debug, Deserialize)]
struct Profile {
    id: String,
    handle: String,
}

fn profile_request(handle: &str) -> GraphqlRequest<HandleVars> {
    GraphqlRequest::new(
        GraphqlQuery::from_static(PROFILE_QUERY),
        HandleVars {
            handle: handle.to_string(),
        },
    )
    .with_operation_name("Profile")
}

struct CountingResponder {
    counter: Arc<AtomicUsize>,
    body: serde_json::Value,
}

impl Respond for CountingResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        self.counter.fetch_add(1, Ordering::SeqCst);
        ResponseTemplate::new(200).set_body_json(self.body.clone())
    }
}

#[tokio::test]
async fn execute_request_posts_wire_body() {
    let server = MockServer::start().await;

    let expected_body = serde_json::json!({
        "query": PROFILE_QUERY,
        "variables": { "handle": "alice" },
        "operationName": "Profile",
    });

    Mock::given(method("POST"))
        .and(path("/"))
        .and(body_json(&expected_body))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": { "profile": { "id": "0x01", "handle": "alice" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphqlClientBuilder::new(server.uri())
        .with_service_name("test")
        .build()
        .expect("client");

    let response: GraphqlResponse<ProfileData> = client
        .execute_request(profile_request("alice"), None)
        .await
        .expect("query should succeed");

    assert!(response.is_ok());
    let profile = response.data.and_then(|data| data.profile).expect("profile");
    assert_eq!(profile.id, "0x01");
    assert_eq!(profile.handle, "alice");
}

#[tokio::test]
async fn bearer_token_is_attached_when_given() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header("authorization", "Bearer access-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {"ping": "pong"}})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = GraphqlClientBuilder::new(server.uri()).build().expect("client");
    let data: serde_json::Value = client
        .execute_strict(
            GraphqlRequest::new(GraphqlQuery::new("query Ping { ping }"), serde_json::json!({})),
            Some("access-1"),
        )
        .await
        .expect("authenticated request");

    assert_eq!(data, serde_json::json!({"ping": "pong"}));
}

#[tokio::test]
async fn no_authorization_header_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {"ping": "pong"}})),
        )
        .mount(&server)
        .await;

    let client = GraphqlClientBuilder::new(server.uri()).build().expect("client");
    let _: serde_json::Value = client
        .execute_strict(
            GraphqlRequest::new(GraphqlQuery::new("query Ping { ping }"), serde_json::json!({})),
            None,
        )
        .await
        .expect("request");

    let received = server.received_requests().await.expect("recording enabled");
    assert_eq!(received.len(), 1);
    assert!(!received[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn execute_strict_surfaces_graphql_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "errors": [{"message": "Handle not found", "extensions": {"code": "BAD_USER_INPUT"}}]
        })))
        .mount(&server)
        .await;

    let client = GraphqlClientBuilder::new(server.uri()).build().expect("client");
    let err = client
        .execute_strict::<_, ProfileData>(profile_request("ghost"), None)
        .await
        .expect_err("should fail");

    match err {
        GraphqlClientError::GraphqlErrors { errors } => {
            assert_eq!(errors.len(), 1);
            assert_eq!(errors[0].message, "Handle not found");
            assert_eq!(errors[0].code(), Some("BAD_USER_INPUT"));
        }
        other => panic!("expected GraphQL errors, got {other:?}"),
    }
    assert_eq!(client.metrics().requests_error, 1);
}

#[tokio::test]
async fn execute_strict_without_data_is_protocol_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = GraphqlClientBuilder::new(server.uri()).build().expect("client");
    let err = client
        .execute_strict::<_, ProfileData>(profile_request("alice"), None)
        .await
        .expect_err("should fail");

    assert!(matches!(err, GraphqlClientError::Protocol { .. }));
}

#[tokio::test]
async fn http_status_error_keeps_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("upstream down"))
        .mount(&server)
        .await;

    let client = GraphqlClientBuilder::new(server.uri()).build().expect("client");
    let err = client
        .execute_request::<_, ProfileData>(profile_request("alice"), None)
        .await
        .expect_err("should fail");

    match err {
        GraphqlClientError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 502);
            assert_eq!(body, "upstream down");
        }
        other => panic!("expected HTTP status error, got {other:?}"),
    }
}

#[tokio::test]
async fn unauthorized_status_is_classified() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(401).set_body_string("expired"))
        .mount(&server)
        .await;

    let client = GraphqlClientBuilder::new(server.uri()).build().expect("client");
    let err = client
        .execute_request::<_, ProfileData>(profile_request("alice"), Some("stale"))
        .await
        .expect_err("should fail");

    assert!(err.is_unauthorized());
}

#[tokio::test]
async fn malformed_body_is_json_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let client = GraphqlClientBuilder::new(server.uri()).build().expect("client");
    let err = client
        .execute_request::<_, ProfileData>(profile_request("alice"), None)
        .await
        .expect_err("should fail");

    assert!(matches!(err, GraphqlClientError::Json(_)));
}

#[tokio::test]
async fn slow_response_times_out() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"data": {"ping": "pong"}}))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = GraphqlClientBuilder::new(server.uri())
        .with_timeout(Duration::from_millis(50))
        .build()
        .expect("client");

    let err = client
        .execute_request::<_, serde_json::Value>(
            GraphqlRequest::new(GraphqlQuery::new("query Ping { ping }"), serde_json::json!({})),
            None,
        )
        .await
        .expect_err("should time out");

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn metrics_count_requests() {
    let server = MockServer::start().await;
    let counter = Arc::new(AtomicUsize::new(0));

    Mock::given(method("POST"))
        .respond_with(CountingResponder {
            counter: counter.clone(),
            body: serde_json::json!({"data": {"profile": null}}),
        })
        .mount(&server)
        .await;

    let client = GraphqlClientBuilder::new(server.uri()).build().expect("client");
    for handle in ["alice", "bob"] {
        let response: GraphqlResponse<ProfileData> = client
            .execute_request(profile_request(handle), None)
            .await
            .expect("request");
        assert!(response.data.expect("data").profile.is_none());
    }

    let metrics = client.metrics();
    assert_eq!(counter.load(Ordering::SeqCst), 2);
    assert_eq!(metrics.requests_total, 2);
    assert_eq!(metrics.requests_success, 2);
    assert_eq!(metrics.requests_error, 0);
}
