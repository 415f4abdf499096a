//! Stub GraphQL server for testing the Lens connector.
//!
//! Wraps wiremock; every stub is keyed on the request's `operationName`, so a
//! single server can answer the whole document catalog.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use wiremock::matchers::{body_partial_json, header, method};
use wiremock::{Mock, MockBuilder, MockServer, Request, Respond, ResponseTemplate};

/// A stub GraphQL endpoint.
pub struct MockGraphqlServer {
    server: MockServer,
}

/// Replays a fixed list of `data` payloads, repeating the last one.
struct SequenceResponder {
    counter: Arc<AtomicUsize>,
    payloads: Vec<serde_json::Value>,
    delay: Option<Duration>,
}

impl Respond for SequenceResponder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        let index = self.counter.fetch_add(1, Ordering::SeqCst);
        let payload = self
            .payloads
            .get(index)
            .or_else(|| self.payloads.last())
            .cloned()
            .unwrap_or(serde_json::Value::Null);
        let mut response = graphql_json(serde_json::json!({ "data": payload }));
        if let Some(delay) = self.delay {
            response = response.set_delay(delay);
        }
        response
    }
}

fn graphql_json(body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_json(body)
        .insert_header("content-type", "application/json")
}

fn stub_for(name: &str) -> MockBuilder {
    Mock::given(method("POST")).and(body_partial_json(
        serde_json::json!({ "operationName": name }),
    ))
}

fn request_operation(request: &Request) -> Option<String> {
    let body: serde_json::Value = serde_json::from_slice(&request.body).ok()?;
    body.get("operationName")?.as_str().map(ToString::to_string)
}

impl MockGraphqlServer {
    /// Start a new stub server.
    pub async fn start() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// GraphQL endpoint URL.
    #[must_use]
    pub fn url(&self) -> String {
        self.server.uri()
    }

    /// Underlying wiremock server for advanced configuration.
    #[must_use]
    pub const fn inner(&self) -> &MockServer {
        &self.server
    }

    /// Answer `operation_name` with `{"data": data}`.
    pub async fn expect_data(&self, operation_name: &str, data: serde_json::Value) {
        stub_for(operation_name)
            .respond_with(graphql_json(serde_json::json!({ "data": data })))
            .mount(&self.server)
            .await;
    }

    /// Answer `operation_name` only when it carries `Authorization: Bearer <token>`.
    pub async fn expect_data_with_bearer(
        &self,
        operation_name: &str,
        token: &str,
        data: serde_json::Value,
    ) {
        stub_for(operation_name)
            .and(header("authorization", format!("Bearer {token}").as_str()))
            .respond_with(graphql_json(serde_json::json!({ "data": data })))
            .mount(&self.server)
            .await;
    }

    /// Answer `operation_name` with a GraphQL error list and no data.
    pub async fn expect_errors(&self, operation_name: &str, errors: serde_json::Value) {
        stub_for(operation_name)
            .respond_with(graphql_json(serde_json::json!({
                "data": null,
                "errors": errors
            })))
            .mount(&self.server)
            .await;
    }

    /// Answer `operation_name` with a bare HTTP status.
    pub async fn expect_status(&self, operation_name: &str, status: u16) {
        stub_for(operation_name)
            .respond_with(ResponseTemplate::new(status).set_body_string("stub failure"))
            .mount(&self.server)
            .await;
    }

    /// Answer `operation_name` after `delay`.
    pub async fn expect_delayed(
        &self,
        operation_name: &str,
        delay: Duration,
        data: serde_json::Value,
    ) {
        stub_for(operation_name)
            .respond_with(graphql_json(serde_json::json!({ "data": data })).set_delay(delay))
            .mount(&self.server)
            .await;
    }

    /// Answer successive calls with successive `payloads` (the last one
    /// repeats) and return a counter of calls received.
    pub async fn expect_sequence(
        &self,
        operation_name: &str,
        payloads: Vec<serde_json::Value>,
        delay: Option<Duration>,
    ) -> Arc<AtomicUsize> {
        let counter = Arc::new(AtomicUsize::new(0));
        stub_for(operation_name)
            .respond_with(SequenceResponder {
                counter: Arc::clone(&counter),
                payloads,
                delay,
            })
            .mount(&self.server)
            .await;
        counter
    }

    /// All requests received so far.
    pub async fn received_requests(&self) -> Vec<Request> {
        self.server.received_requests().await.unwrap_or_default()
    }

    /// Requests received for `operation_name`.
    pub async fn requests_for(&self, operation_name: &str) -> Vec<Request> {
        self.received_requests()
            .await
            .into_iter()
            .filter(|request| request_operation(request).as_deref() == Some(operation_name))
            .collect()
    }

    /// Parsed `variables` object of every request for `operation_name`.
    pub async fn variables_for(&self, operation_name: &str) -> Vec<serde_json::Value> {
        self.requests_for(operation_name)
            .await
            .iter()
            .filter_map(|request| {
                let body: serde_json::Value = serde_json::from_slice(&request.body).ok()?;
                body.get("variables").cloned()
            })
            .collect()
    }

    /// `Authorization` header of the last request for `operation_name`.
    pub async fn last_authorization(&self, operation_name: &str) -> Option<String> {
        self.requests_for(operation_name)
            .await
            .last()
            .and_then(|request| request.headers.get("authorization").cloned())
            .and_then(|value| value.to_str().ok().map(ToString::to_string))
    }

    /// Verify that no requests were received.
    ///
    /// # Panics
    ///
    /// Panics if any requests were received.
    pub async fn assert_no_requests(&self) {
        let received = self.received_requests().await;
        assert!(
            received.is_empty(),
            "Expected no requests but received {}: {:?}",
            received.len(),
            received.iter().map(request_operation).collect::<Vec<_>>()
        );
    }
}
