use std::time::Duration;

use serde_json::json;

use lens_connector::{
    documents, LensClient, LensConfig, LensError, MissingCredential, Reaction, SessionState,
};
use lens_graphql::GraphqlClientError;
use lens_testkit::{init_test_tracing, MockGraphqlServer};

const ADDRESS: &str = "0x3A5bd1E37b099aE3386D13947b6a90d97675e5e3";

async fn setup() -> (MockGraphqlServer, LensClient) {
    init_test_tracing();
    let mock = MockGraphqlServer::start().await;
    let config = LensConfig::default().with_api_url(mock.url());
    let lens = LensClient::new(&config, ADDRESS).expect("client");
    (mock, lens)
}

async fn signed_in() -> (MockGraphqlServer, LensClient) {
    let (mock, lens) = setup().await;
    mock.expect_data(
        "Authenticate",
        json!({ "authenticate": { "accessToken": "a1", "refreshToken": "r1" } }),
    )
    .await;
    lens.authenticate_sig("0xsig").await.expect("authenticate");
    (mock, lens)
}

#[tokio::test]
async fn get_profile_returns_projected_profile() {
    let (mock, lens) = setup().await;
    mock.expect_data(
        "Profile",
        json!({ "profile": { "id": "0x01", "handle": "alice.test" } }),
    )
    .await;

    let profile = lens.get_profile("alice.test").await.expect("profile");

    assert_eq!(profile, json!({ "id": "0x01", "handle": "alice.test" }));
    assert_eq!(
        mock.variables_for("Profile").await,
        vec![json!({ "handle": "alice.test" })]
    );
    assert_eq!(mock.last_authorization("Profile").await, None);
}

#[tokio::test]
async fn null_profile_is_not_found() {
    let (mock, lens) = setup().await;
    mock.expect_data("Profile", json!({ "profile": null })).await;

    let err = lens.get_profile("ghost.test").await.unwrap_err();

    match err {
        LensError::NotFound { operation, path } => {
            assert_eq!(operation, "Profile");
            assert_eq!(path, "profile");
        }
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn ping_returns_whole_data_object() {
    let (mock, lens) = setup().await;
    mock.expect_data("Ping", json!({ "ping": "pong" })).await;

    assert_eq!(lens.check_ping().await.expect("ping"), json!({ "ping": "pong" }));
}

#[tokio::test]
async fn explore_publications_returns_items() {
    let (mock, lens) = setup().await;
    mock.expect_data(
        "ExplorePublications",
        json!({
            "explorePublications": {
                "items": [{ "__typename": "Post", "id": "0x01-0x01" }],
                "pageInfo": { "prev": null, "next": "{}", "totalCount": 1 }
            }
        }),
    )
    .await;

    let items = lens.explore_publications().await.expect("explore");

    assert_eq!(items, json!([{ "__typename": "Post", "id": "0x01-0x01" }]));
    assert_eq!(
        mock.variables_for("ExplorePublications").await,
        vec![json!({})]
    );
}

#[tokio::test]
async fn authenticated_document_without_session_sends_nothing() {
    let (mock, lens) = setup().await;

    let err = lens.create_post("0x01", "ipfs://post").await.unwrap_err();

    assert!(matches!(
        err,
        LensError::NoSession(MissingCredential::AccessToken)
    ));
    mock.assert_no_requests().await;
}

#[tokio::test]
async fn authenticated_document_carries_bearer() {
    let (mock, lens) = signed_in().await;
    mock.expect_data_with_bearer(
        "CreatePostTypedData",
        "a1",
        json!({ "createPostTypedData": { "id": "typed-1" } }),
    )
    .await;

    let data = lens.create_post("0x01", "ipfs://post").await.expect("post");

    assert_eq!(data["createPostTypedData"]["id"], "typed-1");
    assert_eq!(
        mock.last_authorization("CreatePostTypedData").await.as_deref(),
        Some("Bearer a1")
    );
    assert_eq!(
        mock.variables_for("CreatePostTypedData").await,
        vec![json!({ "profile": "0x01", "contentURI": "ipfs://post" })]
    );
}

#[tokio::test]
async fn public_document_never_carries_bearer() {
    let (mock, lens) = signed_in().await;
    mock.expect_data("Search", json!({ "search": { "items": [] } }))
        .await;

    let items = lens.search_lens("alice").await.expect("search");

    assert_eq!(items, json!([]));
    assert_eq!(mock.last_authorization("Search").await, None);
}

#[tokio::test]
async fn refreshed_token_is_used_for_later_calls() {
    let (mock, lens) = signed_in().await;
    mock.expect_data(
        "Refresh",
        json!({ "refresh": { "accessToken": "a2", "refreshToken": "r2" } }),
    )
    .await;
    mock.expect_data_with_bearer(
        "CreateFollowTypedData",
        "a2",
        json!({ "createFollowTypedData": { "id": "follow-1" } }),
    )
    .await;

    lens.get_new_access_token().await.expect("refresh");
    let typed = lens.follow_profile("0x02").await.expect("follow");

    assert_eq!(typed, json!({ "id": "follow-1" }));
}

#[tokio::test]
async fn unauthorized_response_marks_session_expired() {
    let (mock, lens) = signed_in().await;
    mock.expect_errors(
        "CreateUnfollowTypedData",
        json!([{ "message": "Authentication required", "extensions": { "code": "UNAUTHENTICATED" } }]),
    )
    .await;

    let err = lens.unfollow_profile("0x02").await.unwrap_err();

    assert!(err.is_auth_failure());
    assert!(matches!(err, LensError::Graphql { operation: "CreateUnfollowTypedData", .. }));
    assert_eq!(lens.session().state(), SessionState::Expired);
    assert_eq!(lens.session().current_access_token().as_deref(), Some("a1"));
    assert!(mock.requests_for("Refresh").await.is_empty());
}

#[tokio::test]
async fn http_401_on_authenticated_document_marks_session_expired() {
    let (mock, lens) = signed_in().await;
    mock.expect_status("CreateMirrorTypedData", 401).await;

    let err = lens.mirror_post("0x01", "0x02-0x01").await.unwrap_err();

    assert!(err.is_auth_failure());
    assert_eq!(lens.session().state(), SessionState::Expired);
}

#[tokio::test]
async fn graphql_errors_on_public_document_keep_session() {
    let (mock, lens) = signed_in().await;
    mock.expect_errors(
        "Publication",
        json!([{ "message": "Invalid publication id", "extensions": { "code": "BAD_USER_INPUT" } }]),
    )
    .await;

    let err = lens.get_publication("nope").await.unwrap_err();

    assert!(matches!(err, LensError::Graphql { operation: "Publication", .. }));
    assert_eq!(err.graphql_errors()[0].message, "Invalid publication id");
    assert_eq!(lens.session().state(), SessionState::Authenticated);
}

#[tokio::test]
async fn server_error_is_remote() {
    let (mock, lens) = setup().await;
    mock.expect_status("Timeline", 500).await;

    let err = lens.get_timeline("0x01").await.unwrap_err();

    match err {
        LensError::Remote(GraphqlClientError::HttpStatus { status, .. }) => {
            assert_eq!(status.as_u16(), 500);
        }
        other => panic!("expected remote status error, got {other:?}"),
    }
}

#[tokio::test]
async fn slow_response_is_a_timeout() {
    init_test_tracing();
    let mock = MockGraphqlServer::start().await;
    mock.expect_delayed("Ping", Duration::from_secs(2), json!({ "ping": "pong" }))
        .await;
    let config = LensConfig::default()
        .with_api_url(mock.url())
        .with_timeout(Duration::from_millis(100));
    let lens = LensClient::new(&config, ADDRESS).expect("client");

    let err = lens.check_ping().await.unwrap_err();

    assert!(err.is_timeout(), "expected timeout, got {err:?}");
}

#[tokio::test]
async fn add_reaction_sends_reaction_enum() {
    let (mock, lens) = signed_in().await;
    mock.expect_data("AddReaction", json!({ "addReaction": null }))
        .await;

    lens.add_reaction("0x01", "0x02-0x01", Reaction::Upvote)
        .await
        .expect("reaction");

    assert_eq!(
        mock.variables_for("AddReaction").await,
        vec![json!({
            "profile": "0x01",
            "publicationId": "0x02-0x01",
            "reaction": "UPVOTE",
        })]
    );
}

#[tokio::test]
async fn transaction_check_sends_tx_hash() {
    let (mock, lens) = setup().await;
    let data = json!({
        "hasTxHashBeenIndexed": { "__typename": "TransactionIndexedResult", "indexed": true }
    });
    mock.expect_data("HasTxHashBeenIndexed", data.clone()).await;

    let result = lens.check_transaction_indexed("0xfeed").await.expect("tx");

    assert_eq!(result, data);
    assert_eq!(
        mock.variables_for("HasTxHashBeenIndexed").await,
        vec![json!({ "txHash": "0xfeed" })]
    );
}

#[tokio::test]
async fn call_runs_documents_by_name() {
    let (mock, lens) = setup().await;
    mock.expect_data(
        "DefaultProfile",
        json!({ "defaultProfile": { "id": "0x05" } }),
    )
    .await;

    let profile = lens
        .call("get_default_profile", json!({ "address": ADDRESS }))
        .await
        .expect("default profile");
    assert_eq!(profile, json!({ "id": "0x05" }));

    let err = lens.call("get_everything", json!({})).await.unwrap_err();
    assert!(matches!(err, LensError::Config(_)));
}

#[tokio::test]
async fn call_refuses_session_documents() {
    let (mock, lens) = setup().await;

    for name in [
        "get_challenge",
        "authenticate_sig",
        "get_new_access_token",
        "verify_session",
    ] {
        let err = lens
            .call(name, json!({ "address": ADDRESS, "signature": "0xsig" }))
            .await
            .unwrap_err();
        assert!(matches!(err, LensError::Config(_)), "{name}: {err:?}");
    }

    mock.assert_no_requests().await;
    assert_eq!(lens.session().state(), SessionState::Unauthenticated);
}

#[tokio::test]
async fn every_document_reaches_the_server_under_its_operation_name() {
    let (mock, lens) = signed_in().await;
    for document in documents::catalog() {
        mock.expect_data(document.operation_name, json!({ "stub": true }))
            .await;
    }

    for document in documents::catalog() {
        let before = mock.requests_for(document.operation_name).await.len();
        let _ = lens.execute(document, json!({})).await;
        let after = mock.requests_for(document.operation_name).await.len();
        assert_eq!(after, before + 1, "{}", document.name);
    }
}
