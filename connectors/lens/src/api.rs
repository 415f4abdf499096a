//! High-level Lens API.
//!
//! One method per catalog document. Everything funnels through
//! [`LensClient::execute`], which decides whether to attach the session's
//! access token and projects the result.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::warn;

use crate::client::LensApiClient;
use crate::config::LensConfig;
use crate::documents::{
    self, Document, ADD_REACTION, CREATE_COMMENT, CREATE_MIRROR, CREATE_POST, CREATE_PROFILE,
    DEFAULT_PROFILE, EXPLORE_PROFILES, EXPLORE_PUBLICATIONS, FEED, FOLLOW, HAS_TX_BEEN_INDEXED,
    NFTS, NOTIFICATIONS, PING, PROFILE, PUBLICATION, SEARCH, TIMELINE, UNFOLLOW,
};
use crate::error::{LensError, LensResult, MissingCredential};
use crate::session::SessionManager;
use crate::types::{Challenge, Reaction, TokenPair};

/// Lens API client bound to one wallet session.
#[derive(Debug, Clone)]
pub struct LensClient {
    api: LensApiClient,
    session: Arc<SessionManager>,
}

impl LensClient {
    /// Create a client for `address`.
    pub fn new(config: &LensConfig, address: impl Into<String>) -> LensResult<Self> {
        let api = LensApiClient::new(config)?;
        let session = Arc::new(SessionManager::new(api.clone(), address));
        Ok(Self { api, session })
    }

    /// The session shared by every call on this client.
    #[must_use]
    pub fn session(&self) -> &Arc<SessionManager> {
        &self.session
    }

    /// Underlying document runner.
    #[must_use]
    pub const fn api(&self) -> &LensApiClient {
        &self.api
    }

    /// Run any catalog document.
    ///
    /// Documents that need authorization fail with
    /// [`LensError::NoSession`] before anything is sent when the session holds
    /// no access token. An authorization failure on such a document marks the
    /// session expired; the caller decides whether to refresh.
    pub async fn execute(&self, document: &Document, variables: Value) -> LensResult<Value> {
        let bearer = if document.auth {
            Some(
                self.session
                    .current_access_token()
                    .ok_or(LensError::NoSession(MissingCredential::AccessToken))?,
            )
        } else {
            None
        };

        let result = self
            .api
            .execute(document, variables, bearer.as_deref())
            .await;

        if document.auth {
            if let Err(err) = &result {
                if err.is_auth_failure() {
                    warn!(operation = document.operation_name, error = %err, "Authorization refused");
                    self.session.mark_expired();
                }
            }
        }

        result
    }

    /// Run the catalog document named `name` (e.g. `"get_profile"`).
    ///
    /// Session documents (challenge, authenticate, refresh, verify) are
    /// refused; they go through [`session`](Self::session) so tokens are
    /// stored and refreshes stay single-flight.
    pub async fn call(&self, name: &str, variables: Value) -> LensResult<Value> {
        let document = documents::find(name)
            .ok_or_else(|| LensError::Config(format!("unknown operation {name:?}")))?;
        if documents::is_session_document(document) {
            return Err(LensError::Config(format!(
                "{name:?} is a session operation; use the session methods"
            )));
        }
        self.execute(document, variables).await
    }

    // Session

    /// Request a challenge for the session address.
    pub async fn get_challenge(&self) -> LensResult<Challenge> {
        self.session.request_challenge().await
    }

    /// Authenticate with a signed challenge.
    pub async fn authenticate_sig(&self, signature: &str) -> LensResult<TokenPair> {
        self.session.authenticate(signature).await
    }

    /// Refresh the session's token pair.
    pub async fn get_new_access_token(&self) -> LensResult<TokenPair> {
        self.session.refresh().await
    }

    /// Check whether `access_token` is still valid.
    pub async fn verify_session(&self, access_token: &str) -> LensResult<bool> {
        self.session.verify(access_token).await
    }

    // Discovery

    /// Most-commented recent publications.
    pub async fn explore_publications(&self) -> LensResult<Value> {
        self.execute(&EXPLORE_PUBLICATIONS, json!({})).await
    }

    /// Profiles with the most followers.
    pub async fn explore_profiles(&self) -> LensResult<Value> {
        self.execute(&EXPLORE_PROFILES, json!({})).await
    }

    /// Profile search.
    pub async fn search_lens(&self, query: &str) -> LensResult<Value> {
        self.execute(&SEARCH, json!({ "query": query })).await
    }

    /// API health check. Returns the raw `data` object.
    pub async fn check_ping(&self) -> LensResult<Value> {
        self.execute(&PING, json!({})).await
    }

    /// Indexing status of a transaction.
    pub async fn check_transaction_indexed(&self, tx_hash: &str) -> LensResult<Value> {
        self.execute(&HAS_TX_BEEN_INDEXED, json!({ "txHash": tx_hash }))
            .await
    }

    // Profiles

    /// Profile by handle.
    pub async fn get_profile(&self, handle: &str) -> LensResult<Value> {
        self.execute(&PROFILE, json!({ "handle": handle })).await
    }

    /// Default profile of a wallet.
    pub async fn get_default_profile(&self, address: &str) -> LensResult<Value> {
        self.execute(&DEFAULT_PROFILE, json!({ "address": address }))
            .await
    }

    /// Claim a handle. Testnet only.
    pub async fn create_new_user(&self, handle: &str) -> LensResult<Value> {
        self.execute(&CREATE_PROFILE, json!({ "handle": handle }))
            .await
    }

    /// Typed data for following `profile_id`.
    pub async fn follow_profile(&self, profile_id: &str) -> LensResult<Value> {
        self.execute(&FOLLOW, json!({ "profile": profile_id })).await
    }

    /// Typed data for unfollowing `profile_id`.
    pub async fn unfollow_profile(&self, profile_id: &str) -> LensResult<Value> {
        self.execute(&UNFOLLOW, json!({ "profile": profile_id })).await
    }

    /// Notifications for `profile_id`.
    pub async fn get_all_notifications(&self, profile_id: &str) -> LensResult<Value> {
        self.execute(&NOTIFICATIONS, json!({ "profile": profile_id }))
            .await
    }

    /// NFTs owned by `address` on Ethereum mainnet.
    pub async fn get_nfts(&self, address: &str) -> LensResult<Value> {
        self.execute(&NFTS, json!({ "address": address })).await
    }

    // Publications

    /// Publication by id.
    pub async fn get_publication(&self, publication_id: &str) -> LensResult<Value> {
        self.execute(&PUBLICATION, json!({ "publicationId": publication_id }))
            .await
    }

    /// Timeline of `profile_id`.
    pub async fn get_timeline(&self, profile_id: &str) -> LensResult<Value> {
        self.execute(&TIMELINE, json!({ "profile": profile_id }))
            .await
    }

    /// Feed of `profile_id`.
    pub async fn get_feed(&self, profile_id: &str) -> LensResult<Value> {
        self.execute(&FEED, json!({ "profile": profile_id })).await
    }

    /// Typed data for a post pointing at `content_uri`.
    pub async fn create_post(&self, profile_id: &str, content_uri: &str) -> LensResult<Value> {
        self.execute(
            &CREATE_POST,
            json!({ "profile": profile_id, "contentURI": content_uri }),
        )
        .await
    }

    /// Typed data for a comment on `publication_id`.
    pub async fn create_comment(
        &self,
        profile_id: &str,
        content_uri: &str,
        publication_id: &str,
    ) -> LensResult<Value> {
        self.execute(
            &CREATE_COMMENT,
            json!({
                "profile": profile_id,
                "contentURI": content_uri,
                "publicationId": publication_id,
            }),
        )
        .await
    }

    /// Typed data for mirroring `publication_id`.
    pub async fn mirror_post(&self, profile_id: &str, publication_id: &str) -> LensResult<Value> {
        self.execute(
            &CREATE_MIRROR,
            json!({ "profile": profile_id, "publicationId": publication_id }),
        )
        .await
    }

    /// React to `publication_id`.
    pub async fn add_reaction(
        &self,
        profile_id: &str,
        publication_id: &str,
        reaction: Reaction,
    ) -> LensResult<Value> {
        self.execute(
            &ADD_REACTION,
            json!({
                "profile": profile_id,
                "publicationId": publication_id,
                "reaction": reaction,
            }),
        )
        .await
    }
}
