//! Challenge/response session lifecycle.
//!
//! A [`SessionManager`] belongs to one wallet address. It walks the
//! handshake (challenge, sign, authenticate), holds the resulting token pair
//! and refreshes it on request. Concurrent refreshes share one upstream call.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::{BoxFuture, FutureExt, Shared};
use lens_graphql::GraphqlError;
use parking_lot::{Mutex, RwLock};
use serde_json::json;
use tracing::{debug, info, instrument, warn};

use crate::client::LensApiClient;
use crate::documents::{AUTHENTICATE, CHALLENGE, REFRESH, VERIFY};
use crate::error::{LensError, LensResult, MissingCredential};
use crate::types::{Challenge, SessionState, TokenPair};

/// Produces a wallet signature over a challenge text.
///
/// Implementations wrap whatever key custody the application uses; failures
/// should be reported as [`LensError::Signer`].
#[async_trait]
pub trait ChallengeSigner: Send + Sync {
    /// Sign `challenge.text`.
    async fn sign(&self, challenge: &Challenge) -> LensResult<String>;
}

#[derive(Debug, Default)]
struct SessionSlot {
    tokens: Option<TokenPair>,
    signature: Option<String>,
    state: SessionState,
    /// Bumped whenever the pair is replaced by authentication or cleared.
    generation: u64,
}

type RefreshFuture = Shared<BoxFuture<'static, LensResult<TokenPair>>>;

/// A refresh started for one token pair.
struct RefreshFlight {
    generation: u64,
    refresh_token: String,
    future: RefreshFuture,
}

impl RefreshFlight {
    /// Whether a caller holding `refresh_token` at `generation` may join.
    fn serves(&self, generation: u64, refresh_token: &str) -> bool {
        self.generation == generation
            && self.refresh_token == refresh_token
            && self.future.peek().is_none()
    }
}

/// Clears the flight slot once the flight it watches has completed, however
/// the waiting caller leaves.
struct FlightCleanup<'a> {
    current: &'a Mutex<Option<RefreshFlight>>,
    future: RefreshFuture,
}

impl Drop for FlightCleanup<'_> {
    fn drop(&mut self) {
        let mut current = self.current.lock();
        let finished = current.as_ref().is_some_and(|flight| {
            flight.future.ptr_eq(&self.future) && flight.future.peek().is_some()
        });
        if finished {
            *current = None;
        }
    }
}

/// Session state for one wallet address.
pub struct SessionManager {
    api: LensApiClient,
    address: String,
    slot: Arc<RwLock<SessionSlot>>,
    refresh_flight: Mutex<Option<RefreshFlight>>,
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let slot = self.slot.read();
        f.debug_struct("SessionManager")
            .field("address", &self.address)
            .field("state", &slot.state)
            .field("has_tokens", &slot.tokens.is_some())
            .finish_non_exhaustive()
    }
}

impl SessionManager {
    /// Create an unauthenticated session for `address`.
    #[must_use]
    pub fn new(api: LensApiClient, address: impl Into<String>) -> Self {
        Self {
            api,
            address: address.into(),
            slot: Arc::new(RwLock::new(SessionSlot::default())),
            refresh_flight: Mutex::new(None),
        }
    }

    /// Wallet address this session authenticates.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Current handshake state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.slot.read().state
    }

    /// Current token pair, if any.
    #[must_use]
    pub fn tokens(&self) -> Option<TokenPair> {
        self.slot.read().tokens.clone()
    }

    /// Last signature forwarded to `authenticate`.
    #[must_use]
    pub fn signature(&self) -> Option<String> {
        self.slot.read().signature.clone()
    }

    /// Access token of the current pair.
    #[must_use]
    pub fn current_access_token(&self) -> Option<String> {
        self.slot
            .read()
            .tokens
            .as_ref()
            .map(|tokens| tokens.access_token.clone())
    }

    /// Ask the server for a challenge to sign.
    #[instrument(skip_all, fields(address = %self.address))]
    pub async fn request_challenge(&self) -> LensResult<Challenge> {
        let text: String = self
            .api
            .execute_as(&CHALLENGE, json!({ "address": self.address }), None)
            .await?;

        let mut slot = self.slot.write();
        if slot.state != SessionState::Authenticated {
            slot.state = SessionState::ChallengeIssued;
        }
        drop(slot);
        debug!("Challenge issued");

        Ok(Challenge { text })
    }

    /// Exchange a signed challenge for a token pair.
    #[instrument(skip_all, fields(address = %self.address))]
    pub async fn authenticate(&self, signature: &str) -> LensResult<TokenPair> {
        let result = self
            .api
            .execute_as::<TokenPair>(
                &AUTHENTICATE,
                json!({ "address": self.address, "signature": signature }),
                None,
            )
            .await;

        match result {
            Ok(tokens) => {
                let mut slot = self.slot.write();
                slot.tokens = Some(tokens.clone());
                slot.signature = Some(signature.to_string());
                slot.state = SessionState::Authenticated;
                slot.generation += 1;
                drop(slot);
                info!("Session authenticated");
                Ok(tokens)
            }
            Err(err) => {
                let err = classify_rejection(err);
                if matches!(err, LensError::AuthRejected { .. }) {
                    let mut slot = self.slot.write();
                    if slot.state == SessionState::ChallengeIssued {
                        slot.state = SessionState::Unauthenticated;
                    }
                    drop(slot);
                    warn!(error = %err, "Authentication rejected");
                }
                Err(err)
            }
        }
    }

    /// Challenge, sign and authenticate in one step.
    pub async fn login(&self, signer: &dyn ChallengeSigner) -> LensResult<TokenPair> {
        let challenge = self.request_challenge().await?;
        let signature = signer.sign(&challenge).await?;
        self.authenticate(&signature).await
    }

    /// Replace the token pair using the stored refresh token.
    ///
    /// Callers arriving while a refresh of the current pair is in flight wait
    /// for it and receive its result instead of issuing their own. A flight
    /// left behind by cancelled callers is resumed only while the session
    /// still holds the pair it was started for.
    pub async fn refresh(&self) -> LensResult<TokenPair> {
        let future = self.join_or_start_refresh()?;
        let _cleanup = FlightCleanup {
            current: &self.refresh_flight,
            future: future.clone(),
        };
        future.await
    }

    fn join_or_start_refresh(&self) -> LensResult<RefreshFuture> {
        let mut current = self.refresh_flight.lock();
        let (refresh_token, generation) = {
            let slot = self.slot.read();
            match slot.tokens.as_ref() {
                Some(tokens) => (tokens.refresh_token.clone(), slot.generation),
                None => {
                    *current = None;
                    return Err(LensError::NoSession(MissingCredential::RefreshToken));
                }
            }
        };

        if let Some(flight) = current.as_ref() {
            if flight.serves(generation, &refresh_token) {
                debug!("Joining in-flight refresh");
                return Ok(flight.future.clone());
            }
            debug!("Discarding stale refresh flight");
        }

        let future = refresh_once(
            self.api.clone(),
            Arc::clone(&self.slot),
            refresh_token.clone(),
            generation,
        )
        .boxed()
        .shared();
        *current = Some(RefreshFlight {
            generation,
            refresh_token,
            future: future.clone(),
        });
        Ok(future)
    }

    /// Ask the server whether `access_token` is valid. Never changes the session.
    pub async fn verify(&self, access_token: &str) -> LensResult<bool> {
        self.api
            .execute_as(&VERIFY, json!({ "accessToken": access_token }), None)
            .await
    }

    /// Record that an authenticated call was refused.
    pub fn mark_expired(&self) {
        let mut slot = self.slot.write();
        if slot.state == SessionState::Authenticated {
            slot.state = SessionState::Expired;
            drop(slot);
            info!(address = %self.address, "Session expired");
        }
    }

    /// Forget tokens and signature.
    pub fn sign_out(&self) {
        let mut slot = self.slot.write();
        slot.tokens = None;
        slot.signature = None;
        slot.state = SessionState::Unauthenticated;
        slot.generation += 1;
        drop(slot);
        info!(address = %self.address, "Signed out");
    }
}

#[instrument(skip_all)]
async fn refresh_once(
    api: LensApiClient,
    slot: Arc<RwLock<SessionSlot>>,
    refresh_token: String,
    generation: u64,
) -> LensResult<TokenPair> {
    let result = api
        .execute_as::<TokenPair>(&REFRESH, json!({ "refreshToken": refresh_token }), None)
        .await;

    let mut guard = slot.write();
    match result {
        Ok(tokens) => {
            if guard.generation == generation {
                guard.tokens = Some(tokens.clone());
                guard.state = SessionState::Authenticated;
                drop(guard);
                info!("Session refreshed");
            } else {
                drop(guard);
                debug!("Session changed during refresh; keeping newer tokens");
            }
            Ok(tokens)
        }
        Err(err) => {
            if err.is_auth_failure() && guard.generation == generation {
                guard.state = SessionState::Expired;
            }
            drop(guard);
            warn!(error = %err, "Refresh failed");
            Err(err)
        }
    }
}

fn is_rejection(error: &GraphqlError) -> bool {
    if error.is_unauthorized() {
        return true;
    }
    let message = error.message.to_lowercase();
    message.contains("signature") || message.contains("challenge")
}

fn classify_rejection(err: LensError) -> LensError {
    match err {
        LensError::Graphql { errors, .. } if errors.iter().any(is_rejection) => {
            LensError::AuthRejected { errors }
        }
        other => other,
    }
}
