//! Lens Connector
//!
//! Client for the Lens social-graph GraphQL API.
//!
//! - [`documents`] holds every GraphQL document the connector can send, with
//!   the field path its result is read from.
//! - [`SessionManager`] runs the wallet challenge/response handshake and keeps
//!   the access/refresh token pair. Concurrent refreshes share one request.
//! - [`LensClient`] exposes one method per document and attaches the access
//!   token to the documents that need it.
//!
//! ```rust,ignore
//! use lens_connector::{LensClient, LensConfig, LensNetwork};
//!
//! let lens = LensClient::new(&LensConfig::for_network(LensNetwork::Mumbai), "0xabc...")?;
//! let challenge = lens.get_challenge().await?;
//! let signature = wallet.sign(&challenge.text).await?;
//! lens.authenticate_sig(&signature).await?;
//! let post = lens.create_post("0x01", "ipfs://...").await?;
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

mod api;
mod client;
mod config;
pub mod documents;
mod error;
mod session;
mod types;

pub use api::LensClient;
pub use client::LensApiClient;
pub use config::{LensConfig, LensNetwork};
pub use documents::{Document, Projection};
pub use error::{LensError, LensResult, MissingCredential};
pub use session::{ChallengeSigner, SessionManager};
pub use types::{Challenge, Reaction, SessionState, TokenPair};
