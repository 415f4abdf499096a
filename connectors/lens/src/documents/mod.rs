//! The Lens document catalog.
//!
//! Every API operation is a row in a static table: the GraphQL text, the
//! variables it declares, where its result lives in the response and whether
//! it needs an access token. [`LensClient::execute`](crate::LensClient::execute)
//! runs any row.

#[macro_use]
mod fragments;

mod auth;
mod explore;
mod profile;
mod publication;

use std::fmt;

use lens_graphql::OperationKind;
use serde_json::Value;

pub use auth::{AUTHENTICATE, CHALLENGE, REFRESH, VERIFY};
pub use explore::{EXPLORE_PROFILES, EXPLORE_PUBLICATIONS, HAS_TX_BEEN_INDEXED, PING, SEARCH};
pub use profile::{
    CREATE_PROFILE, DEFAULT_PROFILE, FOLLOW, NFTS, NOTIFICATIONS, PROFILE, UNFOLLOW,
};
pub use publication::{
    ADD_REACTION, CREATE_COMMENT, CREATE_MIRROR, CREATE_POST, FEED, PUBLICATION, TIMELINE,
};

/// Where an operation's result lives inside the response `data` object.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Projection {
    /// The whole `data` object is the result.
    Root,
    /// The value at this field path is the result.
    Field(&'static [&'static str]),
}

impl Projection {
    /// Extract the result from `data`. Returns `None` when a path segment is
    /// absent or the value at the end of the path is `null`.
    #[must_use]
    pub fn apply(self, data: Value) -> Option<Value> {
        match self {
            Self::Root => Some(data),
            Self::Field(path) => {
                let mut current = data;
                for segment in path {
                    current = match current {
                        Value::Object(mut map) => map.remove(*segment)?,
                        _ => return None,
                    };
                }
                (!current.is_null()).then_some(current)
            }
        }
    }
}

impl fmt::Display for Projection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => f.write_str("data"),
            Self::Field(path) => f.write_str(&path.join(".")),
        }
    }
}

/// One row of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Document {
    /// Facade name of the operation, e.g. `get_profile`.
    pub name: &'static str,
    /// GraphQL operation name sent as `operationName`.
    pub operation_name: &'static str,
    /// Query or mutation.
    pub kind: OperationKind,
    /// Full GraphQL document, including the fragments it spreads.
    pub text: &'static str,
    /// Variable names the document declares.
    pub variables: &'static [&'static str],
    /// Result extraction.
    pub projection: Projection,
    /// Whether the request must carry the session's access token.
    pub auth: bool,
}

const CATALOG: &[Document] = &[
    CHALLENGE,
    AUTHENTICATE,
    REFRESH,
    VERIFY,
    EXPLORE_PUBLICATIONS,
    EXPLORE_PROFILES,
    FOLLOW,
    UNFOLLOW,
    PING,
    HAS_TX_BEEN_INDEXED,
    NOTIFICATIONS,
    CREATE_PROFILE,
    DEFAULT_PROFILE,
    PROFILE,
    CREATE_POST,
    CREATE_COMMENT,
    CREATE_MIRROR,
    PUBLICATION,
    SEARCH,
    TIMELINE,
    FEED,
    NFTS,
    ADD_REACTION,
];

/// Every document the connector knows.
#[must_use]
pub fn catalog() -> &'static [Document] {
    CATALOG
}

/// Look a document up by its facade name.
#[must_use]
pub fn find(name: &str) -> Option<&'static Document> {
    CATALOG.iter().find(|document| document.name == name)
}

/// Whether `document` belongs to the session handshake and must be run by
/// [`SessionManager`](crate::SessionManager).
#[must_use]
pub fn is_session_document(document: &Document) -> bool {
    [CHALLENGE, AUTHENTICATE, REFRESH, VERIFY]
        .iter()
        .any(|session| session.name == document.name)
}
