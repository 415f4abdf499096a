//! Lens connector error types.

use std::fmt;

use lens_graphql::{GraphqlClientError, GraphqlError};
use thiserror::Error;

/// Credential the session did not hold when an operation needed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingCredential {
    /// No access token; authenticated documents cannot be sent.
    AccessToken,
    /// No refresh token; the session cannot be refreshed.
    RefreshToken,
}

impl fmt::Display for MissingCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AccessToken => write!(f, "access token"),
            Self::RefreshToken => write!(f, "refresh token"),
        }
    }
}

/// Lens connector errors.
#[derive(Error, Debug, Clone)]
pub enum LensError {
    /// Network, status or decoding failure below the GraphQL layer.
    #[error("Remote error: {0}")]
    Remote(GraphqlClientError),

    /// The request did not complete in time.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The server answered with GraphQL errors.
    #[error("GraphQL error in {operation}: {}", summarize(.errors))]
    Graphql {
        operation: &'static str,
        errors: Vec<GraphqlError>,
    },

    /// The server refused the signature or challenge.
    #[error("Authentication rejected: {}", summarize(.errors))]
    AuthRejected { errors: Vec<GraphqlError> },

    /// The projected result field was absent or null.
    #[error("No result at {path} for {operation}")]
    NotFound {
        operation: &'static str,
        path: String,
    },

    /// The session holds no usable credential.
    #[error("No session: missing {0}")]
    NoSession(MissingCredential),

    /// The challenge signer failed.
    #[error("Signer error: {0}")]
    Signer(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type for Lens operations.
pub type LensResult<T> = Result<T, LensError>;

impl LensError {
    /// Classify a transport failure for `operation`.
    #[must_use]
    pub fn from_transport(operation: &'static str, err: GraphqlClientError) -> Self {
        match err {
            GraphqlClientError::Timeout { message } => Self::Timeout(message),
            GraphqlClientError::GraphqlErrors { errors } => Self::Graphql { operation, errors },
            other => Self::Remote(other),
        }
    }

    /// Whether the server refused the caller's credential. The caller should
    /// treat the session as expired.
    #[must_use]
    pub fn is_auth_failure(&self) -> bool {
        match self {
            Self::AuthRejected { .. } => true,
            Self::Remote(err) => err.is_unauthorized(),
            Self::Graphql { errors, .. } => errors.iter().any(GraphqlError::is_unauthorized),
            _ => false,
        }
    }

    /// Whether the request timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }

    /// GraphQL errors carried by this error, if any.
    #[must_use]
    pub fn graphql_errors(&self) -> &[GraphqlError] {
        match self {
            Self::Graphql { errors, .. } | Self::AuthRejected { errors } => errors,
            _ => &[],
        }
    }
}

impl From<GraphqlClientError> for LensError {
    fn from(err: GraphqlClientError) -> Self {
        match err {
            GraphqlClientError::Timeout { message } => Self::Timeout(message),
            other => Self::Remote(other),
        }
    }
}

fn summarize(errors: &[GraphqlError]) -> String {
    errors
        .iter()
        .map(|err| err.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
