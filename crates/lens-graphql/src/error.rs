//! Error types for the GraphQL transport.

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// GraphQL error codes that mean the caller's credential was refused.
const UNAUTHORIZED_CODES: [&str; 2] = ["UNAUTHENTICATED", "FORBIDDEN"];

/// HTTP error information captured from reqwest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpErrorInfo {
    /// Error message.
    pub message: String,
    /// HTTP status code (if available).
    pub status_code: Option<u16>,
    /// Whether the error was a connection failure.
    pub is_connect: bool,
    /// Whether the error was a request error.
    pub is_request: bool,
}

impl From<&reqwest::Error> for HttpErrorInfo {
    fn from(err: &reqwest::Error) -> Self {
        Self {
            message: err.to_string(),
            status_code: err.status().map(|status| status.as_u16()),
            is_connect: err.is_connect(),
            is_request: err.is_request(),
        }
    }
}

/// GraphQL error location.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphqlErrorLocation {
    /// Line number in the query (1-based).
    pub line: u32,
    /// Column number in the query (1-based).
    pub column: u32,
}

/// GraphQL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GraphqlPathSegment {
    /// Field name.
    Key(String),
    /// Array index.
    Index(i64),
}

/// Entry of a response `errors` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphqlError {
    /// Human-readable error message.
    pub message: String,
    /// Location(s) within the query.
    #[serde(default)]
    pub locations: Vec<GraphqlErrorLocation>,
    /// Path within the response where the error occurred.
    #[serde(default)]
    pub path: Vec<GraphqlPathSegment>,
    /// Extensions metadata.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extensions: Option<serde_json::Value>,
}

impl GraphqlError {
    /// Create an error carrying only a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            locations: Vec::new(),
            path: Vec::new(),
            extensions: None,
        }
    }

    /// Machine-readable `extensions.code`, when the server supplied one.
    #[must_use]
    pub fn code(&self) -> Option<&str> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(serde_json::Value::as_str)
    }

    /// Returns `true` if the server refused the request's credential.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.code()
            .is_some_and(|code| UNAUTHORIZED_CODES.contains(&code))
    }
}

/// Error type for GraphQL transport operations.
#[derive(Debug, Clone, Error)]
pub enum GraphqlClientError {
    /// HTTP/network error.
    #[error("HTTP error: {}", .0.message)]
    Http(HttpErrorInfo),

    /// The request did not complete within the configured timeout.
    #[error("request timed out: {message}")]
    Timeout {
        /// Details from the HTTP layer.
        message: String,
    },

    /// HTTP response status error.
    #[error("HTTP status {status} with body: {body}")]
    HttpStatus {
        /// HTTP status code.
        status: StatusCode,
        /// Response body (truncated if needed).
        body: String,
    },

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(String),

    /// GraphQL-level errors returned by the server.
    #[error("GraphQL errors: {}", summarize(.errors))]
    GraphqlErrors {
        /// GraphQL error list.
        errors: Vec<GraphqlError>,
    },

    /// GraphQL protocol violation.
    #[error("GraphQL protocol error: {message}")]
    Protocol {
        /// Details.
        message: String,
    },
}

impl From<reqwest::Error> for GraphqlClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            return Self::Timeout {
                message: err.to_string(),
            };
        }
        Self::Http(HttpErrorInfo::from(&err))
    }
}

impl From<serde_json::Error> for GraphqlClientError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl GraphqlClientError {
    /// Returns `true` if the server refused the caller's credential, either at
    /// the HTTP layer or through the GraphQL error channel.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::HttpStatus { status, .. } => {
                *status == StatusCode::UNAUTHORIZED || *status == StatusCode::FORBIDDEN
            }
            Self::GraphqlErrors { errors } => errors.iter().any(GraphqlError::is_unauthorized),
            _ => false,
        }
    }

    /// Returns `true` if the request timed out.
    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

fn summarize(errors: &[GraphqlError]) -> String {
    if errors.is_empty() {
        return "(no details)".to_string();
    }
    errors
        .iter()
        .map(|err| err.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coded(code: &str) -> GraphqlError {
        GraphqlError {
            extensions: Some(serde_json::json!({ "code": code })),
            ..GraphqlError::new("denied")
        }
    }

    #[test]
    fn test_graphql_error_deserializes_without_optional_fields() {
        let err: GraphqlError =
            serde_json::from_value(serde_json::json!({"message": "boom"})).unwrap();
        assert_eq!(err.message, "boom");
        assert!(err.locations.is_empty());
        assert!(err.path.is_empty());
        assert_eq!(err.code(), None);
    }

    #[test]
    fn test_path_segments_untagged() {
        let err: GraphqlError = serde_json::from_value(serde_json::json!({
            "message": "bad",
            "path": ["profile", 0, "handle"]
        }))
        .unwrap();
        assert_eq!(
            err.path,
            vec![
                GraphqlPathSegment::Key("profile".into()),
                GraphqlPathSegment::Index(0),
                GraphqlPathSegment::Key("handle".into()),
            ]
        );
    }

    #[test]
    fn test_unauthorized_classification() {
        assert!(coded("UNAUTHENTICATED").is_unauthorized());
        assert!(coded("FORBIDDEN").is_unauthorized());
        assert!(!coded("BAD_USER_INPUT").is_unauthorized());

        let err = GraphqlClientError::GraphqlErrors {
            errors: vec![GraphqlError::new("other"), coded("UNAUTHENTICATED")],
        };
        assert!(err.is_unauthorized());

        let err = GraphqlClientError::HttpStatus {
            status: StatusCode::UNAUTHORIZED,
            body: String::new(),
        };
        assert!(err.is_unauthorized());

        let err = GraphqlClientError::HttpStatus {
            status: StatusCode::BAD_GATEWAY,
            body: String::new(),
        };
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_display_joins_messages() {
        let err = GraphqlClientError::GraphqlErrors {
            errors: vec![GraphqlError::new("first"), GraphqlError::new("second")],
        };
        assert_eq!(err.to_string(), "GraphQL errors: first; second");
    }
}
