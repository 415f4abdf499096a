//! Lens GraphQL - GraphQL-over-HTTP transport for the Lens connector.
//!
//! This crate provides:
//! - Request/response envelopes following the GraphQL-over-HTTP conventions.
//! - A reqwest-backed client with per-request bearer decoration and timeouts.
//! - An error taxonomy separating network, timeout, status and GraphQL failures.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

mod client;
mod error;
mod operation;

pub use client::{
    GraphqlClient, GraphqlClientBuilder, GraphqlClientConfig, GraphqlClientMetrics,
    GraphqlClientMetricsSnapshot,
};
pub use error::{
    GraphqlClientError, GraphqlError, GraphqlErrorLocation, GraphqlPathSegment, HttpErrorInfo,
};
pub use operation::{GraphqlQuery, GraphqlRequest, GraphqlResponse, OperationKind};
