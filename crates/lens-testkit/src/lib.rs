//! Lens Test Kit - stub GraphQL server and tracing setup for connector tests.
//!
//! ```rust,ignore
//! use lens_testkit::{MockGraphqlServer, init_test_tracing};
//!
//! #[tokio::test]
//! async fn fetches_profile() {
//!     init_test_tracing();
//!     let mock = MockGraphqlServer::start().await;
//!     mock.expect_data("Profile", serde_json::json!({"profile": {"id": "0x01"}})).await;
//!     // point the client at mock.url() ...
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

mod mock_server;
mod tracing_config;

pub use mock_server::*;
pub use tracing_config::*;
