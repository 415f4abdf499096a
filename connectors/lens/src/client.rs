//! Lens API client: runs catalog documents over the GraphQL transport.

use lens_graphql::{GraphqlClient, GraphqlClientBuilder, GraphqlQuery, GraphqlRequest};
use lens_telemetry::redact_sensitive;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::config::LensConfig;
use crate::documents::Document;
use crate::error::{LensError, LensResult};

/// Lens API client.
///
/// Stateless; cheap to clone. Session handling lives in
/// [`SessionManager`](crate::SessionManager).
#[derive(Debug, Clone)]
pub struct LensApiClient {
    graphql: GraphqlClient,
    redact_fields: Vec<String>,
}

impl LensApiClient {
    /// Create a new API client from configuration.
    pub fn new(config: &LensConfig) -> LensResult<Self> {
        config.validate()?;
        let graphql = GraphqlClientBuilder::new(config.api_url.clone())
            .with_service_name("lens")
            .with_user_agent(&config.user_agent)
            .with_timeout(config.timeout)
            .build()?;

        Ok(Self {
            graphql,
            redact_fields: config.redact_fields.clone(),
        })
    }

    /// Underlying transport, for metrics.
    #[must_use]
    pub const fn transport(&self) -> &GraphqlClient {
        &self.graphql
    }

    /// Send `document` with `variables` and project its result.
    ///
    /// `bearer` is attached as `Authorization: Bearer <token>` when given.
    #[instrument(
        skip_all,
        fields(operation = document.operation_name, authenticated = bearer.is_some())
    )]
    pub async fn execute(
        &self,
        document: &Document,
        variables: Value,
        bearer: Option<&str>,
    ) -> LensResult<Value> {
        debug!(
            variables = %redact_sensitive(&variables, &self.redact_fields),
            "Sending Lens request"
        );

        let request = GraphqlRequest::new(GraphqlQuery::from_static(document.text), variables)
            .with_operation_name(document.operation_name);
        let data: Value = self
            .graphql
            .execute_strict(request, bearer)
            .await
            .map_err(|err| LensError::from_transport(document.operation_name, err))?;

        document
            .projection
            .apply(data)
            .ok_or_else(|| LensError::NotFound {
                operation: document.operation_name,
                path: document.projection.to_string(),
            })
    }

    /// Like [`execute`](Self::execute), decoding the projected value into `T`.
    pub async fn execute_as<T: DeserializeOwned>(
        &self,
        document: &Document,
        variables: Value,
        bearer: Option<&str>,
    ) -> LensResult<T> {
        let value = self.execute(document, variables, bearer).await?;
        serde_json::from_value(value).map_err(|err| LensError::Remote(err.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = LensConfig::default().with_api_url("mailto:lens@example.com");
        assert!(matches!(
            LensApiClient::new(&config),
            Err(LensError::Config(_))
        ));
    }

    #[test]
    fn test_new_uses_configured_endpoint() {
        let config = LensConfig::default().with_api_url("http://127.0.0.1:9/graphql");
        let client = LensApiClient::new(&config).unwrap();
        assert_eq!(client.transport().endpoint(), "http://127.0.0.1:9/graphql");
    }
}
