//! Lens connector configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::{LensError, LensResult};

/// Lens API deployments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LensNetwork {
    /// Polygon mainnet.
    Mainnet,
    /// Mumbai testnet.
    Mumbai,
}

impl LensNetwork {
    /// GraphQL endpoint of this deployment.
    #[must_use]
    pub const fn api_url(self) -> &'static str {
        match self {
            Self::Mainnet => "https://api.lens.dev/",
            Self::Mumbai => "https://api-mumbai.lens.dev/",
        }
    }
}

/// Configuration for the Lens connector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LensConfig {
    /// GraphQL endpoint (default: https://api-mumbai.lens.dev/)
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Request timeout
    #[serde(default = "default_timeout", with = "duration_secs")]
    pub timeout: Duration,

    /// User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Variable names scrubbed from debug logs
    #[serde(default = "default_redact_fields")]
    pub redact_fields: Vec<String>,
}

fn default_api_url() -> String {
    LensNetwork::Mumbai.api_url().into()
}

fn default_timeout() -> Duration {
    Duration::from_secs(30)
}

fn default_user_agent() -> String {
    format!("lens-connector/{}", env!("CARGO_PKG_VERSION"))
}

fn default_redact_fields() -> Vec<String> {
    lens_telemetry::DEFAULT_REDACT_FIELDS
        .iter()
        .map(ToString::to_string)
        .collect()
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for LensConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            timeout: default_timeout(),
            user_agent: default_user_agent(),
            redact_fields: default_redact_fields(),
        }
    }
}

impl LensConfig {
    /// Configuration pointing at a known deployment.
    #[must_use]
    pub fn for_network(network: LensNetwork) -> Self {
        Self {
            api_url: network.api_url().into(),
            ..Self::default()
        }
    }

    /// Configuration pointing at an arbitrary endpoint.
    #[must_use]
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Set the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Check the endpoint and timeout.
    pub fn validate(&self) -> LensResult<()> {
        let url = Url::parse(&self.api_url)
            .map_err(|err| LensError::Config(format!("invalid api_url {:?}: {err}", self.api_url)))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(LensError::Config(format!(
                "api_url must be http or https, got {}",
                url.scheme()
            )));
        }
        if self.timeout.is_zero() {
            return Err(LensError::Config("timeout must be non-zero".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LensConfig::default();
        assert_eq!(config.api_url, "https://api-mumbai.lens.dev/");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("lens-connector/"));
        assert_eq!(config.redact_fields, vec!["signature", "token", "authorization"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_partial() {
        let config: LensConfig =
            serde_json::from_str(r#"{"api_url": "https://api.lens.dev/", "timeout": 5}"#).unwrap();
        assert_eq!(config.api_url, LensNetwork::Mainnet.api_url());
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.redact_fields.len(), 3);
    }

    #[test]
    fn test_timeout_serializes_as_seconds() {
        let value = serde_json::to_value(LensConfig::default()).unwrap();
        assert_eq!(value["timeout"], 30);
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        for url in ["not a url", "ftp://api.lens.dev/"] {
            let err = LensConfig::default().with_api_url(url).validate().unwrap_err();
            assert!(matches!(err, LensError::Config(_)), "{url}: {err:?}");
        }
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let err = LensConfig::default()
            .with_timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(matches!(err, LensError::Config(_)));
    }

    #[test]
    fn test_network_urls() {
        assert_eq!(
            LensConfig::for_network(LensNetwork::Mainnet).api_url,
            "https://api.lens.dev/"
        );
        let network: LensNetwork = serde_json::from_str(r#""mumbai""#).unwrap();
        assert_eq!(network, LensNetwork::Mumbai);
    }
}
