//! Client layer: commands, client construction, and the HTTP transport.
//!
//! A block never talks HTTP itself. It hands a [`Command`] to whatever
//! [`ServiceClient`] the configured [`ClientFactory`] builds for the call's
//! region and credentials. The default factory builds an [`AwsClient`], which
//! signs the request with SigV4 and speaks the service's wire protocol; tests
//! and alternative hosts plug in their own factory.

pub mod aws;
pub mod protocol;
pub mod signing;

pub use aws::AwsClient;

use crate::blocks::Operation;
use crate::config::HttpSettings;
use crate::error::Result;
use crate::service::Service;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// Static AWS credentials supplied by the host.
#[derive(Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_token: Option<String>,
}

impl Credentials {
    pub fn new(
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        session_token: Option<String>,
    ) -> Self {
        Self {
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            session_token,
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field(
                "session_token",
                &self.session_token.as_ref().map(|_| "<redacted>"),
            )
            .finish()
    }
}

/// Everything a client constructor receives for one call.
///
/// `endpoint` is absent, not empty, when no override is configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientConfig {
    pub region: String,
    pub credentials: Credentials,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
}

/// One operation invocation: the operation definition plus its input,
/// with `region` already removed.
#[derive(Debug, Clone)]
pub struct Command {
    operation: Arc<Operation>,
    input: Map<String, Value>,
}

impl Command {
    pub fn new(operation: Arc<Operation>, input: Map<String, Value>) -> Self {
        Self { operation, input }
    }

    /// AWS operation name (`DeleteAddon`).
    pub fn name(&self) -> &str {
        &self.operation.name
    }

    pub fn service(&self) -> Service {
        self.operation.service
    }

    pub fn operation(&self) -> &Operation {
        &self.operation
    }

    pub fn input(&self) -> &Map<String, Value> {
        &self.input
    }

    pub fn into_input(self) -> Map<String, Value> {
        self.input
    }
}

/// A client able to send commands to one service region.
#[async_trait]
pub trait ServiceClient: Send + Sync {
    /// Sends one command and returns the response body, if any.
    async fn send(&self, command: &Command) -> Result<Option<Value>>;
}

/// Builds a client for each invocation.
pub trait ClientFactory: Send + Sync {
    fn create(&self, config: ClientConfig) -> Result<Arc<dyn ServiceClient>>;
}

/// Factory producing signed HTTP clients.
#[derive(Debug, Clone, Default)]
pub struct HttpClientFactory {
    settings: HttpSettings,
}

impl HttpClientFactory {
    pub fn new(settings: HttpSettings) -> Self {
        Self { settings }
    }
}

impl ClientFactory for HttpClientFactory {
    fn create(&self, config: ClientConfig) -> Result<Arc<dyn ServiceClient>> {
        Ok(Arc::new(AwsClient::new(config, &self.settings)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_config_omits_unset_endpoint() {
        let config = ClientConfig {
            region: "us-east-1".to_string(),
            credentials: Credentials::new("A", "B", Some("C".to_string())),
            endpoint: None,
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(
            value,
            json!({
                "region": "us-east-1",
                "credentials": {
                    "accessKeyId": "A",
                    "secretAccessKey": "B",
                    "sessionToken": "C",
                },
            })
        );
        assert!(value.get("endpoint").is_none());
    }

    #[test]
    fn test_client_config_keeps_endpoint() {
        let config = ClientConfig {
            region: "us-east-1".to_string(),
            credentials: Credentials::new("A", "B", None),
            endpoint: Some("http://localhost:4566".to_string()),
        };
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["endpoint"], "http://localhost:4566");
    }

    #[test]
    fn test_credentials_debug_redacts_secrets() {
        let creds = Credentials::new("AKIDEXAMPLE", "very-secret", Some("token".to_string()));
        let rendered = format!("{:?}", creds);
        assert!(rendered.contains("AKIDEXAMPLE"));
        assert!(!rendered.contains("very-secret"));
        assert!(!rendered.contains("\"token\""));
    }
}
