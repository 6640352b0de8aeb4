//! Signed HTTP client for AWS service APIs.

use super::protocol::{self, HttpResponse};
use super::signing::SigV4Signer;
use super::{ClientConfig, Command, ServiceClient};
use crate::config::HttpSettings;
use crate::error::{Error, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Method};
use serde_json::{json, Value};
use std::collections::BTreeMap;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Client for one region and one set of credentials.
///
/// Each [`send`](ServiceClient::send) makes exactly one HTTP attempt. Error
/// responses are returned as [`Error::Service`] without classification.
#[derive(Debug, Clone)]
pub struct AwsClient {
    http: Client,
    config: ClientConfig,
    endpoint_override: Option<url::Url>,
    user_agent: String,
}

impl AwsClient {
    pub fn new(config: ClientConfig, settings: &HttpSettings) -> Result<Self> {
        let endpoint_override = match config.endpoint.as_deref() {
            Some(endpoint) => Some(parse_endpoint(endpoint)?),
            None => None,
        };

        let http = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
            .build()
            .map_err(|e| Error::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            config,
            endpoint_override,
            user_agent: settings.user_agent.clone(),
        })
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Base URL requests for `command` are sent to.
    pub fn endpoint_for(&self, command: &Command) -> String {
        match self.endpoint_override {
            Some(ref url) => url.as_str().trim_end_matches('/').to_string(),
            None => command.service().endpoint(&self.config.region),
        }
    }

    fn signer_for(&self, command: &Command) -> SigV4Signer {
        let service = command.service();
        let region =
            service.signing_region(&self.config.region, self.endpoint_override.is_some());
        SigV4Signer::new(&self.config.credentials, &region, service.signing_name())
    }
}

#[async_trait]
impl ServiceClient for AwsClient {
    #[instrument(skip(self, command), fields(service = %command.service(), operation = %command.name()))]
    async fn send(&self, command: &Command) -> Result<Option<Value>> {
        let service = command.service();
        let mut request = protocol::encode(command)?;

        let url = request.url(&self.endpoint_for(command));
        let parsed = url::Url::parse(&url).map_err(|e| Error::InvalidEndpoint {
            endpoint: url.clone(),
            message: e.to_string(),
        })?;
        request
            .headers
            .insert("host".to_string(), host_header(&parsed));

        self.signer_for(command).sign(
            &request.method,
            &url,
            &mut request.headers,
            &request.body,
            Utc::now(),
        )?;

        let method = Method::from_bytes(request.method.as_bytes())
            .map_err(|e| Error::Internal(format!("invalid HTTP method: {}", e)))?;
        let mut builder = self
            .http
            .request(method, parsed)
            .header("user-agent", self.user_agent.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        debug!("{} {}", request.method, url);
        let response = builder.send().await.map_err(|source| Error::Transport {
            service: service.id().to_string(),
            source,
        })?;

        let status = response.status().as_u16();
        let mut headers = BTreeMap::new();
        for (name, value) in response.headers() {
            if let Ok(value) = value.to_str() {
                headers.insert(name.as_str().to_lowercase(), value.to_string());
            }
        }
        let body = response
            .bytes()
            .await
            .map_err(|source| Error::Transport {
                service: service.id().to_string(),
                source,
            })?
            .to_vec();
        let response = HttpResponse {
            status,
            headers,
            body,
        };

        if !response.is_success() {
            let error = protocol::decode_error(service, &response);
            warn!("{} failed: {}", command.name(), error);
            return Err(Error::Service(error));
        }

        let mut output = protocol::decode(command, &response)?;
        if let Value::Object(ref mut fields) = output {
            fields.insert("$metadata".to_string(), metadata(&response));
        }
        debug!("{} completed with HTTP {}", command.name(), status);
        Ok(Some(output))
    }
}

fn parse_endpoint(endpoint: &str) -> Result<url::Url> {
    let url = url::Url::parse(endpoint).map_err(|e| Error::InvalidEndpoint {
        endpoint: endpoint.to_string(),
        message: e.to_string(),
    })?;
    if url.host_str().is_none() {
        return Err(Error::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            message: "endpoint has no host".to_string(),
        });
    }
    Ok(url)
}

fn host_header(url: &url::Url) -> String {
    let host = url.host_str().unwrap_or_default();
    match url.port() {
        Some(port) => format!("{}:{}", host, port),
        None => host.to_string(),
    }
}

/// Response metadata attached to every successful output.
fn metadata(response: &HttpResponse) -> Value {
    let mut metadata = json!({
        "httpStatusCode": response.status,
        "attempts": 1,
        "totalRetryDelay": 0,
    });
    if let Some(request_id) = response.request_id() {
        metadata["requestId"] = Value::String(request_id);
    }
    metadata
}
