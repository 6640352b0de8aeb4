//! Wire protocols spoken by the catalog's services.
//!
//! - [`rest_json`]: per-operation HTTP bindings with JSON bodies (EKS)
//! - [`json_rpc`]: `POST /` with `X-Amz-Target`, JSON 1.1 bodies (WAF Classic)
//! - [`query`]: form-encoded `Action`/`Version` requests with XML responses (RDS)
//!
//! Each protocol turns a [`Command`] into an [`HttpRequest`] and an
//! [`HttpResponse`] back into the JSON value the block emits. Field names are
//! never rewritten: the configuration object uses the service's own member
//! names, so encoding is a matter of placing each field, not renaming it.

pub mod json_rpc;
pub mod query;
pub mod rest_json;
pub mod xml;

use crate::blocks::Shape;
use crate::client::signing::uri_encode;
use crate::client::Command;
use crate::error::{Result, ServiceError};
use crate::service::{Protocol, Service};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

/// A request ready to be signed and sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: String,
    /// Path relative to the endpoint, already percent-encoded
    pub path: String,
    /// Query parameters, unencoded, in send order
    pub query: Vec<(String, String)>,
    /// Lower-case header names
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpRequest {
    pub fn new(method: &str, path: impl Into<String>) -> Self {
        Self {
            method: method.to_string(),
            path: path.into(),
            query: Vec::new(),
            headers: BTreeMap::new(),
            body: Vec::new(),
        }
    }

    /// Full URL of this request against `endpoint`.
    pub fn url(&self, endpoint: &str) -> String {
        let mut url = format!("{}{}", endpoint.trim_end_matches('/'), self.path);
        if !self.query.is_empty() {
            url.push('?');
            url.push_str(
                &self
                    .query
                    .iter()
                    .map(|(k, v)| format!("{}={}", uri_encode(k), uri_encode(v)))
                    .collect::<Vec<_>>()
                    .join("&"),
            );
        }
        url
    }
}

/// A response as received from the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    /// Lower-case header names
    pub headers: BTreeMap<String, String>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Request id from the response headers.
    pub fn request_id(&self) -> Option<String> {
        self.headers
            .get("x-amzn-requestid")
            .or_else(|| self.headers.get("x-amz-request-id"))
            .cloned()
    }
}

/// Serializes a command for its service's protocol.
pub fn encode(command: &Command) -> Result<HttpRequest> {
    match command.service().protocol() {
        Protocol::RestJson => rest_json::encode(command),
        Protocol::AwsJson11 { target_prefix } => json_rpc::encode(command, target_prefix),
        Protocol::AwsQuery { version } => query::encode(command, version),
    }
}

/// Decodes a successful response into the block's output value.
pub fn decode(command: &Command, response: &HttpResponse) -> Result<Value> {
    match command.service().protocol() {
        Protocol::RestJson | Protocol::AwsJson11 { .. } => {
            let body = decode_json_body(command.service(), &response.body)?;
            Ok(json_output_value(Some(&command.operation().output), &body))
        }
        Protocol::AwsQuery { .. } => query::decode(command, response),
    }
}

/// Reads the service's error report from a non-2xx response.
pub fn decode_error(service: Service, response: &HttpResponse) -> ServiceError {
    let error = match service.protocol() {
        Protocol::RestJson | Protocol::AwsJson11 { .. } => parse_json_error(service, response),
        Protocol::AwsQuery { .. } => query::parse_error(service, response),
    };
    match (error.request_id.is_none(), response.request_id()) {
        (true, Some(request_id)) => error.with_request_id(request_id),
        _ => error,
    }
}

fn decode_json_body(service: Service, body: &[u8]) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Map::new()));
    }
    serde_json::from_slice(body)
        .map_err(|e| crate::error::Error::decode(service.id(), e.to_string()))
}

/// Error code with any namespace or trailing URI stripped:
/// `com.amazonaws.waf#WAFStaleDataException` becomes `WAFStaleDataException`,
/// `ResourceNotFoundException:http://internal.amazon.com/` becomes
/// `ResourceNotFoundException`.
pub fn sanitize_error_code(raw: &str) -> String {
    let code = raw.split(':').next().unwrap_or(raw);
    let code = code.rsplit('#').next().unwrap_or(code);
    code.trim().to_string()
}

fn parse_json_error(service: Service, response: &HttpResponse) -> ServiceError {
    let body: Value = serde_json::from_slice(&response.body).unwrap_or(Value::Null);

    let code = response
        .headers
        .get("x-amzn-errortype")
        .map(String::as_str)
        .or_else(|| body.get("__type").and_then(Value::as_str))
        .or_else(|| body.get("code").and_then(Value::as_str))
        .or_else(|| body.get("Code").and_then(Value::as_str))
        .map(sanitize_error_code)
        .unwrap_or_else(|| "UnknownError".to_string());

    let message = ["message", "Message", "errorMessage"]
        .iter()
        .find_map(|key| body.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| String::from_utf8_lossy(&response.body).trim().to_string());

    ServiceError::new(service.id(), code, message, response.status)
}

/// Converts RFC 3339 strings in timestamp members to epoch seconds, the
/// form JSON protocols expect on the wire.
pub fn json_wire_value(shape: Option<&Shape>, value: &Value) -> Value {
    map_timestamps(shape, value, &|value| match value {
        Value::String(s) => parse_timestamp(s).map(|dt| epoch_seconds(&dt)),
        _ => None,
    })
}

/// Converts epoch-second numbers in timestamp members of a JSON response to
/// RFC 3339 strings, matching the declared output schema.
pub fn json_output_value(shape: Option<&Shape>, value: &Value) -> Value {
    map_timestamps(shape, value, &|value| match value {
        Value::Number(_) => iso8601(value).map(Value::String),
        _ => None,
    })
}

/// Rewrites every value declared as a timestamp with `convert`, leaving it
/// unchanged where `convert` returns `None`.
fn map_timestamps(
    shape: Option<&Shape>,
    value: &Value,
    convert: &dyn Fn(&Value) -> Option<Value>,
) -> Value {
    match (shape, value) {
        (Some(Shape::Timestamp), _) => convert(value).unwrap_or_else(|| value.clone()),
        (Some(Shape::Structure(_)), Value::Object(fields)) => Value::Object(
            fields
                .iter()
                .map(|(k, v)| {
                    let member = shape.and_then(|s| s.member(k)).map(|m| &m.shape);
                    (k.clone(), map_timestamps(member, v, convert))
                })
                .collect(),
        ),
        (Some(Shape::List { item, .. }), Value::Array(items)) => Value::Array(
            items
                .iter()
                .map(|v| map_timestamps(Some(item), v, convert))
                .collect(),
        ),
        (Some(Shape::Map(value_shape)), Value::Object(entries)) => Value::Object(
            entries
                .iter()
                .map(|(k, v)| (k.clone(), map_timestamps(Some(value_shape), v, convert)))
                .collect(),
        ),
        _ => value.clone(),
    }
}

/// Renders a timestamp for the query protocol (ISO-8601, UTC).
pub fn iso8601(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => {
            let secs = n.as_f64()?;
            let whole = secs.trunc() as i64;
            let nanos = ((secs - secs.trunc()) * 1e9).round() as u32;
            Utc.timestamp_opt(whole, nanos)
                .single()
                .map(|dt| dt.to_rfc3339_opts(SecondsFormat::AutoSi, true))
        }
        _ => None,
    }
}

fn parse_timestamp(s: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

fn epoch_seconds(dt: &DateTime<Utc>) -> Value {
    let millis = dt.timestamp_millis();
    if millis % 1000 == 0 {
        Value::Number(Number::from(dt.timestamp()))
    } else {
        Number::from_f64(millis as f64 / 1000.0)
            .map(Value::Number)
            .unwrap_or_else(|| Value::Number(Number::from(dt.timestamp())))
    }
}

/// String form of a scalar bound to a path label, query key or header.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::schema::{list, optional, string_map, structure, timestamp};
    use serde_json::json;

    #[test]
    fn test_sanitize_error_code() {
        assert_eq!(
            sanitize_error_code("com.amazonaws.waf#WAFStaleDataException"),
            "WAFStaleDataException"
        );
        assert_eq!(
            sanitize_error_code("ResourceNotFoundException:http://internal.amazon.com/coral/"),
            "ResourceNotFoundException"
        );
        assert_eq!(sanitize_error_code("ClientException"), "ClientException");
    }

    #[test]
    fn test_json_error_from_header() {
        let mut headers = BTreeMap::new();
        headers.insert(
            "x-amzn-errortype".to_string(),
            "ResourceNotFoundException:http://internal.amazon.com/".to_string(),
        );
        headers.insert("x-amzn-requestid".to_string(), "req-1".to_string());
        let response = HttpResponse {
            status: 404,
            headers,
            body: br#"{"message":"No cluster found for name: c1."}"#.to_vec(),
        };
        let error = decode_error(Service::Eks, &response);
        assert_eq!(error.code, "ResourceNotFoundException");
        assert_eq!(error.message, "No cluster found for name: c1.");
        assert_eq!(error.status, 404);
        assert_eq!(error.request_id.as_deref(), Some("req-1"));
    }

    #[test]
    fn test_json_error_from_body_type() {
        let response = HttpResponse {
            status: 400,
            headers: BTreeMap::new(),
            body: br#"{"__type":"com.amazonaws.waf#WAFStaleDataException","message":"stale"}"#
                .to_vec(),
        };
        let error = decode_error(Service::Waf, &response);
        assert_eq!(error.code, "WAFStaleDataException");
        assert_eq!(error.message, "stale");
    }

    #[test]
    fn test_request_url() {
        let mut request = HttpRequest::new("GET", "/clusters");
        request.query.push(("maxResults".to_string(), "10".to_string()));
        request.query.push(("include".to_string(), "all clusters".to_string()));
        assert_eq!(
            request.url("https://eks.us-east-1.amazonaws.com/"),
            "https://eks.us-east-1.amazonaws.com/clusters?maxResults=10&include=all%20clusters"
        );
    }

    #[test]
    fn test_json_wire_value_converts_timestamps() {
        let shape = structure([
            optional("StartTime", timestamp()),
            optional("Windows", list(timestamp())),
        ]);
        let value = json!({
            "StartTime": "2024-01-01T00:00:00Z",
            "Windows": ["2024-01-01T00:00:00.500Z"],
            "Other": "2024-01-01T00:00:00Z",
        });
        assert_eq!(
            json_wire_value(Some(&shape), &value),
            json!({
                "StartTime": 1704067200,
                "Windows": [1704067200.5],
                "Other": "2024-01-01T00:00:00Z",
            })
        );
    }

    #[test]
    fn test_json_output_value_renders_timestamps() {
        let shape = structure([
            optional("createdAt", timestamp()),
            optional("updates", list(structure([optional("createdAt", timestamp())]))),
            optional("tags", string_map()),
        ]);
        let value = json!({
            "createdAt": 1704067200.5,
            "updates": [{ "createdAt": 1704067200 }],
            "tags": { "createdAt": "1704067200" },
            "modifiedAt": 1704067200,
        });
        assert_eq!(
            json_output_value(Some(&shape), &value),
            json!({
                "createdAt": "2024-01-01T00:00:00.500Z",
                "updates": [{ "createdAt": "2024-01-01T00:00:00Z" }],
                "tags": { "createdAt": "1704067200" },
                "modifiedAt": 1704067200,
            })
        );
    }

    #[test]
    fn test_iso8601_from_epoch() {
        assert_eq!(
            iso8601(&json!(1704067200)).as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
        assert_eq!(
            iso8601(&json!("2024-01-01T00:00:00Z")).as_deref(),
            Some("2024-01-01T00:00:00Z")
        );
        assert_eq!(iso8601(&json!(true)), None);
    }

    #[test]
    fn test_empty_json_body_decodes_to_empty_object() {
        assert_eq!(decode_json_body(Service::Eks, b"").unwrap(), json!({}));
        assert_eq!(decode_json_body(Service::Eks, b" \n").unwrap(), json!({}));
        assert!(decode_json_body(Service::Eks, b"{not json").is_err());
    }
}
