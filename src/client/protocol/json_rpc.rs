//! AWS JSON 1.1 request encoding.

use super::{json_wire_value, HttpRequest};
use crate::client::Command;
use crate::error::Result;
use serde_json::Value;

pub const CONTENT_TYPE: &str = "application/x-amz-json-1.1";

pub fn encode(command: &Command, target_prefix: &str) -> Result<HttpRequest> {
    let operation = command.operation();
    let mut request = HttpRequest::new("POST", "/");

    request
        .headers
        .insert("content-type".to_string(), CONTENT_TYPE.to_string());
    request.headers.insert(
        "x-amz-target".to_string(),
        format!("{}.{}", target_prefix, operation.name),
    );

    let input: serde_json::Map<String, Value> = command
        .input()
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    let body = json_wire_value(Some(&operation.input), &Value::Object(input));
    request.body = serde_json::to_vec(&body)?;

    Ok(request)
}
