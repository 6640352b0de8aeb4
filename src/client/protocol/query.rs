//! AWS Query protocol: form-encoded requests, XML responses.

use super::xml::{self, Element};
use super::{iso8601, HttpRequest, HttpResponse};
use crate::blocks::Shape;
use crate::client::Command;
use crate::error::{Result, ServiceError};
use crate::service::Service;
use serde_json::{Map, Value};

pub const CONTENT_TYPE: &str = "application/x-www-form-urlencoded; charset=utf-8";

pub fn encode(command: &Command, version: &str) -> Result<HttpRequest> {
    let operation = command.operation();

    let mut params = vec![
        ("Action".to_string(), operation.name.clone()),
        ("Version".to_string(), version.to_string()),
    ];
    for (name, value) in command.input() {
        let shape = operation.input.member(name).map(|m| &m.shape);
        flatten(name, shape, value, &mut params);
    }

    let body = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter())
        .finish();

    let mut request = HttpRequest::new("POST", "/");
    request
        .headers
        .insert("content-type".to_string(), CONTENT_TYPE.to_string());
    request.body = body.into_bytes();
    Ok(request)
}

/// Flattens one input value into query parameters.
///
/// - structures: `Prefix.Member`
/// - lists: `Prefix.<member name>.N`, 1-based; an empty list sends `Prefix=`
/// - maps: `Prefix.entry.N.key` / `Prefix.entry.N.value`
pub fn flatten(prefix: &str, shape: Option<&Shape>, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((prefix.to_string(), b.to_string())),
        Value::Number(n) => {
            let text = match shape {
                Some(Shape::Timestamp) => iso8601(value).unwrap_or_else(|| n.to_string()),
                _ => n.to_string(),
            };
            out.push((prefix.to_string(), text));
        }
        Value::String(s) => out.push((prefix.to_string(), s.clone())),
        Value::Array(items) => {
            if items.is_empty() {
                out.push((prefix.to_string(), String::new()));
                return;
            }
            let (member_name, item_shape) = match shape {
                Some(Shape::List { item, member_name }) => (member_name.as_str(), Some(&**item)),
                _ => ("member", None),
            };
            for (index, item) in items.iter().enumerate() {
                let key = format!("{}.{}.{}", prefix, member_name, index + 1);
                flatten(&key, item_shape, item, out);
            }
        }
        Value::Object(fields) => match shape {
            Some(Shape::Map(value_shape)) => {
                for (index, (key, entry)) in fields.iter().enumerate() {
                    let base = format!("{}.entry.{}", prefix, index + 1);
                    out.push((format!("{}.key", base), key.clone()));
                    flatten(&format!("{}.value", base), Some(value_shape), entry, out);
                }
            }
            _ => {
                for (key, field) in fields {
                    let member = shape.and_then(|s| s.member(key)).map(|m| &m.shape);
                    flatten(&format!("{}.{}", prefix, key), member, field, out);
                }
            }
        },
    }
}

/// Decodes `<OperationResponse><OperationResult>` into the output object.
pub fn decode(command: &Command, response: &HttpResponse) -> Result<Value> {
    let text = String::from_utf8_lossy(&response.body);
    if text.trim().is_empty() {
        return Ok(Value::Object(Map::new()));
    }

    let root = xml::parse(&text)?;
    let result_name = format!("{}Result", command.name());
    let decoded = match root.child(&result_name) {
        Some(result) => xml::to_json(result, Some(&command.operation().output)),
        None => Value::Object(Map::new()),
    };
    Ok(decoded)
}

/// Reads `<ErrorResponse><Error><Code/><Message/></Error><RequestId/>`.
pub fn parse_error(service: Service, response: &HttpResponse) -> ServiceError {
    let text = String::from_utf8_lossy(&response.body);
    let root = xml::parse(&text).unwrap_or_default();

    let error = find_error(&root);
    let code = error
        .and_then(|e| e.child_text("Code"))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or("UnknownError");
    let message = error
        .and_then(|e| e.child_text("Message"))
        .map(str::to_string)
        .unwrap_or_else(|| text.trim().to_string());

    let mut service_error = ServiceError::new(service.id(), code, message, response.status);
    if let Some(request_id) = root
        .child_text("RequestId")
        .map(str::trim)
        .filter(|id| !id.is_empty()) {
        service_error = service_error.with_request_id(request_id);
    }
    service_error
}

fn find_error(root: &Element) -> Option<&Element> {
    if root.name == "Error" {
        Some(root)
    } else {
        root.child("Error")
    }
}
