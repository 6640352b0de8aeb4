//! REST-JSON request encoding.
//!
//! Members bound to the URI, query string or headers are lifted out of the
//! input; everything else, declared or not, goes into the JSON body.

use super::{json_wire_value, scalar_string, HttpRequest};
use crate::blocks::Location;
use crate::client::signing::uri_encode;
use crate::client::Command;
use crate::error::{Error, Result};
use serde_json::{Map, Value};

pub fn encode(command: &Command) -> Result<HttpRequest> {
    let operation = command.operation();
    let block_id = operation.block_id();
    let shape = &operation.input;

    let mut request = HttpRequest::new(operation.http.method, operation.http.uri.clone());
    let mut body = Map::new();

    for (name, value) in command.input() {
        if value.is_null() {
            continue;
        }
        let Some(member) = shape.member(name) else {
            body.insert(name.clone(), value.clone());
            continue;
        };

        match &member.location {
            Location::Path => {
                let text = scalar_string(value).ok_or_else(|| {
                    Error::invalid_input(&block_id, format!("'{}' must be a scalar", name))
                })?;
                if text.is_empty() {
                    return Err(Error::missing_parameter(&block_id, name));
                }
                let label = format!("{{{}}}", name);
                request.path = request.path.replace(&label, &uri_encode(&text));
            }
            Location::Query(key) => match value {
                Value::Array(items) => {
                    for item in items {
                        if let Some(text) = scalar_string(item) {
                            request.query.push((key.clone(), text));
                        }
                    }
                }
                other => {
                    let text = scalar_string(other).ok_or_else(|| {
                        Error::invalid_input(&block_id, format!("'{}' must be a scalar", name))
                    })?;
                    request.query.push((key.clone(), text));
                }
            },
            Location::Header(header) => {
                if let Some(text) = scalar_string(value) {
                    request.headers.insert(header.to_lowercase(), text);
                }
            }
            Location::Body => {
                body.insert(name.clone(), json_wire_value(Some(&member.shape), value));
            }
        }
    }

    if let Some(label) = unresolved_label(&request.path) {
        return Err(Error::missing_parameter(&block_id, label));
    }

    let declares_body = shape
        .members()
        .iter()
        .any(|m| m.location == Location::Body);
    if !body.is_empty() || declares_body {
        request.body = serde_json::to_vec(&Value::Object(body))?;
        request
            .headers
            .insert("content-type".to_string(), "application/json".to_string());
    }

    Ok(request)
}

fn unresolved_label(path: &str) -> Option<&str> {
    let start = path.find('{')?;
    let end = path[start..].find('}')?;
    Some(&path[start + 1..start + end])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::schema::{
        boolean, integer, optional, required, string, string_list, structure, timestamp,
    };
    use crate::blocks::Operation;
    use crate::service::Service;
    use serde_json::json;
    use std::sync::Arc;

    fn command(operation: Operation, input: Value) -> Command {
        let Value::Object(input) = input else {
            panic!("input must be an object")
        };
        Command::new(Arc::new(operation), input)
    }

    fn delete_addon() -> Operation {
        Operation::new(Service::Eks, "DeleteAddon", "Deletes an add-on.")
            .with_http("DELETE", "/clusters/{clusterName}/addons/{addonName}")
            .with_input(structure([
                required("clusterName", string()).path(),
                required("addonName", string()).path(),
                optional("preserve", boolean()).query("preserve"),
            ]))
    }

    #[test]
    fn test_path_and_query_bindings() {
        let request = encode(&command(
            delete_addon(),
            json!({ "clusterName": "prod cluster", "addonName": "vpc-cni", "preserve": true }),
        ))
        .unwrap();

        assert_eq!(request.method, "DELETE");
        assert_eq!(request.path, "/clusters/prod%20cluster/addons/vpc-cni");
        assert_eq!(
            request.query,
            vec![("preserve".to_string(), "true".to_string())]
        );
        assert!(request.body.is_empty());
        assert!(!request.headers.contains_key("content-type"));
    }

    #[test]
    fn test_missing_path_label() {
        let err = encode(&command(delete_addon(), json!({ "clusterName": "c1" }))).unwrap_err();
        assert!(
            matches!(err, Error::MissingParameter { ref parameter, .. } if parameter == "addonName")
        );
    }

    #[test]
    fn test_body_members_and_unknown_fields() {
        let op = Operation::new(Service::Eks, "CreateCluster", "x")
            .with_http("POST", "/clusters")
            .with_input(structure([
                required("name", string()),
                optional("logging", structure([])),
            ]));
        let request = encode(&command(
            op,
            json!({ "name": "c1", "brandNewField": 3, "ignored": null }),
        ))
        .unwrap();

        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, json!({ "name": "c1", "brandNewField": 3 }));
        assert_eq!(request.headers["content-type"], "application/json");
    }

    #[test]
    fn test_empty_body_when_body_members_declared() {
        let op = Operation::new(Service::Eks, "UpdateClusterVersion", "x")
            .with_http("POST", "/clusters/{name}/updates")
            .with_input(structure([
                required("name", string()).path(),
                optional("clientRequestToken", string()),
            ]));
        let request = encode(&command(op, json!({ "name": "c1" }))).unwrap();
        assert_eq!(request.body, b"{}");
    }

    #[test]
    fn test_repeated_query_values_and_headers() {
        let op = Operation::new(Service::Eks, "ListUpdates", "x")
            .with_http("GET", "/clusters/{name}/updates")
            .with_input(structure([
                required("name", string()).path(),
                optional("maxResults", integer()).query("maxResults"),
                optional("include", string_list()).query("include"),
                optional("token", string()).header("X-Custom-Token"),
            ]));
        let request = encode(&command(
            op,
            json!({ "name": "c1", "maxResults": 5, "include": ["a", "b"], "token": "t" }),
        ))
        .unwrap();
        let mut query = request.query.clone();
        query.sort();
        assert_eq!(
            query,
            vec![
                ("include".to_string(), "a".to_string()),
                ("include".to_string(), "b".to_string()),
                ("maxResults".to_string(), "5".to_string()),
            ]
        );
        assert_eq!(request.headers["x-custom-token"], "t");
    }

    #[test]
    fn test_body_timestamps_become_epoch_seconds() {
        let op = Operation::new(Service::Eks, "Schedule", "x")
            .with_http("POST", "/schedule")
            .with_input(structure([optional("at", timestamp())]));
        let request = encode(&command(op, json!({ "at": "2024-01-01T00:00:00Z" }))).unwrap();
        let body: Value = serde_json::from_slice(&request.body).unwrap();
        assert_eq!(body, json!({ "at": 1704067200 }));
    }
}
