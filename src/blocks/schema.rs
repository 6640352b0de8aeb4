//! Shape model for operation inputs and outputs.
//!
//! A [`Shape`] is the subset of the AWS API model a block needs: enough typing
//! to render the JSON schema the host shows to users, to check a configuration
//! object before the request is built, and to drive the wire codecs where a
//! protocol is not self-describing (query-string flattening, XML decoding).
//!
//! Catalogs build shapes with the small constructor functions in this module:
//!
//! ```rust,ignore
//! structure([
//!     required("clusterName", string()).path(),
//!     required("addonName", string()).path(),
//!     optional("preserve", boolean()).query("preserve"),
//! ])
//! ```

use serde_json::{json, Map, Value};
use std::fmt;

/// Where a member travels in a REST-style HTTP request.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Location {
    /// Serialized into the request body
    #[default]
    Body,
    /// Substituted into the URI template label of the same name
    Path,
    /// Appended to the query string under the given key
    Query(String),
    /// Sent as the given HTTP header
    Header(String),
}

/// A named member of a structure shape.
#[derive(Debug, Clone, PartialEq)]
pub struct Member {
    /// Field name as it appears in the configuration object and on the wire
    pub name: String,
    /// Type of the field
    pub shape: Shape,
    /// Whether the AWS model marks the field as required
    pub required: bool,
    /// HTTP binding of the field
    pub location: Location,
}

impl Member {
    /// Bind this member to the URI label of the same name.
    pub fn path(mut self) -> Self {
        self.location = Location::Path;
        self
    }

    /// Bind this member to a query string key.
    pub fn query(mut self, key: impl Into<String>) -> Self {
        self.location = Location::Query(key.into());
        self
    }

    /// Bind this member to an HTTP header.
    pub fn header(mut self, name: impl Into<String>) -> Self {
        self.location = Location::Header(name.into());
        self
    }
}

/// Semantic type of a value in an operation's input or output.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    String,
    /// String restricted to a fixed set of values
    Enum(Vec<String>),
    Integer,
    Number,
    Boolean,
    /// Point in time; ISO-8601 string or epoch seconds
    Timestamp,
    /// Homogeneous list; `member_name` is the XML element name of each item
    List {
        item: Box<Shape>,
        member_name: String,
    },
    /// String-keyed map
    Map(Box<Shape>),
    Structure(Vec<Member>),
    /// Untyped passthrough
    Any,
}

/// Whether a schema is rendered for an input config or an output event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaMode {
    Input,
    Output,
}

/// A problem found while checking a value against a shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A required field is absent or null
    Missing { path: String },
    /// A field holds a value of the wrong JSON type
    WrongType {
        path: String,
        expected: &'static str,
        found: &'static str,
    },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::Missing { path } => write!(f, "'{}' is required", path),
            Violation::WrongType {
                path,
                expected,
                found,
            } => write!(f, "'{}' must be {}, got {}", path, expected, found),
        }
    }
}

// ============================================================================
// Constructors
// ============================================================================

pub fn string() -> Shape {
    Shape::String
}

pub fn enumeration(values: &[&str]) -> Shape {
    Shape::Enum(values.iter().map(|v| (*v).to_string()).collect())
}

pub fn integer() -> Shape {
    Shape::Integer
}

pub fn number() -> Shape {
    Shape::Number
}

pub fn boolean() -> Shape {
    Shape::Boolean
}

pub fn timestamp() -> Shape {
    Shape::Timestamp
}

pub fn any() -> Shape {
    Shape::Any
}

/// A list whose XML items use the default `member` element name.
pub fn list(item: Shape) -> Shape {
    list_of(item, "member")
}

/// A list whose XML items use a service-specific element name.
pub fn list_of(item: Shape, member_name: &str) -> Shape {
    Shape::List {
        item: Box::new(item),
        member_name: member_name.to_string(),
    }
}

pub fn string_list() -> Shape {
    list(string())
}

pub fn map(value: Shape) -> Shape {
    Shape::Map(Box::new(value))
}

pub fn string_map() -> Shape {
    map(string())
}

pub fn structure(members: impl IntoIterator<Item = Member>) -> Shape {
    Shape::Structure(members.into_iter().collect())
}

pub fn required(name: impl Into<String>, shape: Shape) -> Member {
    Member {
        name: name.into(),
        shape,
        required: true,
        location: Location::Body,
    }
}

pub fn optional(name: impl Into<String>, shape: Shape) -> Member {
    Member {
        name: name.into(),
        shape,
        required: false,
        location: Location::Body,
    }
}

// ============================================================================
// Shape behaviour
// ============================================================================

impl Shape {
    /// Name of the JSON type this shape accepts.
    pub fn type_name(&self) -> &'static str {
        match self {
            Shape::String | Shape::Enum(_) => "a string",
            Shape::Integer => "an integer",
            Shape::Number => "a number",
            Shape::Boolean => "a boolean",
            Shape::Timestamp => "a timestamp",
            Shape::List { .. } => "an array",
            Shape::Map(_) | Shape::Structure(_) | Shape::Any => "an object",
        }
    }

    /// Members of a structure shape; empty for every other shape.
    pub fn members(&self) -> &[Member] {
        match self {
            Shape::Structure(members) => members,
            _ => &[],
        }
    }

    /// Looks up a structure member by name.
    pub fn member(&self, name: &str) -> Option<&Member> {
        self.members().iter().find(|m| m.name == name)
    }

    /// Names of the required members of a structure shape.
    pub fn required_members(&self) -> Vec<&str> {
        self.members()
            .iter()
            .filter(|m| m.required)
            .map(|m| m.name.as_str())
            .collect()
    }

    /// Renders this shape as a JSON schema fragment.
    pub fn json_schema(&self, mode: SchemaMode) -> Value {
        match self {
            Shape::String => json!({ "type": "string" }),
            Shape::Enum(values) => json!({ "type": "string", "enum": values }),
            Shape::Integer => json!({ "type": "integer" }),
            Shape::Number => json!({ "type": "number" }),
            Shape::Boolean => json!({ "type": "boolean" }),
            Shape::Timestamp => json!({ "type": "string", "format": "date-time" }),
            Shape::List { item, .. } => json!({
                "type": "array",
                "items": item.json_schema(mode),
            }),
            Shape::Map(value) => json!({
                "type": "object",
                "additionalProperties": value.json_schema(mode),
            }),
            Shape::Any => json!({ "type": "object", "additionalProperties": true }),
            Shape::Structure(members) => {
                let mut properties = Map::new();
                for member in members {
                    properties.insert(member.name.clone(), member.shape.json_schema(mode));
                }
                let required: Vec<&str> = members
                    .iter()
                    .filter(|m| m.required)
                    .map(|m| m.name.as_str())
                    .collect();

                let mut schema = Map::new();
                schema.insert("type".to_string(), json!("object"));
                schema.insert("properties".to_string(), Value::Object(properties));
                if !required.is_empty() && mode == SchemaMode::Input {
                    schema.insert("required".to_string(), json!(required));
                }
                if mode == SchemaMode::Output {
                    schema.insert("additionalProperties".to_string(), json!(true));
                }
                Value::Object(schema)
            }
        }
    }

    /// Checks `value` against this shape and collects every violation.
    ///
    /// Only the JSON type of each declared field and the presence of required
    /// fields are checked. Undeclared fields are accepted and passed through.
    pub fn validate(&self, value: &Value, path: &str, violations: &mut Vec<Violation>) {
        match (self, value) {
            (_, Value::Null) => {}
            (Shape::Any, _) => {}
            (Shape::String | Shape::Enum(_), Value::String(_)) => {}
            (Shape::Integer, Value::Number(n)) if n.is_i64() || n.is_u64() => {}
            (Shape::Number, Value::Number(_)) => {}
            (Shape::Boolean, Value::Bool(_)) => {}
            (Shape::Timestamp, Value::String(_) | Value::Number(_)) => {}
            (Shape::List { item, .. }, Value::Array(items)) => {
                for (index, element) in items.iter().enumerate() {
                    item.validate(element, &format!("{}[{}]", path, index), violations);
                }
            }
            (Shape::Map(value_shape), Value::Object(entries)) => {
                for (key, element) in entries {
                    value_shape.validate(element, &join_path(path, key), violations);
                }
            }
            (Shape::Structure(members), Value::Object(fields)) => {
                for member in members {
                    let member_path = join_path(path, &member.name);
                    match fields.get(&member.name) {
                        None | Some(Value::Null) if member.required => {
                            violations.push(Violation::Missing { path: member_path });
                        }
                        Some(field) => member.shape.validate(field, &member_path, violations),
                        None => {}
                    }
                }
            }
            (shape, other) => violations.push(Violation::WrongType {
                path: path.to_string(),
                expected: shape.type_name(),
                found: json_type_name(other),
            }),
        }
    }
}

fn join_path(parent: &str, child: &str) -> String {
    if parent.is_empty() {
        child.to_string()
    } else {
        format!("{}.{}", parent, child)
    }
}

/// Human-readable JSON type of a value, for error messages.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vpc_config() -> Shape {
        structure([
            optional("subnetIds", string_list()),
            optional("securityGroupIds", string_list()),
            optional("endpointPublicAccess", boolean()),
        ])
    }

    fn create_cluster() -> Shape {
        structure([
            required("name", string()),
            required("roleArn", string()),
            required("resourcesVpcConfig", vpc_config()),
            optional("version", string()),
            optional("tags", string_map()),
        ])
    }

    #[test]
    fn test_input_schema_lists_required_members() {
        let schema = create_cluster().json_schema(SchemaMode::Input);
        assert_eq!(schema["type"], "object");
        assert_eq!(
            schema["required"],
            json!(["name", "roleArn", "resourcesVpcConfig"])
        );
        assert_eq!(
            schema["properties"]["resourcesVpcConfig"]["properties"]["subnetIds"]["type"],
            "array"
        );
        assert!(schema.get("additionalProperties").is_none());
    }

    #[test]
    fn test_output_schema_tolerates_drift() {
        let schema = create_cluster().json_schema(SchemaMode::Output);
        assert_eq!(schema["additionalProperties"], json!(true));
        assert_eq!(
            schema["properties"]["resourcesVpcConfig"]["additionalProperties"],
            json!(true)
        );
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_any_renders_passthrough() {
        assert_eq!(
            any().json_schema(SchemaMode::Input),
            json!({ "type": "object", "additionalProperties": true })
        );
    }

    #[test]
    fn test_validate_reports_missing_and_wrong_types() {
        let value = json!({
            "name": "c1",
            "resourcesVpcConfig": { "subnetIds": ["subnet-1", 7] },
            "version": 1.29,
        });
        let mut violations = Vec::new();
        create_cluster().validate(&value, "", &mut violations);

        assert_eq!(violations.len(), 3);
        assert!(violations.contains(&Violation::Missing {
            path: "roleArn".to_string()
        }));
        assert!(violations.contains(&Violation::WrongType {
            path: "resourcesVpcConfig.subnetIds[1]".to_string(),
            expected: "a string",
            found: "a number",
        }));
        assert!(violations.contains(&Violation::WrongType {
            path: "version".to_string(),
            expected: "a string",
            found: "a number",
        }));
    }

    #[test]
    fn test_validate_accepts_unknown_fields_and_nulls() {
        let value = json!({
            "name": "c1",
            "roleArn": "arn:aws:iam::123456789012:role/eks",
            "resourcesVpcConfig": {},
            "version": null,
            "somethingNew": { "nested": true },
        });
        let mut violations = Vec::new();
        create_cluster().validate(&value, "", &mut violations);
        assert!(violations.is_empty(), "{:?}", violations);
    }

    #[test]
    fn test_required_null_is_missing() {
        let mut violations = Vec::new();
        create_cluster().validate(
            &json!({ "name": null, "roleArn": "r", "resourcesVpcConfig": {} }),
            "",
            &mut violations,
        );
        assert_eq!(
            violations,
            vec![Violation::Missing {
                path: "name".to_string()
            }]
        );
    }

    #[test]
    fn test_member_locations() {
        let shape = structure([
            required("clusterName", string()).path(),
            optional("maxResults", integer()).query("maxResults"),
            optional("token", string()).header("x-token"),
        ]);
        assert_eq!(shape.member("clusterName").unwrap().location, Location::Path);
        assert_eq!(
            shape.member("maxResults").unwrap().location,
            Location::Query("maxResults".to_string())
        );
        assert_eq!(
            shape.member("token").unwrap().location,
            Location::Header("x-token".to_string())
        );
        assert_eq!(shape.required_members(), vec!["clusterName"]);
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::WrongType {
            path: "a.b".to_string(),
            expected: "an integer",
            found: "a string",
        };
        assert_eq!(v.to_string(), "'a.b' must be an integer, got a string");
    }
}
