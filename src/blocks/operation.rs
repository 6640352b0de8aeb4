//! Operation definitions and the generic block built from them.
//!
//! Every block in the catalog is an [`OperationBlock`]: the same template
//! instantiated with a different [`Operation`]. Nothing about control flow or
//! error handling varies between blocks, only the operation name and the
//! shapes of its input and output.

use super::schema::{structure, SchemaMode, Shape, Violation};
use super::{Block, BlockContext, InputEvent, OutputEvent};
use crate::client::Command;
use crate::error::{Error, Result};
use crate::service::Service;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Input field consumed for client construction and never forwarded.
pub const REGION_FIELD: &str = "region";

/// A region becomes a DNS label of the endpoint host.
static REGION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-z0-9]([a-z0-9-]{0,61}[a-z0-9])?$").expect("Invalid region regex")
});

/// HTTP method and URI template of a REST-JSON operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBinding {
    pub method: &'static str,
    /// URI template with `{label}` placeholders for path members
    pub uri: String,
}

impl Default for HttpBinding {
    fn default() -> Self {
        Self {
            method: "POST",
            uri: "/".to_string(),
        }
    }
}

/// One AWS API operation and the shapes of its request and response.
#[derive(Debug, Clone)]
pub struct Operation {
    pub service: Service,
    /// AWS operation name (`DeleteAddon`)
    pub name: String,
    /// Block title shown to users (`Delete Addon`)
    pub title: String,
    pub description: String,
    pub http: HttpBinding,
    pub input: Shape,
    pub output: Shape,
}

impl Operation {
    pub fn new(service: Service, name: &str, description: impl Into<String>) -> Self {
        Self {
            service,
            name: name.to_string(),
            title: humanize(name),
            description: description.into(),
            http: HttpBinding::default(),
            input: structure([]),
            output: structure([]),
        }
    }

    pub fn with_http(mut self, method: &'static str, uri: &str) -> Self {
        self.http = HttpBinding {
            method,
            uri: uri.to_string(),
        };
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_input(mut self, input: Shape) -> Self {
        self.input = input;
        self
    }

    pub fn with_output(mut self, output: Shape) -> Self {
        self.output = output;
        self
    }

    /// Catalog id: `<service>.<lowerCamelName>`.
    pub fn block_id(&self) -> String {
        format!("{}.{}", self.service.id(), lower_camel(&self.name))
    }

    /// JSON schema of the block's input config, `region` included.
    pub fn input_schema(&self) -> Value {
        let mut schema = self.input.json_schema(SchemaMode::Input);
        if let Value::Object(ref mut object) = schema {
            let mut properties = Map::new();
            properties.insert(
                REGION_FIELD.to_string(),
                json!({ "type": "string", "description": "AWS region to send the request to" }),
            );
            if let Some(Value::Object(existing)) = object.remove("properties") {
                properties.extend(existing);
            }
            object.insert("properties".to_string(), Value::Object(properties));

            let mut required = vec![json!(REGION_FIELD)];
            if let Some(Value::Array(existing)) = object.remove("required") {
                required.extend(existing);
            }
            object.insert("required".to_string(), Value::Array(required));
        }
        schema
    }

    /// JSON schema of the block's output event.
    pub fn output_schema(&self) -> Value {
        self.output.json_schema(SchemaMode::Output)
    }
}

/// Splits an operation name into words: `CreateDBInstance` becomes
/// `Create DB Instance`, `GetChangeTokenStatus` becomes `Get Change Token Status`.
pub fn humanize(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len() + 8);
    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase() || prev.is_ascii_digit() || (prev.is_uppercase() && next_is_lower)
            {
                out.push(' ');
            }
        }
        out.push(c);
    }
    out
}

/// Lower-cases the leading word of an operation name: `DeleteAddon` becomes
/// `deleteAddon`, `DBInstance` becomes `dbInstance`.
pub fn lower_camel(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    let mut out = String::with_capacity(name.len());
    let mut leading = true;
    for (i, &c) in chars.iter().enumerate() {
        if leading && c.is_uppercase() {
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if i > 0 && next_is_lower {
                leading = false;
                out.push(c);
            } else {
                out.push(c.to_ascii_lowercase());
            }
        } else {
            leading = false;
            out.push(c);
        }
    }
    out
}

/// The block template: sends one command built from the input config.
pub struct OperationBlock {
    id: String,
    operation: Arc<Operation>,
}

impl OperationBlock {
    pub fn new(operation: Operation) -> Self {
        Self {
            id: operation.block_id(),
            operation: Arc::new(operation),
        }
    }

    pub fn operation(&self) -> &Arc<Operation> {
        &self.operation
    }

    fn take_region(&self, input: &mut Map<String, Value>) -> Result<String> {
        match input.remove(REGION_FIELD) {
            Some(Value::String(region)) if REGION_REGEX.is_match(&region) => Ok(region),
            Some(Value::String(region)) if !region.is_empty() => Err(Error::invalid_input(
                &self.id,
                format!("'region' is not a valid region name: {:?}", region),
            )),
            None | Some(Value::Null) => Err(Error::missing_parameter(&self.id, REGION_FIELD)),
            Some(_) => Err(Error::invalid_input(
                &self.id,
                "'region' must be a non-empty string",
            )),
        }
    }
}

impl std::fmt::Debug for OperationBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationBlock")
            .field("id", &self.id)
            .field("operation", &self.operation.name)
            .finish()
    }
}

#[async_trait]
impl Block for OperationBlock {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.operation.title
    }

    fn description(&self) -> &str {
        &self.operation.description
    }

    fn service(&self) -> Service {
        self.operation.service
    }

    fn operation_name(&self) -> &str {
        &self.operation.name
    }

    fn input_schema(&self) -> Value {
        self.operation.input_schema()
    }

    fn output_schema(&self) -> Value {
        self.operation.output_schema()
    }

    fn validate(&self, input: &Map<String, Value>) -> Result<()> {
        let mut input = input.clone();
        self.take_region(&mut input)?;

        let mut violations = Vec::new();
        self.operation
            .input
            .validate(&Value::Object(input), "", &mut violations);

        match violations.into_iter().next() {
            None => Ok(()),
            Some(Violation::Missing { path }) => Err(Error::missing_parameter(&self.id, path)),
            Some(other) => Err(Error::invalid_input(&self.id, other.to_string())),
        }
    }

    #[instrument(skip(self, event, context), fields(block = %self.id))]
    async fn on_event(&self, event: InputEvent, context: &BlockContext) -> Result<OutputEvent> {
        self.validate(&event.input_config)?;

        let mut input = event.input_config;
        let region = self.take_region(&mut input)?;
        let command = Command::new(Arc::clone(&self.operation), input);

        let client = context.client(&region)?;
        info!(
            "Sending {} to {} in {}",
            self.operation.name, self.operation.service, region
        );
        let response = client.send(&command).await?;
        debug!("{} returned a body: {}", self.operation.name, response.is_some());

        Ok(OutputEvent::new(
            response.unwrap_or_else(|| Value::Object(Map::new())),
        ))
    }
}
