//! Block system for aws-blocks
//!
//! This module provides the core trait, event types, and registry for the block
//! catalog. A block exposes exactly one AWS API operation to a workflow host: it
//! declares the schema of its input config, sends one command when an event
//! arrives, and emits the response as its output event.

pub mod operation;
pub mod schema;

#[cfg(feature = "eks")]
pub mod eks;
#[cfg(feature = "rds")]
pub mod rds;
#[cfg(feature = "waf")]
pub mod waf;

pub use operation::{HttpBinding, Operation, OperationBlock, REGION_FIELD};
pub use schema::{Location, Member, SchemaMode, Shape, Violation};

use crate::client::{
    ClientConfig, ClientFactory, Credentials, HttpClientFactory, ServiceClient,
};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::service::Service;
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Name of the single input and output port every block declares.
pub const DEFAULT_PORT: &str = "default";

/// Event delivered by the host for one invocation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputEvent {
    /// Operation parameters plus `region`
    #[serde(default)]
    pub input_config: Map<String, Value>,
}

impl InputEvent {
    pub fn new(input_config: Map<String, Value>) -> Self {
        Self { input_config }
    }

    /// Builds an event from a JSON value, which must be an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(input_config) => Ok(Self { input_config }),
            other => Err(Error::Internal(format!(
                "input config must be a JSON object, got {}",
                schema::json_type_name(&other)
            ))),
        }
    }
}

/// Event emitted by a block after its command completes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputEvent {
    /// Output port the event is emitted on
    pub output: String,
    /// Response object of the AWS call
    pub data: Value,
}

impl OutputEvent {
    /// Creates an event on the default output port.
    pub fn new(data: Value) -> Self {
        Self {
            output: DEFAULT_PORT.to_string(),
            data,
        }
    }
}

/// App-level settings shared by every invocation.
#[derive(Clone)]
pub struct BlockContext {
    /// Static credentials used to sign requests
    pub credentials: Credentials,
    /// Custom endpoint replacing the service's default URL
    pub endpoint: Option<String>,
    /// Builds one client per invocation
    pub client_factory: Arc<dyn ClientFactory>,
}

impl std::fmt::Debug for BlockContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockContext")
            .field("credentials", &self.credentials)
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl BlockContext {
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: None,
            client_factory: Arc::new(HttpClientFactory::default()),
        }
    }

    /// Builds a context from loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Self {
            credentials: config.credentials.to_credentials(),
            endpoint: config.credentials.endpoint.clone(),
            client_factory: Arc::new(HttpClientFactory::new(config.http.clone())),
        }
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_client_factory(mut self, factory: Arc<dyn ClientFactory>) -> Self {
        self.client_factory = factory;
        self
    }

    /// Client configuration for one call in `region`.
    pub fn client_config(&self, region: &str) -> ClientConfig {
        ClientConfig {
            region: region.to_string(),
            credentials: self.credentials.clone(),
            endpoint: self.endpoint.clone(),
        }
    }

    /// Constructs a fresh client for one call in `region`.
    pub fn client(&self, region: &str) -> Result<Arc<dyn ServiceClient>> {
        self.client_factory.create(self.client_config(region))
    }
}

/// Trait that all blocks must implement
#[async_trait]
pub trait Block: Send + Sync + std::fmt::Debug {
    /// Catalog id (`eks.deleteAddon`)
    fn id(&self) -> &str;

    /// Title shown by the host (`Delete Addon`)
    fn name(&self) -> &str;

    /// Returns a description of what the block does
    fn description(&self) -> &str;

    /// Service the block calls
    fn service(&self) -> Service;

    /// AWS operation the block sends
    fn operation_name(&self) -> &str;

    /// Schema of the `default` input config
    fn input_schema(&self) -> Value;

    /// Schema of the `default` output event
    fn output_schema(&self) -> Value;

    /// Checks an input config against the input schema
    fn validate(&self, input: &Map<String, Value>) -> Result<()>;

    /// Handles one invocation
    async fn on_event(&self, event: InputEvent, context: &BlockContext) -> Result<OutputEvent>;

    /// Registration document consumed by the host.
    fn manifest(&self) -> Value {
        json!({
            "name": self.name(),
            "description": self.description(),
            "inputs": {
                "default": {
                    "config": self.input_schema(),
                },
            },
            "outputs": {
                "default": {
                    "possiblePrimaryParents": [DEFAULT_PORT],
                    "type": self.output_schema(),
                },
            },
        })
    }
}

/// Registry for looking up blocks by id
pub struct BlockRegistry {
    blocks: IndexMap<String, Arc<dyn Block>>,
}

impl BlockRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            blocks: IndexMap::new(),
        }
    }

    /// Create a registry with every enabled service catalog
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for operation in builtin_operations() {
            registry.register(Arc::new(OperationBlock::new(operation)));
        }
        registry
    }

    /// Register a block, replacing any block with the same id
    pub fn register(&mut self, block: Arc<dyn Block>) {
        self.blocks.insert(block.id().to_string(), block);
    }

    /// Get a block by id
    pub fn get(&self, id: &str) -> Option<Arc<dyn Block>> {
        self.blocks.get(id).cloned()
    }

    /// Check if a block exists
    pub fn contains(&self, id: &str) -> bool {
        self.blocks.contains_key(id)
    }

    /// Get all block ids in registration order
    pub fn ids(&self) -> Vec<&str> {
        self.blocks.keys().map(|s| s.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Iterate over every registered block
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Block>> {
        self.blocks.values()
    }

    /// Index of one service's blocks, keyed by lower-camel operation name
    pub fn by_service(&self, service: Service) -> IndexMap<String, Arc<dyn Block>> {
        let prefix = format!("{}.", service.id());
        self.blocks
            .iter()
            .filter_map(|(id, block)| {
                id.strip_prefix(&prefix)
                    .map(|key| (key.to_string(), Arc::clone(block)))
            })
            .collect()
    }

    /// Find a block by title, ignoring case (`delete addon`)
    pub fn find_by_name(&self, name: &str) -> Vec<Arc<dyn Block>> {
        self.blocks
            .values()
            .filter(|b| b.name().eq_ignore_ascii_case(name))
            .cloned()
            .collect()
    }

    /// Resolve an id, or a title that names exactly one block
    pub fn resolve(&self, id_or_name: &str) -> Result<Arc<dyn Block>> {
        if let Some(block) = self.get(id_or_name) {
            return Ok(block);
        }
        let mut matches = self.find_by_name(id_or_name);
        match matches.len() {
            1 => Ok(matches.remove(0)),
            0 => Err(Error::BlockNotFound(id_or_name.to_string())),
            _ => Err(Error::BlockNotFound(format!(
                "{} (ambiguous: {})",
                id_or_name,
                matches.iter().map(|b| b.id()).collect::<Vec<_>>().join(", ")
            ))),
        }
    }

    /// Invoke a block by id
    pub async fn invoke(
        &self,
        id: &str,
        event: InputEvent,
        context: &BlockContext,
    ) -> Result<OutputEvent> {
        let block = self
            .get(id)
            .ok_or_else(|| Error::BlockNotFound(id.to_string()))?;
        block.on_event(event, context).await
    }
}

impl Default for BlockRegistry {
    fn default() -> Self {
        Self::with_builtins()
    }
}

/// Operations of every service enabled at compile time.
pub fn builtin_operations() -> Vec<Operation> {
    let mut operations = Vec::new();
    #[cfg(feature = "eks")]
    operations.extend(eks::operations());
    #[cfg(feature = "rds")]
    operations.extend(rds::operations());
    #[cfg(feature = "waf")]
    operations.extend(waf::operations());
    operations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blocks::schema::{required, string, structure};

    #[derive(Debug)]
    struct TestBlock;

    #[async_trait]
    impl Block for TestBlock {
        fn id(&self) -> &str {
            "test.echo"
        }

        fn name(&self) -> &str {
            "Echo"
        }

        fn description(&self) -> &str {
            "A test block"
        }

        fn service(&self) -> Service {
            Service::Eks
        }

        fn operation_name(&self) -> &str {
            "Echo"
        }

        fn input_schema(&self) -> Value {
            json!({ "type": "object" })
        }

        fn output_schema(&self) -> Value {
            json!({ "type": "object", "additionalProperties": true })
        }

        fn validate(&self, input: &Map<String, Value>) -> Result<()> {
            match input.get("message") {
                Some(Value::String(_)) => Ok(()),
                Some(_) => Err(Error::invalid_input(self.id(), "'message' must be a string")),
                None => Err(Error::missing_parameter(self.id(), "message")),
            }
        }

        async fn on_event(
            &self,
            event: InputEvent,
            _context: &BlockContext,
        ) -> Result<OutputEvent> {
            Ok(OutputEvent::new(Value::Object(event.input_config)))
        }
    }

    #[test]
    fn test_block_registry() {
        let mut registry = BlockRegistry::new();
        registry.register(Arc::new(TestBlock));

        assert!(registry.contains("test.echo"));
        assert!(!registry.contains("nonexistent"));
        assert_eq!(registry.get("test.echo").unwrap().name(), "Echo");
        assert_eq!(registry.resolve("echo").unwrap().id(), "test.echo");
        assert!(matches!(
            registry.resolve("missing"),
            Err(Error::BlockNotFound(_))
        ));
    }

    #[test]
    fn test_validate_runs_block_checks() {
        let mut input = Map::new();
        assert!(matches!(
            TestBlock.validate(&input),
            Err(Error::MissingParameter { ref parameter, .. }) if parameter == "message"
        ));

        input.insert("message".to_string(), json!(1));
        assert!(matches!(
            TestBlock.validate(&input),
            Err(Error::InvalidInput { .. })
        ));

        input.insert("message".to_string(), json!("hi"));
        assert!(TestBlock.validate(&input).is_ok());
    }

    #[test]
    fn test_manifest_shape() {
        let manifest = TestBlock.manifest();
        assert_eq!(manifest["name"], "Echo");
        assert_eq!(manifest["inputs"]["default"]["config"]["type"], "object");
        assert_eq!(
            manifest["outputs"]["default"]["possiblePrimaryParents"],
            json!(["default"])
        );
        assert_eq!(
            manifest["outputs"]["default"]["type"]["additionalProperties"],
            json!(true)
        );
    }

    #[test]
    fn test_by_service_keys() {
        let mut registry = BlockRegistry::new();
        registry.register(Arc::new(OperationBlock::new(
            Operation::new(Service::Eks, "DeleteAddon", "x").with_input(structure([
                required("clusterName", string()).path(),
                required("addonName", string()).path(),
            ])),
        )));
        registry.register(Arc::new(OperationBlock::new(Operation::new(
            Service::Waf,
            "GetChangeToken",
            "x",
        ))));

        let eks = registry.by_service(Service::Eks);
        assert_eq!(eks.len(), 1);
        assert!(eks.contains_key("deleteAddon"));
        assert!(registry.by_service(Service::Waf).contains_key("getChangeToken"));
        assert!(registry.by_service(Service::Rds).is_empty());
    }

    #[test]
    fn test_input_event_wire_name() {
        let event: InputEvent =
            serde_json::from_value(json!({ "inputConfig": { "region": "us-east-1" } })).unwrap();
        assert_eq!(event.input_config["region"], "us-east-1");
        assert!(InputEvent::from_value(json!([1, 2])).is_err());
    }

    #[tokio::test]
    async fn test_registry_invoke_unknown_block() {
        let registry = BlockRegistry::new();
        let context = BlockContext::new(Credentials::new("A", "B", None));
        let result = registry
            .invoke("eks.nothing", InputEvent::default(), &context)
            .await;
        assert!(matches!(result, Err(Error::BlockNotFound(_))));
    }
}
