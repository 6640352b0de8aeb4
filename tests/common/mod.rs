//! Shared test utilities for the aws-blocks test suite.
//!
//! This module provides:
//! - A recording client factory that captures every `ClientConfig` and
//!   `Command` and answers with a canned reply
//! - Credential and event fixtures
//!
//! # Usage
//!
//! ```rust,ignore
//! mod common;
//! use common::*;
//! ```

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::{Map, Value};

use aws_blocks::blocks::{BlockContext, InputEvent};
use aws_blocks::client::{ClientConfig, ClientFactory, Command, Credentials, ServiceClient};
use aws_blocks::error::{Error, Result, ServiceError};
use aws_blocks::service::Service;

// ============================================================================
// Fixtures
// ============================================================================

pub const ACCESS_KEY_ID: &str = "AKIDEXAMPLE";
pub const SECRET_ACCESS_KEY: &str = "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY";

/// Static credentials without a session token.
pub fn test_credentials() -> Credentials {
    Credentials::new(ACCESS_KEY_ID, SECRET_ACCESS_KEY, None)
}

/// Builds an input event from a JSON object literal.
pub fn event(value: Value) -> InputEvent {
    InputEvent::from_value(value).expect("event fixtures are JSON objects")
}

/// Converts a JSON object literal into a map.
pub fn object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {}", other),
    }
}

// ============================================================================
// Recording client
// ============================================================================

/// What the mock client answers with.
#[derive(Debug, Clone)]
pub enum MockReply {
    /// Resolve with this response body
    Body(Value),
    /// Resolve without a body
    Empty,
    /// Reject with this service error
    Fail(ServiceError),
}

/// A command as the client saw it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCommand {
    pub service: Service,
    pub operation: String,
    pub input: Map<String, Value>,
}

#[derive(Debug)]
struct MockState {
    reply: RwLock<MockReply>,
    configs: RwLock<Vec<ClientConfig>>,
    commands: RwLock<Vec<RecordedCommand>>,
    clients_created: AtomicU32,
}

/// A client factory for testing purposes.
///
/// Every client it builds shares one state, so a test can inspect what the
/// block handed to the constructor and to `send`.
///
/// # Example
///
/// ```rust,ignore
/// let factory = MockClientFactory::returning(json!({ "addon": {} }));
/// let context = factory.context();
/// registry.invoke("eks.deleteAddon", event, &context).await?;
/// assert_eq!(factory.commands().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockClientFactory {
    state: Arc<MockState>,
}

impl MockClientFactory {
    fn with_reply(reply: MockReply) -> Self {
        Self {
            state: Arc::new(MockState {
                reply: RwLock::new(reply),
                configs: RwLock::new(Vec::new()),
                commands: RwLock::new(Vec::new()),
                clients_created: AtomicU32::new(0),
            }),
        }
    }

    /// Clients answer with `body`.
    pub fn returning(body: Value) -> Self {
        Self::with_reply(MockReply::Body(body))
    }

    /// Clients answer without a body.
    pub fn returning_nothing() -> Self {
        Self::with_reply(MockReply::Empty)
    }

    /// Clients reject with `error`.
    pub fn failing(error: ServiceError) -> Self {
        Self::with_reply(MockReply::Fail(error))
    }

    /// Change the reply for subsequent sends.
    pub fn set_reply(&self, reply: MockReply) {
        *self.state.reply.write() = reply;
    }

    /// A block context with test credentials using this factory.
    pub fn context(&self) -> BlockContext {
        BlockContext::new(test_credentials()).with_client_factory(Arc::new(self.clone()))
    }

    /// Every configuration passed to the factory.
    pub fn configs(&self) -> Vec<ClientConfig> {
        self.state.configs.read().clone()
    }

    /// Every command sent through a client of this factory.
    pub fn commands(&self) -> Vec<RecordedCommand> {
        self.state.commands.read().clone()
    }

    /// The only command sent; panics unless exactly one was.
    pub fn single_command(&self) -> RecordedCommand {
        let commands = self.commands();
        assert_eq!(commands.len(), 1, "expected exactly one command");
        commands.into_iter().next().unwrap()
    }

    pub fn clients_created(&self) -> u32 {
        self.state.clients_created.load(Ordering::SeqCst)
    }
}

impl ClientFactory for MockClientFactory {
    fn create(&self, config: ClientConfig) -> Result<Arc<dyn ServiceClient>> {
        self.state.configs.write().push(config);
        self.state.clients_created.fetch_add(1, Ordering::SeqCst);
        Ok(Arc::new(MockClient {
            state: Arc::clone(&self.state),
        }))
    }
}

struct MockClient {
    state: Arc<MockState>,
}

#[async_trait]
impl ServiceClient for MockClient {
    async fn send(&self, command: &Command) -> Result<Option<Value>> {
        self.state.commands.write().push(RecordedCommand {
            service: command.service(),
            operation: command.name().to_string(),
            input: command.input().clone(),
        });

        let reply = self.state.reply.read().clone();
        match reply {
            MockReply::Body(body) => Ok(Some(body)),
            MockReply::Empty => Ok(None),
            MockReply::Fail(error) => Err(Error::Service(error)),
        }
    }
}
