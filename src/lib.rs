//! # aws-blocks - single-operation AWS blocks for workflow hosts
//!
//! Every block wraps exactly one AWS API operation. A host registers the
//! block's manifest, delivers an input event whose config holds the
//! operation parameters plus a `region`, and receives the service response on
//! the block's `default` output port.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  Host (workflow platform / CLI)              │
//! └──────────────────────────────────────────────────────────────┘
//!                               │ InputEvent
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │     BlockRegistry ── OperationBlock (eks / rds / waf)        │
//! │       validate input, strip region, build Command            │
//! └──────────────────────────────────────────────────────────────┘
//!                               │ ClientConfig + Command
//!                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │   ClientFactory ── AwsClient (SigV4, one attempt, no retry)  │
//! │      rest-json (EKS) │ query + XML (RDS) │ json-1.1 (WAF)    │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Quick Example
//!
//! ```rust,ignore
//! use aws_blocks::prelude::*;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let registry = BlockRegistry::with_builtins();
//!     let context = BlockContext::new(Credentials::new("AKID", "secret", None));
//!
//!     let event = InputEvent::from_value(json!({
//!         "region": "us-east-1",
//!         "clusterName": "prod",
//!         "addonName": "vpc-cni",
//!     }))?;
//!     let output = registry.invoke("eks.deleteAddon", event, &context).await?;
//!     println!("{}", output.data);
//!     Ok(())
//! }
//! ```

#![warn(clippy::all)]

pub mod prelude {
    //! Common imports for hosts embedding the catalog.

    pub use crate::blocks::{
        Block, BlockContext, BlockRegistry, InputEvent, Operation, OperationBlock, OutputEvent,
    };
    pub use crate::client::{ClientConfig, ClientFactory, Command, Credentials, ServiceClient};
    pub use crate::config::Config;
    pub use crate::error::{Error, Result, ServiceError};
    pub use crate::service::Service;
}

/// Block trait, registry, events and the per-service operation catalogs.
pub mod blocks;

/// Commands, client construction, wire protocols and signing.
pub mod client;

/// Layered configuration (files, then environment).
pub mod config;

pub mod error;

pub mod logging;

pub mod service;

/// Version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
