//! Subcommands module for aws-blocks CLI
//!
//! This module contains all the subcommand implementations.

pub mod describe;
pub mod invoke;
pub mod list;
pub mod manifest;

use crate::cli::output::OutputFormatter;
use aws_blocks::blocks::{Block, BlockRegistry};
use aws_blocks::config::Config;
use aws_blocks::service::Service;
use std::sync::Arc;

/// Common context shared between commands
pub struct CommandContext {
    /// Configuration
    pub config: Config,
    /// Output formatter
    pub output: OutputFormatter,
    /// Block catalog
    pub registry: BlockRegistry,
}

impl CommandContext {
    /// Create a new command context from CLI arguments
    pub fn new(cli: &crate::cli::Cli, config: Config) -> Self {
        let output = OutputFormatter::new(!cli.no_color, cli.is_json(), cli.verbosity());

        Self {
            config,
            output,
            registry: BlockRegistry::with_builtins(),
        }
    }

    /// Registered blocks, optionally restricted to one service
    pub fn blocks(&self, service: Option<Service>) -> Vec<Arc<dyn Block>> {
        self.registry
            .iter()
            .filter(|b| service.map_or(true, |s| b.service() == s))
            .cloned()
            .collect()
    }
}
