//! Manifest command - prints host registration documents.

use super::CommandContext;
use anyhow::Result;
use aws_blocks::service::Service;
use clap::Parser;
use indexmap::IndexMap;
use serde_json::Value;

/// Arguments for the manifest command
#[derive(Parser, Debug, Clone)]
pub struct ManifestArgs {
    /// Only include blocks of this service (eks, rds, waf)
    #[arg(short, long)]
    pub service: Option<Service>,
}

impl ManifestArgs {
    /// Execute the manifest command
    pub async fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let manifests: IndexMap<String, Value> = ctx
            .blocks(self.service)
            .iter()
            .map(|b| (b.id().to_string(), b.manifest()))
            .collect();

        ctx.output.json(&manifests);
        Ok(0)
    }
}
