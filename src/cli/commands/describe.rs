//! Describe command - shows one block in full.

use super::CommandContext;
use anyhow::Result;
use clap::Parser;
use serde_json::json;

/// Arguments for the describe command
#[derive(Parser, Debug, Clone)]
pub struct DescribeArgs {
    /// Block id (`eks.deleteAddon`) or title (`Delete Addon`)
    pub block: String,
}

impl DescribeArgs {
    /// Execute the describe command
    pub async fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let block = match ctx.registry.resolve(&self.block) {
            Ok(block) => block,
            Err(e) => {
                ctx.output.error(&e.to_string());
                return Ok(e.exit_code());
            }
        };

        ctx.output.json(&json!({
            "id": block.id(),
            "name": block.name(),
            "description": block.description(),
            "service": block.service().id(),
            "operation": block.operation_name(),
            "inputSchema": block.input_schema(),
            "outputSchema": block.output_schema(),
        }));
        Ok(0)
    }
}
