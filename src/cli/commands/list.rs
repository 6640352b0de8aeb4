//! List command - prints the block catalog.

use super::CommandContext;
use anyhow::Result;
use aws_blocks::service::Service;
use clap::Parser;
use serde_json::{json, Value};

/// Arguments for the list command
#[derive(Parser, Debug, Clone)]
pub struct ListArgs {
    /// Only list blocks of this service (eks, rds, waf)
    #[arg(short, long)]
    pub service: Option<Service>,
}

impl ListArgs {
    /// Execute the list command
    pub async fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let blocks = ctx.blocks(self.service);

        if ctx.output.is_json() {
            let entries: Vec<Value> = blocks
                .iter()
                .map(|b| {
                    json!({
                        "id": b.id(),
                        "name": b.name(),
                        "service": b.service().id(),
                        "operation": b.operation_name(),
                    })
                })
                .collect();
            ctx.output.json(&Value::Array(entries));
            return Ok(0);
        }

        let rows: Vec<Vec<String>> = blocks
            .iter()
            .map(|b| {
                vec![
                    b.id().to_string(),
                    b.name().to_string(),
                    b.service().display_name().to_string(),
                ]
            })
            .collect();
        ctx.output.table(&["ID", "TITLE", "SERVICE"], &rows);
        ctx.output.info(&format!("{} blocks", rows.len()));
        Ok(0)
    }
}
