//! Invoke command - runs one block like a host would.
//!
//! The input config is read as a JSON object from a file, from stdin (`-`),
//! or from `--json`. `--region` sets the config's `region`; when neither the
//! flag nor the config carries one, `defaults.region` from the configuration
//! is used.

use super::CommandContext;
use anyhow::{Context, Result};
use aws_blocks::blocks::{BlockContext, InputEvent, REGION_FIELD};
use aws_blocks::error::Error;
use clap::Parser;
use serde_json::{json, Map, Value};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Arguments for the invoke command
#[derive(Parser, Debug, Clone)]
pub struct InvokeArgs {
    /// Block id (`eks.deleteAddon`) or title (`Delete Addon`)
    pub block: String,

    /// JSON file holding the input config (`-` reads stdin)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Inline JSON input config
    #[arg(long, conflicts_with = "input")]
    pub json: Option<String>,

    /// Region to send the request to
    #[arg(short, long)]
    pub region: Option<String>,

    /// Custom endpoint URL replacing the service default
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub endpoint: Option<String>,

    /// Validate the input config without sending the request
    #[arg(long)]
    pub dry_run: bool,
}

impl InvokeArgs {
    /// Execute the invoke command
    pub async fn execute(&self, ctx: &mut CommandContext) -> Result<i32> {
        let block = match ctx.registry.resolve(&self.block) {
            Ok(block) => block,
            Err(e) => return Ok(report(ctx, &e)),
        };

        let mut input = self.read_input()?;
        apply_region(
            &mut input,
            self.region.as_deref(),
            ctx.config.defaults.region.as_deref(),
        );

        if let Err(e) = block.validate(&input) {
            return Ok(report(ctx, &e));
        }
        if self.dry_run {
            ctx.output.info(&format!("{}: input config is valid", block.id()));
            ctx.output.json(&json!({ "block": block.id(), "valid": true }));
            return Ok(0);
        }

        if !ctx.config.credentials.is_complete() {
            ctx.output.warning(
                "No AWS credentials configured; set AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY",
            );
        }

        let mut context = BlockContext::from_config(&ctx.config);
        if let Some(ref endpoint) = self.endpoint {
            context = context.with_endpoint(endpoint.clone());
        }

        ctx.output.info(&format!("Invoking {}", block.id()));
        match block.on_event(InputEvent::new(input), &context).await {
            Ok(event) => {
                ctx.output.json(&event.data);
                Ok(0)
            }
            Err(e) => Ok(report(ctx, &e)),
        }
    }

    fn read_input(&self) -> Result<Map<String, Value>> {
        let text = match (&self.json, &self.input) {
            (Some(inline), _) => inline.clone(),
            (None, Some(path)) if path == Path::new("-") => {
                let mut buffer = String::new();
                std::io::stdin()
                    .read_to_string(&mut buffer)
                    .context("Failed to read input config from stdin")?;
                buffer
            }
            (None, Some(path)) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))?,
            (None, None) => return Ok(Map::new()),
        };
        parse_input(&text)
    }
}

/// Parses an input config, which must be a JSON object. Blank input is `{}`.
fn parse_input(text: &str) -> Result<Map<String, Value>> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    let value: Value = serde_json::from_str(text).context("Input config is not valid JSON")?;
    let event = InputEvent::from_value(value)?;
    Ok(event.input_config)
}

/// `--region` wins over the config; the configured default only fills a gap.
fn apply_region(input: &mut Map<String, Value>, flag: Option<&str>, default: Option<&str>) {
    if let Some(region) = flag {
        input.insert(REGION_FIELD.to_string(), Value::String(region.to_string()));
        return;
    }
    let missing = matches!(input.get(REGION_FIELD), None | Some(Value::Null));
    if let (true, Some(region)) = (missing, default) {
        input.insert(REGION_FIELD.to_string(), Value::String(region.to_string()));
    }
}

/// Prints a block error and returns its exit code.
fn report(ctx: &CommandContext, error: &Error) -> i32 {
    if let (true, Some(service_error)) = (ctx.output.is_json(), error.as_service_error()) {
        ctx.output.json(&json!({ "error": service_error }));
    } else {
        ctx.output.error(&error.to_string());
    }
    error.exit_code()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input() {
        let input = parse_input(r#"{"region":"us-east-1","name":"c1"}"#).unwrap();
        assert_eq!(input["name"], "c1");
        assert!(parse_input("  \n").unwrap().is_empty());
        assert!(parse_input("[1]").is_err());
        assert!(parse_input("{").is_err());
    }

    #[test]
    fn test_region_flag_wins() {
        let mut input = parse_input(r#"{"region":"us-east-1"}"#).unwrap();
        apply_region(&mut input, Some("eu-west-1"), Some("ap-south-1"));
        assert_eq!(input[REGION_FIELD], "eu-west-1");
    }

    #[test]
    fn test_default_region_fills_gap_only() {
        let mut input = Map::new();
        apply_region(&mut input, None, Some("ap-south-1"));
        assert_eq!(input[REGION_FIELD], "ap-south-1");

        let mut input = parse_input(r#"{"region":"us-east-1"}"#).unwrap();
        apply_region(&mut input, None, Some("ap-south-1"));
        assert_eq!(input[REGION_FIELD], "us-east-1");

        let mut input = Map::new();
        apply_region(&mut input, None, None);
        assert!(input.get(REGION_FIELD).is_none());
    }
}
