//! CLI module for aws-blocks
//!
//! A minimal local host for the block catalog: list and describe blocks,
//! print the registration manifests, and invoke one block with a JSON input
//! config.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// aws-blocks - single-operation AWS blocks for EKS, RDS and WAF Classic
#[derive(Parser, Debug, Clone)]
#[command(name = "aws-blocks")]
#[command(author = "aws-blocks Contributors")]
#[command(version)]
#[command(about = "Invoke single AWS API operations as workflow blocks", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "human")]
    pub output: OutputFormat,

    /// Path to configuration file
    #[arg(short = 'c', long, global = true, env = "AWS_BLOCKS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output with colors
    #[default]
    Human,
    /// JSON output for scripting
    Json,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// List the blocks in the catalog
    List(commands::list::ListArgs),

    /// Show one block's id, title and schemas
    Describe(commands::describe::DescribeArgs),

    /// Print host registration manifests
    Manifest(commands::manifest::ManifestArgs),

    /// Invoke a block with a JSON input config
    Invoke(commands::invoke::InvokeArgs),
}

impl Cli {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the effective verbosity level (0-3)
    pub fn verbosity(&self) -> u8 {
        self.verbose.min(3)
    }

    /// Check if JSON output is requested
    pub fn is_json(&self) -> bool {
        matches!(self.output, OutputFormat::Json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_invoke_arguments() {
        let cli = Cli::try_parse_from([
            "aws-blocks",
            "-vv",
            "invoke",
            "eks.deleteAddon",
            "--input",
            "-",
            "--region",
            "eu-west-1",
        ])
        .unwrap();
        assert_eq!(cli.verbosity(), 2);
        match cli.command {
            Commands::Invoke(args) => {
                assert_eq!(args.block, "eks.deleteAddon");
                assert_eq!(args.input, Some(PathBuf::from("-")));
                assert_eq!(args.region.as_deref(), Some("eu-west-1"));
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_list_service_filter() {
        let cli =
            Cli::try_parse_from(["aws-blocks", "--output", "json", "list", "--service", "rds"])
                .unwrap();
        assert!(cli.is_json());
        match cli.command {
            Commands::List(args) => {
                assert_eq!(args.service, Some(aws_blocks::service::Service::Rds))
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_unknown_service_rejected() {
        assert!(Cli::try_parse_from(["aws-blocks", "list", "--service", "s3"]).is_err());
    }
}
