//! aws-blocks - single-operation AWS blocks
//!
//! This is the main entry point for the aws-blocks CLI, a minimal local host
//! for the block catalog.

mod cli;

use anyhow::Result;
use aws_blocks::config::Config;
use aws_blocks::logging::init_logging;
use cli::commands::CommandContext;
use cli::{Cli, Commands};

/// Application version information
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Load configuration; logging settings come from it
    let (config, config_error) = match Config::load(cli.config.as_ref()) {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    init_logging(cli.verbosity(), &config.logging);

    if cli.verbosity() >= 2 {
        eprintln!("aws-blocks v{}", VERSION);
    }

    let mut ctx = CommandContext::new(&cli, config);
    if let Some(e) = config_error {
        ctx.output
            .warning(&format!("Failed to load config, using defaults: {:#}", e));
    }

    // Execute the appropriate command
    let exit_code = match &cli.command {
        Commands::List(args) => args.execute(&mut ctx).await?,
        Commands::Describe(args) => args.execute(&mut ctx).await?,
        Commands::Manifest(args) => args.execute(&mut ctx).await?,
        Commands::Invoke(args) => args.execute(&mut ctx).await?,
    };

    ctx.output.flush();
    std::process::exit(exit_code);
}
