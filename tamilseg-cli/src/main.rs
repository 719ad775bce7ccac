//! Command-line entry point for tamilseg

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use tamilseg_cli::commands::{init_logging, Commands};
use tamilseg_cli::config::CliConfig;

/// Tamil text segmentation
#[derive(Debug, Parser)]
#[command(name = "tamilseg", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (TOML)
    #[arg(
        short,
        long,
        global = true,
        value_name = "FILE",
        env = "TAMILSEG_CONFIG"
    )]
    config: Option<PathBuf>,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = CliConfig::load_or_default(cli.config.as_deref())?;
    log::debug!("Configuration: {:?}", config);

    cli.command.execute(&config)
}
