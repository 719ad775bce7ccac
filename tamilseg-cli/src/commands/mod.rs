//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use std::io::Write;

use crate::config::CliConfig;
use crate::output::OutputFormat;
use tamilseg_core::TokenizeMethod;

pub mod analyze;
pub mod clean;
pub mod generate_config;
pub mod stats;
pub mod tokenize;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into words, sentences, characters, graphemes or syllables
    Tokenize(tokenize::TokenizeArgs),

    /// Collapse whitespace and optionally strip non-Tamil symbols
    Clean(clean::CleanArgs),

    /// Show the grapheme and syllable structure of words
    Analyze(analyze::AnalyzeArgs),

    /// Compute text statistics
    Stats(stats::StatsArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Generate a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available tokenization methods
    Methods,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(config),
            Commands::Clean(args) => args.execute(config),
            Commands::Analyze(args) => args.execute(config),
            Commands::Stats(args) => args.execute(config),
            Commands::List { subcommand } => subcommand.execute(&mut std::io::stdout()),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}

impl ListCommands {
    /// Print the requested listing
    pub fn execute(&self, writer: &mut dyn Write) -> Result<()> {
        match self {
            ListCommands::Methods => {
                writeln!(writer, "Available tokenization methods:")?;
                for method in TokenizeMethod::ALL {
                    writeln!(writer, "  {:<12} {}", method.as_str(), method.description())?;
                }
            }
            ListCommands::Formats => {
                writeln!(writer, "Available output formats:")?;
                for format in OutputFormat::ALL {
                    writeln!(writer, "  {}", format.as_str())?;
                }
            }
        }
        Ok(())
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .init();
}
