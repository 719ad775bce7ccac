//! Stats command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tamilseg_core::TamilTokenizer;

use crate::config::CliConfig;
use crate::input::InputArgs;
use crate::output::report::{write_statistics, StatisticsReport};
use crate::output::{open_writer, OutputFormat};

/// Arguments for the stats command
#[derive(Debug, Args)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl StatsArgs {
    /// Execute the stats command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let tokenizer = TamilTokenizer::with_config(config.core_config()?);
        let format = config.output_format(self.format)?;

        let sources = self.input.load()?;
        let mut reports = Vec::with_capacity(sources.len());
        for source in &sources {
            reports.push(StatisticsReport {
                source: &source.name,
                statistics: tokenizer.get_statistics(&source.text)?,
            });
        }

        let mut writer = open_writer(self.output.as_deref())?;
        write_statistics(&mut writer, format, &reports, config.output.pretty_json)
    }
}
