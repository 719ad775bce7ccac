//! Clean command implementation

use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;
use tamilseg_core::TamilTokenizer;

use crate::config::CliConfig;
use crate::input::InputArgs;
use crate::output::open_writer;

/// Arguments for the clean command
#[derive(Debug, Args)]
pub struct CleanArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Remove every character that is neither Tamil nor whitespace
    #[arg(short, long)]
    pub strip_punctuation: bool,

    /// Only collapse whitespace, never strip
    #[arg(long, conflicts_with = "strip_punctuation")]
    pub normalize: bool,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl CleanArgs {
    /// Execute the clean command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let tokenizer = TamilTokenizer::with_config(config.core_config()?);
        let strip = self.strip_punctuation || tokenizer.config().strip_punctuation();

        let mut writer = open_writer(self.output.as_deref())?;
        for source in self.input.load()? {
            let cleaned = if self.normalize {
                tokenizer.normalize_text(&source.text)?
            } else {
                tokenizer.clean_text(&source.text, strip)?
            };
            writeln!(writer, "{}", cleaned)?;
        }

        writer.flush()?;
        Ok(())
    }
}
