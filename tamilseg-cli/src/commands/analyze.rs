//! Analyze command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tamilseg_core::TamilTokenizer;

use crate::config::CliConfig;
use crate::input::InputArgs;
use crate::output::report::{write_structures, StructureReport};
use crate::output::{open_writer, OutputFormat};

/// Arguments for the analyze command
#[derive(Debug, Args)]
pub struct AnalyzeArgs {
    /// Word to analyze (repeatable); the words of the input are used otherwise
    #[arg(short, long = "word", value_name = "WORD")]
    pub words: Vec<String>,

    #[command(flatten)]
    pub input: InputArgs,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl AnalyzeArgs {
    /// Execute the analyze command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        let tokenizer = TamilTokenizer::with_config(config.core_config()?);
        let format = config.output_format(self.format)?;

        let sources = if self.words.is_empty() {
            self.input.load()?
        } else {
            Vec::new()
        };

        let mut words: Vec<&str> = self.words.iter().map(String::as_str).collect();
        for source in &sources {
            words.extend(tokenizer.tokenize_words(&source.text)?);
        }

        let mut reports = Vec::with_capacity(words.len());
        for word in words {
            reports.push(StructureReport {
                word,
                structure: tokenizer.analyze_word_structure(word)?,
            });
        }
        log::info!("Analyzed {} word(s)", reports.len());

        let mut writer = open_writer(self.output.as_deref())?;
        write_structures(&mut writer, format, &reports, config.output.pretty_json)
    }
}
