//! Tokenize command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use tamilseg_core::{TamilTokenizer, TokenizeMethod};

use crate::config::CliConfig;
use crate::input::InputArgs;
use crate::output::{create_formatter, open_writer, OutputFormat};

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Tokenization method (words, sentences, characters, graphemes, syllables)
    #[arg(short, long, value_name = "METHOD")]
    pub method: Option<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self, config: &CliConfig) -> Result<()> {
        log::debug!("Arguments: {:?}", self);

        let tokenizer = TamilTokenizer::with_config(config.core_config()?);
        let method = match &self.method {
            Some(name) => name.parse::<TokenizeMethod>()?,
            None => tokenizer.config().default_method(),
        };
        let format = config.output_format(self.format)?;

        let sources = self.input.load()?;
        log::info!("Tokenizing {} source(s) by {}", sources.len(), method);

        let writer = open_writer(self.output.as_deref())?;
        let mut formatter = create_formatter(format, writer, config.output.pretty_json);

        let mut index = 0;
        for source in &sources {
            let tokens = tokenizer.tokenize_with(&source.text, method)?;
            log::debug!("{}: {} token(s)", source.name, tokens.len());

            for token in tokens {
                formatter.format_token(token, index)?;
                index += 1;
            }
        }

        formatter.finish()
    }
}
