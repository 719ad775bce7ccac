//! Input handling module

use anyhow::Result;
use clap::Args;
use std::io;

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

/// Where a command reads its text from
#[derive(Debug, Args, Default)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Text given directly on the command line
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,
}

/// One loaded piece of text and where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct Source {
    /// Display name: a path, `<text>` or `<stdin>`
    pub name: String,
    /// Full text content
    pub text: String,
}

impl InputArgs {
    /// Load every source; stdin is used when nothing else is given
    pub fn load(&self) -> Result<Vec<Source>> {
        if let Some(text) = &self.text {
            return Ok(vec![Source {
                name: "<text>".to_string(),
                text: text.clone(),
            }]);
        }

        if self.input.is_empty() {
            log::info!("Reading from stdin");
            return Ok(vec![Source {
                name: "<stdin>".to_string(),
                text: FileReader::read_stdin(io::stdin())?,
            }]);
        }

        let files = resolve_patterns(&self.input)?;
        log::info!("Resolved {} input file(s)", files.len());

        files
            .iter()
            .map(|path| {
                Ok(Source {
                    name: path.display().to_string(),
                    text: FileReader::read_text(path)?,
                })
            })
            .collect()
    }
}
