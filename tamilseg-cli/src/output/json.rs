//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs tokens as JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    tokens: Vec<TokenData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct TokenData {
    /// The token text
    pub text: String,
    /// Position of the token in its source
    pub index: usize,
    /// Length of the token in code points
    pub length: usize,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            tokens: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_token(&mut self, token: &str, index: usize) -> Result<()> {
        self.tokens.push(TokenData {
            text: token.to_string(),
            index,
            length: token.chars().count(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.tokens)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.tokens)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
