//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Markdown formatter - outputs tokens as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    token_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            token_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_token(&mut self, token: &str, _index: usize) -> Result<()> {
        self.token_count += 1;
        writeln!(self.writer, "{}. {}", self.token_count, token)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total tokens: {}*", self.token_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbered_list_with_footer() {
        let mut buffer = Vec::new();
        let mut formatter = MarkdownFormatter::new(&mut buffer);
        formatter.format_token("வணக்கம்", 0).unwrap();
        formatter.format_token("நலமா", 1).unwrap();
        formatter.finish().unwrap();

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("1. வணக்கம்\n2. நலமா\n"));
        assert!(output.ends_with("---\n*Total tokens: 2*\n"));
    }
}
