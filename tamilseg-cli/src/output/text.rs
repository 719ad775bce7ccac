//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::Write;

/// Plain text formatter - outputs one token per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_token(&mut self, token: &str, _index: usize) -> Result<()> {
        writeln!(self.writer, "{token}")?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_token_per_line() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer);
        formatter.format_token("தமிழ்", 0).unwrap();
        formatter.format_token("மொழி", 1).unwrap();
        formatter.finish().unwrap();

        assert_eq!(String::from_utf8(buffer).unwrap(), "தமிழ்\nமொழி\n");
    }
}
