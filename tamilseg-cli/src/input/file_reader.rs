//! File reading utilities

use anyhow::{Context, Result};
use std::io::Read;
use std::path::Path;
use tamilseg_core::Input;

use crate::error::CliError;

/// Reader producing UTF-8 text through the core input layer
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(CliError::FileNotFound(path.to_path_buf()).into());
        }

        Input::from_file(path)
            .into_text()
            .with_context(|| format!("Failed to read file: {}", path.display()))
    }

    /// Read all of a stream as UTF-8 text
    pub fn read_stdin(reader: impl Read + Send + Sync + 'static) -> Result<String> {
        Input::from_reader(reader)
            .into_text()
            .context("Failed to read from stdin")
    }
}
