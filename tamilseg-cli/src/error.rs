//! Errors raised by the CLI itself, before any text reaches the tokenizer

use std::fmt;
use std::path::PathBuf;

/// Failures in resolving inputs or loading settings
#[derive(Debug)]
pub enum CliError {
    /// A path that should be a readable file does not exist
    FileNotFound(PathBuf),
    /// None of the input patterns matched a file
    NoInputFiles(Vec<String>),
    /// A glob pattern could not be parsed
    InvalidPattern {
        /// The pattern as given
        pattern: String,
        /// Parser message
        reason: String,
    },
    /// A configuration file is not valid TOML for [`crate::config::CliConfig`]
    InvalidConfig {
        /// Configuration file
        path: PathBuf,
        /// Parser message
        reason: String,
    },
    /// `default_method` names no tokenization method
    UnknownMethod(String),
    /// `default_format` names no output format
    UnknownFormat(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            CliError::NoInputFiles(patterns) => {
                write!(f, "No input files match: {}", patterns.join(", "))
            }
            CliError::InvalidPattern { pattern, reason } => {
                write!(f, "Invalid file pattern '{pattern}': {reason}")
            }
            CliError::InvalidConfig { path, reason } => {
                write!(f, "Invalid configuration in {}: {reason}", path.display())
            }
            CliError::UnknownMethod(name) => {
                write!(f, "Unknown default method '{name}' in configuration")
            }
            CliError::UnknownFormat(name) => {
                write!(f, "Unknown default format '{name}' in configuration")
            }
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
