//! Configuration module

use anyhow::{Context, Result};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::CliError;
use crate::output::OutputFormat;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Processing configuration
    #[serde(default)]
    pub processing: ProcessingConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Processing-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ProcessingConfig {
    /// Method used when `--method` is not given
    pub default_method: String,

    /// Strip non-Tamil symbols when cleaning
    pub strip_punctuation: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            default_method: "words".to_string(),
            strip_punctuation: false,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Format used when `--format` is not given
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content).map_err(|e| {
            CliError::InvalidConfig {
                path: path.to_path_buf(),
                reason: e.message().to_string(),
            }
            .into()
        })
    }

    /// Load from `path` when given, otherwise use defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                log::info!("Loading configuration from {}", path.display());
                Self::load(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Core tokenizer configuration derived from the processing section
    pub fn core_config(&self) -> Result<tamilseg_core::Config> {
        tamilseg_core::Config::builder()
            .method(&self.processing.default_method)
            .strip_punctuation(self.processing.strip_punctuation)
            .build()
            .map_err(|_| {
                CliError::UnknownMethod(self.processing.default_method.clone()).into()
            })
    }

    /// Resolve the output format, preferring the command-line value
    pub fn output_format(&self, cli_value: Option<OutputFormat>) -> Result<OutputFormat> {
        if let Some(format) = cli_value {
            return Ok(format);
        }

        OutputFormat::from_str(&self.output.default_format, true)
            .map_err(|_| {
                CliError::UnknownFormat(self.output.default_format.clone()).into()
            })
    }
}
