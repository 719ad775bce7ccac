//! Configuration API for the tokenizer

use crate::api::{Error, TokenizeMethod};
use std::str::FromStr;

/// Tokenizer configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub(crate) default_method: TokenizeMethod,
    pub(crate) strip_punctuation: bool,
}

impl Config {
    /// Create a configuration builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Method used by `tokenize_default`
    pub fn default_method(&self) -> TokenizeMethod {
        self.default_method
    }

    /// Whether `clean` strips foreign symbols
    pub fn strip_punctuation(&self) -> bool {
        self.strip_punctuation
    }
}

/// Fluent builder for configuration
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    method: Option<String>,
    strip_punctuation: Option<bool>,
}

impl ConfigBuilder {
    /// Create a new configuration builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the default method by name
    pub fn method(mut self, name: impl Into<String>) -> Self {
        self.method = Some(name.into());
        self
    }

    /// Strip foreign symbols in `clean`
    pub fn strip_punctuation(mut self, strip: bool) -> Self {
        self.strip_punctuation = Some(strip);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config, Error> {
        let mut config = Config::default();

        if let Some(name) = self.method {
            config.default_method = TokenizeMethod::from_str(&name)
                .map_err(|_| Error::Configuration(format!("unknown default method: {name}")))?;
        }

        if let Some(strip) = self.strip_punctuation {
            config.strip_punctuation = strip;
        }

        Ok(config)
    }
}
