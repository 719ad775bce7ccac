//! Public API for tamilseg-core
//!
//! Validated entry points over the domain segmenters, plus a lazily built
//! shared tokenizer for callers that do not want to own one.

mod config;
mod default;
mod error;
mod input;
mod method;
mod tokenizer;

#[cfg(test)]
mod tests;

pub use config::{Config, ConfigBuilder};
pub use default::{
    analyze_word_structure, clean_text, default_tokenizer, get_statistics, normalize_text,
    tokenize, tokenize_characters, tokenize_graphemes, tokenize_sentences, tokenize_syllables,
    tokenize_words,
};
pub use error::{Error, Result};
pub use input::{validate_text, Input};
pub use method::TokenizeMethod;
pub use tokenizer::TamilTokenizer;
