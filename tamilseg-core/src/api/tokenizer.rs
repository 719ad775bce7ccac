//! Tokenizer engine

use crate::api::input::validate_text;
use crate::api::{Config, Error, Input, Result, TokenizeMethod};
use crate::domain::{
    characters, grapheme, normalizer, sentences, stats, structure, syllables, words, Statistics,
    WordStructure,
};

/// Tamil tokenizer with validated entry points
///
/// Holds only its configuration, so one instance can be shared freely across
/// threads. Every operation validates and trims its input first and then runs
/// on the trimmed slice; returned tokens borrow from the caller's text.
#[derive(Debug, Clone, Default)]
pub struct TamilTokenizer {
    config: Config,
}

impl TamilTokenizer {
    /// Create a tokenizer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with custom configuration
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read text from any input source
    pub fn read_input(&self, input: Input) -> Result<String> {
        log::debug!("reading {:?}", input);
        input.into_text()
    }

    /// Maximal in-script runs
    pub fn tokenize_words<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let text = validate_text(text)?;
        let tokens: Vec<_> = words(text).map(|w| w.text).collect();
        log::debug!("tokenize_words: {} words", tokens.len());
        Ok(tokens)
    }

    /// Trimmed fragments between sentence terminators
    pub fn tokenize_sentences<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let text = validate_text(text)?;
        let tokens: Vec<_> = sentences::sentences(text).collect();
        log::debug!("tokenize_sentences: {} sentences", tokens.len());
        Ok(tokens)
    }

    /// In-script code points, one token each
    pub fn tokenize_characters<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let text = validate_text(text)?;
        let tokens: Vec<_> = characters::characters(text).collect();
        log::debug!("tokenize_characters: {} characters", tokens.len());
        Ok(tokens)
    }

    /// Grapheme clusters, checked to cover every in-script code point
    pub fn tokenize_graphemes<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let text = validate_text(text)?;
        let tokens: Vec<_> = grapheme::segment_checked(text)
            .map_err(Error::segmentation("tokenize_graphemes"))?
            .into_iter()
            .map(|g| g.text)
            .collect();
        log::debug!("tokenize_graphemes: {} graphemes", tokens.len());
        Ok(tokens)
    }

    /// Syllables
    pub fn tokenize_syllables<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        let text = validate_text(text)?;
        let tokens: Vec<_> = syllables(text).map(|s| s.text).collect();
        log::debug!("tokenize_syllables: {} syllables", tokens.len());
        Ok(tokens)
    }

    /// Collapse whitespace and optionally strip foreign symbols
    pub fn clean_text(&self, text: &str, strip_punctuation: bool) -> Result<String> {
        let text = validate_text(text)?;
        Ok(normalizer::clean(text, strip_punctuation))
    }

    /// [`clean_text`](Self::clean_text) with the configured stripping mode
    pub fn clean(&self, text: &str) -> Result<String> {
        self.clean_text(text, self.config.strip_punctuation)
    }

    /// Canonical form of a text
    pub fn normalize_text(&self, text: &str) -> Result<String> {
        let text = validate_text(text)?;
        Ok(normalizer::normalize(text))
    }

    /// Structural summary of one word
    pub fn analyze_word_structure<'a>(&self, word: &'a str) -> Result<WordStructure<'a>> {
        let word = validate_text(word)?;
        Ok(structure::analyze(word))
    }

    /// Counts and ratios over the whole text
    pub fn get_statistics(&self, text: &str) -> Result<Statistics> {
        let text = validate_text(text)?;
        let statistics = stats::compute(text);
        log::debug!(
            "get_statistics: {} words, {} sentences, {} syllables",
            statistics.words,
            statistics.sentences,
            statistics.syllables
        );
        Ok(statistics)
    }

    /// Tokenize with a method named by string, case-insensitively
    pub fn tokenize<'a>(&self, text: &'a str, method: &str) -> Result<Vec<&'a str>> {
        let method: TokenizeMethod = method.parse()?;
        self.tokenize_with(text, method)
    }

    /// Tokenize with the configured default method
    pub fn tokenize_default<'a>(&self, text: &'a str) -> Result<Vec<&'a str>> {
        self.tokenize_with(text, self.config.default_method)
    }

    /// Tokenize with an already parsed method
    pub fn tokenize_with<'a>(&self, text: &'a str, method: TokenizeMethod) -> Result<Vec<&'a str>> {
        match method {
            TokenizeMethod::Words => self.tokenize_words(text),
            TokenizeMethod::Sentences => self.tokenize_sentences(text),
            TokenizeMethod::Characters => self.tokenize_characters(text),
            TokenizeMethod::Graphemes => self.tokenize_graphemes(text),
            TokenizeMethod::Syllables => self.tokenize_syllables(text),
        }
    }
}
