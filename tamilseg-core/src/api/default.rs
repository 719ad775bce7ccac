//! Shared default tokenizer and free-function shortcuts

use std::sync::OnceLock;

use crate::api::{Result, TamilTokenizer};
use crate::domain::{Statistics, WordStructure};

/// Process-wide tokenizer, built on first use
static DEFAULT: OnceLock<TamilTokenizer> = OnceLock::new();

/// Get the shared default tokenizer
pub fn default_tokenizer() -> &'static TamilTokenizer {
    DEFAULT.get_or_init(TamilTokenizer::new)
}

/// Words of `text` using the default tokenizer
pub fn tokenize_words(text: &str) -> Result<Vec<&str>> {
    default_tokenizer().tokenize_words(text)
}

/// Sentences of `text` using the default tokenizer
pub fn tokenize_sentences(text: &str) -> Result<Vec<&str>> {
    default_tokenizer().tokenize_sentences(text)
}

/// In-script code points of `text` using the default tokenizer
pub fn tokenize_characters(text: &str) -> Result<Vec<&str>> {
    default_tokenizer().tokenize_characters(text)
}

/// Graphemes of `text` using the default tokenizer
pub fn tokenize_graphemes(text: &str) -> Result<Vec<&str>> {
    default_tokenizer().tokenize_graphemes(text)
}

/// Syllables of `text` using the default tokenizer
pub fn tokenize_syllables(text: &str) -> Result<Vec<&str>> {
    default_tokenizer().tokenize_syllables(text)
}

/// Dispatch on a method name using the default tokenizer
pub fn tokenize<'a>(text: &'a str, method: &str) -> Result<Vec<&'a str>> {
    default_tokenizer().tokenize(text, method)
}

/// Clean `text` using the default tokenizer
pub fn clean_text(text: &str, strip_punctuation: bool) -> Result<String> {
    default_tokenizer().clean_text(text, strip_punctuation)
}

/// Normalize `text` using the default tokenizer
pub fn normalize_text(text: &str) -> Result<String> {
    default_tokenizer().normalize_text(text)
}

/// Analyze one word using the default tokenizer
pub fn analyze_word_structure(word: &str) -> Result<WordStructure<'_>> {
    default_tokenizer().analyze_word_structure(word)
}

/// Statistics of `text` using the default tokenizer
pub fn get_statistics(text: &str) -> Result<Statistics> {
    default_tokenizer().get_statistics(text)
}
