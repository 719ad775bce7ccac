//! Per-word structural summary

use super::classifier::{classify, in_script, CodepointCategory};
use super::grapheme::{graphemes, Grapheme};
use super::syllable::{syllables, Syllable};

/// Read-only structure of one word
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WordStructure<'a> {
    /// Whether the word has any in-script code point
    pub is_in_script: bool,
    /// Grapheme clusters of the word
    pub graphemes: Vec<Grapheme<'a>>,
    /// Syllables of the word
    pub syllables: Vec<Syllable<'a>>,
    /// Code points in the word, in script or not
    pub char_count: usize,
    /// Contains consonant + pulli + consonant
    pub has_conjunct: bool,
    /// Contains a vowel sign or the length mark
    pub has_vowel_mark: bool,
}

impl WordStructure<'_> {
    /// Number of grapheme clusters
    pub fn grapheme_count(&self) -> usize {
        self.graphemes.len()
    }

    /// Number of syllables
    pub fn syllable_count(&self) -> usize {
        self.syllables.len()
    }
}

/// Analyze a word, or any string
pub fn analyze(word: &str) -> WordStructure<'_> {
    if !word.chars().any(in_script) {
        return WordStructure::default();
    }

    let categories: Vec<CodepointCategory> = word.chars().map(classify).collect();

    let has_conjunct = categories.windows(3).any(|w| {
        matches!(
            w,
            [
                CodepointCategory::Consonant,
                CodepointCategory::ViramaMark,
                CodepointCategory::Consonant
            ]
        )
    });
    let has_vowel_mark = categories.iter().any(|c| c.is_vowel_mark());

    WordStructure {
        is_in_script: true,
        graphemes: graphemes(word).collect(),
        syllables: syllables(word).collect(),
        char_count: categories.len(),
        has_conjunct,
        has_vowel_mark,
    }
}
