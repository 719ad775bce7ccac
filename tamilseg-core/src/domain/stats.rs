//! Corpus-level statistics

use super::characters::count_in_script;
use super::sentences::sentences;
use super::structure::analyze;
use super::syllable::syllables;
use super::words::words;

/// Counts and ratios over one text
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Statistics {
    /// Code points in the text
    pub total_characters: usize,
    /// In-script code points
    pub in_script_characters: usize,
    /// Words found
    pub words: usize,
    /// Words whose structure reports in-script content
    pub in_script_words: usize,
    /// Sentences found
    pub sentences: usize,
    /// Syllables over the whole text
    pub syllables: usize,
    /// Mean word length in code points
    pub average_word_length: f64,
    /// Mean words per sentence
    pub average_sentence_length: f64,
    /// Mean syllables per in-script word
    pub average_syllables_per_word: f64,
    /// In-script words containing a conjunct
    pub conjunct_words: usize,
    /// Share of in-script words with a conjunct, 0..=100
    pub conjunct_word_percentage: f64,
    /// In-script words containing a vowel sign or length mark
    pub vowel_mark_words: usize,
    /// Share of in-script words with a vowel mark, 0..=100
    pub vowel_mark_word_percentage: f64,
}

/// `numerator / denominator`, or 0 when the denominator is 0
fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Compute statistics for `text`
pub fn compute(text: &str) -> Statistics {
    let mut stats = Statistics {
        total_characters: text.chars().count(),
        in_script_characters: count_in_script(text),
        sentences: sentences(text).count(),
        syllables: syllables(text).count(),
        ..Statistics::default()
    };

    let mut total_word_length = 0;
    for word in words(text) {
        stats.words += 1;
        total_word_length += word.char_count();

        let structure = analyze(word.text);
        if !structure.is_in_script {
            continue;
        }
        stats.in_script_words += 1;
        stats.conjunct_words += usize::from(structure.has_conjunct);
        stats.vowel_mark_words += usize::from(structure.has_vowel_mark);
    }

    stats.average_word_length = ratio(total_word_length, stats.words);
    stats.average_sentence_length = ratio(stats.words, stats.sentences);
    stats.average_syllables_per_word = ratio(stats.syllables, stats.in_script_words);
    stats.conjunct_word_percentage = 100.0 * ratio(stats.conjunct_words, stats.in_script_words);
    stats.vowel_mark_word_percentage = 100.0 * ratio(stats.vowel_mark_words, stats.in_script_words);

    stats
}
