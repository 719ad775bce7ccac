//! End-to-end tests for the tokenizer pipeline

use std::io::Write;

use tamilseg_core::{
    analyze_word_structure, get_statistics, tokenize, tokenize_graphemes, tokenize_sentences,
    tokenize_syllables, tokenize_words, Config, Error, Input, TamilTokenizer, TokenizeMethod,
};
use tempfile::NamedTempFile;

const PARAGRAPH: &str = "வணக்கம்! நலமா? நன்றாக இருக்கிறேன். தமிழ் மொழி அழகான மொழி";

#[test]
fn test_paragraph_words() {
    let words = tokenize_words(PARAGRAPH).unwrap();
    assert_eq!(
        words,
        vec![
            "வணக்கம்",
            "நலமா",
            "நன்றாக",
            "இருக்கிறேன்",
            "தமிழ்",
            "மொழி",
            "அழகான",
            "மொழி"
        ]
    );
}

#[test]
fn test_paragraph_sentences() {
    let sentences = tokenize_sentences(PARAGRAPH).unwrap();
    assert_eq!(sentences.len(), 4);
    assert_eq!(sentences[3], "தமிழ் மொழி அழகான மொழி");
    assert!(sentences.iter().all(|s| !s.contains(['.', '!', '?'])));
}

#[test]
fn test_three_sentence_example() {
    let sentences = tokenize_sentences("வணக்கம்! நலமா? நன்றாக இருக்கிறேன்.").unwrap();
    assert_eq!(sentences, vec!["வணக்கம்", "நலமா", "நன்றாக இருக்கிறேன்"]);
}

#[test]
fn test_graphemes_of_conjunct_words() {
    assert_eq!(
        tokenize_graphemes("இருக்கிறேன்").unwrap(),
        vec!["இ", "ரு", "க்கி", "றே", "ன", "்"]
    );
    assert_eq!(
        tokenize_syllables("இருக்கிறேன்").unwrap(),
        vec!["இ", "ரு", "க்கி", "றே", "ன"]
    );
}

#[test]
fn test_mixed_script_text() {
    let text = "Tamil (தமிழ்) is spoken in Chennai சென்னை.";
    assert_eq!(tokenize_words(text).unwrap(), vec!["தமிழ்", "சென்னை"]);
    assert_eq!(
        tokenize(text, "sentences").unwrap(),
        vec!["Tamil (தமிழ்) is spoken in Chennai சென்னை"]
    );
}

#[test]
fn test_word_structure() {
    let structure = analyze_word_structure("சென்னை").unwrap();
    assert!(structure.is_in_script);
    assert!(structure.has_conjunct);
    assert!(structure.has_vowel_mark);
    let graphemes: Vec<_> = structure.graphemes.iter().map(|g| g.text).collect();
    assert_eq!(graphemes, vec!["செ", "ன்னை"]);
    assert_eq!(structure.syllable_count(), 2);

    let foreign = analyze_word_structure("Chennai").unwrap();
    assert!(!foreign.is_in_script);
    assert_eq!(foreign.grapheme_count(), 0);
    assert_eq!(foreign.syllable_count(), 0);
}

#[test]
fn test_statistics() {
    let stats = get_statistics(PARAGRAPH).unwrap();
    assert_eq!(stats.words, 8);
    assert_eq!(stats.in_script_words, 8);
    assert_eq!(stats.sentences, 4);
    assert_eq!(stats.average_sentence_length, 2.0);
    // வணக்கம், நன்றாக, இருக்கிறேன்
    assert_eq!(stats.conjunct_words, 3);
    assert_eq!(stats.conjunct_word_percentage, 37.5);
    assert!(stats.syllables > stats.words);
}

#[cfg(feature = "serde")]
#[test]
fn test_statistics_serialize() {
    let stats = get_statistics("தமிழ் மொழி").unwrap();
    let json = serde_json::to_value(&stats).unwrap();
    assert_eq!(json["words"], 2);
    assert_eq!(json["in_script_words"], 2);
    assert!(json.get("conjunct_word_percentage").is_some());

    let structure = analyze_word_structure("தமிழ்").unwrap();
    let json = serde_json::to_value(&structure).unwrap();
    assert_eq!(json["graphemes"][3]["kind"], "other");
    assert_eq!(json["syllables"][0]["kind"], "consonant_cluster");
}

#[test]
fn test_unsupported_method() {
    let err = tokenize("தமிழ்", "bogus").unwrap_err();
    assert!(matches!(err, Error::UnsupportedOperation(_)));
}

#[test]
fn test_file_input() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "  தமிழ்   மொழி  ").unwrap();

    let config = Config::builder().method("words").build().unwrap();
    let tokenizer = TamilTokenizer::with_config(config);
    let text = tokenizer.read_input(Input::from_file(file.path())).unwrap();

    assert_eq!(tokenizer.config().default_method(), TokenizeMethod::Words);
    assert_eq!(
        tokenizer.tokenize_default(&text).unwrap(),
        vec!["தமிழ்", "மொழி"]
    );
    assert_eq!(tokenizer.normalize_text(&text).unwrap(), "தமிழ் மொழி");
}

fn count_shared_words() -> usize {
    tokenize_words("தமிழ் மொழி").unwrap().len()
}

#[test]
fn test_shared_tokenizer_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|_| std::thread::spawn(count_shared_words))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), 2);
    }
}
