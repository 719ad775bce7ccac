//! Script-aware segmentation of Tamil text
//!
//! Splits text into words, sentences, code points, grapheme clusters and
//! syllables, and derives per-word structure and corpus statistics from
//! those units. Grapheme and syllable boundaries come from a small
//! ordered-choice scanner over code point categories; there is no dictionary
//! or grammar knowledge involved.
//!
//! # Architecture
//!
//! - **Domain layer**: classifier, scanner and the segmenters, pure functions
//!   over `&str`
//! - **API layer**: input validation, method dispatch, configuration and the
//!   [`TamilTokenizer`] engine
//!
//! # Example
//!
//! ```rust
//! use tamilseg_core::TamilTokenizer;
//!
//! let tokenizer = TamilTokenizer::new();
//!
//! let words = tokenizer.tokenize_words("தமிழ் மொழி அழகான மொழி").unwrap();
//! assert_eq!(words.len(), 4);
//!
//! let graphemes = tokenizer.tokenize("வணக்கம்", "graphemes").unwrap();
//! assert_eq!(graphemes, vec!["வ", "ண", "க்க", "ம", "்"]);
//! ```

pub mod api;
pub mod domain;
pub mod error;

pub use api::{
    analyze_word_structure, clean_text, default_tokenizer, get_statistics, normalize_text,
    tokenize, tokenize_characters, tokenize_graphemes, tokenize_sentences, tokenize_syllables,
    tokenize_words, validate_text, Config, ConfigBuilder, Error, Input, Result, TamilTokenizer,
    TokenizeMethod,
};
pub use domain::{
    classify, in_script, ClusterKind, CodepointCategory, Grapheme, Statistics, Syllable, Word,
    WordStructure,
};
pub use error::CoreError;
