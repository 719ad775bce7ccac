//! Domain layer for Tamil script segmentation
//!
//! Pure, allocation-light scans over an immutable `&str`. Nothing here
//! validates input or logs; that is the job of the api layer.
//!
//! - [`classifier`] maps a code point to its script category
//! - [`scanner`] holds the ordered-choice rules shared by graphemes and syllables
//! - [`grapheme`], [`syllable`], [`words`], [`characters`] and [`sentences`]
//!   are the segmenters
//! - [`normalizer`] cleans whitespace and foreign symbols
//! - [`structure`] and [`stats`] derive summaries from the segmenters

pub mod characters;
pub mod classifier;
pub mod grapheme;
pub mod normalizer;
pub mod scanner;
pub mod sentences;
pub mod stats;
pub mod structure;
pub mod syllable;
pub mod words;

pub use classifier::{classify, in_script, is_space, trim_space, CodepointCategory};
pub use grapheme::{graphemes, Grapheme, Graphemes};
pub use scanner::{grapheme_step, syllable_step, ClusterKind, Step};
pub use stats::Statistics;
pub use structure::WordStructure;
pub use syllable::{syllables, Syllable, Syllables};
pub use words::{words, Word, Words};
