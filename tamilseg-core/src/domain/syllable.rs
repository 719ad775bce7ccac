//! Syllable segmentation
//!
//! Uses the same ordered choice as grapheme segmentation minus the catch-all,
//! so stray marks, digits and signs produce no syllable at all.

use std::fmt;

use super::scanner::{ClusterKind, ClusterScan, SYLLABLE_RULES};

/// One syllable-sized unit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Syllable<'a> {
    /// The code points of the syllable
    pub text: &'a str,
    /// Byte offset in the segmented text
    pub offset: usize,
    /// Rule that produced the syllable
    pub kind: ClusterKind,
}

impl<'a> Syllable<'a> {
    /// Borrow the syllable text
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Number of code points in the syllable
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

impl fmt::Display for Syllable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Lazy iterator over the syllables of a text
#[derive(Debug, Clone)]
pub struct Syllables<'a> {
    scan: ClusterScan<'a>,
}

impl<'a> Iterator for Syllables<'a> {
    type Item = Syllable<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan
            .next()
            .map(|(offset, text, kind)| Syllable { text, offset, kind })
    }
}

impl std::iter::FusedIterator for Syllables<'_> {}

/// Segment `text` into syllables
pub fn syllables(text: &str) -> Syllables<'_> {
    Syllables {
        scan: ClusterScan::new(text, SYLLABLE_RULES),
    }
}
