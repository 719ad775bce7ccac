//! Word segmentation: maximal runs of in-script code points

use super::classifier::in_script;

/// A maximal in-script run in the source text
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Word<'a> {
    /// The run itself
    pub text: &'a str,
    /// Byte offset in the source text
    pub offset: usize,
}

impl<'a> Word<'a> {
    /// Borrow the word text
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Length in code points
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Lazy iterator over the words of a text
#[derive(Debug, Clone)]
pub struct Words<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Iterator for Words<'a> {
    type Item = Word<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.pos..];
        let start = self.pos + rest.find(in_script)?;

        let run = &self.text[start..];
        let len = run.find(|ch: char| !in_script(ch)).unwrap_or(run.len());
        self.pos = start + len;

        let text = &self.text[start..self.pos];
        debug_assert!(!text.contains(char::is_whitespace));
        Some(Word {
            text,
            offset: start,
        })
    }
}

impl std::iter::FusedIterator for Words<'_> {}

/// Segment `text` into words
pub fn words(text: &str) -> Words<'_> {
    Words { text, pos: 0 }
}
