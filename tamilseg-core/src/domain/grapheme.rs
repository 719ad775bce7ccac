//! Grapheme cluster segmentation

use std::fmt;

use super::classifier::in_script;
use super::scanner::{ClusterKind, ClusterScan, GRAPHEME_RULES};
use crate::error::{CoreError, Result};

/// One user-perceived character
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Grapheme<'a> {
    /// The code points of the cluster
    pub text: &'a str,
    /// Byte offset in the segmented text
    pub offset: usize,
    /// Rule that produced the cluster
    pub kind: ClusterKind,
}

impl<'a> Grapheme<'a> {
    /// Borrow the cluster text
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Number of code points in the cluster
    pub fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    /// Byte offset one past the end of the cluster
    pub fn end(&self) -> usize {
        self.offset + self.text.len()
    }
}

impl fmt::Display for Grapheme<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Lazy iterator over the graphemes of a text
#[derive(Debug, Clone)]
pub struct Graphemes<'a> {
    scan: ClusterScan<'a>,
}

impl<'a> Iterator for Graphemes<'a> {
    type Item = Grapheme<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.scan
            .next()
            .map(|(offset, text, kind)| Grapheme { text, offset, kind })
    }
}

impl std::iter::FusedIterator for Graphemes<'_> {}

/// Segment `text` into graphemes, skipping out-of-script code points
pub fn graphemes(text: &str) -> Graphemes<'_> {
    Graphemes {
        scan: ClusterScan::new(text, GRAPHEME_RULES),
    }
}

/// Collect graphemes and verify they partition the in-script code points
///
/// Every in-script code point must land in exactly one grapheme, in order.
pub fn segment_checked(text: &str) -> Result<Vec<Grapheme<'_>>> {
    let mut covered = 0;
    let mut out = Vec::new();

    for grapheme in graphemes(text) {
        if grapheme.text.is_empty() || grapheme.offset < covered {
            return Err(CoreError::StalledScan {
                offset: grapheme.offset,
            });
        }
        check_skipped(text, covered, grapheme.offset)?;
        covered = grapheme.end();
        out.push(grapheme);
    }

    check_skipped(text, covered, text.len())?;
    Ok(out)
}

/// Skipped spans may only contain out-of-script code points
fn check_skipped(text: &str, from: usize, to: usize) -> Result<()> {
    match text[from..to].char_indices().find(|(_, ch)| in_script(*ch)) {
        Some((idx, _)) => Err(CoreError::CoverageGap { offset: from + idx }),
        None => Ok(()),
    }
}
