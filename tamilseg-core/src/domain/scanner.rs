//! Ordered-choice cluster scanner
//!
//! Graphemes and syllables are both produced by trying a short list of
//! alternatives at the current position. The first alternative that matches
//! wins, even when a later one would consume more. A lone pulli after a
//! consonant at the end of a run is therefore split off by the consonant
//! cluster rule before the dead consonant rule is ever consulted.

use super::classifier::{classify, in_script, CodepointCategory};

/// Which alternative produced a cluster
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClusterKind {
    /// A single independent vowel
    Vowel,
    /// Consonant, any number of pulli+consonant pairs, optional vowel mark
    ConsonantCluster,
    /// Consonant followed by pulli with no consonant after it
    DeadConsonant,
    /// Any other in-script code point on its own
    Other,
}

/// Result of one scan step: bytes consumed and the rule that matched
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    /// Length of the matched span in bytes
    pub len: usize,
    /// Alternative that produced the span
    pub kind: ClusterKind,
}

type Matcher = fn(&str) -> Option<usize>;

/// One alternative of the ordered choice
#[derive(Debug, Clone, Copy)]
pub(crate) struct Rule {
    kind: ClusterKind,
    matcher: Matcher,
}

/// Grapheme alternatives, in priority order
pub(crate) const GRAPHEME_RULES: &[Rule] = &[
    Rule {
        kind: ClusterKind::Vowel,
        matcher: match_vowel,
    },
    Rule {
        kind: ClusterKind::ConsonantCluster,
        matcher: match_consonant_cluster,
    },
    Rule {
        kind: ClusterKind::DeadConsonant,
        matcher: match_dead_consonant,
    },
    Rule {
        kind: ClusterKind::Other,
        matcher: match_other,
    },
];

/// Syllable alternatives: the grapheme list without the catch-all
pub(crate) const SYLLABLE_RULES: &[Rule] = &[
    Rule {
        kind: ClusterKind::Vowel,
        matcher: match_vowel,
    },
    Rule {
        kind: ClusterKind::ConsonantCluster,
        matcher: match_consonant_cluster,
    },
    Rule {
        kind: ClusterKind::DeadConsonant,
        matcher: match_dead_consonant,
    },
];

fn match_vowel(rest: &str) -> Option<usize> {
    let ch = rest.chars().next()?;
    (classify(ch) == CodepointCategory::IndependentVowel).then(|| ch.len_utf8())
}

fn match_consonant_cluster(rest: &str) -> Option<usize> {
    let first = rest.chars().next()?;
    if classify(first) != CodepointCategory::Consonant {
        return None;
    }

    let mut len = first.len_utf8();

    // Greedy pulli+consonant pairs; a half-matched pair is not consumed
    loop {
        let mut ahead = rest[len..].chars();
        match (ahead.next(), ahead.next()) {
            (Some(virama), Some(next))
                if classify(virama) == CodepointCategory::ViramaMark
                    && classify(next) == CodepointCategory::Consonant =>
            {
                len += virama.len_utf8() + next.len_utf8();
            }
            _ => break,
        }
    }

    if let Some(mark) = rest[len..].chars().next() {
        if classify(mark).is_vowel_mark() {
            len += mark.len_utf8();
        }
    }

    Some(len)
}

fn match_dead_consonant(rest: &str) -> Option<usize> {
    let mut chars = rest.chars();
    let consonant = chars.next()?;
    let virama = chars.next()?;

    let dead = classify(consonant) == CodepointCategory::Consonant
        && classify(virama) == CodepointCategory::ViramaMark
        && chars
            .next()
            .map_or(true, |next| classify(next) != CodepointCategory::Consonant);

    dead.then(|| consonant.len_utf8() + virama.len_utf8())
}

fn match_other(rest: &str) -> Option<usize> {
    let ch = rest.chars().next()?;
    in_script(ch).then(|| ch.len_utf8())
}

/// Try each rule in order at the start of `rest`
#[inline]
pub(crate) fn scan(rest: &str, rules: &[Rule]) -> Option<Step> {
    rules.iter().find_map(|rule| {
        (rule.matcher)(rest).map(|len| Step {
            len,
            kind: rule.kind,
        })
    })
}

/// Match one grapheme at the start of `rest`
pub fn grapheme_step(rest: &str) -> Option<Step> {
    scan(rest, GRAPHEME_RULES)
}

/// Match one syllable at the start of `rest`
pub fn syllable_step(rest: &str) -> Option<Step> {
    scan(rest, SYLLABLE_RULES)
}

/// Single forward pass emitting `(byte offset, span, kind)` for each match
///
/// Out-of-script code points are stepped over. In-script code points that no
/// rule matches are stepped over as well, which only happens for rule lists
/// without a catch-all.
#[derive(Debug, Clone)]
pub(crate) struct ClusterScan<'a> {
    text: &'a str,
    pos: usize,
    rules: &'static [Rule],
}

impl<'a> ClusterScan<'a> {
    pub(crate) fn new(text: &'a str, rules: &'static [Rule]) -> Self {
        Self {
            text,
            pos: 0,
            rules,
        }
    }
}

impl<'a> Iterator for ClusterScan<'a> {
    type Item = (usize, &'a str, ClusterKind);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(ch) = self.text[self.pos..].chars().next() {
            let start = self.pos;

            if !in_script(ch) {
                self.pos += ch.len_utf8();
                continue;
            }

            match scan(&self.text[start..], self.rules) {
                Some(step) => {
                    self.pos += step.len;
                    return Some((start, &self.text[start..self.pos], step.kind));
                }
                None => self.pos += ch.len_utf8(),
            }
        }

        None
    }
}

impl std::iter::FusedIterator for ClusterScan<'_> {}
