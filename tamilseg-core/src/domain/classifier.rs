//! Code point classification for the Tamil block
//!
//! Every code point maps to exactly one [`CodepointCategory`]. The mapping is
//! a fixed set of inclusive ranges, so classification is a handful of integer
//! comparisons and never fails.

/// Fixed code point ranges of the Tamil block
pub mod ranges {
    /// First code point of the Tamil block
    pub const BLOCK_START: u32 = 0x0B80;
    /// Last code point of the Tamil block
    pub const BLOCK_END: u32 = 0x0BFF;

    /// அ ..= ஔ
    pub const INDEPENDENT_VOWELS: (u32, u32) = (0x0B85, 0x0B94);
    /// க ..= ஹ
    pub const CONSONANTS: (u32, u32) = (0x0B95, 0x0BB9);
    /// ா ..= ௌ
    pub const VOWEL_SIGNS: (u32, u32) = (0x0BBE, 0x0BCC);

    /// Pulli, the Tamil virama
    pub const VIRAMA: u32 = 0x0BCD;
    /// AU length mark
    pub const LENGTH_MARK: u32 = 0x0BD7;
}

/// Script category of a single code point
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CodepointCategory {
    /// Standalone vowel letter
    IndependentVowel,
    /// Consonant letter carrying an inherent vowel
    Consonant,
    /// Dependent vowel sign attached to a consonant
    VowelSign,
    /// Consonant killer (pulli)
    ViramaMark,
    /// Length mark, clustered like a vowel sign
    LengthMark,
    /// Any other code point inside the Tamil block
    OtherInScript,
    /// Anything outside the Tamil block, including whitespace
    OutOfScript,
}

impl CodepointCategory {
    /// True for every category except [`CodepointCategory::OutOfScript`]
    #[inline]
    pub const fn is_in_script(self) -> bool {
        !matches!(self, CodepointCategory::OutOfScript)
    }

    /// True for marks that may close a consonant cluster
    #[inline]
    pub const fn is_vowel_mark(self) -> bool {
        matches!(
            self,
            CodepointCategory::VowelSign | CodepointCategory::LengthMark
        )
    }
}

#[inline]
const fn within(cp: u32, range: (u32, u32)) -> bool {
    cp >= range.0 && cp <= range.1
}

/// Classify a code point
#[inline]
pub const fn classify(ch: char) -> CodepointCategory {
    let cp = ch as u32;

    if cp < ranges::BLOCK_START || cp > ranges::BLOCK_END {
        CodepointCategory::OutOfScript
    } else if within(cp, ranges::INDEPENDENT_VOWELS) {
        CodepointCategory::IndependentVowel
    } else if within(cp, ranges::CONSONANTS) {
        CodepointCategory::Consonant
    } else if within(cp, ranges::VOWEL_SIGNS) {
        CodepointCategory::VowelSign
    } else if cp == ranges::VIRAMA {
        CodepointCategory::ViramaMark
    } else if cp == ranges::LENGTH_MARK {
        CodepointCategory::LengthMark
    } else {
        CodepointCategory::OtherInScript
    }
}

/// Check whether a code point belongs to the Tamil block
#[inline]
pub const fn in_script(ch: char) -> bool {
    classify(ch).is_in_script()
}

/// Check whether a code point separates text
///
/// Unicode `White_Space` plus the information separators U+001C ..= U+001F,
/// which file and record oriented text uses as line breaks.
#[inline]
pub fn is_space(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{1C}'..='\u{1F}')
}

/// `text` without leading and trailing [`is_space`] code points
#[inline]
pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}
