//! Tokenization method selector

use std::fmt;
use std::str::FromStr;

use crate::api::Error;

/// Unit produced by the generic `tokenize` dispatcher
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum TokenizeMethod {
    /// Maximal in-script runs
    #[default]
    Words,
    /// Fragments between terminators
    Sentences,
    /// Individual in-script code points
    Characters,
    /// Grapheme clusters
    Graphemes,
    /// Syllables
    Syllables,
}

impl TokenizeMethod {
    /// Every method, in display order
    pub const ALL: [TokenizeMethod; 5] = [
        TokenizeMethod::Words,
        TokenizeMethod::Sentences,
        TokenizeMethod::Characters,
        TokenizeMethod::Graphemes,
        TokenizeMethod::Syllables,
    ];

    /// Get the method name
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenizeMethod::Words => "words",
            TokenizeMethod::Sentences => "sentences",
            TokenizeMethod::Characters => "characters",
            TokenizeMethod::Graphemes => "graphemes",
            TokenizeMethod::Syllables => "syllables",
        }
    }

    /// One-line description for listings
    pub fn description(&self) -> &'static str {
        match self {
            TokenizeMethod::Words => "maximal runs of Tamil code points",
            TokenizeMethod::Sentences => "text between . ! ? and danda marks",
            TokenizeMethod::Characters => "individual Tamil code points",
            TokenizeMethod::Graphemes => "user-perceived characters",
            TokenizeMethod::Syllables => "vowels and consonant clusters",
        }
    }
}

impl FromStr for TokenizeMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "words" => Ok(TokenizeMethod::Words),
            "sentences" => Ok(TokenizeMethod::Sentences),
            "characters" => Ok(TokenizeMethod::Characters),
            "graphemes" => Ok(TokenizeMethod::Graphemes),
            "syllables" => Ok(TokenizeMethod::Syllables),
            _ => Err(Error::UnsupportedOperation(format!(
                "unknown tokenization method: {s}"
            ))),
        }
    }
}

impl fmt::Display for TokenizeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
