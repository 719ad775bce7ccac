//! Per-code-point tokenization

use super::classifier::in_script;

/// Every in-script code point of `text` as its own slice, in order
pub fn characters(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.char_indices()
        .filter(|(_, ch)| in_script(*ch))
        .map(move |(idx, ch)| &text[idx..idx + ch.len_utf8()])
}

/// Number of in-script code points in `text`
pub fn count_in_script(text: &str) -> usize {
    text.chars().filter(|ch| in_script(*ch)).count()
}
