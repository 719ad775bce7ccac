//! Whitespace collapsing and punctuation stripping

use super::classifier::{in_script, is_space, trim_space};

/// Collapse whitespace runs to one space, optionally drop foreign symbols, trim
///
/// With `strip_punctuation`, every code point that is neither whitespace nor
/// in script is removed. Stripping happens after collapsing, so a removed
/// symbol between two spaces leaves both spaces behind.
pub fn clean(text: &str, strip_punctuation: bool) -> String {
    let mut collapsed = String::with_capacity(text.len());
    let mut in_space = false;

    for ch in text.chars() {
        if is_space(ch) {
            if !in_space {
                collapsed.push(' ');
            }
            in_space = true;
        } else {
            collapsed.push(ch);
            in_space = false;
        }
    }

    if strip_punctuation {
        collapsed.retain(|ch| is_space(ch) || in_script(ch));
    }

    trim_space(&collapsed).to_string()
}

/// Canonical form of a text; currently whitespace cleanup only
pub fn normalize(text: &str) -> String {
    clean(text, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(clean("A  B   C", false), "A B C");
        assert_eq!(clean("தமிழ்   மொழி   அழகு", false), "தமிழ் மொழி அழகு");
        assert_eq!(clean("\t\nதமிழ்\r\n\u{3000}மொழி  ", false), "தமிழ் மொழி");
    }

    #[test]
    fn test_information_separators_collapse() {
        assert_eq!(clean("அ\u{1C}\u{1C}ஆ", false), "அ ஆ");
        assert_eq!(clean("\u{1F}தமிழ்\u{1D} மொழி\u{1E}", true), "தமிழ் மொழி");
    }

    #[test]
    fn test_keep_punctuation() {
        let cleaned = clean("தமிழ், மொழி!", false);
        assert_eq!(cleaned, "தமிழ், மொழி!");
    }

    #[test]
    fn test_strip_punctuation() {
        assert_eq!(clean("தமிழ், மொழி!", true), "தமிழ் மொழி");
        assert_eq!(clean("Hello தமிழ்", true), "தமிழ்");
    }

    #[test]
    fn test_strip_leaves_inner_spaces() {
        assert_eq!(clean("அ , ஆ", true), "அ  ஆ");
    }

    #[test]
    fn test_normalize_is_clean_without_stripping() {
        let text = "  தமிழ்   மொழி!  ";
        assert_eq!(normalize(text), clean(text, false));
        assert_eq!(normalize(text), "தமிழ் மொழி!");
    }

    #[test]
    fn test_blank_input() {
        assert_eq!(clean("   ", false), "");
        assert_eq!(clean("!!!", true), "");
    }
}
