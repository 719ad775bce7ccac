//! Sentence splitting on a fixed terminator set

use super::classifier::trim_space;

/// Characters that end a sentence: `.` `!` `?` danda and double danda
pub const TERMINATORS: [char; 5] = ['.', '!', '?', '\u{0964}', '\u{0965}'];

/// Check if character is a sentence terminator
#[inline]
pub fn is_terminator(ch: char) -> bool {
    TERMINATORS.contains(&ch)
}

/// Trimmed, non-empty fragments between terminators
///
/// Terminators themselves are dropped.
pub fn sentences(text: &str) -> impl Iterator<Item = &str> + '_ {
    text.split(is_terminator)
        .map(trim_space)
        .filter(|sentence| !sentence.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminator_table() {
        for ch in TERMINATORS {
            assert!(is_terminator(ch));
        }
        assert!(!is_terminator(','));
        assert!(!is_terminator('்'));
    }

    #[test]
    fn test_mixed_terminators() {
        let parts: Vec<_> = sentences("வணக்கம்! நலமா? நன்றாக இருக்கிறேன்.").collect();
        assert_eq!(parts, vec!["வணக்கம்", "நலமா", "நன்றாக இருக்கிறேன்"]);
    }

    #[test]
    fn test_no_terminator() {
        let parts: Vec<_> = sentences("தமிழ் அழகான மொழி").collect();
        assert_eq!(parts, vec!["தமிழ் அழகான மொழி"]);
    }

    #[test]
    fn test_dandas_and_runs_of_terminators() {
        let parts: Vec<_> = sentences("ஒன்று।இரண்டு॥ ... மூன்று?!").collect();
        assert_eq!(parts, vec!["ஒன்று", "இரண்டு", "மூன்று"]);
    }

    #[test]
    fn test_separator_controls_are_trimmed() {
        let parts: Vec<_> = sentences("வணக்கம்.\u{1E}நலமா?\u{1C}").collect();
        assert_eq!(parts, vec!["வணக்கம்", "நலமா"]);
    }

    #[test]
    fn test_only_terminators() {
        assert_eq!(sentences("...!?").count(), 0);
    }
}
