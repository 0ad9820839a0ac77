// Boolmatch Text Normalization
// Canonical code-point stream and word classification for queries and documents

use unicode_normalization::UnicodeNormalization;
use unicode_properties::{GeneralCategory, UnicodeGeneralCategory};

/// Word-boundary sentinel inserted into patterns and the scanned stream.
///
/// Taken from the Private Use Area so it can never occur in normalized text;
/// both the pattern encoder and the scanner emit it at word edges, which
/// makes boundary matching an ordinary automaton transition.
pub const BOUNDARY: char = '\u{e000}';

/// Normalize text into the canonical form used for all matching.
///
/// Applies, in order: control-character stripping (whitespace-class controls
/// become a plain space so line breaks keep words apart), full lowercase
/// case folding, and canonical composition (NFC). Query terms and document
/// text go through the same function, so case and composition differences
/// never affect results.
///
/// # Examples
/// ```
/// # use boolmatch::normalize;
/// assert_eq!(normalize("Hello\tWorld"), "hello world");
/// assert_eq!(normalize("CAFE\u{301}"), "caf\u{e9}");
/// ```
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .filter_map(|c| match c {
            '\t' | '\n' | '\u{b}' | '\u{c}' | '\r' | '\u{85}' => Some(' '),
            c if c.is_control() => None,
            c => Some(c),
        })
        .flat_map(char::to_lowercase)
        .nfc()
        .collect()
}

/// Returns true if the code point belongs to a word.
///
/// Word characters are the Unicode general categories Lu, Ll, Lt, Lm, Lo,
/// Nd and Pc; everything else (punctuation, spaces, symbols) separates
/// words.
pub fn is_word_char(c: char) -> bool {
    matches!(
        c.general_category(),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
            | GeneralCategory::ConnectorPunctuation
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_folding() {
        assert_eq!(normalize("HeLLo"), "hello");
        assert_eq!(normalize("ÅNGSTRÖM"), "ångström");
    }

    #[test]
    fn test_composition() {
        // 'e' + combining acute composes to a single code point
        let decomposed = "cafe\u{301}";
        let normalized = normalize(decomposed);
        assert_eq!(normalized, "café");
        assert_eq!(normalized.chars().count(), 4);
    }

    #[test]
    fn test_control_stripping() {
        assert_eq!(normalize("a\u{0}b"), "ab");
        assert_eq!(normalize("one\ntwo"), "one two");
        assert_eq!(normalize("one\ttwo"), "one two");
    }

    #[test]
    fn test_boundary_passes_through() {
        let s: String = ['a', BOUNDARY, 'b'].iter().collect();
        assert_eq!(normalize(&s).chars().nth(1), Some(BOUNDARY));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_word_categories() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_')); // connector punctuation
        assert!(is_word_char('ß'));
        assert!(is_word_char('日'));

        assert!(!is_word_char(' '));
        assert!(!is_word_char('!'));
        assert!(!is_word_char('\''));
        assert!(!is_word_char('-'));
        assert!(!is_word_char(BOUNDARY));
    }
}
