//! Input validation for the collapse engines.
//!
//! Both engines accept only lowercase ASCII letters. Validation is eager:
//! the whole input is checked before any transformation work starts, and
//! the first offending character fails the entire call. Whitespace is not
//! trimmed - an all-whitespace string is invalid, not empty.

use thiserror::Error;

/// The single error the crate can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollapseError {
    /// The input contained a character outside `a..=z`.
    #[error("invalid character {ch:?} at byte {index}: only lowercase letters (a-z) are allowed")]
    InvalidCharacter { ch: char, index: usize },
}

/// Returns true if the character belongs to the supported alphabet.
pub fn is_valid_char(ch: char) -> bool {
    ch.is_ascii_lowercase()
}

/// Renders an absent input as the empty string.
pub fn normalize(input: Option<&str>) -> &str {
    input.unwrap_or("")
}

/// Checks that every character lies in `a..=z`.
///
/// Reports the first violation along with its byte offset. The empty
/// string is valid.
pub fn validate(input: &str) -> Result<(), CollapseError> {
    match input.char_indices().find(|&(_, ch)| !is_valid_char(ch)) {
        Some((index, ch)) => Err(CollapseError::InvalidCharacter { ch, index }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercase_is_valid() {
        assert!(validate("abcxyz").is_ok());
        assert!(validate("").is_ok());
    }

    #[test]
    fn test_alphabet_bounds() {
        assert!(is_valid_char('a'));
        assert!(is_valid_char('z'));
        assert!(!is_valid_char('A'));
        assert!(!is_valid_char('`'));
        assert!(!is_valid_char('{'));
    }

    #[test]
    fn test_first_violation_reported() {
        assert_eq!(
            validate("abC d"),
            Err(CollapseError::InvalidCharacter { ch: 'C', index: 2 })
        );
    }

    #[test]
    fn test_whitespace_rejected() {
        assert_eq!(
            validate("   "),
            Err(CollapseError::InvalidCharacter { ch: ' ', index: 0 })
        );
        assert!(validate("a b").is_err());
    }

    #[test]
    fn test_digits_and_punctuation_rejected() {
        for input in ["aa1bb", "a-b", "a@b", "AAA"] {
            assert!(validate(input).is_err(), "{:?} should be invalid", input);
        }
    }

    #[test]
    fn test_normalize_none_is_empty() {
        assert_eq!(normalize(None), "");
        assert_eq!(normalize(Some("abc")), "abc");
    }

    #[test]
    fn test_error_message_names_the_character() {
        let err = validate("ab9").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'9'"), "unexpected message: {}", msg);
        assert!(msg.contains("byte 2"), "unexpected message: {}", msg);
    }
}
