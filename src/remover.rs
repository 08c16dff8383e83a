//! Removal engine: runs of 3+ identical characters are deleted outright.
//!
//! A single left-to-right scan over a stack of runs is sufficient.
//! Deleting a completed run can only expose a run with a different
//! character underneath it (the tracker merges same-character neighbours),
//! so nothing new can collapse at that boundary until a later input
//! character matches the exposed run - which the scan handles as it
//! arrives. No second pass over the stack is needed.
//!
//! O(n) time amortized (each character is pushed once and popped at most
//! once), O(n) auxiliary space in the worst case.

use crate::tracker::RunTracker;
use crate::validate::{self, CollapseError};

/// Removes every run of 3 or more identical consecutive characters,
/// including runs exposed by earlier removals.
pub(crate) fn process(input: &str) -> Result<String, CollapseError> {
    validate::validate(input)?;

    let mut tracker = RunTracker::new();
    for ch in input.chars() {
        tracker.record(ch);
    }
    Ok(tracker.into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_example() {
        assert_eq!(process("aabcccbbad").unwrap(), "d");
    }

    #[test]
    fn test_basic_removal() {
        let cases = [
            ("aaa", ""),
            ("aaabbb", ""),
            ("aaabbbccc", ""),
            ("aabbaaa", "aabb"),
            ("aaabaaa", "b"),
            ("abccba", "abccba"),
            ("abc", "abc"),
            ("a", "a"),
            ("aa", "aa"),
            ("aaaa", "a"),
            ("aaaaa", "aa"),
            ("aabbaaabbb", "aabb"),
            ("xyz", "xyz"),
            ("xxxyyyzzz", ""),
            ("xxxyyyzzza", "a"),
            ("axxxbyyyczzz", "abc"),
        ];
        for (input, expected) in cases {
            assert_eq!(process(input).unwrap(), expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_removal_cascades() {
        // aabbbba: eviction fires at exactly three b's, so the fourth b
        // starts a fresh run and survives between the a's
        assert_eq!(process("aabbbba").unwrap(), "aaba");
        assert_eq!(process("abbbccaa").unwrap(), "accaa");
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(process("").unwrap(), "");
    }

    #[test]
    fn test_whitespace_rejected() {
        assert!(matches!(
            process("   "),
            Err(CollapseError::InvalidCharacter { ch: ' ', index: 0 })
        ));
    }

    #[test]
    fn test_invalid_characters_rejected() {
        for input in ["AAA", "aa1bb", "a b", "a-b", "a@b"] {
            assert!(process(input).is_err(), "{:?} should be rejected", input);
        }
    }

    #[test]
    fn test_long_uniform_input() {
        // 1_000_002 a's reduce to nothing in one linear scan
        let input = "a".repeat(1_000_002);
        assert_eq!(process(&input).unwrap(), "");
    }
}
