use crate::remover;
use crate::replacer::{self, ReplaceStats};
use crate::validate::CollapseError;

/// The closed set of collapse strategies.
///
/// Both variants are stateless: a `Strategy` value is just a name for one
/// of the two algorithms and can be copied and shared freely. Each call
/// to [`Strategy::process`] is a pure function of its input, so disjoint
/// inputs can be processed concurrently without synchronization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Delete qualifying runs outright.
    Remove,
    /// Substitute qualifying runs with their preceding character.
    Replace,
}

impl Strategy {
    /// Runs this strategy over the input.
    ///
    /// Fails with [`CollapseError::InvalidCharacter`] if any character
    /// lies outside `a..=z`; the empty string maps to the empty string.
    pub fn process(self, input: &str) -> Result<String, CollapseError> {
        match self {
            Strategy::Remove => remover::process(input),
            Strategy::Replace => replacer::process(input),
        }
    }

    /// Display name of the strategy.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Remove => "remove",
            Strategy::Replace => "replace",
        }
    }
}

/// Removes every run of 3 or more identical consecutive characters,
/// repeating until none remain.
///
/// # Example
///
/// ```
/// let out = runcollapse::remove_consecutive("aabcccbbad").unwrap();
/// assert_eq!(out, "d");
/// ```
pub fn remove_consecutive(input: &str) -> Result<String, CollapseError> {
    remover::process(input)
}

/// Replaces every run of 3 or more identical consecutive characters with
/// the character preceding it (runs at the very start are deleted),
/// repeating until none remain.
///
/// # Example
///
/// ```
/// let out = runcollapse::replace_consecutive("abcccbad").unwrap();
/// assert_eq!(out, "d");
/// ```
pub fn replace_consecutive(input: &str) -> Result<String, CollapseError> {
    replacer::process(input)
}

/// Like [`replace_consecutive`], additionally reporting how many passes
/// the fixed-point iteration took.
pub fn replace_consecutive_with_stats(
    input: &str,
) -> Result<(String, ReplaceStats), CollapseError> {
    replacer::process_with_stats(input)
}
