/// Minimum run length that triggers a collapse.
pub(crate) const RUN_THRESHOLD: u32 = 3;

/// A run of identical consecutive characters.
///
/// Represents `len` consecutive occurrences of `ch`. Runs are transient
/// values created while scanning; all operations return new runs rather
/// than mutating in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Run {
    pub ch: char,
    /// Number of consecutive occurrences (always >= 1)
    pub len: u32,
}

impl Run {
    /// Creates a run of a single character.
    pub(crate) fn new(ch: char) -> Self {
        Self { ch, len: 1 }
    }

    /// Creates a run with an explicit length.
    pub(crate) fn with_len(ch: char, len: u32) -> Self {
        debug_assert!(len >= 1, "Run length must be positive, got {}", len);
        Self { ch, len }
    }

    /// Returns this run extended by one occurrence.
    pub(crate) fn incremented(self) -> Self {
        Self {
            ch: self.ch,
            len: self.len + 1,
        }
    }

    /// Returns true once the run is long enough to be collapsed.
    pub(crate) fn meets_threshold(self) -> bool {
        self.len >= RUN_THRESHOLD
    }
}
