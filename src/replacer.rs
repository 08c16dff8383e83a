//! Replacement engine: runs of 3+ identical characters collapse to a
//! single copy of the character emitted just before them.
//!
//! Unlike removal, replacement cannot be done with a single stacked scan:
//! the substituted character can merge with input the scan has not
//! reached yet, and the length of that merged run decides how the *next*
//! collapse behaves. The engine therefore repeats whole-string passes
//! until a pass changes nothing. Each changing pass shrinks the string by
//! at least two characters, which bounds the pass count by `len/2 + 1`.

use crate::run::RUN_THRESHOLD;
use crate::validate::{self, CollapseError};

/// Statistics from a replacement call.
#[derive(Debug, Clone, Copy)]
pub struct ReplaceStats {
    /// Length of the validated input
    pub input_length: usize,
    /// Length of the fixed-point output
    pub output_length: usize,
    /// Number of passes run, counting the final no-change pass
    pub passes: usize,
}

/// Replaces every run of 3 or more identical consecutive characters with
/// the character preceding it, iterating until a fixed point.
pub(crate) fn process(input: &str) -> Result<String, CollapseError> {
    process_with_stats(input).map(|(output, _)| output)
}

/// Same as [`process`], also reporting pass statistics.
pub(crate) fn process_with_stats(input: &str) -> Result<(String, ReplaceStats), CollapseError> {
    validate::validate(input)?;

    let pass_ceiling = input.len() / 2 + 1;
    let mut current = input.to_owned();
    let mut passes = 0;

    loop {
        let next = single_pass(&current);
        passes += 1;
        debug_assert!(
            passes <= pass_ceiling,
            "replacement did not converge within {} passes",
            pass_ceiling
        );
        if next == current {
            break;
        }
        current = next;
    }

    let stats = ReplaceStats {
        input_length: input.len(),
        output_length: current.len(),
        passes,
    };
    Ok((current, stats))
}

/// One left-to-right pass: maximal runs are measured on the pass input,
/// and a qualifying run is replaced by the last character already written
/// to the pass output (or dropped when the output is still empty).
fn single_pass(input: &str) -> String {
    // Validation guarantees ASCII, so byte indexing is safe here.
    debug_assert!(input.is_ascii());
    let bytes = input.as_bytes();

    let mut out = String::with_capacity(input.len());
    let mut i = 0;
    while i < bytes.len() {
        let ch = bytes[i];
        let mut j = i + 1;
        while j < bytes.len() && bytes[j] == ch {
            j += 1;
        }

        if (j - i) as u32 >= RUN_THRESHOLD {
            // The preceding character reflects replacements made earlier
            // in this same pass, not the original input.
            if let Some(&prev) = out.as_bytes().last() {
                out.push(prev as char);
            }
        } else {
            out.push_str(&input[i..j]);
        }
        i = j;
    }
    out
}
