//! # Runcollapse - Consecutive Run Normalization
//!
//! Normalizes strings over the lowercase alphabet by collapsing every run
//! of 3 or more identical consecutive characters, with one of two
//! strategies:
//!
//! 1. **Remove**: the run is deleted.
//! 2. **Replace**: the run is substituted with a single copy of the
//!    character preceding it (deleted when the run starts the string).
//!
//! Collapsing a run can splice previously-separated characters into a new
//! qualifying run; both strategies keep collapsing until no run of length
//! 3+ remains anywhere in the string.
//!
//! ## Example
//!
//! ```
//! use runcollapse::Strategy;
//!
//! assert_eq!(Strategy::Remove.process("aabcccbbad").unwrap(), "d");
//! assert_eq!(Strategy::Replace.process("xccc").unwrap(), "xx");
//!
//! // Only lowercase a-z is accepted
//! assert!(Strategy::Remove.process("a b").is_err());
//! ```
//!
//! ## Performance
//!
//! - Removal runs in a single O(n) scan over a stack of runs
//! - Replacement iterates whole-string passes to a fixed point; each
//!   changing pass shrinks the string, bounding the pass count by
//!   `len/2 + 1` (engineered cascades can approach it, typical inputs
//!   settle in a handful of passes)

mod remover;
mod replacer;
mod run;
mod strategy;
mod tracker;
mod validate;


pub use replacer::ReplaceStats;
pub use strategy::{
    remove_consecutive, replace_consecutive, replace_consecutive_with_stats, Strategy,
};
pub use validate::{is_valid_char, normalize, validate, CollapseError};
