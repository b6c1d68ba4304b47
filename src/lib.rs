//! # Minterm
//!
//! Minterm and implicant primitives for Quine-McCluskey Boolean
//! minimization.
//!
//! A [`Term`] is a vector of ternary digits (set, unset, don't-care)
//! that reads as an infinitely zero-extended bit vector: positions
//! beyond its stored width are always unset. [`Term::count_differences`]
//! compares two terms of any widths under that extension, which is the
//! primitive a minimizer uses to find implicant pairs differing in
//! exactly one position.

pub mod binary;
pub mod digit;
pub mod term;

// Re-export commonly used types
pub use binary::binary_digits;
pub use digit::Digit;
pub use term::{Term, TermParseError};
