//! Minterms and implicants.
//!
//! A [`Term`] is an ordered vector of ternary digits stored most
//! significant first. Reads are addressed least significant first and
//! are total: any position at or beyond the stored width reads as
//! `Unset`, so every term behaves as an infinitely zero-extended vector
//! while only its explicit digits are stored.

use crate::binary::binary_digits;
use crate::digit::Digit;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A single minterm or implicant.
///
/// Immutable after construction. Equality, hashing, and serialization
/// are representational: two terms denoting the same value at different
/// explicit widths (for example `01` and `1`) compare unequal. Callers
/// needing semantic comparison should go through [`Term::digit`] or
/// [`Term::count_differences`], which see the zero-extended vector.
#[derive(Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Term {
    /// Digits stored from most significant (index 0) to least significant.
    digits: Vec<Digit>,
}

impl Term {
    /// Count the number of digits that differ between two terms.
    ///
    /// Both terms are read through [`Term::digit`], so a shorter term is
    /// compared as if zero-extended to the width of the longer one:
    ///
    /// ```
    /// use minterm::Term;
    ///
    /// let count = Term::count_differences(
    ///     &Term::from_value(0b0000),
    ///     &Term::from_value(0b1010),
    /// );
    /// assert_eq!(count, 2);
    /// ```
    pub fn count_differences(left: &Term, right: &Term) -> usize {
        let width = left.len().max(right.len());
        let mut total = 0;
        for i in 0..width {
            if left.digit(i) != right.digit(i) {
                total += 1;
            }
        }
        total
    }

    /// Create a term from an integer via its binary expansion.
    ///
    /// The most significant bit lands at storage index 0, with binary 1
    /// mapped to `Set` and binary 0 to `Unset`. Don't-care digits never
    /// arise from integer construction. Zero decomposes to a single zero
    /// digit, so `from_value(0)` has length 1.
    pub fn from_value(value: u64) -> Self {
        let digits = binary_digits(value)
            .into_iter()
            .map(Digit::from_bit)
            .collect();
        Self { digits }
    }

    /// Create a term from an explicit digit sequence.
    ///
    /// The sequence is stored verbatim, index 0 being the most
    /// significant digit. No validation is applied; an empty sequence is
    /// a valid (zero-width) term.
    pub fn from_digits(digits: Vec<Digit>) -> Self {
        Self { digits }
    }

    /// Number of physically stored digits.
    ///
    /// This is the minimum width that stores the explicit digits, not
    /// the term's conceptual width (which is unbounded thanks to
    /// zero-extension). It is therefore not a proxy for value equality.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Returns true if no digits are stored.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Get the digit at a logical position, where position 0 is the
    /// least significant digit.
    ///
    /// Returns `Unset` for any position at or beyond [`Term::len`]; the
    /// accessor never panics for any index. The reversal between logical
    /// and storage order happens here and nowhere else.
    #[inline]
    pub fn digit(&self, idx: usize) -> Digit {
        let length = self.digits.len();
        if idx >= length {
            Digit::Unset
        } else {
            self.digits[length - idx - 1]
        }
    }

    /// The stored digits in storage order (most significant first).
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Decode the term back to the integer it represents.
    ///
    /// Sums `2^i` over every logical position `i` holding `Set`. Returns
    /// `None` if any digit is a don't-care (the term then covers several
    /// integers) or if a set digit sits at logical position 64 or above.
    pub fn value(&self) -> Option<u64> {
        let mut total: u64 = 0;
        for i in 0..self.len() {
            match self.digit(i) {
                Digit::Set => total |= 1u64.checked_shl(i as u32)?,
                Digit::Unset => {}
                Digit::DontCare => return None,
            }
        }
        Some(total)
    }

    /// Parse from a digit string like "10-1" or "0b1010".
    ///
    /// The leftmost character is the most significant digit. Accepts `1`,
    /// `0`, and `-` (or `x`/`X`) for don't-care; surrounding whitespace
    /// and an optional `0b` prefix are ignored. An empty string parses to
    /// the empty term.
    pub fn parse(s: &str) -> Result<Self, TermParseError> {
        let s = s.trim();
        let s = s.strip_prefix("0b").unwrap_or(s);

        let mut digits = Vec::with_capacity(s.len());
        for c in s.chars() {
            digits.push(match c {
                '1' => Digit::Set,
                '0' => Digit::Unset,
                '-' | 'x' | 'X' => Digit::DontCare,
                _ => return Err(TermParseError::InvalidChar(c)),
            });
        }

        Ok(Self { digits })
    }
}

impl From<u64> for Term {
    fn from(value: u64) -> Self {
        Term::from_value(value)
    }
}

impl From<Vec<Digit>> for Term {
    fn from(digits: Vec<Digit>) -> Self {
        Term::from_digits(digits)
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in &self.digits {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term(\"{}\")", self)
    }
}

/// Errors that can occur when parsing digit strings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TermParseError {
    #[error("invalid digit character: '{0}' (expected 1, 0, or -)")]
    InvalidChar(char),
}
