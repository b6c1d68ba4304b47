//! Single ternary digit of a term.
//!
//! A digit can hold one of three values:
//! - `Set` = logical 1
//! - `Unset` = logical 0
//! - `DontCare` = either value (written `-` in implicant notation)

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single digit of a minterm or implicant.
///
/// Compared by value only; there is no ordering and no arithmetic on
/// digits. `Unset` is the identity element used to pad terms beyond
/// their stored width.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Digit {
    /// Logical 1.
    Set,
    /// Logical 0.
    Unset,
    /// Either value is acceptable (produced when two implicants merge).
    DontCare,
}

impl Digit {
    /// All possible digit values in order: Set, Unset, DontCare
    pub const ALL: [Digit; 3] = [Digit::Set, Digit::Unset, Digit::DontCare];

    /// Create a digit from a binary digit value.
    ///
    /// # Panics
    /// Panics if value is not 0 or 1. Don't-care digits never arise from
    /// binary digits; they are only introduced by explicit construction.
    #[inline]
    pub fn from_bit(bit: u8) -> Self {
        match bit {
            0 => Digit::Unset,
            1 => Digit::Set,
            _ => panic!("Invalid binary digit: {} (must be 0 or 1)", bit),
        }
    }

    /// Convert to a binary digit value, if this digit has one.
    ///
    /// Returns `None` for `DontCare`, which stands for both values.
    #[inline]
    pub const fn to_bit(self) -> Option<u8> {
        match self {
            Digit::Set => Some(1),
            Digit::Unset => Some(0),
            Digit::DontCare => None,
        }
    }

    /// Returns true if this digit is set.
    #[inline]
    pub const fn is_set(self) -> bool {
        matches!(self, Digit::Set)
    }

    /// Returns true if this digit is unset.
    #[inline]
    pub const fn is_unset(self) -> bool {
        matches!(self, Digit::Unset)
    }

    /// Returns true if this digit is a don't-care.
    #[inline]
    pub const fn is_dont_care(self) -> bool {
        matches!(self, Digit::DontCare)
    }
}

impl Default for Digit {
    fn default() -> Self {
        Digit::Unset
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Digit::Set => write!(f, "1"),
            Digit::Unset => write!(f, "0"),
            Digit::DontCare => write!(f, "-"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_roundtrip() {
        for bit in [0u8, 1] {
            assert_eq!(Digit::from_bit(bit).to_bit(), Some(bit));
        }
    }

    #[test]
    #[should_panic(expected = "Invalid binary digit")]
    fn test_from_bit_rejects_non_binary() {
        Digit::from_bit(2);
    }

    #[test]
    fn test_dont_care_has_no_bit() {
        assert_eq!(Digit::DontCare.to_bit(), None);
    }

    #[test]
    fn test_predicates() {
        assert!(Digit::Set.is_set());
        assert!(Digit::Unset.is_unset());
        assert!(Digit::DontCare.is_dont_care());

        for d in Digit::ALL {
            let flags = [d.is_set(), d.is_unset(), d.is_dont_care()];
            assert_eq!(flags.iter().filter(|&&b| b).count(), 1, "{:?}", d);
        }
    }

    #[test]
    fn test_default_is_unset() {
        assert_eq!(Digit::default(), Digit::Unset);
    }

    #[test]
    fn test_display() {
        assert_eq!(Digit::Set.to_string(), "1");
        assert_eq!(Digit::Unset.to_string(), "0");
        assert_eq!(Digit::DontCare.to_string(), "-");
    }
}
