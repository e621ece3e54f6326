//! A set of digits 1-9, backed by a 9-bit mask.

use std::{fmt, iter::FusedIterator};

use crate::Digit;

/// A set of Sudoku digits (1-9).
///
/// Bits 0-8 of the backing `u16` represent digits 1-9. Backs pencil notes
/// and candidate sets.
///
/// # Examples
///
/// ```
/// use kumiko_core::{Digit, DigitSet};
///
/// let mut notes = DigitSet::new();
/// notes.insert(Digit::D2);
/// notes.insert(Digit::D7);
/// assert_eq!(notes.len(), 2);
/// assert!(notes.contains(Digit::D7));
///
/// notes.toggle(Digit::D7);
/// assert!(!notes.contains(Digit::D7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct DigitSet {
    bits: u16,
}

const MASK: u16 = 0x1FF;

impl DigitSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };
    /// The set containing all nine digits.
    pub const FULL: Self = Self { bits: MASK };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(digit: Digit) -> u16 {
        1 << (digit.value() - 1)
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.bits |= Self::bit(digit);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.bits &= !Self::bit(digit);
    }

    /// Inserts the digit if absent, removes it if present.
    pub const fn toggle(&mut self, digit: Digit) {
        self.bits ^= Self::bit(digit);
    }

    /// Removes all digits from the set.
    pub const fn clear(&mut self) {
        self.bits = 0;
    }

    /// Returns whether the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.bits & Self::bit(digit) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns the sole member if the set has exactly one digit.
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.bits.count_ones() == 1 {
            #[expect(clippy::cast_possible_truncation)]
            Digit::try_from_value(self.bits.trailing_zeros() as u8 + 1)
        } else {
            None
        }
    }

    /// Returns the raw 9-bit mask (bit 0 = digit 1).
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.bits
    }

    /// Reconstructs a set from a raw mask, returning `None` if any bit
    /// above bit 8 is set.
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !MASK == 0 {
            Some(Self { bits })
        } else {
            None
        }
    }

    /// Returns the members in ascending order, as numeric values.
    ///
    /// This is the save-format representation: a set collapsed to an
    /// ordered digit list.
    #[must_use]
    pub fn to_digits(self) -> Vec<u8> {
        self.into_iter().map(Digit::value).collect()
    }

    /// Iterates over the members in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, digit) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
        }
        write!(f, "}}")
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::new();
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the digits of a [`DigitSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Digit::try_from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
