//! A set of board positions, backed by an 81-bit mask.

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitOr, BitOrAssign},
};

use crate::Position;

/// A set of cell positions on the 9×9 board.
///
/// Bits 0-80 of the backing `u128` represent positions in row-major order.
/// Used for per-cell error flags and for reporting the (deduplicated) cells
/// of just-completed houses after a write.
///
/// # Examples
///
/// ```
/// use kumiko_core::{Position, PositionSet};
///
/// let mut set = PositionSet::new();
/// set.insert(Position::new(3, 5));
/// assert!(set.contains(Position::new(3, 5)));
/// assert_eq!(set.len(), 1);
///
/// // Union is deduplicating.
/// let row3 = PositionSet::ROWS[3];
/// assert_eq!((set | row3).len(), 9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PositionSet {
    bits: u128,
}

impl PositionSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: 0 };

    /// Position sets of the nine rows, indexed by row.
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::EMPTY; 9];
        let mut i = 0;
        while i < 81 {
            rows[i / 9].bits |= 1 << i;
            i += 1;
        }
        rows
    };

    /// Position sets of the nine columns, indexed by column.
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::EMPTY; 9];
        let mut i = 0;
        while i < 81 {
            columns[i % 9].bits |= 1 << i;
            i += 1;
        }
        columns
    };

    /// Position sets of the nine boxes, indexed by box index.
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::EMPTY; 9];
        let mut i = 0;
        while i < 81 {
            let (row, col) = (i / 9, i % 9);
            boxes[(row / 3) * 3 + col / 3].bits |= 1 << i;
            i += 1;
        }
        boxes
    };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(pos: Position) -> u128 {
        1 << pos.index()
    }

    /// Inserts a position into the set.
    pub const fn insert(&mut self, pos: Position) {
        self.bits |= Self::bit(pos);
    }

    /// Removes a position from the set.
    pub const fn remove(&mut self, pos: Position) {
        self.bits &= !Self::bit(pos);
    }

    /// Returns whether the set contains `pos`.
    #[must_use]
    pub const fn contains(self, pos: Position) -> bool {
        self.bits & Self::bit(pos) != 0
    }

    /// Returns the number of positions in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates over the members in row-major order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl BitOr for PositionSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self {
            bits: self.bits | rhs.bits,
        }
    }
}

impl BitOrAssign for PositionSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl FromIterator<Position> for PositionSet {
    fn from_iter<I: IntoIterator<Item = Position>>(iter: I) -> Self {
        let mut set = Self::new();
        for pos in iter {
            set.insert(pos);
        }
        set
    }
}

impl IntoIterator for PositionSet {
    type Item = Position;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl fmt::Display for PositionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, pos) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{pos}")?;
        }
        write!(f, "}}")
    }
}

/// Iterator over the positions of a [`PositionSet`], in row-major order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u128,
}

impl Iterator for Iter {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Position::from_index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
