//! Houses: the three constraint groups of Sudoku.

use crate::{Position, PositionSet};

/// A Sudoku house (row, column, or 3×3 box).
///
/// Every cell belongs to exactly one house of each kind; a completed grid
/// holds each digit exactly once per house.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its row coordinate (0-8).
    Row {
        /// Row index (0-8).
        row: u8,
    },
    /// A column identified by its column coordinate (0-8).
    Column {
        /// Column index (0-8).
        col: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to
    /// bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Array containing all rows (0-8).
    pub const ROWS: [Self; 9] = {
        let mut rows = [Self::Row { row: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            rows[i] = Self::Row { row: i as u8 };
            i += 1;
        }
        rows
    };

    /// Array containing all columns (0-8).
    pub const COLUMNS: [Self; 9] = {
        let mut columns = [Self::Column { col: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            columns[i] = Self::Column { col: i as u8 };
            i += 1;
        }
        columns
    };

    /// Array containing all boxes (0-8).
    pub const BOXES: [Self; 9] = {
        let mut boxes = [Self::Box { index: 0 }; 9];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            boxes[i] = Self::Box { index: i as u8 };
            i += 1;
        }
        boxes
    };

    /// Array containing all 27 houses in row, column, box order.
    pub const ALL: [Self; 27] = {
        let mut all = [Self::Row { row: 0 }; 27];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 9 {
            all[i] = Self::Row { row: i as u8 };
            all[i + 9] = Self::Column { col: i as u8 };
            all[i + 18] = Self::Box { index: i as u8 };
            i += 1;
        }
        all
    };

    /// Returns the three houses containing `pos`: its row, column, and box.
    #[must_use]
    pub const fn containing(pos: Position) -> [Self; 3] {
        [
            Self::Row { row: pos.row() },
            Self::Column { col: pos.col() },
            Self::Box {
                index: pos.box_index(),
            },
        ]
    }

    /// Returns the nine positions of this house, in scan order.
    #[must_use]
    pub fn positions(self) -> [Position; 9] {
        let mut positions = [Position::new(0, 0); 9];
        for (i, slot) in positions.iter_mut().enumerate() {
            #[expect(clippy::cast_possible_truncation)]
            let i = i as u8;
            *slot = match self {
                Self::Row { row } => Position::new(row, i),
                Self::Column { col } => Position::new(i, col),
                Self::Box { index } => {
                    Position::new((index / 3) * 3 + i / 3, (index % 3) * 3 + i % 3)
                }
            };
        }
        positions
    }

    /// Returns the positions of this house as a set.
    #[must_use]
    pub const fn position_set(self) -> PositionSet {
        match self {
            Self::Row { row } => PositionSet::ROWS[row as usize],
            Self::Column { col } => PositionSet::COLUMNS[col as usize],
            Self::Box { index } => PositionSet::BOXES[index as usize],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_containing() {
        let pos = Position::new(4, 7);
        assert_eq!(
            House::containing(pos),
            [
                House::Row { row: 4 },
                House::Column { col: 7 },
                House::Box { index: 5 },
            ]
        );
    }

    #[test]
    fn test_positions_match_position_set() {
        for house in House::ALL {
            let from_array: PositionSet = house.positions().into_iter().collect();
            assert_eq!(from_array, house.position_set());
        }
    }

    #[test]
    fn test_box_positions() {
        let positions = House::Box { index: 4 }.positions();
        assert_eq!(positions[0], Position::new(3, 3));
        assert_eq!(positions[8], Position::new(5, 5));
    }

    #[test]
    fn test_every_position_in_exactly_three_houses() {
        for pos in Position::ALL {
            let count = House::ALL
                .into_iter()
                .filter(|house| house.position_set().contains(pos))
                .count();
            assert_eq!(count, 3);
        }
    }
}
