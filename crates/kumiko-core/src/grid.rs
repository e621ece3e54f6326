//! The 9×9 board of optional digits and the placement legality check.

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use derive_more::{Display, Error};

use crate::{Digit, DigitSet, House, Position};

/// A 9×9 board where each cell holds a digit or is empty.
///
/// Three grids matter to a game: the *puzzle* (original clues), the
/// *solution* (complete answer), and the *player grid* (the evolving
/// attempt). All three use this type.
///
/// # Text format
///
/// [`fmt::Display`] renders 81 characters in row-major order, `.` for
/// empty cells. [`FromStr`] accepts the same, treating `.`, `_`, and `0` as
/// empty and skipping ASCII whitespace:
///
/// ```
/// use kumiko_core::Grid;
///
/// let grid: Grid = "
///     53. .7. ...
///     6.. 195 ...
///     .98 ... .6.
///     8.. .6. ..3
///     4.. 8.3 ..1
///     7.. .2. ..6
///     .6. ... 28.
///     ... 419 ..5
///     ... .8. .79
/// "
/// .parse()
/// .unwrap();
/// assert_eq!(grid.empty_count(), 51);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [Option<Digit>; 81],
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Grid {
    /// Creates an empty grid.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Returns the cell content at `pos`.
    #[must_use]
    pub const fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index() as usize]
    }

    /// Sets the cell content at `pos`.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index() as usize] = digit;
    }

    /// Checks whether placing `digit` at `pos` would violate row, column,
    /// or box uniqueness.
    ///
    /// The target cell's own content is irrelevant: this judges the
    /// legality of *placing* `digit` at `pos`, not the cell's occupant.
    /// Pure, O(27).
    #[must_use]
    pub fn is_legal_placement(&self, pos: Position, digit: Digit) -> bool {
        House::containing(pos)
            .into_iter()
            .flat_map(House::positions)
            .all(|peer| peer == pos || self.get(peer) != Some(digit))
    }

    /// Returns the first empty cell in row-major scan order.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.get(pos).is_none())
    }

    /// Returns the number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// Returns whether every cell holds a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns the set of digits currently placed in `house`.
    #[must_use]
    pub fn house_digits(&self, house: House) -> DigitSet {
        house
            .positions()
            .into_iter()
            .filter_map(|pos| self.get(pos))
            .collect()
    }
}

impl Index<Position> for Grid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[pos.index() as usize]
    }
}

impl IndexMut<Position> for Grid {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[pos.index() as usize]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            match cell {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

/// Error returned when parsing a [`Grid`] from text fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum ParseGridError {
    /// A character was neither a digit, an empty-cell marker, nor
    /// whitespace.
    #[display("invalid grid character: {_0:?}")]
    InvalidCharacter(#[error(not(source))] char),
    /// The input did not describe exactly 81 cells.
    #[display("expected 81 cells, got {_0}")]
    WrongCellCount(#[error(not(source))] usize),
}

impl FromStr for Grid {
    type Err = ParseGridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut grid = Self::new();
        let mut count = 0;
        for ch in s.chars() {
            let cell = match ch {
                '.' | '_' | '0' => None,
                '1'..='9' => {
                    #[expect(clippy::cast_possible_truncation)]
                    let value = ch.to_digit(10).map(|value| value as u8);
                    value.and_then(Digit::try_from_value)
                }
                ch if ch.is_ascii_whitespace() => continue,
                ch => return Err(ParseGridError::InvalidCharacter(ch)),
            };
            if count < 81 {
                grid.cells[count] = cell;
            }
            count += 1;
        }
        if count != 81 {
            return Err(ParseGridError::WrongCellCount(count));
        }
        Ok(grid)
    }
}
