//! Core data structures for the Kumiko Sudoku engine.
//!
//! This crate provides the leaf types shared by puzzle generation, move
//! suggestion, and game-session tracking:
//!
//! - [`Digit`]: type-safe Sudoku digit (1-9)
//! - [`Position`]: board coordinate (row, column), each 0-8
//! - [`DigitSet`]: a 9-bit set of digits, backing pencil notes and
//!   candidate computations
//! - [`PositionSet`]: an 81-bit set of board positions
//! - [`House`]: a row, column, or 3×3 box (the three constraint groups)
//! - [`Grid`]: a 9×9 board of optional digits, hosting the placement
//!   legality check ([`Grid::is_legal_placement`])
//!
//! # Examples
//!
//! ```
//! use kumiko_core::{Digit, Grid, Position};
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 0), Some(Digit::D5));
//!
//! // 5 is no longer legal anywhere else in row 0, column 0, or the
//! // top-left box.
//! assert!(!grid.is_legal_placement(Position::new(0, 8), Digit::D5));
//! assert!(!grid.is_legal_placement(Position::new(8, 0), Digit::D5));
//! assert!(!grid.is_legal_placement(Position::new(2, 2), Digit::D5));
//! assert!(grid.is_legal_placement(Position::new(4, 4), Digit::D5));
//! ```

pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod house;
pub mod position;
pub mod position_set;

pub use self::{
    digit::Digit,
    digit_set::DigitSet,
    grid::{Grid, ParseGridError},
    house::House,
    position::Position,
    position_set::PositionSet,
};
