//! Move suggestion for the Kumiko Sudoku engine.
//!
//! This crate finds the "easiest" next move on a board: a *naked single*
//! (a cell whose row, column, and box exclude all digits but one). It backs
//! the interactive guide feature of a solving application.
//!
//! Only naked singles are detected; there is no technique chain beyond
//! that. When no naked single exists, [`suggest_move`] falls back to
//! revealing the solution digit of the first empty cell so the guide
//! always has a move to offer.
//!
//! # Examples
//!
//! ```
//! use kumiko_core::{Digit, Grid, Position};
//! use kumiko_solver::candidates;
//!
//! let mut grid = Grid::new();
//! grid.set(Position::new(0, 1), Some(Digit::D4));
//! grid.set(Position::new(1, 0), Some(Digit::D6));
//!
//! let cands = candidates(&grid, Position::new(0, 0));
//! assert!(!cands.contains(Digit::D4));
//! assert!(!cands.contains(Digit::D6));
//! assert_eq!(cands.len(), 7);
//! ```

pub mod suggest;

pub use self::suggest::{Suggestion, SuggestionKind, candidates, find_naked_single, suggest_move};
