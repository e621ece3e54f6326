//! Puzzle generation for the Kumiko Sudoku engine.
//!
//! Generation is two-phase:
//!
//! 1. **Fill**: randomized recursive backtracking produces a complete,
//!    rule-satisfying solution grid. Digits are tried in a uniformly
//!    shuffled order at every cell, so each run yields a fresh solution.
//! 2. **Carve**: a fixed number of cells, determined by [`Difficulty`],
//!    is removed from a shuffled ordering of all 81 positions, producing
//!    the playable problem grid. No uniqueness re-check is performed on
//!    the carved problem.
//!
//! Both phases draw from a PCG stream derived from a [`PuzzleSeed`], so a
//! `(seed, difficulty)` pair always reproduces the same puzzle.
//!
//! # Examples
//!
//! ```
//! use kumiko_generator::{Difficulty, PuzzleGenerator};
//!
//! let generator = PuzzleGenerator::new();
//! let puzzle = generator.generate(Difficulty::Medium);
//!
//! assert!(puzzle.solution.is_complete());
//! assert_eq!(puzzle.problem.empty_count(), 45);
//! ```

pub mod difficulty;
pub mod generate;
pub mod seed;

pub use self::{
    difficulty::{Difficulty, ParseDifficultyError},
    generate::{GeneratedPuzzle, PuzzleGenerator},
    seed::{ParseSeedError, PuzzleSeed},
};
