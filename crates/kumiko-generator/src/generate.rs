//! Solution filling and puzzle carving.

use std::time::Instant;

use kumiko_core::{Digit, Grid, Position};
use log::debug;
use rand::{Rng, seq::SliceRandom as _};

use crate::{Difficulty, PuzzleSeed};

/// A generated puzzle: the playable problem, its solution, and the inputs
/// that produced it.
///
/// Plain data: the play-state engine consumes it, and a host application
/// can persist or transfer it freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedPuzzle {
    /// The playable grid with cells removed.
    pub problem: Grid,
    /// The complete solution the problem was carved from.
    pub solution: Grid,
    /// The tier the problem was carved for.
    pub difficulty: Difficulty,
    /// The seed that reproduces this puzzle.
    pub seed: PuzzleSeed,
}

/// Generates Sudoku puzzles by randomized backtracking and carving.
///
/// # Examples
///
/// ```
/// use kumiko_generator::{Difficulty, PuzzleGenerator, PuzzleSeed};
///
/// let generator = PuzzleGenerator::new();
/// let seed = PuzzleSeed::from_phrase("docs");
/// let puzzle = generator.generate_with_seed(Difficulty::Hard, seed);
///
/// // Same seed, same puzzle.
/// let again = generator.generate_with_seed(Difficulty::Hard, seed);
/// assert_eq!(puzzle, again);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PuzzleGenerator {
    _private: (),
}

impl PuzzleGenerator {
    /// Creates a new generator.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }

    /// Generates a puzzle for `difficulty` from a fresh random seed.
    #[must_use]
    pub fn generate(&self, difficulty: Difficulty) -> GeneratedPuzzle {
        self.generate_with_seed(difficulty, PuzzleSeed::random())
    }

    /// Generates the puzzle identified by `(difficulty, seed)`.
    #[must_use]
    pub fn generate_with_seed(&self, difficulty: Difficulty, seed: PuzzleSeed) -> GeneratedPuzzle {
        let start = Instant::now();
        let mut rng = seed.rng();

        let solution = fill_solution(&mut rng);
        let problem = carve(&solution, difficulty, &mut rng);

        debug!(
            "generated {difficulty} puzzle: {} clues, seed {seed}, took {:?}",
            81 - problem.empty_count(),
            start.elapsed(),
        );
        GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed,
        }
    }
}

/// Fills an empty grid into a complete valid solution.
///
/// Backtracking over cells in row-major order, trying digits in a freshly
/// shuffled order at each cell. The shuffle is what makes distinct seeds
/// produce distinct solutions.
fn fill_solution<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = Grid::new();
    let filled = fill_from(&mut grid, rng);
    // An empty board always admits a solution.
    assert!(filled, "backtracking failed to fill an empty grid");
    grid
}

/// Backtracking step: fill the first empty cell, recurse, undo on failure.
///
/// The grid is threaded as a single `&mut` owner; every tentative write is
/// retracted before returning `false`.
fn fill_from<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> bool {
    let Some(pos) = grid.first_empty() else {
        return true;
    };

    let mut digits = Digit::ALL;
    digits.shuffle(rng);
    for digit in digits {
        if !grid.is_legal_placement(pos, digit) {
            continue;
        }
        grid.set(pos, Some(digit));
        if fill_from(grid, rng) {
            return true;
        }
        grid.set(pos, None);
    }
    false
}

/// Carves a playable problem out of `solution`.
///
/// All 81 positions are shuffled and the first
/// [`cells_to_remove`](Difficulty::cells_to_remove) of them are cleared.
/// The carved problem is not re-checked for solution uniqueness.
fn carve<R: Rng + ?Sized>(solution: &Grid, difficulty: Difficulty, rng: &mut R) -> Grid {
    let mut problem = *solution;
    let mut positions = Position::ALL;
    positions.shuffle(rng);
    for pos in &positions[..difficulty.cells_to_remove()] {
        problem.set(*pos, None);
    }
    problem
}
