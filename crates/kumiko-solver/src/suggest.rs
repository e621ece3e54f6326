//! Naked-single detection and the guide's move suggestion.

use derive_more::{Display, IsVariant};
use kumiko_core::{Digit, DigitSet, Grid, Position};

/// How a suggested move was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum SuggestionKind {
    /// The cell has exactly one legal candidate.
    #[display("naked single")]
    NakedSingle,
    /// No naked single exists; the digit is revealed from the solution.
    #[display("reveal")]
    Reveal,
}

/// A suggested next move for the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    /// The cell to fill.
    pub position: Position,
    /// The digit to place there.
    pub digit: Digit,
    /// How the move was found.
    pub kind: SuggestionKind,
}

/// Returns every digit legal at `pos` under row, column, and box
/// uniqueness.
///
/// The cell's own content is ignored, so this can be asked of filled cells
/// too (e.g. "what else could go here").
#[must_use]
pub fn candidates(grid: &Grid, pos: Position) -> DigitSet {
    Digit::ALL
        .into_iter()
        .filter(|&digit| grid.is_legal_placement(pos, digit))
        .collect()
}

/// Finds the first empty cell (row-major) with exactly one legal
/// candidate.
#[must_use]
pub fn find_naked_single(grid: &Grid) -> Option<(Position, Digit)> {
    Position::ALL
        .into_iter()
        .filter(|&pos| grid.get(pos).is_none())
        .find_map(|pos| Some((pos, candidates(grid, pos).as_single()?)))
}

/// Suggests the easiest next move on `grid`.
///
/// Scans empty cells in row-major order and returns the first naked single
/// whose candidate also matches `solution` (a single candidate that
/// contradicts the solution means the board already holds a wrong digit;
/// such cells are skipped). When no naked single qualifies, falls back to
/// the first empty cell paired with its solution digit, so an interactive
/// guide always has a move to offer. Returns `None` only on a full grid.
#[must_use]
pub fn suggest_move(grid: &Grid, solution: &Grid) -> Option<Suggestion> {
    let naked_single = Position::ALL
        .into_iter()
        .filter(|&pos| grid.get(pos).is_none())
        .find_map(|pos| {
            let digit = candidates(grid, pos).as_single()?;
            (solution.get(pos) == Some(digit)).then_some(Suggestion {
                position: pos,
                digit,
                kind: SuggestionKind::NakedSingle,
            })
        });
    if naked_single.is_some() {
        return naked_single;
    }

    let pos = grid.first_empty()?;
    solution.get(pos).map(|digit| Suggestion {
        position: pos,
        digit,
        kind: SuggestionKind::Reveal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: &str =
        "185362947793148526246795183564239871931874265827516394318427659672951438459683712";

    fn solution() -> Grid {
        SOLVED.parse().expect("valid solution grid")
    }

    /// A grid whose only empty cell at (0, 0) is constrained down to a
    /// single candidate: 2-9 occupy its row, column, and box.
    fn naked_single_at_origin() -> Grid {
        "
        .23 456 789
        4.. ... ...
        .5. ... ...
        6.. ... ...
        7.. ... ...
        8.. ... ...
        9.. ... ...
        ... ... ...
        ... ... ...
        "
        .parse()
        .expect("valid grid")
    }

    #[test]
    fn test_candidates_excludes_house_digits() {
        let grid = naked_single_at_origin();
        let cands = candidates(&grid, Position::new(0, 0));
        assert_eq!(cands.as_single(), Some(Digit::D1));
    }

    #[test]
    fn test_find_naked_single() {
        let grid = naked_single_at_origin();
        assert_eq!(
            find_naked_single(&grid),
            Some((Position::new(0, 0), Digit::D1))
        );
        assert_eq!(find_naked_single(&Grid::new()), None);
    }

    #[test]
    fn test_suggest_move_prefers_naked_single() {
        let grid = naked_single_at_origin();
        // Solution content for (0, 0) must agree with the single
        // candidate for the suggestion to be accepted.
        let mut solution = grid;
        solution.set(Position::new(0, 0), Some(Digit::D1));

        let suggestion = suggest_move(&grid, &solution).expect("board has empty cells");
        assert_eq!(suggestion.position, Position::new(0, 0));
        assert_eq!(suggestion.digit, Digit::D1);
        assert!(suggestion.kind.is_naked_single());
    }

    #[test]
    fn test_suggest_move_falls_back_to_reveal() {
        // An empty board has nine candidates everywhere, so the guide must
        // fall back to revealing the first empty cell.
        let solution = solution();
        let suggestion = suggest_move(&Grid::new(), &solution).expect("board has empty cells");
        assert_eq!(suggestion.position, Position::new(0, 0));
        assert_eq!(suggestion.digit, Digit::D1);
        assert!(suggestion.kind.is_reveal());
    }

    #[test]
    fn test_suggest_move_skips_singles_contradicting_solution() {
        let grid = naked_single_at_origin();
        // Pretend the solution wants a different digit at (0, 0): the
        // naked single is rejected, the fallback reveals the solution's
        // digit instead.
        let mut solution = grid;
        solution.set(Position::new(0, 0), Some(Digit::D5));

        let suggestion = suggest_move(&grid, &solution).expect("board has empty cells");
        assert_eq!(suggestion.position, Position::new(0, 0));
        assert_eq!(suggestion.digit, Digit::D5);
        assert!(suggestion.kind.is_reveal());
    }

    #[test]
    fn test_suggest_move_none_on_full_grid() {
        let solution = solution();
        assert_eq!(suggest_move(&solution, &solution), None);
    }
}
