//! The play session: state and operations of one solving attempt.

use kumiko_core::{Digit, DigitSet, Grid, House, Position, PositionSet};
use kumiko_generator::{Difficulty, GeneratedPuzzle};
use kumiko_solver::Suggestion;
use log::debug;

use crate::{
    EraseOutcome, ErrorCheckMode, HintOutcome, NoteOutcome, PlaceOutcome,
};

/// Number of hints a fresh session starts with.
pub const STARTING_HINTS: u8 = 3;

/// A Sudoku play session.
///
/// Owns the mutable state of one solving attempt: the player's grid,
/// pencil notes, mistake count, remaining hints, and per-cell error flags.
/// The puzzle (clues) and solution are fixed at construction; clue cells
/// can never be changed by any operation.
///
/// All operations are synchronous and the session is a plain value; a
/// host exposing it to several event handlers is responsible for
/// serializing writes.
///
/// # Examples
///
/// ```
/// use kumiko_core::Position;
/// use kumiko_game::{ErrorCheckMode, Session};
/// use kumiko_generator::{Difficulty, PuzzleGenerator};
///
/// let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
/// let mut session = Session::new(puzzle, ErrorCheckMode::Instant);
///
/// let pos = Position::ALL
///     .into_iter()
///     .find(|&pos| !session.is_clue(pos))
///     .expect("puzzle has empty cells");
/// let digit = session.solution().get(pos).expect("solution is complete");
/// let outcome = session.place_digit(pos, digit);
/// assert!(outcome.is_placed());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    difficulty: Difficulty,
    puzzle: Grid,
    solution: Grid,
    player: Grid,
    notes: [DigitSet; 81],
    mistakes: u32,
    hints_left: u8,
    error_flags: PositionSet,
    check_mode: ErrorCheckMode,
    solved: bool,
}

impl Session {
    /// Creates a session from a generated puzzle.
    ///
    /// The player grid starts equal to the problem grid; mistakes at 0,
    /// hints at [`STARTING_HINTS`].
    #[must_use]
    pub fn new(puzzle: GeneratedPuzzle, check_mode: ErrorCheckMode) -> Self {
        let GeneratedPuzzle {
            problem,
            solution,
            difficulty,
            seed: _,
        } = puzzle;
        Self::from_grids(difficulty, problem, solution, check_mode)
    }

    /// Creates a session from a problem/solution grid pair.
    ///
    /// `solution` must be complete and every clue in `puzzle` must match
    /// it; grids produced by the generator satisfy this by construction.
    #[must_use]
    pub fn from_grids(
        difficulty: Difficulty,
        puzzle: Grid,
        solution: Grid,
        check_mode: ErrorCheckMode,
    ) -> Self {
        debug_assert!(solution.is_complete());
        debug_assert!(
            Position::ALL
                .into_iter()
                .all(|pos| puzzle.get(pos).is_none() || puzzle.get(pos) == solution.get(pos))
        );
        Self {
            difficulty,
            puzzle,
            solution,
            player: puzzle,
            notes: [DigitSet::EMPTY; 81],
            mistakes: 0,
            hints_left: STARTING_HINTS,
            error_flags: PositionSet::EMPTY,
            check_mode,
            solved: false,
        }
    }

    #[expect(clippy::too_many_arguments)]
    pub(crate) fn from_raw(
        difficulty: Difficulty,
        puzzle: Grid,
        solution: Grid,
        player: Grid,
        notes: [DigitSet; 81],
        mistakes: u32,
        hints_left: u8,
        check_mode: ErrorCheckMode,
    ) -> Self {
        let solved = player == solution;
        Self {
            difficulty,
            puzzle,
            solution,
            player,
            notes,
            mistakes,
            hints_left,
            error_flags: PositionSet::EMPTY,
            check_mode,
            solved,
        }
    }

    /// Returns the difficulty the puzzle was generated for.
    #[must_use]
    pub const fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Returns the clue grid (immutable during play).
    #[must_use]
    pub const fn puzzle(&self) -> &Grid {
        &self.puzzle
    }

    /// Returns the solution grid.
    #[must_use]
    pub const fn solution(&self) -> &Grid {
        &self.solution
    }

    /// Returns the player's current grid (clues included).
    #[must_use]
    pub const fn player(&self) -> &Grid {
        &self.player
    }

    /// Returns the player grid content at `pos`.
    #[must_use]
    pub const fn value(&self, pos: Position) -> Option<Digit> {
        self.player.get(pos)
    }

    /// Returns whether `pos` holds a clue.
    #[must_use]
    pub const fn is_clue(&self, pos: Position) -> bool {
        self.puzzle.get(pos).is_some()
    }

    /// Returns the pencil notes at `pos`.
    #[must_use]
    pub const fn notes(&self, pos: Position) -> DigitSet {
        self.notes[pos.index() as usize]
    }

    /// Returns the mistake count.
    #[must_use]
    pub const fn mistakes(&self) -> u32 {
        self.mistakes
    }

    /// Returns the number of hints remaining.
    #[must_use]
    pub const fn hints_left(&self) -> u8 {
        self.hints_left
    }

    /// Returns whether `pos` is currently flagged as an error.
    #[must_use]
    pub const fn is_flagged(&self, pos: Position) -> bool {
        self.error_flags.contains(pos)
    }

    /// Returns the set of cells currently flagged as errors.
    #[must_use]
    pub const fn error_flags(&self) -> PositionSet {
        self.error_flags
    }

    /// Returns whether the session has reached the terminal solved state.
    #[must_use]
    pub const fn is_solved(&self) -> bool {
        self.solved
    }

    /// Returns the current error-check mode.
    #[must_use]
    pub const fn check_mode(&self) -> ErrorCheckMode {
        self.check_mode
    }

    /// Changes the error-check mode mid-game (a settings change).
    ///
    /// Existing flags and the mistake count are left as they are.
    pub const fn set_check_mode(&mut self, mode: ErrorCheckMode) {
        self.check_mode = mode;
    }

    /// Places a digit at `pos`.
    ///
    /// Rejected when the session is solved or `pos` holds a clue.
    /// Otherwise the digit is written (replacing any earlier player
    /// value), the cell's notes are cleared, and in instant mode the
    /// digit is compared against the solution, updating the mistake
    /// counter and error flag. Unit-completion and win detection always
    /// run against the updated grid.
    pub fn place_digit(&mut self, pos: Position, digit: Digit) -> PlaceOutcome {
        if self.solved || self.is_clue(pos) {
            return PlaceOutcome::Rejected;
        }

        self.player.set(pos, Some(digit));
        self.notes[pos.index() as usize].clear();

        let mut mistake = false;
        if self.check_mode.is_instant() {
            if self.solution.get(pos) == Some(digit) {
                self.error_flags.remove(pos);
            } else {
                mistake = true;
                self.mistakes += 1;
                self.error_flags.insert(pos);
                debug!("mistake at {pos}: placed {digit}, total {}", self.mistakes);
            }
        }

        let completed = self.completed_units(pos);
        let solved = self.detect_win();
        PlaceOutcome::Placed {
            mistake,
            completed,
            solved,
        }
    }

    /// Toggles a pencil note at `pos`.
    ///
    /// Rejected when the session is solved or `pos` holds a clue. A pure
    /// toggle, independent of any placed value.
    pub fn toggle_note(&mut self, pos: Position, digit: Digit) -> NoteOutcome {
        if self.solved || self.is_clue(pos) {
            return NoteOutcome::Rejected;
        }
        let notes = &mut self.notes[pos.index() as usize];
        notes.toggle(digit);
        if notes.contains(digit) {
            NoteOutcome::Added
        } else {
            NoteOutcome::Removed
        }
    }

    /// Erases player input at `pos`.
    ///
    /// Rejected when the session is solved or `pos` holds a clue. A
    /// placed value (and its error flag) is cleared first; when no value
    /// is placed, the cell's notes are cleared instead.
    pub fn erase(&mut self, pos: Position) -> EraseOutcome {
        if self.solved || self.is_clue(pos) {
            return EraseOutcome::Rejected;
        }
        if self.player.get(pos).is_some() {
            self.player.set(pos, None);
            self.error_flags.remove(pos);
            return EraseOutcome::ClearedValue;
        }
        let notes = &mut self.notes[pos.index() as usize];
        if notes.is_empty() {
            EraseOutcome::Nothing
        } else {
            notes.clear();
            EraseOutcome::ClearedNotes
        }
    }

    /// Reveals the solution digit at `pos`, spending a hint.
    ///
    /// Rejected when the session is solved, no hints remain, or the cell
    /// already holds a value (clue or player-placed). A hint is correct by
    /// construction, so it never touches the mistake counter or error
    /// flags. Unit-completion and win detection run exactly as in
    /// [`place_digit`](Self::place_digit).
    pub fn request_hint(&mut self, pos: Position) -> HintOutcome {
        if self.solved || self.hints_left == 0 || self.player.get(pos).is_some() {
            return HintOutcome::Rejected;
        }
        let Some(digit) = self.solution.get(pos) else {
            return HintOutcome::Rejected;
        };

        self.player.set(pos, Some(digit));
        self.hints_left -= 1;
        self.notes[pos.index() as usize].clear();
        debug!("hint revealed {digit} at {pos}, {} left", self.hints_left);

        let completed = self.completed_units(pos);
        let solved = self.detect_win();
        HintOutcome::Revealed {
            digit,
            completed,
            solved,
        }
    }

    /// Audits the whole grid, replacing all error flags and the mistake
    /// count.
    ///
    /// A cell is in error iff it holds a player-placed value (not a clue)
    /// that differs from the solution. The previous flags and count are
    /// discarded, so repeated audits are idempotent and never
    /// double-count. Returns the new mistake count.
    pub fn check_all_errors(&mut self) -> u32 {
        let mut flags = PositionSet::EMPTY;
        for pos in Position::ALL {
            if !self.is_clue(pos)
                && let Some(digit) = self.player.get(pos)
                && self.solution.get(pos) != Some(digit)
            {
                flags.insert(pos);
            }
        }
        self.error_flags = flags;
        #[expect(clippy::cast_possible_truncation)]
        {
            self.mistakes = flags.len() as u32;
        }
        self.mistakes
    }

    /// Suggests the easiest next move (naked single, or a solution reveal
    /// as a fallback). `None` once the session is solved.
    #[must_use]
    pub fn suggest_move(&self) -> Option<Suggestion> {
        if self.solved {
            return None;
        }
        kumiko_solver::suggest_move(&self.player, &self.solution)
    }

    /// Returns how many times each digit appears in the player grid,
    /// indexed by `digit.value() - 1`. Clues count.
    #[must_use]
    pub fn digit_counts(&self) -> [u8; 9] {
        let mut counts = [0_u8; 9];
        for pos in Position::ALL {
            if let Some(digit) = self.player.get(pos) {
                counts[usize::from(digit.value() - 1)] += 1;
            }
        }
        counts
    }

    /// Returns the digits placed nine times (a keypad can dim these).
    #[must_use]
    pub fn completed_digits(&self) -> DigitSet {
        Digit::ALL
            .into_iter()
            .zip(self.digit_counts())
            .filter_map(|(digit, count)| (count == 9).then_some(digit))
            .collect()
    }

    /// Returns the digits already present in the row, column, and box of
    /// `pos` (a notes keypad can dim these as conflicting).
    #[must_use]
    pub fn unit_digits(&self, pos: Position) -> DigitSet {
        House::containing(pos)
            .into_iter()
            .flat_map(|house| self.player.house_digits(house))
            .collect()
    }

    /// Reports the cells of every house completed by a write at `pos`.
    ///
    /// A house is complete when its nine cells hold nine distinct digits.
    /// Row/column/box overlaps are deduplicated by the set union. The
    /// result is a transient signal for the caller; the session keeps no
    /// record of it.
    fn completed_units(&self, pos: Position) -> PositionSet {
        let mut completed = PositionSet::EMPTY;
        for house in House::containing(pos) {
            if self.player.house_digits(house) == DigitSet::FULL {
                completed |= house.position_set();
            }
        }
        completed
    }

    /// Win detection: cell-for-cell equality with the solution. Equality
    /// to a valid solution implies full rule validity, so no constraint
    /// re-check is needed.
    fn detect_win(&mut self) -> bool {
        if !self.solved && self.player == self.solution {
            self.solved = true;
            debug!("session solved ({})", self.difficulty);
        }
        self.solved
    }
}
