//! Serializable snapshots of a [`Session`].
//!
//! The snapshot stores grids as 81-character strings and notes as ordered
//! digit lists, so saved games stay readable and diffable as JSON. Error
//! flags and the terminal flag are not persisted; both are derivable and
//! are recomputed (flags start empty) on restore.

use derive_more::{Display, Error, From};
use kumiko_core::{Digit, DigitSet, Grid, ParseGridError, Position};
use kumiko_generator::{Difficulty, ParseDifficultyError};
use serde::{Deserialize, Serialize};

use crate::{ErrorCheckMode, ParseCheckModeError, Session, session::STARTING_HINTS};

/// A serializable snapshot of a session.
///
/// Produced by [`Session::to_save_state`] and consumed by
/// [`Session::restore`]. The format is stable: fields are plain strings
/// and integers, suitable for local storage or a save file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveState {
    /// Difficulty name, e.g. `"medium"`.
    pub difficulty: String,
    /// Error-check mode name, e.g. `"manual"`.
    pub check_mode: String,
    /// The clue grid, 81 characters with `.` for empty cells.
    pub puzzle: String,
    /// The solution grid, 81 digit characters.
    pub solution: String,
    /// The player grid, 81 characters with `.` for empty cells.
    pub player: String,
    /// Pencil notes per cell in row-major order, each an ascending digit
    /// list.
    pub notes: Vec<Vec<u8>>,
    /// Mistakes counted so far.
    pub mistakes: u32,
    /// Hints remaining.
    pub hints_left: u8,
}

/// An error restoring a [`Session`] from a [`SaveState`].
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum RestoreError {
    /// The difficulty name was not recognized.
    Difficulty(ParseDifficultyError),
    /// The check-mode name was not recognized.
    CheckMode(ParseCheckModeError),
    /// A grid string failed to parse.
    Grid(ParseGridError),
    /// The solution grid has empty cells.
    #[display("solution grid is incomplete")]
    #[from(skip)]
    IncompleteSolution,
    /// A puzzle clue disagrees with the solution, or the player grid
    /// disagrees with a clue.
    #[display("grids disagree at {_0}")]
    #[from(skip)]
    GridMismatch(#[error(not(source))] Position),
    /// The notes list does not have one entry per cell.
    #[display("expected 81 note lists, found {_0}")]
    #[from(skip)]
    WrongNoteCount(#[error(not(source))] usize),
    /// A note digit was outside 1..=9.
    #[display("note digit out of range 1-9: {_0}")]
    #[from(skip)]
    InvalidNoteDigit(#[error(not(source))] u8),
    /// More hints than a session starts with.
    #[display("hints left out of range: {_0}")]
    #[from(skip)]
    TooManyHints(#[error(not(source))] u8),
}

impl Session {
    /// Captures the session as a serializable snapshot.
    #[must_use]
    pub fn to_save_state(&self) -> SaveState {
        SaveState {
            difficulty: self.difficulty().to_string(),
            check_mode: self.check_mode().to_string(),
            puzzle: self.puzzle().to_string(),
            solution: self.solution().to_string(),
            player: self.player().to_string(),
            notes: Position::ALL
                .into_iter()
                .map(|pos| self.notes(pos).to_digits())
                .collect(),
            mistakes: self.mistakes(),
            hints_left: self.hints_left(),
        }
    }

    /// Rebuilds a session from a snapshot.
    ///
    /// Validates that the grids parse, the solution is complete and agrees
    /// with the clues, the player grid preserves every clue, and the notes
    /// are well-formed. Error flags are not part of the snapshot and start
    /// empty; run [`check_all_errors`](Self::check_all_errors) after
    /// restoring if flags should be shown immediately.
    ///
    /// # Errors
    ///
    /// Returns a [`RestoreError`] describing the first inconsistency found.
    pub fn restore(state: &SaveState) -> Result<Self, RestoreError> {
        let difficulty: Difficulty = state.difficulty.parse()?;
        let check_mode: ErrorCheckMode = state.check_mode.parse()?;
        let puzzle: Grid = state.puzzle.parse()?;
        let solution: Grid = state.solution.parse()?;
        let player: Grid = state.player.parse()?;

        if !solution.is_complete() {
            return Err(RestoreError::IncompleteSolution);
        }
        for pos in Position::ALL {
            if let Some(clue) = puzzle.get(pos)
                && (solution.get(pos) != Some(clue) || player.get(pos) != Some(clue))
            {
                return Err(RestoreError::GridMismatch(pos));
            }
        }

        if state.notes.len() != 81 {
            return Err(RestoreError::WrongNoteCount(state.notes.len()));
        }
        let mut notes = [DigitSet::EMPTY; 81];
        for (set, digits) in notes.iter_mut().zip(&state.notes) {
            for &value in digits {
                let digit = Digit::try_from_value(value)
                    .ok_or(RestoreError::InvalidNoteDigit(value))?;
                set.insert(digit);
            }
        }

        if state.hints_left > STARTING_HINTS {
            return Err(RestoreError::TooManyHints(state.hints_left));
        }

        Ok(Self::from_raw(
            difficulty,
            puzzle,
            solution,
            player,
            notes,
            state.mistakes,
            state.hints_left,
            check_mode,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kumiko_generator::{PuzzleGenerator, PuzzleSeed};

    fn sample_session() -> Session {
        let seed = PuzzleSeed::from_phrase("save state tests");
        let puzzle = PuzzleGenerator::new().generate_with_seed(Difficulty::Medium, seed);
        let mut session = Session::new(puzzle, ErrorCheckMode::Instant);

        let empty: Vec<_> = Position::ALL
            .into_iter()
            .filter(|&pos| session.value(pos).is_none())
            .collect();
        session.toggle_note(empty[0], Digit::D2);
        session.toggle_note(empty[0], Digit::D6);
        let right = session.solution().get(empty[1]).unwrap();
        session.place_digit(empty[1], right);
        // A deliberate wrong placement so mistakes is nonzero.
        let wrong = Digit::ALL
            .into_iter()
            .find(|&digit| Some(digit) != session.solution().get(empty[2]))
            .unwrap();
        session.place_digit(empty[2], wrong);
        session.request_hint(empty[3]);
        session
    }

    #[test]
    fn test_save_restore_round_trip() {
        let session = sample_session();
        let state = session.to_save_state();
        let restored = Session::restore(&state).unwrap();

        assert_eq!(restored.puzzle(), session.puzzle());
        assert_eq!(restored.solution(), session.solution());
        assert_eq!(restored.player(), session.player());
        assert_eq!(restored.mistakes(), session.mistakes());
        assert_eq!(restored.hints_left(), session.hints_left());
        assert_eq!(restored.difficulty(), session.difficulty());
        assert_eq!(restored.check_mode(), session.check_mode());
        for pos in Position::ALL {
            assert_eq!(restored.notes(pos), session.notes(pos));
        }
        // Flags are not persisted; an audit rebuilds them.
        assert!(restored.error_flags().is_empty());
    }

    #[test]
    fn test_save_state_survives_json() {
        let state = sample_session().to_save_state();
        let json = serde_json::to_string(&state).unwrap();
        let parsed: SaveState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_restore_recomputes_solved() {
        let solution = sample_session().solution().to_string();
        let state = SaveState {
            difficulty: "easy".to_owned(),
            check_mode: "off".to_owned(),
            puzzle: solution.clone(),
            solution: solution.clone(),
            player: solution,
            notes: vec![Vec::new(); 81],
            mistakes: 0,
            hints_left: 3,
        };
        let session = Session::restore(&state).unwrap();
        assert!(session.is_solved());
    }

    #[test]
    fn test_restore_rejects_bad_difficulty() {
        let mut state = sample_session().to_save_state();
        state.difficulty = "impossible".to_owned();
        assert!(matches!(
            Session::restore(&state),
            Err(RestoreError::Difficulty(_))
        ));
    }

    #[test]
    fn test_restore_rejects_clue_mismatch() {
        let session = sample_session();
        let mut state = session.to_save_state();
        // Blank a clue in the player grid.
        let clue = Position::ALL
            .into_iter()
            .find(|&pos| session.is_clue(pos))
            .unwrap();
        let mut player: Grid = state.player.parse().unwrap();
        player.set(clue, None);
        state.player = player.to_string();
        assert!(matches!(
            Session::restore(&state),
            Err(RestoreError::GridMismatch(pos)) if pos == clue
        ));
    }

    #[test]
    fn test_restore_rejects_bad_notes() {
        let mut state = sample_session().to_save_state();
        state.notes.pop();
        assert!(matches!(
            Session::restore(&state),
            Err(RestoreError::WrongNoteCount(80))
        ));

        let mut state = sample_session().to_save_state();
        state.notes[0] = vec![0];
        assert!(matches!(
            Session::restore(&state),
            Err(RestoreError::InvalidNoteDigit(0))
        ));
    }

    #[test]
    fn test_restore_rejects_too_many_hints() {
        let mut state = sample_session().to_save_state();
        state.hints_left = 4;
        assert!(matches!(
            Session::restore(&state),
            Err(RestoreError::TooManyHints(4))
        ));
    }
}
