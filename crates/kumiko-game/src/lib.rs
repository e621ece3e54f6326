//! Play-state engine for the Kumiko Sudoku engine.
//!
//! A [`Session`] owns everything that mutates during play: the player's
//! grid, per-cell pencil notes, the mistake counter, remaining hints, and
//! per-cell error flags. Every player action goes through a session
//! operation; illegal requests (writing to a clue, hinting with no hints
//! left) are rejected silently via outcome enums rather than errors,
//! since rejection is policy, not a failure.
//!
//! The session is a plain value with no I/O: persistence, timers, sound,
//! and rendering belong to the host application. [`SaveState`] defines the
//! plain-data contract a host uses to persist and resume a session.
//!
//! # Examples
//!
//! ```
//! use kumiko_game::{ErrorCheckMode, Session};
//! use kumiko_generator::{Difficulty, PuzzleGenerator};
//!
//! let puzzle = PuzzleGenerator::new().generate(Difficulty::Easy);
//! let mut session = Session::new(puzzle, ErrorCheckMode::Instant);
//!
//! assert_eq!(session.hints_left(), 3);
//! assert!(!session.is_solved());
//! ```

pub mod input;
pub mod save;
pub mod session;

pub use self::{
    input::{
        EraseOutcome, ErrorCheckMode, HintOutcome, NoteOutcome, ParseCheckModeError, PlaceOutcome,
    },
    save::{RestoreError, SaveState},
    session::{STARTING_HINTS, Session},
};
