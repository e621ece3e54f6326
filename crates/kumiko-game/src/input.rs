//! Input policy and operation outcomes.
//!
//! Session operations never fail: requests the rules forbid are silently
//! rejected, and each operation reports what it did through one of the
//! outcome enums here. Callers that care (for feedback sounds, animation
//! triggers) inspect the outcome; callers that don't can ignore it.

use std::str::FromStr;

use derive_more::{Display, Error, IsVariant};
use kumiko_core::{Digit, PositionSet};

/// When player input is compared against the solution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, IsVariant)]
pub enum ErrorCheckMode {
    /// Every placement is checked immediately; mistakes increment the
    /// counter as they happen.
    #[display("instant")]
    Instant,
    /// Placements are unchecked until the player requests a full audit
    /// ([`Session::check_all_errors`](crate::Session::check_all_errors)).
    #[default]
    #[display("manual")]
    Manual,
    /// No error checking at all.
    #[display("off")]
    Off,
}

impl ErrorCheckMode {
    /// All modes.
    pub const ALL: [Self; 3] = [Self::Instant, Self::Manual, Self::Off];
}

/// Error returned when parsing an [`ErrorCheckMode`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown error-check mode: {name:?}")]
pub struct ParseCheckModeError {
    /// The rejected input.
    #[error(not(source))]
    pub name: String,
}

impl FromStr for ErrorCheckMode {
    type Err = ParseCheckModeError;

    /// Parses a mode name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseCheckModeError {
                name: s.to_owned(),
            })
    }
}

/// Outcome of [`Session::place_digit`](crate::Session::place_digit).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum PlaceOutcome {
    /// The target cell is a clue, or the session is already solved;
    /// nothing changed.
    Rejected,
    /// The digit was written.
    Placed {
        /// Whether the placement was counted as a mistake (instant mode
        /// only).
        mistake: bool,
        /// Cells of every house completed by this write, deduplicated.
        /// A transient signal for the caller to animate and discard.
        completed: PositionSet,
        /// Whether this write solved the puzzle.
        solved: bool,
    },
}

/// Outcome of [`Session::toggle_note`](crate::Session::toggle_note).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum NoteOutcome {
    /// The target cell is a clue, or the session is already solved.
    Rejected,
    /// The digit was added to the cell's notes.
    Added,
    /// The digit was removed from the cell's notes.
    Removed,
}

/// Outcome of [`Session::erase`](crate::Session::erase).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum EraseOutcome {
    /// The target cell is a clue, or the session is already solved.
    Rejected,
    /// A player-placed value (and its error flag) was cleared.
    ClearedValue,
    /// The cell had no value; its notes were cleared.
    ClearedNotes,
    /// The cell had neither a value nor notes.
    Nothing,
}

/// Outcome of [`Session::request_hint`](crate::Session::request_hint).
#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum HintOutcome {
    /// No hints remain, the cell already holds a value, or the session is
    /// already solved.
    Rejected,
    /// The solution digit was revealed at the requested cell.
    Revealed {
        /// The revealed digit.
        digit: Digit,
        /// Cells of every house completed by this write, deduplicated.
        completed: PositionSet,
        /// Whether this reveal solved the puzzle.
        solved: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_mode_display_parse_round_trip() {
        for mode in ErrorCheckMode::ALL {
            assert_eq!(mode.to_string().parse::<ErrorCheckMode>(), Ok(mode));
        }
        assert_eq!("INSTANT".parse::<ErrorCheckMode>(), Ok(ErrorCheckMode::Instant));
        assert!("sometimes".parse::<ErrorCheckMode>().is_err());
    }

    #[test]
    fn test_default_mode_is_manual() {
        assert_eq!(ErrorCheckMode::default(), ErrorCheckMode::Manual);
    }

    #[test]
    fn test_is_variant_helpers() {
        assert!(PlaceOutcome::Rejected.is_rejected());
        assert!(NoteOutcome::Added.is_added());
        assert!(EraseOutcome::Nothing.is_nothing());
        assert!(HintOutcome::Rejected.is_rejected());
    }
}
