//! Difficulty tiers and their clue-removal counts.

use std::str::FromStr;

use derive_more::{Display, Error};

/// Difficulty of a generated puzzle.
///
/// Each tier maps to a fixed number of cells removed from the 81-cell
/// solution. Harder tiers remove more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Difficulty {
    /// 35 cells removed (46 clues).
    #[display("easy")]
    Easy,
    /// 45 cells removed (36 clues).
    #[display("medium")]
    Medium,
    /// 52 cells removed (29 clues).
    #[display("hard")]
    Hard,
    /// 58 cells removed (23 clues).
    #[display("expert")]
    Expert,
}

impl Difficulty {
    /// All tiers, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::Expert];

    /// Returns the number of cells the carver removes for this tier.
    ///
    /// Always well under 81, so carving can never exhaust the board.
    #[must_use]
    pub const fn cells_to_remove(self) -> usize {
        match self {
            Self::Easy => 35,
            Self::Medium => 45,
            Self::Hard => 52,
            Self::Expert => 58,
        }
    }
}

/// Error returned when parsing a [`Difficulty`] from text fails.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("unknown difficulty: {name:?}")]
pub struct ParseDifficultyError {
    /// The rejected input.
    #[error(not(source))]
    pub name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    /// Parses a tier name, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tier| tier.to_string().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseDifficultyError {
                name: s.to_owned(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removal_counts() {
        assert_eq!(Difficulty::Easy.cells_to_remove(), 35);
        assert_eq!(Difficulty::Medium.cells_to_remove(), 45);
        assert_eq!(Difficulty::Hard.cells_to_remove(), 52);
        assert_eq!(Difficulty::Expert.cells_to_remove(), 58);
        for tier in Difficulty::ALL {
            assert!(tier.cells_to_remove() < 81);
        }
    }

    #[test]
    fn test_display_parse_round_trip() {
        for tier in Difficulty::ALL {
            assert_eq!(tier.to_string().parse::<Difficulty>(), Ok(tier));
        }
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert!("impossible".parse::<Difficulty>().is_err());
    }
}
