//! Difficulty levels and their given-count thresholds.

use std::str::FromStr;

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Puzzle difficulty, expressed as how many givens the generator aims to
/// leave on the board.
///
/// Fewer givens means more deduction work for the player. The generator
/// treats [`target_givens`] as a goal and [`min_givens`] as a hard floor; a
/// generated puzzle always keeps at least the floor.
///
/// [`target_givens`]: Difficulty::target_givens
/// [`min_givens`]: Difficulty::min_givens
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Around 36 givens.
    #[default]
    #[display("easy")]
    Easy,
    /// Around 30 givens.
    #[display("medium")]
    Medium,
    /// Around 26 givens.
    #[display("hard")]
    Hard,
    /// Around 22 givens.
    #[display("god")]
    God,
}

impl Difficulty {
    /// All difficulty levels, easiest first.
    pub const ALL: [Self; 4] = [Self::Easy, Self::Medium, Self::Hard, Self::God];

    /// The number of givens the generator tries to reduce the puzzle to.
    #[must_use]
    pub const fn target_givens(self) -> usize {
        match self {
            Self::Easy => 36,
            Self::Medium => 30,
            Self::Hard => 26,
            Self::God => 22,
        }
    }

    /// The minimum number of givens an accepted puzzle may have.
    #[must_use]
    pub const fn min_givens(self) -> usize {
        match self {
            Self::Easy => 26,
            Self::Medium => 24,
            Self::Hard => 22,
            Self::God => 20,
        }
    }
}

/// Error returned when parsing an unknown difficulty name.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
#[display("unknown difficulty: {name}")]
pub struct ParseDifficultyError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = ParseDifficultyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            "god" => Ok(Self::God),
            _ => Err(ParseDifficultyError { name: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_thresholds_are_ordered() {
        for difficulty in Difficulty::ALL {
            assert!(difficulty.min_givens() <= difficulty.target_givens());
        }
        for pair in Difficulty::ALL.windows(2) {
            assert!(pair[0].target_givens() > pair[1].target_givens());
        }
    }

    #[test]
    fn test_display_from_str_round_trip() {
        for difficulty in Difficulty::ALL {
            let name = difficulty.to_string();
            assert_eq!(name.parse::<Difficulty>().unwrap(), difficulty);
        }
        assert!("expert".parse::<Difficulty>().is_err());
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Difficulty::God).unwrap();
        assert_eq!(json, "\"god\"");
        let back: Difficulty = serde_json::from_str("\"medium\"").unwrap();
        assert_eq!(back, Difficulty::Medium);
    }
}
