//! Game setup options.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use sudoka_generator::Difficulty;

/// Options for starting a new game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameConfig {
    /// Puzzle difficulty.
    pub difficulty: Difficulty,
    /// Player identity shown in the UI.
    pub player: Player,
    /// Color theme.
    pub theme: Theme,
}

impl GameConfig {
    /// Creates a configuration for `difficulty` with default player and
    /// theme.
    #[must_use]
    pub fn new(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            ..Self::default()
        }
    }
}

/// Player name and avatar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, possibly empty.
    pub name: String,
    /// Avatar emoji.
    pub avatar: String,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            name: String::new(),
            avatar: "🧑".to_owned(),
        }
    }
}

/// UI color theme.
#[derive(
    Debug, Display, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    #[default]
    #[display("light")]
    Light,
    /// Dark background.
    #[display("dark")]
    Dark,
}
