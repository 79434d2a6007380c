//! Interactive game controller for sudoka.
//!
//! [`SudokuGame`] ties the other crates together into a playable session:
//! it generates puzzles, applies and validates player moves, keeps pencil
//! marks, maintains undo/redo history, tracks play time, and persists the
//! whole session after every committed change so it can be resumed later.
//!
//! Persistence goes through the [`Storage`] trait; [`FileStorage`] keeps a
//! JSON record in the user's data directory, and [`MemoryStorage`] backs
//! tests.
//!
//! # Examples
//!
//! ```
//! use sudoka_game::{GameConfig, MemoryStorage, SudokuGame};
//! use sudoka_generator::Difficulty;
//!
//! let mut game = SudokuGame::new(Box::new(MemoryStorage::new()));
//! game.new_game(GameConfig::new(Difficulty::Medium));
//!
//! // A hint is an explained, committed move, and like any move it can be
//! // undone.
//! if let Some(hint) = game.hint() {
//!     println!("{} at ({}, {}): {}", hint.digit, hint.pos.x(), hint.pos.y(), hint.reason);
//!     assert!(game.undo());
//! }
//! ```

pub mod config;
pub mod game;
pub mod notes;
pub mod snapshot;
pub mod storage;

pub use self::{
    config::{GameConfig, Player, Theme},
    game::SudokuGame,
    notes::NoteGrid,
    snapshot::Snapshot,
    storage::{FileStorage, MemoryStorage, SaveData, Storage, StorageError},
};
