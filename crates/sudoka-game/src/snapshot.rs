//! Undo/redo history entries.

use serde::{Deserialize, Serialize};
use sudoka_core::Board;

use crate::notes::NoteGrid;

/// One entry of the undo/redo history: the player-visible board and notes.
///
/// Givens, the solution, and the settings are not part of a snapshot since
/// none of them change during play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board contents at the time of the snapshot.
    pub board: Board,
    /// Pencil marks at the time of the snapshot.
    pub notes: NoteGrid,
}

impl Snapshot {
    /// Captures a snapshot of the given state.
    #[must_use]
    pub const fn new(board: Board, notes: NoteGrid) -> Self {
        Self { board, notes }
    }
}
