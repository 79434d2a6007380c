//! Player pencil marks.

use std::ops::Index;

use serde::{Deserialize, Serialize};
use sudoka_core::{Digit, DigitSet, Position};

/// A per-cell grid of pencil marks.
///
/// Notes are purely player-facing bookkeeping: nothing validates them
/// against the board, though the game controller can prune them
/// automatically when a digit is placed nearby.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NoteGrid {
    cells: [[DigitSet; 9]; 9],
}

impl NoteGrid {
    /// Creates a grid with no notes.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[DigitSet::EMPTY; 9]; 9],
        }
    }

    /// Returns the notes at a cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> DigitSet {
        self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }

    /// Toggles a note at a cell, returning whether the note is present
    /// afterwards.
    pub fn toggle(&mut self, pos: Position, digit: Digit) -> bool {
        let cell = &mut self.cells[usize::from(pos.y())][usize::from(pos.x())];
        if cell.contains(digit) {
            cell.remove(digit);
            false
        } else {
            cell.insert(digit);
            true
        }
    }

    /// Removes `digit` from the notes of every peer of `pos`. The notes of
    /// `pos` itself are left alone.
    pub fn remove_from_peers(&mut self, pos: Position, digit: Digit) {
        for peer in pos.peers() {
            self.cells[usize::from(peer.y())][usize::from(peer.x())].remove(digit);
        }
    }
}

impl Index<Position> for NoteGrid {
    type Output = DigitSet;

    fn index(&self, pos: Position) -> &DigitSet {
        &self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut notes = NoteGrid::new();
        let pos = Position::new(4, 4);

        assert!(notes.toggle(pos, Digit::D3));
        assert!(notes[pos].contains(Digit::D3));
        assert!(!notes.toggle(pos, Digit::D3));
        assert!(notes[pos].is_empty());
    }

    #[test]
    fn test_remove_from_peers_spares_the_cell_itself() {
        let mut notes = NoteGrid::new();
        let pos = Position::new(4, 4);

        notes.toggle(pos, Digit::D5);
        for peer in pos.peers() {
            notes.toggle(peer, Digit::D5);
        }
        notes.remove_from_peers(pos, Digit::D5);

        assert!(notes[pos].contains(Digit::D5));
        for peer in pos.peers() {
            assert!(notes[peer].is_empty());
        }
    }

    #[test]
    fn test_remove_from_peers_keeps_unrelated_cells() {
        let mut notes = NoteGrid::new();
        let far = Position::new(8, 8);
        notes.toggle(far, Digit::D5);

        notes.remove_from_peers(Position::new(0, 0), Digit::D5);
        assert!(notes[far].contains(Digit::D5));
    }
}
