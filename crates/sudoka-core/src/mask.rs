//! The given-cell mask of a puzzle.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::{board::Board, position::Position};

/// Marks which cells of a puzzle are givens (pre-filled and immutable).
///
/// The mask is set once at puzzle creation and never mutated afterwards;
/// undo/redo and every other play-time operation leave it untouched.
///
/// # Examples
///
/// ```
/// use sudoka_core::{Board, FixedMask, Position};
///
/// let board: Board = format!("5{}", ".".repeat(80)).parse().unwrap();
/// let fixed = FixedMask::from_board(&board);
///
/// assert!(fixed[Position::new(0, 0)]);
/// assert!(!fixed[Position::new(1, 0)]);
/// assert_eq!(fixed.count(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FixedMask {
    cells: [[bool; 9]; 9],
}

impl FixedMask {
    /// Creates a mask with no fixed cells.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[false; 9]; 9],
        }
    }

    /// Derives the mask from a puzzle board: every filled cell is a given.
    #[must_use]
    pub fn from_board(board: &Board) -> Self {
        let mut mask = Self::new();
        for pos in Position::ALL {
            mask.cells[usize::from(pos.y())][usize::from(pos.x())] = board.get(pos).is_some();
        }
        mask
    }

    /// Returns whether the cell at `pos` is a given.
    #[must_use]
    pub fn is_fixed(&self, pos: Position) -> bool {
        self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }

    /// Returns the number of fixed cells.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&fixed| fixed).count()
    }
}

impl Index<Position> for FixedMask {
    type Output = bool;

    fn index(&self, pos: Position) -> &bool {
        &self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::digit::Digit;

    #[test]
    fn test_from_board_marks_filled_cells() {
        let mut board = Board::new();
        board.set(Position::new(3, 4), Some(Digit::D7));
        board.set(Position::new(8, 8), Some(Digit::D1));

        let mask = FixedMask::from_board(&board);
        assert!(mask[Position::new(3, 4)]);
        assert!(mask[Position::new(8, 8)]);
        assert!(!mask[Position::new(0, 0)]);
        assert_eq!(mask.count(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut board = Board::new();
        board.set(Position::new(2, 2), Some(Digit::D3));
        let mask = FixedMask::from_board(&board);

        let json = serde_json::to_string(&mask).unwrap();
        let back: FixedMask = serde_json::from_str(&json).unwrap();
        assert_eq!(mask, back);
    }
}
