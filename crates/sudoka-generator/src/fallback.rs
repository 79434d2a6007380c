//! Known-good puzzles used when generation fails.

use sudoka_core::{Board, Digit, Position};

use crate::difficulty::Difficulty;

/// Puzzle and solution rows, 0 marking an empty cell.
type Rows = [[u8; 9]; 9];

const EASY: (&Rows, &Rows) = (
    &[
        [5, 3, 0, 0, 7, 0, 0, 0, 0],
        [6, 0, 0, 1, 9, 5, 0, 0, 0],
        [0, 9, 8, 0, 0, 0, 0, 6, 0],
        [8, 0, 0, 0, 6, 0, 0, 0, 3],
        [4, 0, 0, 8, 0, 3, 0, 0, 1],
        [7, 0, 0, 0, 2, 0, 0, 0, 6],
        [0, 6, 0, 0, 0, 0, 2, 8, 0],
        [0, 0, 0, 4, 1, 9, 0, 0, 5],
        [0, 0, 0, 0, 8, 0, 0, 7, 9],
    ],
    &[
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9],
    ],
);

const MEDIUM: (&Rows, &Rows) = (
    &[
        [0, 0, 0, 2, 6, 0, 7, 0, 1],
        [6, 8, 0, 0, 7, 0, 0, 9, 0],
        [1, 9, 0, 0, 0, 4, 5, 0, 0],
        [8, 2, 0, 1, 0, 0, 0, 4, 0],
        [0, 0, 4, 6, 0, 2, 9, 0, 0],
        [0, 5, 0, 0, 0, 3, 0, 2, 8],
        [0, 0, 9, 3, 0, 0, 0, 7, 4],
        [0, 4, 0, 0, 5, 0, 0, 3, 6],
        [7, 0, 3, 0, 1, 8, 0, 0, 0],
    ],
    &[
        [4, 3, 5, 2, 6, 9, 7, 8, 1],
        [6, 8, 2, 5, 7, 1, 4, 9, 3],
        [1, 9, 7, 8, 3, 4, 5, 6, 2],
        [8, 2, 6, 1, 9, 5, 3, 4, 7],
        [3, 7, 4, 6, 8, 2, 9, 1, 5],
        [9, 5, 1, 7, 4, 3, 6, 2, 8],
        [5, 1, 9, 3, 2, 6, 8, 7, 4],
        [2, 4, 8, 9, 5, 7, 1, 3, 6],
        [7, 6, 3, 4, 1, 8, 2, 5, 9],
    ],
);

/// Returns a known puzzle/solution pair for the difficulty.
///
/// Only the easy and medium levels carry curated boards with a verified
/// unique solution; the harder levels reuse the medium pair rather than ship
/// an unverified board.
pub(crate) fn fallback(difficulty: Difficulty) -> (Board, Board) {
    let (puzzle, solution) = match difficulty {
        Difficulty::Easy => EASY,
        Difficulty::Medium | Difficulty::Hard | Difficulty::God => MEDIUM,
    };
    (board_from_rows(puzzle), board_from_rows(solution))
}

fn board_from_rows(rows: &Rows) -> Board {
    let mut board = Board::new();
    for pos in Position::ALL {
        let value = rows[usize::from(pos.y())][usize::from(pos.x())];
        board.set(pos, Digit::try_from_value(value));
    }
    board
}
