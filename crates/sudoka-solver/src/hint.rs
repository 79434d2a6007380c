//! Human-explainable single-step deductions.

use derive_more::Display;
use sudoka_core::{Board, Digit, DigitSet, Position};

/// Why a hinted placement is forced.
///
/// The display string is the explanation shown to the player.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum HintReason {
    /// The cell has exactly one candidate left.
    #[display("Single candidate")]
    NakedSingle,
    /// The digit fits nowhere else in the cell's row.
    #[display("Only place in row")]
    HiddenSingleRow,
    /// The digit fits nowhere else in the cell's column.
    #[display("Only place in column")]
    HiddenSingleColumn,
    /// The digit fits nowhere else in the cell's box.
    #[display("Only place in box")]
    HiddenSingleBox,
}

/// A single forced placement together with its justification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hint {
    /// The cell to fill.
    pub pos: Position,
    /// The digit that must go there.
    pub digit: Digit,
    /// Why the placement is forced.
    pub reason: HintReason,
}

/// Finds one logically forced placement, or `None` if neither a naked single
/// nor a hidden single exists.
///
/// Techniques are tried in order of how easy they are to explain: naked
/// singles first, then hidden singles in rows, columns, and boxes. Within a
/// technique, cells are scanned row-major, so the result is deterministic.
///
/// # Examples
///
/// ```
/// use sudoka_core::{Board, Digit, Position};
/// use sudoka_solver::{HintReason, logical_hint};
///
/// // Row 0 is filled except for its last cell.
/// let board: Board = format!("12345678{}", ".".repeat(73)).parse().unwrap();
/// let hint = logical_hint(&board).unwrap();
///
/// assert_eq!(hint.pos, Position::new(8, 0));
/// assert_eq!(hint.digit, Digit::D9);
/// assert_eq!(hint.reason, HintReason::NakedSingle);
/// ```
#[must_use]
pub fn logical_hint(board: &Board) -> Option<Hint> {
    naked_single(board).or_else(|| hidden_single(board))
}

fn naked_single(board: &Board) -> Option<Hint> {
    Position::ALL.into_iter().find_map(|pos| {
        let digit = board.candidates_at(pos).as_single()?;
        Some(Hint {
            pos,
            digit,
            reason: HintReason::NakedSingle,
        })
    })
}

fn hidden_single(board: &Board) -> Option<Hint> {
    let scopes = [
        (&Position::ROWS, HintReason::HiddenSingleRow),
        (&Position::COLUMNS, HintReason::HiddenSingleColumn),
        (&Position::BOXES, HintReason::HiddenSingleBox),
    ];
    scopes.into_iter().find_map(|(houses, reason)| {
        houses
            .iter()
            .find_map(|house| hidden_single_in(board, house, reason))
    })
}

/// Looks for a digit that is a candidate of exactly one cell in the house.
fn hidden_single_in(board: &Board, house: &[Position; 9], reason: HintReason) -> Option<Hint> {
    let mut seen = DigitSet::EMPTY;
    let mut seen_twice = DigitSet::EMPTY;
    for &pos in house {
        let candidates = board.candidates_at(pos);
        seen_twice = seen_twice | (seen & candidates);
        seen = seen | candidates;
    }

    let digit = seen.difference(seen_twice).iter().next()?;
    let pos = house
        .iter()
        .copied()
        .find(|&pos| board.candidates_at(pos).contains(digit))?;
    Some(Hint { pos, digit, reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(cells: &str) -> Board {
        cells.parse().unwrap()
    }

    #[test]
    fn test_no_hint_on_empty_board() {
        assert_eq!(logical_hint(&Board::new()), None);
    }

    #[test]
    fn test_no_hint_on_solved_board() {
        let solved = board(
            "\
            534678912\
            672195348\
            198342567\
            859761423\
            426853791\
            713924856\
            961537284\
            287419635\
            345286179",
        );
        assert_eq!(logical_hint(&solved), None);
    }

    #[test]
    fn test_naked_single() {
        // A solved grid with one cell cleared: that cell has exactly one
        // candidate.
        let mut solved = board(
            "\
            534678912\
            672195348\
            198342567\
            859761423\
            426853791\
            713924856\
            961537284\
            287419635\
            345286179",
        );
        let pos = Position::new(4, 4);
        solved.set(pos, None);

        let hint = logical_hint(&solved).unwrap();
        assert_eq!(hint.pos, pos);
        assert_eq!(hint.digit, Digit::D5);
        assert_eq!(hint.reason, HintReason::NakedSingle);
    }

    #[test]
    fn test_naked_single_beats_hidden_single() {
        // Row 0 lacking only one digit is both a naked single and a hidden
        // single in the row; the naked-single explanation wins.
        let hint = logical_hint(&board(&format!("12345678{}", ".".repeat(73)))).unwrap();
        assert_eq!(hint.pos, Position::new(8, 0));
        assert_eq!(hint.digit, Digit::D9);
        assert_eq!(hint.reason, HintReason::NakedSingle);
    }

    #[test]
    fn test_hidden_single_in_row() {
        // The 5s below block every column of row 0 except column 3, while
        // each empty cell keeps several candidates, so no naked single
        // exists.
        let puzzle = board(
            "\
            .........\
            ..5......\
            ........5\
            5........\
            ....5....\
            ......5..\
            .5.......\
            .....5...\
            .......5.",
        );

        let hint = logical_hint(&puzzle).unwrap();
        assert_eq!(hint.pos, Position::new(3, 0));
        assert_eq!(hint.digit, Digit::D5);
        assert_eq!(hint.reason, HintReason::HiddenSingleRow);
    }

    #[test]
    fn test_hidden_single_in_column() {
        // Column 0 accepts a 5 only at (0, 3). Row 3 is not decided the same
        // way because (3, 3) also accepts a 5, and the filled cells at
        // (0, 0), (0, 4), and (0, 5) keep the column blocked without pinning
        // any single row.
        let puzzle = board(
            "\
            1........\
            ......5..\
            .5.......\
            .........\
            2........\
            3.......5\
            ....5....\
            .......5.\
            ..5......",
        );

        let hint = logical_hint(&puzzle).unwrap();
        assert_eq!(hint.pos, Position::new(0, 3));
        assert_eq!(hint.digit, Digit::D5);
        assert_eq!(hint.reason, HintReason::HiddenSingleColumn);
    }

    #[test]
    fn test_hidden_single_in_box() {
        // Within the top-left box only (1, 1) accepts a 5: the givens fill
        // most of the box and the 5 at (2, 4) blocks column 2. Row 1 and
        // column 1 both keep other cells that accept a 5, so neither scope
        // claims the deduction first.
        let puzzle = board(
            "\
            123......\
            8........\
            46.......\
            .........\
            ..5......\
            .........\
            .........\
            .........\
            .........",
        );

        let hint = logical_hint(&puzzle).unwrap();
        assert_eq!(hint.pos, Position::new(1, 1));
        assert_eq!(hint.digit, Digit::D5);
        assert_eq!(hint.reason, HintReason::HiddenSingleBox);
    }

    #[test]
    fn test_reason_display_strings() {
        assert_eq!(HintReason::NakedSingle.to_string(), "Single candidate");
        assert_eq!(HintReason::HiddenSingleRow.to_string(), "Only place in row");
        assert_eq!(
            HintReason::HiddenSingleColumn.to_string(),
            "Only place in column"
        );
        assert_eq!(HintReason::HiddenSingleBox.to_string(), "Only place in box");
    }

    #[test]
    fn test_hints_follow_the_unique_solution() {
        let puzzle = board(
            "\
            53..7....\
            6..195...\
            .98....6.\
            8...6...3\
            4..8.3..1\
            7...2...6\
            .6....28.\
            ...419..5\
            ....8..79",
        );
        let solution = crate::solve(&puzzle).unwrap();

        // Apply hints until the technique set runs dry; on a uniquely
        // solvable puzzle every hinted digit must agree with the solution.
        let mut work = puzzle;
        let mut progressed = 0;
        while let Some(hint) = logical_hint(&work) {
            assert!(work.get(hint.pos).is_none());
            assert_eq!(Some(hint.digit), solution.get(hint.pos));
            work.set(hint.pos, Some(hint.digit));
            progressed += 1;
        }
        assert!(progressed > 0);
    }
}
