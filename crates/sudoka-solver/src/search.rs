//! Backtracking search.

use sudoka_core::{Board, DigitSet, Position};

/// Picks the empty cell with the fewest candidates, row-major order breaking
/// ties. Returns `None` when the board is full. The returned set may be empty,
/// which means the current assignment is a dead end.
fn most_constrained_cell(board: &Board) -> Option<(Position, DigitSet)> {
    let mut best: Option<(Position, DigitSet)> = None;
    for pos in Position::ALL {
        if board.get(pos).is_some() {
            continue;
        }
        let candidates = board.candidates_at(pos);
        match candidates.len() {
            // A dead end or a forced cell, either way the search need not
            // look further.
            0 | 1 => return Some((pos, candidates)),
            len => {
                if best.is_none_or(|(_, b)| len < b.len()) {
                    best = Some((pos, candidates));
                }
            }
        }
    }
    best
}

/// Solves the board, returning a completed copy or `None` if no legal
/// completion exists. The input is not modified.
///
/// When the puzzle has several solutions this returns the one found first by
/// the deterministic search order; use [`count_solutions`] to detect that
/// case.
///
/// Filled cells are taken as-is, so a board whose givens already conflict
/// with each other should be validated before calling this.
#[must_use]
pub fn solve(board: &Board) -> Option<Board> {
    let mut work = *board;
    solve_rec(&mut work).then_some(work)
}

fn solve_rec(board: &mut Board) -> bool {
    let Some((pos, candidates)) = most_constrained_cell(board) else {
        return true;
    };
    for digit in candidates {
        board.set(pos, Some(digit));
        if solve_rec(board) {
            return true;
        }
    }
    board.set(pos, None);
    false
}

/// Counts the legal completions of the board, stopping as soon as `limit` is
/// reached.
///
/// `count_solutions(&puzzle, 2) == 1` is the uniqueness test the generator
/// relies on; the cap makes it cheap even for wide-open boards with
/// astronomically many completions.
#[must_use]
pub fn count_solutions(board: &Board, limit: usize) -> usize {
    let mut work = *board;
    let mut count = 0;
    count_rec(&mut work, limit, &mut count);
    count
}

fn count_rec(board: &mut Board, limit: usize, count: &mut usize) {
    if *count >= limit {
        return;
    }
    let Some((pos, candidates)) = most_constrained_cell(board) else {
        *count += 1;
        return;
    };
    for digit in candidates {
        board.set(pos, Some(digit));
        count_rec(board, limit, count);
        if *count >= limit {
            return;
        }
    }
    board.set(pos, None);
}
