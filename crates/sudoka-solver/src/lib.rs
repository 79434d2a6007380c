//! Solving engine for sudoka.
//!
//! Two complementary facilities live here:
//!
//! - [`solve`] and [`count_solutions`]: exhaustive backtracking search over a
//!   board, used to complete puzzles and to verify solution uniqueness.
//! - [`logical_hint`]: a single human-explainable deduction (naked single or
//!   hidden single), used by the game controller's hint feature.
//!
//! The search always picks the empty cell with the fewest candidates, which
//! keeps typical puzzles well under a millisecond to solve.
//!
//! # Examples
//!
//! ```
//! use sudoka_core::Board;
//! use sudoka_solver::{count_solutions, solve};
//!
//! let puzzle: Board = "\
//! 53..7....\
//! 6..195...\
//! .98....6.\
//! 8...6...3\
//! 4..8.3..1\
//! 7...2...6\
//! .6....28.\
//! ...419..5\
//! ....8..79\
//! "
//! .parse()
//! .unwrap();
//!
//! let solution = solve(&puzzle).unwrap();
//! assert!(solution.is_solved());
//! assert_eq!(count_solutions(&puzzle, 2), 1);
//! ```

pub mod hint;
pub mod search;

pub use self::{
    hint::{Hint, HintReason, logical_hint},
    search::{count_solutions, solve},
};
