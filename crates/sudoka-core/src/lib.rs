//! Core board model for sudoka.
//!
//! This crate provides the pure, stateless grid types that the solver,
//! generator, and game controller are built on:
//!
//! - [`Digit`]: type-safe representation of sudoku digits 1-9
//! - [`Position`]: board coordinates with row/column/box constant tables
//! - [`DigitSet`]: a 9-bit set of digits, used for candidates and notes
//! - [`Board`]: a 9×9 grid of `Option<Digit>` with placement-legality checks
//! - [`FixedMask`]: the immutable "given cell" mask of a puzzle
//!
//! All operations here are side-effect free: predicates take boards by
//! reference and return booleans or fresh values, and [`Board`] has plain
//! value semantics, so cloning never aliases the original.
//!
//! # Examples
//!
//! ```
//! use sudoka_core::{Board, Digit, Position};
//!
//! let mut board = Board::new();
//! let pos = Position::new(0, 0);
//! board.set(pos, Some(Digit::D5));
//!
//! // 5 is no longer a legal placement anywhere in row 0
//! assert!(!board.is_valid_placement(Position::new(8, 0), Digit::D5));
//! assert!(board.is_valid_placement(Position::new(8, 0), Digit::D4));
//! ```

pub mod board;
pub mod digit;
pub mod digit_set;
pub mod mask;
pub mod position;

pub use self::{
    board::{Board, ParseBoardError},
    digit::Digit,
    digit_set::DigitSet,
    mask::FixedMask,
    position::Position,
};
