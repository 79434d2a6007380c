//! The 9×9 digit grid and its placement rules.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    str::FromStr,
};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A 9×9 sudoku grid where each cell holds an optional digit.
///
/// The board is a plain value: cloning produces an independent copy, and no
/// operation mutates a board behind the caller's back. Rule checks
/// ([`is_valid_placement`], [`conflicts`], [`is_solved`]) validate the
/// row/column/box uniqueness constraint rather than assuming it, so a board
/// filled through unchecked writes can still be interrogated safely.
///
/// [`is_valid_placement`]: Board::is_valid_placement
/// [`conflicts`]: Board::conflicts
/// [`is_solved`]: Board::is_solved
///
/// # Examples
///
/// ```
/// use sudoka_core::{Board, Digit, Position};
///
/// let board: Board = "\
/// 53..7....\
/// 6..195...\
/// .98....6.\
/// 8...6...3\
/// 4..8.3..1\
/// 7...2...6\
/// .6....28.\
/// ...419..5\
/// ....8..79\
/// "
/// .parse()
/// .unwrap();
///
/// assert_eq!(board[Position::new(0, 0)], Some(Digit::D5));
/// assert!(board.is_valid_placement(Position::new(2, 0), Digit::D4));
/// assert!(!board.is_valid_placement(Position::new(2, 0), Digit::D5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Option<Digit>; 9]; 9],
}

impl Board {
    /// Creates an empty board.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cells: [[None; 9]; 9],
        }
    }

    /// Returns the digit at a position, or `None` for an empty cell.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }

    /// Writes a digit (or clears the cell with `None`).
    ///
    /// This performs no rule checking; callers that need legality gating go
    /// through [`Board::is_valid_placement`] first.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.y() as usize][pos.x() as usize] = digit;
    }

    /// Returns whether placing `digit` at `pos` keeps the board legal.
    ///
    /// Scans the position's 20 peers (row, column, and box, excluding the
    /// cell itself) for an equal digit. The cell's own current content is
    /// irrelevant, so this also answers "may I overwrite this cell?".
    /// Clearing a cell needs no check; `set(pos, None)` is always legal.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Position, digit: Digit) -> bool {
        pos.peers()
            .into_iter()
            .all(|peer| self.get(peer) != Some(digit))
    }

    /// Returns every peer position holding the same digit as `pos`.
    ///
    /// An empty cell has no conflicts. Intended for UI error highlighting,
    /// not legality gating, so all offenders are collected instead of
    /// stopping at the first.
    #[must_use]
    pub fn conflicts(&self, pos: Position) -> Vec<Position> {
        let Some(digit) = self.get(pos) else {
            return Vec::new();
        };
        pos.peers()
            .into_iter()
            .filter(|&peer| self.get(peer) == Some(digit))
            .collect()
    }

    /// Returns the digits legally placeable at `pos`.
    ///
    /// A filled cell has no candidates.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        if self.get(pos).is_some() {
            return DigitSet::EMPTY;
        }
        let mut candidates = DigitSet::FULL;
        for peer in pos.peers() {
            if let Some(digit) = self.get(peer) {
                candidates.remove(digit);
            }
        }
        candidates
    }

    /// Computes the candidate set of every cell.
    ///
    /// Recomputed from scratch on demand; with at most 81 cells there is no
    /// need for incremental maintenance.
    #[must_use]
    pub fn candidates(&self) -> [[DigitSet; 9]; 9] {
        let mut all = [[DigitSet::EMPTY; 9]; 9];
        for pos in Position::ALL {
            all[usize::from(pos.y())][usize::from(pos.x())] = self.candidates_at(pos);
        }
        all
    }

    /// Returns the first empty cell in row-major order, if any.
    #[must_use]
    pub fn first_empty(&self) -> Option<Position> {
        Position::ALL.into_iter().find(|&pos| self.get(pos).is_none())
    }

    /// Returns the number of filled cells.
    #[must_use]
    pub fn filled_count(&self) -> usize {
        Position::ALL
            .into_iter()
            .filter(|&pos| self.get(pos).is_some())
            .count()
    }

    /// Returns whether the board is a complete, conflict-free solution.
    ///
    /// Both conditions are checked: no empty cells remain, and every filled
    /// cell is independently a valid placement. A board can be full yet
    /// invalid when filled through an unchecked path, so fullness alone is
    /// not trusted.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        Position::ALL.into_iter().all(|pos| match self.get(pos) {
            Some(digit) => self.is_valid_placement(pos, digit),
            None => false,
        })
    }
}

impl Index<Position> for Board {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Option<Digit> {
        &self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }
}

impl IndexMut<Position> for Board {
    fn index_mut(&mut self, pos: Position) -> &mut Option<Digit> {
        &mut self.cells[usize::from(pos.y())][usize::from(pos.x())]
    }
}

/// Error parsing a board from its 81-character string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseBoardError {
    /// The input was not exactly 81 characters.
    #[display("expected 81 cells, got {len}")]
    InvalidLength {
        /// Number of characters found.
        len: usize,
    },
    /// A character was neither a digit nor an empty-cell marker.
    #[display("invalid cell character {ch:?} at index {index}")]
    InvalidCharacter {
        /// The offending character.
        ch: char,
        /// Its index in the input.
        index: usize,
    },
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Parses 81 characters in row-major order: `1`-`9` for digits, `.` or
    /// `0` for empty cells.
    fn from_str(s: &str) -> Result<Self, ParseBoardError> {
        let len = s.chars().count();
        if len != 81 {
            return Err(ParseBoardError::InvalidLength { len });
        }
        let mut board = Self::new();
        for (index, (pos, ch)) in Position::ALL.into_iter().zip(s.chars()).enumerate() {
            let digit = match ch {
                '.' | '0' => None,
                '1'..='9' => Digit::try_from_value(ch as u8 - b'0'),
                _ => return Err(ParseBoardError::InvalidCharacter { ch, index }),
            };
            board.set(pos, digit);
        }
        Ok(board)
    }
}

impl Display for Board {
    /// Formats the board as 81 characters with `.` for empty cells, the
    /// inverse of the [`FromStr`] form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for pos in Position::ALL {
            match self.get(pos) {
                Some(digit) => write!(f, "{digit}")?,
                None => write!(f, ".")?,
            }
        }
        Ok(())
    }
}

impl Serialize for Board {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Board {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
