//! Board coordinates.

use serde::{Deserialize, Serialize};

/// A cell position on the 9×9 board.
///
/// `x` is the column (0-8, left to right) and `y` is the row (0-8, top to
/// bottom). Both components are validated at construction time.
///
/// # Examples
///
/// ```
/// use sudoka_core::Position;
///
/// let pos = Position::new(4, 2);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 2);
/// assert_eq!(pos.box_index(), 1); // top-middle box
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    x: u8,
    y: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// `ROWS[y]` contains the positions of row `y`, left to right.
    pub const ROWS: [[Self; 9]; 9] = {
        let mut rows = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut y = 0;
        while y < 9 {
            let mut x = 0;
            while x < 9 {
                rows[y as usize][x as usize] = Self { x, y };
                x += 1;
            }
            y += 1;
        }
        rows
    };

    /// `COLUMNS[x]` contains the positions of column `x`, top to bottom.
    pub const COLUMNS: [[Self; 9]; 9] = {
        let mut columns = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut x = 0;
        while x < 9 {
            let mut y = 0;
            while y < 9 {
                columns[x as usize][y as usize] = Self { x, y };
                y += 1;
            }
            x += 1;
        }
        columns
    };

    /// `BOXES[i]` contains the positions of the 3×3 box `i` (0-8, left to
    /// right, top to bottom), in row-major order within the box.
    pub const BOXES: [[Self; 9]; 9] = {
        let mut boxes = [[Self { x: 0, y: 0 }; 9]; 9];
        let mut index = 0;
        while index < 9 {
            let mut cell = 0;
            while cell < 9 {
                boxes[index as usize][cell as usize] = Self::from_box(index, cell);
                cell += 1;
            }
            index += 1;
        }
        boxes
    };

    /// Creates a new position.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is 9 or greater.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9, "position out of range");
        Self { x, y }
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3×3 box containing this position (0-8).
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Converts a box index and a cell index within that box (both 0-8) into
    /// an absolute position.
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `cell` is 9 or greater.
    #[must_use]
    pub const fn from_box(box_index: u8, cell: u8) -> Self {
        assert!(box_index < 9 && cell < 9, "box coordinates out of range");
        Self {
            x: (box_index % 3) * 3 + cell % 3,
            y: (box_index / 3) * 3 + cell / 3,
        }
    }

    /// Returns the 20 peers of this position: the other cells of its row,
    /// column, and box, without duplicates and excluding the position itself.
    #[must_use]
    pub fn peers(self) -> [Self; 20] {
        let mut peers = [Self { x: 0, y: 0 }; 20];
        let mut n = 0;
        for x in 0..9 {
            if x != self.x {
                peers[n] = Self { x, y: self.y };
                n += 1;
            }
        }
        for y in 0..9 {
            if y != self.y {
                peers[n] = Self { x: self.x, y };
                n += 1;
            }
        }
        for pos in Self::BOXES[usize::from(self.box_index())] {
            if pos.x != self.x && pos.y != self.y {
                peers[n] = pos;
                n += 1;
            }
        }
        debug_assert_eq!(n, 20);
        peers
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_all_covers_board_row_major() {
        assert_eq!(Position::ALL.len(), 81);
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[1], Position::new(1, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));

        let unique: HashSet<_> = Position::ALL.into_iter().collect();
        assert_eq!(unique.len(), 81);
    }

    #[test]
    fn test_box_index() {
        assert_eq!(Position::new(0, 0).box_index(), 0);
        assert_eq!(Position::new(4, 1).box_index(), 1);
        assert_eq!(Position::new(8, 2).box_index(), 2);
        assert_eq!(Position::new(2, 4).box_index(), 3);
        assert_eq!(Position::new(8, 8).box_index(), 8);
    }

    #[test]
    fn test_from_box_round_trip() {
        for index in 0..9 {
            for cell in 0..9 {
                let pos = Position::from_box(index, cell);
                assert_eq!(pos.box_index(), index);
            }
        }
    }

    #[test]
    fn test_house_tables_are_consistent() {
        for y in 0..9u8 {
            for pos in Position::ROWS[usize::from(y)] {
                assert_eq!(pos.y(), y);
            }
        }
        for x in 0..9u8 {
            for pos in Position::COLUMNS[usize::from(x)] {
                assert_eq!(pos.x(), x);
            }
        }
        for index in 0..9u8 {
            for pos in Position::BOXES[usize::from(index)] {
                assert_eq!(pos.box_index(), index);
            }
        }
    }

    #[test]
    fn test_peers() {
        let pos = Position::new(4, 4);
        let peers = pos.peers();
        assert_eq!(peers.len(), 20);

        let unique: HashSet<_> = peers.into_iter().collect();
        assert_eq!(unique.len(), 20);
        assert!(!unique.contains(&pos));

        // Every peer shares a row, column, or box
        for peer in peers {
            assert!(
                peer.x() == pos.x() || peer.y() == pos.y() || peer.box_index() == pos.box_index()
            );
        }
    }

    #[test]
    #[should_panic(expected = "position out of range")]
    fn test_new_rejects_out_of_range() {
        let _ = Position::new(9, 0);
    }
}
