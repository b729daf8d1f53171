//! Grid coordinates and straight-line displacement.

use core::fmt;

/// A zero-based (row, column) pair.
///
/// Coordinates carry no bounds of their own; whether one addresses a real
/// cell is decided by the grid it is used against. Values may go negative
/// while the placement scan walks off the edge of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: i32,
    pub col: i32,
}

impl Coordinate {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Same row, `n` columns to the left.
    pub const fn left(self, n: i32) -> Self {
        Self::new(self.row, self.col - n)
    }

    /// Same row, `n` columns to the right.
    pub const fn right(self, n: i32) -> Self {
        Self::new(self.row, self.col + n)
    }

    /// Same column, `n` rows up.
    pub const fn up(self, n: i32) -> Self {
        Self::new(self.row - n, self.col)
    }

    /// Same column, `n` rows down.
    pub const fn down(self, n: i32) -> Self {
        Self::new(self.row + n, self.col)
    }

    /// Distance between two points sharing a row or a column.
    ///
    /// Returns `None` when the points are not co-linear.
    pub fn straight_line_distance(a: Coordinate, b: Coordinate) -> Option<u32> {
        if a.row == b.row {
            Some(a.col.abs_diff(b.col))
        } else if a.col == b.col {
            Some(a.row.abs_diff(b.row))
        } else {
            None
        }
    }
}

impl From<(i32, i32)> for Coordinate {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
