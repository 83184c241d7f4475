//! Board square representation.

use std::fmt;

/// Number of squares along each side of the board.
pub const WIDTH: u8 = 8;

/// A square on the board, indexed 0-63.
///
/// Squares are indexed row-major:
/// - row 0 holds squares 0..=7 (Black's back row)
/// - row 7 holds squares 56..=63 (White's back row)
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(pub(crate) u8);

/// The paint color of a square, as a checkerboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shade {
    Light,
    Dark,
}

impl Square {
    /// Creates a square from row and column (each 0-7).
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < WIDTH && col < WIDTH {
            Some(Square(row * WIDTH + col))
        } else {
            None
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < WIDTH * WIDTH {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Iterates over all 64 squares in index order.
    pub fn all() -> impl DoubleEndedIterator<Item = Square> + ExactSizeIterator {
        (0..WIDTH * WIDTH).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / WIDTH
    }

    /// Returns the column (0-7).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % WIDTH
    }

    /// Returns the square `rows` rows and `cols` columns away, if it is on
    /// the board. Never wraps around an edge.
    #[inline]
    pub const fn offset(self, rows: i8, cols: i8) -> Option<Self> {
        let row = self.row() as i8 + rows;
        let col = self.col() as i8 + cols;
        if row < 0 || col < 0 {
            return None;
        }
        Square::new(row as u8, col as u8)
    }

    /// Returns the checkerboard shade. Square 0 is light.
    #[inline]
    pub const fn shade(self) -> Shade {
        if (self.row() + self.col()) % 2 == 0 {
            Shade::Light
        } else {
            Shade::Dark
        }
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.0)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for Square {
    type Error = u8;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::from_index(index).ok_or(index)
    }
}
