//! Player color representation.

/// Represents the two players.
///
/// Black sets up on rows 0 and 1 and moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    White = 1,
}

impl Color {
    /// Both colors, in turn order.
    pub const ALL: [Color; 2] = [Color::Black, Color::White];

    /// Returns the opposite color.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Returns the index (0 for Black, 1 for White).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the row step a pawn of this color takes when moving forward
    /// (+1 for Black, -1 for White).
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Black => 1,
            Color::White => -1,
        }
    }

    /// Returns the back row for this color (0 for Black, 7 for White).
    #[inline]
    pub const fn back_row(self) -> u8 {
        match self {
            Color::Black => 0,
            Color::White => 7,
        }
    }

    /// Returns the row this color's pawns start on (1 for Black, 6 for White).
    #[inline]
    pub const fn pawn_row(self) -> u8 {
        match self {
            Color::Black => 1,
            Color::White => 6,
        }
    }

    /// Parses a color name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<Self> {
        if name.eq_ignore_ascii_case("black") {
            Some(Color::Black)
        } else if name.eq_ignore_ascii_case("white") {
            Some(Color::White)
        } else {
            None
        }
    }

    /// Returns the lowercase name of this color.
    pub const fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::White => "white",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}
