//! Board state: which piece stands on which square.

use std::fmt;

use crate::{Color, Piece, PieceKind, Square, WIDTH};

/// Back row order, from column 0 to column 7.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8x8 board of optional occupants.
///
/// Holds at most one piece per square. All mutation goes through
/// [`place`](Board::place), [`remove`](Board::remove) and
/// [`move_piece`](Board::move_piece).
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [None; 64],
        }
    }

    /// Creates the starting layout: Black on rows 0-1, White on rows 6-7.
    pub fn starting() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in BACK_ROW.into_iter().enumerate() {
                let back = color.back_row() * WIDTH + col as u8;
                let pawn = color.pawn_row() * WIDTH + col as u8;
                board.squares[back as usize] = Some(Piece::new(kind, color));
                board.squares[pawn as usize] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Returns the piece on a square, if any.
    #[inline]
    pub fn occupant_at(&self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize]
    }

    /// Returns true if any piece stands on the square.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.occupant_at(sq).is_some()
    }

    /// Puts a piece on a square, returning whatever stood there before.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.squares[sq.index() as usize].replace(piece)
    }

    /// Clears a square, returning the piece that stood there.
    pub fn remove(&mut self, sq: Square) -> Option<Piece> {
        self.squares[sq.index() as usize].take()
    }

    /// Moves the piece on `from` to `to`, returning the piece it overwrote.
    ///
    /// The caller records any overwritten occupant before calling this.
    /// Does nothing when `from` is empty.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        match self.remove(from) {
            Some(piece) => self.place(to, piece),
            None => None,
        }
    }

    /// Counts the kings of one color.
    pub fn king_count(&self, color: Color) -> usize {
        self.pieces()
            .filter(|(_, p)| p.kind == PieceKind::King && p.color == color)
            .count()
    }

    /// Counts the kings of both colors together.
    pub fn king_total(&self) -> usize {
        self.pieces()
            .filter(|(_, p)| p.kind == PieceKind::King)
            .count()
    }

    /// Iterates over occupied squares in index order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| self.occupant_at(sq).map(|p| (sq, p)))
    }

    /// Counts all pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.squares.iter().flatten().count()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.to_layout())
    }
}

/// Renders one row per line, row 0 first, `.` for empty squares.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..WIDTH {
            for col in 0..WIDTH {
                if col > 0 {
                    write!(f, " ")?;
                }
                let sq = Square(row * WIDTH + col);
                match self.occupant_at(sq) {
                    Some(piece) => write!(f, "{}", piece.to_char())?,
                    None => write!(f, ".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(index: u8) -> Square {
        Square::from_index(index).unwrap()
    }

    #[test]
    fn starting_layout() {
        let board = Board::starting();
        assert_eq!(board.piece_count(), 32);
        assert_eq!(
            board.occupant_at(sq(4)),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            board.occupant_at(sq(60)),
            Some(Piece::new(PieceKind::King, Color::White))
        );
        assert_eq!(
            board.occupant_at(sq(1)),
            Some(Piece::new(PieceKind::Knight, Color::Black))
        );
        assert_eq!(
            board.occupant_at(sq(56)),
            Some(Piece::new(PieceKind::Rook, Color::White))
        );
        assert_eq!(
            board.occupant_at(sq(12)),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(
            board.occupant_at(sq(52)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        for index in 16..48 {
            assert!(!board.is_occupied(sq(index)));
        }
    }

    #[test]
    fn move_piece_overwrites_destination() {
        let mut board = Board::starting();
        let captured = board.move_piece(sq(0), sq(48));
        assert_eq!(captured, Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert_eq!(board.occupant_at(sq(0)), None);
        assert_eq!(
            board.occupant_at(sq(48)),
            Some(Piece::new(PieceKind::Rook, Color::Black))
        );
        assert_eq!(board.piece_count(), 31);
    }

    #[test]
    fn move_from_empty_square_is_noop() {
        let mut board = Board::starting();
        assert_eq!(board.move_piece(sq(30), sq(4)), None);
        assert_eq!(board, Board::starting());
    }

    #[test]
    fn place_and_remove() {
        let mut board = Board::empty();
        let queen = Piece::new(PieceKind::Queen, Color::White);
        assert_eq!(board.place(sq(27), queen), None);
        assert!(board.is_occupied(sq(27)));
        assert_eq!(board.remove(sq(27)), Some(queen));
        assert_eq!(board.remove(sq(27)), None);
    }

    #[test]
    fn king_counts() {
        let mut board = Board::starting();
        assert_eq!(board.king_count(Color::Black), 1);
        assert_eq!(board.king_count(Color::White), 1);
        assert_eq!(board.king_total(), 2);
        board.remove(sq(60));
        assert_eq!(board.king_count(Color::White), 0);
        assert_eq!(board.king_total(), 1);
    }

    #[test]
    fn display_rows() {
        let text = Board::starting().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "r n b q k b n r");
        assert_eq!(lines[3], ". . . . . . . .");
        assert_eq!(lines[7], "R N B Q K B N R");
    }
}
