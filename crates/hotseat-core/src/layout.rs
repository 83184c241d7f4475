//! Layout strings: the piece-placement field of FEN, read row 0 first.
//!
//! Each of the eight `/`-separated segments describes one row. Letters are
//! pieces (lowercase Black, uppercase White) and the digits 1-8 skip that
//! many empty squares.

use thiserror::Error;

use crate::{Board, Piece, Square, WIDTH};

/// The starting layout.
pub const STARTING_LAYOUT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

/// Errors that can occur when parsing a layout string.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("invalid layout: expected 8 rows, got {0}")]
    InvalidRowCount(usize),

    #[error("invalid layout: row {row} covers {squares} squares, expected 8")]
    InvalidRowLength { row: usize, squares: usize },

    #[error("invalid layout: unexpected character '{ch}' in row {row}")]
    InvalidCharacter { row: usize, ch: char },
}

impl Board {
    /// Parses a layout string.
    pub fn from_layout(layout: &str) -> Result<Self, LayoutError> {
        let rows: Vec<&str> = layout.trim().split('/').collect();
        if rows.len() != WIDTH as usize {
            return Err(LayoutError::InvalidRowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let mut col = 0usize;
            for ch in text.chars() {
                if let Some(skip) = ch.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    col += skip as usize;
                } else if let Some(piece) = Piece::from_char(ch) {
                    if let Some(sq) = Square::new(row as u8, col as u8) {
                        board.place(sq, piece);
                    }
                    col += 1;
                } else {
                    return Err(LayoutError::InvalidCharacter { row, ch });
                }
            }
            if col != WIDTH as usize {
                return Err(LayoutError::InvalidRowLength { row, squares: col });
            }
        }
        Ok(board)
    }

    /// Writes the board as a layout string.
    pub fn to_layout(&self) -> String {
        let mut out = String::with_capacity(72);
        for row in 0..WIDTH {
            if row > 0 {
                out.push('/');
            }
            let mut empty = 0u8;
            for col in 0..WIDTH {
                match self.occupant_at(Square(row * WIDTH + col)) {
                    Some(piece) => {
                        if empty > 0 {
                            out.push((b'0' + empty) as char);
                            empty = 0;
                        }
                        out.push(piece.to_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                out.push((b'0' + empty) as char);
            }
        }
        out
    }
}
