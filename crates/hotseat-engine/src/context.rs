//! Per-attempt move geometry.

use hotseat_core::{Board, Color, Piece, Square};

/// Everything a movement rule needs to know about one move attempt.
///
/// Built once per attempt and shared by reference with every rule. The
/// board is only borrowed for occupancy lookups along the path.
#[derive(Debug, Clone, Copy)]
pub struct MoveContext<'a> {
    board: &'a Board,
    /// The piece being moved.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    /// Destination row minus source row.
    pub row_delta: i8,
    /// Destination column minus source column.
    pub col_delta: i8,
    /// `|to - from|` in square indices.
    pub square_distance: u8,
    /// Color of the piece on the destination, if it is occupied.
    pub target: Option<Color>,
}

impl<'a> MoveContext<'a> {
    /// Derives the geometry of moving `piece` from `from` to `to` on `board`.
    pub fn new(board: &'a Board, piece: Piece, from: Square, to: Square) -> Self {
        MoveContext {
            board,
            piece,
            from,
            to,
            row_delta: to.row() as i8 - from.row() as i8,
            col_delta: to.col() as i8 - from.col() as i8,
            square_distance: to.index().abs_diff(from.index()),
            target: board.occupant_at(to).map(|p| p.color),
        }
    }

    /// Returns the board the attempt is evaluated against.
    #[inline]
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Returns true if the destination holds an opposing piece.
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.target.is_some_and(|c| c != self.piece.color)
    }

    /// Returns true if the source and destination are on one rank, file or
    /// diagonal (and differ).
    #[inline]
    pub fn is_aligned(&self) -> bool {
        let (dr, dc) = (self.row_delta.abs(), self.col_delta.abs());
        (dr == 0) != (dc == 0) || (dr == dc && dr != 0)
    }

    /// Returns true if every square strictly between source and destination
    /// is empty. Only meaningful for aligned moves; unaligned moves report
    /// `false`.
    pub fn path_is_clear(&self) -> bool {
        if !self.is_aligned() {
            return false;
        }
        let step_row = self.row_delta.signum();
        let step_col = self.col_delta.signum();
        let steps = self.row_delta.abs().max(self.col_delta.abs());

        (1..steps).all(|i| {
            self.from
                .offset(step_row * i, step_col * i)
                .is_some_and(|sq| !self.board.is_occupied(sq))
        })
    }
}
