//! Rule set abstraction and movement dispatch.
//!
//! Movement is decided by one pure function per [`PieceKind`] in
//! [`pieces`]. The [`RuleSet`] trait bundles movement with the setup and
//! win condition so [`Game`](crate::Game) stays rule-agnostic.

mod king_capture;
pub mod pieces;

pub use king_capture::KingCapture;

use crate::MoveContext;
use hotseat_core::{Board, Color, Piece, PieceKind, Square};

/// Trait for the rules a [`Game`](crate::Game) is played under.
///
/// # Example
///
/// ```
/// use hotseat_engine::rules::RuleSet;
/// use hotseat_engine::{KingCapture, MoveContext};
/// use hotseat_core::{Color, Piece, PieceKind, Square};
///
/// let board = KingCapture.initial_board();
/// let knight = Piece::new(PieceKind::Knight, Color::Black);
/// let from = Square::from_index(1).unwrap();
/// let to = Square::from_index(18).unwrap();
/// assert!(KingCapture.is_legal(&MoveContext::new(&board, knight, from, to)));
/// ```
pub trait RuleSet {
    /// Returns the board a new game starts from.
    fn initial_board(&self) -> Board;

    /// Returns the color that moves first.
    fn first_to_move(&self) -> Color;

    /// Returns true if the piece may move as described.
    ///
    /// Called after the turn and own-piece checks, so implementations only
    /// judge geometry and path occupancy.
    fn is_legal(&self, ctx: &MoveContext<'_>) -> bool;

    /// Returns the winner if the move just made by `mover` ended the game.
    fn winner(&self, board: &Board, mover: Color) -> Option<Color>;
}

/// Dispatches to the movement rule for the moving piece's kind.
pub fn movement(ctx: &MoveContext<'_>) -> bool {
    match ctx.piece.kind {
        PieceKind::Pawn => pieces::pawn(ctx),
        PieceKind::Knight => pieces::knight(ctx),
        PieceKind::Bishop => pieces::bishop(ctx),
        PieceKind::Rook => pieces::rook(ctx),
        PieceKind::Queen => pieces::queen(ctx),
        PieceKind::King => pieces::king(ctx),
    }
}

/// Returns true if `piece` may move from `from` to `to` on `board`.
///
/// Destination occupancy is read from the board. Landing on a piece of the
/// mover's own color is never legal. Whose turn it is gets decided by the
/// caller.
pub fn is_legal(board: &Board, piece: Piece, from: Square, to: Square) -> bool {
    let ctx = MoveContext::new(board, piece, from, to);
    ctx.target != Some(piece.color) && movement(&ctx)
}
