//! The shipped rule set: geometric movement, game ends when a king falls.

use super::{movement, RuleSet};
use crate::MoveContext;
use hotseat_core::{Board, Color};

/// Hot-seat rules with a minimal movement subset.
///
/// - Standard piece movement, with path blocking for sliders
/// - No check, castling, en passant or promotion
/// - Black moves first
/// - The player who captures a king wins
#[derive(Debug, Clone, Copy, Default)]
pub struct KingCapture;

impl RuleSet for KingCapture {
    fn initial_board(&self) -> Board {
        Board::starting()
    }

    fn first_to_move(&self) -> Color {
        Color::Black
    }

    fn is_legal(&self, ctx: &MoveContext<'_>) -> bool {
        movement(ctx)
    }

    fn winner(&self, board: &Board, mover: Color) -> Option<Color> {
        if board.king_total() < 2 {
            Some(mover)
        } else {
            None
        }
    }
}
