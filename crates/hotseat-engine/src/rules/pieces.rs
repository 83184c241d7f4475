//! Movement rules, one per piece kind.
//!
//! Each rule only reads the [`MoveContext`]. None of them check whether the
//! destination holds a piece of the mover's own color.

use crate::MoveContext;

/// Pawns step one row forward onto an empty square, two rows from their
/// starting row when both squares ahead are empty, and capture one row
/// forward diagonally.
pub fn pawn(ctx: &MoveContext<'_>) -> bool {
    let color = ctx.piece.color;
    let direction = color.pawn_direction();
    let advance = ctx.row_delta * direction;
    if advance <= 0 {
        return false;
    }

    match (advance, ctx.col_delta.abs(), ctx.target) {
        (1, 0, None) => true,
        (2, 0, None) => {
            ctx.from.row() == color.pawn_row()
                && ctx
                    .from
                    .offset(direction, 0)
                    .is_some_and(|sq| !ctx.board().is_occupied(sq))
        }
        (1, 1, Some(target)) => target != color,
        _ => false,
    }
}

/// Rooks slide along a row or a column over empty squares.
pub fn rook(ctx: &MoveContext<'_>) -> bool {
    (ctx.row_delta == 0) != (ctx.col_delta == 0) && ctx.path_is_clear()
}

/// Bishops slide along a diagonal over empty squares.
pub fn bishop(ctx: &MoveContext<'_>) -> bool {
    ctx.row_delta != 0 && ctx.row_delta.abs() == ctx.col_delta.abs() && ctx.path_is_clear()
}

/// Knights jump two squares one way and one the other. Nothing in between
/// is looked at.
pub fn knight(ctx: &MoveContext<'_>) -> bool {
    matches!(
        (ctx.row_delta.abs(), ctx.col_delta.abs()),
        (2, 1) | (1, 2)
    )
}

pub fn queen(ctx: &MoveContext<'_>) -> bool {
    rook(ctx) || bishop(ctx)
}

/// Kings step to any adjacent square.
pub fn king(ctx: &MoveContext<'_>) -> bool {
    // The distance set alone would also accept h-file to a-file wraps.
    matches!(ctx.square_distance, 1 | 7 | 8 | 9)
        && ctx.row_delta.abs() <= 1
        && ctx.col_delta.abs() <= 1
}
