//! Core types for hot-seat chess.
//!
//! This crate provides the board state shared by the engine and the views:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Square`] and [`Shade`] for board coordinates
//! - [`Board`], the single source of truth for piece placement
//! - Layout strings for writing down and reading back a board

mod board;
mod color;
mod layout;
mod piece;
mod square;

pub use board::Board;
pub use color::Color;
pub use layout::{LayoutError, STARTING_LAYOUT};
pub use piece::{Piece, PieceKind};
pub use square::{Shade, Square, WIDTH};
