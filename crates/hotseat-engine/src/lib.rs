//! Move legality and game state for hot-seat chess.
//!
//! This crate provides:
//! - [`MoveContext`] - the geometry of one move attempt, shared by all rules
//! - [`rules`] - one movement rule per piece kind and the [`RuleSet`] trait
//! - [`Game`] - turn order, captures and the king-capture win condition
//!
//! Legality is geometric: paths must be clear and destinations must not
//! hold the mover's own pieces. There is no check, castling, en passant or
//! promotion. The game ends as soon as a king is captured.
//!
//! # Example
//!
//! ```
//! use hotseat_engine::{Game, Rejection};
//! use hotseat_core::Square;
//!
//! let sq = |i| Square::from_index(i).unwrap();
//! let mut game = Game::new();
//!
//! // Black moves first.
//! assert_eq!(game.play(sq(52), sq(44)).unwrap_err(), Rejection::WrongTurn(hotseat_core::Color::White));
//! game.play(sq(1), sq(18)).unwrap();
//! game.play(sq(52), sq(44)).unwrap();
//! ```

mod context;
mod game;
pub mod rules;

pub use context::MoveContext;
pub use game::{
    BoardDelta, Captures, Game, GameError, GameState, MoveAttempt, MoveReport, Outcome, Rejection,
    Status,
};
pub use rules::{is_legal, KingCapture, RuleSet};
