//! Game management: turn order, captures, and the win condition.
//!
//! The [`Game`] struct owns the board and the game state. Views report move
//! attempts and get back either a [`MoveReport`] describing what changed or
//! a [`Rejection`] explaining why nothing did.

use crate::rules::{KingCapture, RuleSet};
use crate::MoveContext;
use hotseat_core::{Board, Color, LayoutError, Piece, Square};
use thiserror::Error;
use tracing::{debug, info};

/// Whose turn it is, or who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// The game is running and this color moves next.
    Active(Color),
    /// A king has been captured. No further moves are accepted.
    Terminal { winner: Color },
}

impl Status {
    /// Returns the color allowed to move, or `None` once the game is over.
    pub const fn active_color(self) -> Option<Color> {
        match self {
            Status::Active(color) => Some(color),
            Status::Terminal { .. } => None,
        }
    }

    /// Returns the winner, if the game is over.
    pub const fn winner(self) -> Option<Color> {
        match self {
            Status::Active(_) => None,
            Status::Terminal { winner } => Some(winner),
        }
    }

    /// Returns true if the game is over.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Status::Terminal { .. })
    }
}

/// Captured pieces, grouped by the color that captured them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captures {
    by_color: [Vec<Piece>; 2],
}

impl Captures {
    /// Returns the pieces `color` has captured, oldest first.
    pub fn by(&self, color: Color) -> &[Piece] {
        &self.by_color[color.index()]
    }

    /// Returns the total number of captured pieces.
    pub fn len(&self) -> usize {
        self.by_color.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn record(&mut self, captor: Color, piece: Piece) {
        self.by_color[captor.index()].push(piece);
    }
}

/// The mutable state besides piece placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub status: Status,
    pub captured: Captures,
}

impl GameState {
    fn new(to_move: Color) -> Self {
        GameState {
            status: Status::Active(to_move),
            captured: Captures::default(),
        }
    }
}

/// A move attempt as reported by a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveAttempt {
    /// The piece the view believes stands on `from`.
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
}

impl MoveAttempt {
    pub const fn new(piece: Piece, from: Square, to: Square) -> Self {
        MoveAttempt { piece, from, to }
    }

    /// Builds an attempt for whatever piece stands on `from`.
    pub fn from_board(board: &Board, from: Square, to: Square) -> Option<Self> {
        board
            .occupant_at(from)
            .map(|piece| MoveAttempt::new(piece, from, to))
    }
}

/// How an accepted move played out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The destination was empty.
    Quiet,
    /// An opposing piece was captured.
    Capture,
    /// A capture that ended the game.
    CaptureWins,
}

impl Outcome {
    /// Returns a stable snake_case name for views.
    pub const fn code(self) -> &'static str {
        match self {
            Outcome::Quiet => "quiet",
            Outcome::Capture => "capture",
            Outcome::CaptureWins => "capture_wins",
        }
    }
}

/// The board changes caused by an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardDelta {
    pub piece: Piece,
    /// Cleared by the move.
    pub from: Square,
    /// Now holds `piece`.
    pub to: Square,
    /// The piece that stood on `to`, now in the mover's capture list.
    pub captured: Option<Piece>,
}

/// Everything a view needs after an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub outcome: Outcome,
    pub delta: BoardDelta,
    /// The status after the move.
    pub status: Status,
}

/// Why a move attempt was turned down. State is unchanged after any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("the game is over")]
    GameOver,

    #[error("the source square does not hold the reported piece")]
    SourceMismatch,

    #[error("it is not {0}'s turn")]
    WrongTurn(Color),

    #[error("destination holds a piece of the mover's color")]
    OwnPieceAtDestination,

    #[error("the piece cannot move there")]
    IllegalGeometry,
}

impl Rejection {
    /// Returns a stable snake_case name for views.
    pub const fn code(self) -> &'static str {
        match self {
            Rejection::GameOver => "game_over",
            Rejection::SourceMismatch => "source_mismatch",
            Rejection::WrongTurn(_) => "wrong_turn",
            Rejection::OwnPieceAtDestination => "own_piece_at_destination",
            Rejection::IllegalGeometry => "illegal_geometry",
        }
    }

    /// Returns the notification text shown to the player.
    pub const fn notification(self) -> &'static str {
        match self {
            Rejection::GameOver => "The game is over!",
            Rejection::WrongTurn(_) => "It is not your turn!",
            Rejection::SourceMismatch
            | Rejection::OwnPieceAtDestination
            | Rejection::IllegalGeometry => "You can not go there!",
        }
    }
}

/// Error type for setting up a game.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("invalid setup: {color} has {kings} kings, expected exactly one")]
    InvalidSetup { color: Color, kings: usize },
}

/// A hot-seat game: one board, two players taking turns on it.
///
/// # Example
///
/// ```
/// use hotseat_engine::{Game, Outcome, Status};
/// use hotseat_core::{Color, Square};
///
/// let mut game = Game::new();
/// let from = Square::from_index(12).unwrap();
/// let to = Square::from_index(20).unwrap();
/// let report = game.play(from, to).unwrap();
/// assert_eq!(report.outcome, Outcome::Quiet);
/// assert_eq!(game.status(), Status::Active(Color::White));
/// ```
#[derive(Debug, Clone)]
pub struct Game<R: RuleSet = KingCapture> {
    rules: R,
    board: Board,
    state: GameState,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game from the starting layout, Black to move.
    pub fn new() -> Self {
        Self::with_rules(KingCapture)
    }

    /// Creates a game from a custom board.
    ///
    /// Each color must have exactly one king on the board.
    pub fn from_board(board: Board, to_move: Color) -> Result<Self, GameError> {
        for color in Color::ALL {
            let kings = board.king_count(color);
            if kings != 1 {
                return Err(GameError::InvalidSetup { color, kings });
            }
        }
        Ok(Game {
            rules: KingCapture,
            board,
            state: GameState::new(to_move),
        })
    }

    /// Creates a game from a layout string.
    pub fn from_layout(layout: &str, to_move: Color) -> Result<Self, GameError> {
        Self::from_board(Board::from_layout(layout)?, to_move)
    }
}

impl<R: RuleSet> Game<R> {
    /// Creates a new game played under the given rules.
    pub fn with_rules(rules: R) -> Self {
        let board = rules.initial_board();
        let state = GameState::new(rules.first_to_move());
        Game {
            rules,
            board,
            state,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn status(&self) -> Status {
        self.state.status
    }

    /// Returns the color allowed to move, or `None` once the game is over.
    pub fn active_color(&self) -> Option<Color> {
        self.state.status.active_color()
    }

    /// Returns the winner if the game is over.
    pub fn winner(&self) -> Option<Color> {
        self.state.status.winner()
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state.status.is_terminal()
    }

    /// Returns the pieces `color` has captured, oldest first.
    pub fn captured(&self, color: Color) -> &[Piece] {
        self.state.captured.by(color)
    }

    /// Returns true if the piece on `sq` may be picked up right now.
    pub fn is_interactive(&self, sq: Square) -> bool {
        match (self.active_color(), self.board.occupant_at(sq)) {
            (Some(active), Some(piece)) => piece.color == active,
            _ => false,
        }
    }

    /// Checks an attempt without applying it.
    pub fn check(&self, attempt: &MoveAttempt) -> Result<(), Rejection> {
        let active = self.active_color().ok_or(Rejection::GameOver)?;

        if self.board.occupant_at(attempt.from) != Some(attempt.piece) {
            return Err(Rejection::SourceMismatch);
        }
        if attempt.piece.color != active {
            return Err(Rejection::WrongTurn(attempt.piece.color));
        }

        let ctx = MoveContext::new(&self.board, attempt.piece, attempt.from, attempt.to);
        if ctx.target == Some(active) {
            return Err(Rejection::OwnPieceAtDestination);
        }
        if !self.rules.is_legal(&ctx) {
            return Err(Rejection::IllegalGeometry);
        }
        Ok(())
    }

    /// Attempts a move. On success the board, captures and status are
    /// updated together; on rejection nothing changes.
    pub fn attempt(&mut self, attempt: MoveAttempt) -> Result<MoveReport, Rejection> {
        if let Err(reason) = self.check(&attempt) {
            debug!(
                piece = %attempt.piece,
                from = %attempt.from,
                to = %attempt.to,
                %reason,
                "move rejected"
            );
            return Err(reason);
        }
        Ok(self.apply(attempt))
    }

    /// Attempts to move whatever piece stands on `from`.
    pub fn play(&mut self, from: Square, to: Square) -> Result<MoveReport, Rejection> {
        match MoveAttempt::from_board(&self.board, from, to) {
            Some(attempt) => self.attempt(attempt),
            None if self.is_game_over() => Err(Rejection::GameOver),
            None => Err(Rejection::SourceMismatch),
        }
    }

    /// Restarts from the initial board.
    pub fn reset(&mut self) {
        self.board = self.rules.initial_board();
        self.state = GameState::new(self.rules.first_to_move());
    }

    fn apply(&mut self, attempt: MoveAttempt) -> MoveReport {
        let mover = attempt.piece.color;
        let captured = self.board.move_piece(attempt.from, attempt.to);
        if let Some(piece) = captured {
            self.state.captured.record(mover, piece);
        }

        let outcome = match (captured, self.rules.winner(&self.board, mover)) {
            (_, Some(winner)) => {
                self.state.status = Status::Terminal { winner };
                info!(%winner, "game over");
                Outcome::CaptureWins
            }
            (Some(_), None) => Outcome::Capture,
            (None, None) => Outcome::Quiet,
        };
        if !self.state.status.is_terminal() {
            self.state.status = Status::Active(mover.opposite());
        }

        debug!(
            piece = %attempt.piece,
            from = %attempt.from,
            to = %attempt.to,
            captured = captured.map(|p| p.kind.name()).unwrap_or("-"),
            ?outcome,
            "move accepted"
        );

        MoveReport {
            outcome,
            delta: BoardDelta {
                piece: attempt.piece,
                from: attempt.from,
                to: attempt.to,
                captured,
            },
            status: self.state.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotseat_core::PieceKind;

    fn sq(index: u8) -> Square {
        Square::from_index(index).unwrap()
    }

    #[test]
    fn new_game() {
        let game = Game::new();
        assert_eq!(game.status(), Status::Active(Color::Black));
        assert_eq!(game.active_color(), Some(Color::Black));
        assert!(!game.is_game_over());
        assert!(game.state().captured.is_empty());
        assert_eq!(game.board(), &Board::starting());
    }

    #[test]
    fn quiet_move_switches_turn() {
        let mut game = Game::new();
        let report = game.play(sq(12), sq(20)).unwrap();
        assert_eq!(report.outcome, Outcome::Quiet);
        assert_eq!(report.delta.captured, None);
        assert_eq!(report.status, Status::Active(Color::White));
        assert_eq!(game.board().occupant_at(sq(12)), None);
        assert_eq!(
            game.board().occupant_at(sq(20)),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
    }

    #[test]
    fn wrong_turn() {
        let mut game = Game::new();
        assert_eq!(
            game.play(sq(52), sq(44)),
            Err(Rejection::WrongTurn(Color::White))
        );
        assert_eq!(game.active_color(), Some(Color::Black));
    }

    #[test]
    fn empty_source() {
        let mut game = Game::new();
        assert_eq!(game.play(sq(30), sq(38)), Err(Rejection::SourceMismatch));
    }

    #[test]
    fn misreported_piece() {
        let mut game = Game::new();
        let queen = Piece::new(PieceKind::Queen, Color::Black);
        let attempt = MoveAttempt::new(queen, sq(12), sq(28));
        assert_eq!(game.attempt(attempt), Err(Rejection::SourceMismatch));
    }

    #[test]
    fn capture_is_recorded_for_the_captor() {
        let mut game = Game::from_layout("4k3/8/8/3p4/4P3/8/8/4K3", Color::White).unwrap();
        let report = game.play(sq(36), sq(27)).unwrap();
        assert_eq!(report.outcome, Outcome::Capture);
        assert_eq!(
            report.delta.captured,
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert_eq!(game.captured(Color::White), &[Piece::new(PieceKind::Pawn, Color::Black)]);
        assert!(game.captured(Color::Black).is_empty());
        assert_eq!(game.active_color(), Some(Color::Black));
    }

    #[test]
    fn capturing_the_king_wins() {
        let mut game = Game::from_layout("4k3/8/8/8/8/8/8/4R2K", Color::White).unwrap();
        let report = game.play(sq(60), sq(4)).unwrap();
        assert_eq!(report.outcome, Outcome::CaptureWins);
        assert_eq!(report.status, Status::Terminal { winner: Color::White });
        assert_eq!(
            report.delta.captured.map(|p| p.kind),
            Some(PieceKind::King)
        );
        assert_eq!(game.winner(), Some(Color::White));
        assert_eq!(game.active_color(), None);

        // Nothing moves afterwards, for either side.
        assert_eq!(game.play(sq(63), sq(62)), Err(Rejection::GameOver));
        assert_eq!(game.play(sq(30), sq(31)), Err(Rejection::GameOver));
        assert!(!game.is_interactive(sq(63)));
    }

    #[test]
    fn interactive_pieces_follow_the_turn() {
        let mut game = Game::new();
        assert!(game.is_interactive(sq(12)));
        assert!(!game.is_interactive(sq(52)));
        assert!(!game.is_interactive(sq(30)));
        game.play(sq(12), sq(28)).unwrap();
        assert!(!game.is_interactive(sq(11)));
        assert!(game.is_interactive(sq(52)));
    }

    #[test]
    fn setup_requires_one_king_each() {
        assert_eq!(
            Game::from_layout("8/8/8/8/8/8/8/4K3", Color::Black).unwrap_err(),
            GameError::InvalidSetup {
                color: Color::Black,
                kings: 0
            }
        );
        assert!(matches!(
            Game::from_layout("8/8", Color::Black),
            Err(GameError::Layout(LayoutError::InvalidRowCount(2)))
        ));
    }

    #[test]
    fn reset_restores_start() {
        let mut game = Game::new();
        game.play(sq(12), sq(28)).unwrap();
        game.play(sq(51), sq(35)).unwrap();
        game.play(sq(28), sq(35)).unwrap();
        assert_eq!(game.captured(Color::Black).len(), 1);
        game.reset();
        assert_eq!(game.board(), &Board::starting());
        assert_eq!(game.active_color(), Some(Color::Black));
        assert!(game.state().captured.is_empty());
    }

    #[test]
    fn rejection_notifications() {
        assert_eq!(Rejection::IllegalGeometry.notification(), "You can not go there!");
        assert_eq!(
            Rejection::OwnPieceAtDestination.notification(),
            "You can not go there!"
        );
        assert_eq!(
            Rejection::WrongTurn(Color::White).to_string(),
            "it is not White's turn"
        );
    }
}
