//! WebAssembly bindings for the hot-seat board.
//!
//! The browser side owns drawing and drag-and-drop. It forwards each drop
//! to [`Game::attempt_move`] and redraws from the returned delta.
//!
//! # Usage
//!
//! ```javascript
//! import init, { Game } from 'hotseat-wasm';
//!
//! await init();
//!
//! const game = new Game();
//! const result = game.attemptMove(12, 20);
//! if (result.accepted) {
//!   movePieceElement(result.delta.from, result.delta.to);
//! }
//! showNotification(result.message);
//! showPlayer(game.activeColor());
//! ```

use hotseat_core::{Color, Shade, Square};
use hotseat_engine::{MoveReport, Rejection, Status};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Board changes for the view to apply.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct DeltaView {
    piece: String,
    from: u8,
    to: u8,
    captured: Option<String>,
}

/// The result of one drop, as handed to JavaScript.
#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
struct AttemptView {
    accepted: bool,
    outcome: Option<&'static str>,
    reason: Option<&'static str>,
    /// Notification text; empty clears the notification.
    message: String,
    delta: Option<DeltaView>,
    active_color: Option<&'static str>,
    winner: Option<&'static str>,
}

impl AttemptView {
    fn new(result: Result<MoveReport, Rejection>, status: Status) -> Self {
        let (outcome, reason, message, delta) = match result {
            Ok(report) => {
                let message = match report.status {
                    Status::Terminal { winner } => format!("{} player wins", winner.name()),
                    Status::Active(_) => String::new(),
                };
                let delta = DeltaView {
                    piece: report.delta.piece.to_char().to_string(),
                    from: report.delta.from.index(),
                    to: report.delta.to.index(),
                    captured: report.delta.captured.map(|p| p.to_char().to_string()),
                };
                (Some(report.outcome.code()), None, message, Some(delta))
            }
            Err(reason) => (
                None,
                Some(reason.code()),
                reason.notification().to_string(),
                None,
            ),
        };
        AttemptView {
            accepted: delta.is_some(),
            outcome,
            reason,
            message,
            delta,
            active_color: status.active_color().map(Color::name),
            winner: status.winner().map(Color::name),
        }
    }
}

fn square(index: u8) -> Result<Square, String> {
    Square::from_index(index).ok_or_else(|| format!("square {} is off the board", index))
}

fn color(name: &str) -> Result<Color, String> {
    Color::from_name(name).ok_or_else(|| format!("unknown color: {}", name))
}

/// A hot-seat game that can be driven from JavaScript.
#[wasm_bindgen]
pub struct Game {
    inner: hotseat_engine::Game,
}

#[wasm_bindgen]
impl Game {
    /// Creates a new game with the starting layout, black to move.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Game {
            inner: hotseat_engine::Game::new(),
        }
    }

    /// Creates a game from a layout string and the color to move
    /// ("black" or "white").
    #[wasm_bindgen(js_name = fromLayout)]
    pub fn from_layout(layout: &str, to_move: &str) -> Result<Game, JsError> {
        Self::try_from_layout(layout, to_move).map_err(|e| JsError::new(&e))
    }

    /// Attempts to move the piece on `from` to `to`.
    ///
    /// Returns `{ accepted, outcome, reason, message, delta, activeColor, winner }`.
    #[wasm_bindgen(js_name = attemptMove)]
    pub fn attempt_move(&mut self, from: u8, to: u8) -> Result<JsValue, JsError> {
        let view = self.attempt(from, to).map_err(|e| JsError::new(&e))?;
        serde_wasm_bindgen::to_value(&view).map_err(|e| JsError::new(&e.to_string()))
    }

    /// Returns the layout character of the piece on `square`, or null.
    #[wasm_bindgen(js_name = occupantAt)]
    pub fn occupant_at(&self, square: u8) -> Option<String> {
        let sq = Square::from_index(square)?;
        let piece = self.inner.board().occupant_at(sq)?;
        Some(piece.to_char().to_string())
    }

    /// Returns "black" or "white", or null once the game is over.
    #[wasm_bindgen(js_name = activeColor)]
    pub fn active_color(&self) -> Option<String> {
        self.inner.active_color().map(|c| c.name().to_string())
    }

    /// Returns the winning color, or null while the game is running.
    pub fn winner(&self) -> Option<String> {
        self.inner.winner().map(|c| c.name().to_string())
    }

    /// Returns the layout characters of the pieces `color` has captured.
    pub fn captured(&self, color_name: &str) -> Result<Vec<String>, JsError> {
        self.captured_by(color_name).map_err(|e| JsError::new(&e))
    }

    /// Returns true if the piece on `square` may be dragged right now.
    #[wasm_bindgen(js_name = isInteractive)]
    pub fn is_interactive(&self, square: u8) -> bool {
        Square::from_index(square).is_some_and(|sq| self.inner.is_interactive(sq))
    }

    /// Returns "light" or "dark" for painting `square`.
    #[wasm_bindgen(js_name = squareShade)]
    pub fn square_shade(square: u8) -> Option<String> {
        let shade = match Square::from_index(square)?.shade() {
            Shade::Light => "light",
            Shade::Dark => "dark",
        };
        Some(shade.to_string())
    }

    /// Returns the board as a layout string.
    #[wasm_bindgen(js_name = toLayout)]
    pub fn to_layout(&self) -> String {
        self.inner.board().to_layout()
    }

    /// Resets the game to the starting layout.
    pub fn reset(&mut self) {
        self.inner.reset();
    }
}

impl Game {
    fn try_from_layout(layout: &str, to_move: &str) -> Result<Game, String> {
        let inner = hotseat_engine::Game::from_layout(layout, color(to_move)?)
            .map_err(|e| e.to_string())?;
        Ok(Game { inner })
    }

    fn captured_by(&self, color_name: &str) -> Result<Vec<String>, String> {
        let pieces = self.inner.captured(color(color_name)?);
        Ok(pieces.iter().map(|p| p.to_char().to_string()).collect())
    }

    fn attempt(&mut self, from: u8, to: u8) -> Result<AttemptView, String> {
        let result = self.inner.play(square(from)?, square(to)?);
        Ok(AttemptView::new(result, self.inner.status()))
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use serde::Deserialize;
    use wasm_bindgen_test::*;

    #[derive(Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Echo {
        accepted: bool,
        outcome: Option<String>,
        reason: Option<String>,
        active_color: Option<String>,
    }

    fn attempt(game: &mut Game, from: u8, to: u8) -> Echo {
        let value = game
            .attempt_move(from, to)
            .map_err(|_| "attempt failed")
            .unwrap();
        serde_wasm_bindgen::from_value(value).unwrap()
    }

    #[wasm_bindgen_test]
    fn attempt_move_returns_plain_object() {
        let mut game = Game::new();
        let echo = attempt(&mut game, 1, 18);
        assert!(echo.accepted);
        assert_eq!(echo.outcome.as_deref(), Some("quiet"));
        assert_eq!(echo.active_color.as_deref(), Some("white"));

        let echo = attempt(&mut game, 2, 20);
        assert!(!echo.accepted);
        assert_eq!(echo.reason.as_deref(), Some("wrong_turn"));
    }
}
