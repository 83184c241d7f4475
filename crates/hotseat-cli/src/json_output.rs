//! JSON lines for move attempts, one object per attempt.

use hotseat_core::Square;
use hotseat_engine::{Game, MoveReport, Rejection, Status};
use serde::Serialize;

/// JSON representation of one move attempt.
///
/// ```json
/// {"accepted":true,"from":12,"to":20,"outcome":"quiet","piece":"p",
///  "captured":null,"active_color":"white","winner":null}
/// {"accepted":false,"from":56,"to":60,"reason":"own_piece_at_destination",
///  "message":"You can not go there!","active_color":"white","winner":null}
/// ```
#[derive(Debug, Serialize, PartialEq)]
pub struct AttemptJson {
    accepted: bool,
    from: u8,
    to: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    outcome: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    piece: Option<char>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'static str>,
    captured: Option<char>,
    active_color: Option<&'static str>,
    winner: Option<&'static str>,
}

impl AttemptJson {
    pub fn new(
        from: Square,
        to: Square,
        result: &Result<MoveReport, Rejection>,
        status: Status,
    ) -> Self {
        let mut json = AttemptJson {
            accepted: result.is_ok(),
            from: from.index(),
            to: to.index(),
            outcome: None,
            piece: None,
            reason: None,
            message: None,
            captured: None,
            active_color: status.active_color().map(|c| c.name()),
            winner: status.winner().map(|c| c.name()),
        };
        match result {
            Ok(report) => {
                json.outcome = Some(report.outcome.code());
                json.piece = Some(report.delta.piece.to_char());
                json.captured = report.delta.captured.map(|p| p.to_char());
            }
            Err(reason) => {
                json.reason = Some(reason.code());
                json.message = Some(reason.notification());
            }
        }
        json
    }

    /// Serializes to a single line.
    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// JSON representation of the board, written for the `board` command.
///
/// ```json
/// {"layout":"rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR","active_color":"black","winner":null}
/// ```
#[derive(Debug, Serialize, PartialEq)]
pub struct BoardJson {
    layout: String,
    active_color: Option<&'static str>,
    winner: Option<&'static str>,
}

impl BoardJson {
    pub fn new(game: &Game) -> Self {
        BoardJson {
            layout: game.board().to_layout(),
            active_color: game.active_color().map(|c| c.name()),
            winner: game.winner().map(|c| c.name()),
        }
    }

    pub fn to_line(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn sq(index: u8) -> Square {
        Square::from_index(index).unwrap()
    }

    #[test]
    fn accepted_attempt() {
        let mut game = Game::new();
        let result = game.play(sq(12), sq(20));
        let line = AttemptJson::new(sq(12), sq(20), &result, game.status())
            .to_line()
            .unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["accepted"], true);
        assert_eq!(value["outcome"], "quiet");
        assert_eq!(value["piece"], "p");
        assert_eq!(value["captured"], Value::Null);
        assert_eq!(value["active_color"], "white");
        assert!(value.get("reason").is_none());
    }

    #[test]
    fn rejected_attempt() {
        let mut game = Game::new();
        let result = game.play(sq(2), sq(20));
        let line = AttemptJson::new(sq(2), sq(20), &result, game.status())
            .to_line()
            .unwrap();
        let value: Value = serde_json::from_str(&line).unwrap();
        assert_eq!(value["accepted"], false);
        assert_eq!(value["reason"], "illegal_geometry");
        assert_eq!(value["message"], "You can not go there!");
        assert_eq!(value["active_color"], "black");
        assert!(value.get("outcome").is_none());
    }

    #[test]
    fn board_snapshot() {
        let mut game = Game::new();
        game.play(sq(1), sq(18)).unwrap();
        let value: Value = serde_json::from_str(&BoardJson::new(&game).to_line().unwrap()).unwrap();
        assert_eq!(value["layout"], "r1bqkbnr/pppppppp/2n5/8/8/8/PPPPPPPP/RNBQKBNR");
        assert_eq!(value["active_color"], "white");
        assert_eq!(value["winner"], Value::Null);
    }
}
