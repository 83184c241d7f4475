//! Text rendering of the board and game status.

use std::fmt::Write;

use crate::config::DisplayConfig;
use hotseat_core::{Color, Square, WIDTH};
use hotseat_engine::{Game, Status};

/// Draws the board, row 0 at the top.
pub fn board(game: &Game, display: &DisplayConfig) -> String {
    let mut out = String::new();
    if display.show_indices {
        out.push_str("   ");
        for col in 0..WIDTH {
            let _ = write!(out, " {}", col);
        }
        out.push('\n');
    }
    for row in 0..WIDTH {
        if display.show_indices {
            let _ = write!(out, "{:>2} ", row * WIDTH);
        }
        for col in 0..WIDTH {
            let ch = Square::new(row, col)
                .and_then(|sq| game.board().occupant_at(sq))
                .map_or(display.empty, |p| p.to_char());
            if display.show_indices || col > 0 {
                out.push(' ');
            }
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// One line per color listing what it has captured.
pub fn captures(game: &Game) -> String {
    let mut out = String::new();
    for color in Color::ALL {
        let taken: Vec<String> = game
            .captured(color)
            .iter()
            .map(|p| p.to_char().to_string())
            .collect();
        let _ = writeln!(out, "{} captured: {}", color, taken.join(" "));
    }
    out
}

/// The player display line.
pub fn status(game: &Game) -> String {
    match game.status() {
        Status::Active(color) => format!("{} to move", color),
        Status::Terminal { winner } => format!("{} player wins", winner),
    }
}

/// Board, optional capture lists, and the status line.
pub fn frame(game: &Game, display: &DisplayConfig) -> String {
    let mut out = board(game, display);
    if display.show_captures {
        out.push_str(&captures(game));
    }
    out.push_str(&status(game));
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotseat_engine::Game;

    fn sq(index: u8) -> Square {
        Square::from_index(index).unwrap()
    }

    #[test]
    fn plain_board_matches_core_display() {
        let display = DisplayConfig {
            show_indices: false,
            ..DisplayConfig::default()
        };
        let game = Game::new();
        assert_eq!(board(&game, &display), game.board().to_string());
    }

    #[test]
    fn indexed_board() {
        let game = Game::new();
        let text = board(&game, &DisplayConfig::default());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "    0 1 2 3 4 5 6 7");
        assert_eq!(lines[1], " 0  r n b q k b n r");
        assert_eq!(lines[8], "56  R N B Q K B N R");
    }

    #[test]
    fn custom_empty_char() {
        let display = DisplayConfig {
            show_indices: false,
            empty: '-',
            ..DisplayConfig::default()
        };
        let text = board(&Game::new(), &display);
        assert_eq!(text.lines().nth(4), Some("- - - - - - - -"));
    }

    #[test]
    fn status_and_captures() {
        let mut game = Game::from_layout("4k3/8/8/8/8/8/8/4R2K", Color::White).unwrap();
        assert_eq!(status(&game), "White to move");
        game.play(sq(60), sq(4)).unwrap();
        assert_eq!(status(&game), "White player wins");
        assert_eq!(captures(&game), "Black captured: \nWhite captured: k\n");
    }
}
