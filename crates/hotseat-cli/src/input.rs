//! Parsing of lines typed at the terminal board.

use hotseat_core::Square;
use thiserror::Error;

/// Errors for lines that are not a known command.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected two squares, got {0}")]
    WrongSquareCount(usize),

    #[error("'{0}' is not a square index (0-63)")]
    InvalidSquare(String),
}

/// One line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Attempt to move the piece on the first square to the second.
    Move { from: Square, to: Square },
    /// Redraw the board.
    Board,
    /// Start over from the initial layout.
    Reset,
    Help,
    Quit,
    /// Blank or comment line.
    Empty,
}

impl Command {
    /// Parses a line. Squares are indices separated by whitespace, `-` or
    /// `,`, e.g. `12 20`, `12-20`. Everything after `#` is ignored.
    pub fn parse(line: &str) -> Result<Self, InputError> {
        let line = line.split('#').next().unwrap_or("").trim();

        match line.to_ascii_lowercase().as_str() {
            "" => return Ok(Command::Empty),
            "board" => return Ok(Command::Board),
            "reset" => return Ok(Command::Reset),
            "help" | "?" => return Ok(Command::Help),
            "quit" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        let parts: Vec<&str> = line
            .split(|c: char| c.is_whitespace() || c == '-' || c == ',')
            .filter(|s| !s.is_empty())
            .collect();
        if parts.len() != 2 {
            return Err(InputError::WrongSquareCount(parts.len()));
        }

        Ok(Command::Move {
            from: parse_square(parts[0])?,
            to: parse_square(parts[1])?,
        })
    }
}

fn parse_square(text: &str) -> Result<Square, InputError> {
    text.parse::<u8>()
        .ok()
        .and_then(Square::from_index)
        .ok_or_else(|| InputError::InvalidSquare(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(from: u8, to: u8) -> Command {
        Command::Move {
            from: Square::from_index(from).unwrap(),
            to: Square::from_index(to).unwrap(),
        }
    }

    #[test]
    fn parse_moves() {
        assert_eq!(Command::parse("12 20"), Ok(mv(12, 20)));
        assert_eq!(Command::parse("  1-18 "), Ok(mv(1, 18)));
        assert_eq!(Command::parse("56,60"), Ok(mv(56, 60)));
        assert_eq!(Command::parse("2 20 # bishop"), Ok(mv(2, 20)));
    }

    #[test]
    fn parse_keywords() {
        assert_eq!(Command::parse("board"), Ok(Command::Board));
        assert_eq!(Command::parse("RESET"), Ok(Command::Reset));
        assert_eq!(Command::parse("quit"), Ok(Command::Quit));
        assert_eq!(Command::parse("?"), Ok(Command::Help));
        assert_eq!(Command::parse("   "), Ok(Command::Empty));
        assert_eq!(Command::parse("# comment"), Ok(Command::Empty));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Command::parse("12"), Err(InputError::WrongSquareCount(1)));
        assert_eq!(
            Command::parse("12 64"),
            Err(InputError::InvalidSquare("64".to_string()))
        );
        assert_eq!(
            Command::parse("e2 e4"),
            Err(InputError::InvalidSquare("e2".to_string()))
        );
    }
}
