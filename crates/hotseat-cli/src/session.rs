//! The terminal board: reads commands, drives the game, prints results.

use std::io::{BufRead, Write};

use anyhow::Result;
use tracing::warn;

use crate::config::DisplayConfig;
use crate::input::Command;
use crate::json_output::{AttemptJson, BoardJson};
use crate::render;
use hotseat_core::Square;
use hotseat_engine::{Game, MoveReport, Outcome, Rejection};

const HELP: &str = "\
Commands:
  FROM TO   move the piece on square FROM to square TO (0-63, row-major)
  board     redraw the board
  reset     start a new game
  quit      leave
";

/// How a session reports back.
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Print one JSON object per attempt instead of the drawn board.
    pub json: bool,
    /// Stop reading at the first rejected move.
    pub stop_on_rejection: bool,
    /// Only print the final board.
    pub quiet: bool,
}

/// Counts of what happened during a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub accepted: usize,
    pub rejected: usize,
    pub bad_input: usize,
}

/// A terminal board bound to one game.
pub struct Session<'a> {
    game: Game,
    display: &'a DisplayConfig,
    options: Options,
    summary: Summary,
}

impl<'a> Session<'a> {
    pub fn new(game: Game, display: &'a DisplayConfig, options: Options) -> Self {
        Session {
            game,
            display,
            options,
            summary: Summary::default(),
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Processes every line of `input` until it ends or `quit` is read.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<Summary> {
        if !self.options.json && !self.options.quiet {
            write!(out, "{}", render::frame(&self.game, self.display))?;
        }

        for line in input.lines() {
            let line = line?;
            if !self.handle(&line, out)? {
                break;
            }
        }

        if self.options.quiet && !self.options.json {
            write!(out, "{}", render::frame(&self.game, self.display))?;
        }
        out.flush()?;
        Ok(self.summary)
    }

    /// Handles one line. Returns false when the session should end.
    pub fn handle<W: Write>(&mut self, line: &str, out: &mut W) -> Result<bool> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(e) => {
                warn!(line, error = %e, "unreadable input");
                self.summary.bad_input += 1;
                if self.options.json {
                    writeln!(out, "{}", serde_json::json!({ "error": e.to_string() }))?;
                } else {
                    writeln!(out, "error: {}", e)?;
                }
                return Ok(!self.options.stop_on_rejection);
            }
        };

        match command {
            Command::Move { from, to } => {
                let result = self.game.play(from, to);
                self.report(from, to, &result, out)?;
                match result {
                    Ok(_) => self.summary.accepted += 1,
                    Err(_) => {
                        self.summary.rejected += 1;
                        return Ok(!self.options.stop_on_rejection);
                    }
                }
            }
            Command::Board if self.options.json => {
                writeln!(out, "{}", BoardJson::new(&self.game).to_line()?)?
            }
            Command::Board => write!(out, "{}", render::frame(&self.game, self.display))?,
            Command::Reset => {
                self.game.reset();
                if !self.options.quiet && !self.options.json {
                    write!(out, "{}", render::frame(&self.game, self.display))?;
                }
            }
            Command::Help if self.options.json => {
                writeln!(out, "{}", serde_json::json!({ "help": HELP }))?
            }
            Command::Help => write!(out, "{}", HELP)?,
            Command::Quit => return Ok(false),
            Command::Empty => {}
        }
        Ok(true)
    }

    fn report<W: Write>(
        &self,
        from: Square,
        to: Square,
        result: &Result<MoveReport, Rejection>,
        out: &mut W,
    ) -> Result<()> {
        if self.options.json {
            let json = AttemptJson::new(from, to, result, self.game.status());
            writeln!(out, "{}", json.to_line()?)?;
            return Ok(());
        }

        match result {
            Ok(report) => {
                if !self.options.quiet {
                    write!(out, "{}", render::frame(&self.game, self.display))?;
                }
                if report.outcome == Outcome::CaptureWins {
                    writeln!(out, "{}", render::status(&self.game))?;
                }
            }
            Err(reason) => writeln!(out, "{}", reason.notification())?,
        }
        Ok(())
    }
}
