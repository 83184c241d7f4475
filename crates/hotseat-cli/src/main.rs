mod config;
mod input;
mod json_output;
mod render;
mod session;

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use config::Config;
use hotseat_core::{Color, Square, STARTING_LAYOUT};
use hotseat_engine::{Game, MoveAttempt};
use session::{Options, Session};
use tracing::Level;

#[derive(Parser)]
#[command(name = "hotseat")]
#[command(about = "Two players, one board, one terminal")]
struct Cli {
    /// Configuration file
    #[arg(long, default_value = "hotseat.toml", global = true)]
    config: PathBuf,
    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play interactively, reading moves from stdin
    Play {
        #[command(flatten)]
        setup: Setup,
        /// Print one JSON object per attempt
        #[arg(long)]
        json: bool,
    },
    /// Check a single move and exit with status 1 if it is rejected
    Check {
        /// Source square (0-63)
        from: u8,
        /// Destination square (0-63)
        to: u8,
        #[command(flatten)]
        setup: Setup,
    },
    /// Apply the moves in a file, stopping at the first rejected one
    Replay {
        /// File with one `FROM TO` move per line
        file: PathBuf,
        #[command(flatten)]
        setup: Setup,
        /// Print one JSON object per attempt
        #[arg(long)]
        json: bool,
    },
}

/// Starting position options shared by every subcommand.
#[derive(Args)]
struct Setup {
    /// Board layout, rows 0 to 7 separated by '/'
    #[arg(long, default_value = STARTING_LAYOUT)]
    layout: String,
    /// Color to move first
    #[arg(long, value_enum, default_value_t = Side::Black)]
    to_move: Side,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Black,
    White,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::Black => Color::Black,
            Side::White => Color::White,
        }
    }
}

impl Setup {
    fn game(&self) -> Result<Game> {
        Game::from_layout(&self.layout, self.to_move.into())
            .with_context(|| format!("cannot set up board from '{}'", self.layout))
    }
}

/// Picks the log level: `-v` flags win over the config, which must still be
/// valid.
fn log_level(verbose: u8, config: &Config) -> Result<Level> {
    let configured = config.log_level()?;
    Ok(match verbose {
        0 => configured.unwrap_or(Level::WARN),
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    })
}

fn init_logging(verbose: u8, config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose, config)?)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn square(index: u8) -> Result<Square> {
    Square::from_index(index).with_context(|| format!("square {} is off the board", index))
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = Config::load(&cli.config)
        .with_context(|| format!("cannot load {}", cli.config.display()))?;
    init_logging(cli.verbose, &config)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Play { setup, json } => {
            let options = Options {
                json,
                ..Options::default()
            };
            let mut session = Session::new(setup.game()?, &config.display, options);
            session.run(io::stdin().lock(), &mut out)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Check { from, to, setup } => {
            let mut game = setup.game()?;
            let (from, to) = (square(from)?, square(to)?);
            let Some(attempt) = MoveAttempt::from_board(game.board(), from, to) else {
                writeln!(out, "rejected: square {} is empty", from)?;
                return Ok(ExitCode::FAILURE);
            };
            match game.attempt(attempt) {
                Ok(report) => {
                    writeln!(out, "accepted: {} {}", attempt.piece, report.outcome.code())?;
                    writeln!(out, "{}", render::status(&game))?;
                    Ok(ExitCode::SUCCESS)
                }
                Err(reason) => {
                    writeln!(out, "rejected: {} ({})", reason.notification(), reason)?;
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Commands::Replay { file, setup, json } => {
            let reader = File::open(&file)
                .map(BufReader::new)
                .with_context(|| format!("cannot open {}", file.display()))?;
            let options = Options {
                json,
                stop_on_rejection: true,
                quiet: true,
            };
            let mut session = Session::new(setup.game()?, &config.display, options);
            let summary = session.run(reader, &mut out)?;
            tracing::info!(
                accepted = summary.accepted,
                rejected = summary.rejected,
                status = %render::status(session.game()),
                "replay finished"
            );
            if summary.rejected > 0 || summary.bad_input > 0 {
                Ok(ExitCode::FAILURE)
            } else {
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(level: Option<&str>) -> Config {
        Config {
            log_level: level.map(str::to_string),
            ..Config::default()
        }
    }

    #[test]
    fn verbosity_overrides_config() {
        assert_eq!(log_level(0, &config(None)).unwrap(), Level::WARN);
        assert_eq!(log_level(0, &config(Some("debug"))).unwrap(), Level::DEBUG);
        assert_eq!(log_level(1, &config(Some("error"))).unwrap(), Level::INFO);
        assert_eq!(log_level(3, &config(None)).unwrap(), Level::TRACE);
    }

    #[test]
    fn unknown_config_level_is_rejected_at_any_verbosity() {
        for verbose in 0..=3 {
            assert!(log_level(verbose, &config(Some("loud"))).is_err());
        }
    }
}
