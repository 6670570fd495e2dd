//! # Play Command
//!
//! Interactive blackjack at the terminal.
//!
//! The engine drives each round through [`Decisions`]; [`TerminalPlayer`]
//! answers its bet and move requests from stdin and prints every
//! [`RoundEvent`] as it happens.
//!
//! ## Features
//!
//! - Bets and moves are re-asked after unparseable input or a refusal
//!   from the engine
//! - `q`/`quit` or end of input leaves the table
//! - Optional JSONL history of settled rounds (`--log`)
//! - Ends with exit code 3 when the money runs out

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_card, format_event, format_hand};
use crate::io_utils::read_stdin_line;
use crate::ui;
use crate::validation::{BetInput, ParseResult, parse_bet, parse_move};
use blackjack_engine::engine::{Decisions, Engine, RoundEvent, RoundOutcome, TableView};
use blackjack_engine::errors::GameError;
use blackjack_engine::logger::RoundLogger;
use blackjack_engine::player::Move;
use std::io::{self, BufRead, Write};

/// Options of the `play` subcommand; `None` falls back to configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayOptions {
    pub rounds: Option<u32>,
    pub seed: Option<u64>,
    pub decks: Option<u8>,
    pub money: Option<i64>,
    pub log: Option<String>,
}

/// Answers engine requests from a line-oriented terminal.
///
/// The first write failure is kept and ends the session: every later
/// request is answered with `None`.
pub struct TerminalPlayer<'a> {
    stdin: &'a mut dyn BufRead,
    out: &'a mut dyn Write,
    err: &'a mut dyn Write,
    io_error: Option<io::Error>,
}

impl<'a> TerminalPlayer<'a> {
    pub fn new(stdin: &'a mut dyn BufRead, out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Self {
            stdin,
            out,
            err,
            io_error: None,
        }
    }

    pub fn take_io_error(&mut self) -> Option<io::Error> {
        self.io_error.take()
    }

    fn check(&mut self, result: io::Result<()>) -> Option<()> {
        match result {
            Ok(()) => Some(()),
            Err(e) => {
                if self.io_error.is_none() {
                    self.io_error = Some(e);
                }
                None
            }
        }
    }

    fn say(&mut self, line: &str) -> Option<()> {
        let r = writeln!(self.out, "{}", line);
        self.check(r)
    }

    fn complain(&mut self, msg: &str) -> Option<()> {
        let r = ui::write_error(self.err, msg);
        self.check(r)
    }

    /// Prompts and reads one line; `None` on end of input or a failed write.
    fn ask(&mut self, text: &str) -> Option<String> {
        if self.io_error.is_some() {
            return None;
        }
        let r = ui::prompt(self.out, text);
        self.check(r)?;
        read_stdin_line(self.stdin)
    }
}

impl Decisions for TerminalPlayer<'_> {
    fn bet(&mut self, money: i64) -> Option<u32> {
        loop {
            let line = self.ask(&format!("Bet (you have ${}, q to quit): ", money))?;
            match parse_bet(&line) {
                BetInput::Amount(amount) => return Some(amount),
                BetInput::Quit => return None,
                BetInput::Invalid(msg) => self.complain(&msg)?,
            }
        }
    }

    fn next_move(&mut self, table: &TableView<'_>, hand: usize) -> Option<Move> {
        if let Some(up) = table.dealer_up {
            self.say(&format!("Dealer shows {}", format_card(&up)))?;
        }
        let current = table.hands.get(hand)?;
        self.say(&format!("Hand {}: {}", hand + 1, format_hand(current)))?;
        loop {
            let line = self.ask("Move (hit/stand/double/split, q to quit): ")?;
            match parse_move(&line) {
                ParseResult::Move(mv) => return Some(mv),
                ParseResult::Quit => return None,
                ParseResult::Invalid(msg) => self.complain(&msg)?,
            }
        }
    }

    fn rejected(&mut self, error: &GameError) {
        let _ = self.complain(&error.to_string());
    }

    fn observe(&mut self, event: &RoundEvent) {
        let _ = self.say(&format_event(event));
    }
}

/// Handle the play command: interactive rounds until the player quits, the
/// round limit is reached or the money runs out.
///
/// # Errors
///
/// - `CliError::InvalidInput` for `--rounds 0`
/// - `CliError::Config` for an invalid configuration
/// - `CliError::OutOfMoney` when a new round cannot be funded
/// - `CliError::Engine` when the shoe runs dry
/// - `CliError::Io` when output or the history file cannot be written
pub fn handle_play_command(
    opts: PlayOptions,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if opts.rounds == Some(0) {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let resolved =
        config::load_with_sources()?.with_overrides(opts.decks, opts.money, opts.seed)?;
    let cfg = resolved.config;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    let mut logger = opts.log.as_deref().map(RoundLogger::create).transpose()?;

    writeln!(
        out,
        "blackjack: decks={} money=${} seed={}",
        cfg.decks, cfg.starting_money, seed
    )?;

    let mut engine = Engine::new(cfg.engine_config(), seed);
    let result = play_rounds(&mut engine, opts.rounds, logger.as_mut(), stdin, out, err);

    writeln!(
        out,
        "Final money: ${} after {} rounds",
        engine.player().money(),
        engine.rounds_played()
    )?;
    result
}

fn play_rounds(
    engine: &mut Engine,
    limit: Option<u32>,
    mut logger: Option<&mut RoundLogger>,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let seed = engine.seed();
    let mut player = TerminalPlayer::new(stdin, out, err);

    loop {
        if let Some(n) = limit
            && engine.rounds_played() >= n
        {
            return Ok(());
        }
        player
            .say(&format!("Round {}", engine.rounds_played() + 1))
            .ok_or_else(|| io::Error::other("output closed"))?;

        let outcome = engine.play_round(&mut player);
        if let Some(e) = player.take_io_error() {
            return Err(CliError::Io(e));
        }
        match outcome? {
            RoundOutcome::Completed(summary) => {
                if let Some(l) = logger.as_deref_mut() {
                    l.log_round(Some(seed), &summary)?;
                }
            }
            RoundOutcome::Quit => {
                player
                    .say("Goodbye.")
                    .ok_or_else(|| io::Error::other("output closed"))?;
                return Ok(());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn opts(seed: u64) -> PlayOptions {
        PlayOptions {
            seed: Some(seed),
            ..PlayOptions::default()
        }
    }

    #[test]
    fn quit_at_first_bet_prompt() {
        let mut stdin = Cursor::new(b"q\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_play_command(opts(3), &mut stdin, &mut out, &mut err).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Bet (you have $1000"));
        assert!(out.contains("Goodbye."));
        assert!(out.contains("Final money: $1000 after 0 rounds"));
    }

    #[test]
    fn zero_rounds_is_rejected() {
        let mut stdin = Cursor::new(Vec::new());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let opts = PlayOptions {
            rounds: Some(0),
            ..opts(1)
        };
        let res = handle_play_command(opts, &mut stdin, &mut out, &mut err);
        assert!(matches!(res, Err(CliError::InvalidInput(_))));
    }

    #[test]
    fn garbage_bet_is_reasked() {
        let mut stdin = Cursor::new(b"lots\n0\nq\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_play_command(opts(3), &mut stdin, &mut out, &mut err).unwrap();
        let out = String::from_utf8(out).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert_eq!(out.matches("Bet (you have").count(), 3);
        assert!(err.contains("Invalid bet amount 'lots'"));
        assert!(err.contains("Bet amount must be positive"));
    }

    #[test]
    fn bet_above_balance_is_refused_by_the_engine() {
        let mut stdin = Cursor::new(b"5000\nq\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_play_command(opts(3), &mut stdin, &mut out, &mut err).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("Error: Insufficient funds"), "{}", err);
    }

    #[test]
    fn standing_plays_one_full_round() {
        // stand answers are spare: a dealt blackjack needs none
        let mut stdin = Cursor::new(b"100\nstand\nstand\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let opts = PlayOptions {
            rounds: Some(1),
            ..opts(21)
        };
        handle_play_command(opts, &mut stdin, &mut out, &mut err).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Round 1"));
        assert!(out.contains("Player bets $100"));
        assert!(out.contains("Player has ["));
        assert!(out.contains("Current stack: $"));
        assert!(out.contains("after 1 rounds"));
    }

    #[test]
    fn round_history_is_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("hist/rounds.jsonl");
        let mut stdin = Cursor::new(b"10\nstand\nstand\n10\nstand\nstand\n".to_vec());
        let mut out = Vec::new();
        let mut err = Vec::new();
        let opts = PlayOptions {
            rounds: Some(2),
            log: Some(path.to_string_lossy().to_string()),
            ..opts(5)
        };
        handle_play_command(opts, &mut stdin, &mut out, &mut err).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["seed"], 5);
        assert_eq!(first["bet"], 10);
        assert!(first["round_id"].as_str().unwrap().ends_with("-000001"));
    }
}
