//! # Blackjack CLI Library
//!
//! Command-line front end for the `blackjack-engine` crate: interactive
//! play, unattended simulation, single deals and configuration display.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand, reading player
//! input from the process stdin. [`run_with_input`] takes the input stream
//! explicitly and is what tests drive.
//!
//! ## Example Usage
//!
//! ```no_run
//! use std::io;
//! let args = vec!["blackjack", "play", "--rounds", "10"];
//! let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Play rounds interactively
//! - `sim`: Play rounds with a fixed draw-to-17 policy
//! - `deal`: Deal one opening hand for inspection
//! - `cfg`: Display current configuration settings
//!
//! ## Exit Codes
//!
//! `0` on success, `2` on errors, `3` when the session ended because the
//! player ran out of money.

use clap::Parser;
use std::io::{BufRead, Write};

pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
mod macros;
pub mod ui;
pub mod validation;

use cli::{BlackjackCli, Commands};
use commands::{
    PlayOptions, handle_cfg_command, handle_deal_command, handle_play_command, handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "deal", "cfg"];

/// Main entry point for the CLI application.
///
/// # Returns
///
/// Exit code, see [`exit_code`].
///
/// # Example
///
/// ```
/// use std::io;
/// let args = vec!["blackjack", "deal", "--seed", "42"];
/// let code = blackjack_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// [`run`] with an explicit input stream for the interactive commands.
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match BlackjackCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return report_usage(e, out, err),
    };

    logging::init_logging(cli.verbose);
    tracing::debug!(command = cli.cmd.name(), "dispatching");

    let result = match cli.cmd {
        Commands::Play {
            rounds,
            seed,
            decks,
            money,
            log,
        } => {
            let opts = PlayOptions {
                rounds,
                seed,
                decks,
                money,
                log,
            };
            handle_play_command(opts, stdin, out, err)
        }
        Commands::Sim {
            rounds,
            bet,
            seed,
            output,
        } => handle_sim_command(rounds, bet, seed, output, out, err),
        Commands::Deal { seed } => handle_deal_command(seed, out),
        Commands::Cfg => handle_cfg_command(out, err),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(CliError::OutOfMoney(money)) => {
            write_or_exit!(err, "Out of money (balance ${}). Game over.", money);
            exit_code::OUT_OF_MONEY
        }
        Err(e) => {
            write_or_exit!(err, "Error: {}", e);
            exit_code::ERROR
        }
    }
}

fn report_usage(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
        if write!(out, "{}", e).is_err() {
            return exit_code::ERROR;
        }
        return exit_code::SUCCESS;
    }

    write_or_exit!(err, "{}", e);
    write_or_exit!(err, "Usage: blackjack <command> [options]\n");
    write_or_exit!(err, "Commands:");
    for c in COMMANDS {
        write_or_exit!(err, "  {}", c);
    }
    write_or_exit!(err, "\nFor full help, run: blackjack --help");
    exit_code::ERROR
}
