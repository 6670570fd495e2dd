//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "blackjack",
    version,
    about = "Single-player blackjack against the house"
)]
pub struct BlackjackCli {
    /// Log engine decisions to stderr (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play interactively, one prompt per bet and move
    Play {
        /// Stop after this many settled rounds
        #[arg(long)]
        rounds: Option<u32>,
        /// Shoe seed, for a reproducible card order
        #[arg(long)]
        seed: Option<u64>,
        /// Number of 52-card decks in the shoe
        #[arg(long)]
        decks: Option<u8>,
        /// Starting money
        #[arg(long)]
        money: Option<i64>,
        /// Append each settled round to this JSONL file
        #[arg(long)]
        log: Option<String>,
    },
    /// Play rounds unattended with a hit-below-17 policy
    Sim {
        #[arg(long)]
        rounds: u32,
        /// Wager per round, capped at the remaining money
        #[arg(long, default_value_t = 10)]
        bet: u32,
        #[arg(long)]
        seed: Option<u64>,
        /// Write every settled round to this JSONL file
        #[arg(long)]
        output: Option<String>,
    },
    /// Deal one opening hand and show it
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the resolved configuration and where each value came from
    Cfg,
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Play { .. } => "play",
            Commands::Sim { .. } => "sim",
            Commands::Deal { .. } => "deal",
            Commands::Cfg => "cfg",
        }
    }
}
