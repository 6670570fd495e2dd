//! Simulation command handler.
//!
//! Plays rounds unattended with a player that copies the dealer: hit below
//! 17, stand otherwise, never double or split. Useful for checking the
//! house edge of the table rules and for producing round histories.

use crate::config;
use crate::error::CliError;
use crate::ui;
use blackjack_engine::dealer::DEALER_STANDS_ON;
use blackjack_engine::engine::{Decisions, Engine, RoundOutcome, TableView};
use blackjack_engine::errors::GameError;
use blackjack_engine::logger::RoundLogger;
use blackjack_engine::player::Move;
use blackjack_engine::settlement::Outcome;
use std::io::Write;

/// Bets a fixed amount, capped at the balance, and draws to 17.
#[derive(Debug, Clone, Copy)]
pub struct MimicDealer {
    pub bet: u32,
}

impl Decisions for MimicDealer {
    fn bet(&mut self, money: i64) -> Option<u32> {
        let cap = u32::try_from(money).unwrap_or(u32::MAX);
        Some(self.bet.min(cap))
    }

    fn next_move(&mut self, table: &TableView<'_>, hand: usize) -> Option<Move> {
        let total = table.hands.get(hand)?.total();
        Some(if total < DEALER_STANDS_ON {
            Move::Hit
        } else {
            Move::Stand
        })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Tally {
    rounds: u32,
    wins: u32,
    losses: u32,
    pushes: u32,
    blackjacks: u32,
}

impl Tally {
    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Blackjack => self.blackjacks += 1,
            Outcome::Win => self.wins += 1,
            Outcome::Push => self.pushes += 1,
            Outcome::Loss => self.losses += 1,
        }
    }
}

/// Handle the sim command.
///
/// Stops early, with a warning, when the shoe runs dry. Running out of
/// money ends the run with `CliError::OutOfMoney` after the summary is
/// printed.
pub fn handle_sim_command(
    rounds: u32,
    bet: u32,
    seed: Option<u64>,
    output: Option<String>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if rounds == 0 {
        ui::write_error(err, "rounds must be >= 1")?;
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }
    if bet == 0 {
        ui::write_error(err, "bet must be >= 1")?;
        return Err(CliError::InvalidInput("bet must be >= 1".to_string()));
    }

    let cfg = config::load_with_sources()?
        .with_overrides(None, None, seed)?
        .config;
    let seed = cfg.seed.unwrap_or_else(rand::random);
    let mut logger = output.as_deref().map(RoundLogger::create).transpose()?;

    writeln!(out, "sim: rounds={} bet={} seed={}", rounds, bet, seed)?;

    let mut engine = Engine::new(cfg.engine_config(), seed);
    let mut policy = MimicDealer { bet };
    let mut tally = Tally::default();
    let mut stop = None;

    while tally.rounds < rounds {
        match engine.play_round(&mut policy) {
            Ok(RoundOutcome::Completed(summary)) => {
                tally.rounds += 1;
                summary.hands.iter().for_each(|h| tally.record(h.outcome));
                if let Some(l) = logger.as_mut() {
                    l.log_round(Some(seed), &summary)?;
                }
            }
            Ok(RoundOutcome::Quit) => break,
            Err(GameError::PoolExhausted) => {
                ui::display_warning(
                    err,
                    &format!("Shoe exhausted after {} rounds", tally.rounds),
                )?;
                break;
            }
            Err(e) => {
                stop = Some(e);
                break;
            }
        }
    }

    writeln!(
        out,
        "Played {} rounds: {} wins, {} losses, {} pushes, {} blackjacks",
        tally.rounds, tally.wins, tally.losses, tally.pushes, tally.blackjacks
    )?;
    writeln!(out, "Final money: ${}", engine.player().money())?;

    match stop {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackjack_engine::cards::{Card, Rank, Suit};
    use blackjack_engine::hand::Hand;

    #[test]
    fn policy_hits_below_seventeen() {
        let sixteen = vec![
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Six, Suit::Hearts),
        ];
        let seventeen = vec![
            Card::new(Rank::Ten, Suit::Clubs),
            Card::new(Rank::Seven, Suit::Hearts),
        ];
        let hands = vec![
            Hand::with_cards(sixteen, 10),
            Hand::with_cards(seventeen, 10),
        ];
        let table = TableView {
            hands: &hands,
            dealer_up: None,
            money: 100,
        };
        let mut policy = MimicDealer { bet: 10 };
        assert_eq!(policy.next_move(&table, 0), Some(Move::Hit));
        assert_eq!(policy.next_move(&table, 1), Some(Move::Stand));
        assert_eq!(policy.next_move(&table, 2), None);
    }

    #[test]
    fn policy_bets_at_most_the_balance() {
        let mut policy = MimicDealer { bet: 50 };
        assert_eq!(policy.bet(1000), Some(50));
        assert_eq!(policy.bet(20), Some(20));
    }

    #[test]
    fn sim_reports_tally() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(5, 10, Some(42), None, &mut out, &mut err).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("sim: rounds=5 bet=10 seed=42"));
        assert!(out.contains("Played 5 rounds:"), "{}", out);
        assert!(out.contains("Final money: $"));
    }

    #[test]
    fn sim_is_reproducible_with_a_seed() {
        let run = || {
            let mut out = Vec::new();
            let mut err = Vec::new();
            handle_sim_command(20, 25, Some(7), None, &mut out, &mut err).unwrap();
            String::from_utf8(out).unwrap()
        };
        assert_eq!(run(), run());
    }

    #[test]
    fn long_sim_stops_when_the_shoe_runs_dry() {
        // one deck would last about ten rounds; the default six last ~60
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_sim_command(10_000, 1, Some(3), None, &mut out, &mut err).unwrap();
        let err = String::from_utf8(err).unwrap();
        assert!(err.contains("WARNING: Shoe exhausted after"), "{}", err);
    }

    #[test]
    fn zero_rounds_or_bet_is_invalid() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let no_rounds = handle_sim_command(0, 10, None, None, &mut out, &mut err);
        assert!(no_rounds.is_err());
        let no_bet = handle_sim_command(1, 0, None, None, &mut out, &mut err);
        assert!(no_bet.is_err());
    }
}
