//! Deal command handler for inspecting an opening hand.
//!
//! Deals the first four cards of a fresh shoe in table order (player,
//! player, dealer, dealer), so a seed shown here opens the same way under
//! `play --seed`.

use crate::config;
use crate::error::CliError;
use crate::formatters::format_cards;
use blackjack_engine::hand::Hand;
use blackjack_engine::shoe::Shoe;
use std::io::Write;

/// Handle the deal command.
///
/// Prints the seed, both opening hands with their totals, and a blackjack
/// notice for either side.
///
/// # Examples
///
/// ```ignore
/// use blackjack_cli::commands::handle_deal_command;
/// let mut out = Vec::new();
/// handle_deal_command(Some(42), &mut out).unwrap();
/// ```
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let cfg = config::load_with_sources()?
        .with_overrides(None, None, seed)?
        .config;
    let seed = cfg.seed.unwrap_or_else(rand::random);

    let mut shoe = Shoe::new_with_seed(cfg.decks, seed);
    let p1 = shoe.draw()?;
    let p2 = shoe.draw()?;
    let d1 = shoe.draw()?;
    let d2 = shoe.draw()?;
    let player = Hand::with_cards(vec![p1, p2], 0);
    let dealer = Hand::with_cards(vec![d1, d2], 0);

    writeln!(out, "Seed: {}", seed)?;
    writeln!(
        out,
        "Player: {} = {}",
        format_cards(player.cards()),
        player.total()
    )?;
    writeln!(
        out,
        "Dealer: {} = {}",
        format_cards(dealer.cards()),
        dealer.total()
    )?;
    if player.is_blackjack() {
        writeln!(out, "Player has blackjack")?;
    }
    if dealer.is_blackjack() {
        writeln!(out, "Dealer has blackjack")?;
    }
    writeln!(out, "Cards left: {}", shoe.remaining())?;
    Ok(())
}
