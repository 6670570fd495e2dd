//! Card, hand and round-event formatters for terminal display.
//!
//! This module provides pure functions for formatting blackjack game
//! elements for terminal output. It supports Unicode card symbols with
//! ASCII fallback for terminal environments that don't support Unicode
//! rendering.
//!
//! - **Unicode mode**: Uses ♥ ♦ ♣ ♠ symbols
//! - **ASCII mode**: Uses h d c s letters
//!
//! ## Example
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_cli::formatters::{format_card, format_cards};
//!
//! let ace_spades = Card::new(Rank::Ace, Suit::Spades);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//!
//! let hand = vec![ace_spades];
//! assert!(format_cards(&hand).starts_with("[A"));
//! ```

use blackjack_engine::cards::{Card, Rank, Suit};
use blackjack_engine::engine::RoundEvent;
use blackjack_engine::hand::Hand;
use blackjack_engine::settlement::Outcome;

/// Check if the terminal supports Unicode card symbols by detecting modern terminal environments.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals (TERM_PROGRAM),
/// or VS Code (VSCODE_INJECTION). On Unix-like systems, assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

/// Format a Suit as a string using Unicode symbols with ASCII fallback.
pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Rank as a string (2-10, J, Q, K, A).
pub fn format_rank(rank: &Rank) -> String {
    match rank {
        Rank::Two => "2",
        Rank::Three => "3",
        Rank::Four => "4",
        Rank::Five => "5",
        Rank::Six => "6",
        Rank::Seven => "7",
        Rank::Eight => "8",
        Rank::Nine => "9",
        Rank::Ten => "10",
        Rank::Jack => "J",
        Rank::Queen => "Q",
        Rank::King => "K",
        Rank::Ace => "A",
    }
    .to_string()
}

/// Format a Card as a string combining rank and suit, like "A♠" or "As".
pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_rank(&card.rank), format_suit(&card.suit))
}

/// Format a run of cards in bracket notation, "[A♠ K♥]" or "[]" if empty.
pub fn format_cards(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}

/// Format a hand with its total and wager, e.g. "[8♣ 3♥] = 11 (bet $50)".
pub fn format_hand(hand: &Hand) -> String {
    format!(
        "{} = {} (bet ${})",
        format_cards(hand.cards()),
        hand.total(),
        hand.bet()
    )
}

pub fn format_outcome(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Blackjack => "blackjack",
        Outcome::Win => "win",
        Outcome::Push => "push",
        Outcome::Loss => "loss",
    }
}

/// One display line per engine event. Hands are numbered from 1.
pub fn format_event(event: &RoundEvent) -> String {
    match event {
        RoundEvent::BetPlaced { amount } => format!("Player bets ${}", amount),
        RoundEvent::PlayerDealt { cards, total } => {
            format!("Player has {} = {}", format_cards(cards), total)
        }
        RoundEvent::DealerShows { card } => format!("Dealer shows {}", format_card(card)),
        RoundEvent::DealerBlackjack => "Dealer has blackjack".to_string(),
        RoundEvent::PlayerBlackjack { bonus } => format!("Blackjack! Paid ${}", bonus),
        RoundEvent::Hit { hand, card, total } => format!(
            "Hand {}: player hits, {} is dealt = {}",
            hand + 1,
            format_card(card),
            total
        ),
        RoundEvent::Stand { hand, total } => {
            format!("Hand {}: player stands on {}", hand + 1, total)
        }
        RoundEvent::Double {
            hand,
            bet,
            card,
            total,
        } => format!(
            "Hand {}: player doubles to ${}, {} is dealt = {}",
            hand + 1,
            bet,
            format_card(card),
            total
        ),
        RoundEvent::Split {
            hand,
            hand_cards,
            new_hand,
            new_hand_cards,
        } => format!(
            "Hand {} splits: hand {} {}, hand {} {}",
            hand + 1,
            hand + 1,
            format_cards(hand_cards),
            new_hand + 1,
            format_cards(new_hand_cards)
        ),
        RoundEvent::Bust { hand, total } => format!("Hand {} busts with {}", hand + 1, total),
        RoundEvent::DealerReveals { cards, total } => {
            format!("Dealer has {} = {}", format_cards(cards), total)
        }
        RoundEvent::DealerHits { card, total } => {
            format!("Dealer hits, {} is dealt = {}", format_card(card), total)
        }
        RoundEvent::DealerStands { total } => format!("Dealer stands on {}", total),
        RoundEvent::DealerBusts { total } => format!("Dealer busts with {}", total),
        RoundEvent::HandSettled {
            hand,
            outcome,
            gain,
        } => format!(
            "Hand {}: {} ({}{})",
            hand + 1,
            format_outcome(*outcome),
            if *gain < 0 { "-$" } else { "+$" },
            gain.abs()
        ),
        RoundEvent::Balance { money } => format!("Current stack: ${}", money),
    }
}
