//! Input parsing and validation for interactive commands.
//!
//! This module turns raw prompt answers into bets and moves. The engine
//! re-validates both against the table; this layer only rejects text that
//! does not parse.

use blackjack_engine::player::Move;

/// Result type for parsing user input at the move prompt.
#[derive(Debug, PartialEq)]
pub enum ParseResult {
    /// Valid move parsed from input
    Move(Move),
    /// User entered quit command (q or quit)
    Quit,
    /// Invalid input with error message
    Invalid(String),
}

/// Result type for parsing user input at the bet prompt.
#[derive(Debug, PartialEq)]
pub enum BetInput {
    Amount(u32),
    Quit,
    Invalid(String),
}

fn is_quit(input: &str) -> bool {
    input == "q" || input == "quit"
}

/// Parse user input string into a Move or the quit command.
///
/// Accepts the following input formats (case-insensitive):
/// - "hit" or "h"
/// - "stand" or "st"
/// - "double" or "d"
/// - "split" or "sp"
/// - "q" or "quit"
///
/// # Example
///
/// ```rust
/// # use blackjack_cli::validation::{parse_move, ParseResult};
/// use blackjack_engine::player::Move;
///
/// assert_eq!(parse_move("Hit"), ParseResult::Move(Move::Hit));
/// assert_eq!(parse_move("sp"), ParseResult::Move(Move::Split));
/// assert_eq!(parse_move("q"), ParseResult::Quit);
///
/// match parse_move("fold") {
///     ParseResult::Invalid(msg) => assert!(msg.contains("Unrecognized")),
///     _ => panic!("Expected Invalid"),
/// }
/// ```
pub fn parse_move(input: &str) -> ParseResult {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return ParseResult::Invalid("Empty input".to_string());
    }
    if is_quit(&input) {
        return ParseResult::Quit;
    }
    match input.parse::<Move>() {
        Ok(mv) => ParseResult::Move(mv),
        Err(e) => ParseResult::Invalid(e.to_string()),
    }
}

/// Parse a wager: a positive whole number of dollars, optionally written
/// with a leading `$`.
///
/// ```rust
/// # use blackjack_cli::validation::{parse_bet, BetInput};
/// assert_eq!(parse_bet("100"), BetInput::Amount(100));
/// assert_eq!(parse_bet("$25"), BetInput::Amount(25));
/// assert_eq!(parse_bet("quit"), BetInput::Quit);
/// assert!(matches!(parse_bet("0"), BetInput::Invalid(_)));
/// ```
pub fn parse_bet(input: &str) -> BetInput {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return BetInput::Invalid("Empty input".to_string());
    }
    if is_quit(&input) {
        return BetInput::Quit;
    }
    let digits = input.strip_prefix('$').unwrap_or(&input);
    match digits.parse::<u32>() {
        Ok(amount) if amount > 0 => BetInput::Amount(amount),
        Ok(_) => BetInput::Invalid("Bet amount must be positive".to_string()),
        Err(_) => BetInput::Invalid(format!("Invalid bet amount '{}'", input)),
    }
}
