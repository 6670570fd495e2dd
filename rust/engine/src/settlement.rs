use serde::{Deserialize, Serialize};

use crate::hand::BLACKJACK_TOTAL;

/// How a single player hand ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// Paid 3:2 on the deal, never compared with the dealer
    Blackjack,
    Win,
    Push,
    Loss,
}

/// Bonus for a blackjack on the initial deal: one and a half times the
/// wager, rounded down.
pub fn blackjack_bonus(bet: u32) -> i64 {
    i64::from(bet) * 3 / 2
}

/// Compares one finished player hand against the dealer's final total.
///
/// A busted player hand loses before the dealer is looked at.
///
/// ```
/// use blackjack_engine::settlement::{settle_hand, Outcome};
///
/// assert_eq!(settle_hand(20, 19, 10), (Outcome::Win, 10));
/// assert_eq!(settle_hand(18, 18, 10), (Outcome::Push, 0));
/// assert_eq!(settle_hand(22, 23, 10), (Outcome::Loss, -10));
/// ```
pub fn settle_hand(player_total: u32, dealer_total: u32, bet: u32) -> (Outcome, i64) {
    let bet = i64::from(bet);
    if player_total > BLACKJACK_TOTAL {
        (Outcome::Loss, -bet)
    } else if dealer_total > BLACKJACK_TOTAL || player_total > dealer_total {
        (Outcome::Win, bet)
    } else if player_total == dealer_total {
        (Outcome::Push, 0)
    } else {
        (Outcome::Loss, -bet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn higher_total_wins_the_bet() {
        assert_eq!(settle_hand(20, 19, 100), (Outcome::Win, 100));
    }

    #[test]
    fn equal_totals_push() {
        assert_eq!(settle_hand(18, 18, 100), (Outcome::Push, 0));
    }

    #[test]
    fn player_bust_loses_whatever_the_dealer_has() {
        assert_eq!(settle_hand(22, 19, 100), (Outcome::Loss, -100));
        assert_eq!(settle_hand(22, 26, 100), (Outcome::Loss, -100));
    }

    #[test]
    fn dealer_bust_pays_standing_hand() {
        assert_eq!(settle_hand(20, 23, 100), (Outcome::Win, 100));
        assert_eq!(settle_hand(12, 23, 100), (Outcome::Win, 100));
    }

    #[test]
    fn lower_total_loses() {
        assert_eq!(settle_hand(17, 20, 40), (Outcome::Loss, -40));
    }

    #[test]
    fn bonus_is_three_to_two_rounded_down() {
        assert_eq!(blackjack_bonus(100), 150);
        assert_eq!(blackjack_bonus(5), 7);
    }
}
