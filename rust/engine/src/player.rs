use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;

/// A decision the player makes for one hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Take one more card
    Hit,
    /// Take no more cards
    Stand,
    /// Double the wager, take exactly one card, then stop
    Double,
    /// Turn a pair into two hands
    Split,
}

impl Move {
    pub fn as_str(&self) -> &'static str {
        match self {
            Move::Hit => "hit",
            Move::Stand => "stand",
            Move::Double => "double",
            Move::Split => "split",
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Token that does not name a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownMove(pub String);

impl fmt::Display for UnknownMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unrecognized move '{}'. Valid moves: hit (h), stand (st), double (d), split (sp)",
            self.0
        )
    }
}

impl std::error::Error for UnknownMove {}

impl FromStr for Move {
    type Err = UnknownMove;

    /// Case-insensitive: `hit`/`h`, `stand`/`st`, `double`/`d`, `split`/`sp`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hit" | "h" => Ok(Move::Hit),
            "stand" | "st" => Ok(Move::Stand),
            "double" | "d" => Ok(Move::Double),
            "split" | "sp" => Ok(Move::Split),
            _ => Err(UnknownMove(s.trim().to_string())),
        }
    }
}

/// The human at the table: a balance and the hands in play this round.
#[derive(Debug, Clone)]
pub struct Player {
    /// Current balance; only settlement and the blackjack bonus change it
    money: i64,
    /// Hands in play, more than one after a split
    hands: Vec<Hand>,
}

impl Player {
    pub fn new(money: i64) -> Self {
        Self {
            money,
            hands: Vec::new(),
        }
    }

    pub fn money(&self) -> i64 {
        self.money
    }

    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    pub fn hand(&self, index: usize) -> Result<&Hand, GameError> {
        self.hands.get(index).ok_or(GameError::NoSuchHand { index })
    }

    pub(crate) fn hand_mut(&mut self, index: usize) -> Result<&mut Hand, GameError> {
        self.hands
            .get_mut(index)
            .ok_or(GameError::NoSuchHand { index })
    }

    pub(crate) fn hands_mut(&mut self) -> &mut [Hand] {
        &mut self.hands
    }

    pub(crate) fn take_hand(&mut self, hand: Hand) {
        self.hands.push(hand);
    }

    /// Index of the first hand that still needs a decision.
    pub fn next_active_hand(&self) -> Option<usize> {
        self.hands.iter().position(|h| !h.is_done())
    }

    pub fn all_done(&self) -> bool {
        self.hands.iter().all(Hand::is_done)
    }

    pub(crate) fn adjust_money(&mut self, delta: i64) {
        self.money += delta;
    }

    /// Splits the pair at `index` into two hands and deals one replacement
    /// card to each. The new hand carries the same wager and is inserted
    /// right after the original so play continues in table order.
    ///
    /// Returns the index of the new hand.
    pub(crate) fn split_hand(
        &mut self,
        index: usize,
        replacements: [Card; 2],
    ) -> Result<usize, GameError> {
        let hand = self.hand_mut(index)?;
        if hand.is_done() || !hand.is_pair() {
            return Err(GameError::IllegalMove {
                mv: Move::Split,
                reason: "only an active pair can be split",
            });
        }
        let bet = hand.bet();
        let Some(moved) = hand.take_second() else {
            return Err(GameError::IllegalMove {
                mv: Move::Split,
                reason: "only an active pair can be split",
            });
        };
        hand.add_card(replacements[0]);

        let mut new_hand = Hand::new(bet);
        new_hand.add_card(moved);
        new_hand.add_card(replacements[1]);
        self.hands.insert(index + 1, new_hand);
        Ok(index + 1)
    }

    /// Discards every hand at the end of a round.
    pub fn muck(&mut self) {
        self.hands.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank as R, Suit as S};

    #[test]
    fn parses_all_tokens_case_insensitively() {
        assert_eq!("hit".parse(), Ok(Move::Hit));
        assert_eq!("H".parse(), Ok(Move::Hit));
        assert_eq!("Stand".parse(), Ok(Move::Stand));
        assert_eq!("st".parse(), Ok(Move::Stand));
        assert_eq!("DOUBLE".parse(), Ok(Move::Double));
        assert_eq!("d".parse(), Ok(Move::Double));
        assert_eq!("split".parse(), Ok(Move::Split));
        assert_eq!("Sp".parse(), Ok(Move::Split));
    }

    #[test]
    fn unknown_tokens_are_rejected_not_treated_as_stand() {
        assert!("s".parse::<Move>().is_err());
        assert!("".parse::<Move>().is_err());
        let err = "surrender".parse::<Move>().unwrap_err();
        assert!(err.to_string().contains("surrender"));
    }

    #[test]
    fn split_creates_independent_hand_after_original() {
        let mut player = Player::new(1000);
        let eights = vec![
            Card::new(R::Eight, S::Clubs),
            Card::new(R::Eight, S::Diamonds),
        ];
        player.take_hand(Hand::with_cards(eights, 25));
        let replacements = [
            Card::new(R::Three, S::Hearts),
            Card::new(R::Ten, S::Spades),
        ];
        let idx = player.split_hand(0, replacements).unwrap();
        assert_eq!(idx, 1);
        assert_eq!(player.hands().len(), 2);
        assert_eq!(player.hands()[0].total(), 11);
        assert_eq!(player.hands()[1].total(), 18);
        assert_eq!(player.hands()[1].bet(), 25);
        assert!(!player.hands()[0].is_done());
        assert!(!player.hands()[1].is_done());
    }

    #[test]
    fn muck_clears_hands() {
        let mut player = Player::new(10);
        player.take_hand(Hand::new(5));
        player.muck();
        assert!(player.hands().is_empty());
        assert_eq!(player.next_active_hand(), None);
    }
}
