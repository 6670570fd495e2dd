use crate::cards::{Card, Rank};

/// Highest total that is not a bust.
pub const BLACKJACK_TOTAL: u32 = 21;

/// Sums per-card values. Aces always count 11; a hand is never re-valued
/// downward to avoid a bust.
pub fn hand_total(cards: &[Card]) -> u32 {
    cards.iter().map(Card::value).sum()
}

/// Two cards, one Ace and one ten-value card.
///
/// Only meaningful for the initial deal; callers must not ask about hands
/// that have drawn further cards.
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::hand::is_blackjack;
///
/// let ace = Card::new(Rank::Ace, Suit::Spades);
/// let queen = Card::new(Rank::Queen, Suit::Hearts);
/// assert!(is_blackjack(&[ace, queen]));
/// assert!(!is_blackjack(&[queen, queen]));
/// ```
pub fn is_blackjack(cards: &[Card]) -> bool {
    match cards {
        [a, b] => {
            (a.rank == Rank::Ace && b.rank.is_ten_value())
                || (b.rank == Rank::Ace && a.rank.is_ten_value())
        }
        _ => false,
    }
}

pub fn is_bust(cards: &[Card]) -> bool {
    hand_total(cards) > BLACKJACK_TOTAL
}

/// A player's or the dealer's cards together with the wager riding on them.
///
/// `total` is cached and recomputed on every change to `cards`. Both `done`
/// and `settled` only ever move from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    total: u32,
    done: bool,
    settled: bool,
    bet: u32,
}

impl Hand {
    pub fn new(bet: u32) -> Self {
        Self {
            cards: Vec::with_capacity(4),
            total: 0,
            done: false,
            settled: false,
            bet,
        }
    }

    pub fn with_cards(cards: Vec<Card>, bet: u32) -> Self {
        let total = hand_total(&cards);
        Self {
            cards,
            total,
            done: false,
            settled: false,
            bet,
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn bet(&self) -> u32 {
        self.bet
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn is_bust(&self) -> bool {
        self.total > BLACKJACK_TOTAL
    }

    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Exactly two cards of the same rank.
    pub fn is_pair(&self) -> bool {
        matches!(self.cards.as_slice(), [a, b] if a.rank == b.rank)
    }

    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        self.recompute();
    }

    /// Removes the second card so it can seed a new hand.
    pub(crate) fn take_second(&mut self) -> Option<Card> {
        if self.cards.len() < 2 {
            return None;
        }
        let card = self.cards.remove(1);
        self.recompute();
        Some(card)
    }

    pub(crate) fn set_bet(&mut self, bet: u32) {
        self.bet = bet;
    }

    pub(crate) fn mark_done(&mut self) {
        self.done = true;
    }

    pub(crate) fn mark_settled(&mut self) {
        self.done = true;
        self.settled = true;
    }

    fn recompute(&mut self) {
        self.total = hand_total(&self.cards);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank as R, Suit as S};

    fn c(rank: R) -> Card {
        Card::new(rank, S::Clubs)
    }

    #[test]
    fn ace_king_is_21() {
        assert_eq!(hand_total(&[c(R::Ace), c(R::King)]), 21);
    }

    #[test]
    fn ten_ten_two_busts() {
        let cards = [c(R::Ten), c(R::Ten), c(R::Two)];
        assert_eq!(hand_total(&cards), 22);
        assert!(is_bust(&cards));
    }

    #[test]
    fn aces_never_downgrade() {
        assert_eq!(hand_total(&[c(R::Ace), c(R::Ace)]), 22);
        assert_eq!(hand_total(&[c(R::Ace), c(R::Nine), c(R::Five)]), 25);
    }

    #[test]
    fn blackjack_detection() {
        assert!(is_blackjack(&[c(R::Ace), c(R::Queen)]));
        assert!(is_blackjack(&[c(R::Ten), c(R::Ace)]));
        assert!(!is_blackjack(&[c(R::Seven), c(R::Ace), c(R::Three)]));
        assert!(!is_blackjack(&[c(R::King), c(R::Queen)]));
        assert!(!is_blackjack(&[c(R::Ace), c(R::Ace)]));
    }

    #[test]
    fn total_tracks_card_changes() {
        let mut hand = Hand::with_cards(vec![c(R::Eight), c(R::Eight)], 10);
        assert_eq!(hand.total(), 16);
        assert!(hand.is_pair());
        let second = hand.take_second().unwrap();
        assert_eq!(second.rank, R::Eight);
        assert_eq!(hand.total(), 8);
        hand.add_card(c(R::Three));
        assert_eq!(hand.total(), 11);
    }

    #[test]
    fn pair_means_same_rank_not_same_value() {
        let hand = Hand::with_cards(vec![c(R::Ten), c(R::King)], 10);
        assert!(!hand.is_pair());
    }
}
