use serde::{Deserialize, Serialize};

/// Number of distinct cards in one standard deck.
pub const CARDS_PER_DECK: u16 = 52;

/// Represents one of the four suits in a standard 52-card deck.
/// The declaration order matches the identifier reduction `id % 4`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit (♣)
    Clubs,
    /// Spades suit (♠)
    Spades,
    /// Hearts suit (♥)
    Hearts,
    /// Diamonds suit (♦)
    Diamonds,
}

/// Represents the rank of a playing card from Two through Ace.
/// The declaration order matches the identifier reduction `id % 13`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Rank {
    /// Rank 2
    Two,
    /// Rank 3
    Three,
    /// Rank 4
    Four,
    /// Rank 5
    Five,
    /// Rank 6
    Six,
    /// Rank 7
    Seven,
    /// Rank 8
    Eight,
    /// Rank 9
    Nine,
    /// Rank 10
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Blackjack value of a single card of this rank.
    ///
    /// Ten and the face cards count 10, an Ace always counts 11.
    pub fn value(self) -> u32 {
        match self {
            Rank::Two => 2,
            Rank::Three => 3,
            Rank::Four => 4,
            Rank::Five => 5,
            Rank::Six => 6,
            Rank::Seven => 7,
            Rank::Eight => 8,
            Rank::Nine => 9,
            Rank::Ten | Rank::Jack | Rank::Queen | Rank::King => 10,
            Rank::Ace => 11,
        }
    }

    pub fn is_ten_value(self) -> bool {
        matches!(self, Rank::Ten | Rank::Jack | Rank::Queen | Rank::King)
    }
}

/// A single playing card.
///
/// Cards are built from an identifier in `0..52`; copies of the same
/// identifier from different decks compare equal.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct Card {
    /// The rank of the card (Two through Ace)
    pub rank: Rank,
    /// The suit of the card
    pub suit: Suit,
}

impl Card {
    pub fn new(rank: Rank, suit: Suit) -> Self {
        Self { rank, suit }
    }

    /// Reduces a card identifier to rank and suit.
    ///
    /// ```
    /// use blackjack_engine::cards::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::from_id(0), Card::new(Rank::Two, Suit::Clubs));
    /// assert_eq!(Card::from_id(12), Card::new(Rank::Ace, Suit::Clubs));
    /// assert_eq!(Card::from_id(13), Card::new(Rank::Two, Suit::Spades));
    /// ```
    pub fn from_id(id: u16) -> Self {
        let rank = all_ranks()[(id % 13) as usize];
        let suit = all_suits()[(id % 4) as usize];
        Self { rank, suit }
    }

    pub fn value(&self) -> u32 {
        self.rank.value()
    }
}

pub fn all_suits() -> [Suit; 4] {
    [Suit::Clubs, Suit::Spades, Suit::Hearts, Suit::Diamonds]
}

pub fn all_ranks() -> [Rank; 13] {
    [
        Rank::Two,
        Rank::Three,
        Rank::Four,
        Rank::Five,
        Rank::Six,
        Rank::Seven,
        Rank::Eight,
        Rank::Nine,
        Rank::Ten,
        Rank::Jack,
        Rank::Queen,
        Rank::King,
        Rank::Ace,
    ]
}

/// One standard deck, in identifier order.
pub fn full_deck() -> Vec<Card> {
    (0..CARDS_PER_DECK).map(Card::from_id).collect()
}
