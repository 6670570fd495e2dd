use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::cards::{full_deck, Card, CARDS_PER_DECK};
use crate::errors::GameError;

/// The pool of undrawn cards for a session.
///
/// Holds `decks` full decks at creation and only ever shrinks: there is
/// no reshuffle, a long session eventually runs the shoe dry.
#[derive(Debug)]
pub struct Shoe {
    cards: Vec<Card>,
    capacity: usize,
    rng: ChaCha20Rng,
}

impl Shoe {
    pub fn new_with_seed(decks: u8, seed: u64) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * CARDS_PER_DECK as usize);
        for _ in 0..decks {
            cards.extend(full_deck());
        }
        let capacity = cards.len();
        Self {
            cards,
            capacity,
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Removes one uniformly chosen card from the pool.
    ///
    /// # Errors
    ///
    /// [`GameError::PoolExhausted`] once every card has been drawn.
    pub fn draw(&mut self) -> Result<Card, GameError> {
        if self.cards.is_empty() {
            return Err(GameError::PoolExhausted);
        }
        let idx = self.rng.random_range(0..self.cards.len());
        // order of the remaining cards is irrelevant, so swap_remove is fine
        let card = self.cards.swap_remove(idx);
        tracing::trace!(remaining = self.cards.len(), ?card, "card drawn");
        Ok(card)
    }

    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
