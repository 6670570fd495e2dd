use crate::cards::Card;
use crate::errors::GameError;
use crate::hand::Hand;

/// The dealer stands on this total or above.
pub const DEALER_STANDS_ON: u32 = 17;

/// The house: one hand, no wager, no decisions.
#[derive(Debug, Clone, Default)]
pub struct Dealer {
    hand: Option<Hand>,
}

impl Dealer {
    pub fn new() -> Self {
        Self { hand: None }
    }

    pub fn hand(&self) -> Option<&Hand> {
        self.hand.as_ref()
    }

    /// The card shown to the player during the deal.
    pub fn up_card(&self) -> Option<Card> {
        self.hand.as_ref().and_then(|h| h.cards().first().copied())
    }

    pub fn total(&self) -> u32 {
        self.hand.as_ref().map_or(0, Hand::total)
    }

    pub(crate) fn set_hand(&mut self, hand: Hand) {
        self.hand = Some(hand);
    }

    /// Draws while the total is below 17, then stands, bust or not.
    ///
    /// Returns the cards drawn in order.
    pub(crate) fn play<F>(&mut self, mut draw: F) -> Result<Vec<Card>, GameError>
    where
        F: FnMut() -> Result<Card, GameError>,
    {
        let hand = self.hand.as_mut().ok_or(GameError::NoRoundInProgress)?;
        let mut drawn = Vec::new();
        while hand.total() < DEALER_STANDS_ON {
            let card = draw()?;
            hand.add_card(card);
            drawn.push(card);
        }
        hand.mark_done();
        Ok(drawn)
    }

    pub fn muck(&mut self) {
        self.hand = None;
    }
}
