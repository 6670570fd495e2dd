use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::dealer::Dealer;
use crate::errors::GameError;
use crate::hand::Hand;
use crate::player::{Move, Player};
use crate::rules::{validate_bet, validate_move, ValidatedMove};
use crate::settlement::{blackjack_bonus, settle_hand, Outcome};
use crate::shoe::Shoe;

/// Default number of decks in the shoe.
pub const DEFAULT_DECKS: u8 = 6;
/// Default bankroll at the start of a session.
pub const STARTING_MONEY: i64 = 1000;

/// Table settings fixed for the lifetime of an [`Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub decks: u8,
    pub starting_money: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            decks: DEFAULT_DECKS,
            starting_money: STARTING_MONEY,
        }
    }
}

/// Everything a front end needs to render what just happened.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RoundEvent {
    BetPlaced { amount: u32 },
    PlayerDealt { cards: Vec<Card>, total: u32 },
    DealerShows { card: Card },
    /// The dealer's two cards form a blackjack; announced, not settled early
    DealerBlackjack,
    PlayerBlackjack { bonus: i64 },
    Hit { hand: usize, card: Card, total: u32 },
    Stand { hand: usize, total: u32 },
    Double {
        hand: usize,
        bet: u32,
        card: Card,
        total: u32,
    },
    Split {
        hand: usize,
        hand_cards: Vec<Card>,
        new_hand: usize,
        new_hand_cards: Vec<Card>,
    },
    Bust { hand: usize, total: u32 },
    DealerReveals { cards: Vec<Card>, total: u32 },
    DealerHits { card: Card, total: u32 },
    DealerStands { total: u32 },
    DealerBusts { total: u32 },
    HandSettled {
        hand: usize,
        outcome: Outcome,
        gain: i64,
    },
    Balance { money: i64 },
}

/// Final state of one player hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandResult {
    pub cards: Vec<Card>,
    pub total: u32,
    pub bet: u32,
    pub outcome: Outcome,
    pub gain: i64,
}

/// Result of a settled round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub bet: u32,
    pub hands: Vec<HandResult>,
    pub dealer_cards: Vec<Card>,
    pub dealer_total: u32,
    /// Sum of every hand's gain, blackjack bonus included
    pub net: i64,
    pub money: i64,
}

/// How [`Engine::play_round`] ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    Completed(RoundSummary),
    /// The input side stopped answering; the round was abandoned unsettled
    Quit,
}

/// Read-only picture of the table handed to [`Decisions::next_move`].
#[derive(Debug, Clone, Copy)]
pub struct TableView<'a> {
    pub hands: &'a [Hand],
    pub dealer_up: Option<Card>,
    pub money: i64,
}

/// The blocking input contract of a round.
///
/// `bet` and `next_move` block until the player answers; `None` means the
/// session is over.
pub trait Decisions {
    fn bet(&mut self, money: i64) -> Option<u32>;
    fn next_move(&mut self, table: &TableView<'_>, hand: usize) -> Option<Move>;
    /// A bet or move was refused; the engine will ask again.
    fn rejected(&mut self, _error: &GameError) {}
    fn observe(&mut self, _event: &RoundEvent) {}
}

#[derive(Debug, Clone, Copy)]
struct RoundState {
    bet: u32,
    bonus: Option<i64>,
}

/// Owns the shoe, the player and the dealer and sequences rounds.
///
/// Rounds can be driven step by step ([`Engine::begin_round`],
/// [`Engine::apply_move`], [`Engine::finish_round`]) or all at once through
/// [`Engine::play_round`].
///
/// # Examples
///
/// ```
/// use blackjack_engine::engine::{Engine, EngineConfig};
/// use blackjack_engine::player::Move;
///
/// let mut engine = Engine::new(EngineConfig::default(), 42);
/// engine.begin_round(100).unwrap();
/// while let Some(hand) = engine.player().next_active_hand() {
///     engine.apply_move(hand, Move::Stand).unwrap();
/// }
/// let (_events, summary) = engine.finish_round().unwrap();
/// assert_eq!(summary.money, engine.player().money());
/// assert!(engine.player().hands().is_empty());
/// ```
#[derive(Debug)]
pub struct Engine {
    config: EngineConfig,
    seed: u64,
    shoe: Shoe,
    player: Player,
    dealer: Dealer,
    round: Option<RoundState>,
    rounds_played: u32,
}

impl Engine {
    pub fn new(config: EngineConfig, seed: u64) -> Self {
        Self {
            config,
            seed,
            shoe: Shoe::new_with_seed(config.decks, seed),
            player: Player::new(config.starting_money),
            dealer: Dealer::new(),
            round: None,
            rounds_played: 0,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn dealer(&self) -> &Dealer {
        &self.dealer
    }

    pub fn shoe_remaining(&self) -> usize {
        self.shoe.remaining()
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn is_round_in_progress(&self) -> bool {
        self.round.is_some()
    }

    pub fn table_view(&self) -> TableView<'_> {
        TableView {
            hands: self.player.hands(),
            dealer_up: self.dealer.up_card(),
            money: self.player.money(),
        }
    }

    /// Takes the wager, deals two cards each (player first) and pays an
    /// immediate 3:2 bonus on a player blackjack.
    ///
    /// # Errors
    ///
    /// - [`GameError::NoFundsRemaining`] - the balance is zero or below
    /// - [`GameError::InvalidBet`] / [`GameError::InsufficientFunds`] - the
    ///   wager is zero or above the balance; nothing is dealt
    /// - [`GameError::PoolExhausted`] - the shoe ran dry during the deal
    pub fn begin_round(&mut self, bet: u32) -> Result<Vec<RoundEvent>, GameError> {
        if self.round.is_some() {
            return Err(GameError::RoundInProgress);
        }
        let bet = validate_bet(self.player.money(), bet)?;

        let p1 = self.draw()?;
        let p2 = self.draw()?;
        let d1 = self.draw()?;
        let d2 = self.draw()?;

        let player_hand = Hand::with_cards(vec![p1, p2], bet);
        let dealer_hand = Hand::with_cards(vec![d1, d2], 0);
        let player_blackjack = player_hand.is_blackjack();
        let dealer_blackjack = dealer_hand.is_blackjack();

        let mut events = vec![
            RoundEvent::BetPlaced { amount: bet },
            RoundEvent::PlayerDealt {
                cards: player_hand.cards().to_vec(),
                total: player_hand.total(),
            },
            RoundEvent::DealerShows { card: d1 },
        ];
        if dealer_blackjack {
            events.push(RoundEvent::DealerBlackjack);
        }

        self.player.take_hand(player_hand);
        self.dealer.set_hand(dealer_hand);

        let mut bonus = None;
        if player_blackjack {
            let paid = blackjack_bonus(bet);
            self.player.adjust_money(paid);
            self.player.hand_mut(0)?.mark_settled();
            bonus = Some(paid);
            events.push(RoundEvent::PlayerBlackjack { bonus: paid });
            events.push(RoundEvent::Balance {
                money: self.player.money(),
            });
        }
        self.round = Some(RoundState { bet, bonus });

        tracing::info!(
            bet,
            player_total = p1.value() + p2.value(),
            dealer_up = ?d1,
            blackjack = player_blackjack,
            "round dealt"
        );
        Ok(events)
    }

    /// Applies one move to the hand at `index`.
    ///
    /// The move is validated against the current state first; a rejected
    /// move changes nothing and draws nothing.
    pub fn apply_move(&mut self, index: usize, mv: Move) -> Result<Vec<RoundEvent>, GameError> {
        if self.round.is_none() {
            return Err(GameError::NoRoundInProgress);
        }
        let validated = validate_move(self.player.hand(index)?, self.player.money(), mv)?;
        tracing::debug!(hand = index, %mv, "move accepted");

        let mut events = Vec::new();
        match validated {
            ValidatedMove::Hit => {
                let card = self.draw()?;
                let hand = self.player.hand_mut(index)?;
                hand.add_card(card);
                if hand.total() >= 21 {
                    hand.mark_done();
                }
                events.push(RoundEvent::Hit {
                    hand: index,
                    card,
                    total: hand.total(),
                });
            }
            ValidatedMove::Stand => {
                let hand = self.player.hand_mut(index)?;
                hand.mark_done();
                events.push(RoundEvent::Stand {
                    hand: index,
                    total: hand.total(),
                });
            }
            ValidatedMove::Double(bet) => {
                let card = self.draw()?;
                let hand = self.player.hand_mut(index)?;
                hand.add_card(card);
                hand.set_bet(bet);
                hand.mark_done();
                events.push(RoundEvent::Double {
                    hand: index,
                    bet,
                    card,
                    total: hand.total(),
                });
            }
            ValidatedMove::Split => {
                let first = self.draw()?;
                let second = self.draw()?;
                let new_hand = self.player.split_hand(index, [first, second])?;
                let hands = self.player.hands();
                events.push(RoundEvent::Split {
                    hand: index,
                    hand_cards: hands[index].cards().to_vec(),
                    new_hand,
                    new_hand_cards: hands[new_hand].cards().to_vec(),
                });
            }
        }

        let hand = self.player.hand(index)?;
        if hand.is_done() && hand.is_bust() {
            events.push(RoundEvent::Bust {
                hand: index,
                total: hand.total(),
            });
        }
        Ok(events)
    }

    /// Plays the dealer's hand (unless no player hand is left to compare),
    /// settles every hand and mucks the table.
    pub fn finish_round(&mut self) -> Result<(Vec<RoundEvent>, RoundSummary), GameError> {
        let Some(state) = self.round else {
            return Err(GameError::NoRoundInProgress);
        };
        if !self.player.all_done() {
            return Err(GameError::HandsStillActive);
        }

        let mut events = Vec::new();
        if let Some(hand) = self.dealer.hand() {
            events.push(RoundEvent::DealerReveals {
                cards: hand.cards().to_vec(),
                total: hand.total(),
            });
        }

        let needs_dealer = self
            .player
            .hands()
            .iter()
            .any(|h| !h.is_settled() && !h.is_bust());
        if needs_dealer {
            let mut running = self.dealer.total();
            let shoe = &mut self.shoe;
            let played = self.dealer.play(|| shoe.draw());
            let drawn = match played {
                Ok(drawn) => drawn,
                Err(e) => {
                    self.abandon_round();
                    return Err(e);
                }
            };
            for card in drawn {
                running += card.value();
                events.push(RoundEvent::DealerHits {
                    card,
                    total: running,
                });
            }
            let total = self.dealer.total();
            if total > 21 {
                events.push(RoundEvent::DealerBusts { total });
            } else {
                events.push(RoundEvent::DealerStands { total });
            }
            tracing::debug!(dealer_total = total, "dealer finished");
        }

        let dealer_total = self.dealer.total();
        let mut results = Vec::with_capacity(self.player.hands().len());
        let mut net = 0i64;
        for (index, hand) in self.player.hands_mut().iter_mut().enumerate() {
            let (outcome, gain) = if hand.is_settled() {
                (Outcome::Blackjack, state.bonus.unwrap_or(0))
            } else {
                let settled = settle_hand(hand.total(), dealer_total, hand.bet());
                hand.mark_settled();
                settled
            };
            events.push(RoundEvent::HandSettled {
                hand: index,
                outcome,
                gain,
            });
            results.push(HandResult {
                cards: hand.cards().to_vec(),
                total: hand.total(),
                bet: hand.bet(),
                outcome,
                gain,
            });
            net += gain;
        }
        // the bonus was credited on the deal
        let owed = net - state.bonus.unwrap_or(0);
        self.player.adjust_money(owed);
        events.push(RoundEvent::Balance {
            money: self.player.money(),
        });

        let summary = RoundSummary {
            bet: state.bet,
            hands: results,
            dealer_cards: self
                .dealer
                .hand()
                .map(|h| h.cards().to_vec())
                .unwrap_or_default(),
            dealer_total,
            net,
            money: self.player.money(),
        };
        tracing::info!(
            net,
            money = summary.money,
            hands = summary.hands.len(),
            "round settled"
        );

        self.muck();
        self.rounds_played += 1;
        Ok((events, summary))
    }

    /// Drops the current round without settling it. Any blackjack bonus
    /// already credited stays paid.
    pub fn abandon_round(&mut self) {
        if self.round.is_some() {
            tracing::warn!("round abandoned");
        }
        self.muck();
    }

    /// Runs one full round against `decisions`, re-asking after every
    /// recoverable rejection.
    ///
    /// # Errors
    ///
    /// [`GameError::NoFundsRemaining`] before asking for a bet when the
    /// balance is gone, and [`GameError::PoolExhausted`] when the shoe runs
    /// dry mid-round.
    pub fn play_round(&mut self, decisions: &mut dyn Decisions) -> Result<RoundOutcome, GameError> {
        if self.player.money() <= 0 {
            return Err(GameError::NoFundsRemaining {
                money: self.player.money(),
            });
        }

        let dealt = loop {
            let Some(amount) = decisions.bet(self.player.money()) else {
                return Ok(RoundOutcome::Quit);
            };
            match self.begin_round(amount) {
                Ok(events) => break events,
                Err(e) if e.is_recoverable() => decisions.rejected(&e),
                Err(e) => return Err(e),
            }
        };
        dealt.iter().for_each(|e| decisions.observe(e));

        while let Some(index) = self.player.next_active_hand() {
            let Some(mv) = decisions.next_move(&self.table_view(), index) else {
                self.abandon_round();
                return Ok(RoundOutcome::Quit);
            };
            match self.apply_move(index, mv) {
                Ok(events) => events.iter().for_each(|e| decisions.observe(e)),
                Err(e) if e.is_recoverable() => decisions.rejected(&e),
                Err(e) => return Err(e),
            }
        }

        let (events, summary) = self.finish_round()?;
        events.iter().for_each(|e| decisions.observe(e));
        Ok(RoundOutcome::Completed(summary))
    }

    /// A failed draw is fatal to the round in progress.
    fn draw(&mut self) -> Result<Card, GameError> {
        match self.shoe.draw() {
            Ok(card) => Ok(card),
            Err(e) => {
                tracing::error!(error = %e, "shoe exhausted");
                self.muck();
                Err(e)
            }
        }
    }

    fn muck(&mut self) {
        self.player.muck();
        self.dealer.muck();
        self.round = None;
    }

    #[cfg(test)]
    pub(crate) fn rig(&mut self, player: Vec<Hand>, dealer: Hand, bet: u32) {
        self.player.muck();
        for hand in player {
            self.player.take_hand(hand);
        }
        self.dealer.set_hand(dealer);
        self.round = Some(RoundState { bet, bonus: None });
    }
}
