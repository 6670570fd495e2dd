//! # blackjack-engine: Blackjack Game Engine Core
//!
//! A single-player, dealer-vs-player blackjack engine. Provides the card
//! pool, hand valuation, the player's move state machine, the dealer's
//! fixed draw-to-17 policy and settlement, with a seeded RNG so a session
//! can be replayed card for card.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card) and identifiers
//! - [`shoe`] - Multi-deck card pool with uniform random draws
//! - [`hand`] - Hand totals, blackjack and bust detection
//! - [`player`] - Player balance, hands, moves and splitting
//! - [`dealer`] - Dealer hand and play policy
//! - [`rules`] - Bet and move validation
//! - [`settlement`] - Per-hand payouts and the blackjack bonus
//! - [`engine`] - Round orchestration
//! - [`logger`] - Round history records serialized as JSONL
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use blackjack_engine::cards::{Card, Rank, Suit};
//! use blackjack_engine::hand::{hand_total, is_blackjack};
//!
//! let cards = [
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::King, Suit::Hearts),
//! ];
//! assert_eq!(hand_total(&cards), 21);
//! assert!(is_blackjack(&cards));
//! ```
//!
//! ## Playing a Round
//!
//! Front ends implement [`engine::Decisions`] and hand it to
//! [`engine::Engine::play_round`]:
//!
//! ```rust
//! use blackjack_engine::engine::{Decisions, Engine, EngineConfig, RoundOutcome, TableView};
//! use blackjack_engine::player::Move;
//!
//! struct AlwaysStand;
//!
//! impl Decisions for AlwaysStand {
//!     fn bet(&mut self, _money: i64) -> Option<u32> {
//!         Some(10)
//!     }
//!     fn next_move(&mut self, _table: &TableView<'_>, _hand: usize) -> Option<Move> {
//!         Some(Move::Stand)
//!     }
//! }
//!
//! let mut engine = Engine::new(EngineConfig::default(), 42);
//! let outcome = engine.play_round(&mut AlwaysStand).unwrap();
//! assert!(matches!(outcome, RoundOutcome::Completed(_)));
//! ```

pub mod cards;
pub mod dealer;
pub mod engine;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod player;
pub mod rules;
pub mod settlement;
pub mod shoe;
