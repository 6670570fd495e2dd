use thiserror::Error;

use crate::player::Move;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Card pool exhausted")]
    PoolExhausted,
    #[error("Illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: &'static str },
    #[error("Insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: i64, available: i64 },
    #[error("Invalid bet amount: {amount}")]
    InvalidBet { amount: u32 },
    #[error("No funds remaining (balance {money})")]
    NoFundsRemaining { money: i64 },
    #[error("A round is already in progress")]
    RoundInProgress,
    #[error("No round in progress")]
    NoRoundInProgress,
    #[error("No hand at index {index}")]
    NoSuchHand { index: usize },
    #[error("Player hands are still active")]
    HandsStillActive,
}

impl GameError {
    /// Errors after which the caller may simply ask for a new bet or move.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::IllegalMove { .. }
                | GameError::InsufficientFunds { .. }
                | GameError::InvalidBet { .. }
        )
    }
}
