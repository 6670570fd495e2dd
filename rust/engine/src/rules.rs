use crate::errors::GameError;
use crate::hand::Hand;
use crate::player::Move as M;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedMove {
    Hit,
    Stand,
    /// Carries the wager the hand will hold after doubling
    Double(u32),
    Split,
}

/// Validates a move against the hand it targets and the player's balance.
///
/// Called at the moment of execution, so a move chosen against an older
/// view of the table is re-checked before anything is drawn.
///
/// # Errors
///
/// - [`GameError::IllegalMove`] - the hand is already done, a split is
///   requested on anything but a two-card pair, or the doubled bet would
///   not fit in a wager
/// - [`GameError::InsufficientFunds`] - doubling with less money than the
///   hand's current bet
///
/// # Examples
///
/// ```
/// use blackjack_engine::cards::{Card, Rank, Suit};
/// use blackjack_engine::errors::GameError;
/// use blackjack_engine::hand::Hand;
/// use blackjack_engine::player::Move;
/// use blackjack_engine::rules::{validate_move, ValidatedMove};
///
/// let hand = Hand::with_cards(
///     vec![Card::new(Rank::Six, Suit::Clubs), Card::new(Rank::Five, Suit::Hearts)],
///     50,
/// );
/// assert_eq!(validate_move(&hand, 1000, Move::Double), Ok(ValidatedMove::Double(100)));
/// assert!(matches!(
///     validate_move(&hand, 40, Move::Double),
///     Err(GameError::InsufficientFunds { .. })
/// ));
/// assert!(matches!(
///     validate_move(&hand, 1000, Move::Split),
///     Err(GameError::IllegalMove { .. })
/// ));
/// ```
pub fn validate_move(hand: &Hand, money: i64, mv: M) -> Result<ValidatedMove, GameError> {
    if hand.is_done() {
        return Err(GameError::IllegalMove {
            mv,
            reason: "hand is already done",
        });
    }
    match mv {
        M::Hit => Ok(ValidatedMove::Hit),
        M::Stand => Ok(ValidatedMove::Stand),
        M::Double => {
            let needed = i64::from(hand.bet());
            if money < needed {
                Err(GameError::InsufficientFunds {
                    needed,
                    available: money,
                })
            } else {
                match hand.bet().checked_mul(2) {
                    Some(doubled) => Ok(ValidatedMove::Double(doubled)),
                    None => Err(GameError::IllegalMove {
                        mv,
                        reason: "doubled bet exceeds the largest allowed wager",
                    }),
                }
            }
        }
        M::Split => {
            if hand.is_pair() {
                Ok(ValidatedMove::Split)
            } else {
                Err(GameError::IllegalMove {
                    mv,
                    reason: "split needs exactly two cards of the same rank",
                })
            }
        }
    }
}

/// Checks a wager before the deal. A balance of zero or less ends the
/// session rather than asking for another amount.
pub fn validate_bet(money: i64, amount: u32) -> Result<u32, GameError> {
    if money <= 0 {
        return Err(GameError::NoFundsRemaining { money });
    }
    if amount == 0 {
        return Err(GameError::InvalidBet { amount });
    }
    if i64::from(amount) > money {
        return Err(GameError::InsufficientFunds {
            needed: i64::from(amount),
            available: money,
        });
    }
    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, Rank, Suit};

    fn eleven(bet: u32) -> Hand {
        Hand::with_cards(
            vec![
                Card::new(Rank::Six, Suit::Clubs),
                Card::new(Rank::Five, Suit::Hearts),
            ],
            bet,
        )
    }

    #[test]
    fn double_carries_twice_the_bet() {
        assert_eq!(
            validate_move(&eleven(3_000), 10_000, M::Double),
            Ok(ValidatedMove::Double(6_000))
        );
        assert_eq!(
            validate_move(&eleven(u32::MAX / 2), i64::MAX, M::Double),
            Ok(ValidatedMove::Double(u32::MAX - 1))
        );
    }

    #[test]
    fn double_that_overflows_the_wager_is_illegal() {
        let hand = eleven(3_000_000_000);
        let err = validate_move(&hand, 10_000_000_000, M::Double).unwrap_err();
        assert!(matches!(err, GameError::IllegalMove { mv: M::Double, .. }));
        assert!(err.is_recoverable());
    }

    #[test]
    fn double_needs_the_current_bet_in_money() {
        assert_eq!(
            validate_move(&eleven(100), 99, M::Double),
            Err(GameError::InsufficientFunds {
                needed: 100,
                available: 99
            })
        );
        assert!(validate_move(&eleven(100), 100, M::Double).is_ok());
    }

    #[test]
    fn bets_are_checked_against_the_balance() {
        assert_eq!(validate_bet(100, 100), Ok(100));
        assert_eq!(
            validate_bet(0, 10),
            Err(GameError::NoFundsRemaining { money: 0 })
        );
        assert_eq!(
            validate_bet(100, 0),
            Err(GameError::InvalidBet { amount: 0 })
        );
        assert_eq!(
            validate_bet(100, 101),
            Err(GameError::InsufficientFunds {
                needed: 101,
                available: 100
            })
        );
    }
}
