//! Eligibility checks for split, double, and insurance.
//!
//! These are pure predicates. The reducer consults them before accepting
//! an action and rejects the action, leaving the state untouched, when one
//! returns `false`.

use crate::game::Phase;
use crate::hand::{DealerHand, Hand};
use crate::money::Money;

/// Returns whether `hand` may be split with `balance` left to stake.
///
/// Any two ten-valued cards may be split together (a Ten with a King, say).
#[must_use]
pub fn can_split(hand: &Hand, balance: Money) -> bool {
    let [first, second] = hand.cards() else {
        return false;
    };
    let matched = first.rank() == second.rank() || (first.value() == 10 && second.value() == 10);

    !hand.is_from_split() && balance >= hand.bet() && matched
}

/// Returns whether `hand` may be doubled with `balance` left to stake.
#[must_use]
pub fn can_double(hand: &Hand, balance: Money) -> bool {
    hand.len() == 2 && !hand.is_doubled() && balance >= hand.bet()
}

/// Returns whether insurance is on offer.
#[must_use]
pub fn can_insure(dealer: &DealerHand, phase: Phase) -> bool {
    phase == Phase::Insurance && dealer.up_card().is_some_and(|card| card.is_ace())
}
