//! Actions accepted by the reducer.

use crate::money::Money;

/// An action dispatched into the round state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Add a chip to the pending bet.
    AddChip(Money),
    /// Take a chip back off the pending bet.
    UndoChip(Money),
    /// Clear the pending bet.
    ClearBet,
    /// Stake the pending bet and deal the opening cards.
    Deal,
    /// Accept (`true`) or decline (`false`) insurance.
    Insurance(bool),
    /// Draw a card into the active hand.
    Hit,
    /// Stand on the active hand.
    Stand,
    /// Double the stake, draw one card, and stand.
    Double,
    /// Split the active pair into two hands.
    Split,
    /// Turn the dealer's hole card face up.
    RevealHole,
    /// Play out the dealer's hand and settle the round.
    DealerPlay,
    /// Settle immediately with the hands as they are.
    ForceRoundEnd,
    /// Clear the table for the next round.
    NewRound,
    /// Replace the balance with the wallet's authoritative value.
    SetBalance(Money),
    /// Set the advisory processing flag.
    SetProcessing(bool),
    /// The renderer finished animating the last transition.
    AnimationComplete,
}
