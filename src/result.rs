//! Round result types produced by settlement.

use alloc::vec::Vec;

use crate::money::Money;

/// Result of a single hand after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandOutcome {
    /// Player wins (dealer busts or player has higher value).
    Win,
    /// Player loses (player busts, dealer blackjack, or dealer has higher value).
    Lose,
    /// Push (tie).
    Push,
    /// Player has a natural blackjack.
    Blackjack,
}

/// Result for a single player hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandResult {
    /// Position of the hand (more than one after a split).
    pub hand_index: usize,
    /// The outcome of the hand.
    pub outcome: HandOutcome,
    /// The stake on this hand at settlement.
    pub bet: Money,
    /// Amount returned to the player for this hand, stake included.
    pub payout: Money,
    /// The player's hand value.
    pub player_total: u8,
    /// The dealer's hand value.
    pub dealer_total: u8,
}

/// Result of the entire round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// One entry per player hand, in hand order.
    pub outcomes: Vec<HandResult>,
    /// Sum of every hand payout plus the insurance payout.
    pub total_payout: Money,
    /// Insurance payout (zero unless the dealer had blackjack).
    pub insurance_payout: Money,
    /// The dealer's final hand value.
    pub dealer_total: u8,
    /// Whether the dealer busted.
    pub dealer_bust: bool,
    /// Whether the dealer had blackjack.
    pub dealer_blackjack: bool,
}
