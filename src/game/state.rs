//! Round phases and the round snapshot.

use alloc::vec::Vec;

use rand::Rng;

use crate::hand::{DealerHand, Hand};
use crate::money::Money;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::shoe::Shoe;

/// Round phase.
///
/// Dealing happens inside the `Deal` transition and never shows up as a
/// phase of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Accepting chips for the next round.
    #[default]
    Idle,
    /// Dealer shows an Ace; waiting for the insurance decision.
    Insurance,
    /// Waiting for player actions on the active hand.
    PlayerTurn,
    /// Every player hand is finished; the dealer plays next.
    DealerTurn,
    /// The round has been settled.
    RoundEnd,
}

/// Complete snapshot of a round.
///
/// Transitions never mutate a snapshot in place: the reducer returns a new
/// one for every accepted action.
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,
    /// The shoe shared by every hand at the table.
    pub shoe: Shoe,
    /// The dealer's hand, including whether the hole card is face up.
    pub dealer_hand: DealerHand,
    /// Player hands; more than one only after a split.
    pub player_hands: Vec<Hand>,
    /// Index of the hand taking actions. Equals `player_hands.len()` once
    /// no playable hand remains.
    pub active_hand_index: usize,
    /// Mirror of the external wallet balance.
    pub balance: Money,
    /// Chips placed for the next deal.
    pub pending_bet: Money,
    /// Settlement of the last finished round.
    pub round_result: Option<RoundResult>,
    /// Table configuration.
    pub options: GameOptions,
}

impl GameState {
    /// Creates an idle table with a freshly shuffled shoe.
    pub fn new<R: Rng + ?Sized>(options: GameOptions, balance: Money, rng: &mut R) -> Self {
        let shoe = Shoe::new(&options, rng);
        Self::with_shoe(options, balance, shoe)
    }

    /// Creates an idle table that deals from `shoe`.
    #[must_use]
    pub const fn with_shoe(options: GameOptions, balance: Money, shoe: Shoe) -> Self {
        Self {
            phase: Phase::Idle,
            shoe,
            dealer_hand: DealerHand::new(),
            player_hands: Vec::new(),
            active_hand_index: 0,
            balance,
            pending_bet: Money::ZERO,
            round_result: None,
            options,
        }
    }

    /// Returns the hand taking actions, if any.
    #[must_use]
    pub fn active_hand(&self) -> Option<&Hand> {
        self.player_hands.get(self.active_hand_index)
    }

    /// Returns whether the dealer's hole card is face up.
    #[must_use]
    pub const fn dealer_hole_revealed(&self) -> bool {
        self.dealer_hand.is_hole_revealed()
    }
}
