//! Rejection reasons for dispatched actions.

use thiserror::Error;

/// Why the reducer rejected an action.
///
/// A rejected action never changes the game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ActionError {
    /// The action is not legal in the current phase.
    #[error("invalid game state for this action")]
    InvalidState,
    /// The balance does not cover the stake.
    #[error("insufficient funds for this action")]
    InsufficientFunds,
    /// No bet has been placed.
    #[error("bet amount is zero")]
    ZeroBet,
    /// There is no hand at the active index.
    #[error("no active hand")]
    NoActiveHand,
    /// The active hand has already stood or busted.
    #[error("hand is not active")]
    HandNotActive,
    /// The active hand cannot be doubled.
    #[error("cannot double down on this hand")]
    CannotDouble,
    /// The active hand cannot be split.
    #[error("cannot split this hand")]
    CannotSplit,
    /// Insurance is not on offer.
    #[error("insurance is not offered")]
    InsuranceNotOffered,
    /// The dealer's hole card is already face up, or not yet dealt.
    #[error("hole card cannot be revealed")]
    HoleAlreadyRevealed,
}
