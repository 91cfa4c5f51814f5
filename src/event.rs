//! Side-channel events emitted by accepted transitions.
//!
//! Events carry everything a renderer needs that is not part of the
//! authoritative round state: which cards to animate, status lines, and the
//! advisory processing flag.

use core::fmt;

use crate::card::Card;
use crate::game::Phase;
use crate::money::Money;

/// Who received a dealt card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    /// The player hand at this index.
    Player(usize),
    /// The dealer.
    Dealer,
}

/// Something that happened during a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The shoe was replaced with a freshly shuffled one.
    Reshuffled,
    /// A card was dealt.
    CardDealt {
        /// Who got the card.
        to: Recipient,
        /// The card.
        card: Card,
    },
    /// The dealer's hole card was turned face up.
    HoleRevealed,
    /// The round moved to a new phase.
    PhaseChanged(Phase),
    /// The player took insurance for this amount.
    InsuranceTaken(Money),
    /// Dealer play stopped at the draw limit while policy still said hit.
    DealerDrawLimitReached {
        /// The dealer's total when drawing stopped.
        total: u8,
    },
    /// The round was settled and this amount credited to the balance.
    RoundSettled {
        /// Total credited.
        total_payout: Money,
    },
    /// The advisory processing flag changed.
    ProcessingChanged(bool),
    /// The renderer finished its animation.
    AnimationComplete,
}

impl Event {
    /// Returns whether the renderer is expected to animate this event.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        matches!(self, Self::CardDealt { .. } | Self::HoleRevealed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reshuffled => f.write_str("Shuffling a new shoe"),
            Self::CardDealt {
                to: Recipient::Player(hand),
                card,
            } => write!(f, "Hand {} draws {:?} of {:?}", hand + 1, card.rank(), card.suit()),
            Self::CardDealt {
                to: Recipient::Dealer,
                card,
            } => write!(f, "Dealer draws {:?} of {:?}", card.rank(), card.suit()),
            Self::HoleRevealed => f.write_str("Dealer reveals the hole card"),
            Self::PhaseChanged(Phase::Idle) => f.write_str("Place your bet"),
            Self::PhaseChanged(Phase::Insurance) => f.write_str("Dealer shows an Ace. Insurance?"),
            Self::PhaseChanged(Phase::PlayerTurn) => f.write_str("Hit, stand, double, or split"),
            Self::PhaseChanged(Phase::DealerTurn) => f.write_str("Dealer's turn"),
            Self::PhaseChanged(Phase::RoundEnd) => f.write_str("Round over"),
            Self::InsuranceTaken(amount) => write!(f, "Insurance taken for {amount}"),
            Self::DealerDrawLimitReached { total } => {
                write!(f, "Dealer stops drawing at {total}")
            }
            Self::RoundSettled { total_payout } if total_payout.is_zero() => {
                f.write_str("Dealer wins")
            }
            Self::RoundSettled { total_payout } => write!(f, "You receive {total_payout}"),
            Self::ProcessingChanged(true) => f.write_str("Processing"),
            Self::ProcessingChanged(false) => f.write_str("Ready"),
            Self::AnimationComplete => f.write_str("Animation complete"),
        }
    }
}
