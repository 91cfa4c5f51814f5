//! A deterministic blackjack round engine with optional `no_std` support.
//!
//! The heart of the crate is [`step`], a pure transition function from a
//! [`GameState`] and an [`Action`] to the next state. It manages a shared
//! shoe, the player and dealer hands, legal player actions, automated dealer
//! play, and settlement. Invalid actions are rejected without touching the
//! state. [`Game`] wraps the reducer with a seeded RNG for callers that want
//! a ready-made session.
//!
//! # Example
//!
//! ```
//! use shoebox::{Action, Game, GameOptions, Money, Phase};
//!
//! let game = Game::new(GameOptions::default(), Money::from_units(500), 42);
//! game.dispatch(Action::AddChip(Money::from_units(25))).unwrap();
//! game.dispatch(Action::Deal).unwrap();
//!
//! if game.phase() == Phase::Insurance {
//!     game.dispatch(Action::Insurance(false)).unwrap();
//! }
//! while game.phase() == Phase::PlayerTurn {
//!     game.dispatch(Action::Stand).unwrap();
//! }
//! if game.phase() == Phase::DealerTurn {
//!     game.dispatch(Action::DealerPlay).unwrap();
//! }
//! assert_eq!(game.phase(), Phase::RoundEnd);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod error;
pub mod event;
pub mod game;
pub mod hand;
pub mod money;
pub mod options;
pub mod result;
pub mod rules;
pub mod settlement;
pub mod shoe;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use error::ActionError;
pub use event::{Event, Recipient};
pub use game::{
    Action, AdvisoryFlags, Game, GameState, Phase, Transition, reduce, should_dealer_hit, step,
};
pub use hand::{DealerHand, Hand, HandStatus, HandTotal, hand_total, is_blackjack, is_busted};
pub use money::Money;
pub use options::{GameOptions, RoundingMode};
pub use result::{HandOutcome, HandResult, RoundResult};
pub use rules::{can_double, can_insure, can_split};
pub use settlement::settle;
pub use shoe::{Drawn, Shoe};
