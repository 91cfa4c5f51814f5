//! The round state machine and the shared game session.
//!
//! [`step`] is the whole engine: given a snapshot and an [`Action`] it either
//! returns the next snapshot plus the [`Event`]s the transition produced, or
//! the reason the action was rejected. Rejection never mutates anything.
//! [`reduce`] is the same function with rejection folded into "unchanged
//! state", and [`Game`] wraps it with a seeded RNG behind locks.

use alloc::vec::Vec;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::card::Card;
use crate::error::ActionError;
use crate::event::{Event, Recipient};
use crate::money::Money;
use crate::options::GameOptions;
use crate::result::RoundResult;
use crate::sync::Mutex;

mod action;
mod actions;
mod bet;
mod dealer;
mod insurance;
pub mod state;

pub use action::Action;
pub use dealer::should_dealer_hit;
pub use state::{GameState, Phase};

/// The result of an accepted action.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    /// The next snapshot.
    pub state: GameState,
    /// Side-channel events, in the order they happened.
    pub events: Vec<Event>,
}

/// Applies `action` to `state`.
///
/// # Errors
///
/// Returns the reason the action was rejected: wrong phase, insufficient
/// balance, or a hand that is not eligible for the action. `state` is left
/// as it was and `rng` is not advanced.
pub fn step<R: Rng + ?Sized>(
    state: &GameState,
    action: Action,
    rng: &mut R,
) -> Result<Transition, ActionError> {
    let mut work = Step {
        state: state.clone(),
        rng,
        events: Vec::new(),
    };

    let applied = match action {
        Action::AddChip(value) => work.add_chip(value),
        Action::UndoChip(value) => work.undo_chip(value),
        Action::ClearBet => work.clear_bet(),
        Action::Deal => work.deal(),
        Action::Insurance(accept) => work.insurance(accept),
        Action::Hit => work.hit(),
        Action::Stand => work.stand(),
        Action::Double => work.double_down(),
        Action::Split => work.split(),
        Action::RevealHole => work.reveal_hole(),
        Action::DealerPlay => work.dealer_play(),
        Action::ForceRoundEnd => work.force_round_end(),
        Action::NewRound => work.new_round(),
        Action::SetBalance(balance) => {
            work.state.balance = balance;
            Ok(())
        }
        Action::SetProcessing(processing) => {
            work.events.push(Event::ProcessingChanged(processing));
            Ok(())
        }
        Action::AnimationComplete => {
            work.events.push(Event::AnimationComplete);
            Ok(())
        }
    };

    match applied {
        Ok(()) => {
            tracing::debug!(
                ?action,
                phase = ?work.state.phase,
                balance = work.state.balance.cents(),
                events = work.events.len(),
                "action applied"
            );
            Ok(Transition {
                state: work.state,
                events: work.events,
            })
        }
        Err(err) => {
            tracing::trace!(?action, phase = ?state.phase, %err, "action rejected");
            Err(err)
        }
    }
}

/// Applies `action` to `state`, returning an unchanged copy if it is rejected.
pub fn reduce<R: Rng + ?Sized>(state: &GameState, action: Action, rng: &mut R) -> GameState {
    step(state, action, rng).map_or_else(|_| state.clone(), |transition| transition.state)
}

/// Working copy of a snapshot while one action is applied.
struct Step<'r, R: ?Sized> {
    state: GameState,
    rng: &'r mut R,
    events: Vec<Event>,
}

impl<R: Rng + ?Sized> Step<'_, R> {
    fn require_phase(&self, phase: Phase) -> Result<(), ActionError> {
        if self.state.phase == phase {
            Ok(())
        } else {
            Err(ActionError::InvalidState)
        }
    }

    fn enter(&mut self, phase: Phase) {
        if self.state.phase != phase {
            self.state.phase = phase;
            self.events.push(Event::PhaseChanged(phase));
        }
    }

    /// Draws the next card for `to`, reshuffling first if the shoe is depleted.
    fn draw(&mut self, to: Recipient) -> Card {
        let drawn = self.state.shoe.draw(&mut *self.rng);
        if drawn.reshuffled {
            tracing::debug!(cards = self.state.shoe.len() + 1, "shoe reshuffled");
            self.events.push(Event::Reshuffled);
        }
        self.events.push(Event::CardDealt {
            to,
            card: drawn.card,
        });
        drawn.card
    }
}

/// Advisory flags an orchestrator checks before dispatching.
///
/// These are a cooperative lock for the presentation layer; the reducer
/// never reads them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvisoryFlags {
    /// An orchestrator is sequencing a multi-step operation.
    pub processing: bool,
    /// The renderer is animating the last transition.
    pub animating: bool,
}

impl AdvisoryFlags {
    /// Folds a transition's events into the flags.
    pub fn observe(&mut self, events: &[Event]) {
        for event in events {
            match event {
                Event::ProcessingChanged(processing) => self.processing = *processing,
                Event::AnimationComplete => self.animating = false,
                event if event.is_animated() => self.animating = true,
                _ => {}
            }
        }
    }
}

/// A blackjack table session: one round snapshot, its RNG, and advisory flags.
///
/// Every dispatch runs to completion under the state lock, so actions from
/// several threads are applied one at a time. The snapshot can only be read
/// through copies:
///
/// ```compile_fail
/// use shoebox::{Game, GameOptions, Money};
///
/// let game = Game::new(GameOptions::default(), Money::from_units(100), 1);
/// game.state.lock().balance = Money::from_units(1_000);
/// ```
pub struct Game {
    /// Current round snapshot; only replaced by [`Game::dispatch`].
    state: Mutex<GameState>,
    /// Advisory presentation flags.
    flags: Mutex<AdvisoryFlags>,
    /// Random number generator used for every shuffle.
    rng: Mutex<ChaCha8Rng>,
}

impl Game {
    /// Creates a new table with the given starting balance and seed.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::{Action, Game, GameOptions, Money, Phase};
    ///
    /// let game = Game::new(GameOptions::default(), Money::from_units(100), 42);
    /// game.dispatch(Action::AddChip(Money::from_units(10))).unwrap();
    /// game.dispatch(Action::Deal).unwrap();
    /// assert_ne!(game.phase(), Phase::Idle);
    /// ```
    #[must_use]
    pub fn new(options: GameOptions, balance: Money, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let state = GameState::new(options, balance, &mut rng);
        Self::from_parts(state, rng)
    }

    /// Creates a table from an existing snapshot.
    #[must_use]
    pub fn from_state(state: GameState, seed: u64) -> Self {
        Self::from_parts(state, ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_parts(state: GameState, rng: ChaCha8Rng) -> Self {
        Self {
            state: Mutex::new(state),
            flags: Mutex::new(AdvisoryFlags::default()),
            rng: Mutex::new(rng),
        }
    }

    /// Applies an action and returns the events it produced.
    ///
    /// # Errors
    ///
    /// Returns the rejection reason; the snapshot is left untouched.
    pub fn dispatch(&self, action: Action) -> Result<Vec<Event>, ActionError> {
        let mut state = self.state.lock();
        let transition = {
            let mut rng = self.rng.lock();
            step(&state, action, &mut *rng)?
        };
        // flags are folded under the state lock so they follow transition order
        self.flags.lock().observe(&transition.events);
        *state = transition.state;
        drop(state);
        Ok(transition.events)
    }

    /// Returns a copy of the current snapshot.
    pub fn snapshot(&self) -> GameState {
        self.state.read(GameState::clone)
    }

    /// Returns the current phase.
    pub fn phase(&self) -> Phase {
        self.state.read(|state| state.phase)
    }

    /// Returns the balance mirror.
    pub fn balance(&self) -> Money {
        self.state.read(|state| state.balance)
    }

    /// Returns the pending bet.
    pub fn pending_bet(&self) -> Money {
        self.state.read(|state| state.pending_bet)
    }

    /// Returns the active hand index.
    pub fn active_hand_index(&self) -> usize {
        self.state.read(|state| state.active_hand_index)
    }

    /// Returns the number of cards remaining in the shoe.
    pub fn cards_remaining(&self) -> usize {
        self.state.read(|state| state.shoe.len())
    }

    /// Returns the settlement of the last finished round.
    pub fn round_result(&self) -> Option<RoundResult> {
        self.state.read(|state| state.round_result.clone())
    }

    /// Returns the table options.
    pub fn options(&self) -> GameOptions {
        self.state.read(|state| state.options.clone())
    }

    /// Returns the advisory flags.
    pub fn flags(&self) -> AdvisoryFlags {
        self.flags.read(|flags| *flags)
    }
}
