use rand::Rng;

use crate::error::ActionError;
use crate::event::Event;
use crate::rules::can_insure;

use super::{Phase, Step};

/// Insurance costs half the main bet.
const INSURANCE_RATIO: f64 = 0.5;

impl<R: Rng + ?Sized> Step<'_, R> {
    /// Records the insurance decision and moves on to the player's turn.
    ///
    /// Accepting with a balance that cannot cover half the bet is treated
    /// as declining. The hole card stays hidden unless the table peeks, in
    /// which case a dealer blackjack settles the round right away.
    pub(super) fn insurance(&mut self, accept: bool) -> Result<(), ActionError> {
        self.require_phase(Phase::Insurance)?;
        if !can_insure(&self.state.dealer_hand, self.state.phase) {
            return Err(ActionError::InsuranceNotOffered);
        }

        if accept {
            self.place_insurance();
        }

        if self.state.options.dealer_peeks && self.state.dealer_hand.is_blackjack() {
            self.expose_hole();
            self.finish_round();
        } else {
            self.enter(Phase::PlayerTurn);
        }

        Ok(())
    }

    fn place_insurance(&mut self) {
        let rounding = self.state.options.rounding_insurance;
        let index = self.state.active_hand_index;
        let Some(hand) = self.state.player_hands.get_mut(index) else {
            return;
        };

        let stake = hand.bet().scale(INSURANCE_RATIO, rounding);
        if stake.is_zero() {
            return;
        }
        let Some(remaining) = self.state.balance.checked_sub(stake) else {
            return;
        };

        self.state.balance = remaining;
        hand.set_insurance_bet(stake);
        self.events.push(Event::InsuranceTaken(stake));
    }
}
