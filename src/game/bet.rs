use rand::Rng;

use crate::error::ActionError;
use crate::event::{Event, Recipient};
use crate::hand::{DealerHand, Hand};
use crate::money::Money;

use super::{Phase, Step};

impl<R: Rng + ?Sized> Step<'_, R> {
    pub(super) fn add_chip(&mut self, value: Money) -> Result<(), ActionError> {
        self.require_phase(Phase::Idle)?;

        let pending = self.state.pending_bet + value;
        if pending > self.state.balance {
            return Err(ActionError::InsufficientFunds);
        }

        self.state.pending_bet = pending;
        Ok(())
    }

    pub(super) fn undo_chip(&mut self, value: Money) -> Result<(), ActionError> {
        self.require_phase(Phase::Idle)?;
        self.state.pending_bet = self.state.pending_bet.saturating_sub(value);
        Ok(())
    }

    pub(super) fn clear_bet(&mut self) -> Result<(), ActionError> {
        self.require_phase(Phase::Idle)?;
        self.state.pending_bet = Money::ZERO;
        Ok(())
    }

    /// Stakes the pending bet and deals player, dealer, player, dealer.
    pub(super) fn deal(&mut self) -> Result<(), ActionError> {
        self.require_phase(Phase::Idle)?;

        let stake = self.state.pending_bet;
        if stake.is_zero() {
            return Err(ActionError::ZeroBet);
        }
        self.state.balance = self
            .state
            .balance
            .checked_sub(stake)
            .ok_or(ActionError::InsufficientFunds)?;

        let mut hand = Hand::new(stake);
        let mut dealer = DealerHand::new();
        hand.add_card(self.draw(Recipient::Player(0)));
        dealer.add_card(self.draw(Recipient::Dealer));
        hand.add_card(self.draw(Recipient::Player(0)));
        dealer.add_card(self.draw(Recipient::Dealer));

        let player_blackjack = hand.is_blackjack();
        let dealer_blackjack = dealer.is_blackjack();
        let ace_up = dealer.up_card().is_some_and(|card| card.is_ace());

        self.state.player_hands = alloc::vec![hand];
        self.state.dealer_hand = dealer;
        self.state.active_hand_index = 0;
        self.state.round_result = None;

        if ace_up && !player_blackjack {
            self.enter(Phase::Insurance);
        } else if player_blackjack || dealer_blackjack {
            self.expose_hole();
            self.finish_round();
        } else {
            self.enter(Phase::PlayerTurn);
        }

        Ok(())
    }

    /// Clears the table for the next round.
    pub(super) fn new_round(&mut self) -> Result<(), ActionError> {
        if !matches!(self.state.phase, Phase::Idle | Phase::RoundEnd) {
            return Err(ActionError::InvalidState);
        }

        if self.state.shoe.reshuffle_if_needed(&mut *self.rng) {
            tracing::debug!(cards = self.state.shoe.len(), "shoe reshuffled between rounds");
            self.events.push(Event::Reshuffled);
        }

        self.state.player_hands.clear();
        self.state.dealer_hand = DealerHand::new();
        self.state.active_hand_index = 0;
        self.state.pending_bet = Money::ZERO;
        self.state.round_result = None;
        self.enter(Phase::Idle);

        Ok(())
    }
}
