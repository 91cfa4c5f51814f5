use rand::Rng;

use crate::error::ActionError;
use crate::event::Recipient;
use crate::hand::Hand;
use crate::money::Money;
use crate::rules::{can_double, can_split};

use super::{Phase, Step};

impl<R: Rng + ?Sized> Step<'_, R> {
    /// Returns the active hand if the player may act on it.
    fn playable_hand(&self) -> Result<&Hand, ActionError> {
        self.require_phase(Phase::PlayerTurn)?;

        let hand = self
            .state
            .active_hand()
            .ok_or(ActionError::NoActiveHand)?;
        if !hand.is_active() {
            return Err(ActionError::HandNotActive);
        }

        Ok(hand)
    }

    fn active_hand_mut(&mut self) -> Result<&mut Hand, ActionError> {
        let index = self.state.active_hand_index;
        self.state
            .player_hands
            .get_mut(index)
            .ok_or(ActionError::NoActiveHand)
    }

    fn debit(&mut self, amount: Money) -> Result<(), ActionError> {
        self.state.balance = self
            .state
            .balance
            .checked_sub(amount)
            .ok_or(ActionError::InsufficientFunds)?;
        Ok(())
    }

    /// Player action: Hit (draw a card). A bust finishes the hand.
    pub(super) fn hit(&mut self) -> Result<(), ActionError> {
        self.playable_hand()?;

        let index = self.state.active_hand_index;
        let card = self.draw(Recipient::Player(index));
        let hand = self.active_hand_mut()?;
        hand.add_card(card);

        if hand.is_busted() {
            self.advance_after_hand();
        }

        Ok(())
    }

    /// Player action: Stand (keep current hand).
    pub(super) fn stand(&mut self) -> Result<(), ActionError> {
        self.playable_hand()?;

        self.active_hand_mut()?.stand();
        self.advance_after_hand();

        Ok(())
    }

    /// Player action: Double down (double bet, receive one card, then stand).
    pub(super) fn double_down(&mut self) -> Result<(), ActionError> {
        let hand = self.playable_hand()?;
        if !can_double(hand, self.state.balance) {
            return Err(ActionError::CannotDouble);
        }
        let extra = hand.bet();

        self.debit(extra)?;
        let index = self.state.active_hand_index;
        let card = self.draw(Recipient::Player(index));

        let hand = self.active_hand_mut()?;
        hand.double_bet();
        hand.add_card(card);
        hand.stand();

        self.advance_after_hand();

        Ok(())
    }

    /// Player action: Split a pair into two hands, each topped up with a fresh card.
    ///
    /// The active index stays put, so play continues on the first of the two.
    pub(super) fn split(&mut self) -> Result<(), ActionError> {
        let hand = self.playable_hand()?;
        if !can_split(hand, self.state.balance) {
            return Err(ActionError::CannotSplit);
        }
        let &[first, second] = hand.cards() else {
            return Err(ActionError::CannotSplit);
        };
        let bet = hand.bet();

        self.debit(bet)?;
        let index = self.state.active_hand_index;
        let fresh_first = self.draw(Recipient::Player(index));
        let fresh_second = self.draw(Recipient::Player(index + 1));

        *self.active_hand_mut()? = Hand::from_split(first, fresh_first, bet);
        self.state
            .player_hands
            .insert(index + 1, Hand::from_split(second, fresh_second, bet));

        Ok(())
    }

    /// Moves to the next playable hand after the active one, or to the
    /// dealer's turn if none remains.
    pub(super) fn advance_after_hand(&mut self) {
        let hands = &self.state.player_hands;
        let next = (self.state.active_hand_index + 1..hands.len()).find(|&i| hands[i].is_active());

        if let Some(next) = next {
            self.state.active_hand_index = next;
        } else {
            self.state.active_hand_index = hands.len();
            self.enter(Phase::DealerTurn);
        }
    }
}
