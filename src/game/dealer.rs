use rand::Rng;

use crate::card::Card;
use crate::error::ActionError;
use crate::event::{Event, Recipient};
use crate::hand::{Hand, HandTotal, hand_total};
use crate::settlement::settle;

use super::{Phase, Step};

/// Returns whether the dealer must draw to `cards`.
///
/// The dealer hits anything under 17, and a soft 17 when `hits_soft_17` is set.
#[must_use]
pub fn should_dealer_hit(cards: &[Card], hits_soft_17: bool) -> bool {
    let HandTotal { total, soft } = hand_total(cards);
    total < 17 || (total == 17 && soft && hits_soft_17)
}

impl<R: Rng + ?Sized> Step<'_, R> {
    /// Turns the hole card face up if it is not already.
    pub(super) fn expose_hole(&mut self) {
        if !self.state.dealer_hand.is_hole_revealed() && !self.state.dealer_hand.is_empty() {
            self.state.dealer_hand.reveal_hole();
            self.events.push(Event::HoleRevealed);
        }
    }

    pub(super) fn reveal_hole(&mut self) -> Result<(), ActionError> {
        let dealer = &self.state.dealer_hand;
        if dealer.is_hole_revealed() || dealer.len() < 2 {
            return Err(ActionError::HoleAlreadyRevealed);
        }

        self.expose_hole();
        Ok(())
    }

    /// Dealer plays their hand and the round is settled.
    ///
    /// Drawing is skipped when every player hand has busted. Otherwise the
    /// dealer draws while policy says hit, stopping early at the configured
    /// draw limit.
    pub(super) fn dealer_play(&mut self) -> Result<(), ActionError> {
        self.require_phase(Phase::DealerTurn)?;
        self.expose_hole();

        if self.state.player_hands.iter().all(Hand::is_busted) {
            self.finish_round();
            return Ok(());
        }

        let hits_soft_17 = self.state.options.dealer_hits_soft_17;
        let limit = self.state.options.dealer_draw_limit;
        let mut draws: u8 = 0;

        while should_dealer_hit(self.state.dealer_hand.cards(), hits_soft_17) {
            if draws >= limit {
                let total = self.state.dealer_hand.value();
                tracing::warn!(limit, total, "dealer draw limit reached, standing");
                self.events.push(Event::DealerDrawLimitReached { total });
                break;
            }

            let card = self.draw(Recipient::Dealer);
            self.state.dealer_hand.add_card(card);
            draws += 1;
        }

        self.finish_round();
        Ok(())
    }

    /// Settles from whatever hands exist. Always accepted; a round that is
    /// already over stays as it is so the payout is never credited twice.
    pub(super) fn force_round_end(&mut self) -> Result<(), ActionError> {
        if self.state.phase == Phase::RoundEnd {
            return Ok(());
        }

        tracing::warn!(phase = ?self.state.phase, "forcing round end");
        self.expose_hole();
        self.finish_round();
        Ok(())
    }

    /// Settles the round, credits the payout, and enters `RoundEnd`.
    pub(super) fn finish_round(&mut self) {
        let result = settle(
            &self.state.dealer_hand,
            &self.state.player_hands,
            &self.state.options,
        );
        let total_payout = result.total_payout;

        self.state.balance += total_payout;
        self.state.active_hand_index = self.state.player_hands.len();
        self.state.round_result = Some(result);
        self.events.push(Event::RoundSettled { total_payout });
        self.enter(Phase::RoundEnd);
    }
}
