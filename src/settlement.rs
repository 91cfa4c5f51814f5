//! Payout calculation for a finished round.

use alloc::vec::Vec;

use crate::hand::{DealerHand, Hand};
use crate::money::Money;
use crate::options::GameOptions;
use crate::result::{HandOutcome, HandResult, RoundResult};

/// Insurance pays 2:1, so a winning side bet returns three times its stake.
const INSURANCE_RETURN: u64 = 3;

/// Settles every player hand against the dealer's final hand.
///
/// Insurance resolves first and independently of the main bets: it returns
/// `insurance_bet * 3` when the dealer has blackjack and nothing otherwise.
/// Each hand is then judged in this order:
///
/// 1. a busted player loses, whatever the dealer holds;
/// 2. a natural blackjack beats any dealer hand except a blackjack (3:2 by default);
/// 3. a dealer blackjack beats any player hand that is not a blackjack;
/// 4. a busted dealer loses to every standing hand;
/// 5. otherwise the higher total wins and equal totals push.
#[must_use]
pub fn settle(dealer: &DealerHand, hands: &[Hand], options: &GameOptions) -> RoundResult {
    let dealer_total = dealer.value();
    let dealer_bust = dealer.is_bust();
    let dealer_blackjack = dealer.is_blackjack();

    let insurance_payout = if dealer_blackjack {
        hands
            .iter()
            .map(|hand| hand.insurance_bet().times(INSURANCE_RETURN))
            .sum::<Money>()
    } else {
        Money::ZERO
    };

    let outcomes: Vec<HandResult> = hands
        .iter()
        .enumerate()
        .map(|(hand_index, hand)| {
            let bet = hand.bet();
            let player_total = hand.value();

            let (outcome, payout) = if hand.is_busted() {
                (HandOutcome::Lose, Money::ZERO)
            } else if hand.is_blackjack() && !dealer_blackjack {
                let winnings = bet.scale(options.blackjack_pays, options.rounding_blackjack);
                (HandOutcome::Blackjack, bet + winnings)
            } else if dealer_blackjack && !hand.is_blackjack() {
                (HandOutcome::Lose, Money::ZERO)
            } else if dealer_bust || player_total > dealer_total {
                (HandOutcome::Win, bet.times(2))
            } else if player_total < dealer_total {
                (HandOutcome::Lose, Money::ZERO)
            } else {
                (HandOutcome::Push, bet)
            };

            HandResult {
                hand_index,
                outcome,
                bet,
                payout,
                player_total,
                dealer_total,
            }
        })
        .collect();

    let total_payout = outcomes.iter().map(|result| result.payout).sum::<Money>() + insurance_payout;

    RoundResult {
        outcomes,
        total_payout,
        insurance_payout,
        dealer_total,
        dealer_bust,
        dealer_blackjack,
    }
}
