//! Game integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use shoebox::{
    Action, ActionError, Card, DECK_SIZE, Event, Game, GameOptions, GameState, HandOutcome, Money,
    Phase, Rank, Shoe, Suit, reduce, step,
};

const fn card(rank: Rank) -> Card {
    Card::of(rank, Suit::Hearts)
}

const fn units(amount: u64) -> Money {
    Money::from_units(amount)
}

fn stacked_state(options: GameOptions, balance: u64, draws: &[Rank]) -> GameState {
    let options = options.with_reshuffle_threshold(0);
    let draws: Vec<Card> = draws.iter().copied().map(card).collect();
    let shoe = Shoe::stacked(&draws, &options);
    GameState::with_shoe(options, units(balance), shoe)
}

fn stacked_game(options: GameOptions, balance: u64, draws: &[Rank]) -> Game {
    Game::from_state(stacked_state(options, balance, draws), 7)
}

fn place_and_deal(game: &Game, bet: u64) -> Vec<Event> {
    game.dispatch(Action::AddChip(units(bet))).unwrap();
    game.dispatch(Action::Deal).unwrap()
}

#[test]
fn fresh_six_deck_shoe_holds_312_cards() {
    let game = Game::new(GameOptions::default().with_decks(6), units(100), 1);
    assert_eq!(game.cards_remaining(), 312);
    assert_eq!(game.phase(), Phase::Idle);
}

#[test]
fn basic_round_flow() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[
            Rank::Eight, // player
            Rank::Six,   // dealer up
            Rank::Seven, // player
            Rank::Ten,   // dealer hole
            Rank::Four,  // player hit
            Rank::Five,  // dealer draw
        ],
    );

    place_and_deal(&game, 10);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.balance(), units(90));

    game.dispatch(Action::Hit).unwrap();
    assert_eq!(game.phase(), Phase::PlayerTurn);
    game.dispatch(Action::Stand).unwrap();
    assert_eq!(game.phase(), Phase::DealerTurn);

    let events = game.dispatch(Action::DealerPlay).unwrap();
    assert!(events.contains(&Event::HoleRevealed));
    assert_eq!(game.phase(), Phase::RoundEnd);

    let result = game.round_result().unwrap();
    assert_eq!(result.dealer_total, 21);
    assert_eq!(result.outcomes[0].outcome, HandOutcome::Lose);
    assert_eq!(game.balance(), units(90));
}

#[test]
fn out_of_phase_actions_leave_state_untouched() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    let state = GameState::new(GameOptions::default(), units(100), &mut rng);

    for action in [
        Action::Hit,
        Action::Stand,
        Action::Double,
        Action::Split,
        Action::Insurance(true),
        Action::DealerPlay,
        Action::RevealHole,
    ] {
        assert_eq!(reduce(&state, action, &mut rng), state);
    }
    assert_eq!(
        step(&state, Action::Hit, &mut rng).unwrap_err(),
        ActionError::InvalidState
    );
}

#[test]
fn chips_adjust_pending_bet() {
    let game = Game::new(GameOptions::default(), units(20), 3);

    assert_eq!(game.dispatch(Action::Deal).unwrap_err(), ActionError::ZeroBet);

    game.dispatch(Action::AddChip(units(5))).unwrap();
    game.dispatch(Action::AddChip(Money::from_cents(1_050))).unwrap();
    assert_eq!(game.pending_bet(), Money::from_cents(1_550));

    assert_eq!(
        game.dispatch(Action::AddChip(units(5))).unwrap_err(),
        ActionError::InsufficientFunds
    );

    game.dispatch(Action::UndoChip(units(5))).unwrap();
    assert_eq!(game.pending_bet(), Money::from_cents(1_050));
    game.dispatch(Action::UndoChip(units(50))).unwrap();
    assert_eq!(game.pending_bet(), Money::ZERO);

    game.dispatch(Action::AddChip(units(5))).unwrap();
    game.dispatch(Action::ClearBet).unwrap();
    assert_eq!(game.pending_bet(), Money::ZERO);
    assert_eq!(game.balance(), units(20));
}

#[test]
fn deal_rejects_bet_above_balance() {
    let game = Game::new(GameOptions::default(), units(20), 3);
    game.dispatch(Action::AddChip(units(20))).unwrap();
    game.dispatch(Action::SetBalance(units(10))).unwrap();

    let before = game.snapshot();
    assert_eq!(
        game.dispatch(Action::Deal).unwrap_err(),
        ActionError::InsufficientFunds
    );
    assert_eq!(game.snapshot(), before);
}

#[test]
fn natural_blackjack_settles_on_the_deal() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ace, Rank::Nine, Rank::King, Rank::Eight],
    );

    place_and_deal(&game, 10);
    assert_eq!(game.phase(), Phase::RoundEnd);
    assert!(game.snapshot().dealer_hole_revealed());

    let result = game.round_result().unwrap();
    assert_eq!(result.outcomes[0].outcome, HandOutcome::Blackjack);
    assert_eq!(result.outcomes[0].payout, units(25));
    assert_eq!(game.balance(), units(115));
}

#[test]
fn dealer_blackjack_with_ten_up_settles_on_the_deal() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Nine, Rank::King, Rank::Nine, Rank::Ace],
    );

    place_and_deal(&game, 10);
    assert_eq!(game.phase(), Phase::RoundEnd);
    assert_eq!(game.round_result().unwrap().outcomes[0].outcome, HandOutcome::Lose);
    assert_eq!(game.balance(), units(90));
}

#[test]
fn player_blackjack_against_ace_skips_insurance() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ace, Rank::Ace, Rank::Queen, Rank::King],
    );

    place_and_deal(&game, 10);
    assert_eq!(game.phase(), Phase::RoundEnd);

    let result = game.round_result().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.outcomes[0].outcome, HandOutcome::Push);
    assert_eq!(game.balance(), units(100));
}

#[test]
fn equal_totals_push() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Nine],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Stand).unwrap();
    game.dispatch(Action::DealerPlay).unwrap();

    let result = game.round_result().unwrap();
    assert_eq!(result.outcomes[0].outcome, HandOutcome::Push);
    assert_eq!(result.outcomes[0].payout, units(10));
    assert_eq!(game.balance(), units(100));
}

#[test]
fn dealer_bust_pays_even_money() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Four, Rank::King],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Stand).unwrap();
    game.dispatch(Action::DealerPlay).unwrap();

    let result = game.round_result().unwrap();
    assert!(result.dealer_bust);
    assert_eq!(result.dealer_total, 24);
    assert_eq!(result.outcomes[0].outcome, HandOutcome::Win);
    assert_eq!(result.outcomes[0].payout, units(20));
    assert_eq!(game.balance(), units(110));
}

#[test]
fn player_bust_skips_dealer_draws() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ten, Rank::Ten, Rank::Nine, Rank::Two, Rank::Five],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Hit).unwrap();
    assert_eq!(game.phase(), Phase::DealerTurn);
    assert_eq!(game.active_hand_index(), 1);

    let remaining = game.cards_remaining();
    game.dispatch(Action::DealerPlay).unwrap();
    assert_eq!(game.cards_remaining(), remaining);
    assert_eq!(game.snapshot().dealer_hand.len(), 2);

    let result = game.round_result().unwrap();
    assert_eq!(result.outcomes[0].outcome, HandOutcome::Lose);
    assert_eq!(result.outcomes[0].payout, Money::ZERO);
    assert_eq!(result.outcomes[0].player_total, 24);
    assert_eq!(game.balance(), units(90));
}

#[test]
fn insurance_pays_when_dealer_has_blackjack() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ten, Rank::Ace, Rank::Nine, Rank::King],
    );

    place_and_deal(&game, 10);
    assert_eq!(game.phase(), Phase::Insurance);

    let events = game.dispatch(Action::Insurance(true)).unwrap();
    assert!(events.contains(&Event::InsuranceTaken(units(5))));
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.balance(), units(85));
    assert!(!game.snapshot().dealer_hole_revealed());

    game.dispatch(Action::Stand).unwrap();
    game.dispatch(Action::DealerPlay).unwrap();

    let result = game.round_result().unwrap();
    assert_eq!(result.insurance_payout, units(15));
    assert_eq!(result.outcomes[0].outcome, HandOutcome::Lose);
    assert_eq!(result.outcomes[0].payout, Money::ZERO);
    assert_eq!(result.total_payout, units(15));
    assert_eq!(game.balance(), units(100));
}

#[test]
fn declined_insurance_costs_nothing() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ten, Rank::Ace, Rank::Nine, Rank::Seven],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Insurance(false)).unwrap();
    assert_eq!(game.balance(), units(90));
    assert_eq!(
        game.dispatch(Action::Insurance(true)).unwrap_err(),
        ActionError::InvalidState
    );

    game.dispatch(Action::Stand).unwrap();
    game.dispatch(Action::DealerPlay).unwrap();
    assert_eq!(game.round_result().unwrap().outcomes[0].outcome, HandOutcome::Win);
    assert_eq!(game.balance(), units(110));
}

#[test]
fn unaffordable_insurance_counts_as_declined() {
    let game = stacked_game(
        GameOptions::default(),
        10,
        &[Rank::Ten, Rank::Ace, Rank::Nine, Rank::Seven],
    );

    place_and_deal(&game, 10);
    assert_eq!(game.phase(), Phase::Insurance);
    assert_eq!(game.balance(), Money::ZERO);

    let events = game.dispatch(Action::Insurance(true)).unwrap();
    assert_eq!(events, vec![Event::PhaseChanged(Phase::PlayerTurn)]);
    assert_eq!(game.phase(), Phase::PlayerTurn);
    assert_eq!(game.balance(), Money::ZERO);
    assert_eq!(game.snapshot().player_hands[0].insurance_bet(), Money::ZERO);
}

#[test]
fn peeking_dealer_ends_round_after_insurance() {
    let game = stacked_game(
        GameOptions::default().with_dealer_peeks(true),
        100,
        &[Rank::Ten, Rank::Ace, Rank::Nine, Rank::Queen],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Insurance(true)).unwrap();
    assert_eq!(game.phase(), Phase::RoundEnd);
    assert!(game.snapshot().dealer_hole_revealed());
    assert_eq!(game.balance(), units(100));
}

#[test]
fn split_creates_two_independent_hands() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[
            Rank::Eight, // player
            Rank::Five,  // dealer up
            Rank::Eight, // player
            Rank::Nine,  // dealer hole
            Rank::Two,   // first split hand
            Rank::Three, // second split hand
            Rank::Ten,   // double on second hand
            Rank::King,  // dealer draw
        ],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Split).unwrap();

    let state = game.snapshot();
    assert_eq!(state.player_hands.len(), 2);
    assert_eq!(state.active_hand_index, 0);
    assert_eq!(state.player_hands[0].cards(), &[card(Rank::Eight), card(Rank::Two)]);
    assert_eq!(state.player_hands[1].cards(), &[card(Rank::Eight), card(Rank::Three)]);
    assert!(state.player_hands.iter().all(shoebox::Hand::is_from_split));
    assert_eq!(game.balance(), units(80));

    assert_eq!(game.dispatch(Action::Split).unwrap_err(), ActionError::CannotSplit);

    game.dispatch(Action::Stand).unwrap();
    assert_eq!(game.active_hand_index(), 1);
    assert_eq!(game.phase(), Phase::PlayerTurn);

    game.dispatch(Action::Double).unwrap();
    assert_eq!(game.phase(), Phase::DealerTurn);
    assert_eq!(game.balance(), units(70));

    let state = game.snapshot();
    assert!(state.player_hands[1].is_doubled());
    assert_eq!(state.player_hands[1].bet(), units(20));
    assert!(!state.player_hands[0].is_doubled());

    game.dispatch(Action::DealerPlay).unwrap();
    let result = game.round_result().unwrap();
    assert_eq!(result.outcomes.len(), 2);
    assert_eq!(result.outcomes[0].payout, units(20));
    assert_eq!(result.outcomes[1].payout, units(40));
    assert_eq!(game.balance(), units(130));
}

#[test]
fn split_hand_busts_independently() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[
            Rank::Eight, // player
            Rank::Seven, // dealer up
            Rank::Eight, // player
            Rank::Ten,   // dealer hole
            Rank::Nine,  // first split hand
            Rank::Three, // second split hand
            Rank::King,  // first hand busts
            Rank::Ten,   // second hand hits to 21
        ],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Split).unwrap();
    assert_eq!(game.balance(), units(80));

    game.dispatch(Action::Hit).unwrap();
    let state = game.snapshot();
    assert!(state.player_hands[0].is_busted());
    assert!(state.player_hands[1].is_active());
    assert_eq!(state.active_hand_index, 1);
    assert_eq!(state.phase, Phase::PlayerTurn);

    game.dispatch(Action::Hit).unwrap();
    assert_eq!(game.phase(), Phase::PlayerTurn);
    game.dispatch(Action::Stand).unwrap();
    assert_eq!(game.phase(), Phase::DealerTurn);

    game.dispatch(Action::DealerPlay).unwrap();
    let result = game.round_result().unwrap();
    assert_eq!(result.dealer_total, 17);
    assert_eq!(result.outcomes[0].outcome, HandOutcome::Lose);
    assert_eq!(result.outcomes[0].payout, Money::ZERO);
    assert_eq!(result.outcomes[1].outcome, HandOutcome::Win);
    assert_eq!(result.outcomes[1].player_total, 21);
    assert_eq!(result.outcomes[1].payout, units(20));
    assert_eq!(game.balance(), units(100));
}

#[test]
fn mixed_ten_values_can_split() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ten, Rank::Six, Rank::King, Rank::Ten, Rank::Ace, Rank::Two],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Split).unwrap();

    let state = game.snapshot();
    assert_eq!(state.player_hands[0].value(), 21);
    assert!(!state.player_hands[0].is_blackjack());
}

#[test]
fn double_requires_funds() {
    let game = stacked_game(
        GameOptions::default(),
        10,
        &[Rank::Five, Rank::Two, Rank::Six, Rank::Seven],
    );

    place_and_deal(&game, 10);
    let before = game.snapshot();
    assert_eq!(game.dispatch(Action::Double).unwrap_err(), ActionError::CannotDouble);
    assert_eq!(game.snapshot(), before);
}

#[test]
fn doubling_busts_and_finishes_the_hand() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ten, Rank::Nine, Rank::Six, Rank::Eight, Rank::King],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Double).unwrap();

    let state = game.snapshot();
    assert!(state.player_hands[0].is_busted());
    assert_eq!(state.phase, Phase::DealerTurn);
    assert_eq!(state.balance, units(80));
}

#[test]
fn reveal_hole_only_once() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ten, Rank::Nine, Rank::Six, Rank::Eight],
    );

    assert_eq!(
        game.dispatch(Action::RevealHole).unwrap_err(),
        ActionError::HoleAlreadyRevealed
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Stand).unwrap();
    assert_eq!(game.dispatch(Action::RevealHole).unwrap(), vec![Event::HoleRevealed]);
    assert_eq!(
        game.dispatch(Action::RevealHole).unwrap_err(),
        ActionError::HoleAlreadyRevealed
    );
    assert_eq!(game.phase(), Phase::DealerTurn);
}

#[test]
fn dealer_draw_limit_stops_play() {
    let game = stacked_game(
        GameOptions::default().with_dealer_draw_limit(2),
        100,
        &[Rank::Ten, Rank::Two, Rank::Nine, Rank::Two, Rank::Two, Rank::Two],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::Stand).unwrap();
    let events = game.dispatch(Action::DealerPlay).unwrap();

    assert!(events.contains(&Event::DealerDrawLimitReached { total: 8 }));
    assert_eq!(game.phase(), Phase::RoundEnd);
    assert_eq!(game.snapshot().dealer_hand.len(), 4);
    assert_eq!(game.round_result().unwrap().outcomes[0].outcome, HandOutcome::Win);
}

#[test]
fn dealer_soft_17_rule() {
    let draws = [Rank::Ten, Rank::Six, Rank::Nine, Rank::Ace, Rank::Two];

    let stands = stacked_game(GameOptions::default(), 100, &draws);
    place_and_deal(&stands, 10);
    stands.dispatch(Action::Stand).unwrap();
    stands.dispatch(Action::DealerPlay).unwrap();
    assert_eq!(stands.round_result().unwrap().dealer_total, 17);
    assert_eq!(stands.round_result().unwrap().outcomes[0].outcome, HandOutcome::Win);

    let hits = stacked_game(GameOptions::default().with_dealer_hits_soft_17(true), 100, &draws);
    place_and_deal(&hits, 10);
    hits.dispatch(Action::Stand).unwrap();
    hits.dispatch(Action::DealerPlay).unwrap();
    assert_eq!(hits.round_result().unwrap().dealer_total, 19);
    assert_eq!(hits.round_result().unwrap().outcomes[0].outcome, HandOutcome::Push);
}

#[test]
fn force_round_end_settles_once() {
    let game = stacked_game(
        GameOptions::default(),
        100,
        &[Rank::Ten, Rank::Seven, Rank::Nine, Rank::Ten],
    );

    place_and_deal(&game, 10);
    game.dispatch(Action::ForceRoundEnd).unwrap();
    assert_eq!(game.phase(), Phase::RoundEnd);
    assert!(game.snapshot().dealer_hole_revealed());
    assert_eq!(game.balance(), units(110));

    assert!(game.dispatch(Action::ForceRoundEnd).unwrap().is_empty());
    assert_eq!(game.balance(), units(110));
}

#[test]
fn force_round_end_before_any_deal() {
    let game = stacked_game(GameOptions::default(), 50, &[]);

    game.dispatch(Action::ForceRoundEnd).unwrap();
    assert_eq!(game.phase(), Phase::RoundEnd);

    let result = game.round_result().unwrap();
    assert!(result.outcomes.is_empty());
    assert_eq!(result.total_payout, Money::ZERO);
    assert_eq!(game.balance(), units(50));
}

#[test]
fn force_round_end_during_insurance() {
    let draws = [Rank::Ten, Rank::Ace, Rank::Nine, Rank::King];

    let undecided = stacked_game(GameOptions::default(), 100, &draws);
    place_and_deal(&undecided, 10);
    assert_eq!(undecided.phase(), Phase::Insurance);
    undecided.dispatch(Action::ForceRoundEnd).unwrap();

    let result = undecided.round_result().unwrap();
    assert!(result.dealer_blackjack);
    assert_eq!(result.insurance_payout, Money::ZERO);
    assert_eq!(result.outcomes[0].outcome, HandOutcome::Lose);
    assert_eq!(undecided.balance(), units(90));

    let insured = stacked_game(GameOptions::default(), 100, &draws);
    place_and_deal(&insured, 10);
    insured.dispatch(Action::Insurance(true)).unwrap();
    insured.dispatch(Action::ForceRoundEnd).unwrap();

    let result = insured.round_result().unwrap();
    assert_eq!(result.insurance_payout, units(15));
    assert_eq!(result.outcomes[0].outcome, HandOutcome::Lose);
    assert_eq!(insured.balance(), units(100));
}

#[test]
fn new_round_only_from_idle_or_round_end() {
    let game = Game::new(GameOptions::default().with_decks(1), units(100), 5);
    place_and_deal(&game, 10);

    if game.phase() != Phase::RoundEnd {
        assert_eq!(
            game.dispatch(Action::NewRound).unwrap_err(),
            ActionError::InvalidState
        );
        game.dispatch(Action::ForceRoundEnd).unwrap();
    }

    let events = game.dispatch(Action::NewRound).unwrap();
    assert!(events.contains(&Event::Reshuffled));
    assert!(events.contains(&Event::PhaseChanged(Phase::Idle)));

    let state = game.snapshot();
    assert_eq!(state.phase, Phase::Idle);
    assert!(state.player_hands.is_empty());
    assert!(state.dealer_hand.is_empty());
    assert!(state.round_result.is_none());
    assert_eq!(state.pending_bet, Money::ZERO);
    assert_eq!(state.shoe.len(), DECK_SIZE);
}

#[test]
fn depleted_stacked_shoe_reshuffles_mid_round() {
    let game = stacked_game(GameOptions::default().with_decks(2), 100, &[Rank::Two, Rank::Three]);

    let events = place_and_deal(&game, 10);
    assert_eq!(
        events.iter().filter(|event| **event == Event::Reshuffled).count(),
        1
    );
    assert_eq!(game.cards_remaining(), 2 * DECK_SIZE - 2);
}

#[test]
fn advisory_flags_follow_events() {
    let game = Game::new(GameOptions::default(), units(100), 9);

    game.dispatch(Action::SetProcessing(true)).unwrap();
    assert!(game.flags().processing);

    place_and_deal(&game, 10);
    assert!(game.flags().animating);

    game.dispatch(Action::AnimationComplete).unwrap();
    game.dispatch(Action::SetProcessing(false)).unwrap();
    assert!(!game.flags().animating);
    assert!(!game.flags().processing);
}

#[test]
fn concurrent_dispatches_fold_flags_in_order() {
    let game = Game::new(GameOptions::default(), units(100), 4);

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..200 {
                    game.dispatch(Action::SetProcessing(true)).unwrap();
                    game.dispatch(Action::SetProcessing(false)).unwrap();
                }
            });
        }
    });

    // every thread ends on `false`, so the last applied transition did too
    assert!(!game.flags().processing);
}

#[test]
fn same_seed_replays_the_same_round() {
    let play = |seed| {
        let game = Game::new(GameOptions::default(), units(100), seed);
        place_and_deal(&game, 10);
        game.snapshot()
    };
    assert_eq!(play(21), play(21));
}
