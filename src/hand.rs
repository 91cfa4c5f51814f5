//! Hand evaluation and the player and dealer hand types.

use alloc::vec::Vec;

use crate::card::Card;
use crate::money::Money;

/// The evaluated total of a set of cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandTotal {
    /// Best total, with Aces counted as 1 where needed to stay at or under 21.
    pub total: u8,
    /// Whether an Ace is still counted as 11.
    pub soft: bool,
}

/// Computes the total of `cards`, converting soft Aces to hard as needed.
#[must_use]
pub fn hand_total(cards: &[Card]) -> HandTotal {
    let mut total: u8 = 0;
    let mut soft_aces: u8 = 0;

    for card in cards {
        if card.is_ace() {
            soft_aces += 1;
        }
        total = total.saturating_add(card.value());
    }

    while total > 21 && soft_aces > 0 {
        total -= 10;
        soft_aces -= 1;
    }

    HandTotal {
        total,
        soft: soft_aces > 0 && total <= 21,
    }
}

/// Returns whether `cards` are a two-card 21.
#[must_use]
pub fn is_blackjack(cards: &[Card]) -> bool {
    cards.len() == 2 && hand_total(cards).total == 21
}

/// Returns whether `cards` total more than 21.
#[must_use]
pub fn is_busted(cards: &[Card]) -> bool {
    hand_total(cards).total > 21
}

/// Hand status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandStatus {
    /// Hand can still take actions.
    Active,
    /// Player has stood (including after a double).
    Stood,
    /// Hand went over 21.
    Busted,
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
    status: HandStatus,
    bet: Money,
    doubled: bool,
    from_split: bool,
    insurance_bet: Money,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: Money) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            doubled: false,
            from_split: false,
            insurance_bet: Money::ZERO,
        }
    }

    /// Creates one half of a split: the kept card plus a fresh one.
    #[must_use]
    pub fn from_split(kept: Card, fresh: Card, bet: Money) -> Self {
        let mut hand = Self::new(bet);
        hand.from_split = true;
        hand.add_card(kept);
        hand.add_card(fresh);
        hand
    }

    /// Adds a card to the hand, marking it busted if it goes over 21.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
        if is_busted(&self.cards) {
            self.status = HandStatus::Busted;
        }
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns whether the hand can still take actions.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, HandStatus::Active)
    }

    /// Returns whether the player stood on the hand.
    #[must_use]
    pub const fn is_stood(&self) -> bool {
        matches!(self.status, HandStatus::Stood)
    }

    /// Returns whether the hand busted.
    #[must_use]
    pub const fn is_busted(&self) -> bool {
        matches!(self.status, HandStatus::Busted)
    }

    /// Marks the hand as stood, unless it already busted.
    pub const fn stand(&mut self) {
        if self.is_active() {
            self.status = HandStatus::Stood;
        }
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> Money {
        self.bet
    }

    /// Doubles the bet amount.
    pub const fn double_bet(&mut self) {
        self.bet = self.bet.times(2);
        self.doubled = true;
    }

    /// Returns whether the hand was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether this hand came from a split.
    #[must_use]
    pub const fn is_from_split(&self) -> bool {
        self.from_split
    }

    /// Returns the insurance side bet placed on this hand.
    #[must_use]
    pub const fn insurance_bet(&self) -> Money {
        self.insurance_bet
    }

    /// Records an insurance side bet.
    pub const fn set_insurance_bet(&mut self, amount: Money) {
        self.insurance_bet = amount;
    }

    /// Returns the best total of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_total(&self.cards).total
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        hand_total(&self.cards).soft
    }

    /// Returns whether the hand is a natural blackjack.
    ///
    /// A split hand that makes 21 with two cards is a plain 21.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        !self.from_split && is_blackjack(&self.cards)
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

/// The dealer's hand.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DealerHand {
    cards: Vec<Card>,
    hole_revealed: bool,
}

impl DealerHand {
    /// Creates a new empty dealer hand.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cards: Vec::new(),
            hole_revealed: false,
        }
    }

    /// Adds a card to the hand.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns all cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the visible card (first card).
    #[must_use]
    pub fn up_card(&self) -> Option<Card> {
        self.cards.first().copied()
    }

    /// Returns whether the hole card is revealed.
    #[must_use]
    pub const fn is_hole_revealed(&self) -> bool {
        self.hole_revealed
    }

    /// Reveals the hole card.
    pub const fn reveal_hole(&mut self) {
        self.hole_revealed = true;
    }

    /// Calculates the visible value (only the up card while the hole is hidden).
    #[must_use]
    pub fn visible_value(&self) -> u8 {
        if self.hole_revealed {
            self.value()
        } else {
            self.up_card().map_or(0, Card::value)
        }
    }

    /// Calculates the full value of the hand.
    #[must_use]
    pub fn value(&self) -> u8 {
        hand_total(&self.cards).total
    }

    /// Returns whether the hand is soft.
    #[must_use]
    pub fn is_soft(&self) -> bool {
        hand_total(&self.cards).soft
    }

    /// Returns whether the hand is a blackjack.
    #[must_use]
    pub fn is_blackjack(&self) -> bool {
        is_blackjack(&self.cards)
    }

    /// Returns whether the hand is bust.
    #[must_use]
    pub fn is_bust(&self) -> bool {
        is_busted(&self.cards)
    }

    /// Returns the number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
