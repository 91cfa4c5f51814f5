//! The shared card shoe.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE};
use crate::options::GameOptions;

/// A card taken from the shoe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Drawn {
    /// The card.
    pub card: Card,
    /// Whether the shoe was replaced before this card was taken.
    pub reshuffled: bool,
}

/// An ordered pool of cards spanning one or more decks.
///
/// Every slot in the shoe has a distinct index (`0..decks * 52`), so cards
/// from different physical decks never share an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    /// Remaining cards; the next card to draw is the last element.
    cards: Vec<Card>,
    decks: u8,
    reshuffle_threshold: usize,
}

impl Shoe {
    /// Creates a freshly shuffled shoe for the given table options.
    pub fn new<R: Rng + ?Sized>(options: &GameOptions, rng: &mut R) -> Self {
        let mut shoe = Self {
            cards: Vec::new(),
            decks: options.decks.max(1),
            reshuffle_threshold: options.reshuffle_threshold,
        };
        shoe.reshuffle(rng);
        shoe
    }

    /// Creates a shoe that deals `draws` in order, front first.
    ///
    /// Once the stacked cards fall below the reshuffle threshold the shoe is
    /// replaced by a shuffled full shoe, as usual.
    #[must_use]
    pub fn stacked(draws: &[Card], options: &GameOptions) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            decks: options.decks.max(1),
            reshuffle_threshold: options.reshuffle_threshold,
        }
    }

    /// Replaces the contents with a uniformly shuffled full shoe.
    pub fn reshuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let total = self.capacity() as u16;
        self.cards.clear();
        self.cards.extend((0..total).map(Card::new));
        self.cards.shuffle(rng);
    }

    /// Returns whether the next draw will replace the shoe first.
    ///
    /// An empty shoe always needs reshuffling, whatever the threshold.
    #[must_use]
    pub fn needs_reshuffle(&self) -> bool {
        self.cards.is_empty() || self.cards.len() < self.reshuffle_threshold
    }

    /// Reshuffles if the shoe is depleted. Returns `true` if it did.
    pub fn reshuffle_if_needed<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.needs_reshuffle() {
            self.reshuffle(rng);
            true
        } else {
            false
        }
    }

    /// Draws the next card, reshuffling first if the shoe is depleted.
    ///
    /// A threshold above the shoe's capacity reshuffles before every draw.
    pub fn draw<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Drawn {
        let mut reshuffled = self.reshuffle_if_needed(rng);
        loop {
            if let Some(card) = self.cards.pop() {
                return Drawn { card, reshuffled };
            }
            // decks is at least one, so a refill always yields a card
            self.reshuffle(rng);
            reshuffled = true;
        }
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in a full shoe.
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.decks as usize * DECK_SIZE
    }

    /// Returns the remaining cards in draw order.
    pub fn remaining(&self) -> impl Iterator<Item = Card> + '_ {
        self.cards.iter().rev().copied()
    }
}
