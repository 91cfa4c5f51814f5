//! Table configuration options.

use crate::card::DECK_SIZE;

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    Down,
    /// Round to nearest.
    Nearest,
}

/// Configuration options for a blackjack table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoebox::GameOptions;
///
/// let options = GameOptions::default()
///     .with_decks(6)
///     .with_blackjack_pays(1.5)
///     .with_dealer_hits_soft_17(true);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct GameOptions {
    /// Number of decks in the shoe.
    pub decks: u8,
    /// Remaining card count below which the shoe is replaced before a draw.
    pub reshuffle_threshold: usize,
    /// Whether the dealer hits a soft 17.
    pub dealer_hits_soft_17: bool,
    /// Blackjack payout ratio (typically 1.5).
    pub blackjack_pays: f64,
    /// Rounding mode for blackjack winnings.
    pub rounding_blackjack: RoundingMode,
    /// Rounding mode for the half-stake insurance bet.
    pub rounding_insurance: RoundingMode,
    /// Maximum cards the dealer draws in one turn.
    pub dealer_draw_limit: u8,
    /// Whether a dealer blackjack ends the round right after the insurance decision.
    pub dealer_peeks: bool,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            decks: 6,
            reshuffle_threshold: DECK_SIZE,
            dealer_hits_soft_17: false,
            blackjack_pays: 1.5,
            rounding_blackjack: RoundingMode::Nearest,
            rounding_insurance: RoundingMode::Nearest,
            dealer_draw_limit: 10,
            dealer_peeks: false,
        }
    }
}

impl GameOptions {
    /// Sets the number of decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_decks(8);
    /// assert_eq!(options.decks, 8);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the reshuffle threshold.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_reshuffle_threshold(78);
    /// assert_eq!(options.reshuffle_threshold, 78);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets whether the dealer hits a soft 17.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_hits_soft_17(true);
    /// assert!(options.dealer_hits_soft_17);
    /// ```
    #[must_use]
    pub const fn with_dealer_hits_soft_17(mut self, hits: bool) -> Self {
        self.dealer_hits_soft_17 = hits;
        self
    }

    /// Sets the blackjack payout ratio.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_blackjack_pays(1.2);
    /// assert_eq!(options.blackjack_pays, 1.2);
    /// ```
    #[must_use]
    pub const fn with_blackjack_pays(mut self, ratio: f64) -> Self {
        self.blackjack_pays = ratio;
        self
    }

    /// Sets the rounding mode for blackjack winnings.
    #[must_use]
    pub const fn with_rounding_blackjack(mut self, mode: RoundingMode) -> Self {
        self.rounding_blackjack = mode;
        self
    }

    /// Sets the rounding mode for insurance stakes.
    #[must_use]
    pub const fn with_rounding_insurance(mut self, mode: RoundingMode) -> Self {
        self.rounding_insurance = mode;
        self
    }

    /// Sets the dealer draw limit.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_draw_limit(4);
    /// assert_eq!(options.dealer_draw_limit, 4);
    /// ```
    #[must_use]
    pub const fn with_dealer_draw_limit(mut self, limit: u8) -> Self {
        self.dealer_draw_limit = limit;
        self
    }

    /// Sets whether the dealer peeks for blackjack after insurance.
    ///
    /// # Example
    ///
    /// ```
    /// use shoebox::GameOptions;
    ///
    /// let options = GameOptions::default().with_dealer_peeks(true);
    /// assert!(options.dealer_peeks);
    /// ```
    #[must_use]
    pub const fn with_dealer_peeks(mut self, peeks: bool) -> Self {
        self.dealer_peeks = peeks;
        self
    }
}
