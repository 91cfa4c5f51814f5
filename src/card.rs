//! Card types.
//!
//! A card is identified by its slot in the shoe: an index into a cycle of
//! [`DECK_SIZE`] values. Rank, suit, and blackjack value are all derived
//! from that index, so two physical decks never disagree about what a card is.

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

const RANKS_PER_SUIT: u16 = 13;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Hearts.
    Hearts,
    /// Diamonds.
    Diamonds,
    /// Clubs.
    Clubs,
    /// Spades.
    Spades,
}

impl Suit {
    const ALL: [Self; 4] = [Self::Hearts, Self::Diamonds, Self::Clubs, Self::Spades];

    const fn position(self) -> u16 {
        match self {
            Self::Hearts => 0,
            Self::Diamonds => 1,
            Self::Clubs => 2,
            Self::Spades => 3,
        }
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Blackjack value of the rank, counting an Ace as 11.
    #[must_use]
    pub const fn value(self) -> u8 {
        match self {
            Self::Ace => 11,
            Self::Ten | Self::Jack | Self::Queen | Self::King => 10,
            other => other as u8 + 1,
        }
    }
}

/// A playing card, identified by its index into the shoe's card cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    index: u16,
}

impl Card {
    /// Creates a card from its index.
    ///
    /// Any index is accepted; indices past the first deck wrap around the
    /// 52-card cycle.
    #[must_use]
    pub const fn new(index: u16) -> Self {
        Self { index }
    }

    /// Creates the first-deck card with the given rank and suit.
    #[must_use]
    pub const fn of(rank: Rank, suit: Suit) -> Self {
        Self::new(suit.position() * RANKS_PER_SUIT + rank as u16)
    }

    /// Returns the raw index of the card.
    #[must_use]
    pub const fn index(self) -> u16 {
        self.index
    }

    /// Returns the rank (`index mod 13`, 0 = Ace).
    #[must_use]
    pub const fn rank(self) -> Rank {
        Rank::ALL[(self.index % RANKS_PER_SUIT) as usize]
    }

    /// Returns the suit (`index / 13 mod 4`).
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.index / RANKS_PER_SUIT % 4) as usize]
    }

    /// Returns the blackjack value (Ace = 11, faces = 10).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.rank().value()
    }

    /// Returns whether the card is an Ace.
    #[must_use]
    pub const fn is_ace(self) -> bool {
        matches!(self.rank(), Rank::Ace)
    }
}
