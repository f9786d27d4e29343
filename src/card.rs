//! Card types and rank/suit derivation.

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of ranks per suit.
pub const RANKS: u8 = 13;

/// Number of pairs that must be found to clear the deck.
pub const PAIR_COUNT: usize = DECK_SIZE / 2;

/// Card suit.
///
/// Suits are cosmetic: matching only looks at the rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Diamonds (indices 0..13).
    Diamonds,
    /// Hearts (indices 13..26).
    Hearts,
    /// Spades (indices 26..39).
    Spades,
    /// Clubs (indices 39..52).
    Clubs,
}

impl Suit {
    /// All suits in index order.
    pub const ALL: [Self; 4] = [Self::Diamonds, Self::Hearts, Self::Spades, Self::Clubs];

    /// Returns the Unicode glyph used by text front-ends.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Diamonds => '\u{2666}',
            Self::Hearts => '\u{2665}',
            Self::Spades => '\u{2660}',
            Self::Clubs => '\u{2663}',
        }
    }

    /// Returns the suit name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Diamonds => "Diamonds",
            Self::Hearts => "Hearts",
            Self::Spades => "Spades",
            Self::Clubs => "Clubs",
        }
    }
}

/// A playing card, identified by its index in `0..52`.
///
/// The index fully determines the card: the rank is `index % 13` and the
/// suit is `index / 13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Card(u8);

impl Card {
    /// Creates a card from its index.
    ///
    /// Returns `None` if the index is not below [`DECK_SIZE`].
    #[must_use]
    pub const fn new(index: u8) -> Option<Self> {
        if (index as usize) < DECK_SIZE {
            Some(Self(index))
        } else {
            None
        }
    }

    /// Returns the card index.
    #[must_use]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the rank (0..=12).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 % RANKS
    }

    /// Returns the rank as shown on the card face (1..=13).
    #[must_use]
    pub const fn display_rank(self) -> u8 {
        self.rank() + 1
    }

    /// Returns the suit.
    #[must_use]
    pub const fn suit(self) -> Suit {
        Suit::ALL[(self.0 / RANKS) as usize]
    }

    /// Returns whether two cards share a rank.
    #[must_use]
    pub const fn matches(self, other: Self) -> bool {
        self.rank() == other.rank()
    }
}
