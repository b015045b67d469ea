//! Cards, suits, and rank constants.

use core::fmt;

/// Card suit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in deck-building order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the suit symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Clubs => '♣',
            Self::Diamonds => '♦',
            Self::Hearts => '♥',
            Self::Spades => '♠',
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Clubs => "clubs",
            Self::Diamonds => "diamonds",
            Self::Hearts => "hearts",
            Self::Spades => "spades",
        };
        f.write_str(name)
    }
}

/// Rank of a jack.
pub const JACK: u8 = 11;
/// Rank of a queen.
pub const QUEEN: u8 = 12;
/// Rank of a king.
pub const KING: u8 = 13;
/// Rank of an ace. Aces are high.
pub const ACE: u8 = 14;

/// A playing card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card (2..=10, 11 = Jack, 12 = Queen, 13 = King, 14 = Ace).
    pub rank: u8,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank. Values outside 2..=14
    /// are accepted but never appear in a standard deck.
    #[must_use]
    pub const fn new(suit: Suit, rank: u8) -> Self {
        Self { suit, rank }
    }

    /// Returns whether the card belongs to the given suit.
    #[must_use]
    pub fn is_suit(&self, suit: Suit) -> bool {
        self.suit == suit
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.rank {
            JACK => write!(f, "J{}", self.suit.symbol()),
            QUEEN => write!(f, "Q{}", self.suit.symbol()),
            KING => write!(f, "K{}", self.suit.symbol()),
            ACE => write!(f, "A{}", self.suit.symbol()),
            rank => write!(f, "{rank}{}", self.suit.symbol()),
        }
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Number of cards dealt to each player, which is also the number of tricks in a hand.
pub const HAND_SIZE: usize = 5;
