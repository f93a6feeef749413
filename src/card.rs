//! Card types and their ordering.

use core::fmt;
use core::str::FromStr;

use crate::error::{ParseCardError, RankError};

/// Card suit.
///
/// Variants are declared in sort order; [`Suit::Joker`] is a sentinel that
/// never appears in a standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Clubs.
    Club,
    /// Spades.
    Spade,
    /// Hearts.
    Heart,
    /// Diamonds.
    Diamond,
    /// Joker, only added through [`with_jokers`](crate::options::with_jokers).
    Joker,
}

impl Suit {
    /// Standard suits in deck order.
    pub const STANDARD: [Self; 4] = [Self::Club, Self::Spade, Self::Heart, Self::Diamond];

    /// Returns the ordinal of the suit (0 = Club, 4 = Joker).
    #[must_use]
    pub const fn index(self) -> u8 {
        self as u8
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Club => "Club",
            Self::Spade => "Spade",
            Self::Heart => "Heart",
            Self::Diamond => "Diamond",
            Self::Joker => "Joker",
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [Self::Club, Self::Spade, Self::Heart, Self::Diamond, Self::Joker]
            .into_iter()
            .find(|suit| suit.name().eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::UnknownSuit)
    }
}

const RANK_NAMES: [&str; 14] = [
    "", "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack",
    "Queen", "King",
];

/// Card rank.
///
/// Standard ranks run from [`Rank::ACE`] (1) to [`Rank::KING`] (13). Zero is
/// reserved. Joker cards reuse the rank as an index (`0..n`) to tell jokers
/// apart. Indices 1 through 13 coincide with standard ranks, so a joker's rank
/// compares equal to, and displays like, the matching standard rank; check
/// [`Card::is_joker`] before reading meaning into it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rank(u8);

impl Rank {
    /// Ace.
    pub const ACE: Self = Self(1);
    /// Two.
    pub const TWO: Self = Self(2);
    /// Three.
    pub const THREE: Self = Self(3);
    /// Four.
    pub const FOUR: Self = Self(4);
    /// Five.
    pub const FIVE: Self = Self(5);
    /// Six.
    pub const SIX: Self = Self(6);
    /// Seven.
    pub const SEVEN: Self = Self(7);
    /// Eight.
    pub const EIGHT: Self = Self(8);
    /// Nine.
    pub const NINE: Self = Self(9);
    /// Ten.
    pub const TEN: Self = Self(10);
    /// Jack.
    pub const JACK: Self = Self(11);
    /// Queen.
    pub const QUEEN: Self = Self(12);
    /// King.
    pub const KING: Self = Self(13);

    /// Lowest standard rank.
    pub const MIN: Self = Self::ACE;
    /// Highest standard rank.
    pub const MAX: Self = Self::KING;

    /// Standard ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::ACE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
        Self::SEVEN,
        Self::EIGHT,
        Self::NINE,
        Self::TEN,
        Self::JACK,
        Self::QUEEN,
        Self::KING,
    ];

    /// Returns the numeric value (1 = Ace, 13 = King).
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns whether this is one of the 13 standard ranks.
    #[must_use]
    pub const fn is_standard(self) -> bool {
        self.0 >= Self::MIN.0 && self.0 <= Self::MAX.0
    }
}

impl TryFrom<u8> for Rank {
    type Error = RankError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        let rank = Self(value);
        if rank.is_standard() {
            Ok(rank)
        } else {
            Err(RankError::OutOfRange(value))
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_standard() {
            f.write_str(RANK_NAMES[usize::from(self.0)])
        } else {
            write!(f, "Rank({})", self.0)
        }
    }
}

impl FromStr for Rank {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|rank| RANK_NAMES[usize::from(rank.0)].eq_ignore_ascii_case(s))
            .ok_or(ParseCardError::UnknownRank)
    }
}

/// A playing card.
///
/// Equality is structural. The derived ordering is suit-major, rank-minor,
/// which agrees with [`Card::absolute_rank`] on standard cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card. For jokers this is only a differentiator.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates the joker with the given index.
    ///
    /// Jokers with different indices compare unequal, which keeps several
    /// jokers in one deck distinguishable. The index is stored as the rank, so
    /// `Card::joker(2).rank == Rank::TWO` and rank-based predicates match it.
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self {
            suit: Suit::Joker,
            rank: Rank(index),
        }
    }

    /// Returns whether the card is a joker.
    #[must_use]
    pub const fn is_joker(&self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Sort key combining suit and rank: `suit * 13 + rank`.
    ///
    /// Total over standard cards. Not used for identity. Jokers are not ranked:
    /// `Card::joker(i)` gets key `52 + i`, so joker 0 ties with the King of
    /// Diamonds.
    #[must_use]
    pub fn absolute_rank(&self) -> u16 {
        u16::from(self.suit.index()) * u16::from(Rank::MAX.0) + u16::from(self.rank.0)
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return write!(f, "{}", self.suit);
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    /// Parses the [`Display`](fmt::Display) form of a card.
    ///
    /// `"Joker"` parses to `Card::joker(0)`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(Suit::Joker.name()) {
            return Ok(Self::joker(0));
        }

        let (rank, suit) = s.split_once(" of ").ok_or(ParseCardError::Malformed)?;
        let suit = suit
            .strip_suffix('s')
            .ok_or(ParseCardError::Malformed)?
            .parse::<Suit>()?;
        if suit == Suit::Joker {
            return Err(ParseCardError::UnknownSuit);
        }

        Ok(Self::new(suit, rank.parse()?))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
