//! Error types for card conversions.

use thiserror::Error;

/// Errors that can occur when parsing a card, suit, or rank from text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// Text is not of the form `<Rank> of <Suit>s` or `Joker`.
    #[error("expected `<rank> of <suit>s` or `Joker`")]
    Malformed,
    /// Rank name not recognized.
    #[error("unknown rank name")]
    UnknownRank,
    /// Suit name not recognized.
    #[error("unknown suit name")]
    UnknownSuit,
}

/// Errors that can occur when converting a number into a [`Rank`](crate::Rank).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RankError {
    /// Value is outside `1..=13`.
    #[error("rank {0} is outside 1..=13")]
    OutOfRange(u8),
}
