//! A playing-card deck builder with optional `no_std` support.
//!
//! The crate provides the [`Card`] model and [`build_deck`], which creates a
//! standard 52-card deck and runs it through an ordered list of options such
//! as sorting, shuffling, adding jokers, filtering, or replicating it into a
//! multi-deck shoe.
//!
//! # Example
//!
//! ```
//! use deckrs::{DeckBuilder, Rank};
//!
//! let cards = DeckBuilder::new()
//!     .with_jokers(2)
//!     .filter_out(|card| card.rank == Rank::TWO)
//!     .shuffle_seeded(42)
//!     .build();
//! assert_eq!(cards.len(), 50);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit};
pub use deck::{DeckBuilder, DeckOption, build_deck};
pub use error::{ParseCardError, RankError};
