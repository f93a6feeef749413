//! Standard deck options.
//!
//! Every option maps a card sequence to a new card sequence. Plain functions
//! such as [`default_sort`] are options themselves; the rest are constructors
//! returning a closure.
//!
//! Options apply strictly in the order given, so their order matters. For
//! example, [`with_jokers`] followed by [`decks`] duplicates the jokers, while
//! the reverse order adds them once to the whole shoe.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::Rng;
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::Card;

/// A less-than predicate over indices into a card sequence.
pub type Less<'a> = Box<dyn Fn(usize, usize) -> bool + 'a>;

/// Sorts the cards by ascending [`Card::absolute_rank`].
///
/// The sort is stable. Jokers have no rank order of their own; they sort after
/// the standard cards, except that joker 0 shares its key with the King of
/// Diamonds and keeps its input position relative to it.
///
/// # Example
///
/// ```
/// use deckrs::{Card, Rank, Suit, build_deck, options};
///
/// let cards = build_deck([Box::new(options::default_sort) as deckrs::DeckOption]);
/// assert_eq!(cards[0], Card::new(Suit::Club, Rank::ACE));
/// ```
#[must_use]
pub fn default_sort(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(Card::absolute_rank);
    cards
}

/// Returns the default less-than predicate over indices of `cards`.
///
/// Compares [`Card::absolute_rank`], so `sort_by(less)` orders like
/// [`default_sort`].
#[must_use]
pub fn less(cards: &[Card]) -> Less<'_> {
    Box::new(move |i, j| cards[i].absolute_rank() < cards[j].absolute_rank())
}

/// Sorts the cards with a caller-built less-than predicate.
///
/// `make_less` receives the current sequence and returns a predicate over
/// indices into it, so the predicate can look cards up by position. The sort
/// is stable.
///
/// # Example
///
/// ```
/// use deckrs::{DeckBuilder, Rank};
///
/// // Kings first, then descending.
/// let cards = DeckBuilder::new()
///     .sort_by(|cards| Box::new(move |i, j| cards[i].rank > cards[j].rank))
///     .build();
/// assert_eq!(cards[0].rank, Rank::KING);
/// assert_eq!(cards[51].rank, Rank::ACE);
/// ```
#[must_use]
pub fn sort_by<F>(mut make_less: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: FnMut(&[Card]) -> Less<'_>,
{
    move |cards| {
        let mut order: Vec<usize> = (0..cards.len()).collect();
        {
            let less = make_less(cards.as_slice());
            order.sort_by(|&i, &j| {
                if less(i, j) {
                    Ordering::Less
                } else if less(j, i) {
                    Ordering::Greater
                } else {
                    Ordering::Equal
                }
            });
        }
        order.into_iter().map(|i| cards[i]).collect()
    }
}

/// Shuffles the cards with a generator freshly seeded from OS entropy.
///
/// The resulting order is not reproducible. Use [`shuffle_with`] or
/// [`shuffle_seeded`] when it has to be.
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
#[must_use]
pub fn shuffle(mut cards: Vec<Card>) -> Vec<Card> {
    let mut rng = ChaCha8Rng::from_os_rng();
    cards.shuffle(&mut rng);
    cards
}

/// Shuffles the cards with the given random source.
///
/// The option owns `rng`; applying it again continues the same stream.
#[must_use]
pub fn shuffle_with<R: Rng>(mut rng: R) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |mut cards| {
        cards.shuffle(&mut rng);
        cards
    }
}

/// Shuffles the cards with a ChaCha8 generator seeded from `seed`.
///
/// # Example
///
/// ```
/// use deckrs::DeckBuilder;
///
/// let a = DeckBuilder::new().shuffle_seeded(42).build();
/// let b = DeckBuilder::new().shuffle_seeded(42).build();
/// assert_eq!(a, b);
/// ```
#[must_use]
pub fn shuffle_seeded(seed: u64) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    shuffle_with(ChaCha8Rng::seed_from_u64(seed))
}

/// Appends `n` jokers to the end of the cards.
///
/// Each joker gets a distinct index (`0..n`) as its rank.
#[must_use]
pub fn with_jokers(n: u8) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |mut cards| {
        cards.extend((0..n).map(Card::joker));
        cards
    }
}

/// Removes every card for which `predicate` returns `true`.
///
/// Remaining cards keep their relative order.
#[must_use]
pub fn filter_out<F>(mut predicate: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: FnMut(&Card) -> bool,
{
    move |mut cards| {
        cards.retain(|card| !predicate(card));
        cards
    }
}

/// Concatenates `n` copies of the cards it receives.
///
/// Replicates whatever the previous options produced, jokers and filtering
/// included. To replicate only the base deck, use
/// [`DeckBuilder::with_decks`](crate::DeckBuilder::with_decks).
#[must_use]
pub fn decks(n: u8) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |cards| {
        let mut shoe = Vec::with_capacity(cards.len() * usize::from(n));
        for _ in 0..n {
            shoe.extend_from_slice(&cards);
        }
        shoe
    }
}
