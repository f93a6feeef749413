//! Deck construction.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use log::{debug, trace};
use rand::Rng;

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::options::{self, Less};

/// A deck option: any function from a card sequence to a card sequence.
pub type DeckOption = Box<dyn FnMut(Vec<Card>) -> Vec<Card>>;

/// Creates `num_decks` standard decks back to back.
///
/// Each deck is suit-major (Club, Spade, Heart, Diamond) and rank-minor
/// (Ace through King).
fn create_base(num_decks: u8) -> Vec<Card> {
    let mut cards = Vec::with_capacity(usize::from(num_decks) * DECK_SIZE);

    for _ in 0..num_decks {
        for suit in Suit::STANDARD {
            for rank in Rank::ALL {
                cards.push(Card::new(suit, rank));
            }
        }
    }

    cards
}

fn apply<I>(mut cards: Vec<Card>, options: I) -> Vec<Card>
where
    I: IntoIterator,
    I::Item: FnMut(Vec<Card>) -> Vec<Card>,
{
    for (i, mut option) in options.into_iter().enumerate() {
        let before = cards.len();
        cards = option(cards);
        trace!("option {i}: {before} -> {} cards", cards.len());
    }
    cards
}

/// Builds a standard 52-card deck and applies `options` in order.
///
/// With no options the deck comes back in its base order: suit-major
/// (Club, Spade, Heart, Diamond), rank-minor (Ace through King). The output of
/// each option is fed to the next one unchecked.
///
/// # Example
///
/// ```
/// use deckrs::{DeckOption, build_deck, options};
///
/// let cards = build_deck([
///     Box::new(options::with_jokers(2)) as DeckOption,
///     Box::new(options::filter_out(|card| card.rank.value() > 10)) as DeckOption,
/// ]);
/// assert_eq!(cards.len(), 42);
/// ```
pub fn build_deck<I>(options: I) -> Vec<Card>
where
    I: IntoIterator,
    I::Item: FnMut(Vec<Card>) -> Vec<Card>,
{
    let cards = create_base(1);
    debug!("building deck from {} base cards", cards.len());
    apply(cards, options)
}

/// Builder for a deck with a chain of options.
///
/// Options run in the order they are added.
///
/// ```
/// use deckrs::{DeckBuilder, Suit};
///
/// let shoe = DeckBuilder::new()
///     .with_decks(6)
///     .with_jokers(2)
///     .shuffle_seeded(7)
///     .build();
/// assert_eq!(shoe.len(), 6 * 52 + 2);
/// assert_eq!(shoe.iter().filter(|card| card.suit == Suit::Joker).count(), 2);
/// ```
pub struct DeckBuilder {
    /// Number of base decks created before any option runs.
    pub decks: u8,
    /// Options in application order.
    options: Vec<DeckOption>,
}

impl Default for DeckBuilder {
    fn default() -> Self {
        Self {
            decks: 1,
            options: Vec::new(),
        }
    }
}

impl fmt::Debug for DeckBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckBuilder")
            .field("decks", &self.decks)
            .field("options", &self.options.len())
            .finish()
    }
}

impl DeckBuilder {
    /// Creates a builder for a single deck with no options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of base decks.
    ///
    /// The decks are concatenated before any option runs, so later jokers or
    /// filters apply to the whole shoe once. Compare [`Self::replicate`].
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let builder = DeckBuilder::new().with_decks(3);
    /// assert_eq!(builder.decks, 3);
    /// assert_eq!(builder.build().len(), 156);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Appends an arbitrary option.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckBuilder;
    ///
    /// let cards = DeckBuilder::new()
    ///     .with_option(|mut cards: Vec<_>| {
    ///         cards.reverse();
    ///         cards
    ///     })
    ///     .build();
    /// assert_eq!(cards[0].to_string(), "King of Diamonds");
    /// ```
    #[must_use]
    pub fn with_option<F>(mut self, option: F) -> Self
    where
        F: FnMut(Vec<Card>) -> Vec<Card> + 'static,
    {
        self.options.push(Box::new(option));
        self
    }

    /// Appends [`options::default_sort`].
    #[must_use]
    pub fn default_sort(self) -> Self {
        self.with_option(options::default_sort)
    }

    /// Appends [`options::sort_by`] with the given predicate factory.
    #[must_use]
    pub fn sort_by<F>(self, make_less: F) -> Self
    where
        F: FnMut(&[Card]) -> Less<'_> + 'static,
    {
        self.with_option(options::sort_by(make_less))
    }

    /// Appends [`options::shuffle`].
    #[cfg(feature = "std")]
    #[cfg_attr(docsrs, doc(cfg(feature = "std")))]
    #[must_use]
    pub fn shuffle(self) -> Self {
        self.with_option(options::shuffle)
    }

    /// Appends [`options::shuffle_with`] using `rng`.
    #[must_use]
    pub fn shuffle_with<R: Rng + 'static>(self, rng: R) -> Self {
        self.with_option(options::shuffle_with(rng))
    }

    /// Appends [`options::shuffle_seeded`].
    #[must_use]
    pub fn shuffle_seeded(self, seed: u64) -> Self {
        self.with_option(options::shuffle_seeded(seed))
    }

    /// Appends [`options::with_jokers`].
    #[must_use]
    pub fn with_jokers(self, n: u8) -> Self {
        self.with_option(options::with_jokers(n))
    }

    /// Appends [`options::filter_out`].
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{DeckBuilder, Suit};
    ///
    /// let cards = DeckBuilder::new()
    ///     .filter_out(|card| card.suit == Suit::Heart)
    ///     .build();
    /// assert_eq!(cards.len(), 39);
    /// ```
    #[must_use]
    pub fn filter_out<F>(self, predicate: F) -> Self
    where
        F: FnMut(&Card) -> bool + 'static,
    {
        self.with_option(options::filter_out(predicate))
    }

    /// Appends [`options::decks`], replicating the sequence built so far.
    #[must_use]
    pub fn replicate(self, n: u8) -> Self {
        self.with_option(options::decks(n))
    }

    /// Builds the base decks and applies the options in order.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        let cards = create_base(self.decks);
        debug!(
            "building {} deck(s), {} option(s)",
            self.decks,
            self.options.len()
        );
        apply(cards, self.options)
    }
}
