//! Card model integration tests.

use deckrs::{Card, ParseCardError, Rank, RankError, Suit, build_deck};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn display_names() {
    assert_eq!(card(Suit::Spade, Rank::KING).to_string(), "King of Spades");
    assert_eq!(card(Suit::Diamond, Rank::ACE).to_string(), "Ace of Diamonds");
    assert_eq!(card(Suit::Heart, Rank::SEVEN).to_string(), "Seven of Hearts");
    assert_eq!(card(Suit::Spade, Rank::FOUR).to_string(), "Four of Spades");
    assert_eq!(card(Suit::Club, Rank::KING).to_string(), "King of Clubs");
    assert_eq!(Card::joker(0).to_string(), "Joker");
    assert_eq!(Card::joker(5).to_string(), "Joker");
}

#[test]
fn joker_index_is_stored_as_the_rank() {
    let zero = Card::joker(0);
    assert!(zero.is_joker());
    assert!(!zero.rank.is_standard());
    assert_eq!(zero.rank.to_string(), "Rank(0)");

    let three = Card::joker(3);
    assert!(three.is_joker());
    assert_eq!(three.rank, Rank::THREE);
    assert!(three.rank.is_standard());
    assert_eq!(three.rank.to_string(), "Three");
    assert_eq!(three.to_string(), "Joker");

    assert_eq!(Card::joker(20).rank.to_string(), "Rank(20)");
    assert_ne!(Card::joker(0), Card::joker(1));
    assert_ne!(three, card(Suit::Club, Rank::THREE));
}

#[test]
fn absolute_rank_is_suit_major() {
    assert_eq!(card(Suit::Club, Rank::ACE).absolute_rank(), 1);
    assert_eq!(card(Suit::Club, Rank::KING).absolute_rank(), 13);
    assert_eq!(card(Suit::Spade, Rank::ACE).absolute_rank(), 14);
    assert_eq!(card(Suit::Diamond, Rank::KING).absolute_rank(), 52);
}

#[test]
fn absolute_rank_is_a_total_order_on_standard_cards() {
    let mut keys: Vec<u16> = build_deck(Vec::<deckrs::DeckOption>::new())
        .iter()
        .map(Card::absolute_rank)
        .collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), 52);
}

#[test]
fn derived_order_matches_absolute_rank() {
    let a = card(Suit::Club, Rank::KING);
    let b = card(Suit::Spade, Rank::ACE);
    assert!(a < b);
    assert!(a.absolute_rank() < b.absolute_rank());
    assert!(card(Suit::Diamond, Rank::KING) < Card::joker(0));
}

#[test]
fn rank_conversion() {
    assert_eq!(Rank::try_from(1), Ok(Rank::ACE));
    assert_eq!(Rank::try_from(13), Ok(Rank::KING));
    assert_eq!(Rank::try_from(0), Err(RankError::OutOfRange(0)));
    assert_eq!(Rank::try_from(14), Err(RankError::OutOfRange(14)));
    assert_eq!(Rank::QUEEN.value(), 12);
    assert_eq!(Rank::MIN, Rank::ACE);
    assert_eq!(Rank::MAX, Rank::KING);
}

#[test]
fn parse_round_trips_every_standard_card() {
    for card in build_deck(Vec::<deckrs::DeckOption>::new()) {
        assert_eq!(card.to_string().parse::<Card>(), Ok(card));
    }
    assert_eq!("Joker".parse::<Card>(), Ok(Card::joker(0)));
    assert_eq!(" queen of hearts ".parse::<Card>(), Ok(card(Suit::Heart, Rank::QUEEN)));
}

#[test]
fn parse_errors() {
    assert_eq!("King".parse::<Card>(), Err(ParseCardError::Malformed));
    assert_eq!("King of Spade".parse::<Card>(), Err(ParseCardError::Malformed));
    assert_eq!("Knight of Spades".parse::<Card>(), Err(ParseCardError::UnknownRank));
    assert_eq!("King of Cups".parse::<Card>(), Err(ParseCardError::UnknownSuit));
    assert_eq!("Two of Jokers".parse::<Card>(), Err(ParseCardError::UnknownSuit));
    assert_eq!("Star".parse::<Suit>(), Err(ParseCardError::UnknownSuit));
    assert_eq!("Heart".parse::<Suit>(), Ok(Suit::Heart));
    assert_eq!("ten".parse::<Rank>(), Ok(Rank::TEN));
}
